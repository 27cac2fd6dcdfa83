// src/tests/common.rs

//! Common test data for other test modules.

#![allow(non_upper_case_globals)]

use crate::data::datetime::FixedOffset;

extern crate lazy_static;
use lazy_static::lazy_static;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// FixedOffsets
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

lazy_static! {
    /// fixedoffset for UTC
    pub static ref FO_0: FixedOffset = FixedOffset::east_opt(0).unwrap();
    /// fixedoffset for +01:00
    pub static ref FO_P1: FixedOffset = FixedOffset::east_opt(3600).unwrap();
    /// fixedoffset for -08:00 (PST)
    pub static ref FO_M8: FixedOffset = FixedOffset::west_opt(3600 * 8).unwrap();
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// log line and log file data
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// apache-style line, no syslog prefix, matches "foo"
pub const LINE_FOO: &str = "A - - [01/Jan/2020:00:00:00 +0000] foo\n";
/// apache-style line, no syslog prefix, matches "bar", ten seconds after
/// [`LINE_FOO`]
pub const LINE_BAR: &str = "B - - [01/Jan/2020:00:00:10 +0000] bar\n";
/// line with a leading syslog-style prefix; northern-hemisphere winter so
/// the target timezone offset is PST `-0800`
pub const LINE_SYSLOG_PREFIX: &str =
    "Nov 28 19:50:25 host sshd[123]: - - [28/Nov/2016:19:50:25 +0000] GET /index.html\n";
/// line with a bracketed timestamp but an invalid month name
pub const LINE_BAD_MONTH: &str = "C - - [01/Foo/2020:00:00:00 +0000] foo\n";
/// line without any bracketed timestamp, matches "foo"
pub const LINE_NO_BRACKET: &str = "D foo without a timestamp\n";

/// a small log file: two matching lines ten seconds apart plus chaff
pub const DATA_FOO_BAR: &str = "\
A - - [01/Jan/2020:00:00:00 +0000] foo
chaff line without a timestamp
B - - [01/Jan/2020:00:00:10 +0000] bar
";
