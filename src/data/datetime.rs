// src/data/datetime.rs

//! Functions to extract the bracketed timestamp from a [`LogLine`],
//! transform it to a chrono [`DateTime`] instance, and rewrite the
//! timestamp text of the line in the target timezone.
//!
//! Extracting and rewriting requires:
//! 1. searching the line for the bracketed timestamp regular expression,
//!    `- - [<content>]`
//! 2. attempting to transform the bracketed content into a chrono
//!    `DateTime` using [`DTP_BRACKET_SOURCE`]
//! 3. replacing the two textual timestamp occurrences of the line with the
//!    same instant displayed in [`TZ_TARGET`]
//!
//! The most relevant documents to understand this file are:
//! - `chrono` crate [`strftime`] format.
//! - `regex` crate [Regular Expression syntax].
//!
//! [`LogLine`]: crate::common::LogLine
//! [`DateTime`]: https://docs.rs/chrono/0.4.40/chrono/struct.DateTime.html
//! [`DTP_BRACKET_SOURCE`]: self::DTP_BRACKET_SOURCE
//! [`TZ_TARGET`]: self::TZ_TARGET
//! [`strftime`]: https://docs.rs/chrono/0.4.40/chrono/format/strftime/index.html
//! [Regular Expression syntax]: https://docs.rs/regex/1.11.1/regex/index.html#syntax

#![allow(non_camel_case_types)]

use crate::common::AnalysisError;

extern crate chrono;
#[doc(hidden)]
pub use chrono::{
    DateTime,
    Duration,
    FixedOffset,
    TimeZone,
    Utc,
};

extern crate chrono_tz;
use chrono_tz::Tz;

extern crate lazy_static;
use lazy_static::lazy_static;

extern crate regex;
use regex::{NoExpand, Regex};

extern crate si_trace_print;
#[allow(unused_imports)]
use si_trace_print::{dpfn, dpfo, dpfx, dpfñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// DateTime aliases and strftime patterns
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The canonical datetime type for this crate, an absolute instant with a
/// fixed UTC offset.
pub type DateTimeL = DateTime<FixedOffset>;

pub type DateTimeLOpt = Option<DateTimeL>;

/// Crate `chrono` [`strftime`] formatting pattern, passed to
/// chrono [`DateTime::parse_from_str`] and [`DateTime::format`].
///
/// [`strftime`]: https://docs.rs/chrono/0.4.40/chrono/format/strftime/index.html
/// [`DateTime::parse_from_str`]: https://docs.rs/chrono/0.4.40/chrono/struct.DateTime.html#method.parse_from_str
/// [`DateTime::format`]: https://docs.rs/chrono/0.4.40/chrono/struct.DateTime.html#method.format
pub type DateTimePattern_str = str;

/// strftime pattern of the bracketed timestamp content as it occurs in the
/// scanned file, e.g. `28/Nov/2016:11:50:25 -0800`.
pub const DTP_BRACKET_SOURCE: &DateTimePattern_str = "%d/%b/%Y:%H:%M:%S %z";

/// strftime pattern used when rewriting the bracketed timestamp.
///
/// XXX: `%m` month number where [`DTP_BRACKET_SOURCE`] has `%b` month name;
///      intentional, the rewritten bracket displays the month number
pub const DTP_BRACKET_REWRITE: &DateTimePattern_str = "%d/%m/%Y:%H:%M:%S %z";

/// strftime pattern used when rewriting the syslog-style line prefix,
/// e.g. `Nov 28 11:50:25`.
pub const DTP_SYSLOG_PREFIX: &DateTimePattern_str = "%b %d %H:%M:%S";

/// The fixed target timezone for rewritten timestamps.
///
/// An IANA `Tz`, not a `FixedOffset`, so the converted display offset
/// follows daylight saving (PST `-0800` or PDT `-0700`).
pub const TZ_TARGET: Tz = Tz::US__Pacific;

lazy_static! {
    /// first bracketed timestamp of a line, capturing the inner content;
    /// `.*` is greedy so the capture runs to the last `]` of the line
    static ref REGEX_BRACKET_CAPTURE: Regex =
        Regex::new(r"- - \[(.*)\]").unwrap();
    /// the bracketed timestamp, including brackets, for replacement
    static ref REGEX_BRACKET_REPLACE: Regex =
        Regex::new(r"- - \[.*\]").unwrap();
    /// leading syslog-style prefix `Mon DD HH:MM:SS`
    static ref REGEX_SYSLOG_PREFIX: Regex =
        Regex::new(r"^\w+\s\d+\s\d{2}:\d{2}:\d{2}").unwrap();
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// extraction and conversion
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Extract the bracketed timestamp of `line` and parse it with
/// [`DTP_BRACKET_SOURCE`] into a [`DateTimeL`].
///
/// Only the first `- - [<content>]` occurrence is used.
///
/// A line without the bracketed substring returns
/// [`AnalysisError::ExtractionFailed`]. Bracketed content that does not
/// parse returns [`AnalysisError::FormatMismatch`].
///
/// [`AnalysisError::ExtractionFailed`]: crate::common::AnalysisError#variant.ExtractionFailed
/// [`AnalysisError::FormatMismatch`]: crate::common::AnalysisError#variant.FormatMismatch
pub fn extract_timestamp(line: &str) -> Result<DateTimeL, AnalysisError> {
    dpfn!("({:?})", line);
    let value: &str = match REGEX_BRACKET_CAPTURE
        .captures(line)
        .and_then(|captures| captures.get(1))
    {
        Some(match_) => match_.as_str(),
        None => {
            dpfx!("no bracketed timestamp");
            return Err(AnalysisError::ExtractionFailed {
                line: line.trim_end().to_string(),
            });
        }
    };
    dpfo!("bracketed content {:?}", value);
    match DateTime::parse_from_str(value, DTP_BRACKET_SOURCE) {
        Ok(dt) => {
            dpfx!("return {:?}", dt);

            Ok(dt)
        }
        Err(err) => {
            dpfx!("DateTime::parse_from_str({:?}, {:?}) failed ParseError: {}", value, DTP_BRACKET_SOURCE, err);

            Err(AnalysisError::FormatMismatch {
                value: value.to_string(),
                error: err,
            })
        }
    }
}

/// Convert `dt` to the same instant displayed in [`TZ_TARGET`].
pub fn convert_to_target_tz(dt: &DateTimeL) -> DateTime<Tz> {
    dt.with_timezone(&TZ_TARGET)
}

/// Create a [`DateTimeL`] from passed arguments. Panics on an invalid or
/// ambiguous datetime; meant for tests.
#[doc(hidden)]
pub fn ymdhms(
    fixedoffset: &FixedOffset,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
) -> DateTimeL {
    match fixedoffset.with_ymd_and_hms(year, month, day, hour, min, sec) {
        chrono::LocalResult::Single(dt) => dt,
        result => panic!("bad with_ymd_and_hms({}, {}, {}, {}, {}, {}) result {:?}", year, month, day, hour, min, sec, result),
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// line rewriting
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Rewrite the timestamp text of `line` using the already-extracted `dt`
/// converted to [`TZ_TARGET`]. Returns the new line, terminator retained.
///
/// Two replacements run in sequence:
/// (a) the bracketed timestamp `- - [<original>]` becomes the brackets
///     around `dt` formatted with [`DTP_BRACKET_REWRITE`]
/// (b) a leading syslog-style prefix `<word> <day> <HH:MM:SS>` becomes
///     `dt` formatted with [`DTP_SYSLOG_PREFIX`]
///
/// Replacement (b) silently does nothing when the prefix is absent.
/// The two patterns cannot overlap, (b) anchors at the line start and
/// (a) begins mid-line, so sequencing equals independent replacement.
pub fn rewrite_line(
    line: &str,
    dt: &DateTimeL,
) -> String {
    dpfn!("({:?}, {:?})", line, dt);
    let converted: DateTime<Tz> = convert_to_target_tz(dt);
    let bracket_text: String = format!("- - [{}]", converted.format(DTP_BRACKET_REWRITE));
    let line_out: String = REGEX_BRACKET_REPLACE
        .replace(line, NoExpand(bracket_text.as_str()))
        .into_owned();
    let prefix_text: String = converted
        .format(DTP_SYSLOG_PREFIX)
        .to_string();
    let line_out: String = REGEX_SYSLOG_PREFIX
        .replace(&line_out, NoExpand(prefix_text.as_str()))
        .into_owned();
    dpfx!("return {:?}", line_out);

    line_out
}
