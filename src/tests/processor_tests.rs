// src/tests/processor_tests.rs

//! tests for `processor.rs`, the whole pipeline

#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]

use crate::common::{AnalysisError, LogLine, ResultS3};
use crate::data::datetime::Duration;
use crate::debug::helpers::{create_temp_file, ntf_fpath, NamedTempFile};
use crate::readers::processor::{Analysis, LogProcessor};
use crate::readers::summary::IntervalSummary;
use crate::tests::common::DATA_FOO_BAR;

extern crate lazy_static;
use lazy_static::lazy_static;

lazy_static! {
    static ref NTF_FOO_BAR: NamedTempFile = create_temp_file(DATA_FOO_BAR);
}

#[test]
fn test_LogProcessor_run_scenario_two_matches_ten_seconds() {
    let analysis: Analysis = LogProcessor::run(ntf_fpath(&NTF_FOO_BAR), "foo|bar").unwrap();
    assert_eq!(analysis.count, 2);
    assert_eq!(
        analysis.lines,
        vec![
            String::from("A - - [31/12/2019:16:00:00 -0800] foo\n"),
            String::from("B - - [31/12/2019:16:00:10 -0800] bar\n"),
        ],
    );
    assert_eq!(
        analysis.summary,
        IntervalSummary::Averaged {
            pattern: String::from("foo|bar"),
            count: 2,
            mean: Duration::seconds(10),
        },
    );
}

#[test]
fn test_LogProcessor_run_scenario_no_matches() {
    let analysis: Analysis = LogProcessor::run(ntf_fpath(&NTF_FOO_BAR), "zzz").unwrap();
    assert_eq!(analysis.count, 0);
    assert!(analysis.lines.is_empty());
    assert!(analysis.summary.is_failure());
    assert_eq!(
        analysis.summary,
        IntervalSummary::NoMatches {
            pattern: String::from("zzz")
        },
    );
}

#[test]
fn test_LogProcessor_run_scenario_single_match() {
    let analysis: Analysis = LogProcessor::run(ntf_fpath(&NTF_FOO_BAR), "foo").unwrap();
    assert_eq!(analysis.count, 1);
    assert_eq!(analysis.lines.len(), 1);
    assert!(!analysis.summary.is_failure());
    assert_eq!(
        analysis.summary,
        IntervalSummary::SingleMatch {
            pattern: String::from("foo")
        },
    );
}

#[test]
fn test_LogProcessor_run_idempotent() {
    let analysis1: Analysis = LogProcessor::run(ntf_fpath(&NTF_FOO_BAR), "foo|bar").unwrap();
    let analysis2: Analysis = LogProcessor::run(ntf_fpath(&NTF_FOO_BAR), "foo|bar").unwrap();
    assert_eq!(analysis1, analysis2);
}

#[test]
fn test_LogProcessor_new_not_found() {
    match LogProcessor::new(String::from("/THIS/PATH/DOES/NOT/EXIST/lia.log"), "foo") {
        Err(AnalysisError::NotFound { .. }) => {}
        result => panic!("expected NotFound, got {:?}", result),
    }
}

#[test]
fn test_LogProcessor_run_matching_line_without_bracket_is_fatal() {
    // the matching line has no bracketed timestamp; the run stops with an
    // explicit error
    let ntf: NamedTempFile = create_temp_file("no timestamp here foo\n");
    match LogProcessor::run(ntf_fpath(&ntf), "foo") {
        Err(AnalysisError::ExtractionFailed { .. }) => {}
        result => panic!("expected ExtractionFailed, got {:?}", result),
    }
}

#[test]
fn test_LogProcessor_run_malformed_timestamp_is_fatal() {
    let ntf: NamedTempFile = create_temp_file("C - - [01/Foo/2020:00:00:00 +0000] foo\n");
    match LogProcessor::run(ntf_fpath(&ntf), "foo") {
        Err(AnalysisError::FormatMismatch { .. }) => {}
        result => panic!("expected FormatMismatch, got {:?}", result),
    }
}

#[test]
fn test_LogProcessor_streams_lines_before_fatal_error() {
    // a good match precedes the malformed line; the good line is produced
    // before the error surfaces
    let data: &str = "\
A - - [01/Jan/2020:00:00:00 +0000] foo
C - - [01/Foo/2020:00:00:00 +0000] foo
";
    let ntf: NamedTempFile = create_temp_file(data);
    let mut processor: LogProcessor = LogProcessor::new(ntf_fpath(&ntf), "foo").unwrap();
    let line: LogLine = match processor.next_rewritten() {
        ResultS3::Found(line) => line,
        result => panic!("expected Found, got {:?}", result),
    };
    assert_eq!(line, "A - - [31/12/2019:16:00:00 -0800] foo\n");
    assert!(processor.next_rewritten().is_err());
}

#[test]
fn test_LogProcessor_accumulates_raw_timestamps() {
    let mut processor: LogProcessor =
        LogProcessor::new(ntf_fpath(&NTF_FOO_BAR), "foo|bar").unwrap();
    while let ResultS3::Found(_line) = processor.next_rewritten() {}
    assert_eq!(processor.count_matches(), 2);
    let timestamps = processor.timestamps();
    // raw extracted instants keep the source `+0000` offset, unconverted
    assert_eq!(timestamps[0].offset().local_minus_utc(), 0);
    assert_eq!(timestamps[1] - timestamps[0], Duration::seconds(10));
}
