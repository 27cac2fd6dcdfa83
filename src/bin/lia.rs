// src/bin/lia.rs

//! Driver program _lia_ drives the [_lialib_].
//!
//! Processes user-passed command-line arguments, then drives one
//! [`LogProcessor`] over the passed file. Each matching line is rewritten
//! with its timestamp converted to US/Pacific and printed as it is found
//! (streaming, not buffered). After the last line the [`IntervalSummary`]
//! messages are printed.
//!
//! `lia.rs` should be the only module that prints to STDOUT.
//!
//! Exit status: `0` on success (including a single-match run), `255` when
//! the file does not exist, when the pattern never matches, or on any
//! fatal error.
//!
//! [_lialib_]: lialib
//! [`LogProcessor`]: lialib::readers::processor::LogProcessor
//! [`IntervalSummary`]: lialib::readers::summary::IntervalSummary

#![allow(non_camel_case_types)]

use std::process::ExitCode;

use ::clap::Parser;
use ::const_format::concatcp;
use ::lialib::common::{AnalysisError, FPath, ResultS3};
use ::lialib::debug::printers::e_err;
use ::lialib::printer::printers::{print_colored_stderr, write_stdout, COLOR_ERROR};
use ::lialib::printer::summary::print_summary;
use ::lialib::readers::processor::LogProcessor;
use ::lialib::readers::summary::IntervalSummary;
use ::si_trace_print::stack::stack_offset_set;
use ::si_trace_print::{defn, defo, defx};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// command-line parsing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

const CLI_HELP_AFTER: &str = "\
Scans FILE for lines containing a match for the regular expression WORD.
Each matching line is printed with its bracketed timestamp
'- - [DD/Mon/YYYY:HH:MM:SS ±ZZZZ]' (and any leading syslog-style
'Mon DD HH:MM:SS' prefix) converted to US/Pacific time.
When two or more lines match, the average time between consecutive matches
is reported.";

/// exit status for all failures
const EXITCODE_ERROR: u8 = 255;

#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    name = "lia",
    // write expanded information for the `--version` output
    version = concatcp!(
        "(Log Interval Analyzer)\n",
        "Version: ",
        env!("CARGO_PKG_VERSION_MAJOR"), ".",
        env!("CARGO_PKG_VERSION_MINOR"), ".",
        env!("CARGO_PKG_VERSION_PATCH"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
        "Repository: ", env!("CARGO_PKG_REPOSITORY"), "\n",
    ),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
struct CLI_Args {
    /// Name of log file to process.
    #[clap(short = 'f', long = "file")]
    file: String,

    /// Word to look for in file. A regular expression; matching is
    /// substring search, case-sensitive.
    #[clap(short = 'w', long = "word")]
    word: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// main
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Print one fatal error to stderr, colored when stderr is a terminal.
fn print_error(err: &AnalysisError) {
    let message: String = format!("ERROR: {}\n", err);
    match print_colored_stderr(COLOR_ERROR, None, message.as_bytes()) {
        Ok(_) => {}
        Err(_) => {
            // color printing failed, fall back to plain
            e_err!("{}", err);
        }
    }
}

pub fn main() -> ExitCode {
    if cfg!(debug_assertions) {
        stack_offset_set(Some(0));
    }
    let args = CLI_Args::parse();
    defn!("args {:?}", args);

    let path: FPath = args.file;
    let mut processor: LogProcessor = match LogProcessor::new(path, &args.word) {
        Ok(val) => val,
        Err(AnalysisError::NotFound { .. }) => {
            // this diagnostic goes to stdout, not stderr
            write_stdout(b"File does not exist\n");
            write_stdout(b"Check the input provided again and enter a valid file\n");
            defx!("file not found");
            return ExitCode::from(EXITCODE_ERROR);
        }
        Err(err) => {
            print_error(&err);
            defx!("{}", err);
            return ExitCode::from(EXITCODE_ERROR);
        }
    };

    // stream each rewritten line as it is found; output printed before a
    // fatal error stays printed
    loop {
        match processor.next_rewritten() {
            ResultS3::Found(line) => {
                defo!("match {}", processor.count_matches());
                write_stdout(line.as_bytes());
            }
            ResultS3::Done => break,
            ResultS3::Err(err) => {
                print_error(&err);
                defx!("{}", err);
                return ExitCode::from(EXITCODE_ERROR);
            }
        }
    }

    let summary: IntervalSummary = processor.into_summary();
    print_summary(&summary);

    let exitcode = if summary.is_failure() {
        ExitCode::from(EXITCODE_ERROR)
    } else {
        ExitCode::SUCCESS
    };
    defx!("exitcode {:?}", exitcode);

    exitcode
}
