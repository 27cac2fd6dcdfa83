// src/readers/processor.rs

//! Implements a [`LogProcessor`],
//! the pipeline driver composing a [`GrepReader`] with timestamp
//! extraction and rewriting.
//!
//! The pipeline of one run, one line at a time:
//! stream lines → filter by pattern → parse timestamp → convert timezone →
//! rewrite timestamp text → accumulate intervals → average.
//!
//! The `LogProcessor` is the pure core of the program; the _lia_ binary is
//! a thin boundary over it doing only printing and exit-code mapping.
//!
//! [`LogProcessor`]: self::LogProcessor
//! [`GrepReader`]: crate::readers::grepreader::GrepReader

use crate::common::{AnalysisError, Count, FPath, LogLine, ResultS3};
use crate::data::datetime::{extract_timestamp, rewrite_line, DateTimeL};
use crate::readers::grepreader::GrepReader;
use crate::readers::summary::IntervalSummary;

extern crate si_trace_print;
#[allow(unused_imports)]
use si_trace_print::{dpfn, dpfo, dpfx, dpfñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LogProcessor
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// [`LogProcessor.next_rewritten()`] searching results.
///
/// [`LogProcessor.next_rewritten()`]: self::LogProcessor#method.next_rewritten
pub type ResultS3ProcessLine = ResultS3<LogLine, AnalysisError>;

/// Drives one pass over the file: pulls matching lines from the
/// [`GrepReader`], extracts the raw timestamp of each, rewrites the line
/// text in the target timezone, and accumulates the raw instants for the
/// end-of-run [`IntervalSummary`].
///
/// [`GrepReader`]: crate::readers::grepreader::GrepReader
/// [`IntervalSummary`]: crate::readers::summary::IntervalSummary
#[derive(Debug)]
pub struct LogProcessor {
    grepreader: GrepReader,
    /// the user-passed pattern as passed, for summary messages
    pattern: String,
    /// raw extracted instants in file order; conversion never feeds this
    timestamps: Vec<DateTimeL>,
}

/// A collected whole-run result, the convenience form of driving a
/// [`LogProcessor`] to completion. Used where streaming does not matter.
#[derive(Debug, PartialEq)]
pub struct Analysis {
    /// count of matching lines
    pub count: Count,
    /// the rewritten lines in file order, terminators retained
    pub lines: Vec<LogLine>,
    /// the end-of-run aggregation
    pub summary: IntervalSummary,
}

impl LogProcessor {
    /// Create a new `LogProcessor` for one file and one pattern.
    ///
    /// Construction surfaces [`AnalysisError::PatternInvalid`] and
    /// [`AnalysisError::NotFound`] before any line is processed.
    ///
    /// [`AnalysisError::PatternInvalid`]: crate::common::AnalysisError#variant.PatternInvalid
    /// [`AnalysisError::NotFound`]: crate::common::AnalysisError#variant.NotFound
    pub fn new(
        path: FPath,
        pattern: &str,
    ) -> Result<LogProcessor, AnalysisError> {
        dpfn!("({:?}, {:?})", path, pattern);
        let grepreader: GrepReader = GrepReader::new(path, pattern)?;
        dpfx!();

        Ok(LogProcessor {
            grepreader,
            pattern: pattern.to_string(),
            timestamps: Vec::new(),
        })
    }

    /// Advance the pipeline to the next matching line and return its
    /// rewritten form, suitable for immediate printing.
    ///
    /// The raw extracted timestamp is accumulated internally for
    /// [`into_summary`]. A matching line with an absent or malformed
    /// bracketed timestamp returns `Err` and the run should stop;
    /// nothing is recovered mid-stream.
    ///
    /// [`into_summary`]: self::LogProcessor#method.into_summary
    pub fn next_rewritten(&mut self) -> ResultS3ProcessLine {
        dpfn!();
        match self.grepreader.find_next() {
            ResultS3::Found(line) => {
                let dt: DateTimeL = match extract_timestamp(&line) {
                    Ok(val) => val,
                    Err(err) => {
                        dpfx!("extraction failed; {}", err);
                        return ResultS3::Err(err);
                    }
                };
                self.timestamps.push(dt);
                let rewritten: LogLine = rewrite_line(&line, &dt);
                dpfx!("found match {}", self.timestamps.len());

                ResultS3::Found(rewritten)
            }
            ResultS3::Done => {
                dpfx!("done");

                ResultS3::Done
            }
            ResultS3::Err(err) => {
                dpfx!("read error; {}", err);

                ResultS3::Err(AnalysisError::Io {
                    path: self.grepreader.path.clone(),
                    error: err,
                })
            }
        }
    }

    /// The raw extracted instants accumulated so far, in file order.
    pub fn timestamps(&self) -> &[DateTimeL] {
        &self.timestamps
    }

    /// `Count` of matching lines processed so far.
    pub fn count_matches(&self) -> Count {
        self.timestamps.len() as Count
    }

    /// Consume the processor and aggregate the accumulated timestamps.
    ///
    /// Call after [`next_rewritten`] has returned `Done`.
    ///
    /// [`next_rewritten`]: self::LogProcessor#method.next_rewritten
    pub fn into_summary(self) -> IntervalSummary {
        dpfñ!("({} timestamps)", self.timestamps.len());
        IntervalSummary::from_timestamps(&self.timestamps, &self.pattern)
    }

    /// Run the whole pipeline to completion, collecting the rewritten
    /// lines instead of streaming them.
    ///
    /// The _lia_ binary does not use this; it streams lines as they are
    /// found. Callers that want one typed result use this.
    pub fn run(
        path: FPath,
        pattern: &str,
    ) -> Result<Analysis, AnalysisError> {
        dpfn!("({:?}, {:?})", path, pattern);
        let mut processor: LogProcessor = LogProcessor::new(path, pattern)?;
        let mut lines: Vec<LogLine> = Vec::new();
        loop {
            match processor.next_rewritten() {
                ResultS3::Found(line) => lines.push(line),
                ResultS3::Done => break,
                ResultS3::Err(err) => {
                    dpfx!("return Err; {}", err);
                    return Err(err);
                }
            }
        }
        let count: Count = processor.count_matches();
        let summary: IntervalSummary = processor.into_summary();
        dpfx!("return Analysis with {} lines", count);

        Ok(Analysis {
            count,
            lines,
            summary,
        })
    }
}
