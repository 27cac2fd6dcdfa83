// src/common.rs
//
// common imports, type aliases, and other globals (avoids circular imports)

use std::fmt;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// file-handling, command-line parsing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub use std::fs::File;
pub use std::path::Path;

/// `F`ake `Path` or `F`ile `Path`
pub type FPath = String;
pub type FPaths = Vec<FPath>;

/// general purpose counting type
pub type Count = u64;

/// one line of text from the scanned file, original terminator retained
pub type LogLine = String;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// custom Result enum for the find-next-match functions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `Result`-like `enum` for lazy "find the next thing" functions;
/// a plain `Result` cannot express "nothing left but nothing failed".
#[derive(Debug)]
pub enum ResultS3<T, E> {
    /// Contains the success data
    Found(T),
    /// File is exhausted, or other condition that means "Done", nothing to
    /// return, but no bad errors happened
    Done,
    /// Contains the error value, something bad happened
    Err(E),
}

impl<T, E> ResultS3<T, E> {
    // Querying the contained values

    /// Returns `true` if the result is [`Found`, `Done`].
    #[allow(dead_code)]
    #[must_use = "if you intended to assert that this is ok, consider `.unwrap()` instead"]
    #[inline(always)]
    pub const fn is_ok(&self) -> bool {
        matches!(*self, ResultS3::Found(_) | ResultS3::Done)
    }

    /// Returns `true` if the result is [`Err`].
    #[allow(dead_code)]
    #[must_use = "if you intended to assert that this is err, consider `.unwrap_err()` instead"]
    #[inline(always)]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` if the result is [`Found`].
    #[inline(always)]
    pub const fn is_found(&self) -> bool {
        matches!(*self, ResultS3::Found(_))
    }

    /// Returns `true` if the result is [`Done`].
    #[inline(always)]
    pub const fn is_done(&self) -> bool {
        matches!(*self, ResultS3::Done)
    }

    // Adapter for each variant

    /// Converts from `ResultS3<T, E>` to [`Option<T>`],
    /// consuming `self`, and discarding the error, if any.
    #[allow(dead_code)]
    #[inline(always)]
    pub fn ok(self) -> Option<T> {
        match self {
            ResultS3::Found(x) => Some(x),
            ResultS3::Done => None,
            ResultS3::Err(_) => None,
        }
    }

    /// Converts from `ResultS3<T, E>` to [`Option<E>`],
    /// consuming `self`, and discarding the success value, if any.
    #[allow(dead_code)]
    #[inline(always)]
    pub fn err(self) -> Option<E> {
        match self {
            ResultS3::Found(_) => None,
            ResultS3::Done => None,
            ResultS3::Err(x) => Some(x),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// error taxonomy for one analysis run
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Failures of one analysis run.
///
/// Every variant is fatal to the run; nothing is retried.
/// A "no matches found" outcome is not an `AnalysisError`; it is expressed
/// by [`IntervalSummary::NoMatches`].
///
/// [`IntervalSummary::NoMatches`]: crate::readers::summary::IntervalSummary#variant.NoMatches
#[derive(Debug)]
pub enum AnalysisError {
    /// the file path to scan does not exist
    NotFound { path: FPath },
    /// the user-passed pattern failed to compile as a regular expression
    PatternInvalid { pattern: String, error: regex::Error },
    /// a matching line does not contain the bracketed timestamp substring
    /// `- - [<content>]`
    ExtractionFailed { line: String },
    /// the bracketed substring did not parse as `%d/%b/%Y:%H:%M:%S %z`
    FormatMismatch { value: String, error: chrono::ParseError },
    /// underlying I/O failure while reading the file
    Io { path: FPath, error: std::io::Error },
}

impl fmt::Display for AnalysisError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            AnalysisError::NotFound { path } => {
                write!(f, "file does not exist {:?}", path)
            }
            AnalysisError::PatternInvalid { pattern, error } => {
                write!(f, "invalid pattern {:?}; {}", pattern, error)
            }
            AnalysisError::ExtractionFailed { line } => {
                write!(f, "no bracketed timestamp '- - [\u{2026}]' in line {:?}", line)
            }
            AnalysisError::FormatMismatch { value, error } => {
                write!(f, "timestamp {:?} did not parse; {}", value, error)
            }
            AnalysisError::Io { path, error } => {
                write!(f, "error reading file {:?}; {}", path, error)
            }
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisError::PatternInvalid { error, .. } => Some(error),
            AnalysisError::FormatMismatch { error, .. } => Some(error),
            AnalysisError::Io { error, .. } => Some(error),
            _ => None,
        }
    }
}
