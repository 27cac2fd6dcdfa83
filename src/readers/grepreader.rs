// src/readers/grepreader.rs

//! Implements a [`GrepReader`],
//! the lazy source of pattern-matching [`LogLine`s] from one file.
//!
//! [`GrepReader`]: self::GrepReader
//! [`LogLine`s]: crate::common::LogLine

use crate::common::{AnalysisError, Count, FPath, File, LogLine, Path, ResultS3};

use std::fmt;
use std::io::{BufRead, BufReader, Error, ErrorKind};

extern crate regex;
use regex::Regex;

extern crate si_trace_print;
#[allow(unused_imports)]
use si_trace_print::{dpfn, dpfo, dpfx, dpfñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GrepReader
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// [`GrepReader.find_next()`] searching results.
///
/// [`GrepReader.find_next()`]: self::GrepReader#method.find_next
pub type ResultS3GrepFind = ResultS3<LogLine, Error>;

/// A lazy, forward-only reader of one file yielding only lines whose text
/// contains a match for the pattern (substring search semantics,
/// case-sensitive). Restartable only by creating a new `GrepReader`.
///
/// Owns the file handle for the duration of the scan; the handle is
/// released when the `GrepReader` is dropped, on every exit path.
pub struct GrepReader {
    /// path of the file being scanned
    pub(crate) path: FPath,
    /// the compiled user-passed pattern
    pattern: Regex,
    /// buffered handle of the opened file
    reader: BufReader<File>,
    /// Internal stats - count of lines read from the file
    pub(super) count_lines_read: Count,
    /// Internal stats - count of lines matching the pattern
    pub(super) count_lines_matched: Count,
}

impl fmt::Debug for GrepReader {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("GrepReader")
            .field("path", &self.path)
            .field("pattern", &self.pattern.as_str())
            .field("lines read", &self.count_lines_read)
            .field("lines matched", &self.count_lines_matched)
            .finish()
    }
}

impl GrepReader {
    /// Create a new `GrepReader`.
    ///
    /// The pattern is compiled first; a pattern that fails to compile
    /// returns [`AnalysisError::PatternInvalid`] before the file is
    /// touched. A nonexistent file returns [`AnalysisError::NotFound`]
    /// before any line is produced.
    ///
    /// [`AnalysisError::PatternInvalid`]: crate::common::AnalysisError#variant.PatternInvalid
    /// [`AnalysisError::NotFound`]: crate::common::AnalysisError#variant.NotFound
    pub fn new(
        path: FPath,
        pattern: &str,
    ) -> Result<GrepReader, AnalysisError> {
        dpfn!("({:?}, {:?})", path, pattern);
        let pattern_re: Regex = match Regex::new(pattern) {
            Ok(val) => val,
            Err(err) => {
                dpfx!("Regex::new({:?}) failed; {}", pattern, err);
                return Err(AnalysisError::PatternInvalid {
                    pattern: pattern.to_string(),
                    error: err,
                });
            }
        };
        if !Path::new(&path).exists() {
            dpfx!("path {:?} does not exist", path);
            return Err(AnalysisError::NotFound { path });
        }
        let file: File = match File::open(&path) {
            Ok(val) => val,
            Err(err) => {
                dpfx!("File::open({:?}) failed; {}", path, err);
                // the path could disappear between the exists check and the
                // open
                if err.kind() == ErrorKind::NotFound {
                    return Err(AnalysisError::NotFound { path });
                }
                return Err(AnalysisError::Io { path, error: err });
            }
        };
        dpfx!("opened {:?}", path);

        Ok(GrepReader {
            path,
            pattern: pattern_re,
            reader: BufReader::new(file),
            count_lines_read: 0,
            count_lines_matched: 0,
        })
    }

    /// Find the next line containing a match for the pattern.
    ///
    /// Returns `Found(line)` with the original terminator retained,
    /// `Done` at end of file, or `Err` on an underlying read failure.
    pub fn find_next(&mut self) -> ResultS3GrepFind {
        dpfn!();
        loop {
            let mut line: LogLine = LogLine::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => {
                    dpfx!("EOF after {} lines, {} matched", self.count_lines_read, self.count_lines_matched);
                    return ResultS3::Done;
                }
                Ok(_sz) => {
                    self.count_lines_read += 1;
                    if self.pattern.is_match(&line) {
                        self.count_lines_matched += 1;
                        dpfx!("matched line {}", self.count_lines_read);
                        return ResultS3::Found(line);
                    }
                    dpfo!("line {} no match", self.count_lines_read);
                }
                Err(err) => {
                    dpfx!("read_line error; {}", err);
                    return ResultS3::Err(err);
                }
            }
        }
    }

    /// The user-passed pattern as passed, uncompiled.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// `Count` of lines read so far.
    #[inline(always)]
    pub const fn count_lines_read(&self) -> Count {
        self.count_lines_read
    }

    /// `Count` of lines matched so far.
    #[inline(always)]
    pub const fn count_lines_matched(&self) -> Count {
        self.count_lines_matched
    }
}
