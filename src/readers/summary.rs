// src/readers/summary.rs

//! The [`IntervalSummary`], the end-of-run aggregation of extracted
//! timestamps into an average interval.
//!
//! [`IntervalSummary`]: self::IntervalSummary

use crate::common::Count;
use crate::data::datetime::{DateTimeL, Duration};

extern crate si_trace_print;
#[allow(unused_imports)]
use si_trace_print::{dpfn, dpfx, dpfñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// IntervalSummary
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Aggregation of the raw extracted timestamps of one run, in file order.
///
/// The aggregation uses the raw instants, never the converted display
/// values; absolute time differencing is independent of display offsets.
#[derive(Debug, PartialEq)]
pub enum IntervalSummary {
    /// the pattern never matched; the run is a failure
    NoMatches { pattern: String },
    /// exactly one match; no average is defined, the run is a success
    SingleMatch { pattern: String },
    /// two or more matches with the mean of the pairwise deltas
    Averaged {
        pattern: String,
        count: Count,
        mean: Duration,
    },
}

impl IntervalSummary {
    /// Aggregate `timestamps`, the raw extracted instants in file order
    /// (never sorted; assumed chronological but not verified).
    ///
    /// For two or more timestamps the mean is the sum of consecutive
    /// differences `t[i] - t[i-1]` divided by `count - 1`. `Duration`
    /// differencing is exact and the division preserves sub-second
    /// precision.
    pub fn from_timestamps(
        timestamps: &[DateTimeL],
        pattern: &str,
    ) -> IntervalSummary {
        dpfñ!("({} timestamps, {:?})", timestamps.len(), pattern);
        match timestamps.len() {
            0 => IntervalSummary::NoMatches {
                pattern: pattern.to_string(),
            },
            1 => IntervalSummary::SingleMatch {
                pattern: pattern.to_string(),
            },
            count => {
                let mut sum: Duration = Duration::zero();
                for pair in timestamps.windows(2) {
                    sum = sum + (pair[1] - pair[0]);
                }
                let mean: Duration = sum / (count as i32 - 1);
                IntervalSummary::Averaged {
                    pattern: pattern.to_string(),
                    count: count as Count,
                    mean,
                }
            }
        }
    }

    /// Only a [`NoMatches`] outcome is a failure of the run;
    /// a single match is not.
    ///
    /// [`NoMatches`]: self::IntervalSummary#variant.NoMatches
    pub const fn is_failure(&self) -> bool {
        matches!(*self, IntervalSummary::NoMatches { .. })
    }

    /// `Count` of matches aggregated.
    pub const fn count(&self) -> Count {
        match *self {
            IntervalSummary::NoMatches { .. } => 0,
            IntervalSummary::SingleMatch { .. } => 1,
            IntervalSummary::Averaged { count, .. } => count,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// duration formatting
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Format a `Duration` the way Python `str(timedelta)` renders one,
/// `[D day[s], ]H:MM:SS[.ffffff]`. A negative duration is the negated
/// rendering of its absolute value.
pub fn format_timedelta(duration: &Duration) -> String {
    let negative: bool = *duration < Duration::zero();
    let d: Duration = if negative { -*duration } else { *duration };
    let days: i64 = d.num_days();
    let hours: i64 = d.num_hours() - days * 24;
    let minutes: i64 = d.num_minutes() - d.num_hours() * 60;
    let seconds: i64 = d.num_seconds() - d.num_minutes() * 60;
    let micros: i32 = d.subsec_nanos() / 1_000;
    let mut text: String = String::with_capacity(24);
    if negative {
        text.push('-');
    }
    if days > 0 {
        text.push_str(&format!("{} day{}, ", days, if days == 1 { "" } else { "s" }));
    }
    text.push_str(&format!("{}:{:02}:{:02}", hours, minutes, seconds));
    if micros > 0 {
        text.push_str(&format!(".{:06}", micros));
    }

    text
}
