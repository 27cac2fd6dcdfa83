// src/printer/summary.rs

//! End-of-run [`IntervalSummary`] printing functions.
//! Only used by `lia.rs`.
//!
//! Message texts are fixed; tests compare against them.
//!
//! [`IntervalSummary`]: crate::readers::summary::IntervalSummary

use crate::printer::printers::write_stdout;
use crate::readers::summary::{format_timedelta, IntervalSummary};

extern crate si_trace_print;
#[allow(unused_imports)]
use si_trace_print::defñ;

/// Render the summary messages for one completed run, one per line,
/// terminators included.
pub fn summary_lines(summary: &IntervalSummary) -> Vec<String> {
    defñ!("({:?})", summary);
    match summary {
        IntervalSummary::NoMatches { pattern } => {
            vec![format!("Did not find the '{}' you provided.\n", pattern)]
        }
        IntervalSummary::SingleMatch { .. } => {
            vec![String::from("Found only one matching line\n")]
        }
        IntervalSummary::Averaged {
            pattern,
            count,
            mean,
        } => {
            vec![
                format!("Counted word '{}' {} times in {} lines\n", pattern, count, count),
                format!(
                    "Average time between logged lines with word: {}\n",
                    format_timedelta(mean)
                ),
            ]
        }
    }
}

/// Print the summary messages for one completed run to stdout.
pub fn print_summary(summary: &IntervalSummary) {
    for line in summary_lines(summary).iter() {
        write_stdout(line.as_bytes());
    }
}
