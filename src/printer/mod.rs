// src/printer/mod.rs

//! The `printer` module is for printing user-facing output, the rewritten
//! [`LogLine`s] and the end-of-run [`IntervalSummary`], with colored
//! error text on stderr.
//!
//! [`LogLine`s]: crate::common::LogLine
//! [`IntervalSummary`]: crate::readers::summary::IntervalSummary

pub mod printers;
pub mod summary;
