// src/data/mod.rs

//! The `data` module is datetime extraction and rewriting for matched
//! log lines.
//!
//! ## Definitions of data
//!
//! ### LogLine
//!
//! A "log line" is one line of text from the scanned file, terminator
//! retained. It is represented by a [`LogLine`] and found by a
//! [`GrepReader`].
//!
//! ### Bracketed timestamp
//!
//! A "bracketed timestamp" is the substring `- - [<content>]` embedded in a
//! log line, Apache/NCSA common-log style, e.g.
//! `- - [28/Nov/2016:11:50:25 -0800]`. It is parsed into a [`DateTimeL`] by
//! [`extract_timestamp`].
//!
//! [`LogLine`]: crate::common::LogLine
//! [`GrepReader`]: crate::readers::grepreader::GrepReader
//! [`DateTimeL`]: crate::data::datetime::DateTimeL
//! [`extract_timestamp`]: crate::data::datetime::extract_timestamp

pub mod datetime;
