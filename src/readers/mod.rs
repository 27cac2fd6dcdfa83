// src/readers/mod.rs

//! "Readers" for _lialib_.
//!
//! ## Overview of readers
//!
//! * A [`LogProcessor`] drives a [`GrepReader`] to derive matching
//!   [`LogLine`s].
//! * A `GrepReader` reads a file lazily, line by line, yielding only lines
//!   whose text contains a match for the user-passed pattern.
//!
//! The _lia_ binary program uses one [`LogProcessor`] instance to drive
//! processing for the file.
//!
//! _These are not rust "Readers"; these structs do not implement the trait
//! [`Read`]. These are "readers" in an informal sense._
//!
//! [`Read`]: std::io::Read
//! [`LogLine`s]: crate::common::LogLine
//! [`GrepReader`]: crate::readers::grepreader::GrepReader
//! [`LogProcessor`]: crate::readers::processor::LogProcessor

pub mod grepreader;
pub mod processor;
pub mod summary;
