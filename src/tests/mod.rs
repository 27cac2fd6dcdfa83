// src/tests/mod.rs

//! Tests for _lialib_.
//!
//! Tests are placed at `src/tests/`, inside the `lialib`. This is a
//! reasonable trade-off of separation and access; tests placed at top-level
//! path `tests/` do not have crate-internal visibility.

pub mod common;
pub mod processor_tests;
