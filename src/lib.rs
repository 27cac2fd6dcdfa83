// src/lib.rs

pub mod common;
pub mod data;
pub mod debug;
pub mod printer;
pub mod readers;
#[cfg(test)]
pub mod tests;
