//! SQL-like catalog input: record extraction and value-list tokenization.

pub mod lexer;
pub mod records;
pub mod values;

#[cfg(test)]
mod records_tests;

pub use records::{RawRecord, extract_records};
pub use values::{FieldValue, parse_values};
