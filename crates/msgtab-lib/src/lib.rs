//! msgtab: SQL-like message catalog to C lookup table.
//!
//! # Example
//!
//! ```
//! use msgtab_lib::{Catalog, Config, emit_header};
//!
//! let source = "('SYM1', NULL, NULL, NULL, 0, 1, 0, 'hello', NULL, NULL);";
//!
//! let catalog = Catalog::parse(source);
//! assert_eq!(catalog.entries()[0].code, 0x1400_0001);
//!
//! let header = emit_header(catalog.entries(), &Config::default());
//! assert!(header.ends_with("\t{0, NULL}\n};"));
//! ```

pub mod catalog;
pub mod diagnostics;
pub mod emit;
pub mod files;
pub mod sql;


use std::io;
use std::path::PathBuf;

pub use catalog::{Catalog, FIXED_MASK, MessageEntry};
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use emit::{Config, emit_header};

/// Errors that stop generation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// Strict mode: the catalog produced diagnostics.
    #[error("catalog rejected with {0} diagnostics")]
    Rejected(usize),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;
