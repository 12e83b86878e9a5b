//! C header generation from a parsed catalog.

mod config;
mod escape;
mod header;


pub use config::Config;
pub use escape::{UnescapeError, escape_c_string, unescape_c_string};
pub use header::emit_header;
