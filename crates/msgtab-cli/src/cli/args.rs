//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Repository root the default paths are relative to (--root).
pub fn root_arg() -> Arg {
    Arg::new("root")
        .long("root")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .default_value(".")
        .help("Root directory for the default input and output paths")
}

/// Catalog to read (-i/--input).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .short('i')
        .long("input")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Message catalog, '-' for stdin [default: <ROOT>/src/msgs/messages2.sql]")
}

/// Header to write or check (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Generated header, '-' for stdout [default: <ROOT>/src/include/gen/msgs.h]")
}

/// Name of the generated array (--table-name).
pub fn table_name_arg() -> Arg {
    Arg::new("table_name")
        .long("table-name")
        .value_name("NAME")
        .help("Name of the generated table [default: messages]")
}

/// Treat any diagnostic as fatal (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Fail on malformed or recovered records instead of skipping them")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON")
}
