//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` mirror the command `*Args` but keep the unresolved [`ColorChoice`];
//! the `Into<*Args>` impls bridge dispatch to the command handlers.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub root: PathBuf,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub table_name: Option<String>,
    pub strict: bool,
    pub color: ColorChoice,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            root: parse_root(m),
            input: m.get_one::<PathBuf>("input").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
            table_name: m.get_one::<String>("table_name").cloned(),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

/// Bare `msgtab`: the repository layout relative to the working directory.
impl Default for GenerateParams {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            input: None,
            output: None,
            table_name: None,
            strict: false,
            color: ColorChoice::Auto,
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            root: p.root,
            input: p.input,
            output: p.output,
            table_name: p.table_name,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub root: PathBuf,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub table_name: Option<String>,
    pub strict: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            root: parse_root(m),
            input: m.get_one::<PathBuf>("input").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
            table_name: m.get_one::<String>("table_name").cloned(),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            root: p.root,
            input: p.input,
            output: p.output,
            table_name: p.table_name,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub root: PathBuf,
    pub input: Option<PathBuf>,
    pub compact: bool,
    pub strict: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            root: parse_root(m),
            input: m.get_one::<PathBuf>("input").cloned(),
            compact: m.get_flag("compact"),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            root: p.root,
            input: p.input,
            compact: p.compact,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_root(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("root")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."))
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
