//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Defaults: bare invocations fall back to the repository layout
//! 2. Params extraction: correct fields are extracted from ArgMatches
//! 3. Rejection: flags that belong to another command are refused

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, dump_command, generate_command};

#[test]
fn no_subcommand_is_accepted() {
    let result = build_cli().try_get_matches_from(["msgtab"]);
    assert!(result.is_ok(), "bare msgtab should parse: {:?}", result.err());
    assert!(result.unwrap().subcommand().is_none());
}

#[test]
fn default_generate_params() {
    let params = GenerateParams::default();
    assert_eq!(params.root, PathBuf::from("."));
    assert_eq!(params.input, None);
    assert_eq!(params.output, None);
    assert_eq!(params.table_name, None);
    assert!(!params.strict);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn generate_defaults_from_matches() {
    let m = generate_command()
        .try_get_matches_from(["generate"])
        .unwrap();
    let params = GenerateParams::from_matches(&m);

    assert_eq!(params.root, PathBuf::from("."));
    assert_eq!(params.input, None);
    assert_eq!(params.output, None);
    assert!(!params.strict);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn generate_extracts_all_flags() {
    let m = generate_command()
        .try_get_matches_from([
            "generate",
            "--root",
            "../firebird",
            "-i",
            "msgs.sql",
            "-o",
            "-",
            "--table-name",
            "isc_messages",
            "--strict",
            "--color",
            "never",
        ])
        .unwrap();
    let params = GenerateParams::from_matches(&m);

    assert_eq!(params.root, PathBuf::from("../firebird"));
    assert_eq!(params.input, Some(PathBuf::from("msgs.sql")));
    assert_eq!(params.output, Some(PathBuf::from("-")));
    assert_eq!(params.table_name.as_deref(), Some("isc_messages"));
    assert!(params.strict);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn color_always_is_forced() {
    let m = check_command()
        .try_get_matches_from(["check", "--color", "always"])
        .unwrap();
    let params = CheckParams::from_matches(&m);
    assert_eq!(params.color, ColorChoice::Always);
    assert!(params.color.should_colorize());
    assert!(!ColorChoice::Never.should_colorize());
}

#[test]
fn invalid_color_rejected() {
    let result = generate_command().try_get_matches_from(["generate", "--color", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn check_extracts_output() {
    let m = check_command()
        .try_get_matches_from(["check", "--output", "include/msgs.h"])
        .unwrap();
    let params = CheckParams::from_matches(&m);
    assert_eq!(params.output, Some(PathBuf::from("include/msgs.h")));
    assert_eq!(params.input, None);
}

#[test]
fn dump_compact_flag() {
    let m = dump_command()
        .try_get_matches_from(["dump", "--compact", "--input", "-"])
        .unwrap();
    let params = DumpParams::from_matches(&m);
    assert!(params.compact);
    assert_eq!(params.input, Some(PathBuf::from("-")));
}

#[test]
fn dump_rejects_output_flag() {
    let result = dump_command().try_get_matches_from(["dump", "-o", "msgs.h"]);
    assert!(result.is_err());
}

#[test]
fn generate_rejects_compact_flag() {
    let result = generate_command().try_get_matches_from(["generate", "--compact"]);
    assert!(result.is_err());
}

#[test]
fn subcommands_dispatch_by_name() {
    let m = build_cli()
        .try_get_matches_from(["msgtab", "dump", "--root", "/src/firebird"])
        .unwrap();
    let (name, sub) = m.subcommand().unwrap();
    assert_eq!(name, "dump");
    assert_eq!(
        DumpParams::from_matches(sub).root,
        PathBuf::from("/src/firebird")
    );
}

#[test]
fn help_lists_subcommands() {
    let help = build_cli().render_help().to_string();
    assert!(help.contains("generate"));
    assert!(help.contains("check"));
    assert!(help.contains("dump"));
}
