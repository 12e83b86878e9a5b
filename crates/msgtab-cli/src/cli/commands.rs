//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Add the args every command uses to locate and parse the catalog.
fn with_catalog_args(cmd: Command) -> Command {
    cmd.arg(root_arg())
        .arg(input_arg())
        .arg(strict_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
///
/// Without a subcommand the binary behaves like `msgtab generate`.
pub fn build_cli() -> Command {
    Command::new("msgtab")
        .about("Generate a C message table from an SQL-like message catalog")
        .subcommand(generate_command())
        .subcommand(check_command())
        .subcommand(dump_command())
}

/// Write the header.
pub fn generate_command() -> Command {
    let cmd = Command::new("generate")
        .about("Generate the message table header")
        .after_help(
            r#"EXAMPLES:
  msgtab generate                          # src/msgs/messages2.sql -> src/include/gen/msgs.h
  msgtab generate --root ../firebird       # same paths under another checkout
  msgtab generate -i msgs.sql -o -         # print the header to stdout
  msgtab generate --strict                 # refuse malformed records"#,
        )
        .arg(output_arg())
        .arg(table_name_arg());

    with_catalog_args(cmd)
}

/// Verify the header is up to date.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Check that the generated header matches the catalog")
        .after_help(
            r#"EXAMPLES:
  msgtab check                             # exit 1 if msgs.h is stale
  msgtab check -o include/msgs.h           # check another header"#,
        )
        .arg(output_arg())
        .arg(table_name_arg());

    with_catalog_args(cmd)
}

/// Show the parsed catalog.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Print the parsed catalog as JSON")
        .after_help(
            r#"EXAMPLES:
  msgtab dump                              # pretty JSON
  msgtab dump --compact | jq '.count'      # compact JSON"#,
        )
        .arg(compact_arg());

    with_catalog_args(cmd)
}
