use std::fmt::Display;
use std::io::{self, Write};
use std::path::PathBuf;

use msgtab_lib::{emit_header, files};

use super::catalog_loader::{
    header_config, is_stdio, load_catalog_source, parse_catalog, resolve_input, resolve_output,
};

pub struct GenerateArgs {
    pub root: PathBuf,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub table_name: Option<String>,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: GenerateArgs) {
    let result = generate(&args, &mut io::stdout().lock(), &mut io::stderr().lock());
    if let Err(msg) = result {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    }
}

/// Reads, parses and writes, reporting each step.
///
/// The report goes to `stdout`, or to `stderr` when the header itself is
/// written to `stdout`.
pub fn generate(
    args: &GenerateArgs,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> Result<(), String> {
    let input = resolve_input(&args.root, args.input.as_deref());
    let output = resolve_output(&args.root, args.output.as_deref());
    let to_stdout = is_stdio(&output);
    let output_label = if to_stdout {
        "<stdout>".to_string()
    } else {
        output.display().to_string()
    };

    let report: &mut dyn Write = if to_stdout {
        &mut *stderr
    } else {
        &mut *stdout
    };

    say(report, format_args!("Reading {}...", input.display()))?;
    let source = load_catalog_source(&input)?;

    say(report, "Parsing messages...")?;
    let catalog = parse_catalog(&source, &input, args.strict, args.color)?;
    say(report, format_args!("Found {} messages", catalog.len()))?;

    say(report, "Messages by facility:")?;
    for (facility, count) in catalog.facility_counts() {
        say(report, format_args!("  Facility {}: {} messages", facility, count))?;
    }

    say(report, format_args!("\nGenerating {}...", output_label))?;
    let header = emit_header(catalog.entries(), &header_config(args.table_name.as_deref()));

    if !to_stdout {
        files::write_atomic(&output, &header).map_err(|e| e.to_string())?;
    }
    say(
        report,
        format_args!("Generated {} with {} messages", output_label, catalog.len()),
    )?;

    if to_stdout {
        stdout
            .write_all(header.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| format!("failed to write stdout: {}", e))?;
    }

    Ok(())
}

fn say(report: &mut dyn Write, msg: impl Display) -> Result<(), String> {
    writeln!(report, "{}", msg).map_err(|e| format!("failed to write progress: {}", e))
}
