use std::path::PathBuf;

use msgtab_lib::{emit_header, files};

use super::catalog_loader::{
    header_config, is_stdio, load_catalog_source, parse_catalog, resolve_input, resolve_output,
};

pub struct CheckArgs {
    pub root: PathBuf,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub table_name: Option<String>,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    if let Err(msg) = check(&args) {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}

/// Regenerates the header in memory and compares it with the file on disk.
pub fn check(args: &CheckArgs) -> Result<(), String> {
    let input = resolve_input(&args.root, args.input.as_deref());
    let output = resolve_output(&args.root, args.output.as_deref());

    if is_stdio(&output) {
        return Err("cannot check stdout, pass a header path with --output".to_string());
    }

    let source = load_catalog_source(&input)?;
    let catalog = parse_catalog(&source, &input, args.strict, args.color)?;
    let header = emit_header(catalog.entries(), &header_config(args.table_name.as_deref()));

    let fresh = files::is_up_to_date(&output, &header).map_err(|e| e.to_string())?;
    if !fresh {
        return Err(format!("{} is out of date", output.display()));
    }

    log::info!("{} is up to date with {}", output.display(), input.display());
    Ok(())
}
