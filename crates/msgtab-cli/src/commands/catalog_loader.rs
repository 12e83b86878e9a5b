use std::io::{self, Read};
use std::path::{Path, PathBuf};

use msgtab_lib::{Catalog, Config, files};

/// Catalog location inside a repository checkout.
pub const DEFAULT_INPUT: &str = "src/msgs/messages2.sql";
/// Header location inside a repository checkout.
pub const DEFAULT_OUTPUT: &str = "src/include/gen/msgs.h";

/// Path argument meaning stdin or stdout.
const STDIO: &str = "-";

pub fn resolve_input(root: &Path, input: Option<&Path>) -> PathBuf {
    input
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.join(DEFAULT_INPUT))
}

pub fn resolve_output(root: &Path, output: Option<&Path>) -> PathBuf {
    output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.join(DEFAULT_OUTPUT))
}

pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO
}

pub fn load_catalog_source(path: &Path) -> Result<String, String> {
    if is_stdio(path) {
        return load_stdin();
    }
    files::read_catalog(path).map_err(|e| e.to_string())
}

fn load_stdin() -> Result<String, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(buf)
}

/// Parses the catalog and reports what was dropped or recovered.
///
/// In strict mode any diagnostic is fatal and the rendered diagnostics are
/// printed to stderr before the error is returned.
pub fn parse_catalog(
    source: &str,
    path: &Path,
    strict: bool,
    color: bool,
) -> Result<Catalog, String> {
    let catalog = Catalog::parse(source);
    let diagnostics = catalog.diagnostics();

    if diagnostics.is_empty() {
        return Ok(catalog);
    }

    let label = display_label(path);
    let rendered = diagnostics
        .printer()
        .source(source)
        .path(&label)
        .colored(color)
        .render();

    if strict && let Err(e) = catalog.ensure_clean() {
        eprintln!("{}", rendered);
        return Err(e.to_string());
    }

    let dropped = catalog.dropped_count();
    if dropped > 0 {
        log::warn!("skipped {} malformed records in {}", dropped, label);
    }
    let recovered = diagnostics.warning_count();
    if recovered > 0 {
        log::warn!("recovered from {} lexical problems in {}", recovered, label);
    }
    log::debug!("diagnostics for {}:\n{}", label, rendered);

    Ok(catalog)
}

/// Header configuration for the optional table name override.
pub fn header_config(table_name: Option<&str>) -> Config {
    match table_name {
        Some(name) => Config::new().table_name(name),
        None => Config::new(),
    }
}

fn display_label(path: &Path) -> String {
    if is_stdio(path) {
        "<stdin>".to_string()
    } else {
        path.to_string_lossy().into_owned()
    }
}
