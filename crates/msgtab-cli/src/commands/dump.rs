use std::collections::BTreeMap;
use std::path::PathBuf;

use msgtab_lib::{Catalog, MessageEntry};
use serde::Serialize;

use super::catalog_loader::{load_catalog_source, parse_catalog, resolve_input};

pub struct DumpArgs {
    pub root: PathBuf,
    pub input: Option<PathBuf>,
    pub compact: bool,
    pub strict: bool,
    pub color: bool,
}

/// JSON view of a parsed catalog.
#[derive(Serialize)]
struct DumpOutput<'c> {
    count: usize,
    facilities: BTreeMap<u32, usize>,
    messages: &'c [MessageEntry],
}

impl<'c> DumpOutput<'c> {
    fn new(catalog: &'c Catalog) -> Self {
        Self {
            count: catalog.len(),
            facilities: catalog.facility_counts(),
            messages: catalog.entries(),
        }
    }
}

pub fn run(args: DumpArgs) {
    match dump(&args) {
        Ok(json) => println!("{}", json),
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    }
}

pub fn dump(args: &DumpArgs) -> Result<String, String> {
    let input = resolve_input(&args.root, args.input.as_deref());
    let source = load_catalog_source(&input)?;
    let catalog = parse_catalog(&source, &input, args.strict, args.color)?;
    render_json(&catalog, args.compact)
}

pub fn render_json(catalog: &Catalog, compact: bool) -> Result<String, String> {
    let output = DumpOutput::new(catalog);
    let json = if compact {
        serde_json::to_string(&output)
    } else {
        serde_json::to_string_pretty(&output)
    };
    json.map_err(|e| format!("failed to serialize catalog: {}", e))
}
