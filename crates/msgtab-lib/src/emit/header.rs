//! Header emission: the static `{code, text}` lookup table.

use std::fmt::Write;

use super::config::Config;
use super::escape::escape_c_string;
use crate::catalog::MessageEntry;

const LICENSE_NOTICE: &str = "\
/*
 * The contents of this file are subject to the Interbase Public
 * License Version 1.0 (the \"License\"); you may not use this file
 * except in compliance with the License. You may obtain a copy
 * of the License at http://www.Inprise.com/IPL.html
 *
 * Software distributed under the License is distributed on an
 * \"AS IS\" basis, WITHOUT WARRANTY OF ANY KIND, either express
 * or implied. See the License for the specific language governing
 * rights and limitations under the License.
 *";

const GENERATED_WARNING: &str = "\
/*
 *
 * *** WARNING *** - This file is automatically generated - do not edit!
 *
 */";

/// Renders the complete header for already sorted entries.
///
/// Lines are joined with `\n` and the text ends at the closing `};` with no
/// trailing newline. The `{0, NULL}` sentinel row is always present.
pub fn emit_header(entries: &[MessageEntry], config: &Config) -> String {
    let mut emitter = Emitter::new(config);
    emitter.emit(entries).expect("String write never fails");
    emitter.output
}

struct Emitter<'a> {
    config: &'a Config,
    output: String,
}

impl<'a> Emitter<'a> {
    fn new(config: &'a Config) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    fn emit(&mut self, entries: &[MessageEntry]) -> std::fmt::Result {
        self.emit_preamble()?;
        self.emit_table_open()?;
        for entry in entries {
            self.emit_row(entry)?;
        }
        self.output.push_str("\n\t{0, NULL}\n};");
        Ok(())
    }

    fn emit_preamble(&mut self) -> std::fmt::Result {
        writeln!(self.output, "{LICENSE_NOTICE}")?;
        writeln!(self.output, " * The content of this file was generated by msgtab")?;
        writeln!(self.output, " * from {}", self.config.source_label)?;
        writeln!(self.output, " */")?;
        writeln!(self.output, "{GENERATED_WARNING}")
    }

    fn emit_table_open(&mut self) -> std::fmt::Result {
        writeln!(self.output, "static const struct {{")?;
        writeln!(self.output, "\t{} code_number;", self.config.code_type)?;
        writeln!(self.output, "\t{} *code_text;", self.config.text_type)?;
        write!(self.output, "}} {}[] = {{", self.config.table_name)
    }

    fn emit_row(&mut self, entry: &MessageEntry) -> std::fmt::Result {
        write!(
            self.output,
            "\n\t{{{}, \"{}\"}},\t\t/* {}",
            entry.code,
            escape_c_string(&entry.text),
            entry.number
        )?;
        if let Some(symbol) = &entry.symbol {
            write!(self.output, ", {symbol}")?;
        }
        self.output.push_str(" */");
        Ok(())
    }
}
