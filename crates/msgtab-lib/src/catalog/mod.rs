//! Message catalog: records assembled into entries, filtered and ordered by code.

mod entry;

#[cfg(test)]
mod entry_tests;

use std::collections::BTreeMap;

pub use entry::{FIXED_MASK, MIN_FIELDS, MessageEntry, Rejection, compute_code, facility_of};

use crate::diagnostics::Diagnostics;
use crate::sql::{extract_records, parse_values};
use crate::{Error, Result};

/// Parsed catalog, entries sorted by ascending code.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<MessageEntry>,
    records: usize,
    placeholders: usize,
    diagnostics: Diagnostics,
}

impl Catalog {
    /// Runs extraction, tokenization and assembly over a whole catalog.
    ///
    /// Never fails: malformed records are dropped and described in
    /// [`Catalog::diagnostics`], placeholder records are dropped silently.
    pub fn parse(source: &str) -> Self {
        let mut catalog = Self::default();

        for record in extract_records(source) {
            catalog.records += 1;
            let fields = parse_values(record.body, record.body_offset(), &mut catalog.diagnostics);

            match MessageEntry::assemble(&fields) {
                Ok(entry) if entry.is_placeholder() => catalog.placeholders += 1,
                Ok(entry) => catalog.entries.push(entry),
                Err(rejection) => {
                    let span = record.span();
                    log::debug!(
                        "dropping record at {}..{}: {:?}",
                        span.start,
                        span.end,
                        rejection
                    );
                    catalog
                        .diagnostics
                        .report(rejection.kind(), span)
                        .message(rejection.detail())
                        .emit();
                }
            }
        }

        // stable: equal codes keep catalog order
        catalog.entries.sort_by_key(|entry| entry.code);

        log::info!(
            "parsed {} records: {} messages, {} placeholders, {} dropped",
            catalog.records,
            catalog.entries.len(),
            catalog.placeholders,
            catalog.dropped_count()
        );

        catalog
    }

    pub fn entries(&self) -> &[MessageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Candidate records found in the source, valid or not.
    pub fn record_count(&self) -> usize {
        self.records
    }

    pub fn placeholder_count(&self) -> usize {
        self.placeholders
    }

    /// Records that produced no entry because they were malformed.
    pub fn dropped_count(&self) -> usize {
        self.records - self.entries.len() - self.placeholders
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Message count per facility, ascending by facility.
    pub fn facility_counts(&self) -> BTreeMap<u32, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.facility()).or_insert(0) += 1;
        }
        counts
    }

    /// Fails when anything was dropped or recovered while parsing.
    pub fn ensure_clean(&self) -> Result<()> {
        if self.diagnostics.is_empty() {
            return Ok(());
        }
        Err(Error::Rejected(self.diagnostics.len()))
    }
}
