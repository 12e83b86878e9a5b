//! Record extraction: splits a catalog into `( ... )` value-list bodies.
//!
//! Records are found by splitting at every `);`, not by a quote-aware scan,
//! so a literal `);` inside message text cuts its record short.

use std::ops::Range;

pub const STATEMENT_TERMINATOR: &str = ");";

/// One candidate record, borrowed from the catalog source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'s> {
    /// Text after the opening `(`, trailing whitespace removed.
    pub body: &'s str,
    /// Byte offset of the opening `(` in the catalog.
    pub start: usize,
}

impl RawRecord<'_> {
    /// Byte offset of `body` in the catalog.
    pub fn body_offset(&self) -> usize {
        self.start + 1
    }

    /// Catalog range from the opening `(` to the end of the body.
    pub fn span(&self) -> Range<usize> {
        self.start..self.body_offset() + self.body.len()
    }
}

/// Yields every fragment between `);` terminators that starts with `(` once trimmed.
pub fn extract_records(source: &str) -> impl Iterator<Item = RawRecord<'_>> {
    let mut fragment_start = 0;

    source.split(STATEMENT_TERMINATOR).filter_map(move |fragment| {
        let offset = fragment_start;
        fragment_start += fragment.len() + STATEMENT_TERMINATOR.len();

        let trimmed = fragment.trim_start();
        let start = offset + (fragment.len() - trimmed.len());
        let body = trimmed.trim_end().strip_prefix('(')?;
        Some(RawRecord { body, start })
    })
}
