//! Message entries and the code layout.

use serde::Serialize;

use crate::diagnostics::DiagnosticKind;
use crate::sql::FieldValue;

/// High bits marking a code as part of this error-numbering scheme.
pub const FIXED_MASK: i32 = 0x1400_0000;

/// Records with fewer fields are dropped.
pub const MIN_FIELDS: usize = 8;

const SYMBOL_FIELD: usize = 0;
const FACILITY_FIELD: usize = 4;
const NUMBER_FIELD: usize = 5;
const TEXT_FIELD: usize = 7;

/// Packs a facility code and a message number into a signed 32-bit message code.
///
/// Both values are reduced to 32 bits before packing, so out-of-range input
/// wraps instead of failing. A negative number sets every high bit: the code
/// of number `-1` is `-1`.
pub fn compute_code(facility: i64, number: i64) -> i32 {
    FIXED_MASK | ((facility as i32) << 16) | number as i32
}

/// Facility bits (16..24) of a message code.
pub fn facility_of(code: i32) -> u32 {
    ((code >> 16) & 0xFF) as u32
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageEntry {
    pub code: i32,
    pub text: String,
    pub number: i64,
    pub symbol: Option<String>,
}

impl MessageEntry {
    /// Builds an entry from the positional fields of one record.
    pub fn assemble(fields: &[FieldValue<'_>]) -> Result<Self, Rejection> {
        if fields.len() < MIN_FIELDS {
            return Err(Rejection::TooFewFields(fields.len()));
        }

        let facility_field = &fields[FACILITY_FIELD];
        let facility = facility_field
            .as_integer()
            .ok_or_else(|| Rejection::InvalidFacilityCode(facility_field.to_string()))?;

        let number_field = &fields[NUMBER_FIELD];
        let number = number_field
            .as_integer()
            .ok_or_else(|| Rejection::InvalidMessageNumber(number_field.to_string()))?;

        let text = fields[TEXT_FIELD].as_text().unwrap_or_default().to_owned();

        Ok(Self {
            code: compute_code(facility, number),
            text,
            number,
            symbol: normalize_symbol(&fields[SYMBOL_FIELD]),
        })
    }

    pub fn facility(&self) -> u32 {
        facility_of(self.code)
    }

    /// Unused slot: no text and a non-positive number.
    pub fn is_placeholder(&self) -> bool {
        self.text.is_empty() && self.number <= 0
    }
}

/// Drops `NULL` and empty symbols and strips one layer of enclosing quotes.
fn normalize_symbol(field: &FieldValue<'_>) -> Option<String> {
    let raw = field.as_text()?;
    if raw == "NULL" {
        return None;
    }
    let raw = raw.strip_prefix('\'').unwrap_or(raw);
    let raw = raw.strip_suffix('\'').unwrap_or(raw);
    (!raw.is_empty()).then(|| raw.to_owned())
}

/// Why a record produced no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Number of fields found.
    TooFewFields(usize),
    /// The facility field as written in the catalog.
    InvalidFacilityCode(String),
    /// The number field as written in the catalog.
    InvalidMessageNumber(String),
}

impl Rejection {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Self::TooFewFields(_) => DiagnosticKind::TooFewFields,
            Self::InvalidFacilityCode(_) => DiagnosticKind::InvalidFacilityCode,
            Self::InvalidMessageNumber(_) => DiagnosticKind::InvalidMessageNumber,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            Self::TooFewFields(count) => count.to_string(),
            Self::InvalidFacilityCode(value) | Self::InvalidMessageNumber(value) => value.clone(),
        }
    }
}
