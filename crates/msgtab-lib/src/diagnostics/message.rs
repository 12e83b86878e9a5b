use std::ops::Range;

use crate::catalog::MIN_FIELDS;

/// Diagnostic kinds, grouped by what happens to the offending record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // The record is dropped from the catalog
    TooFewFields,
    InvalidFacilityCode,
    InvalidMessageNumber,

    // Recovered in place, the record is kept
    UnterminatedString,
    UnexpectedCharacters,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::TooFewFields | Self::InvalidFacilityCode | Self::InvalidMessageNumber => {
                Severity::Error
            }
            Self::UnterminatedString | Self::UnexpectedCharacters => Severity::Warning,
        }
    }

    /// Whether a diagnostic of this kind means the record was dropped.
    pub fn drops_record(&self) -> bool {
        self.default_severity() == Severity::Error
    }

    /// Base message for this kind, used when no detail is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::TooFewFields => "record has too few fields",
            Self::InvalidFacilityCode => "facility code is not an integer",
            Self::InvalidMessageNumber => "message number is not an integer",
            Self::UnterminatedString => "unterminated string literal",
            Self::UnexpectedCharacters => "unexpected characters",
        }
    }

    /// Template for detailed messages. Contains a `{}` placeholder for the detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::TooFewFields => format!("record has {{}} fields, at least {MIN_FIELDS} required"),
            Self::InvalidFacilityCode => "facility code {} is not an integer".to_string(),
            Self::InvalidMessageNumber => "message number {} is not an integer".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Byte range in the catalog source (underlined in output).
    pub(crate) range: Range<usize>,
    pub(crate) message: String,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: Range<usize>, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            message: message.into(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: Range<usize>) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            self.range.start,
            self.range.end,
            self.message
        )
    }
}
