//! Configuration for header emission.

/// Names and labels of the generated table. Defaults reproduce `msgs.h`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Name of the static array
    pub(crate) table_name: String,
    /// C type of the code column
    pub(crate) code_type: String,
    /// C type the text column points to
    pub(crate) text_type: String,
    /// Catalog path shown in the banner
    pub(crate) source_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: "messages".to_string(),
            code_type: "SLONG".to_string(),
            text_type: "const SCHAR".to_string(),
            source_label: "src/msgs/messages2.sql".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name of the generated array.
    pub fn table_name(mut self, value: impl Into<String>) -> Self {
        self.table_name = value.into();
        self
    }

    /// Set the C type of the code column.
    pub fn code_type(mut self, value: impl Into<String>) -> Self {
        self.code_type = value.into();
        self
    }

    /// Set the C type the text column points to.
    pub fn text_type(mut self, value: impl Into<String>) -> Self {
        self.text_type = value.into();
        self
    }

    /// Set the catalog path mentioned in the banner.
    pub fn source_label(mut self, value: impl Into<String>) -> Self {
        self.source_label = value.into();
        self
    }
}
