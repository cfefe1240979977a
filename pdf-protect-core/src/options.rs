//! Protection settings
//!
//! Everything here has a sensible default; callers only override what the
//! user changed on the command line.

/// Suffix appended to the input's base name when proposing an output path.
pub const DEFAULT_SUFFIX: &str = "_protected";

/// Extension of the documents this crate reads and writes.
pub const DEFAULT_EXTENSION: &str = "pdf";

/// Value written to the `Producer` entry of the output's info dictionary.
pub const DEFAULT_PRODUCER: &str = "pdf-protect";

/// Options controlling output naming and metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectOptions {
    /// Suffix appended to the stem of a derived output name
    pub suffix: String,
    /// Document extension, without the leading dot
    pub extension: String,
    /// Producer recorded in the output metadata
    pub producer: String,
}

impl Default for ProtectOptions {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            producer: DEFAULT_PRODUCER.to_string(),
        }
    }
}

impl ProtectOptions {
    /// Create options with the default suffix, extension and producer
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the suffix used for derived output names
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Set the document extension. A leading dot is ignored.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Set the producer string
    pub fn with_producer(mut self, producer: impl Into<String>) -> Self {
        self.producer = producer.into();
        self
    }

    /// The extension with its leading dot, e.g. `.pdf`
    pub fn dotted_extension(&self) -> String {
        format!(".{}", self.extension)
    }
}
