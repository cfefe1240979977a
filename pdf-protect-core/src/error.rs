use thiserror::Error;

/// Failures raised while reading, assembling, encrypting or writing a document.
#[derive(Error, Debug)]
pub enum ProtectError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("source document is encrypted")]
    SourceEncrypted,

    #[error("Invalid PDF structure: {0}")]
    InvalidStructure(String),

    #[error("Encryption error: {0}")]
    Encryption(String),
}

pub type Result<T> = std::result::Result<T, ProtectError>;

/// Form checks that failed before any document was opened.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("invalid input")]
    InvalidInput,

    #[error("missing output")]
    MissingOutput,

    #[error("empty password")]
    EmptyPassword,

    #[error("mismatch")]
    Mismatch,
}

impl ValidationFailure {
    /// Message shown to the user on the validation channel.
    pub fn user_message(self) -> &'static str {
        match self {
            ValidationFailure::InvalidInput => "Please choose a valid input PDF.",
            ValidationFailure::MissingOutput => "Please choose an output filename.",
            ValidationFailure::EmptyPassword => "Password cannot be empty.",
            ValidationFailure::Mismatch => "Passwords do not match.",
        }
    }
}
