//! Protection workflow
//!
//! Validates the four form fields, then re-encodes the input document with a
//! password and writes it out. The output file is never touched unless
//! validation passed and encryption succeeded in memory.

use crate::document;
use crate::error::{ProtectError, ValidationFailure};
use crate::options::ProtectOptions;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Outcome of a single protection attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtectionResult {
    /// The protected document was written to this path
    Success(PathBuf),
    /// The form was rejected before any document was opened
    ValidationFailure(ValidationFailure),
    /// Reading, assembling, encrypting or writing failed
    LibraryFailure(String),
}

impl ProtectionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ProtectionResult::Success(_))
    }
}

/// Validate the form and protect `input_path`, writing to `output_path`.
///
/// The same password is used as user and owner password.
pub fn protect(
    input_path: &str,
    output_path: &str,
    password: &str,
    confirm_password: &str,
) -> ProtectionResult {
    protect_with(
        input_path,
        output_path,
        password,
        confirm_password,
        &ProtectOptions::default(),
    )
}

/// Same as [`protect`] with explicit options.
pub fn protect_with(
    input_path: &str,
    output_path: &str,
    password: &str,
    confirm_password: &str,
    options: &ProtectOptions,
) -> ProtectionResult {
    let (input, output) = match validate(input_path, output_path, password, confirm_password) {
        Ok(paths) => paths,
        Err(failure) => {
            warn!(reason = %failure, "form validation failed");
            return ProtectionResult::ValidationFailure(failure);
        }
    };

    match protect_file(&input, &output, password, options) {
        Ok(()) => {
            info!(output = %output.display(), "password-protected PDF saved");
            ProtectionResult::Success(output)
        }
        Err(e) => {
            warn!(input = %input.display(), error = %e, "failed to protect PDF");
            ProtectionResult::LibraryFailure(e.to_string())
        }
    }
}

/// Check the form fields in order, stopping at the first failure.
///
/// Paths are trimmed; passwords are compared exactly as typed. The only
/// filesystem access is the existence check on the input.
pub fn validate(
    input_path: &str,
    output_path: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(PathBuf, PathBuf), ValidationFailure> {
    let input = input_path.trim();
    if input.is_empty() || !Path::new(input).is_file() {
        return Err(ValidationFailure::InvalidInput);
    }

    let output = output_path.trim();
    if output.is_empty() {
        return Err(ValidationFailure::MissingOutput);
    }

    if password.is_empty() {
        return Err(ValidationFailure::EmptyPassword);
    }

    if password != confirm_password {
        return Err(ValidationFailure::Mismatch);
    }

    debug!(input, output, "form validated");
    Ok((PathBuf::from(input), PathBuf::from(output)))
}

/// Copy every page of `input` into a new document, encrypt it with
/// `password` and write it atomically to `output`.
///
/// No validation is done here; use [`protect`] for the full workflow.
pub fn protect_file(
    input: &Path,
    output: &Path,
    password: &str,
    options: &ProtectOptions,
) -> Result<(), ProtectError> {
    let source_bytes = fs::read(input)?;
    let source = document::load_source(&source_bytes)?;

    let mut protected = document::copy_pages(source, &options.producer)?;
    document::encrypt(&mut protected, password, document::file_id(&source_bytes))?;
    let bytes = document::to_bytes(&mut protected)?;

    crate::writer::write_atomic(output, &bytes)
}
