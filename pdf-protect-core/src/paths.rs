//! Output path resolution
//!
//! Proposes an output file next to the chosen input and normalizes paths the
//! user types in. Nothing in this module touches the filesystem.

use crate::options::ProtectOptions;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Propose an output path for `input` using the default suffix and extension.
///
/// `/a/b/name.pdf` becomes `/a/b/name_protected.pdf`. Callers should only use
/// this while the output field is still blank so a user-edited value is never
/// replaced.
pub fn derive_default_output(input: impl AsRef<Path>) -> PathBuf {
    derive_default_output_with(input, &ProtectOptions::default())
}

/// Propose an output path for `input` with a custom suffix and extension.
pub fn derive_default_output_with(input: impl AsRef<Path>, options: &ProtectOptions) -> PathBuf {
    let input = input.as_ref();

    let mut name = input.file_stem().map(OsString::from).unwrap_or_default();
    name.push(&options.suffix);
    name.push(options.dotted_extension());

    input.with_file_name(name)
}

/// Append the default document extension unless `path` already ends with it.
pub fn normalize_save_path(path: impl AsRef<Path>) -> PathBuf {
    normalize_save_path_with(path, &ProtectOptions::default())
}

/// Append `options.extension` unless `path` already ends with it, ignoring case.
///
/// Applying this twice gives the same result as applying it once.
pub fn normalize_save_path_with(path: impl AsRef<Path>, options: &ProtectOptions) -> PathBuf {
    let path = path.as_ref();
    if path.as_os_str().is_empty() || has_extension(path, options) {
        return path.to_path_buf();
    }

    let mut normalized = path.as_os_str().to_os_string();
    normalized.push(options.dotted_extension());
    PathBuf::from(normalized)
}

/// Whether `path` ends with the configured extension, ignoring case.
pub fn has_extension(path: impl AsRef<Path>, options: &ProtectOptions) -> bool {
    let path = path.as_ref().to_string_lossy().to_lowercase();
    path.ends_with(&options.dotted_extension().to_lowercase())
}
