//! Form state behind the user-facing surface

use crate::options::ProtectOptions;
use crate::paths::{derive_default_output_with, normalize_save_path_with};
use crate::protect::{protect_with, ProtectionResult};
use std::path::Path;

/// The four fields the user fills in. Lives only for the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub input_path: String,
    pub output_path: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input path and, if the output field is blank, propose an
    /// output next to it.
    pub fn select_input(&mut self, path: impl AsRef<Path>, options: &ProtectOptions) {
        let path = path.as_ref();
        self.input_path = path.to_string_lossy().into_owned();
        if self.output_path.trim().is_empty() {
            self.output_path = derive_default_output_with(path, options)
                .to_string_lossy()
                .into_owned();
        }
    }

    /// Set the output path chosen by the user, appending the document
    /// extension if it is missing.
    pub fn choose_output(&mut self, path: impl AsRef<Path>, options: &ProtectOptions) {
        self.output_path = normalize_save_path_with(path, options)
            .to_string_lossy()
            .into_owned();
    }

    /// Run the protection workflow on the current field values.
    pub fn protect(&self, options: &ProtectOptions) -> ProtectionResult {
        protect_with(
            &self.input_path,
            &self.output_path,
            &self.password,
            &self.confirm_password,
            options,
        )
    }
}
