//! # pdf-protect
//!
//! Password-protect PDF documents. The library validates what the user typed,
//! proposes an output path, copies every page of the input into a new
//! document, encrypts it and writes it out atomically.
//!
//! ## Features
//!
//! - **Form validation**: deterministic checks in a fixed order, so the same
//!   bad form always produces the same message
//! - **Output naming**: `report.pdf` becomes `report_protected.pdf` in the
//!   same directory; typed paths get a `.pdf` extension when missing
//! - **Encryption**: standard security handler, 128-bit RC4, one password
//!   used as both user and owner password
//! - **Atomic writes**: the destination is replaced by a rename, never left
//!   half written
//!
//! PDF parsing, serialization and cryptography are provided by `lopdf`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf_protect::{derive_default_output, protect, ProtectionResult, Report};
//!
//! let output = derive_default_output("report.pdf");
//! let result = protect("report.pdf", &output.to_string_lossy(), "secret123", "secret123");
//!
//! match &result {
//!     ProtectionResult::Success(path) => println!("saved {}", path.display()),
//!     _ => eprintln!("{}", Report::from(&result)),
//! }
//! ```
//!
//! ### Working with the form state
//!
//! ```rust,no_run
//! use pdf_protect::{FormState, ProtectOptions};
//!
//! let options = ProtectOptions::default();
//! let mut form = FormState::new();
//! form.select_input("/scans/contract.pdf", &options);
//! assert_eq!(form.output_path, "/scans/contract_protected.pdf");
//!
//! form.password = "hunter2".into();
//! form.confirm_password = "hunter2".into();
//! let result = form.protect(&options);
//! ```
//!
//! ## Modules
//!
//! - [`paths`] - Default output derivation and save path normalization
//! - [`protect`] - Validation and the protection workflow
//! - [`document`] - Page copying and encryption on top of `lopdf`
//! - [`writer`] - Atomic output writes
//! - [`form`] - Form state for front ends
//! - [`report`] - Outcome channels and user-facing messages
//! - [`theme`] - Dark and light palettes

pub mod document;
pub mod error;
pub mod form;
pub mod options;
pub mod paths;
pub mod protect;
pub mod report;
pub mod theme;
pub mod writer;

#[cfg(test)]
mod test_helpers;

pub use error::{ProtectError, Result, ValidationFailure};
pub use form::FormState;
pub use options::ProtectOptions;
pub use paths::{
    derive_default_output, derive_default_output_with, normalize_save_path,
    normalize_save_path_with,
};
pub use protect::{protect, protect_file, protect_with, validate, ProtectionResult};
pub use report::{Channel, Report};
pub use theme::{Palette, Rgb, Theme};

/// Current version of pdf-protect
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
