//! User-facing outcome reporting
//!
//! Maps a [`ProtectionResult`] onto one of three channels with the title and
//! message a front end should show.

use crate::protect::ProtectionResult;
use std::fmt;

/// Where an outcome is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Validation warning; the user fixes the form and retries
    Warning,
    /// Success confirmation, including the resolved output path
    Success,
    /// Error detail, including the underlying failure message
    Error,
}

/// A message ready to be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub channel: Channel,
    pub title: &'static str,
    pub message: String,
}

impl Report {
    pub fn from_result(result: &ProtectionResult) -> Self {
        match result {
            ProtectionResult::Success(path) => Report {
                channel: Channel::Success,
                title: "Success",
                message: format!("Password-protected PDF saved:\n{}", path.display()),
            },
            ProtectionResult::ValidationFailure(failure) => Report {
                channel: Channel::Warning,
                title: "Validation",
                message: failure.user_message().to_string(),
            },
            ProtectionResult::LibraryFailure(error) => Report {
                channel: Channel::Error,
                title: "Error",
                message: format!("Failed to protect PDF:\n{error}"),
            },
        }
    }
}

impl From<&ProtectionResult> for Report {
    fn from(result: &ProtectionResult) -> Self {
        Report::from_result(result)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
