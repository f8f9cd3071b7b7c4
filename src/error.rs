//! Error types for profile discovery, backup and hardening
//!
//! This module defines the error types used throughout the ffhrd library.
//! All public functions return [`Result<T, Error>`] for consistent error handling.

use crate::platform::Platform;
use std::path::PathBuf;

/// Errors that abort a hardening run
///
/// Every variant is fatal. Declining the overwrite prompt is not an error and
/// is reported through [`crate::WriteOutcome::Cancelled`] instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The host operating system is not one of the recognized platforms
    #[error("Unknown operating system detected: {0}")]
    UnsupportedPlatform(String),

    /// The platform is recognized but has no known configuration location
    #[error("Locating the Firefox configuration directory is not implemented on {0}")]
    PlatformNotImplemented(Platform),

    /// No home directory could be determined for the current user
    #[error("Failed to determine the home directory of the current user")]
    HomeDirectoryNotFound,

    /// The Firefox configuration directory is missing or not a directory
    #[error("Failed to find Firefox config directory: {}", .0.display())]
    ConfigDirectoryNotFound(PathBuf),

    /// The configuration directory holds no profile-like subdirectories
    #[error("Failed to find any Firefox profiles in {}", .0.display())]
    NoProfilesFound(PathBuf),

    /// The profile choice was not an integer in `0..count`
    #[error("Incorrect input '{input}': expected a profile number between 0 and {}", .count.saturating_sub(1))]
    InvalidSelection { input: String, count: usize },

    /// Copying the profile to its backup location failed
    #[error("Failed to back up '{}' to '{}': {source}", .source_dir.display(), .destination.display())]
    BackupFailed {
        source_dir: PathBuf,
        destination: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the hardening settings failed
    #[error("OS error occurred while writing hardening settings to '{}': {source}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error on the interactive streams or while scanning directories
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Exit status after the user interrupts a run with Ctrl-C
pub const EXIT_INTERRUPTED: i32 = 130;

impl Error {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::UnsupportedPlatform(_)
            | Error::PlatformNotImplemented(_)
            | Error::HomeDirectoryNotFound
            | Error::ConfigDirectoryNotFound(_)
            | Error::NoProfilesFound(_)
            | Error::InvalidSelection { .. }
            | Error::BackupFailed { .. }
            | Error::WriteError { .. }
            | Error::Io(_) => 1,
        }
    }
}

/// Result type alias for convenience
///
/// # Example
///
/// ```rust
/// use ffhrd::{render_user_js, Result, HARDENING_PREFS};
///
/// fn line_count() -> Result<usize> {
///     Ok(render_user_js(HARDENING_PREFS).lines().count())
/// }
/// # assert_eq!(line_count().unwrap(), HARDENING_PREFS.len() + 2);
/// ```
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_errors_exit_with_one() {
        let errors = [
            Error::UnsupportedPlatform("plan9".to_string()),
            Error::PlatformNotImplemented(Platform::MacOs),
            Error::NoProfilesFound(PathBuf::from("/tmp")),
            Error::InvalidSelection {
                input: "abc".to_string(),
                count: 3,
            },
        ];
        for error in errors {
            assert_eq!(error.exit_code(), 1, "{error}");
        }
    }

    #[test]
    fn test_not_implemented_is_distinct_from_missing_directory() {
        let not_implemented = Error::PlatformNotImplemented(Platform::MacOs).to_string();
        let missing = Error::ConfigDirectoryNotFound(PathBuf::from("/nope")).to_string();
        assert!(not_implemented.contains("not implemented"));
        assert!(not_implemented.contains("macOS"));
        assert!(missing.contains("/nope"));
        assert_ne!(not_implemented, missing);
    }

    #[test]
    fn test_invalid_selection_message_shows_range() {
        let error = Error::InvalidSelection {
            input: "7".to_string(),
            count: 3,
        };
        let message = error.to_string();
        assert!(message.contains("'7'"));
        assert!(message.contains("between 0 and 2"));
    }
}
