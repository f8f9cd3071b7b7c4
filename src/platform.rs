//! Firefox configuration directory resolution
//!
//! Maps the host operating system to the directory that holds Firefox
//! profiles. Only the home and roaming app-data directories are taken from the
//! environment; everything below them is a fixed per-platform layout.

use crate::error::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// Operating systems ffhrd knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Windows,
    MacOs,
}

impl Platform {
    /// Platform of the running binary
    pub fn current() -> Result<Self> {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Parse an operating system identifier
    ///
    /// Accepts both the Rust target names (`linux`, `windows`, `macos`) and the
    /// names reported by `uname`-style APIs (`Linux`, `Windows`, `Darwin`).
    pub fn from_os_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "linux" => Ok(Platform::Linux),
            "windows" => Ok(Platform::Windows),
            "macos" | "darwin" => Ok(Platform::MacOs),
            _ => Err(Error::UnsupportedPlatform(name.to_string())),
        }
    }

    /// Expected Firefox configuration root for this platform
    ///
    /// `home` is the user's home directory and `app_data` the roaming
    /// application data directory (`%APPDATA%` on Windows).
    pub fn config_root(self, home: &Path, app_data: Option<&Path>) -> Result<PathBuf> {
        match self {
            // Snap is the default Firefox package on Ubuntu
            Platform::Linux => Ok(home.join("snap/firefox/common/.mozilla/firefox")),
            Platform::Windows => {
                let app_data = app_data
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| home.join("AppData").join("Roaming"));
                Ok(app_data.join("Mozilla").join("Firefox").join("Profiles"))
            }
            Platform::MacOs => Err(Error::PlatformNotImplemented(self)),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Linux => "Linux",
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
        };
        f.write_str(name)
    }
}

/// Resolve the configuration root for the running system
pub fn detect_config_root() -> Result<PathBuf> {
    let platform = Platform::current()?;
    let home = dirs::home_dir().ok_or(Error::HomeDirectoryNotFound)?;
    let app_data = dirs::config_dir();

    let root = platform.config_root(&home, app_data.as_deref())?;
    tracing::debug!(%platform, root = %root.display(), "resolved Firefox config root");
    Ok(root)
}

/// Check that a configuration root exists and is a directory
pub fn validate_config_root(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() || !path.is_dir() {
        return Err(Error::ConfigDirectoryNotFound(path.to_path_buf()));
    }
    Ok(path.to_path_buf())
}
