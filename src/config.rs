//! Run configuration
//!
//! Resolves where profiles are looked up and where backups go. Each setting
//! is taken from, in order: the command line, an environment variable, and
//! finally a platform default.

use crate::error::{Error, Result};
use crate::platform;
use std::path::{Path, PathBuf};

/// Environment variable overriding the Firefox profiles directory
pub const PROFILES_DIR_ENV: &str = "MOZ_PROFILES_DIR";

/// Environment variable overriding the backup root
pub const BACKUP_DIR_ENV: &str = "FFHRD_BACKUP_DIR";

/// Directory below the home directory that receives backups
const DEFAULT_BACKUP_DIR: &str = "ffhrd";

/// Resolved settings for one hardening run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardenConfig {
    /// Directory scanned for profiles; validated to exist
    pub profiles_dir: PathBuf,
    /// Directory that receives `<profile>-backup` copies
    pub backup_root: PathBuf,
}

impl HardenConfig {
    /// Resolve the configuration from optional command-line values and the
    /// process environment
    pub fn resolve(profiles_dir: Option<&Path>, backup_dir: Option<&Path>) -> Result<Self> {
        let config = Self {
            profiles_dir: get_profiles_directory(profiles_dir)?,
            backup_root: get_backup_root(backup_dir)?,
        };
        tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }
}

/// Get the profiles directory path from CLI, env var, or auto-detection
///
/// Priority:
/// 1. Manual path provided via CLI or parameter
/// 2. `MOZ_PROFILES_DIR` environment variable
/// 3. Auto-detection based on OS
pub fn get_profiles_directory(manual_path: Option<&Path>) -> Result<PathBuf> {
    let env_path = std::env::var_os(PROFILES_DIR_ENV).map(PathBuf::from);
    match pick_override(manual_path, env_path) {
        Some(path) => platform::validate_config_root(&path),
        None => platform::validate_config_root(&platform::detect_config_root()?),
    }
}

/// Get the backup root from CLI, env var, or `<home>/ffhrd`
pub fn get_backup_root(manual_path: Option<&Path>) -> Result<PathBuf> {
    let env_path = std::env::var_os(BACKUP_DIR_ENV).map(PathBuf::from);
    match pick_override(manual_path, env_path) {
        Some(path) => Ok(path),
        None => {
            let home = dirs::home_dir().ok_or(Error::HomeDirectoryNotFound)?;
            Ok(home.join(DEFAULT_BACKUP_DIR))
        }
    }
}

/// First non-empty override: command line before environment
fn pick_override(manual_path: Option<&Path>, env_path: Option<PathBuf>) -> Option<PathBuf> {
    manual_path
        .map(Path::to_path_buf)
        .or(env_path)
        .filter(|p| !p.as_os_str().is_empty())
}
