//! # ffhrd - Firefox Hardening Library
//!
//! This library locates a Firefox profile, backs it up, and writes a
//! `user.js` with a fixed set of privacy and security overrides into it.
//!
//! ## Features
//!
//! - Resolve the Firefox configuration directory per platform (Linux, Windows)
//! - Discover profile directories by name (`*.default` or containing `profile`)
//! - Choose between several profiles interactively
//! - Back up a profile tree before modifying it, keeping symbolic links intact
//! - Render the hardening table into Firefox's `user_pref(...)` format
//! - Never overwrite an existing `user.js` without asking
//!
//! ## Quick Start
//!
//! ### Rendering the Settings
//!
//! ```rust
//! use ffhrd::{render_user_js, HARDENING_PREFS};
//!
//! let user_js = render_user_js(HARDENING_PREFS);
//! assert!(user_js.starts_with("// Created by ffhrd"));
//! assert!(user_js.contains("user_pref(\"privacy.resistFingerprinting\", true);"));
//! ```
//!
//! ### Finding Profiles
//!
//! ```rust,no_run
//! use ffhrd::{find_profiles, get_profiles_directory};
//!
//! let profiles_dir = get_profiles_directory(None)?;
//! for profile in find_profiles(&profiles_dir)? {
//!     println!("{} ({})", profile.name(), profile.path.display());
//! }
//! # Ok::<(), ffhrd::Error>(())
//! ```
//!
//! ### Hardening a Profile
//!
//! ```rust,no_run
//! use ffhrd::{harden, HardenConfig, WriteOutcome};
//!
//! let config = HardenConfig::resolve(None, None)?;
//! let stdin = std::io::stdin();
//! let report = harden(&config, &mut stdin.lock(), &mut std::io::stdout())?;
//!
//! println!("Backup at {}", report.backup.display());
//! if let WriteOutcome::Written(path) = report.outcome {
//!     println!("Wrote {}", path.display());
//! }
//! # Ok::<(), ffhrd::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All functions return [`Result<T, Error>`]. Declining to overwrite an
//! existing `user.js` is not an error; it is reported as
//! [`WriteOutcome::Cancelled`].
//!
//! ```rust
//! use ffhrd::{Error, Platform};
//!
//! match Platform::from_os_name("Darwin").and_then(|p| p.config_root("/Users/a".as_ref(), None)) {
//!     Err(Error::PlatformNotImplemented(platform)) => eprintln!("{} is not supported yet", platform),
//!     Err(e) => eprintln!("Other error: {}", e),
//!     Ok(root) => println!("{}", root.display()),
//! }
//! ```
//!
//! ## Platform Support
//!
//! - **Linux**: `~/snap/firefox/common/.mozilla/firefox/`
//! - **Windows**: `%APPDATA%\Mozilla\Firefox\Profiles\`
//! - **macOS**: not implemented; pass `--profiles-dir` or set `MOZ_PROFILES_DIR`

pub use error::{Error, Result, EXIT_INTERRUPTED};

pub use backup::{backup_destination, backup_profile, copy_tree};
pub use commands::{harden, list_profiles, HardenReport};
pub use config::{get_backup_root, get_profiles_directory, HardenConfig};
pub use platform::{detect_config_root, validate_config_root, Platform};
pub use profile::{find_profiles, is_profile_dir_name, select_profile, ProfileCandidate};
pub use settings::{
    render_pref, render_user_js, PreferenceEntry, HARDENING_PREFS, USER_JS_HEADER,
};
pub use writer::{write_settings, ConflictChoice, WriteOutcome, USER_JS, USER_TEMP_JS};

pub mod logging;
pub mod output;

mod backup;
mod commands;
mod config;
mod error;
mod platform;
mod profile;
mod prompt;
mod settings;
mod writer;
