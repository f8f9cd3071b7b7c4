//! Writing the rendered settings into a profile
//!
//! An existing `user.js` is never replaced silently: the user either confirms
//! the overwrite, redirects the output to `user_temp.js`, or cancels.

use crate::error::{Error, Result};
use crate::prompt;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// File Firefox loads overrides from
pub const USER_JS: &str = "user.js";

/// Alternate file used when the user keeps an existing `user.js`
pub const USER_TEMP_JS: &str = "user_temp.js";

/// Answer to the "file already exists" prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictChoice {
    Overwrite,
    Temp,
    Cancel,
}

impl ConflictChoice {
    /// Interpret a prompt answer; matching ignores case
    pub fn parse(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "overwrite" => ConflictChoice::Overwrite,
            "temp" => ConflictChoice::Temp,
            _ => ConflictChoice::Cancel,
        }
    }
}

/// Result of [`write_settings`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Settings were written to this absolute path
    Written(PathBuf),
    /// The user declined; nothing was changed
    Cancelled,
}

/// Write `contents` into the profile directory
///
/// When `user.js` already exists the user is asked on `output` and answers on
/// `input`. The file is created or truncated and written in one go.
pub fn write_settings<R, W>(
    profile_dir: &Path,
    contents: &str,
    input: &mut R,
    output: &mut W,
) -> Result<WriteOutcome>
where
    R: BufRead,
    W: Write,
{
    let mut file_name = USER_JS;

    if profile_dir.join(USER_JS).is_file() {
        writeln!(
            output,
            "Found an already existing '{}' in '{}'",
            USER_JS,
            profile_dir.display()
        )?;
        let answer = prompt::ask(
            input,
            output,
            "Would you like to overwrite it or create a new user_temp.js? (overwrite / temp)",
        )?;

        match ConflictChoice::parse(&answer) {
            ConflictChoice::Overwrite => {}
            ConflictChoice::Temp => file_name = USER_TEMP_JS,
            ConflictChoice::Cancel => {
                tracing::info!(answer = %answer, "write cancelled");
                return Ok(WriteOutcome::Cancelled);
            }
        }
    }

    let target = profile_dir.join(file_name);
    fs::write(&target, contents).map_err(|source| Error::WriteError {
        path: target.clone(),
        source,
    })?;

    let written = fs::canonicalize(&target).unwrap_or(target);
    tracing::info!(path = %written.display(), bytes = contents.len(), "settings written");
    Ok(WriteOutcome::Written(written))
}
