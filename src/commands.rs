use crate::backup::backup_profile;
use crate::config::HardenConfig;
use crate::error::Result;
use crate::output;
use crate::profile::{find_profiles, select_profile, ProfileCandidate};
use crate::settings::{render_user_js, HARDENING_PREFS};
use crate::writer::{write_settings, WriteOutcome};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// What a completed hardening run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardenReport {
    pub profile: ProfileCandidate,
    pub backup: PathBuf,
    pub outcome: WriteOutcome,
}

/// List all Firefox profiles found in the configured directory as JSON
pub fn list_profiles<W: Write>(config: &HardenConfig, output: &mut W) -> Result<()> {
    let profiles = find_profiles(&config.profiles_dir)?;
    serde_json::to_writer_pretty(&mut *output, &profiles).map_err(std::io::Error::from)?;
    writeln!(output)?;
    Ok(())
}

/// Back up one profile and write the hardening settings into it
///
/// The profile is chosen interactively when more than one is found. The
/// backup always completes before the profile is touched.
pub fn harden<R, W>(config: &HardenConfig, input: &mut R, output: &mut W) -> Result<HardenReport>
where
    R: BufRead,
    W: Write,
{
    let candidates = find_profiles(&config.profiles_dir)?;
    let profile = select_profile(&candidates, input, output)?;

    let backup = backup_profile(&profile, &config.backup_root)?;
    writeln!(
        output,
        "{}",
        output::success_line(&format!("Backup created at '{}'", backup.display()))
    )?;

    let settings = render_user_js(HARDENING_PREFS);
    let outcome = write_settings(&profile.path, &settings, input, output)?;
    match &outcome {
        WriteOutcome::Written(path) => writeln!(
            output,
            "{}",
            output::success_line(&format!("'{}' created", path.display()))
        )?,
        WriteOutcome::Cancelled => writeln!(output, "Wrong choice.")?,
    }

    Ok(HardenReport {
        profile,
        backup,
        outcome,
    })
}
