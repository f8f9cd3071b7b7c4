use crate::error::{Error, Result};
use crate::output;
use crate::prompt;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Directory suffix Firefox gives to the profile it creates on first start
const DEFAULT_PROFILE_SUFFIX: &str = ".default";

/// Substring that marks any other profile-like directory
const PROFILE_MARKER: &str = "profile";

/// A directory that looks like a Firefox profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileCandidate {
    pub path: PathBuf,
}

impl ProfileCandidate {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Last path segment, e.g. `abcd1234.default`
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

/// Whether a directory base name looks like a Firefox profile
pub fn is_profile_dir_name(name: &str) -> bool {
    name.ends_with(DEFAULT_PROFILE_SUFFIX) || name.contains(PROFILE_MARKER)
}

/// Find profile directories directly below the configuration root
///
/// Only one level is scanned. Candidates are returned sorted by path so the
/// numbering shown to the user is stable between runs.
pub fn find_profiles(config_root: &Path) -> Result<Vec<ProfileCandidate>> {
    let mut candidates = Vec::new();

    for entry in std::fs::read_dir(config_root)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }

        let dir_name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
        if is_profile_dir_name(dir_name) {
            candidates.push(ProfileCandidate::new(path));
        } else {
            tracing::debug!(dir = %path.display(), "skipping non-profile directory");
        }
    }

    if candidates.is_empty() {
        return Err(Error::NoProfilesFound(config_root.to_path_buf()));
    }

    candidates.sort_by(|a, b| a.path.cmp(&b.path));
    tracing::info!(count = candidates.len(), "found Firefox profiles");
    Ok(candidates)
}

/// Pick the profile to harden
///
/// A single candidate is returned without any interaction. Otherwise the
/// candidates are listed on `output` and an index is read from `input`;
/// anything that is not an index into the list is an
/// [`Error::InvalidSelection`].
pub fn select_profile<R, W>(
    candidates: &[ProfileCandidate],
    input: &mut R,
    output: &mut W,
) -> Result<ProfileCandidate>
where
    R: BufRead,
    W: Write,
{
    match candidates {
        [] => return Err(Error::NoProfilesFound(PathBuf::new())),
        [only] => return Ok(only.clone()),
        _ => {}
    }

    let separator = "-".repeat(80);
    writeln!(output, "{}", separator)?;
    writeln!(
        output,
        "{}",
        output::success_line("Multiple FireFox profiles found:")
    )?;
    for (i, candidate) in candidates.iter().enumerate() {
        writeln!(output, "{} - {}", i, candidate.path.display())?;
    }
    writeln!(output, "{}", separator)?;

    let question = format!(
        "Choose a profile to harden: (0..{})",
        candidates.len() - 1
    );
    let answer = prompt::ask(input, output, &question)?;

    let invalid = || Error::InvalidSelection {
        input: answer.clone(),
        count: candidates.len(),
    };
    let index: usize = answer.parse().map_err(|_| invalid())?;
    let chosen = candidates.get(index).ok_or_else(invalid)?;

    tracing::info!(index, profile = %chosen.path.display(), "profile selected");
    Ok(chosen.clone())
}
