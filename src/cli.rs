use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for ffhrd
#[derive(Parser, Debug)]
#[command(name = "ffhrd", version)]
#[command(about = "Back up a Firefox profile and harden it with a privacy-focused user.js")]
pub struct Args {
    /// Firefox profiles directory (default: $MOZ_PROFILES_DIR or the platform location)
    #[arg(long, value_name = "DIR")]
    pub profiles_dir: Option<PathBuf>,

    /// Directory profile backups are written to (default: $FFHRD_BACKUP_DIR or ~/ffhrd)
    #[arg(long, value_name = "DIR")]
    pub backup_dir: Option<PathBuf>,

    /// List the discovered Firefox profiles as JSON and exit
    #[arg(long)]
    pub list: bool,

    /// Do not print the logo and warning banner
    #[arg(long)]
    pub no_banner: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }
}
