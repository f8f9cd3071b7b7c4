use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log level used for a given number of `-v` flags
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Setup logging on stderr.
///
/// `RUST_LOG` takes precedence when set; otherwise the level follows
/// `verbosity`. Stdout is left to the interactive prompts and status lines.
/// `ansi` is false when the user turned colors off.
pub fn init(verbosity: u8, ansi: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_target(false)
                .without_time(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    tracing::debug!(verbosity, ansi, "logging initialized");
    Ok(())
}
