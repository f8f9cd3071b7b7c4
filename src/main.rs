mod cli;

use anyhow::Context;
use cli::Args;
use ffhrd::{output, HardenConfig, EXIT_INTERRUPTED};
use std::io;
use std::process;

fn main() {
    process::exit(run(Args::parse()));
}

fn run(args: Args) -> i32 {
    if args.no_color {
        output::disable_color();
    }
    if let Err(e) = ffhrd::logging::init(args.verbose, !args.no_color) {
        eprintln!("{:#}", e);
    }
    if let Err(e) = install_interrupt_handler() {
        tracing::warn!("{:#}", e);
    }
    if !args.no_banner && !args.list {
        output::print_banner();
    }

    let result = HardenConfig::resolve(args.profiles_dir.as_deref(), args.backup_dir.as_deref())
        .and_then(|config| {
            let mut stdout = io::stdout();
            if args.list {
                ffhrd::list_profiles(&config, &mut stdout)
            } else {
                ffhrd::harden(&config, &mut io::stdin().lock(), &mut stdout).map(|_| ())
            }
        });

    match result {
        Ok(()) => 0,
        Err(e) => {
            // the [-] line below is the user-facing report
            tracing::debug!(error = ?e, "hardening aborted");
            output::failure(&e.to_string());
            e.exit_code()
        }
    }
}

fn install_interrupt_handler() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        eprintln!("\nAborting..");
        process::exit(EXIT_INTERRUPTED);
    })
    .context("Failed to install Ctrl-C handler")
}
