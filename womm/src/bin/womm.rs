//! Runs a built-in flaky suite once.
//!
//! Exit status is 0 when every scenario passes and 1 otherwise, so CI sees a
//! genuinely flaky job.

use std::process;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use womm::config::{Cli, Command};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,womm=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Command::Run(config) => {
            let report = config.execute();
            let rendered = config.render(&report)?;
            if config.json {
                println!("{rendered}");
            } else {
                eprintln!("{rendered}");
            }

            let code = report.exit_code();
            if code != 0 {
                process::exit(code);
            }
        }
        Command::Odds(config) => println!("{}", config.render(&config.execute())?),
    }

    Ok(())
}
