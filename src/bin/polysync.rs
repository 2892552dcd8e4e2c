//! Polysync CLI Binary
//!
//! Converges the directories named on the command line.

use clap::Parser;
use polysync::logging;
use polysync::tooling::cli::{Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();

    let context = match CliContext::new(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    };

    if let Err(e) = logging::init_logging(Some(&context.logging_config()), context.log_file()) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(e.exit_code());
    }

    match context.execute(&cli.directories) {
        Ok(output) => {
            println!("{}", output.trim_end());
        }
        Err(e) => {
            tracing::error!(error = %e, "Synchronization failed");
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}
