use clap::error::ErrorKind;
use clap::Parser;
use colored::*;
use kfinder::cli::Cli;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                eprint!("{}", e.render());
                println!("{}", Cli::usage());
                process::exit(1);
            }
        },
    };

    // RUST_LOG wins, then KFINDER_LOG, then -v
    let log_level = std::env::var("KFINDER_LOG").unwrap_or_else(|_| {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
        .to_string()
    });

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    if let Err(e) = kfinder::cli::run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        let exit_code = match e.downcast_ref::<kfinder::KFinderError>() {
            Some(kfinder::KFinderError::Config(_)) => 2,
            Some(kfinder::KFinderError::Io(_)) | Some(kfinder::KFinderError::Source { .. }) => 3,
            Some(kfinder::KFinderError::SearchExhausted { .. }) => 4,
            None => 1,
        };
        process::exit(exit_code);
    }
}
