pub mod output;

use crate::bio::reader::{FileSource, MemorySource, SequenceSource};
use crate::core::config::{load_config, Config};
use crate::core::search::KmerSearch;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use tracing::debug;

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

#[derive(Parser, Debug)]
#[command(
    name = "kfinder",
    version,
    about = "Find the smallest k at which every k-mer has a unique successor",
    long_about = "kfinder reads sequence fragments (one per line) and tries k = 1, 2, 3, ... \
                  until every k-mer observed in the input is followed by exactly one distinct \
                  k-mer. The result is a starting point for choosing a de Bruijn graph k."
)]
pub struct Cli {
    /// Sequence file, one sequence per line ("-" for stdin, ".gz" is decompressed)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Give up after this k
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(usize))]
    pub max_k: Option<usize>,

    /// Output format
    #[arg(long, value_parser = ["text", "json"])]
    pub format: Option<String>,

    /// Report statistics for every k tried
    #[arg(long)]
    pub trace: bool,

    /// TOML configuration file
    #[arg(long, env = "KFINDER_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// One-line usage string, as printed for argument errors.
    pub fn usage() -> String {
        Cli::command().render_usage().to_string()
    }

    /// Merge command-line flags over the configuration file (or defaults).
    pub fn resolve_config(&self) -> crate::Result<Config> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => Config::default(),
        };

        if self.max_k.is_some() {
            config.search.max_k = self.max_k;
        }
        if let Some(format) = &self.format {
            config.output.format = format.clone();
        }
        if self.trace {
            config.search.record_trace = true;
        }

        config.validate()?;
        Ok(config)
    }

    fn open_source(&self) -> crate::Result<Box<dyn SequenceSource>> {
        if self.input.as_os_str() == STDIN_PATH {
            let source = MemorySource::buffer("<stdin>", std::io::stdin().lock())?;
            Ok(Box::new(source))
        } else {
            Ok(Box::new(FileSource::new(&self.input)))
        }
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    debug!(?config, "resolved configuration");

    let source = cli.open_source()?;
    let outcome = KmerSearch::new(config.search.clone()).run(source.as_ref())?;

    match config.output.format.as_str() {
        "json" => println!("{}", output::render_json(&outcome)?),
        _ => print!("{}", output::render_text(&outcome)),
    }

    Ok(())
}
