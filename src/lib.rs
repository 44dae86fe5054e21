pub mod bio;
pub mod cli;
pub mod core;

pub use crate::bio::kmer::{extract_successors, SuccessorTable};
pub use crate::core::search::{find_minimal_k, KmerSearch, SearchOutcome};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KFinderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read {path}: {source}")]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("No k up to {max_k} gives every k-mer a unique successor")]
    SearchExhausted { max_k: usize },
}

pub type Result<T> = std::result::Result<T, KFinderError>;
