/// Minimal unambiguous k search
///
/// Tries k = 1, 2, 3, ... and stops at the first k where every k-mer in the
/// corpus is followed by exactly one distinct successor. Each candidate k
/// rebuilds the corpus table from a fresh pass over the source.

use crate::bio::reader::SequenceSource;
use crate::core::aggregator::aggregate_source;
use crate::core::config::SearchConfig;
use crate::{KFinderError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

/// How many ambiguous k-mers to show per step in trace logs.
const AMBIGUOUS_LOG_LIMIT: usize = 5;

/// Statistics for one candidate k.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStep {
    pub k: usize,
    /// Distinct k-mers in the corpus table
    pub kmers: usize,
    /// Successor entries, counting repeats
    pub pairs: usize,
    /// K-mers with more than one distinct successor
    pub ambiguous: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub source: String,
    pub k: usize,
    /// Set when `k` was accepted only because no k-mer of that length had a successor
    pub degenerate: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub steps: Vec<SearchStep>,
}

pub struct KmerSearch {
    config: SearchConfig,
}

impl KmerSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn with_max_k(mut self, max_k: Option<usize>) -> Self {
        self.config.max_k = max_k;
        self
    }

    pub fn with_trace(mut self, record_trace: bool) -> Self {
        self.config.record_trace = record_trace;
        self
    }

    pub fn run(&self, source: &dyn SequenceSource) -> Result<SearchOutcome> {
        if self.config.max_k == Some(0) {
            return Err(KFinderError::Config("max_k must be at least 1".to_string()));
        }

        let name = source.describe();
        info!("Searching for minimal unambiguous k in {}", name);

        let mut steps = Vec::new();
        let mut k = 1usize;

        loop {
            if let Some(max_k) = self.config.max_k {
                if k > max_k {
                    return Err(KFinderError::SearchExhausted { max_k });
                }
            }

            let table = aggregate_source(source, k)?;
            let ambiguous = table.ambiguous_kmers();

            debug!(
                k,
                kmers = table.len(),
                pairs = table.pair_count(),
                ambiguous = ambiguous.len(),
                "evaluated candidate"
            );
            if !ambiguous.is_empty() {
                trace!(
                    k,
                    examples = ?&ambiguous[..ambiguous.len().min(AMBIGUOUS_LOG_LIMIT)],
                    "k-mers with several successors"
                );
            }

            if self.config.record_trace {
                steps.push(SearchStep {
                    k,
                    kmers: table.len(),
                    pairs: table.pair_count(),
                    ambiguous: ambiguous.len(),
                });
            }

            if ambiguous.is_empty() {
                let degenerate = table.is_empty();
                if degenerate {
                    warn!(
                        "No k-mer of length {} has a successor in {}; result is degenerate",
                        k, name
                    );
                }
                info!("Smallest unambiguous k for {}: {}", name, k);
                return Ok(SearchOutcome {
                    source: name,
                    k,
                    degenerate,
                    steps,
                });
            }

            k += 1;
        }
    }
}

impl Default for KmerSearch {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

/// Smallest k at which every k-mer of `source` has exactly one distinct successor.
pub fn find_minimal_k(source: &dyn SequenceSource) -> Result<usize> {
    KmerSearch::default().run(source).map(|outcome| outcome.k)
}
