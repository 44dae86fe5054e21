pub mod aggregator;
pub mod config;
pub mod search;

pub use aggregator::{aggregate, aggregate_source};
pub use config::Config;
pub use search::{find_minimal_k, KmerSearch, SearchOutcome, SearchStep};
