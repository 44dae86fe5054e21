pub mod kmer;
pub mod reader;

pub use kmer::{extract_successors, SuccessorTable};
pub use reader::{FileSource, MemorySource, SequenceLines, SequenceSource};
