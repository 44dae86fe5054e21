use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// K-mers mapped to every successor k-mer observed after them.
///
/// Keys keep the order in which they were first seen and successor lists
/// keep their multiplicity, so the same table can describe one sequence or
/// a whole corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuccessorTable {
    entries: IndexMap<String, Vec<String>>,
}

impl SuccessorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `successor` to the list for `kmer`, creating the list on first sight.
    pub fn push(&mut self, kmer: &str, successor: &str) {
        self.entries
            .entry(kmer.to_string())
            .or_default()
            .push(successor.to_string());
    }

    /// Concatenate every successor list of `other` onto this table.
    pub fn merge(&mut self, other: SuccessorTable) {
        for (kmer, successors) in other.entries {
            self.entries.entry(kmer).or_default().extend(successors);
        }
    }

    pub fn get(&self, kmer: &str) -> Option<&[String]> {
        self.entries.get(kmer).map(Vec::as_slice)
    }

    /// Number of distinct k-mers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of (k-mer, successor) entries, counting repeats.
    pub fn pair_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(kmer, successors)| (kmer.as_str(), successors.as_slice()))
    }

    /// Collapse each successor list to its set of distinct values.
    pub fn uniqueness(&self) -> IndexMap<&str, IndexSet<&str>> {
        self.entries
            .iter()
            .map(|(kmer, successors)| {
                let distinct = successors.iter().map(String::as_str).collect();
                (kmer.as_str(), distinct)
            })
            .collect()
    }

    /// True when every k-mer has exactly one distinct successor.
    ///
    /// An empty table passes vacuously.
    pub fn is_unambiguous(&self) -> bool {
        self.uniqueness().values().all(|distinct| distinct.len() == 1)
    }

    /// K-mers followed by more than one distinct successor, in first-seen order.
    pub fn ambiguous_kmers(&self) -> Vec<&str> {
        self.uniqueness()
            .into_iter()
            .filter(|(_, distinct)| distinct.len() > 1)
            .map(|(kmer, _)| kmer)
            .collect()
    }
}

/// Map every k-mer of `sequence` to the k-mers starting one position later.
///
/// Positions are counted in characters. Only start positions that have a
/// following position are used, so `k >= len` (and `k == 0`) yields an
/// empty table. A successor running past the end of the sequence is kept
/// as the shorter remainder.
pub fn extract_successors(sequence: &str, k: usize) -> SuccessorTable {
    let mut table = SuccessorTable::new();

    // Byte offset of every char, plus the end of the string.
    let bounds: Vec<usize> = sequence
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(sequence.len()))
        .collect();
    let len = bounds.len() - 1;

    if k == 0 || k >= len {
        return table;
    }

    for i in 0..len - k {
        let kmer = &sequence[bounds[i]..bounds[i + k]];
        let successor_end = (i + 1 + k).min(len);
        let successor = &sequence[bounds[i + 1]..bounds[successor_end]];
        table.push(kmer, successor);
    }

    table
}
