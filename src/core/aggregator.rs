/// Corpus-wide successor aggregation

use crate::bio::kmer::{extract_successors, SuccessorTable};
use crate::bio::reader::{SequenceLines, SequenceSource};
use crate::Result;
use std::io::BufRead;
use tracing::debug;

/// Merge the successor tables of every sequence read from `reader`.
pub fn aggregate<R: BufRead>(reader: R, k: usize) -> Result<SuccessorTable> {
    let mut table = SuccessorTable::new();
    let mut sequences = 0usize;

    for line in SequenceLines::new(reader) {
        let sequence = line?;
        table.merge(extract_successors(&sequence, k));
        sequences += 1;
    }

    debug!(
        k,
        sequences,
        kmers = table.len(),
        pairs = table.pair_count(),
        "aggregated successor table"
    );

    Ok(table)
}

/// Open `source`, aggregate it at `k` and close it again.
///
/// The reader lives only for the duration of this call, so the handle is
/// released on success and on every error path.
pub fn aggregate_source(source: &dyn SequenceSource, k: usize) -> Result<SuccessorTable> {
    let reader = source.open()?;
    aggregate(reader, k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bio::reader::{FileSource, MemorySource};
    use crate::KFinderError;
    use pretty_assertions::assert_eq;
    use std::io::{self, BufReader, Read};

    #[test]
    fn test_aggregate_concatenates_across_sequences() {
        let table = aggregate("ACGT\n\nTTGCA\nACGA\n".as_bytes(), 1).unwrap();

        assert_eq!(table.get("A").unwrap(), ["C", "C"]);
        assert_eq!(table.get("C").unwrap(), ["G", "A", "G"]);
        assert_eq!(table.get("G").unwrap(), ["T", "C", "A"]);
        assert_eq!(table.get("T").unwrap(), ["T", "G"]);
        assert_eq!(table.pair_count(), 10);
    }

    #[test]
    fn test_aggregate_empty_input() {
        let table = aggregate(io::empty(), 3).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_aggregate_source_from_memory() {
        let source = MemorySource::from_lines("mem", ["ACGT", "TTGCA", "ACGA"]);
        let table = aggregate_source(&source, 3).unwrap();

        assert_eq!(table.get("ACG").unwrap(), ["CGT", "CGA"]);
        assert_eq!(table.get("TTG").unwrap(), ["TGC"]);
        assert_eq!(table.get("TGC").unwrap(), ["GCA"]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_aggregate_source_missing_file() {
        let source = FileSource::new("/nonexistent/kfinder/reads.txt");
        let err = aggregate_source(&source, 1).unwrap_err();
        assert!(matches!(err, KFinderError::Source { .. }));
    }

    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::new(io::ErrorKind::Other, "disk went away"));
            }
            self.served = true;
            let data = b"ACGT\n";
            buf[..data.len()].copy_from_slice(data);
            Ok(data.len())
        }
    }

    #[test]
    fn test_read_error_midway_is_reported() {
        let reader = BufReader::new(FailingReader { served: false });
        let err = aggregate(reader, 1).unwrap_err();
        assert!(matches!(err, KFinderError::Io(_)));
    }
}
