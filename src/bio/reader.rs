//! Line-oriented sequence input.
//!
//! Every line of a source is one sequence. A source can be opened any number
//! of times, each time yielding a fresh reader positioned at the start.

use crate::KFinderError;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

/// Something that can be read from the beginning, repeatedly.
pub trait SequenceSource {
    /// Open a new reader over the whole source.
    fn open(&self) -> Result<Box<dyn BufRead + '_>, KFinderError>;

    /// Human-readable name for logs and messages.
    fn describe(&self) -> String;
}

/// A plain or gzip-compressed file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn is_gzipped(&self) -> bool {
        self.path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("gz"))
            .unwrap_or(false)
    }
}

impl SequenceSource for FileSource {
    fn open(&self) -> Result<Box<dyn BufRead + '_>, KFinderError> {
        let file = File::open(&self.path).map_err(|source| KFinderError::Source {
            path: self.path.clone(),
            source,
        })?;

        if self.is_gzipped() {
            Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
        } else {
            Ok(Box::new(BufReader::new(file)))
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Sequences held in memory, e.g. buffered stdin or test fixtures.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    name: String,
    data: Vec<u8>,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    pub fn from_lines<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut data = String::new();
        for line in lines {
            data.push_str(line.as_ref());
            data.push('\n');
        }
        Self::new(name, data)
    }

    /// Drain `reader` to the end so it can be replayed.
    pub fn buffer<R: Read>(name: impl Into<String>, mut reader: R) -> io::Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Self::new(name, data))
    }
}

impl SequenceSource for MemorySource {
    fn open(&self) -> Result<Box<dyn BufRead + '_>, KFinderError> {
        Ok(Box::new(Cursor::new(self.data.as_slice())))
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

/// Iterator over the sequences of a reader.
///
/// Surrounding whitespace (line terminators included) is stripped and blank
/// lines are skipped.
pub struct SequenceLines<R> {
    lines: io::Lines<R>,
}

impl<R: BufRead> SequenceLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> Iterator for SequenceLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    if trimmed.len() == line.len() {
                        return Some(Ok(line));
                    }
                    return Some(Ok(trimmed.to_string()));
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
