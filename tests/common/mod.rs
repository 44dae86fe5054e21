#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Internal repeats keep every k-mer length from 1 to 6 ambiguous
pub const REPEAT_READ: &str = "ATGTCTGTCTGAA";

/// Helper to run the kfinder binary
pub fn kfinder_cmd() -> Command {
    let mut cmd = Command::cargo_bin("kfinder").unwrap();
    cmd.env_remove("KFINDER_CONFIG")
        .env_remove("KFINDER_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Join reads into file content, one per line
pub fn reads_content(reads: &[&str]) -> String {
    let mut content = String::new();
    for read in reads {
        content.push_str(read);
        content.push('\n');
    }
    content
}

/// Setup test environment with temporary directory
pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn create_input_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn create_reads_file(&self, name: &str, reads: &[&str]) -> Result<PathBuf> {
        self.create_input_file(name, &reads_content(reads))
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}

/// Write `content` gzip-compressed to `path`
pub fn write_gzip(path: &Path, content: &str) -> Result<()> {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let mut encoder = GzEncoder::new(fs::File::create(path)?, Compression::default());
    encoder.write_all(content.as_bytes())?;
    encoder.finish()?;
    Ok(())
}
