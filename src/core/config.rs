use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Largest k to try before giving up (None = keep going until the table empties)
    pub max_k: Option<usize>,
    /// Keep per-k statistics in the search outcome
    pub record_trace: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// "text" or "json"
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), crate::KFinderError> {
        if self.search.max_k == Some(0) {
            return Err(crate::KFinderError::Config(
                "max_k must be at least 1".to_string(),
            ));
        }
        match self.output.format.as_str() {
            "text" | "json" => Ok(()),
            other => Err(crate::KFinderError::Config(format!(
                "Unknown output format: {}",
                other
            ))),
        }
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, crate::KFinderError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| crate::KFinderError::Config(format!("Failed to read config: {}", e)))?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| crate::KFinderError::Config(format!("Failed to parse config: {}", e)))?;
    config.validate()?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), crate::KFinderError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| crate::KFinderError::Config(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
