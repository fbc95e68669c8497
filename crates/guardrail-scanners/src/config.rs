//! Sentiment scanner configuration.
//!
//! Loaded from YAML either as the bare block or nested under `sentiment:`.
//! Unknown keys are rejected at both levels.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ScannerError, ScannerResult};
use crate::polarity::VADER_LEXICON;

pub const DEFAULT_THRESHOLD: f64 = -0.1;
pub const DEFAULT_LEXICON: &str = VADER_LEXICON;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SentimentConfig {
    /// Compound score at or below which a prompt is flagged, in `[-1, 1]`.
    pub threshold: f64,

    /// Lexicon identifier handed to the lexicon provider.
    pub lexicon: String,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            lexicon: DEFAULT_LEXICON.to_string(),
        }
    }
}

impl SentimentConfig {
    /// Threshold must be finite and within `[-1, 1]`; lexicon must be non-empty.
    pub fn validate(&self) -> ScannerResult<()> {
        if !self.threshold.is_finite() || !(-1.0..=1.0).contains(&self.threshold) {
            return Err(ScannerError::invalid_config(format!(
                "threshold must be within [-1, 1], got {}",
                self.threshold
            )));
        }
        if self.lexicon.trim().is_empty() {
            return Err(ScannerError::invalid_config("lexicon must not be empty"));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct NestedFile {
    sentiment: SentimentConfig,
}

/// Accepts either the bare sentiment block or one nested under `sentiment:`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ConfigFile {
    Nested(NestedFile),
    Bare(SentimentConfig),
}

pub fn parse_config(raw: &str) -> ScannerResult<SentimentConfig> {
    // an empty document means "all defaults"
    if raw.trim().is_empty() {
        return Ok(SentimentConfig::default());
    }
    let file: ConfigFile = serde_yaml::from_str(raw)
        .map_err(|e| ScannerError::config(format!("failed to parse YAML: {}", e)))?;
    let cfg = match file {
        ConfigFile::Nested(NestedFile { sentiment }) => sentiment,
        ConfigFile::Bare(cfg) => cfg,
    };
    cfg.validate()?;
    Ok(cfg)
}

/// Reads and validates a sentiment config file.
pub fn load_config(path: &Path) -> ScannerResult<SentimentConfig> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        ScannerError::config(format!("failed to read config {}: {}", path.display(), e))
    })?;
    parse_config(&raw)
}
