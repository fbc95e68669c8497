use serde::{Deserialize, Serialize};

use crate::error::ScannerResult;

/// Outcome of scanning one prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    /// The prompt as handed to the next stage. Sentiment never rewrites it.
    pub prompt: String,
    pub is_valid: bool,
    /// Normalized risk in `[0, 1]`; `0.0` for every valid prompt.
    pub risk_score: f64,
}

impl ScanResult {
    pub fn pass(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            is_valid: true,
            risk_score: 0.0,
        }
    }

    pub fn fail(prompt: impl Into<String>, risk_score: f64) -> Self {
        Self {
            prompt: prompt.into(),
            is_valid: false,
            risk_score,
        }
    }

    pub fn into_tuple(self) -> (String, bool, f64) {
        (self.prompt, self.is_valid, self.risk_score)
    }
}

/// A scanner applied to prompts before they reach the model.
pub trait InputScanner: Send + Sync {
    fn name(&self) -> &'static str;
    fn scan(&self, prompt: &str) -> ScannerResult<ScanResult>;
}
