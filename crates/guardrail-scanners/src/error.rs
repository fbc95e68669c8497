//! Error types for input scanners.

/// Scanner errors.
#[derive(Debug, thiserror::Error)]
pub enum ScannerError {
    /// Lexicon or the analyzer behind it could not be loaded.
    #[error("failed to initialize lexicon '{lexicon}': {reason}")]
    Initialization { lexicon: String, reason: String },

    /// Scanner settings are out of range.
    #[error("invalid scanner config: {message}")]
    InvalidConfig { message: String },

    /// Config file could not be read or parsed.
    #[error("config error: {message}")]
    Config { message: String },

    /// Analyzer failed while scoring a prompt.
    #[error("scoring failed: {message}")]
    Scoring { message: String },
}

impl ScannerError {
    pub fn initialization(lexicon: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Initialization {
            lexicon: lexicon.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn scoring(message: impl Into<String>) -> Self {
        Self::Scoring {
            message: message.into(),
        }
    }

    /// True for errors raised while building a scanner, as opposed to scanning.
    pub fn is_construction(&self) -> bool {
        !matches!(self, Self::Scoring { .. })
    }
}

/// Result type for scanner operations.
pub type ScannerResult<T> = Result<T, ScannerError>;
