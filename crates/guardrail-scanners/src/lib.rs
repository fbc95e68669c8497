//! Input scanners for Guardrail.
//!
//! Scanners inspect a prompt before it reaches the model and return a
//! [`ScanResult`]: the prompt to forward, whether it is acceptable, and a
//! normalized risk score.
//!
//! # Quick Start
//!
//! ```no_run
//! use guardrail_scanners::{SentimentConfig, SentimentScanner};
//!
//! # fn example() -> Result<(), guardrail_scanners::ScannerError> {
//! let scanner = SentimentScanner::from_config(SentimentConfig {
//!     threshold: -0.2,
//!     ..Default::default()
//! })?;
//!
//! let result = scanner.scan("I hate this, it's terrible and awful")?;
//! if !result.is_valid {
//!     println!("flagged with risk {}", result.risk_score);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod observer;
pub mod polarity;
pub mod scanner;
pub mod sentiment;

pub use config::{load_config, parse_config, SentimentConfig, DEFAULT_LEXICON, DEFAULT_THRESHOLD};
pub use error::{ScannerError, ScannerResult};
pub use observer::{ScanObserver, TracingObserver};
pub use polarity::{
    BuiltinLexicons, LexiconProvider, PolarityScorer, PolarityScores, VaderScorer, VADER_LEXICON,
};
pub use scanner::{InputScanner, ScanResult};
pub use sentiment::SentimentScanner;
