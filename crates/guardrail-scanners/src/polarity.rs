//! Polarity scoring and lexicon resolution.
//!
//! Sentiment analysis itself is delegated: a [`LexiconProvider`] resolves a
//! lexicon identifier into a [`PolarityScorer`], and scanners only consume
//! the resulting [`PolarityScores`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{ScannerError, ScannerResult};

/// Identifier of the VADER lexicon shipped with `vader_sentiment`.
pub const VADER_LEXICON: &str = "vader_lexicon";

/// Polarity breakdown of one text. `compound` is normalized to `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

impl PolarityScores {
    pub fn neutral() -> Self {
        Self {
            neg: 0.0,
            neu: 1.0,
            pos: 0.0,
            compound: 0.0,
        }
    }
}

impl fmt::Display for PolarityScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{neg: {}, neu: {}, pos: {}, compound: {}}}",
            self.neg, self.neu, self.pos, self.compound
        )
    }
}

pub trait PolarityScorer: Send + Sync {
    fn polarity_scores(&self, text: &str) -> ScannerResult<PolarityScores>;
}

pub trait LexiconProvider: Send + Sync {
    /// Resolve `lexicon` into a ready scorer, or fail with
    /// [`ScannerError::Initialization`].
    fn load(&self, lexicon: &str) -> ScannerResult<Arc<dyn PolarityScorer>>;
}

/// Lexicons compiled into this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLexicons;

impl BuiltinLexicons {
    pub const KNOWN: &'static [&'static str] = &[VADER_LEXICON];
}

impl LexiconProvider for BuiltinLexicons {
    fn load(&self, lexicon: &str) -> ScannerResult<Arc<dyn PolarityScorer>> {
        match lexicon {
            VADER_LEXICON => {
                tracing::debug!(lexicon, "loading builtin lexicon");
                Ok(Arc::new(VaderScorer::new()))
            }
            other => Err(ScannerError::initialization(
                other,
                format!(
                    "lexicon is not available (known: {})",
                    Self::KNOWN.join(", ")
                ),
            )),
        }
    }
}

/// VADER analyzer backed by the `vader_sentiment` crate.
///
/// The analyzer is a view over the crate's static lexicon tables, so it is
/// built per call rather than stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderScorer;

impl VaderScorer {
    pub fn new() -> Self {
        Self
    }
}

impl PolarityScorer for VaderScorer {
    fn polarity_scores(&self, text: &str) -> ScannerResult<PolarityScores> {
        if text.trim().is_empty() {
            return Ok(PolarityScores::neutral());
        }
        let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();
        let raw = analyzer.polarity_scores(text);
        scores_from_map(&raw)
    }
}

fn scores_from_map(raw: &HashMap<&str, f64>) -> ScannerResult<PolarityScores> {
    let compound = raw
        .get("compound")
        .copied()
        .ok_or_else(|| ScannerError::scoring("analyzer output has no 'compound' score"))?;
    if !compound.is_finite() {
        return Err(ScannerError::scoring(format!(
            "analyzer returned non-finite compound score: {}",
            compound
        )));
    }
    let neg = raw.get("neg").copied().unwrap_or(0.0);
    let pos = raw.get("pos").copied().unwrap_or(0.0);
    // With no polar words the sentiment total is zero and punctuation must not
    // move it; vader_sentiment still subtracts the `!`/`?` boost in that case.
    let compound = if pos == 0.0 && neg == 0.0 { 0.0 } else { compound };
    Ok(PolarityScores {
        neg,
        neu: raw.get("neu").copied().unwrap_or(0.0),
        pos,
        compound,
    })
}
