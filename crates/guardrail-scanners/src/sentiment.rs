//! Sentiment input scanner.
//!
//! Flags prompts whose compound sentiment score is at or below a threshold.
//! Failing prompts get a risk score that maps the compound range
//! `[-1, threshold]` linearly onto `[0, 1]`, rounded to two decimals.

use std::sync::Arc;

use tracing::Level;

use crate::config::SentimentConfig;
use crate::error::ScannerResult;
use crate::observer::{ScanObserver, TracingObserver};
use crate::polarity::{BuiltinLexicons, LexiconProvider, PolarityScorer};
use crate::scanner::{InputScanner, ScanResult};

/// Flags prompts whose compound sentiment score is at or below `threshold`.
pub struct SentimentScanner {
    config: SentimentConfig,
    scorer: Arc<dyn PolarityScorer>,
    observer: Arc<dyn ScanObserver>,
}

impl std::fmt::Debug for SentimentScanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentScanner")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SentimentScanner {
    /// Validates `config` and resolves its lexicon through `provider`.
    pub fn new(
        config: SentimentConfig,
        provider: &dyn LexiconProvider,
        observer: Arc<dyn ScanObserver>,
    ) -> ScannerResult<Self> {
        config.validate()?;
        let scorer = provider.load(&config.lexicon)?;
        Ok(Self {
            config,
            scorer,
            observer,
        })
    }

    /// Builds a scanner over the builtin lexicons, logging through `tracing`.
    pub fn from_config(config: SentimentConfig) -> ScannerResult<Self> {
        Self::new(config, &BuiltinLexicons, Arc::new(TracingObserver))
    }

    /// Threshold `-0.1`, lexicon `vader_lexicon`.
    pub fn with_defaults() -> ScannerResult<Self> {
        Self::from_config(SentimentConfig::default())
    }

    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    pub fn lexicon(&self) -> &str {
        &self.config.lexicon
    }

    /// Scores `prompt` once and returns it unchanged with the decision.
    ///
    /// Passing prompts carry risk `0.0`; failing ones carry the normalized
    /// risk. Analyzer errors propagate as [`ScannerError::Scoring`].
    ///
    /// [`ScannerError::Scoring`]: crate::error::ScannerError::Scoring
    pub fn scan(&self, prompt: &str) -> ScannerResult<ScanResult> {
        let scores = self.scorer.polarity_scores(prompt)?;
        let threshold = self.config.threshold;

        if scores.compound > threshold {
            self.observer.on_decision(
                Level::DEBUG,
                &format!("Sentiment score: {}, threshold: {}", scores, threshold),
            );
            return Ok(ScanResult::pass(prompt));
        }

        self.observer.on_decision(
            Level::WARN,
            &format!(
                "Sentiment score is at or below threshold: {}, threshold: {}",
                scores, threshold
            ),
        );

        Ok(ScanResult::fail(
            prompt,
            normalized_risk(scores.compound, threshold),
        ))
    }
}

impl InputScanner for SentimentScanner {
    fn name(&self) -> &'static str {
        "sentiment"
    }

    fn scan(&self, prompt: &str) -> ScannerResult<ScanResult> {
        SentimentScanner::scan(self, prompt)
    }
}

/// Maps `compound` in `[-1, threshold]` onto `[0, 1]`: `-1 -> 0`, `threshold -> 1`.
pub(crate) fn normalized_risk(compound: f64, threshold: f64) -> f64 {
    let span = threshold + 1.0;
    if span <= 0.0 {
        // threshold == -1: the only failing compound is -1 itself
        return 1.0;
    }
    round2((compound + 1.0) / span).clamp(0.0, 1.0)
}

/// Rounds to two decimals from the exact decimal value, ties to even.
fn round2(v: f64) -> f64 {
    format!("{v:.2}").parse().unwrap_or(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScannerError;
    use crate::observer::testing::RecordingObserver;
    use crate::polarity::PolarityScores;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedScorer {
        compound: f64,
        calls: AtomicUsize,
    }

    impl PolarityScorer for FixedScorer {
        fn polarity_scores(&self, _text: &str) -> ScannerResult<PolarityScores> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(PolarityScores {
                compound: self.compound,
                ..PolarityScores::neutral()
            })
        }
    }

    struct FixedLexicon(Arc<FixedScorer>);

    impl LexiconProvider for FixedLexicon {
        fn load(&self, _lexicon: &str) -> ScannerResult<Arc<dyn PolarityScorer>> {
            Ok(self.0.clone())
        }
    }

    struct BrokenScorer;

    impl PolarityScorer for BrokenScorer {
        fn polarity_scores(&self, _text: &str) -> ScannerResult<PolarityScores> {
            Err(ScannerError::scoring("analyzer crashed"))
        }
    }

    struct BrokenLexicon;

    impl LexiconProvider for BrokenLexicon {
        fn load(&self, _lexicon: &str) -> ScannerResult<Arc<dyn PolarityScorer>> {
            Ok(Arc::new(BrokenScorer))
        }
    }

    fn fixed(compound: f64, threshold: f64) -> (SentimentScanner, Arc<RecordingObserver>) {
        let observer = Arc::new(RecordingObserver::default());
        let scorer = Arc::new(FixedScorer {
            compound,
            calls: AtomicUsize::new(0),
        });
        let scanner = SentimentScanner::new(
            SentimentConfig {
                threshold,
                ..Default::default()
            },
            &FixedLexicon(scorer),
            observer.clone(),
        )
        .unwrap();
        (scanner, observer)
    }

    #[test]
    fn positive_prompt_passes() {
        let scanner = SentimentScanner::with_defaults().unwrap();
        let text = "I love this, it's wonderful and great";
        let result = scanner.scan(text).unwrap();
        assert_eq!(result.into_tuple(), (text.to_string(), true, 0.0));
    }

    #[test]
    fn negative_prompt_fails_with_rounded_risk() {
        let scanner = SentimentScanner::with_defaults().unwrap();
        let text = "I hate this, it's terrible and awful";
        let result = scanner.scan(text).unwrap();
        assert_eq!(result.prompt, text);
        assert!(!result.is_valid);
        assert!(result.risk_score > 0.0 && result.risk_score <= 1.0);
        assert_eq!(result.risk_score, round2(result.risk_score));
    }

    #[test]
    fn empty_prompt_is_neutral_and_passes() {
        let scanner = SentimentScanner::with_defaults().unwrap();
        assert_eq!(scanner.scan("").unwrap(), ScanResult::pass(""));
    }

    #[test]
    fn compound_equal_to_threshold_fails() {
        let (scanner, _) = fixed(-0.1, -0.1);
        let result = scanner.scan("meh").unwrap();
        assert!(!result.is_valid);
        assert_eq!(result.risk_score, 1.0);
    }

    #[test]
    fn most_negative_compound_maps_to_zero_risk() {
        let (scanner, _) = fixed(-1.0, -0.1);
        assert_eq!(scanner.scan("x").unwrap(), ScanResult::fail("x", 0.0));
    }

    #[test]
    fn risk_is_linear_between_minus_one_and_threshold() {
        // (-0.5 + 1) / (0.0 + 1) = 0.5
        let (scanner, _) = fixed(-0.5, 0.0);
        assert_eq!(scanner.scan("x").unwrap().risk_score, 0.5);

        // (-0.6 + 1) / (-0.1 + 1) = 0.444..
        let (scanner, _) = fixed(-0.6, -0.1);
        assert_eq!(scanner.scan("x").unwrap().risk_score, 0.44);
    }

    #[test]
    fn rounding_follows_exact_decimal_value() {
        // 0.015 is stored just below the tie
        assert_eq!(round2(0.015), 0.01);
        // exact ties go to the even digit
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(normalized_risk(-0.875, 0.0), 0.12);
    }

    #[test]
    fn punctuated_neutral_prompts_pass() {
        let scanner = SentimentScanner::with_defaults().unwrap();
        for text in [
            "Where is the train station???",
            "Call me back now!!!",
            "What time is the meeting?!",
        ] {
            assert_eq!(scanner.scan(text).unwrap(), ScanResult::pass(text));
        }
    }

    #[test]
    fn threshold_minus_one_only_flags_minus_one() {
        let (scanner, _) = fixed(-1.0, -1.0);
        assert_eq!(scanner.scan("x").unwrap(), ScanResult::fail("x", 1.0));

        let (scanner, _) = fixed(-0.99, -1.0);
        assert!(scanner.scan("x").unwrap().is_valid);
    }

    #[test]
    fn observer_gets_debug_on_pass_and_warn_on_fail() {
        let (pass, pass_obs) = fixed(0.4, -0.1);
        pass.scan("fine").unwrap();
        assert_eq!(pass_obs.levels(), vec![Level::DEBUG]);

        let (fail, fail_obs) = fixed(-0.4, -0.1);
        fail.scan("bad").unwrap();
        assert_eq!(fail_obs.levels(), vec![Level::WARN]);
        let msg = fail_obs.last_message().unwrap();
        assert!(msg.contains("compound: -0.4"), "{msg}");
        assert!(msg.contains("threshold: -0.1"), "{msg}");
    }

    #[test]
    fn scan_calls_analyzer_once_and_is_idempotent() {
        let scorer = Arc::new(FixedScorer {
            compound: -0.3,
            calls: AtomicUsize::new(0),
        });
        let scanner = SentimentScanner::new(
            SentimentConfig::default(),
            &FixedLexicon(scorer.clone()),
            Arc::new(RecordingObserver::default()),
        )
        .unwrap();

        let first = scanner.scan("same").unwrap();
        assert_eq!(scorer.calls.load(Ordering::SeqCst), 1);
        let second = scanner.scan("same").unwrap();
        assert_eq!(first, second);
        assert_eq!(scorer.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn vader_scans_are_idempotent() {
        let scanner = SentimentScanner::with_defaults().unwrap();
        let text = "This is a disappointing and sad result";
        assert_eq!(scanner.scan(text).unwrap(), scanner.scan(text).unwrap());
    }

    #[test]
    fn unknown_lexicon_fails_construction() {
        let err = SentimentScanner::from_config(SentimentConfig {
            lexicon: "sentiwordnet".to_string(),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, ScannerError::Initialization { .. }));
    }

    #[test]
    fn out_of_range_threshold_fails_construction() {
        let err = SentimentScanner::from_config(SentimentConfig {
            threshold: -1.5,
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, ScannerError::InvalidConfig { .. }));
    }

    #[test]
    fn scoring_failure_propagates() {
        let scanner = SentimentScanner::new(
            SentimentConfig::default(),
            &BrokenLexicon,
            Arc::new(RecordingObserver::default()),
        )
        .unwrap();
        let err = scanner.scan("anything").unwrap_err();
        assert!(!err.is_construction());
    }

    #[test]
    fn accessors_expose_config() {
        let scanner = SentimentScanner::with_defaults().unwrap();
        assert_eq!(scanner.threshold(), -0.1);
        assert_eq!(scanner.lexicon(), "vader_lexicon");
        assert_eq!(InputScanner::name(&scanner), "sentiment");
    }

    #[test]
    fn scanner_is_shareable_across_threads() {
        let scanner = SentimentScanner::with_defaults().unwrap();
        let text = "I hate this, it's terrible and awful";
        let expected = scanner.scan(text).unwrap();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| assert_eq!(scanner.scan(text).unwrap(), expected));
            }
        });
    }

    proptest! {
        #[test]
        fn risk_in_unit_range_with_two_decimals(
            threshold in -0.99f64..=1.0,
            frac in 0.0f64..=1.0,
        ) {
            let compound = -1.0 + frac * (threshold + 1.0);
            let risk = normalized_risk(compound, threshold);
            prop_assert!((0.0..=1.0).contains(&risk));
            prop_assert_eq!(risk, round2(risk));
        }

        #[test]
        fn compound_above_threshold_always_passes(
            threshold in -1.0f64..0.99,
            delta in 0.001f64..=1.0,
        ) {
            let compound = (threshold + delta).min(1.0);
            prop_assume!(compound > threshold);
            let (scanner, _) = fixed(compound, threshold);
            prop_assert_eq!(scanner.scan("p").unwrap(), ScanResult::pass("p"));
        }
    }
}
