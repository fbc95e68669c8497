use std::io::Read;

use anyhow::Context;
use guardrail_scanners::{load_config, SentimentConfig, SentimentScanner};

use super::args::{Command, SentimentArgs};
use crate::exit_codes;

pub fn dispatch(cmd: Command) -> anyhow::Result<i32> {
    match cmd {
        Command::Sentiment(args) => cmd_sentiment(args),
    }
}

/// Flags override the config file, which overrides defaults.
pub(crate) fn resolve_config(args: &SentimentArgs) -> anyhow::Result<SentimentConfig> {
    let mut cfg = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading sentiment config from {}", path.display()))?,
        None => SentimentConfig::default(),
    };
    if let Some(threshold) = args.threshold {
        cfg.threshold = threshold;
    }
    if let Some(lexicon) = &args.lexicon {
        cfg.lexicon = lexicon.clone();
    }
    Ok(cfg)
}

fn read_prompt(args: &SentimentArgs) -> anyhow::Result<String> {
    if let Some(prompt) = &args.prompt {
        return Ok(prompt.clone());
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("reading prompt from stdin")?;
    // drop the newline a shell pipe appends
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}

fn cmd_sentiment(args: SentimentArgs) -> anyhow::Result<i32> {
    let cfg = resolve_config(&args)?;
    tracing::debug!(threshold = cfg.threshold, lexicon = %cfg.lexicon, "building sentiment scanner");
    let scanner = SentimentScanner::from_config(cfg).context("initializing sentiment scanner")?;

    let prompt = read_prompt(&args)?;
    let result = scanner.scan(&prompt).context("scanning prompt")?;

    println!("{}", serde_json::to_string(&result)?);

    Ok(if result.is_valid {
        exit_codes::SUCCESS
    } else {
        exit_codes::FLAGGED
    })
}
