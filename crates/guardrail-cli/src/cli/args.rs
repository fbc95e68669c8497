use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "guardrail",
    version,
    about = "Prompt input scanners for LLM applications"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Flag prompts with negative sentiment
    Sentiment(SentimentArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SentimentArgs {
    /// Prompt to scan; read from stdin when omitted
    pub prompt: Option<String>,

    /// YAML config file (bare or under a `sentiment:` key)
    #[arg(long, env = "GUARDRAIL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Compound score at or below which the prompt is flagged, in [-1, 1]
    #[arg(long, allow_hyphen_values = true)]
    pub threshold: Option<f64>,

    /// Lexicon identifier
    #[arg(long)]
    pub lexicon: Option<String>,
}
