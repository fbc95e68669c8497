//! Decision reporting for scanners.
//!
//! Scanners do not log through a global logger directly; they report each
//! decision to a [`ScanObserver`] handed in at construction. The default
//! [`TracingObserver`] turns those reports into `tracing` events.

use tracing::Level;

pub trait ScanObserver: Send + Sync {
    fn on_decision(&self, level: Level, message: &str);
}

/// Forwards decisions to `tracing` under the `guardrail::scanner` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ScanObserver for TracingObserver {
    fn on_decision(&self, level: Level, message: &str) {
        // tracing macros need a const level
        match level {
            Level::ERROR => tracing::error!(target: "guardrail::scanner", "{}", message),
            Level::WARN => tracing::warn!(target: "guardrail::scanner", "{}", message),
            Level::INFO => tracing::info!(target: "guardrail::scanner", "{}", message),
            Level::DEBUG => tracing::debug!(target: "guardrail::scanner", "{}", message),
            _ => tracing::trace!(target: "guardrail::scanner", "{}", message),
        }
    }
}
