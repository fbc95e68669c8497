//! Exit codes for the `guardrail` binary.
//! These are part of the public contract for scripts gating on scan results.

pub const SUCCESS: i32 = 0;
pub const FLAGGED: i32 = 1; // Prompt failed a scanner
pub const CONFIG_ERROR: i32 = 2; // Config, lexicon or scan error
