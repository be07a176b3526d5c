//! Error types for scheduler construction and configuration.

use thiserror::Error;

/// Errors produced while building the scheduling core.
///
/// The core performs no I/O and no external calls, so every variant is a
/// configuration or programming error surfaced at construction time; nothing
/// is recovered mid-run.
#[derive(Debug, Error)]
pub enum FlowError {
    /// A stage was configured with zero resource units.
    #[error("stage `{stage}` configured with zero resource units")]
    InvalidCapacity {
        /// Stage the rejected unit count was meant for.
        stage: String,
    },
    /// A passenger's base priority falls outside the accepted 1-5 range.
    #[error("passenger `{name}` has priority {value}, expected 1-5")]
    InvalidPriority {
        /// Passenger name from the manifest.
        name: String,
        /// The rejected priority value.
        value: i32,
    },
    /// Malformed configuration or manifest input.
    #[error("config error: {0}")]
    Config(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
