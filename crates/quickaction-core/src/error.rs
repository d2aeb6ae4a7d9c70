//! Error types for the quick-action engine.

use thiserror::Error;

/// Failure reported by a caller-supplied action.
///
/// This is the only failure the lifecycle machine models. It is absorbed by
/// the machine and never surfaced beyond the transient `Failed` state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action rejected, returned an error or panicked.
    #[error("Action failed: {0}")]
    ActionFailed(String),
}

impl ActionError {
    /// Convenience constructor.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::ActionFailed(message.into())
    }
}

/// Engine errors - surfaced to the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Activation was requested outside a tokio runtime.
    #[error("Tokio runtime unavailable")]
    RuntimeUnavailable,

    /// Grid lookup past the end of the instance list.
    #[error("Index {index} out of range for grid of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors building an action descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// Labels must contain visible text.
    #[error("Action label must not be empty")]
    EmptyLabel,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value parsed but is out of range.
    #[error("Invalid config: {0}")]
    Invalid(String),
}
