//! Demo errors.

use quickaction_core::{DescriptorError, EngineError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Unknown dashboard '{0}' (expected 'patient' or 'provider')")]
    UnknownDashboard(String),

    #[error("Invalid dashboard data: {0}")]
    Parse(String),

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}
