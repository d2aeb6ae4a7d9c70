//! Core types for the quick-action interaction engine.
//!
//! This crate contains the plain data shared by the engine and its hosts:
//! - Action specs and badges
//! - Visual variants and size metrics
//! - Grid column policies
//! - Engine configuration
//! - Error types

mod action;
mod config;
mod error;
mod layout;
mod style;

pub use action::{ActionSpec, Badge};
pub use config::{
    config_dir, config_path, EngineConfig, MagneticConfig, SpringHint, TimingConfig,
};
pub use error::{ActionError, ConfigError, DescriptorError, EngineError};
pub use layout::{Breakpoint, ColumnPolicy, GridColumns};
pub use style::{ColorToken, Fill, Size, SizeMetrics, Variant, VariantStyle};
