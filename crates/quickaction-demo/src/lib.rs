//! Dashboard demo for the quick-action engine.
//!
//! Loads a patient or provider dashboard from embedded JSON, backs every
//! quick action with a simulated unit of work, and drives each one through
//! a full lifecycle.

pub mod dashboard;
pub mod error;
pub mod session;
pub mod simulate;

pub use dashboard::{Dashboard, DashboardKind, DemoAction};
pub use error::DemoError;
pub use session::{run_dashboard, CycleReport};
pub use simulate::SimulatedAction;
