//! Quick-action interaction engine.
//!
//! This crate drives actionable controls without owning any rendering:
//! - `machine` - pure lifecycle transitions that return effects
//! - `QuickActionButton` - per-instance runtime that applies those effects
//! - `PointerTracker` - magnetic hover displacement
//! - `Feedback` - what a renderer should paint for the current state
//! - `QuickActionsGrid` - ordered instances with staggered entrances
//! - `FloatingActionButton` - icon-only action without a lifecycle

pub mod action;
pub mod button;
pub mod feedback;
pub mod floating;
pub mod grid;
pub mod machine;
pub mod pointer;

// Re-export commonly used types
pub use action::{action_fn, ActionDescriptor, FnAction, QuickAction};
pub use button::{Activation, InstanceId, QuickActionButton, Transition};
pub use feedback::{Feedback, Icon, StateDisplay, Tone};
pub use floating::{FloatingActionButton, FloatingLayout};
pub use grid::{CubicBezier, EntranceTiming, GridCell, QuickActionsGrid};
pub use machine::{transition, ActionEvent, ActionState, Effect, Gate, Ignored, Step};
pub use pointer::{Point, PointerOffset, PointerTracker, Rect};

// Re-export quickaction_core types for convenience
pub use quickaction_core::{
    ActionError, ActionSpec, Badge, EngineConfig, EngineError, GridColumns, Size, Variant,
};
