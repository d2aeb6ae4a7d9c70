//! Lifecycle state machine for a single quick action.
//!
//! The machine is a pure function `(state, event) -> step`. It never spawns,
//! sleeps or invokes anything itself; it returns [`Effect`]s that the owning
//! runtime applies. This keeps every transition testable without a clock.
//!
//! ```text
//! Idle --activate--> Running --ok--> Succeeded --reset--> Idle
//!                        \--err--> Failed ------reset--> Idle
//! ```

use std::time::Duration;

use quickaction_core::{ActionError, TimingConfig};

// =============================================================================
// State
// =============================================================================

/// Observable lifecycle of one instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ActionState {
    #[default]
    Idle,
    Running,
    Succeeded,
    Failed,
}

impl ActionState {
    pub fn is_idle(self) -> bool {
        self == ActionState::Idle
    }

    pub fn is_running(self) -> bool {
        self == ActionState::Running
    }

    /// `Succeeded` or `Failed`, waiting for auto-reset.
    pub fn is_settled(self) -> bool {
        matches!(self, ActionState::Succeeded | ActionState::Failed)
    }
}

// =============================================================================
// Events and Effects
// =============================================================================

/// Input to the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionEvent {
    /// User asked to run the action.
    Activate,
    /// The action finished.
    Completed(Result<(), ActionError>),
    /// The auto-reset timer fired.
    ResetElapsed,
}

/// Work the runtime must perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Start the caller-supplied action.
    InvokeAction,
    /// Deliver `ResetElapsed` after the delay.
    ScheduleReset(Duration),
}

// =============================================================================
// Gate
// =============================================================================

/// Descriptor-level conditions that block activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
    pub disabled: bool,
    /// Busy flag forced by the host.
    pub loading: bool,
    pub has_action: bool,
}

impl Gate {
    /// A gate that lets activation through.
    pub fn open() -> Self {
        Self {
            disabled: false,
            loading: false,
            has_action: true,
        }
    }
}

impl Default for Gate {
    fn default() -> Self {
        Self::open()
    }
}

// =============================================================================
// Transition
// =============================================================================

/// Why an event left the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    Disabled,
    Loading,
    NoAction,
    /// A cycle is already in progress.
    Busy(ActionState),
    /// The event does not apply to the current state.
    OutOfOrder(ActionState),
}

/// Result of feeding one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Moved { to: ActionState, effects: Vec<Effect> },
    Ignored(Ignored),
}

impl Step {
    pub fn is_moved(&self) -> bool {
        matches!(self, Step::Moved { .. })
    }
}

/// Compute the next step.
///
/// Total over `(state, event)`: every pair either moves or is ignored with a
/// reason. A disabled gate wins over everything else for `Activate`.
pub fn transition(
    state: ActionState,
    event: &ActionEvent,
    gate: Gate,
    timing: &TimingConfig,
) -> Step {
    use ActionState::*;

    match (state, event) {
        (_, ActionEvent::Activate) if gate.disabled => Step::Ignored(Ignored::Disabled),
        (_, ActionEvent::Activate) if gate.loading => Step::Ignored(Ignored::Loading),
        (_, ActionEvent::Activate) if !gate.has_action => Step::Ignored(Ignored::NoAction),
        (Idle, ActionEvent::Activate) => Step::Moved {
            to: Running,
            effects: vec![Effect::InvokeAction],
        },
        (busy, ActionEvent::Activate) => Step::Ignored(Ignored::Busy(busy)),

        (Running, ActionEvent::Completed(Ok(()))) => Step::Moved {
            to: Succeeded,
            effects: vec![Effect::ScheduleReset(timing.success_reset())],
        },
        (Running, ActionEvent::Completed(Err(_))) => Step::Moved {
            to: Failed,
            effects: vec![Effect::ScheduleReset(timing.error_reset())],
        },

        (Succeeded | Failed, ActionEvent::ResetElapsed) => Step::Moved {
            to: Idle,
            effects: Vec::new(),
        },

        (other, _) => Step::Ignored(Ignored::OutOfOrder(other)),
    }
}

// =============================================================================
// Tests
// =============================================================================
