//! Per-instance runtime for a quick action.
//!
//! [`QuickActionButton`] owns one lifecycle. It feeds events into
//! [`machine::transition`](crate::machine::transition) and applies the
//! returned effects on the tokio runtime.
//!
//! ## Disposal
//!
//! Completions and reset timers run on detached tasks that may outlive the
//! button. Every such task carries the generation it was started with. The
//! button bumps the generation when it is dropped, so a late task finds a
//! mismatch and returns without touching state.
//!
//! ## Observation
//!
//! Mutation = notification. Every applied transition updates the `watch`
//! channel with the current state and publishes a [`Transition`] record on a
//! `broadcast` channel, which keeps the full ordered sequence.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use quickaction_core::{EngineConfig, EngineError, TimingConfig};
use tokio::sync::{broadcast, watch};
use tokio::time::Instant;

use crate::action::{invoke, ActionDescriptor, QuickAction};
use crate::feedback::Feedback;
use crate::machine::{transition, ActionEvent, ActionState, Effect, Gate, Ignored, Step};
use crate::pointer::{Point, PointerOffset, PointerTracker, Rect};

/// Capacity of the transition broadcast. One cycle produces three records.
const TRANSITION_CAPACITY: usize = 32;

// =============================================================================
// Public Types
// =============================================================================

/// Unique identifier for a button instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(pub u64);

impl InstanceId {
    /// Generate a new unique instance ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

/// One applied state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub instance: InstanceId,
    pub from: ActionState,
    pub to: ActionState,
    /// Activation cycle the change belongs to.
    pub generation: u64,
    pub at: Instant,
}

/// Outcome of [`QuickActionButton::activate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// A new cycle started and the action was invoked.
    Started { generation: u64 },
    /// Nothing happened.
    Ignored(Ignored),
}

// =============================================================================
// Shared State
// =============================================================================

#[derive(Debug)]
struct Core {
    state: ActionState,
    /// Bumped on every new cycle and on disposal.
    generation: u64,
    disposed: bool,
    tracker: PointerTracker,
}

/// State shared between the button and its in-flight tasks.
struct Shared {
    id: InstanceId,
    label: String,
    gate: Gate,
    timing: TimingConfig,
    action: Option<Arc<dyn QuickAction>>,
    core: Mutex<Core>,
    state_tx: watch::Sender<ActionState>,
    transition_tx: broadcast::Sender<Transition>,
}

impl Shared {
    /// Feed an event on behalf of a task started in `generation`.
    ///
    /// Returns the effects to apply, or `None` if the task is stale or the
    /// event was ignored.
    fn apply_for(&self, generation: u64, event: ActionEvent) -> Option<Vec<Effect>> {
        let mut core = self.core.lock();
        if core.disposed || core.generation != generation {
            tracing::debug!(
                "[{}] dropping {:?} from stale generation {} (current {}, disposed {})",
                self.label,
                event,
                generation,
                core.generation,
                core.disposed
            );
            return None;
        }

        match transition(core.state, &event, self.gate, &self.timing) {
            Step::Moved { to, effects } => {
                self.commit(&mut core, to);
                Some(effects)
            }
            Step::Ignored(reason) => {
                tracing::warn!("[{}] {:?} ignored: {:?}", self.label, event, reason);
                None
            }
        }
    }

    /// Store the new state and notify subscribers. Caller holds the lock.
    fn commit(&self, core: &mut Core, to: ActionState) {
        let from = core.state;
        core.state = to;
        tracing::debug!(
            "[{}] {:?} -> {:?} (generation {})",
            self.label,
            from,
            to,
            core.generation
        );
        self.state_tx.send_replace(to);
        let _ = self.transition_tx.send(Transition {
            instance: self.id,
            from,
            to,
            generation: core.generation,
            at: Instant::now(),
        });
    }
}

/// Apply effects until the cycle settles or goes stale.
async fn run_effects(shared: Arc<Shared>, generation: u64, effects: Vec<Effect>) {
    let mut pending: VecDeque<Effect> = effects.into();

    while let Some(effect) = pending.pop_front() {
        let next = match effect {
            Effect::InvokeAction => {
                let Some(action) = shared.action.clone() else {
                    tracing::warn!("[{}] InvokeAction without an action", shared.label);
                    return;
                };
                let outcome = invoke(action).await;
                if let Err(e) = &outcome {
                    tracing::debug!("[{}] {}", shared.label, e);
                }
                shared.apply_for(generation, ActionEvent::Completed(outcome))
            }
            Effect::ScheduleReset(delay) => {
                tokio::time::sleep(delay).await;
                shared.apply_for(generation, ActionEvent::ResetElapsed)
            }
        };

        match next {
            Some(effects) => pending.extend(effects),
            None => return,
        }
    }
}

// =============================================================================
// QuickActionButton
// =============================================================================

/// One mounted quick action.
///
/// Created idle. Dropping the button disposes it: no later completion or
/// timer can change its state.
pub struct QuickActionButton {
    descriptor: ActionDescriptor,
    shared: Arc<Shared>,
}

impl QuickActionButton {
    /// Mount a descriptor.
    pub fn new(descriptor: ActionDescriptor, config: &EngineConfig) -> Self {
        let (state_tx, _) = watch::channel(ActionState::Idle);
        let (transition_tx, _) = broadcast::channel(TRANSITION_CAPACITY);
        let spec = descriptor.spec();

        let shared = Arc::new(Shared {
            id: InstanceId::new(),
            label: spec.label.clone(),
            gate: descriptor.gate(),
            timing: config.timing.clone(),
            action: descriptor.action().cloned(),
            core: Mutex::new(Core {
                state: ActionState::Idle,
                generation: 0,
                disposed: false,
                tracker: PointerTracker::new(
                    &config.magnetic,
                    spec.magnetic_hover && !spec.disabled,
                ),
            }),
            state_tx,
            transition_tx,
        });

        Self { descriptor, shared }
    }

    pub fn id(&self) -> InstanceId {
        self.shared.id
    }

    pub fn descriptor(&self) -> &ActionDescriptor {
        &self.descriptor
    }

    pub fn label(&self) -> &str {
        self.descriptor.label()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ActionState {
        self.shared.core.lock().state
    }

    /// Current activation cycle.
    pub fn generation(&self) -> u64 {
        self.shared.core.lock().generation
    }

    /// Subscribe to state changes.
    ///
    /// The receiver sees the current state immediately and the latest state
    /// after each change. Intermediate states may be coalesced; use
    /// [`transitions`](Self::transitions) for the full sequence.
    pub fn subscribe(&self) -> watch::Receiver<ActionState> {
        self.shared.state_tx.subscribe()
    }

    /// Subscribe to every applied transition, in order.
    pub fn transitions(&self) -> broadcast::Receiver<Transition> {
        self.shared.transition_tx.subscribe()
    }

    /// Request a new cycle.
    ///
    /// Ignored while disabled, externally loading, without an action, or while
    /// a cycle is in progress. Starting a cycle needs a tokio runtime to run
    /// the action and the reset timer on.
    pub fn activate(&self) -> Result<Activation, EngineError> {
        let (handle, generation, effects) = {
            let mut core = self.shared.core.lock();
            match transition(
                core.state,
                &ActionEvent::Activate,
                self.shared.gate,
                &self.shared.timing,
            ) {
                Step::Moved { to, effects } => {
                    let handle = tokio::runtime::Handle::try_current()
                        .map_err(|_| EngineError::RuntimeUnavailable)?;
                    core.generation += 1;
                    self.shared.commit(&mut core, to);
                    (handle, core.generation, effects)
                }
                Step::Ignored(reason) => {
                    tracing::trace!("[{}] activation ignored: {:?}", self.label(), reason);
                    return Ok(Activation::Ignored(reason));
                }
            }
        };

        handle.spawn(run_effects(self.shared.clone(), generation, effects));
        Ok(Activation::Started { generation })
    }

    /// Pointer moved over the control.
    pub fn pointer_move(&self, bounds: Rect, pointer: Point) -> PointerOffset {
        self.shared.core.lock().tracker.pointer_move(bounds, pointer)
    }

    /// Pointer left the control.
    pub fn pointer_leave(&self) -> PointerOffset {
        self.shared.core.lock().tracker.pointer_leave()
    }

    pub fn offset(&self) -> PointerOffset {
        self.shared.core.lock().tracker.offset()
    }

    /// What to paint right now.
    pub fn feedback(&self) -> Feedback {
        let (state, offset) = {
            let core = self.shared.core.lock();
            (core.state, core.tracker.offset())
        };
        Feedback::derive(self.descriptor.spec(), state, offset)
    }

    /// Unmount the button. Equivalent to dropping it.
    pub fn dispose(self) {}
}

impl Drop for QuickActionButton {
    fn drop(&mut self) {
        let mut core = self.shared.core.lock();
        core.disposed = true;
        core.generation += 1;
        tracing::trace!("[{}] disposed in {:?}", self.shared.label, core.state);
    }
}

impl std::fmt::Debug for QuickActionButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuickActionButton")
            .field("id", &self.shared.id)
            .field("label", &self.shared.label)
            .field("state", &self.state())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
