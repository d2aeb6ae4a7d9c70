//! Grid composition.
//!
//! A [`QuickActionsGrid`] mounts one independent [`QuickActionButton`] per
//! descriptor. Insertion order is display order: left to right, then top to
//! bottom. Entrance animations are staggered by index.

use std::collections::HashSet;
use std::time::Duration;

use quickaction_core::{ColumnPolicy, EngineConfig, EngineError, GridColumns};

use crate::action::ActionDescriptor;
use crate::button::{Activation, QuickActionButton};
use crate::machine::ActionState;
use crate::pointer::{Point, PointerOffset, Rect};

/// Cubic-bezier easing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier(pub f32, pub f32, pub f32, pub f32);

impl CubicBezier {
    /// Standard ease-in-out used for grid entrances.
    pub const STANDARD: CubicBezier = CubicBezier(0.4, 0.0, 0.2, 1.0);
}

/// When and how one grid item animates in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceTiming {
    pub delay: Duration,
    pub duration: Duration,
    pub easing: CubicBezier,
}

/// Row/column position of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub row: usize,
    pub column: usize,
}

/// Ordered, independent quick actions.
pub struct QuickActionsGrid {
    columns: GridColumns,
    config: EngineConfig,
    buttons: Vec<QuickActionButton>,
}

impl QuickActionsGrid {
    /// Mount every descriptor, preserving order.
    pub fn new(
        descriptors: impl IntoIterator<Item = ActionDescriptor>,
        columns: GridColumns,
        config: &EngineConfig,
    ) -> Self {
        let mut seen = HashSet::new();
        let buttons: Vec<QuickActionButton> = descriptors
            .into_iter()
            .map(|descriptor| {
                if !seen.insert(descriptor.label().to_string()) {
                    tracing::warn!("Duplicate quick action label: {}", descriptor.label());
                }
                QuickActionButton::new(descriptor, config)
            })
            .collect();

        tracing::debug!(
            "Mounted grid of {} quick actions ({})",
            buttons.len(),
            columns.policy()
        );

        Self {
            columns,
            config: config.clone(),
            buttons,
        }
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn columns(&self) -> GridColumns {
        self.columns
    }

    pub fn policy(&self) -> ColumnPolicy {
        self.columns.policy()
    }

    /// Instances in display order.
    pub fn iter(&self) -> impl Iterator<Item = &QuickActionButton> {
        self.buttons.iter()
    }

    pub fn get(&self, index: usize) -> Result<&QuickActionButton, EngineError> {
        self.buttons.get(index).ok_or(EngineError::IndexOutOfRange {
            index,
            len: self.buttons.len(),
        })
    }

    /// Labels in display order.
    pub fn labels(&self) -> Vec<&str> {
        self.buttons.iter().map(|b| b.label()).collect()
    }

    /// Current state of every instance, in display order.
    pub fn states(&self) -> Vec<ActionState> {
        self.buttons.iter().map(|b| b.state()).collect()
    }

    pub fn activate(&self, index: usize) -> Result<Activation, EngineError> {
        self.get(index)?.activate()
    }

    pub fn pointer_move(
        &self,
        index: usize,
        bounds: Rect,
        pointer: Point,
    ) -> Result<PointerOffset, EngineError> {
        Ok(self.get(index)?.pointer_move(bounds, pointer))
    }

    pub fn pointer_leave(&self, index: usize) -> Result<PointerOffset, EngineError> {
        Ok(self.get(index)?.pointer_leave())
    }

    /// Unmount one instance. Later items shift up by one.
    pub fn remove(&mut self, index: usize) -> Result<(), EngineError> {
        if index >= self.buttons.len() {
            return Err(EngineError::IndexOutOfRange {
                index,
                len: self.buttons.len(),
            });
        }
        self.buttons.remove(index).dispose();
        Ok(())
    }

    /// Entrance timing for the item at `index`.
    pub fn entrance(&self, index: usize) -> EntranceTiming {
        let timing = &self.config.timing;
        let step = u32::try_from(index).unwrap_or(u32::MAX);
        EntranceTiming {
            delay: timing.stagger().saturating_mul(step),
            duration: timing.entrance(),
            easing: CubicBezier::STANDARD,
        }
    }

    /// Cell of the item at `index` for a viewport `width` in pixels.
    pub fn cell(&self, index: usize, width: f32) -> GridCell {
        let columns = usize::from(self.policy().columns_at(width).max(1));
        GridCell {
            row: index / columns,
            column: index % columns,
        }
    }
}

impl std::fmt::Debug for QuickActionsGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuickActionsGrid")
            .field("columns", &self.columns)
            .field("buttons", &self.buttons)
            .finish()
    }
}
