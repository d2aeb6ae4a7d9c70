//! Floating action button.
//!
//! An icon-only control pinned to the bottom-right corner. Unlike
//! [`QuickActionButton`](crate::QuickActionButton) it has no lifecycle: a
//! press runs the action and nothing is shown for the outcome.

use std::sync::Arc;

use quickaction_core::{EngineError, SpringHint, Variant, VariantStyle};
use tokio::task::JoinHandle;

use crate::action::{invoke, QuickAction};

/// Placement and size of the floating button, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingLayout {
    /// Distance from the bottom and right edges.
    pub inset: f32,
    pub diameter: f32,
    pub icon: f32,
    pub spring: SpringHint,
}

impl FloatingLayout {
    pub const DEFAULT: FloatingLayout = FloatingLayout {
        inset: 24.0,
        diameter: 56.0,
        icon: 24.0,
        spring: SpringHint::FLOATING,
    };
}

pub struct FloatingActionButton {
    icon: String,
    variant: Variant,
    disabled: bool,
    action: Option<Arc<dyn QuickAction>>,
}

impl FloatingActionButton {
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            variant: Variant::Primary,
            disabled: false,
            action: None,
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_action(mut self, action: impl QuickAction + 'static) -> Self {
        self.action = Some(Arc::new(action));
        self
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn style(&self) -> VariantStyle {
        self.variant.style()
    }

    pub fn layout(&self) -> FloatingLayout {
        FloatingLayout::DEFAULT
    }

    /// Run the action in the background.
    ///
    /// Returns `None` when disabled or when there is no action. Failures are
    /// logged and dropped.
    pub fn press(&self) -> Result<Option<JoinHandle<()>>, EngineError> {
        let Some(action) = self.action.clone().filter(|_| !self.disabled) else {
            return Ok(None);
        };
        let handle =
            tokio::runtime::Handle::try_current().map_err(|_| EngineError::RuntimeUnavailable)?;

        let icon = self.icon.clone();
        Ok(Some(handle.spawn(async move {
            if let Err(e) = invoke(action).await {
                tracing::warn!("Floating action '{}' failed: {}", icon, e);
            }
        })))
    }
}

impl std::fmt::Debug for FloatingActionButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FloatingActionButton")
            .field("icon", &self.icon)
            .field("variant", &self.variant)
            .field("disabled", &self.disabled)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}
