//! Action descriptors and the callback seam.
//!
//! A descriptor pairs an [`ActionSpec`] (plain data) with an optional
//! [`QuickAction`] (behavior). The trait is the only seam between the engine
//! and caller code, which keeps the engine testable with mock actions.

use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;
use quickaction_core::{ActionError, ActionSpec, Badge, DescriptorError, Size, Variant};

use crate::machine::Gate;

// =============================================================================
// QuickAction Trait
// =============================================================================

/// Caller-supplied unit of asynchronous work.
///
/// Returns a `'static` future so the engine can spawn it however it wants.
/// Only success or failure is observed.
#[cfg_attr(test, mockall::automock)]
pub trait QuickAction: Send + Sync {
    fn run(&self) -> BoxFuture<'static, Result<(), ActionError>>;
}

/// Adapter that turns an async closure into a [`QuickAction`].
pub struct FnAction<F>(F);

impl<F, Fut> QuickAction for FnAction<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), ActionError>> + Send + 'static,
{
    fn run(&self) -> BoxFuture<'static, Result<(), ActionError>> {
        Box::pin((self.0)())
    }
}

/// Wrap an async closure as an action.
pub fn action_fn<F, Fut>(f: F) -> FnAction<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), ActionError>> + Send + 'static,
{
    FnAction(f)
}

/// Run an action, converting panics into `ActionFailed`.
///
/// Failures stop here: callers only ever see a `Result`.
pub(crate) async fn invoke(action: Arc<dyn QuickAction>) -> Result<(), ActionError> {
    let future = match std::panic::catch_unwind(AssertUnwindSafe(|| action.run())) {
        Ok(future) => future,
        Err(_) => return Err(ActionError::failed("action panicked")),
    };

    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(result) => result,
        Err(_) => Err(ActionError::failed("action panicked")),
    }
}

// =============================================================================
// ActionDescriptor
// =============================================================================

/// Everything needed to mount one quick action.
///
/// Immutable once handed to a button. The label is validated at construction.
#[derive(Clone)]
pub struct ActionDescriptor {
    spec: ActionSpec,
    action: Option<Arc<dyn QuickAction>>,
}

impl ActionDescriptor {
    /// Create a descriptor with the given label and no action.
    pub fn new(label: impl Into<String>) -> Result<Self, DescriptorError> {
        Ok(Self {
            spec: ActionSpec::new(label)?,
            action: None,
        })
    }

    /// Wrap a spec loaded from data.
    pub fn from_spec(spec: ActionSpec) -> Result<Self, DescriptorError> {
        spec.validate()?;
        Ok(Self { spec, action: None })
    }

    /// Attach the action to run on activation.
    pub fn with_action(self, action: impl QuickAction + 'static) -> Self {
        self.with_shared_action(Arc::new(action))
    }

    /// Attach an action that is shared with other descriptors.
    pub fn with_shared_action(mut self, action: Arc<dyn QuickAction>) -> Self {
        self.action = Some(action);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.spec = self.spec.with_description(description);
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.spec = self.spec.with_icon(icon);
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.spec = self.spec.with_variant(variant);
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.spec = self.spec.with_size(size);
        self
    }

    pub fn with_badge(mut self, badge: impl Into<Badge>) -> Self {
        self.spec = self.spec.with_badge(badge);
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.spec = self.spec.with_disabled(disabled);
        self
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.spec = self.spec.with_loading(loading);
        self
    }

    pub fn with_magnetic_hover(mut self, magnetic: bool) -> Self {
        self.spec = self.spec.with_magnetic_hover(magnetic);
        self
    }

    pub fn spec(&self) -> &ActionSpec {
        &self.spec
    }

    pub fn label(&self) -> &str {
        &self.spec.label
    }

    pub fn action(&self) -> Option<&Arc<dyn QuickAction>> {
        self.action.as_ref()
    }

    /// Activation gate derived from this descriptor.
    pub fn gate(&self) -> Gate {
        Gate {
            disabled: self.spec.disabled,
            loading: self.spec.loading,
            has_action: self.action.is_some(),
        }
    }
}

impl fmt::Debug for ActionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionDescriptor")
            .field("spec", &self.spec)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_rejects_empty_label() {
        assert!(matches!(
            ActionDescriptor::new(""),
            Err(DescriptorError::EmptyLabel)
        ));
    }

    #[test]
    fn test_gate_reflects_descriptor() {
        let descriptor = ActionDescriptor::new("Request Refill").unwrap();
        assert_eq!(
            descriptor.gate(),
            Gate {
                disabled: false,
                loading: false,
                has_action: false,
            }
        );

        let descriptor = descriptor
            .with_action(action_fn(|| async { Ok::<(), ActionError>(()) }))
            .with_disabled(true);
        assert_eq!(
            descriptor.gate(),
            Gate {
                disabled: true,
                loading: false,
                has_action: true,
            }
        );
    }

    #[test]
    fn test_builder_keeps_label() {
        let descriptor = ActionDescriptor::new("Lab Results")
            .unwrap()
            .with_variant(Variant::Warning)
            .with_badge("2")
            .with_description("View test results");
        assert_eq!(descriptor.label(), "Lab Results");
        assert_eq!(descriptor.spec().variant, Variant::Warning);
        assert_eq!(descriptor.spec().badge, Some(Badge::Text("2".to_string())));
    }

    #[tokio::test]
    async fn test_invoke_passes_result_through() {
        let ok: Arc<dyn QuickAction> =
            Arc::new(action_fn(|| async { Ok::<(), ActionError>(()) }));
        assert_eq!(invoke(ok).await, Ok(()));

        let err: Arc<dyn QuickAction> = Arc::new(action_fn(|| async {
            Err::<(), ActionError>(ActionError::failed("offline"))
        }));
        assert_eq!(invoke(err).await, Err(ActionError::failed("offline")));
    }

    #[tokio::test]
    async fn test_invoke_catches_panics() {
        let panicking: Arc<dyn QuickAction> = Arc::new(action_fn(|| async {
            let fail = true;
            if fail {
                panic!("boom");
            }
            Ok::<(), ActionError>(())
        }));
        assert!(matches!(
            invoke(panicking).await,
            Err(ActionError::ActionFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_invoke_catches_synchronous_panics() {
        struct PanicsOnRun;

        impl QuickAction for PanicsOnRun {
            fn run(&self) -> BoxFuture<'static, Result<(), ActionError>> {
                panic!("before future")
            }
        }

        let action: Arc<dyn QuickAction> = Arc::new(PanicsOnRun);
        assert!(matches!(
            invoke(action).await,
            Err(ActionError::ActionFailed(_))
        ));
    }
}
