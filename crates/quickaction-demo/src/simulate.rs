//! Simulated actions standing in for real portal requests.

use std::time::Duration;

use futures::future::BoxFuture;
use quickaction_core::ActionError;
use quickaction_engine::QuickAction;

/// Sleeps for a fixed latency, then succeeds or fails.
#[derive(Debug, Clone)]
pub struct SimulatedAction {
    label: String,
    latency: Duration,
    fail: bool,
}

impl SimulatedAction {
    pub fn new(label: impl Into<String>, latency: Duration, fail: bool) -> Self {
        Self {
            label: label.into(),
            latency,
            fail,
        }
    }
}

impl QuickAction for SimulatedAction {
    fn run(&self) -> BoxFuture<'static, Result<(), ActionError>> {
        let label = self.label.clone();
        let latency = self.latency;
        let fail = self.fail;

        Box::pin(async move {
            tracing::info!("{}: request sent", label);
            tokio::time::sleep(latency).await;
            if fail {
                Err(ActionError::failed(format!("{} is unavailable", label)))
            } else {
                Ok(())
            }
        })
    }
}
