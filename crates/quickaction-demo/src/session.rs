//! Drives every quick action on a dashboard through one lifecycle.

use futures::future::{join_all, ready, Either};
use quickaction_core::EngineConfig;
use quickaction_engine::{
    action_fn, ActionError, ActionState, Activation, FloatingActionButton, QuickActionsGrid,
    Transition,
};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::dashboard::Dashboard;
use crate::error::DemoError;

/// States one instance passed through, activation included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub label: String,
    pub states: Vec<ActionState>,
}

impl CycleReport {
    /// `Succeeded` or `Failed`, if the cycle got that far.
    pub fn outcome(&self) -> Option<ActionState> {
        self.states.iter().copied().find(|s| s.is_settled())
    }
}

/// Mount the dashboard, activate everything, and wait for every instance to
/// return to idle.
pub async fn run_dashboard(
    dashboard: &Dashboard,
    config: &EngineConfig,
) -> Result<Vec<CycleReport>, DemoError> {
    let grid = QuickActionsGrid::new(dashboard.descriptors()?, dashboard.columns, config);
    tracing::info!(
        "{}: {} quick actions, columns {}",
        dashboard.title,
        grid.len(),
        grid.policy()
    );
    for (index, button) in grid.iter().enumerate() {
        tracing::info!(
            "  [{}] {} enters after {:?}",
            index,
            button.label(),
            grid.entrance(index).delay
        );
    }

    let receivers: Vec<_> = grid.iter().map(|b| b.transitions()).collect();

    let mut cycles = Vec::with_capacity(grid.len());
    for (index, rx) in receivers.into_iter().enumerate() {
        let label = grid.get(index)?.label().to_string();
        match grid.activate(index)? {
            Activation::Started { .. } => cycles.push(Either::Left(watch_cycle(label, rx))),
            Activation::Ignored(reason) => {
                tracing::info!("{}: not started ({:?})", label, reason);
                cycles.push(Either::Right(ready(CycleReport {
                    label,
                    states: Vec::new(),
                })));
            }
        }
    }

    let reports = join_all(cycles).await;

    let fab = FloatingActionButton::new("message-circle").with_action(action_fn(|| async {
        tracing::info!("Opening chat");
        Ok::<(), ActionError>(())
    }));
    if let Some(task) = fab.press()? {
        settle(task).await;
    }

    Ok(reports)
}

/// Wait for a detached task, reporting whether it ran to completion.
async fn settle(task: JoinHandle<()>) -> bool {
    match task.await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("floating action task failed: {}", e);
            false
        }
    }
}

/// Log transitions until the instance is back to idle.
async fn watch_cycle(label: String, mut rx: broadcast::Receiver<Transition>) -> CycleReport {
    let mut states = Vec::new();
    loop {
        match rx.recv().await {
            Ok(transition) => {
                tracing::info!("{}: {:?} -> {:?}", label, transition.from, transition.to);
                states.push(transition.to);
                if transition.to.is_idle() {
                    break;
                }
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!("{}: missed {} transitions", label, skipped);
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
    CycleReport { label, states }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::DashboardKind;

    #[tokio::test]
    async fn test_settle_reports_aborted_task() {
        let finished = tokio::spawn(async {});
        assert!(settle(finished).await);

        let aborted = tokio::spawn(std::future::pending::<()>());
        aborted.abort();
        assert!(!settle(aborted).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_patient_dashboard_cycles() {
        let dashboard = Dashboard::load(DashboardKind::Patient).unwrap();
        let reports = run_dashboard(&dashboard, &EngineConfig::default())
            .await
            .unwrap();

        assert_eq!(reports.len(), 6);
        for report in &reports {
            let expected = if report.label == "Request Refill" {
                ActionState::Failed
            } else {
                ActionState::Succeeded
            };
            assert_eq!(
                report.states,
                vec![ActionState::Running, expected, ActionState::Idle],
                "{}",
                report.label
            );
            assert_eq!(report.outcome(), Some(expected));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabled_entries_are_reported_empty() {
        let dashboard = Dashboard::from_json(
            r#"{
                "title": "Test",
                "actions": [
                    {"label": "On", "latency_ms": 10},
                    {"label": "Off", "disabled": true}
                ]
            }"#,
        )
        .unwrap();
        let reports = run_dashboard(&dashboard, &EngineConfig::default())
            .await
            .unwrap();

        let off = reports.iter().find(|r| r.label == "Off").unwrap();
        assert!(off.states.is_empty());
        assert_eq!(off.outcome(), None);

        let on = reports.iter().find(|r| r.label == "On").unwrap();
        assert_eq!(on.outcome(), Some(ActionState::Succeeded));
    }
}
