//! Embedded dashboard definitions.

use std::str::FromStr;
use std::time::Duration;

use quickaction_core::{ActionSpec, GridColumns};
use quickaction_engine::ActionDescriptor;
use serde::Deserialize;

use crate::error::DemoError;
use crate::simulate::SimulatedAction;

const PATIENT_JSON: &str = include_str!("../dashboards/patient.json");
const PROVIDER_JSON: &str = include_str!("../dashboards/provider.json");

/// Which dashboard to load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DashboardKind {
    #[default]
    Patient,
    Provider,
}

impl FromStr for DashboardKind {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "patient" => Ok(DashboardKind::Patient),
            "provider" => Ok(DashboardKind::Provider),
            _ => Err(DemoError::UnknownDashboard(s.to_string())),
        }
    }
}

/// A quick action plus how its simulated request behaves.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoAction {
    #[serde(flatten)]
    pub spec: ActionSpec,
    #[serde(default)]
    pub latency_ms: u64,
    #[serde(default)]
    pub fail: bool,
}

/// A page of quick actions.
#[derive(Debug, Clone, Deserialize)]
pub struct Dashboard {
    pub title: String,
    #[serde(default)]
    pub columns: GridColumns,
    pub actions: Vec<DemoAction>,
}

impl Dashboard {
    pub fn load(kind: DashboardKind) -> Result<Self, DemoError> {
        let source = match kind {
            DashboardKind::Patient => PATIENT_JSON,
            DashboardKind::Provider => PROVIDER_JSON,
        };
        Self::from_json(source)
    }

    pub fn from_json(source: &str) -> Result<Self, DemoError> {
        serde_json::from_str(source).map_err(|e| DemoError::Parse(e.to_string()))
    }

    /// Descriptors backed by simulated actions, in display order.
    pub fn descriptors(&self) -> Result<Vec<ActionDescriptor>, DemoError> {
        self.actions
            .iter()
            .map(|entry| {
                let action = SimulatedAction::new(
                    entry.spec.label.clone(),
                    Duration::from_millis(entry.latency_ms),
                    entry.fail,
                );
                Ok(ActionDescriptor::from_spec(entry.spec.clone())?.with_action(action))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickaction_core::{Badge, Variant};

    #[test]
    fn test_parse_kind() {
        assert_eq!(
            "Provider".parse::<DashboardKind>().unwrap(),
            DashboardKind::Provider
        );
        assert!(matches!(
            "admin".parse::<DashboardKind>(),
            Err(DemoError::UnknownDashboard(_))
        ));
    }

    #[test]
    fn test_embedded_dashboards_load() {
        for kind in [DashboardKind::Patient, DashboardKind::Provider] {
            let dashboard = Dashboard::load(kind).unwrap();
            assert_eq!(dashboard.actions.len(), 6);
            assert_eq!(dashboard.columns, GridColumns::Three);
            assert_eq!(dashboard.descriptors().unwrap().len(), 6);
        }
    }

    #[test]
    fn test_patient_entries() {
        let dashboard = Dashboard::load(DashboardKind::Patient).unwrap();
        let first = &dashboard.actions[0];
        assert_eq!(first.spec.label, "Book Appointment");
        assert_eq!(first.spec.variant, Variant::Primary);
        assert_eq!(first.latency_ms, 100);
        assert!(!first.fail);

        let messages = &dashboard.actions[4];
        assert_eq!(messages.spec.badge, Some(Badge::Count(1)));

        let refill = &dashboard.actions[5];
        assert_eq!(refill.spec.label, "Request Refill");
        assert!(refill.fail);
    }

    #[test]
    fn test_empty_label_rejected() {
        let dashboard =
            Dashboard::from_json(r#"{"title": "Broken", "actions": [{"label": " "}]}"#).unwrap();
        assert!(matches!(
            dashboard.descriptors(),
            Err(DemoError::Descriptor(_))
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Dashboard::from_json("{"),
            Err(DemoError::Parse(_))
        ));
    }
}
