//! Action spec types.
//!
//! An [`ActionSpec`] is the serializable half of an action descriptor: every
//! field except the callback. Hosts load specs from data and attach the
//! behavior at runtime.

use serde::{Deserialize, Serialize};

use crate::error::DescriptorError;
use crate::style::{Size, Variant};

fn default_true() -> bool {
    true
}

/// Display and gating properties of a quick action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionSpec {
    /// Display text. Never empty.
    pub label: String,

    /// Helper text shown under the label and in the tooltip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Icon identifier shown while idle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Visual treatment. Carries no behavior.
    #[serde(default)]
    pub variant: Variant,

    /// Visual size.
    #[serde(default)]
    pub size: Size,

    /// Disabled actions never leave idle.
    #[serde(default)]
    pub disabled: bool,

    /// Externally-forced busy flag.
    #[serde(default)]
    pub loading: bool,

    /// Small marker in the icon corner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,

    #[serde(default = "default_true")]
    pub show_tooltip: bool,

    #[serde(default = "default_true")]
    pub glow_effect: bool,

    #[serde(default = "default_true")]
    pub magnetic_hover: bool,
}

impl ActionSpec {
    /// Create a spec with the given label and default presentation.
    pub fn new(label: impl Into<String>) -> Result<Self, DescriptorError> {
        let spec = Self {
            label: label.into(),
            description: None,
            icon: None,
            variant: Variant::default(),
            size: Size::default(),
            disabled: false,
            loading: false,
            badge: None,
            show_tooltip: true,
            glow_effect: true,
            magnetic_hover: true,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Check invariants that deserialization cannot express.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if self.label.trim().is_empty() {
            return Err(DescriptorError::EmptyLabel);
        }
        Ok(())
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn with_badge(mut self, badge: impl Into<Badge>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn with_tooltip(mut self, show: bool) -> Self {
        self.show_tooltip = show;
        self
    }

    pub fn with_glow(mut self, glow: bool) -> Self {
        self.glow_effect = glow;
        self
    }

    pub fn with_magnetic_hover(mut self, magnetic: bool) -> Self {
        self.magnetic_hover = magnetic;
        self
    }
}

/// Display-only marker attached to an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Badge {
    Count(u32),
    Text(String),
}

impl Badge {
    /// Largest count rendered verbatim.
    pub const MAX_COUNT: u32 = 99;

    /// Text to paint, or `None` when the badge should be hidden.
    ///
    /// Zero counts and empty text are hidden; counts above 99 collapse to "99+".
    pub fn display_text(&self) -> Option<String> {
        match self {
            Badge::Count(0) => None,
            Badge::Count(n) if *n > Self::MAX_COUNT => Some(format!("{}+", Self::MAX_COUNT)),
            Badge::Count(n) => Some(n.to_string()),
            Badge::Text(text) if text.is_empty() => None,
            Badge::Text(text) => Some(text.clone()),
        }
    }
}

impl From<u32> for Badge {
    fn from(n: u32) -> Self {
        Badge::Count(n)
    }
}

impl From<&str> for Badge {
    fn from(s: &str) -> Self {
        Badge::Text(s.to_string())
    }
}

impl From<String> for Badge {
    fn from(s: String) -> Self {
        Badge::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_label() {
        assert_eq!(ActionSpec::new(""), Err(DescriptorError::EmptyLabel));
        assert_eq!(ActionSpec::new("   "), Err(DescriptorError::EmptyLabel));
    }

    #[test]
    fn test_new_defaults() {
        let spec = ActionSpec::new("Book Appointment").unwrap();
        assert_eq!(spec.variant, Variant::Default);
        assert_eq!(spec.size, Size::Md);
        assert!(!spec.disabled);
        assert!(spec.show_tooltip);
        assert!(spec.glow_effect);
        assert!(spec.magnetic_hover);
        assert!(spec.badge.is_none());
    }

    #[test]
    fn test_badge_display_text() {
        assert_eq!(Badge::Count(0).display_text(), None);
        assert_eq!(Badge::Count(7).display_text(), Some("7".to_string()));
        assert_eq!(Badge::Count(99).display_text(), Some("99".to_string()));
        assert_eq!(Badge::Count(100).display_text(), Some("99+".to_string()));
        assert_eq!(Badge::from("").display_text(), None);
        // Text badges are never collapsed
        assert_eq!(Badge::from("250").display_text(), Some("250".to_string()));
    }

    #[test]
    fn test_deserialize_minimal() {
        let spec: ActionSpec =
            serde_json::from_str(r#"{"label": "Lab Results", "badge": "2"}"#).unwrap();
        assert_eq!(spec.label, "Lab Results");
        assert_eq!(spec.badge, Some(Badge::Text("2".to_string())));
        assert!(spec.magnetic_hover);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_deserialize_numeric_badge_and_variant() {
        let spec: ActionSpec = serde_json::from_str(
            r#"{"label": "Messages", "badge": 120, "variant": "warning", "size": "lg"}"#,
        )
        .unwrap();
        assert_eq!(spec.badge, Some(Badge::Count(120)));
        assert_eq!(spec.variant, Variant::Warning);
        assert_eq!(spec.size, Size::Lg);
    }

    #[test]
    fn test_deserialize_unknown_variant_fails() {
        let result: Result<ActionSpec, _> =
            serde_json::from_str(r#"{"label": "Reports", "variant": "purple"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_deserialized_empty_label() {
        let spec: ActionSpec = serde_json::from_str(r#"{"label": ""}"#).unwrap();
        assert_eq!(spec.validate(), Err(DescriptorError::EmptyLabel));
    }
}
