//! State-to-visual mapping.
//!
//! Pure functions only. A renderer reads a [`Feedback`] and paints it; nothing
//! here feeds back into the lifecycle.

use quickaction_core::{ActionSpec, ColorToken, SizeMetrics, VariantStyle};

use crate::machine::ActionState;
use crate::pointer::PointerOffset;

/// Which icon to paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// The descriptor's own icon.
    Original,
    Spinner,
    Check,
    Alert,
}

impl Icon {
    /// Icon identifier, resolving `Original` against the descriptor's icon.
    pub fn name<'a>(self, original: Option<&'a str>) -> Option<&'a str> {
        match self {
            Icon::Original => original,
            Icon::Spinner => Some("loader"),
            Icon::Check => Some("check-circle"),
            Icon::Alert => Some("alert-circle"),
        }
    }
}

/// Transient color treatment layered over the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Success,
    Error,
}

impl Tone {
    /// Icon color override, if any.
    pub fn icon_color(self) -> Option<ColorToken> {
        match self {
            Tone::Normal => None,
            Tone::Success => Some(ColorToken::Green(500)),
            Tone::Error => Some(ColorToken::Red(500)),
        }
    }
}

/// What each lifecycle state looks like, independent of the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateDisplay {
    pub icon: Icon,
    /// Replacement label; `None` keeps the descriptor's label.
    pub label: Option<&'static str>,
    pub tone: Tone,
    pub spinning: bool,
    pub interactive: bool,
}

impl StateDisplay {
    pub fn of(state: ActionState) -> Self {
        match state {
            ActionState::Idle => StateDisplay {
                icon: Icon::Original,
                label: None,
                tone: Tone::Normal,
                spinning: false,
                interactive: true,
            },
            ActionState::Running => StateDisplay {
                icon: Icon::Spinner,
                label: Some("Loading…"),
                tone: Tone::Normal,
                spinning: true,
                interactive: false,
            },
            ActionState::Succeeded => StateDisplay {
                icon: Icon::Check,
                label: Some("Success!"),
                tone: Tone::Success,
                spinning: false,
                interactive: false,
            },
            ActionState::Failed => StateDisplay {
                icon: Icon::Alert,
                label: Some("Error"),
                tone: Tone::Error,
                spinning: false,
                interactive: false,
            },
        }
    }
}

/// Everything a renderer needs for one instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub state: ActionState,
    pub icon: Icon,
    pub icon_name: Option<String>,
    pub spinning: bool,
    pub label: String,
    pub description: Option<String>,
    pub tooltip: Option<String>,
    pub badge: Option<String>,
    pub tone: Tone,
    pub style: VariantStyle,
    pub icon_color: ColorToken,
    pub glow: Option<ColorToken>,
    pub metrics: SizeMetrics,
    /// Whether the control accepts clicks.
    pub interactive: bool,
    /// Scale-down and ripple, from activation until auto-reset.
    pub pressed: bool,
    pub offset: PointerOffset,
}

impl Feedback {
    pub fn derive(spec: &ActionSpec, state: ActionState, offset: PointerOffset) -> Self {
        let display = StateDisplay::of(state);
        let style = spec.variant.style();

        // A host-forced busy flag shows the spinner but keeps the label
        let (icon, spinning) = if spec.loading {
            (Icon::Spinner, true)
        } else {
            (display.icon, display.spinning)
        };

        let description = spec.description.clone().filter(|_| state.is_idle());
        let tooltip = description.clone().filter(|_| spec.show_tooltip);

        Self {
            state,
            icon,
            icon_name: icon.name(spec.icon.as_deref()).map(String::from),
            spinning,
            label: display
                .label
                .map(String::from)
                .unwrap_or_else(|| spec.label.clone()),
            description,
            tooltip,
            badge: spec.badge.as_ref().and_then(|b| b.display_text()),
            tone: display.tone,
            style,
            icon_color: display.tone.icon_color().unwrap_or(style.icon),
            glow: style.glow.filter(|_| spec.glow_effect),
            metrics: spec.size.metrics(),
            interactive: display.interactive && !spec.disabled && !spec.loading,
            pressed: !state.is_idle(),
            offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickaction_core::{Badge, Variant};

    fn spec() -> ActionSpec {
        ActionSpec::new("Book Appointment")
            .unwrap()
            .with_description("Schedule with your provider")
            .with_icon("calendar")
            .with_variant(Variant::Primary)
    }

    #[test]
    fn test_idle_shows_descriptor() {
        let feedback = Feedback::derive(&spec(), ActionState::Idle, PointerOffset::ZERO);
        assert_eq!(feedback.icon, Icon::Original);
        assert_eq!(feedback.icon_name.as_deref(), Some("calendar"));
        assert_eq!(feedback.label, "Book Appointment");
        assert_eq!(
            feedback.description.as_deref(),
            Some("Schedule with your provider")
        );
        assert!(feedback.tooltip.is_some());
        assert!(feedback.interactive);
        assert!(!feedback.pressed);
        assert_eq!(feedback.icon_color, ColorToken::White);
    }

    #[test]
    fn test_running_shows_spinner() {
        let feedback = Feedback::derive(&spec(), ActionState::Running, PointerOffset::ZERO);
        assert_eq!(feedback.icon, Icon::Spinner);
        assert!(feedback.spinning);
        assert_eq!(feedback.label, "Loading…");
        assert!(feedback.description.is_none());
        assert!(feedback.tooltip.is_none());
        assert!(!feedback.interactive);
        assert!(feedback.pressed);
    }

    #[test]
    fn test_settled_states_use_transient_colors() {
        let success = Feedback::derive(&spec(), ActionState::Succeeded, PointerOffset::ZERO);
        assert_eq!(success.icon, Icon::Check);
        assert_eq!(success.label, "Success!");
        assert_eq!(success.tone, Tone::Success);
        assert_eq!(success.icon_color, ColorToken::Green(500));

        let failure = Feedback::derive(&spec(), ActionState::Failed, PointerOffset::ZERO);
        assert_eq!(failure.icon, Icon::Alert);
        assert_eq!(failure.label, "Error");
        assert_eq!(failure.tone, Tone::Error);
        assert_eq!(failure.icon_color, ColorToken::Red(500));
    }

    #[test]
    fn test_only_idle_accepts_clicks() {
        let interactive: Vec<bool> = [
            ActionState::Idle,
            ActionState::Running,
            ActionState::Succeeded,
            ActionState::Failed,
        ]
        .iter()
        .map(|s| Feedback::derive(&spec(), *s, PointerOffset::ZERO).interactive)
        .collect();
        assert_eq!(interactive, vec![true, false, false, false]);
    }

    #[test]
    fn test_every_state_has_one_display() {
        let states = [
            ActionState::Idle,
            ActionState::Running,
            ActionState::Succeeded,
            ActionState::Failed,
        ];
        let icons: Vec<Icon> = states.iter().map(|s| StateDisplay::of(*s).icon).collect();
        assert_eq!(
            icons,
            vec![Icon::Original, Icon::Spinner, Icon::Check, Icon::Alert]
        );
    }

    #[test]
    fn test_external_loading_keeps_label() {
        let spec = spec().with_loading(true);
        let feedback = Feedback::derive(&spec, ActionState::Idle, PointerOffset::ZERO);
        assert_eq!(feedback.icon, Icon::Spinner);
        assert!(feedback.spinning);
        assert_eq!(feedback.label, "Book Appointment");
        assert!(!feedback.interactive);
    }

    #[test]
    fn test_tooltip_and_glow_flags() {
        let spec = spec().with_tooltip(false).with_glow(false);
        let feedback = Feedback::derive(&spec, ActionState::Idle, PointerOffset::ZERO);
        assert!(feedback.description.is_some());
        assert!(feedback.tooltip.is_none());
        assert!(feedback.glow.is_none());
    }

    #[test]
    fn test_badge_text() {
        let spec = spec().with_badge(Badge::Count(150));
        let feedback = Feedback::derive(&spec, ActionState::Running, PointerOffset::ZERO);
        assert_eq!(feedback.badge.as_deref(), Some("99+"));
    }

    #[test]
    fn test_disabled_is_not_interactive() {
        let spec = spec().with_disabled(true);
        let feedback = Feedback::derive(&spec, ActionState::Idle, PointerOffset::ZERO);
        assert!(!feedback.interactive);
    }
}
