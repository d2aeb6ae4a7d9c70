//! Visual variant and size types.
//!
//! Variants are purely presentational. The mapping from variant to colors is
//! exhaustive so a new variant cannot ship without a style.

use serde::{Deserialize, Serialize};

/// Visual treatment of a quick action.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Primary,
    Success,
    Warning,
    Destructive,
    Ghost,
}

/// Palette token. Shades follow the usual 50-950 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    White,
    Gray(u16),
    Primary(u16),
    Green(u16),
    Warning(u16),
    Orange(u16),
    Red(u16),
}

/// How a control's background is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Flat surface color.
    Surface { base: ColorToken, hover: ColorToken },
    /// Diagonal gradient, darkened one step on hover.
    Gradient {
        from: ColorToken,
        to: ColorToken,
        hover_from: ColorToken,
        hover_to: ColorToken,
    },
    /// No background until hovered.
    Transparent { hover: ColorToken },
}

/// Resolved colors for a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantStyle {
    pub fill: Fill,
    /// `None` renders a transparent border.
    pub border: Option<ColorToken>,
    pub text: ColorToken,
    pub icon: ColorToken,
    /// Hover glow color, if the variant glows at all.
    pub glow: Option<ColorToken>,
}

impl Variant {
    /// All variants in declaration order.
    pub const ALL: [Variant; 6] = [
        Variant::Default,
        Variant::Primary,
        Variant::Success,
        Variant::Warning,
        Variant::Destructive,
        Variant::Ghost,
    ];

    /// Colors for this variant.
    pub fn style(self) -> VariantStyle {
        use ColorToken::*;

        match self {
            Variant::Default => VariantStyle {
                fill: Fill::Surface {
                    base: White,
                    hover: Gray(50),
                },
                border: Some(Gray(200)),
                text: Gray(900),
                icon: Gray(600),
                glow: Some(Primary(500)),
            },
            Variant::Primary => VariantStyle {
                fill: gradient(Primary(500), Primary(600), Primary(600), Primary(700)),
                border: Some(Primary(600)),
                text: White,
                icon: White,
                glow: Some(Primary(500)),
            },
            Variant::Success => VariantStyle {
                fill: gradient(Green(500), Green(600), Green(600), Green(700)),
                border: Some(Green(600)),
                text: White,
                icon: White,
                glow: Some(Green(500)),
            },
            Variant::Warning => VariantStyle {
                fill: gradient(Warning(500), Orange(600), Orange(600), Orange(700)),
                border: Some(Orange(600)),
                text: White,
                icon: White,
                glow: Some(Warning(500)),
            },
            Variant::Destructive => VariantStyle {
                fill: gradient(Red(500), Red(600), Red(600), Red(700)),
                border: Some(Red(600)),
                text: White,
                icon: White,
                glow: Some(Red(500)),
            },
            Variant::Ghost => VariantStyle {
                fill: Fill::Transparent { hover: Gray(100) },
                border: None,
                text: Gray(700),
                icon: Gray(600),
                glow: None,
            },
        }
    }
}

fn gradient(from: ColorToken, to: ColorToken, hover_from: ColorToken, hover_to: ColorToken) -> Fill {
    Fill::Gradient {
        from,
        to,
        hover_from,
        hover_to,
    }
}

/// Size of a quick action.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

/// Pixel metrics for a size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeMetrics {
    pub padding: f32,
    pub corner_radius: f32,
    pub icon: f32,
    pub label_text: f32,
    pub description_text: f32,
}

impl Size {
    pub fn metrics(self) -> SizeMetrics {
        match self {
            Size::Sm => SizeMetrics {
                padding: 12.0,
                corner_radius: 8.0,
                icon: 16.0,
                label_text: 12.0,
                description_text: 12.0,
            },
            Size::Md => SizeMetrics {
                padding: 16.0,
                corner_radius: 12.0,
                icon: 20.0,
                label_text: 14.0,
                description_text: 12.0,
            },
            Size::Lg => SizeMetrics {
                padding: 24.0,
                corner_radius: 12.0,
                icon: 24.0,
                label_text: 16.0,
                description_text: 14.0,
            },
            Size::Xl => SizeMetrics {
                padding: 32.0,
                corner_radius: 16.0,
                icon: 32.0,
                label_text: 18.0,
                description_text: 16.0,
            },
        }
    }
}
