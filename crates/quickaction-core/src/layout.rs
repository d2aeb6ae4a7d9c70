//! Grid column types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Column configuration for a quick-actions grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ColumnsRepr", into = "ColumnsRepr")]
pub enum GridColumns {
    #[default]
    Auto,
    Two,
    Three,
    Four,
    Five,
}

/// Wire form: `"auto"` or a number from 2 to 5.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ColumnsRepr {
    Count(u8),
    Name(String),
}

impl TryFrom<ColumnsRepr> for GridColumns {
    type Error = String;

    fn try_from(repr: ColumnsRepr) -> Result<Self, Self::Error> {
        match repr {
            ColumnsRepr::Name(name) if name == "auto" => Ok(GridColumns::Auto),
            ColumnsRepr::Count(2) => Ok(GridColumns::Two),
            ColumnsRepr::Count(3) => Ok(GridColumns::Three),
            ColumnsRepr::Count(4) => Ok(GridColumns::Four),
            ColumnsRepr::Count(5) => Ok(GridColumns::Five),
            ColumnsRepr::Count(n) => Err(format!("unsupported column count: {}", n)),
            ColumnsRepr::Name(name) => Err(format!("unsupported columns value: {}", name)),
        }
    }
}

impl From<GridColumns> for ColumnsRepr {
    fn from(columns: GridColumns) -> Self {
        match columns {
            GridColumns::Auto => ColumnsRepr::Name("auto".to_string()),
            GridColumns::Two => ColumnsRepr::Count(2),
            GridColumns::Three => ColumnsRepr::Count(3),
            GridColumns::Four => ColumnsRepr::Count(4),
            GridColumns::Five => ColumnsRepr::Count(5),
        }
    }
}

/// Viewport width breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    Base,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// Minimum viewport width in pixels at which the breakpoint applies.
    pub fn min_width(self) -> f32 {
        match self {
            Breakpoint::Base => 0.0,
            Breakpoint::Sm => 640.0,
            Breakpoint::Md => 768.0,
            Breakpoint::Lg => 1024.0,
            Breakpoint::Xl => 1280.0,
        }
    }

    /// Largest breakpoint that applies to `width`.
    pub fn for_width(width: f32) -> Self {
        [Breakpoint::Xl, Breakpoint::Lg, Breakpoint::Md, Breakpoint::Sm]
            .into_iter()
            .find(|bp| width >= bp.min_width())
            .unwrap_or(Breakpoint::Base)
    }
}

/// Responsive column counts. Unset breakpoints inherit from the next smaller one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnPolicy {
    pub base: u8,
    pub sm: Option<u8>,
    pub lg: Option<u8>,
    pub xl: Option<u8>,
}

impl ColumnPolicy {
    /// Column count at a breakpoint.
    pub fn columns(&self, breakpoint: Breakpoint) -> u8 {
        let steps = [
            (Breakpoint::Sm, self.sm),
            (Breakpoint::Lg, self.lg),
            (Breakpoint::Xl, self.xl),
        ];
        steps
            .into_iter()
            .filter(|(bp, _)| *bp <= breakpoint)
            .filter_map(|(_, cols)| cols)
            .last()
            .unwrap_or(self.base)
    }

    /// Column count for a viewport width in pixels.
    pub fn columns_at(&self, width: f32) -> u8 {
        self.columns(Breakpoint::for_width(width))
    }
}

impl fmt::Display for ColumnPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "base:{}", self.base)?;
        for (name, cols) in [("sm", self.sm), ("lg", self.lg), ("xl", self.xl)] {
            if let Some(cols) = cols {
                write!(f, " {}:{}", name, cols)?;
            }
        }
        Ok(())
    }
}

impl GridColumns {
    /// Responsive policy for this setting.
    pub fn policy(self) -> ColumnPolicy {
        let (sm, lg, xl) = match self {
            GridColumns::Auto | GridColumns::Five => (Some(3), Some(4), Some(5)),
            GridColumns::Four => (Some(3), Some(4), None),
            GridColumns::Three => (Some(3), None, None),
            GridColumns::Two => (None, None, None),
        };
        ColumnPolicy {
            base: 2,
            sm,
            lg,
            xl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_display() {
        insta::assert_snapshot!(GridColumns::Auto.policy(), @"base:2 sm:3 lg:4 xl:5");
        insta::assert_snapshot!(GridColumns::Three.policy(), @"base:2 sm:3");
        insta::assert_snapshot!(GridColumns::Two.policy(), @"base:2");
    }

    #[test]
    fn test_columns_at_width() {
        let policy = GridColumns::Auto.policy();
        assert_eq!(policy.columns_at(320.0), 2);
        assert_eq!(policy.columns_at(640.0), 3);
        // md has no override, inherits sm
        assert_eq!(policy.columns_at(800.0), 3);
        assert_eq!(policy.columns_at(1024.0), 4);
        assert_eq!(policy.columns_at(1920.0), 5);
    }

    #[test]
    fn test_three_columns_caps_at_three() {
        let policy = GridColumns::Three.policy();
        assert_eq!(policy.columns_at(500.0), 2);
        assert_eq!(policy.columns_at(1920.0), 3);
    }

    #[test]
    fn test_breakpoint_for_width() {
        assert_eq!(Breakpoint::for_width(0.0), Breakpoint::Base);
        assert_eq!(Breakpoint::for_width(639.9), Breakpoint::Base);
        assert_eq!(Breakpoint::for_width(768.0), Breakpoint::Md);
        assert_eq!(Breakpoint::for_width(1280.0), Breakpoint::Xl);
    }

    #[test]
    fn test_columns_serde() {
        let cols: GridColumns = serde_json::from_str("3").unwrap();
        assert_eq!(cols, GridColumns::Three);
        let cols: GridColumns = serde_json::from_str("\"auto\"").unwrap();
        assert_eq!(cols, GridColumns::Auto);
        assert!(serde_json::from_str::<GridColumns>("6").is_err());
        assert_eq!(serde_json::to_string(&GridColumns::Five).unwrap(), "5");
    }
}
