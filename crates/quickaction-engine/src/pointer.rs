//! Magnetic hover tracking.
//!
//! The tracker turns pointer positions into a small displacement toward the
//! pointer. It holds no easing state; the spring hint in [`MagneticConfig`]
//! is for whoever animates the offset.

use quickaction_core::{MagneticConfig, SpringHint};

/// A position in the host's coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Bounding box of a control.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Geometric center.
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }
}

/// Displacement applied to a control.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerOffset {
    pub dx: f32,
    pub dy: f32,
}

impl PointerOffset {
    pub const ZERO: PointerOffset = PointerOffset { dx: 0.0, dy: 0.0 };

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Per-instance magnetic hover state.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    enabled: bool,
    scale: f32,
    max_displacement: Option<f32>,
    spring: SpringHint,
    offset: PointerOffset,
}

impl PointerTracker {
    /// Create a tracker. A disabled tracker keeps its offset at zero.
    pub fn new(config: &MagneticConfig, enabled: bool) -> Self {
        Self {
            enabled,
            scale: config.scale,
            max_displacement: config.max_displacement,
            spring: config.spring,
            offset: PointerOffset::ZERO,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn offset(&self) -> PointerOffset {
        self.offset
    }

    pub fn spring(&self) -> SpringHint {
        self.spring
    }

    /// Pointer moved over `bounds`. Returns the new offset.
    ///
    /// Ignored while disabled.
    pub fn pointer_move(&mut self, bounds: Rect, pointer: Point) -> PointerOffset {
        if !self.enabled {
            return self.offset;
        }
        let center = bounds.center();
        self.offset = self.displacement(pointer.x - center.x, pointer.y - center.y);
        self.offset
    }

    /// Pointer left the control. Always resets to zero.
    pub fn pointer_leave(&mut self) -> PointerOffset {
        self.offset = PointerOffset::ZERO;
        self.offset
    }

    /// Scaled (and optionally clamped) displacement for a raw delta from center.
    pub fn displacement(&self, raw_dx: f32, raw_dy: f32) -> PointerOffset {
        let clamp = |v: f32| match self.max_displacement {
            Some(max) => v.clamp(-max, max),
            None => v,
        };
        PointerOffset {
            dx: clamp(raw_dx * self.scale),
            dy: clamp(raw_dy * self.scale),
        }
    }
}
