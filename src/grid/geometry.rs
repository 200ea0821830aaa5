//! Plain geometry shared by the layout, scroll and paint code.
//!
//! Coordinates are `f64` layout units. The terminal host maps one unit to one
//! cell, but nothing in the engine depends on that.

use serde::Serialize;

/// A point in content or surface coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Scroll offset of the viewport's top-left corner inside the content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `target`; `progress` is expected in `[0, 1]`.
    #[must_use]
    pub fn lerp(self, target: Self, progress: f64) -> Self {
        Self {
            x: (target.x - self.x).mul_add(progress, self.x),
            y: (target.y - self.y).mul_add(progress, self.y),
        }
    }
}

/// Axis-aligned rectangle on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect2 {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect2 {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Placement of one item, as computed by the flow layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemRect {
    pub row: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ItemRect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether the rectangle overlaps the viewport window at `offset`.
    pub fn intersects(&self, offset: Offset, size: Size) -> bool {
        self.x < offset.x + size.width
            && self.right() > offset.x
            && self.y < offset.y + size.height
            && self.bottom() > offset.y
    }

    /// Rectangle relative to the viewport's top-left corner.
    pub fn to_surface(&self, offset: Offset) -> Rect2 {
        Rect2::new(self.x - offset.x, self.y - offset.y, self.width, self.height)
    }
}
