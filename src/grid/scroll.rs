//! Scroll-into-view: keeps the focused item inside the viewport.

use clap::ValueEnum;
use serde::Serialize;
use tracing::debug;

use super::geometry::{ItemRect, Offset, Size};

/// Viewport position within the content and its fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewportState {
    pub offset: Offset,
    pub size: Size,
}

impl ViewportState {
    pub const fn new(size: Size) -> Self {
        Self {
            offset: Offset::new(0.0, 0.0),
            size,
        }
    }
}

/// How the offset follows the focused item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollPolicy {
    /// Move only when the item is not fully visible, and only as far as needed.
    #[default]
    Eager,
    /// Align the viewport with the item's leading edge after every move.
    Step,
}

impl ScrollPolicy {
    /// Offset that brings `rect` into view after the focus moved onto it.
    ///
    /// Callers skip this for no-op moves, so [`ScrollPolicy::Step`] never
    /// realigns on a boundary press.
    pub fn scroll_into_view(self, rect: &ItemRect, current: Offset, size: Size) -> Offset {
        let next = match self {
            Self::Eager => Offset {
                x: clamp_axis(rect.x, rect.width, current.x, size.width),
                y: clamp_axis(rect.y, rect.height, current.y, size.height),
            },
            Self::Step => Offset::new(rect.x.max(0.0), rect.y.max(0.0)),
        };
        if next != current {
            debug!(policy = ?self, from = ?current, to = ?next, "Scrolling into view");
        }
        next
    }
}

/// Minimal offset change on one axis so `[start, start + extent)` is visible.
///
/// An extent larger than the viewport aligns its leading edge instead.
fn clamp_axis(start: f64, extent: f64, offset: f64, viewport: f64) -> f64 {
    let next = if start < offset || extent > viewport {
        start
    } else if start + extent > offset + viewport {
        start + extent - viewport
    } else {
        offset
    };
    next.max(0.0)
}
