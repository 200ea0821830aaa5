//! Focus movement across the grid.

use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use super::item::{ItemIndex, ItemStore};
use crate::error::ConfigError;

/// Direction of a navigation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(ConfigError::UnknownDirection(other.to_string())),
        }
    }
}

/// Maps a focused index and a direction to the next focused index.
///
/// Up and down jump by `columns_per_row`, estimated from the first item's
/// width alone. With varying widths this is only an approximation of the real
/// row length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    len: usize,
    columns_per_row: usize,
}

impl Navigator {
    #[allow(clippy::cast_sign_loss)]
    pub fn new(store: &ItemStore, viewport_width: f64) -> Self {
        let columns_per_row = store
            .first()
            .map_or(0, |first| (viewport_width / first.width).floor() as usize);
        Self {
            len: store.len(),
            columns_per_row,
        }
    }

    pub const fn columns_per_row(&self) -> usize {
        self.columns_per_row
    }

    /// Next focused index. Moves past either end of the grid are no-ops.
    pub fn next_index(&self, current: ItemIndex, direction: Direction) -> ItemIndex {
        let last = self.len.saturating_sub(1);
        let next = match direction {
            Direction::Left => current.saturating_sub(1),
            Direction::Right if current < last => current + 1,
            Direction::Right => current,
            Direction::Up => current.saturating_sub(self.columns_per_row),
            Direction::Down => current.saturating_add(self.columns_per_row).min(last),
        };
        debug!(current, ?direction, next, "Navigation");
        next
    }
}
