//! Command-line configuration shared by the `run` and `inspect` commands.

use clap::Args;

use crate::{
    error::{ConfigError, Result},
    grid::{
        animation::Animator, ItemStore, LayoutParams, ScrollPolicy, SessionConfig, Size,
        WidthRange,
    },
};

#[derive(Debug, Clone, Args)]
pub struct GridArgs {
    /// Number of generated items
    #[arg(long, default_value_t = 10_000)]
    pub items: usize,

    /// Height shared by every item
    #[arg(long, default_value_t = 3.0)]
    pub item_height: f64,

    /// Smallest generated item width
    #[arg(long, default_value_t = 6.0)]
    pub min_width: f64,

    /// Largest generated item width (exclusive)
    #[arg(long, default_value_t = 24.0)]
    pub max_width: f64,

    /// Seed for reproducible item sets
    #[arg(long)]
    pub seed: Option<u64>,

    /// Explicit comma-separated item widths, replacing generation
    #[arg(long, value_delimiter = ',')]
    pub widths: Option<Vec<f64>>,

    /// How the viewport follows the focused item
    #[arg(long, value_enum, default_value_t = ScrollPolicy::Eager)]
    pub scroll: ScrollPolicy,

    /// Animate scrolling
    #[arg(long)]
    pub animate: bool,

    /// Animation duration in milliseconds
    #[arg(long, default_value_t = Animator::DEFAULT_DURATION_MS)]
    pub duration_ms: f64,

    /// Precompute row starts for O(log n) position lookups
    #[arg(long)]
    pub row_index: bool,
}

impl GridArgs {
    pub fn validate(&self) -> Result<()> {
        positive("item height", self.item_height)?;
        positive("min width", self.min_width)?;
        positive("max width", self.max_width)?;
        if self.min_width > self.max_width {
            return Err(ConfigError::InvalidWidthRange {
                min: self.min_width,
                max: self.max_width,
            }
            .into());
        }
        if !(self.duration_ms.is_finite() && self.duration_ms >= 0.0) {
            return Err(ConfigError::NonPositive {
                field: "animation duration",
                value: self.duration_ms,
            }
            .into());
        }
        Ok(())
    }

    /// Item store described by these arguments.
    pub fn build_store(&self) -> Result<ItemStore> {
        match &self.widths {
            Some(widths) => Ok(ItemStore::from_widths(widths, self.seed)?),
            None => Ok(ItemStore::generate(
                self.items,
                WidthRange {
                    min: self.min_width,
                    max: self.max_width,
                },
                self.seed,
            )),
        }
    }

    pub fn session_config(&self, viewport: Size) -> SessionConfig {
        SessionConfig {
            layout: LayoutParams {
                viewport_width: viewport.width,
                item_height: self.item_height,
            },
            viewport_height: viewport.height,
            policy: self.scroll,
            animation_ms: self.animate.then_some(self.duration_ms),
            row_index: self.row_index,
        }
    }
}

pub fn positive(field: &'static str, value: f64) -> std::result::Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}
