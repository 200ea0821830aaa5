//! Immutable item store backing the grid.

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;

use crate::error::ConfigError;

/// Index of an item inside the store; the only identity an item has.
pub type ItemIndex = usize;

/// Opaque display attribute of an item: a hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemColor {
    pub hue: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    pub width: f64,
    pub color: ItemColor,
}

/// Range `[min, max)` for generated widths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthRange {
    pub min: f64,
    pub max: f64,
}

/// Ordered, immutable sequence of items.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    /// Generate `count` items with random widths and hues.
    ///
    /// Without a seed, one is drawn from the thread RNG and logged so the set
    /// can be reproduced with `--seed`.
    pub fn generate(count: usize, widths: WidthRange, seed: Option<u64>) -> Self {
        let mut rng = seeded_rng(seed);
        let items = (0..count)
            .map(|_| Item {
                width: random_width(&mut rng, widths),
                color: random_color(&mut rng),
            })
            .collect();
        Self { items }
    }

    /// Build a store from explicit widths; colours still come from the RNG.
    pub fn from_widths(widths: &[f64], seed: Option<u64>) -> Result<Self, ConfigError> {
        if let Some(&bad) = widths.iter().find(|w| !(w.is_finite() && **w > 0.0)) {
            return Err(ConfigError::NonPositive {
                field: "item width",
                value: bad,
            });
        }
        let mut rng = seeded_rng(seed);
        let items = widths
            .iter()
            .map(|&width| Item {
                width,
                color: random_color(&mut rng),
            })
            .collect();
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: ItemIndex) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&Item> {
        self.items.first()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| {
        let seed: u64 = rand::rng().random();
        info!(seed, "Generated item seed");
        seed
    });
    StdRng::seed_from_u64(seed)
}

fn random_width(rng: &mut StdRng, range: WidthRange) -> f64 {
    if range.min < range.max {
        rng.random_range(range.min..range.max)
    } else {
        range.min
    }
}

fn random_color(rng: &mut StdRng) -> ItemColor {
    ItemColor {
        hue: rng.random_range(0.0..360.0),
    }
}
