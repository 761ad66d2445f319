//! Inventory item model and rule-category classification.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{AGED_BRIE, BACKSTAGE_PASS, CONJURED, SULFURAS};

/// A single item held by the shop.
///
/// `sell_in` counts the days remaining before the sell-by date and goes
/// negative once that date has passed. `quality` lives in `[0, 50]` for
/// everything except the legendary item, whose caller-supplied value
/// (conventionally 80) is never touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    #[must_use]
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// Rule category for this item, resolved from its name.
    #[must_use]
    pub fn kind(&self) -> ItemKind {
        ItemKind::of(&self.name)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Closed set of aging-rule categories.
///
/// Names are matched exactly; anything unrecognized falls into `Standard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Never ages: sell-in and quality are both frozen.
    Legendary,
    /// Gains quality as it ages.
    AgedBrie,
    /// Tiered quality growth that collapses to zero after the concert.
    BackstagePass,
    /// Degrades twice as fast as standard stock.
    Conjured,
    /// Everything else.
    Standard,
}

impl ItemKind {
    #[must_use]
    pub fn of(name: &str) -> Self {
        match name {
            SULFURAS => Self::Legendary,
            AGED_BRIE => Self::AgedBrie,
            BACKSTAGE_PASS => Self::BackstagePass,
            CONJURED => Self::Conjured,
            _ => Self::Standard,
        }
    }
}
