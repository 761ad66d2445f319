//! Inventory container and JSON loading.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::aging::update_quality;
use crate::item::Item;

/// Errors raised when inventory data cannot be read or written.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("malformed inventory JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The shop's full stock, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub items: Vec<Item>,
}

impl Inventory {
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Parse an inventory from JSON text supplied by the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into an inventory.
    pub fn from_json(json: &str) -> Result<Self, InventoryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the inventory back to JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the inventory cannot be serialized.
    pub fn to_json(&self) -> Result<String, InventoryError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Advance the whole stock by one day.
    pub fn advance_day(&mut self) {
        update_quality(&mut self.items);
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
