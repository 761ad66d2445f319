//! Gilded Rose Inventory Engine
//!
//! Platform-agnostic aging rules for the Gilded Rose shop. One call to
//! [`update_quality`] advances every item by a single simulated day; the
//! crate performs no I/O and owns no schedule; the caller decides when a
//! day has passed and how items are sourced and displayed.

pub mod aging;
pub mod constants;
pub mod inventory;
pub mod item;

// Re-export commonly used types
pub use aging::update_quality;
pub use constants::{QUALITY_CEILING, QUALITY_FLOOR};
pub use inventory::{Inventory, InventoryError};
pub use item::{Item, ItemKind};
