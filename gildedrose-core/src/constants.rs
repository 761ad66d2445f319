//! Centralized rule constants for the Gilded Rose aging logic.
//!
//! These values define the deterministic math for the daily tick. Keeping
//! them together ensures the rules can only be adjusted via code changes
//! reviewed in version control, rather than scattered magic numbers.

// Known item names ---------------------------------------------------------
pub(crate) const AGED_BRIE: &str = "Aged Brie";
pub(crate) const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";
pub(crate) const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub(crate) const CONJURED: &str = "Conjured";

// Quality bounds -----------------------------------------------------------
pub const QUALITY_FLOOR: i32 = 0;
pub const QUALITY_CEILING: i32 = 50;

// Aging steps --------------------------------------------------------------
pub(crate) const BASE_STEP: i32 = 1;
pub(crate) const EXPIRED_STEP: i32 = 2;
pub(crate) const CONJURED_MULTIPLIER: i32 = 2;

// Backstage pass tiers (strict upper bounds on post-decrement sell-in) -----
pub(crate) const BACKSTAGE_SECOND_TIER_DAYS: i32 = 10;
pub(crate) const BACKSTAGE_FINAL_TIER_DAYS: i32 = 5;
pub(crate) const BACKSTAGE_SECOND_TIER_STEP: i32 = 2;
pub(crate) const BACKSTAGE_FINAL_TIER_STEP: i32 = 3;
