//! Daily aging pass over the shop's stock.
//!
//! One call advances the inventory by a single day: sell-in drops by one
//! for everything except the legendary item, then quality moves by a
//! category-specific step and is clamped to the legal range.

use crate::constants::{
    BACKSTAGE_FINAL_TIER_DAYS, BACKSTAGE_FINAL_TIER_STEP, BACKSTAGE_SECOND_TIER_DAYS,
    BACKSTAGE_SECOND_TIER_STEP, BASE_STEP, CONJURED_MULTIPLIER, EXPIRED_STEP, QUALITY_CEILING,
    QUALITY_FLOOR,
};
use crate::item::{Item, ItemKind};

/// Advance every item in the slice by one day, in place.
///
/// Items are visited exactly once, in order. The routine is total: any
/// integer `sell_in`/`quality` inputs are accepted and processed without
/// validation.
pub fn update_quality(items: &mut [Item]) {
    for item in items {
        age_item(item);
    }
}

fn age_item(item: &mut Item) {
    let kind = item.kind();
    if kind == ItemKind::Legendary {
        return;
    }
    item.sell_in = item.sell_in.saturating_sub(1);
    match kind {
        ItemKind::AgedBrie => raise_quality(item, expiry_step(item.sell_in)),
        ItemKind::BackstagePass => match backstage_step(item.sell_in) {
            Some(step) => raise_quality(item, step),
            // hard reset once the concert has passed, not a clamped subtraction
            None => item.quality = QUALITY_FLOOR,
        },
        ItemKind::Conjured => lower_quality(item, expiry_step(item.sell_in) * CONJURED_MULTIPLIER),
        // everything else decays at the standard rate
        _ => lower_quality(item, expiry_step(item.sell_in)),
    }
}

/// Base step size, doubled once the sell date has passed.
const fn expiry_step(sell_in: i32) -> i32 {
    if sell_in < 0 { EXPIRED_STEP } else { BASE_STEP }
}

/// Quality step for a backstage pass, or `None` once the concert has passed.
const fn backstage_step(sell_in: i32) -> Option<i32> {
    if sell_in < 0 {
        None
    } else if sell_in < BACKSTAGE_FINAL_TIER_DAYS {
        Some(BACKSTAGE_FINAL_TIER_STEP)
    } else if sell_in < BACKSTAGE_SECOND_TIER_DAYS {
        Some(BACKSTAGE_SECOND_TIER_STEP)
    } else {
        Some(BASE_STEP)
    }
}

fn raise_quality(item: &mut Item, step: i32) {
    item.quality = item.quality.saturating_add(step).min(QUALITY_CEILING);
}

fn lower_quality(item: &mut Item, step: i32) {
    item.quality = item.quality.saturating_sub(step).max(QUALITY_FLOOR);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_step_doubles_past_sell_date() {
        assert_eq!(expiry_step(3), 1);
        assert_eq!(expiry_step(0), 1);
        assert_eq!(expiry_step(-1), 2);
    }

    #[test]
    fn backstage_step_tiers_use_strict_bounds() {
        assert_eq!(backstage_step(11), Some(1));
        assert_eq!(backstage_step(10), Some(1));
        assert_eq!(backstage_step(9), Some(2));
        assert_eq!(backstage_step(5), Some(2));
        assert_eq!(backstage_step(4), Some(3));
        assert_eq!(backstage_step(0), Some(3));
        assert_eq!(backstage_step(-1), None);
    }

    #[test]
    fn raise_quality_clamps_at_ceiling() {
        let mut item = Item::new("Aged Brie", 5, 49);
        raise_quality(&mut item, 3);
        assert_eq!(item.quality, 50);
    }

    #[test]
    fn lower_quality_clamps_at_floor() {
        let mut item = Item::new("Elixir of the Mongoose", 5, 1);
        lower_quality(&mut item, 4);
        assert_eq!(item.quality, 0);
    }

    #[test]
    fn over_ceiling_input_snaps_down_only_via_applied_step() {
        // A raise from an already-invalid value lands exactly on the ceiling.
        let mut brie = Item::new("Aged Brie", 5, 60);
        age_item(&mut brie);
        assert_eq!(brie.quality, 50);

        // A lower from an invalid value just steps down, no active correction.
        let mut elixir = Item::new("Elixir of the Mongoose", 5, 60);
        age_item(&mut elixir);
        assert_eq!(elixir.quality, 59);
    }

    #[test]
    fn extreme_counters_do_not_wrap() {
        let mut item = Item::new("Elixir of the Mongoose", i32::MIN, i32::MIN);
        age_item(&mut item);
        assert_eq!(item.sell_in, i32::MIN);
        assert_eq!(item.quality, 0);
    }
}
