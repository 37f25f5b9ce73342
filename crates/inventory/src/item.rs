use serde::Serialize;

use crate::category::{AGED_BRIE, BACKSTAGE_PASSES, Category, SULFURAS};
use crate::quality::Quality;

/// An item on the shelf: name, days left to sell, quality, and the category
/// resolved from its name at construction.
///
/// Construction performs no validation. Negative sell-in and out-of-range
/// quality are accepted as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    name: String,
    sell_in: i32,
    quality: Quality,
    category: Category,
}

impl Item {
    /// Create an item, resolving its category from `name`.
    pub fn create(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let category = Category::resolve(&name);
        Self::with_category(name, category, sell_in, quality)
    }

    /// Create an item bound to an explicit category, bypassing name resolution.
    pub fn with_category(
        name: impl Into<String>,
        category: Category,
        sell_in: i32,
        quality: i32,
    ) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality: Quality::new(quality),
            category,
        }
    }

    pub fn aged_brie(sell_in: i32, quality: i32) -> Self {
        Self::with_category(AGED_BRIE, Category::Improving, sell_in, quality)
    }

    pub fn backstage_pass(sell_in: i32, quality: i32) -> Self {
        Self::with_category(BACKSTAGE_PASSES, Category::UrgencyTiered, sell_in, quality)
    }

    pub fn sulfuras(sell_in: i32, quality: i32) -> Self {
        Self::with_category(SULFURAS, Category::Fixed, sell_in, quality)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality.value()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_expired(&self) -> bool {
        Category::is_expired(self.sell_in)
    }

    pub fn advance_one_day(&mut self) {
        self.category.advance(&mut self.sell_in, &mut self.quality);
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advanced(mut item: Item, days: usize) -> Item {
        for _ in 0..days {
            item.advance_one_day();
        }
        item
    }

    #[test]
    fn create_sets_name_sell_in_and_quality() {
        let item = Item::create("Test Item", 10, 20);
        assert_eq!(item.name(), "Test Item");
        assert_eq!(item.sell_in(), 10);
        assert_eq!(item.quality(), 20);
        assert_eq!(item.category(), Category::Standard);
    }

    #[test]
    fn create_resolves_category_from_name() {
        assert_eq!(Item::create("Aged Brie", 10, 20).category(), Category::Improving);
        assert_eq!(
            Item::create("Sulfuras, Hand of Ragnaros", 0, 80).category(),
            Category::Fixed
        );
        assert_eq!(
            Item::create("Backstage passes to a TAFKAL80ETC concert", 15, 20).category(),
            Category::UrgencyTiered
        );
    }

    #[test]
    fn typed_constructors_use_canonical_names() {
        assert_eq!(Item::aged_brie(10, 20).name(), "Aged Brie");
        assert_eq!(Item::sulfuras(10, 80).name(), "Sulfuras, Hand of Ragnaros");
        assert_eq!(
            Item::backstage_pass(15, 20).name(),
            "Backstage passes to a TAFKAL80ETC concert"
        );
        assert_eq!(Item::aged_brie(10, 20), Item::create("Aged Brie", 10, 20));
    }

    #[test]
    fn with_category_ignores_name() {
        let mut item = Item::with_category("Widget", Category::Improving, 3, 10);
        item.advance_one_day();
        assert_eq!((item.sell_in(), item.quality()), (2, 11));
    }

    #[test]
    fn construction_is_permissive() {
        let item = Item::create("Normal Item", -10, 60);
        assert_eq!(item.sell_in(), -10);
        assert_eq!(item.quality(), 60);
        assert!(item.is_expired());
    }

    #[test]
    fn display_format() {
        assert_eq!(Item::create("Test Item", 10, 20).to_string(), "Test Item, 10, 20");
        assert_eq!(Item::create("Test Item", -5, 10).to_string(), "Test Item, -5, 10");
        assert_eq!(Item::create("Test Item", 0, 0).to_string(), "Test Item, 0, 0");
        assert_eq!(Item::create("", 10, 20).to_string(), ", 10, 20");
    }

    #[test]
    fn serializes_snapshot_fields() {
        let json = serde_json::to_value(Item::create("Aged Brie", 2, 0)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Aged Brie",
                "sell_in": 2,
                "quality": 0,
                "category": "improving",
            })
        );
    }

    #[test]
    fn unknown_name_behaves_as_standard() {
        let item = advanced(Item::create("Widget", 3, 10), 1);
        assert_eq!((item.sell_in(), item.quality()), (2, 9));
    }

    #[test]
    fn standard_item_transitions_at_sell_date() {
        let mut item = Item::create("Normal Item", 2, 50);

        item.advance_one_day();
        assert_eq!((item.sell_in(), item.quality()), (1, 49));

        item.advance_one_day();
        assert_eq!((item.sell_in(), item.quality()), (0, 48));

        item.advance_one_day();
        assert_eq!((item.sell_in(), item.quality()), (-1, 46));
    }

    #[test]
    fn aged_brie_transitions_at_sell_date() {
        let mut item = Item::aged_brie(1, 20);

        item.advance_one_day();
        assert_eq!((item.sell_in(), item.quality()), (0, 21));

        item.advance_one_day();
        assert_eq!((item.sell_in(), item.quality()), (-1, 23));
    }

    #[test]
    fn aged_brie_caps_during_rapid_aging() {
        let mut item = Item::aged_brie(-1, 48);

        item.advance_one_day();
        assert_eq!((item.sell_in(), item.quality()), (-2, 50));

        item.advance_one_day();
        assert_eq!((item.sell_in(), item.quality()), (-3, 50));
    }

    #[test]
    fn sulfuras_unchanged_after_many_days() {
        let item = advanced(Item::sulfuras(5, 80), 10);
        assert_eq!((item.sell_in(), item.quality()), (5, 80));
    }

    #[test]
    fn backstage_pass_full_lifecycle() {
        let mut item = Item::backstage_pass(15, 20);

        item = advanced(item, 5);
        assert_eq!((item.sell_in(), item.quality()), (10, 25));

        item = advanced(item, 5);
        assert_eq!((item.sell_in(), item.quality()), (5, 35));

        item = advanced(item, 5);
        assert_eq!((item.sell_in(), item.quality()), (0, 50));

        item = advanced(item, 1);
        assert_eq!((item.sell_in(), item.quality()), (-1, 0));
    }

    #[test]
    fn backstage_pass_phase_transitions() {
        let mut item = Item::backstage_pass(11, 20);
        item.advance_one_day();
        assert_eq!((item.sell_in(), item.quality()), (10, 21));
        item.advance_one_day();
        assert_eq!((item.sell_in(), item.quality()), (9, 23));

        let mut item = Item::backstage_pass(6, 20);
        item.advance_one_day();
        assert_eq!((item.sell_in(), item.quality()), (5, 22));
        item.advance_one_day();
        assert_eq!((item.sell_in(), item.quality()), (4, 25));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: advancing is never idempotent except for the fixed item.
            #[test]
            fn advancing_twice_differs_from_once(
                name in prop_oneof![
                    Just("Aged Brie".to_string()),
                    Just("Backstage passes to a TAFKAL80ETC concert".to_string()),
                    "[A-Za-z ]{0,20}",
                ],
                sell_in in -500i32..500,
                quality in 0i32..=50,
            ) {
                let once = advanced(Item::create(name.clone(), sell_in, quality), 1);
                let twice = advanced(Item::create(name, sell_in, quality), 2);
                prop_assert_ne!(once, twice);
            }

            /// Property: any number of days leaves the fixed item untouched.
            #[test]
            fn sulfuras_is_unchanged_after_n_days(
                sell_in in any::<i32>(),
                quality in any::<i32>(),
                days in 0usize..50,
            ) {
                let start = Item::sulfuras(sell_in, quality);
                prop_assert_eq!(advanced(start.clone(), days), start);
            }
        }
    }
}
