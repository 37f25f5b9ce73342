use std::path::Path;

use serde::Deserialize;

use gildedrose_inventory::{Category, Item};

use crate::error::SimulatorResult;

/// One fixture entry as it appears in a JSON file.
///
/// `category` is an optional tag (`"standard"`, `"improving"`, `"fixed"`,
/// `"urgency-tiered"`) that binds the item explicitly instead of resolving it
/// from `name`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureItem {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
    #[serde(default)]
    pub category: Option<String>,
}

impl FixtureItem {
    pub fn into_item(self) -> SimulatorResult<Item> {
        match self.category {
            Some(tag) => {
                let category: Category = tag.parse()?;
                Ok(Item::with_category(self.name, category, self.sell_in, self.quality))
            }
            None => Ok(Item::create(self.name, self.sell_in, self.quality)),
        }
    }
}

/// The standard shop inventory used when no fixture file is given.
pub fn default_fixture() -> Vec<Item> {
    vec![
        Item::create("+5 Dexterity Vest", 10, 20),
        Item::create("Aged Brie", 2, 0),
        Item::create("Elixir of the Mongoose", 5, 7),
        Item::create("Sulfuras, Hand of Ragnaros", 0, 80),
        Item::create("Sulfuras, Hand of Ragnaros", -1, 80),
        Item::create("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        Item::create("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        Item::create("Backstage passes to a TAFKAL80ETC concert", 5, 49),
        Item::create("Conjured Mana Cake", 3, 6),
    ]
}

pub fn parse_fixture(json: &str) -> SimulatorResult<Vec<Item>> {
    let entries: Vec<FixtureItem> = serde_json::from_str(json)?;
    entries.into_iter().map(FixtureItem::into_item).collect()
}

pub fn load_fixture(path: &Path) -> SimulatorResult<Vec<Item>> {
    let json = std::fs::read_to_string(path)?;
    let items = parse_fixture(&json)?;
    tracing::debug!(path = %path.display(), items = items.len(), "loaded fixture");
    Ok(items)
}
