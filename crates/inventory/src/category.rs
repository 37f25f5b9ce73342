use core::str::FromStr;

use serde::{Deserialize, Serialize};

use gildedrose_core::DomainError;

use crate::quality::Quality;

pub const AGED_BRIE: &str = "Aged Brie";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

const MEDIUM_URGENCY_THRESHOLD: i32 = 10;
const HIGH_URGENCY_THRESHOLD: i32 = 5;

/// Per-category daily update policy.
///
/// Every item is bound to exactly one category when it is created, and
/// [`Category::advance`] is the single place where a simulated day is applied.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Loses quality every day, twice as fast once past due.
    #[default]
    Standard,
    /// Gains quality every day, twice as fast once past due.
    Improving,
    /// Never changes: neither sell-in nor quality, and quality is never clamped.
    Fixed,
    /// Gains quality faster as the deadline approaches, worthless after it.
    UrgencyTiered,
}

impl Category {
    /// Resolve the category for an item name.
    ///
    /// Exact, case-sensitive match. Anything unrecognized (including the empty
    /// string) is [`Category::Standard`]; this never fails.
    pub fn resolve(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::Improving,
            BACKSTAGE_PASSES => Category::UrgencyTiered,
            SULFURAS => Category::Fixed,
            _ => Category::Standard,
        }
    }

    /// Stable tag used in serialized output.
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Standard => "standard",
            Category::Improving => "improving",
            Category::Fixed => "fixed",
            Category::UrgencyTiered => "urgency-tiered",
        }
    }

    /// The item name that resolves to this category, if there is a single one.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Category::Standard => None,
            Category::Improving => Some(AGED_BRIE),
            Category::Fixed => Some(SULFURAS),
            Category::UrgencyTiered => Some(BACKSTAGE_PASSES),
        }
    }

    /// Past due once sell-in drops below zero.
    pub fn is_expired(sell_in: i32) -> bool {
        sell_in < 0
    }

    /// Extra increments an urgency-tiered item earns on top of the base +1,
    /// evaluated against the sell-in at the *start* of the day.
    pub fn urgency_bonus(sell_in: i32) -> u8 {
        let mut bonus = 0;
        if sell_in <= MEDIUM_URGENCY_THRESHOLD {
            bonus += 1;
        }
        if sell_in <= HIGH_URGENCY_THRESHOLD {
            bonus += 1;
        }
        bonus
    }

    /// Apply one simulated day.
    ///
    /// Quality changes happen before the sell-in decrement; the expiry check
    /// runs after it. Each quality step is clamped on its own.
    pub fn advance(self, sell_in: &mut i32, quality: &mut Quality) {
        match self {
            Category::Fixed => {}
            Category::Standard => {
                quality.decrease();
                *sell_in = sell_in.saturating_sub(1);
                if Self::is_expired(*sell_in) {
                    quality.decrease();
                }
            }
            Category::Improving => {
                quality.increase();
                *sell_in = sell_in.saturating_sub(1);
                if Self::is_expired(*sell_in) {
                    quality.increase();
                }
            }
            Category::UrgencyTiered => {
                quality.increase();
                for _ in 0..Self::urgency_bonus(*sell_in) {
                    quality.increase();
                }
                *sell_in = sell_in.saturating_sub(1);
                if Self::is_expired(*sell_in) {
                    quality.reset();
                }
            }
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Parses a category *tag* (see [`Category::tag`]), not an item name.
impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Category::Standard),
            "improving" => Ok(Category::Improving),
            "fixed" => Ok(Category::Fixed),
            "urgency-tiered" => Ok(Category::UrgencyTiered),
            other => Err(DomainError::validation(format!(
                "unknown category tag: {other:?}"
            ))),
        }
    }
}
