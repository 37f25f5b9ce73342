use serde::{Deserialize, Serialize};

use gildedrose_core::ValueObject;

/// Bounded quality score.
///
/// The mutators saturate at [`Quality::MIN`] and [`Quality::MAX`]. Construction
/// does not clamp: an item may be created with a score outside the range, and
/// the mutators only ever step *towards* the range from there.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quality(i32);

impl Quality {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 50;

    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Self::MIN
    }

    /// +1, no-op at or above the cap.
    pub fn increase(&mut self) {
        if self.0 < Self::MAX {
            self.0 += 1;
        }
    }

    /// -1, no-op at or below the floor.
    pub fn decrease(&mut self) {
        if self.0 > Self::MIN {
            self.0 -= 1;
        }
    }

    pub fn reset(&mut self) {
        self.0 = Self::MIN;
    }
}

impl ValueObject for Quality {}

impl From<i32> for Quality {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Quality> for i32 {
    fn from(value: Quality) -> Self {
        value.0
    }
}

impl core::fmt::Display for Quality {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
