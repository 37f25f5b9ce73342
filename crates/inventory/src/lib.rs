//! Inventory domain module: daily quality and sell-in updates.
//!
//! This crate contains the per-category update rules, implemented purely as
//! deterministic domain logic (no IO, no clocks, no storage).

pub mod category;
pub mod inventory;
pub mod item;
pub mod quality;

pub use category::{AGED_BRIE, BACKSTAGE_PASSES, Category, SULFURAS};
pub use inventory::Inventory;
pub use item::Item;
pub use quality::Quality;
