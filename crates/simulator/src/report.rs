use std::io::Write;

use gildedrose_inventory::Inventory;

use crate::config::SimulatorConfig;
use crate::error::SimulatorResult;
use crate::fixture::{default_fixture, load_fixture};

/// Write one day's table: header, column names, one line per item, blank line.
pub fn render_day(out: &mut impl Write, day: u32, inventory: &Inventory) -> std::io::Result<()> {
    writeln!(out, "-------- day {day} --------")?;
    writeln!(out, "name, sellIn, quality")?;
    for item in inventory {
        writeln!(out, "{item}")?;
    }
    writeln!(out)
}

/// Load the configured fixture and print days `0..=config.days`.
///
/// Returns the inventory as it stands after the last printed day.
pub fn run(config: &SimulatorConfig, out: &mut impl Write) -> SimulatorResult<Inventory> {
    let items = match &config.fixture {
        Some(path) => load_fixture(path)?,
        None => default_fixture(),
    };
    let mut inventory = Inventory::new(items);

    tracing::info!(days = config.days, items = inventory.len(), "starting simulation");

    for day in 0..=config.days {
        if day > 0 {
            inventory.advance_one_day();
        }
        render_day(out, day, &inventory)?;
    }

    tracing::info!(day = inventory.day(), "simulation finished");
    Ok(inventory)
}
