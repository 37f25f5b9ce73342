//! `gildedrose-simulator` — drives the inventory over a fixture, day by day.
//!
//! This is the only crate in the workspace that performs IO.

pub mod config;
pub mod error;
pub mod fixture;
pub mod report;

pub use config::SimulatorConfig;
pub use error::{SimulatorError, SimulatorResult};
pub use fixture::{FixtureItem, default_fixture, load_fixture, parse_fixture};
pub use report::{render_day, run};
