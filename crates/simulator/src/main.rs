use anyhow::Context;
use clap::Parser;

use gildedrose_observability::LogFormat;
use gildedrose_simulator::SimulatorConfig;

fn main() -> anyhow::Result<()> {
    let config = SimulatorConfig::parse();
    gildedrose_observability::init_with(LogFormat::from_json_flag(config.log_json));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    gildedrose_simulator::run(&config, &mut out).context("simulation failed")?;

    Ok(())
}
