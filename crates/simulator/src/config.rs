use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_DAYS: u32 = 2;

/// Simulate the inventory's daily quality updates and print each day.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct SimulatorConfig {
    /// Number of days to simulate after day 0
    #[arg(short, long, env = "GILDEDROSE_DAYS", default_value_t = DEFAULT_DAYS)]
    pub days: u32,

    /// JSON fixture: an array of {"name", "sell_in", "quality"} objects.
    /// The built-in inventory is used when omitted.
    #[arg(short, long, env = "GILDEDROSE_FIXTURE")]
    pub fixture: Option<PathBuf>,

    /// Emit logs as JSON instead of compact text
    #[arg(long, env = "GILDEDROSE_LOG_JSON", default_value = "false")]
    pub log_json: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            fixture: None,
            log_json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_arguments() {
        let config = SimulatorConfig::try_parse_from(["gildedrose-simulator"]).unwrap();
        assert_eq!(config.days, DEFAULT_DAYS);
        assert_eq!(config.fixture, None);
        assert!(!config.log_json);
    }

    #[test]
    fn parses_flags() {
        let config = SimulatorConfig::try_parse_from([
            "gildedrose-simulator",
            "--days",
            "30",
            "--fixture",
            "items.json",
            "--log-json",
        ])
        .unwrap();
        assert_eq!(config.days, 30);
        assert_eq!(config.fixture, Some(PathBuf::from("items.json")));
        assert!(config.log_json);
    }

    #[test]
    fn rejects_negative_days() {
        let err = SimulatorConfig::try_parse_from(["gildedrose-simulator", "--days", "-1"]);
        assert!(err.is_err());
    }
}
