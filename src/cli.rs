use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::error::SimulatorError;
use crate::io::{self, OutputFormat, Scenario};
use crate::kernel::ClockKind;

/// Simulates process control blocks cycling through a round-robin scheduler.
#[derive(Parser, Debug)]
#[command(name = "pcb-simulator", version, about)]
pub struct Cli {
    /// Scenario TOML file. The built-in reference run is used when omitted.
    #[arg(long)]
    pub scenario: Option<PathBuf>,

    /// Number of scheduling cycles (overrides the scenario).
    #[arg(long)]
    pub cycles: Option<u32>,

    /// Execution latency of one quantum in milliseconds (overrides the scenario).
    #[arg(long)]
    pub quantum_ms: Option<u64>,

    /// Clock used for execution latency (overrides the scenario).
    #[arg(long, value_enum)]
    pub clock: Option<ClockKind>,

    /// Reject duplicate ids, bad memory bounds and illegal transitions.
    #[arg(long)]
    pub strict: bool,

    /// Print every PCB field instead of one line per process.
    #[arg(long)]
    pub detailed: bool,

    /// Output format for the report.
    #[arg(long, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Log level written to stderr.
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Loads the scenario and applies command line overrides.
    pub fn scenario(&self) -> Result<Scenario, SimulatorError> {
        let mut scenario = match &self.scenario {
            Some(path) => io::load_scenario(path)?,
            None => Scenario::default(),
        };

        if let Some(cycles) = self.cycles {
            scenario.cycles = cycles;
        }
        if let Some(quantum_ms) = self.quantum_ms {
            scenario.quantum_ms = quantum_ms;
        }
        if let Some(clock) = self.clock {
            scenario.clock = clock;
        }
        scenario.strict |= self.strict;

        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["pcb-simulator"]).unwrap();
        let scenario = cli.scenario().unwrap();

        assert_eq!(cli.output, OutputFormat::Human);
        assert_eq!(cli.log_level, LevelFilter::Info);
        assert_eq!(scenario, Scenario::default());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "pcb-simulator",
            "--cycles",
            "7",
            "--quantum-ms",
            "5",
            "--clock",
            "wall",
            "--strict",
            "--output",
            "json",
        ])
        .unwrap();
        let scenario = cli.scenario().unwrap();

        assert_eq!(scenario.cycles, 7);
        assert_eq!(scenario.quantum_ms, 5);
        assert_eq!(scenario.clock, ClockKind::Wall);
        assert!(scenario.strict);
        assert_eq!(cli.output, OutputFormat::Json);
    }

    #[test]
    fn test_cli_missing_scenario_file() {
        let cli = Cli::try_parse_from(["pcb-simulator", "--scenario", "missing.toml"]).unwrap();

        assert!(matches!(cli.scenario(), Err(SimulatorError::ScenarioNotFound { .. })));
    }
}
