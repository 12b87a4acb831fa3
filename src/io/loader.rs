use std::path::Path;

use super::Scenario;

use crate::error::SimulatorError;

pub const DEFAULT_SCENARIO_PATH: &str = "data/scenario.toml";

/// Reads a scenario from a TOML file.
pub fn load_scenario(path: &Path) -> Result<Scenario, SimulatorError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SimulatorError::ScenarioNotFound { path: path.to_path_buf() }
        } else {
            SimulatorError::Io(e)
        }
    })?;

    log::debug!("Loaded scenario from {}", path.display());
    parse_scenario_str(&content)
}

pub fn parse_scenario_str(content: &str) -> Result<Scenario, SimulatorError> {
    toml::from_str(content).map_err(|e| SimulatorError::ScenarioParse(format!("invalid TOML: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::ClockKind;

    #[test]
    fn test_parse_scenario_str() {
        let content = r#"
            cycles = 5
            quantum_ms = 10
            clock = "wall"

            [[process]]
            id = 7
            priority = 2
            memory_base = 0
            memory_limit = 64
            resources = "Printer"

            [[process]]
            id = 8
            memory_base = 64
            memory_limit = 128
        "#;
        let scenario = parse_scenario_str(content).unwrap();

        assert_eq!(scenario.cycles, 5);
        assert_eq!(scenario.quantum_ms, 10);
        assert_eq!(scenario.clock, ClockKind::Wall);
        assert!(!scenario.strict);
        assert_eq!(scenario.process_count(), 2);
        assert_eq!(scenario.processes[0].resources, "Printer");
        assert_eq!(scenario.processes[1].priority, 0);
        assert_eq!(scenario.processes[1].resources, "");
    }

    #[test]
    fn test_parse_scenario_defaults() {
        let scenario = parse_scenario_str("").unwrap();

        assert_eq!(scenario.cycles, 3);
        assert_eq!(scenario.quantum_ms, 1000);
        assert_eq!(scenario.clock, ClockKind::Simulated);
        assert!(scenario.processes.is_empty());
    }

    #[test]
    fn test_parse_scenario_invalid_toml() {
        let result = parse_scenario_str("cycles = [");

        assert!(matches!(result, Err(SimulatorError::ScenarioParse(_))));
    }

    #[test]
    fn test_parse_scenario_unknown_field() {
        let result = parse_scenario_str("cycle_count = 3");

        assert!(matches!(result, Err(SimulatorError::ScenarioParse(_))));
    }

    #[test]
    fn test_load_scenario_missing_file() {
        let result = load_scenario(Path::new("does/not/exist.toml"));

        assert!(matches!(result, Err(SimulatorError::ScenarioNotFound { .. })));
    }

    #[test]
    fn test_load_default_scenario_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_SCENARIO_PATH);
        let scenario = load_scenario(&path).unwrap();

        assert_eq!(scenario, Scenario::default());
    }
}
