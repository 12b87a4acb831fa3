use std::collections::HashSet;
use std::time::Duration;

use serde::Deserialize;

use crate::error::SimulatorError;
use crate::kernel::ClockKind;

/// Scenario parameters for one simulation run, usually loaded from TOML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default = "default_cycles")]
    pub cycles: u32,
    #[serde(default = "default_quantum_ms")]
    pub quantum_ms: u64,
    #[serde(default)]
    pub clock: ClockKind,
    /// Reject duplicate ids, bad memory bounds and illegal transitions.
    #[serde(default)]
    pub strict: bool,
    #[serde(default, rename = "process")]
    pub processes: Vec<ProcessSpec>,
}

/// Initial attributes of one process.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProcessSpec {
    pub id: i32,
    #[serde(default)]
    pub priority: i32,
    pub memory_base: i32,
    pub memory_limit: i32,
    #[serde(default)]
    pub resources: String,
}

fn default_cycles() -> u32 {
    3
}

fn default_quantum_ms() -> u64 {
    1000
}

impl Scenario {
    pub fn quantum(&self) -> Duration {
        Duration::from_millis(self.quantum_ms)
    }

    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    /// Checks every process spec and rejects repeated ids.
    pub fn validate(&self) -> Result<(), SimulatorError> {
        let mut seen = HashSet::new();

        for spec in &self.processes {
            spec.validate()?;
            if !seen.insert(spec.id) {
                return Err(SimulatorError::DuplicateProcessId { process_id: spec.id });
            }
        }

        Ok(())
    }
}

impl Default for Scenario {
    /// Four processes, three cycles.
    fn default() -> Scenario {
        let processes = [
            (1, 5, 1000, 2000, "Disk"),
            (2, 3, 2000, 3000, "Network"),
            (3, 4, 3000, 4000, "I/O"),
            (4, 2, 4000, 5000, "CPU"),
        ]
        .into_iter()
        .map(|(id, priority, memory_base, memory_limit, resources)| ProcessSpec {
            id,
            priority,
            memory_base,
            memory_limit,
            resources: resources.to_string(),
        })
        .collect();

        Scenario {
            cycles: default_cycles(),
            quantum_ms: default_quantum_ms(),
            clock: ClockKind::Simulated,
            strict: false,
            processes,
        }
    }
}

impl ProcessSpec {
    pub fn validate(&self) -> Result<(), SimulatorError> {
        if self.memory_base < 0 || self.memory_limit < 0 {
            return Err(SimulatorError::Validation {
                reason: format!("process {} has negative memory bounds", self.id),
            });
        }

        if self.memory_base > self.memory_limit {
            return Err(SimulatorError::Validation {
                reason: format!(
                    "process {} memory base {} is above its limit {}",
                    self.id, self.memory_base, self.memory_limit
                ),
            });
        }

        Ok(())
    }
}
