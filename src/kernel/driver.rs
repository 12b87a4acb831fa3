use serde::Serialize;

use super::*;

use crate::error::SimulatorError;
use crate::io::Scenario;

/// State of every process after one scheduling cycle.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CycleSnapshot {
    pub cycle: u32,
    pub processes: Vec<ProcessControlBlock>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationReport {
    /// Processes after the forced move to `Ready`, before the first cycle.
    pub initial: Vec<ProcessControlBlock>,
    pub cycles: Vec<CycleSnapshot>,
    pub dispatches: Vec<Dispatch>,
    pub elapsed_ms: u64,
}

/// Holds the simulated system and drives one scenario through it.
pub struct Driver {
    scenario: Scenario,
    registry: ProcessRegistry,
    sts: ShortTermScheduler<Box<dyn Clock>>,
}

impl Driver {
    pub fn new(scenario: Scenario) -> Driver {
        let sts = ShortTermScheduler::new(scenario.clock.build(), scenario.quantum());

        Driver {
            scenario,
            registry: ProcessRegistry::new(),
            sts,
        }
    }

    pub fn registry(&self) -> &ProcessRegistry {
        &self.registry
    }

    /// Runs the scenario from scratch.
    ///
    /// Each call starts with an empty registry and a fresh scheduler.
    pub fn start(&mut self) -> Result<SimulationReport, SimulatorError> {
        self.registry.teardown();
        self.sts = ShortTermScheduler::new(self.scenario.clock.build(), self.scenario.quantum());

        log::info!(
            "Starting simulation: {} processes, {} cycles, {:?} quantum",
            self.scenario.process_count(),
            self.scenario.cycles,
            self.sts.quantum()
        );

        if self.scenario.strict {
            self.scenario.validate()?;
        }

        self.create_processes()?;
        self.make_all_ready()?;

        let initial = self.snapshot();
        let mut cycles = Vec::new();

        for cycle in 1..=self.scenario.cycles {
            log::info!("Scheduling cycle {}", cycle);
            self.sts.run_cycle(&mut self.registry);
            cycles.push(CycleSnapshot {
                cycle,
                processes: self.snapshot(),
            });
        }

        let report = SimulationReport {
            initial,
            cycles,
            dispatches: self.sts.history().to_vec(),
            elapsed_ms: u64::try_from(self.sts.elapsed().as_millis()).unwrap_or(u64::MAX),
        };

        self.registry.teardown();
        log::info!("Simulation finished after {} dispatches", report.dispatches.len());

        Ok(report)
    }

    fn create_processes(&mut self) -> Result<(), SimulatorError> {
        for spec in &self.scenario.processes {
            if self.scenario.strict {
                self.registry.try_create_process(
                    spec.id,
                    spec.priority,
                    spec.memory_base,
                    spec.memory_limit,
                    &spec.resources,
                )?;
            } else {
                self.registry.create_process(
                    spec.id,
                    spec.priority,
                    spec.memory_base,
                    spec.memory_limit,
                    &spec.resources,
                );
            }
        }
        Ok(())
    }

    fn make_all_ready(&mut self) -> Result<(), SimulatorError> {
        if !self.scenario.strict {
            self.registry.set_all_states(ProcessState::Ready);
            return Ok(());
        }

        for pcb in self.registry.iter_mut() {
            pcb.transition(ProcessState::Ready)?;
        }
        Ok(())
    }

    fn snapshot(&self) -> Vec<ProcessControlBlock> {
        self.registry.iter().cloned().collect()
    }
}
