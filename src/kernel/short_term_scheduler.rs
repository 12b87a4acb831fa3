use std::time::Duration;

use serde::Serialize;

use super::{Clock, ProcessControlBlock, ProcessRegistry, ProcessState};

/// Default execution latency of one quantum.
pub const DEFAULT_QUANTUM: Duration = Duration::from_millis(1000);

/// One execution of one process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Dispatch {
    pub cycle: u32,
    pub process_id: i32,
    /// Program counter after the quantum completed.
    pub program_counter: u32,
}

/// Cooperative round-robin scheduler.
///
/// Every cycle sweeps the registry in insertion order and gives each
/// `New` or `Ready` process exactly one quantum. Priority is not consulted.
pub struct ShortTermScheduler<C: Clock> {
    clock: C,
    quantum: Duration,
    history: Vec<Dispatch>,
    cycles_run: u32,
}

impl<C: Clock> ShortTermScheduler<C> {
    pub fn new(clock: C, quantum: Duration) -> ShortTermScheduler<C> {
        ShortTermScheduler {
            clock,
            quantum,
            history: Vec::new(),
            cycles_run: 0,
        }
    }

    pub fn run_cycle(&mut self, registry: &mut ProcessRegistry) {
        log::debug!("Starting scheduling cycle {}", self.cycles_run + 1);

        for pcb in registry.iter_mut() {
            if pcb.state.is_schedulable() {
                self.execute(pcb);
            } else {
                log::debug!("Skipping process {} ({})", pcb.get_id(), pcb.state);
            }
        }

        self.cycles_run += 1;
    }

    /// Runs one quantum of `pcb`.
    ///
    /// Returns false without touching it unless it is `New` or `Ready`.
    pub fn execute(&mut self, pcb: &mut ProcessControlBlock) -> bool {
        if !pcb.state.is_schedulable() {
            return false;
        }

        pcb.set_state(ProcessState::Running);
        log::info!("Process {} is now {}", pcb.get_id(), pcb.state);

        pcb.program_counter = pcb.program_counter.checked_add(1).unwrap_or_else(|| {
            log::warn!("Process {} program counter is saturated", pcb.get_id());
            u32::MAX
        });
        self.clock.advance(self.quantum);

        pcb.set_state(ProcessState::Ready);

        self.history.push(Dispatch {
            cycle: self.cycles_run + 1,
            process_id: pcb.get_id(),
            program_counter: pcb.program_counter,
        });

        true
    }

    pub fn history(&self) -> &[Dispatch] {
        &self.history
    }

    pub fn cycles_run(&self) -> u32 {
        self.cycles_run
    }

    pub fn quantum(&self) -> Duration {
        self.quantum
    }

    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }
}
