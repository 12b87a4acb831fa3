use std::fmt;

use serde::Serialize;

use crate::error::SimulatorError;

/// Number of saved general purpose registers per process.
pub const REGISTER_COUNT: usize = 8;

/// Size of the resources field, terminator included.
pub const RESOURCES_CAPACITY: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessState {
    New,
    Ready,
    Running,
    Waiting,
    Terminated,
}

impl ProcessState {
    pub fn ordinal(self) -> u8 {
        match self {
            ProcessState::New => 0,
            ProcessState::Ready => 1,
            ProcessState::Running => 2,
            ProcessState::Waiting => 3,
            ProcessState::Terminated => 4,
        }
    }

    /// Whether the scheduler may dispatch a process in this state.
    pub fn is_schedulable(self) -> bool {
        matches!(self, ProcessState::New | ProcessState::Ready)
    }

    /// Whether the lifecycle state machine allows moving from `self` to `next`.
    pub fn can_transition_to(self, next: ProcessState) -> bool {
        use ProcessState::*;

        if self == next {
            return true;
        }

        match (self, next) {
            (Terminated, _) => false,
            (_, Terminated) => true,
            (New, Ready)
            | (Ready, Running)
            | (Running, Ready)
            | (Running, Waiting)
            | (Waiting, Ready) => true,
            _ => false,
        }
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProcessState::New => "NEW",
            ProcessState::Ready => "READY",
            ProcessState::Running => "RUNNING",
            ProcessState::Waiting => "WAITING",
            ProcessState::Terminated => "TERMINATED",
        };
        f.write_str(name)
    }
}

/// The process control block. Holds the saved kernel context of one process.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProcessControlBlock {
    pub program_counter: u32,
    pub registers: [i32; REGISTER_COUNT],
    pub state: ProcessState,

    id: i32,
    priority: i32,

    memory_base: i32,
    memory_limit: i32,

    resources: String,
}

impl ProcessControlBlock {
    pub fn new(
        id: i32,
        priority: i32,
        memory_base: i32,
        memory_limit: i32,
        resources: &str,
    ) -> ProcessControlBlock {
        ProcessControlBlock {
            id,
            priority,
            memory_base,
            memory_limit,
            resources: truncate_resources(resources),
            program_counter: 0,
            registers: [0; REGISTER_COUNT],
            state: ProcessState::New,
        }
    }

    pub fn get_id(&self) -> i32 {
        self.id
    }

    pub fn get_priority(&self) -> i32 {
        self.priority
    }

    pub fn get_memory_base(&self) -> i32 {
        self.memory_base
    }

    pub fn get_memory_limit(&self) -> i32 {
        self.memory_limit
    }

    pub fn get_resources(&self) -> &str {
        &self.resources
    }

    /// Overwrites the state without consulting the lifecycle state machine.
    pub fn set_state(&mut self, new_state: ProcessState) {
        self.state = new_state;
    }

    /// Moves to `new_state` only if the lifecycle state machine allows it.
    pub fn transition(&mut self, new_state: ProcessState) -> Result<(), SimulatorError> {
        if !self.state.can_transition_to(new_state) {
            return Err(SimulatorError::InvalidTransition {
                process_id: self.id,
                from: self.state,
                to: new_state,
            });
        }

        self.state = new_state;
        Ok(())
    }
}

/// Changes the state of a process if there is one. An absent PCB is ignored.
pub fn change_state(pcb: Option<&mut ProcessControlBlock>, new_state: ProcessState) {
    if let Some(pcb) = pcb {
        pcb.set_state(new_state);
    }
}

/// Keeps at most `RESOURCES_CAPACITY - 1` bytes, cut on a character boundary.
fn truncate_resources(resources: &str) -> String {
    let max_len = RESOURCES_CAPACITY - 1;
    if resources.len() <= max_len {
        return resources.to_string();
    }

    let mut end = max_len;
    while !resources.is_char_boundary(end) {
        end -= 1;
    }
    resources[..end].to_string()
}

impl fmt::Display for ProcessControlBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Process ID: {}", self.id)?;
        writeln!(f, "State: {} ({})", self.state, self.state.ordinal())?;
        writeln!(f, "Program Counter: {}", self.program_counter)?;
        writeln!(f, "Priority: {}", self.priority)?;
        writeln!(f, "Memory Base: {}", self.memory_base)?;
        writeln!(f, "Memory Limit: {}", self.memory_limit)?;
        writeln!(f, "Resources: {}", self.resources)?;
        write!(f, "CPU Registers:")?;
        for register in &self.registers {
            write!(f, " {}", register)?;
        }
        Ok(())
    }
}
