mod clock;
mod process_control_block;
mod process_registry;
mod short_term_scheduler;

pub use clock::{Clock, ClockKind, SimulatedClock, WallClock};
pub use process_control_block::{
    change_state, ProcessControlBlock, ProcessState, REGISTER_COUNT, RESOURCES_CAPACITY,
};
pub use process_registry::ProcessRegistry;
pub use short_term_scheduler::{Dispatch, ShortTermScheduler, DEFAULT_QUANTUM};

pub mod driver;

pub use driver::{CycleSnapshot, Driver, SimulationReport};
