pub mod cli;
pub mod error;
pub mod io;
pub mod kernel;
pub mod logger;

pub use error::SimulatorError;
