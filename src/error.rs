use std::path::PathBuf;
use std::process::ExitCode;

use crate::kernel::ProcessState;

/// All errors produced by the simulator.
///
/// - **Infrastructure errors** (exit code 2): unreadable or malformed scenarios, I/O
/// - **Operational errors** (exit code 1): rejected transitions and inputs in strict mode
#[derive(thiserror::Error, Debug)]
pub enum SimulatorError {
    #[error("Scenario parse error: {0}")]
    ScenarioParse(String),

    #[error("Scenario file not found: {path}")]
    ScenarioNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Process {process_id}: illegal transition {from} -> {to}")]
    InvalidTransition {
        process_id: i32,
        from: ProcessState,
        to: ProcessState,
    },

    #[error("Validation failed: {reason}")]
    Validation { reason: String },

    #[error("Duplicate process id: {process_id}")]
    DuplicateProcessId { process_id: i32 },
}

impl SimulatorError {
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_code_num())
    }

    pub fn exit_code_num(&self) -> u8 {
        match self {
            Self::ScenarioParse(_)
            | Self::ScenarioNotFound { .. }
            | Self::Io(_)
            | Self::Json(_) => 2,

            Self::InvalidTransition { .. }
            | Self::Validation { .. }
            | Self::DuplicateProcessId { .. } => 1,
        }
    }
}
