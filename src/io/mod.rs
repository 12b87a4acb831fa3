pub mod loader;
pub mod report;
pub mod scenario;

pub use loader::{load_scenario, parse_scenario_str};
pub use report::OutputFormat;
pub use scenario::{ProcessSpec, Scenario};
