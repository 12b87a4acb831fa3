use std::process::ExitCode;

use clap::Parser;

use pcb_simulator::cli::Cli;
use pcb_simulator::io::report;
use pcb_simulator::kernel::Driver;
use pcb_simulator::{logger, SimulatorError};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logger::init(cli.log_level) {
        eprintln!("Failed to install logger: {err}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report::emit_failure(cli.output, &err);
            err.exit_code()
        }
    }
}

fn run(cli: &Cli) -> Result<(), SimulatorError> {
    let scenario = cli.scenario()?;
    let mut driver = Driver::new(scenario);
    let simulation = driver.start()?;

    report::emit(cli.output, &simulation, cli.detailed)
}
