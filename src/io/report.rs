use std::fmt::Write;

use crate::error::SimulatorError;
use crate::kernel::{ProcessControlBlock, SimulationReport};

/// How a finished simulation is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// The whole `SimulationReport` serialized as one JSON line.
    Json,
    /// A PCB table before the first cycle and after every cycle.
    #[default]
    Human,
}

/// One summary line per process, in registry order.
pub fn render_table<'a, I>(pcbs: I) -> String
where
    I: IntoIterator<Item = &'a ProcessControlBlock>,
{
    let mut out = String::from("--- PCB List ---\n");
    for pcb in pcbs {
        let _ = writeln!(
            out,
            "Process ID: {}, State: {}, Program Counter: {}, Priority: {}",
            pcb.get_id(),
            pcb.state,
            pcb.program_counter,
            pcb.get_priority()
        );
    }
    out.push_str("----------------\n");
    out
}

/// Every field of every process, blank line separated.
pub fn render_detailed<'a, I>(pcbs: I) -> String
where
    I: IntoIterator<Item = &'a ProcessControlBlock>,
{
    let mut out = String::from("--- PCB List ---\n");
    for pcb in pcbs {
        let _ = writeln!(out, "{pcb}\n");
    }
    out.push_str("----------------\n");
    out
}

pub fn render_human(report: &SimulationReport, detailed: bool) -> String {
    let render = |pcbs: &[ProcessControlBlock]| {
        if detailed {
            render_detailed(pcbs)
        } else {
            render_table(pcbs)
        }
    };

    let mut out = String::new();
    out.push_str(&render(report.initial.as_slice()));

    for snapshot in &report.cycles {
        let _ = writeln!(out, "\n--- Scheduling Cycle {} ---", snapshot.cycle);
        out.push_str(&render(snapshot.processes.as_slice()));
    }

    let _ = writeln!(
        out,
        "\n{} dispatches, {} ms simulated",
        report.dispatches.len(),
        report.elapsed_ms
    );
    out
}

pub fn emit(
    format: OutputFormat,
    report: &SimulationReport,
    detailed: bool,
) -> Result<(), SimulatorError> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string(report)? + "\n",
        OutputFormat::Human => render_human(report, detailed),
    };
    print!("{text}");
    Ok(())
}

/// A failed run. JSON callers still get a parseable line on stdout.
pub fn render_failure(format: OutputFormat, err: &SimulatorError) -> String {
    match format {
        OutputFormat::Json => serde_json::json!({
            "failed": true,
            "reason": err.to_string(),
            "exit_code": err.exit_code_num(),
        })
        .to_string(),
        OutputFormat::Human => format!("simulation failed: {err}"),
    }
}

pub fn emit_failure(format: OutputFormat, err: &SimulatorError) {
    let text = render_failure(format, err);
    match format {
        OutputFormat::Json => println!("{text}"),
        OutputFormat::Human => eprintln!("{text}"),
    }
}
