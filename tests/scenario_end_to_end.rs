//! Runs scenarios loaded from TOML files through the driver.

use std::fs;

use pcb_simulator::io::{load_scenario, report};
use pcb_simulator::kernel::{Driver, ProcessState};
use pcb_simulator::SimulatorError;

const REFERENCE: &str = r#"
cycles = 3
quantum_ms = 1000

[[process]]
id = 1
priority = 5
memory_base = 1000
memory_limit = 2000
resources = "Disk"

[[process]]
id = 2
priority = 3
memory_base = 2000
memory_limit = 3000
resources = "Network"

[[process]]
id = 3
priority = 4
memory_base = 3000
memory_limit = 4000
resources = "I/O"

[[process]]
id = 4
priority = 2
memory_base = 4000
memory_limit = 5000
resources = "CPU"
"#;

#[test]
fn reference_scenario_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reference.toml");
    fs::write(&path, REFERENCE).unwrap();

    let scenario = load_scenario(&path).unwrap();
    let mut driver = Driver::new(scenario);
    let simulation = driver.start().unwrap();

    for (index, snapshot) in simulation.cycles.iter().enumerate() {
        let ids: Vec<i32> = snapshot.processes.iter().map(|pcb| pcb.get_id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        for pcb in &snapshot.processes {
            assert_eq!(pcb.state, ProcessState::Ready);
            assert_eq!(pcb.program_counter, index as u32 + 1);
        }
    }

    let last = simulation.cycles.last().unwrap();
    assert_eq!(last.cycle, 3);
    assert!(last.processes.iter().all(|pcb| pcb.program_counter == 3));
    assert!(driver.registry().is_empty());
    assert_eq!(driver.registry().iter().count(), 0);
}

#[test]
fn reference_scenario_human_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reference.toml");
    fs::write(&path, REFERENCE).unwrap();

    let mut driver = Driver::new(load_scenario(&path).unwrap());
    let simulation = driver.start().unwrap();
    let text = report::render_human(&simulation, false);

    assert!(text.contains("--- Scheduling Cycle 3 ---"));
    assert!(text.contains("Process ID: 4, State: READY, Program Counter: 3, Priority: 2"));
    assert!(text.ends_with("12 dispatches, 12000 ms simulated\n"));
}

#[test]
fn strict_scenario_rejects_duplicate_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("duplicate.toml");
    fs::write(
        &path,
        r#"
strict = true

[[process]]
id = 1
memory_base = 0
memory_limit = 10

[[process]]
id = 1
memory_base = 10
memory_limit = 20
"#,
    )
    .unwrap();

    let mut driver = Driver::new(load_scenario(&path).unwrap());
    let err = driver.start().unwrap_err();

    assert!(matches!(err, SimulatorError::DuplicateProcessId { process_id: 1 }));
    assert_eq!(err.exit_code_num(), 1);
}

#[test]
fn malformed_scenario_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[[process]]\nid = \"one\"\n").unwrap();

    let err = load_scenario(&path).unwrap_err();

    assert!(matches!(err, SimulatorError::ScenarioParse(_)));
    assert_eq!(err.exit_code_num(), 2);
}
