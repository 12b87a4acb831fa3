use std::slice;

use super::{ProcessControlBlock, ProcessState};

use crate::error::SimulatorError;

/// Owns every PCB known to the simulation, in creation order.
#[derive(Debug, Default)]
pub struct ProcessRegistry {
    pcbs: Vec<ProcessControlBlock>,
}

impl ProcessRegistry {
    pub fn new() -> ProcessRegistry {
        ProcessRegistry { pcbs: Vec::new() }
    }

    /// Creates a PCB and appends it to the registry. Duplicate ids are accepted.
    pub fn create_process(
        &mut self,
        process_id: i32,
        priority: i32,
        memory_base: i32,
        memory_limit: i32,
        resources: &str,
    ) -> &mut ProcessControlBlock {
        if self.contains(process_id) {
            log::warn!("Process id {} is already registered", process_id);
        }

        log::debug!("Registering process {}", process_id);
        self.pcbs.push(ProcessControlBlock::new(
            process_id,
            priority,
            memory_base,
            memory_limit,
            resources,
        ));

        let last = self.pcbs.len() - 1;
        &mut self.pcbs[last]
    }

    /// Like `create_process`, but rejects an id that is already registered.
    pub fn try_create_process(
        &mut self,
        process_id: i32,
        priority: i32,
        memory_base: i32,
        memory_limit: i32,
        resources: &str,
    ) -> Result<&mut ProcessControlBlock, SimulatorError> {
        if self.contains(process_id) {
            return Err(SimulatorError::DuplicateProcessId { process_id });
        }

        Ok(self.create_process(process_id, priority, memory_base, memory_limit, resources))
    }

    pub fn contains(&self, process_id: i32) -> bool {
        self.pcbs.iter().any(|pcb| pcb.get_id() == process_id)
    }

    /// First PCB registered under `process_id`.
    pub fn get(&self, process_id: i32) -> Option<&ProcessControlBlock> {
        self.pcbs.iter().find(|pcb| pcb.get_id() == process_id)
    }

    pub fn get_mut(&mut self, process_id: i32) -> Option<&mut ProcessControlBlock> {
        self.pcbs.iter_mut().find(|pcb| pcb.get_id() == process_id)
    }

    pub fn iter(&self) -> slice::Iter<'_, ProcessControlBlock> {
        self.pcbs.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, ProcessControlBlock> {
        self.pcbs.iter_mut()
    }

    pub fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&ProcessControlBlock),
    {
        self.pcbs.iter().for_each(visit);
    }

    pub fn for_each_mut<F>(&mut self, visit: F)
    where
        F: FnMut(&mut ProcessControlBlock),
    {
        self.pcbs.iter_mut().for_each(visit);
    }

    /// Forces every registered process into `state`, bypassing the lifecycle checks.
    pub fn set_all_states(&mut self, state: ProcessState) {
        self.for_each_mut(|pcb| pcb.set_state(state));
    }

    pub fn len(&self) -> usize {
        self.pcbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pcbs.is_empty()
    }

    /// Releases every PCB. The registry is empty afterwards.
    pub fn teardown(&mut self) {
        log::debug!("Releasing {} processes", self.pcbs.len());
        self.pcbs.clear();
    }
}

impl<'a> IntoIterator for &'a ProcessRegistry {
    type Item = &'a ProcessControlBlock;
    type IntoIter = slice::Iter<'a, ProcessControlBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
