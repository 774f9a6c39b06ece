/*!
 * Process Registry
 * Process table and PID allocation
 */

use super::entropy::Entropy;
use super::types::{Process, ProcessInfo, ProcessState};
use crate::core::data_structures::{InlineString, ResourceTable};
use crate::core::errors::{ProcessError, ProcessResult};
use crate::core::limits::{FIRST_PID, MAX_PRIORITY, MAX_PROCESS_NAME, MIN_PRIORITY};
use crate::core::types::Pid;
use tracing::{info, warn};

/// Fixed-capacity process table keyed by PID
///
/// PIDs increase monotonically from 1 and are never reused until
/// [`ProcessRegistry::reset`].
#[derive(Debug)]
pub struct ProcessRegistry {
    pub(crate) table: ResourceTable<Pid, Process>,
    next_pid: Pid,
}

impl ProcessRegistry {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: ResourceTable::with_capacity(capacity),
            next_pid: FIRST_PID,
        }
    }

    /// Create a Ready process and return its PID
    ///
    /// A failed create does not consume a PID.
    pub fn create(&mut self, name: &str, entropy: &mut dyn Entropy) -> ProcessResult<Pid> {
        let capacity = self.capacity();
        if self.table.is_full() {
            warn!(name, capacity, "Process table full");
            return Err(ProcessError::TableFull { capacity });
        }

        let pid = self.next_pid;
        let name = InlineString::bounded(name, MAX_PROCESS_NAME);
        let priority = entropy.priority().clamp(MIN_PRIORITY, MAX_PRIORITY);

        // PIDs are never reused, so Full is the only way allocation can fail
        self.table
            .allocate(pid, Process::new(name.clone(), priority))
            .map_err(|_| ProcessError::TableFull { capacity })?;
        self.next_pid = self.next_pid.wrapping_add(1);

        info!(pid, name = %name, priority, "Created process");
        Ok(pid)
    }

    /// Free a process slot regardless of its state
    pub fn kill(&mut self, pid: Pid) -> ProcessResult<()> {
        let name = self
            .table
            .find(&pid)
            .map(|process| process.name.clone())
            .ok_or(ProcessError::NotFound(pid))?;

        self.table
            .free(&pid)
            .map_err(|_| ProcessError::NotFound(pid))?;

        info!(pid, name = %name, "Killed process");
        Ok(())
    }

    pub fn get(&self, pid: Pid) -> Option<ProcessInfo> {
        self.table
            .find(&pid)
            .map(|process| ProcessInfo::snapshot(pid, process))
    }

    /// Live processes in table order
    pub fn list(&self) -> Vec<ProcessInfo> {
        self.table
            .iter()
            .map(|(pid, process)| ProcessInfo::snapshot(*pid, process))
            .collect()
    }

    /// Terminate and release every live process, in table order
    pub fn terminate_all(&mut self) -> Vec<ProcessInfo> {
        let terminated: Vec<ProcessInfo> = self
            .table
            .iter()
            .map(|(pid, process)| {
                let mut info = ProcessInfo::snapshot(*pid, process);
                info.state = ProcessState::Terminated;
                info
            })
            .collect();

        for info in &terminated {
            info!(pid = info.pid, name = %info.name, "Terminating process");
        }
        self.table.clear();
        terminated
    }

    /// Drop every process and restart PIDs at 1
    pub fn reset(&mut self) {
        self.table.clear();
        self.next_pid = FIRST_PID;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// PID the next successful create will receive
    #[inline]
    pub fn next_pid(&self) -> Pid {
        self.next_pid
    }
}
