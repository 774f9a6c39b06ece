/*!
 * Process Types
 * Common types for process management
 */

use crate::core::data_structures::{InlineString, Scrub};
use crate::core::types::{CpuTicks, Pid, Priority, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::SystemTime;

/// Process state
///
/// `New` is transient: creation moves a process straight to `Ready`.
/// `Terminated` is absorbing and releases the table slot immediately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    #[default]
    New,
    /// Process is ready to run
    Ready,
    /// Process is currently running
    Running,
    /// Process is waiting for simulated I/O
    Waiting,
    /// Process has completed or been killed
    Terminated,
}

impl ProcessState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProcessState::New => "NEW",
            ProcessState::Ready => "READY",
            ProcessState::Running => "RUNNING",
            ProcessState::Waiting => "WAITING",
            ProcessState::Terminated => "TERMINATED",
        }
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Process table payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub name: InlineString,
    pub state: ProcessState,
    pub priority: Priority,
    pub cpu_time: CpuTicks,
    pub created_at: Timestamp,
}

impl Process {
    #[must_use]
    pub fn new(name: InlineString, priority: Priority) -> Self {
        Self {
            name,
            state: ProcessState::Ready,
            priority,
            cpu_time: 0,
            created_at: SystemTime::now(),
        }
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, ProcessState::Running)
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.state, ProcessState::Ready)
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_waiting(&self) -> bool {
        matches!(self.state, ProcessState::Waiting)
    }
}

impl Default for Process {
    fn default() -> Self {
        Self {
            name: InlineString::default(),
            state: ProcessState::New,
            priority: 0,
            cpu_time: 0,
            created_at: SystemTime::UNIX_EPOCH,
        }
    }
}

impl Scrub for Process {}

/// Process snapshot returned by listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessInfo {
    pub pid: Pid,
    pub name: String,
    pub state: ProcessState,
    pub priority: Priority,
    pub cpu_time: CpuTicks,
    pub created_at: Timestamp,
}

impl ProcessInfo {
    pub(crate) fn snapshot(pid: Pid, process: &Process) -> Self {
        Self {
            pid,
            name: process.name.to_string(),
            state: process.state,
            priority: process.priority,
            cpu_time: process.cpu_time,
            created_at: process.created_at,
        }
    }
}
