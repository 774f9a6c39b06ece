/*!
 * CPU Scheduler
 * Round-robin over the process table, one dispatch per tick
 */

use crate::core::limits::CPU_TIME_BUDGET;
use crate::core::types::{CpuTicks, Pid};
use serde::Serialize;
use tracing::info;

mod operations;
mod stats;

pub use stats::SchedulerStats;

/// What happened to the dispatched process after it ran
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchOutcome {
    /// Still running; the next tick demotes it to Ready
    Running,
    /// Blocked on simulated I/O
    Waiting,
    /// Exceeded its CPU budget and was released from the table
    Completed,
}

/// A process that received a tick of CPU time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dispatch {
    pub pid: Pid,
    pub name: String,
    pub cpu_time: CpuTicks,
    pub outcome: DispatchOutcome,
}

/// Result of one scheduler tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TickReport {
    /// The process table is empty
    Empty,
    /// One Ready process was dispatched
    Dispatched(Dispatch),
    /// Nothing was Ready; waiting processes listed here were woken
    Idle { woken: Vec<Pid> },
}

impl TickReport {
    /// PID dispatched by this tick, if any
    pub fn dispatched(&self) -> Option<Pid> {
        match self {
            TickReport::Dispatched(dispatch) => Some(dispatch.pid),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        !matches!(self, TickReport::Dispatched(_))
    }
}

/// CPU Scheduler
///
/// Holds the current-process reference as a PID that is resolved against the
/// registry on every tick. A PID whose slot was freed simply stops resolving,
/// so the reference can never dangle.
#[derive(Debug, Clone)]
pub struct Scheduler {
    current: Option<Pid>,
    cpu_time_budget: CpuTicks,
    stats: SchedulerStats,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::with_budget(CPU_TIME_BUDGET)
    }

    /// Create scheduler with a custom CPU budget
    pub fn with_budget(cpu_time_budget: CpuTicks) -> Self {
        info!(cpu_time_budget, "Scheduler initialized (round-robin)");
        Self {
            current: None,
            cpu_time_budget,
            stats: SchedulerStats::default(),
        }
    }

    /// PID of the process holding the rotation point
    ///
    /// This is the Running process, or a process that blocked during its
    /// dispatch and is now Waiting.
    pub fn current(&self) -> Option<Pid> {
        self.current
    }

    /// Drop the current-process reference if it points at `pid`
    pub fn forget(&mut self, pid: Pid) {
        if self.current == Some(pid) {
            self.current = None;
        }
    }

    /// Clear the current reference and statistics
    pub fn reset(&mut self) {
        self.current = None;
        self.stats = SchedulerStats::default();
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
