/*!
 * Scheduler Statistics
 * Track and report scheduler activity
 */

use super::Scheduler;
use serde::{Deserialize, Serialize};

/// Counters accumulated since boot or the last reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerStats {
    pub ticks: u64,
    pub dispatches: u64,
    /// Ticks where nothing was Ready
    pub idle_ticks: u64,
    /// Ticks with an empty process table
    pub empty_ticks: u64,
    pub blocked: u64,
    pub completed: u64,
    pub woken: u64,
}

impl Scheduler {
    /// Get scheduler statistics snapshot
    pub fn stats(&self) -> SchedulerStats {
        self.stats
    }
}
