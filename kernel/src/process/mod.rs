/*!
 * Process Module
 * Process table, PID allocation and round-robin scheduling
 */

pub mod entropy;
pub mod registry;
pub mod scheduler;
pub mod types;

// Re-export for convenience
pub use entropy::{Entropy, RandomEntropy, ScriptedEntropy};
pub use registry::ProcessRegistry;
pub use scheduler::{Dispatch, DispatchOutcome, Scheduler, SchedulerStats, TickReport};
pub use types::{Process, ProcessInfo, ProcessState};
