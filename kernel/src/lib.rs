/*!
 * SimpleOS Kernel Library
 * Simulated kernel core: process table, round-robin scheduler and flat file store
 */

pub mod core;
pub mod kernel;
pub mod monitoring;
pub mod process;
pub mod shell;
pub mod vfs;

// Re-exports
pub use crate::core::config::KernelConfig;
pub use crate::core::errors::*;
pub use crate::core::types::{CpuTicks, Pid, Priority, Timestamp};
pub use kernel::{Kernel, KernelBuilder, ShutdownReport};
pub use monitoring::init_tracing;
pub use process::{
    Dispatch, DispatchOutcome, Entropy, ProcessInfo, ProcessRegistry, ProcessState,
    RandomEntropy, Scheduler, SchedulerStats, ScriptedEntropy, TickReport,
};
pub use shell::{Command, Reply, Shell};
pub use vfs::{FileContents, FileInfo, FileStore};
