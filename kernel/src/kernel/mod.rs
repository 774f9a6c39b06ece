/*!
 * Kernel Context
 *
 * Owns the process table, the file table, the PID counter, the scheduler and
 * the decision source. Every operation a dispatcher can invoke goes through
 * here; independent kernels share nothing.
 */

mod builder;

pub use builder::KernelBuilder;

use crate::core::config::KernelConfig;
use crate::core::errors::{ConfigError, FsResult, ProcessResult};
use crate::core::limits::{MAX_FILES, MAX_PROCESSES};
use crate::core::types::Pid;
use crate::process::{
    Entropy, ProcessInfo, ProcessRegistry, RandomEntropy, Scheduler, SchedulerStats, TickReport,
};
use crate::vfs::{FileContents, FileInfo, FileStore};
use serde::Serialize;
use tracing::info;

/// What was torn down at shutdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShutdownReport {
    /// Processes alive at shutdown, in table order
    pub terminated: Vec<ProcessInfo>,
    /// Files left in the file table
    pub files: usize,
    pub ticks: u64,
}

/// Simulated kernel core
pub struct Kernel {
    pub(crate) config: KernelConfig,
    pub(crate) processes: ProcessRegistry,
    pub(crate) scheduler: Scheduler,
    pub(crate) files: FileStore,
    pub(crate) entropy: Box<dyn Entropy>,
    pub(crate) tick_count: u64,
}

impl Kernel {
    /// Kernel with default limits and a random decision source
    pub fn new() -> Self {
        Self {
            config: KernelConfig::default(),
            processes: ProcessRegistry::with_capacity(MAX_PROCESSES),
            scheduler: Scheduler::new(),
            files: FileStore::with_capacity(MAX_FILES),
            entropy: Box::new(RandomEntropy::from_entropy()),
            tick_count: 0,
        }
    }

    pub fn builder() -> KernelBuilder {
        KernelBuilder::new()
    }

    /// Boot with `config` and a random decision source seeded from it
    pub fn boot(config: KernelConfig) -> Result<Self, ConfigError> {
        KernelBuilder::new().with_config(config).build()
    }

    // ---------------------------------------------------------------------
    // Processes
    // ---------------------------------------------------------------------

    pub fn create_process(&mut self, name: &str) -> ProcessResult<Pid> {
        self.processes.create(name, self.entropy.as_mut())
    }

    /// Kill a process in any state; a killed current process stops being current
    pub fn kill_process(&mut self, pid: Pid) -> ProcessResult<()> {
        self.processes.kill(pid)?;
        self.scheduler.forget(pid);
        Ok(())
    }

    pub fn list_processes(&self) -> Vec<ProcessInfo> {
        self.processes.list()
    }

    pub fn process(&self, pid: Pid) -> Option<ProcessInfo> {
        self.processes.get(pid)
    }

    // ---------------------------------------------------------------------
    // Scheduler
    // ---------------------------------------------------------------------

    /// Advance the scheduler by one step
    pub fn tick(&mut self) -> TickReport {
        self.tick_count += 1;
        self.scheduler
            .tick(&mut self.processes, self.entropy.as_mut())
    }

    pub fn current_process(&self) -> Option<Pid> {
        self.scheduler.current()
    }

    pub fn scheduler_stats(&self) -> SchedulerStats {
        self.scheduler.stats()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    // ---------------------------------------------------------------------
    // Files
    // ---------------------------------------------------------------------

    pub fn create_file(&mut self, filename: &str) -> FsResult<()> {
        self.files.create(filename)
    }

    pub fn write_file(&mut self, filename: &str, data: &[u8]) -> FsResult<usize> {
        self.files.write(filename, data)
    }

    pub fn read_file(&self, filename: &str) -> FsResult<FileContents> {
        self.files.read(filename)
    }

    pub fn delete_file(&mut self, filename: &str) -> FsResult<()> {
        self.files.delete(filename)
    }

    pub fn list_files(&self) -> Vec<FileInfo> {
        self.files.list()
    }

    // ---------------------------------------------------------------------
    // Lifecycle
    // ---------------------------------------------------------------------

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Terminate every process and report what was left behind
    pub fn shutdown(&mut self) -> ShutdownReport {
        let terminated = self.processes.terminate_all();
        self.scheduler.reset();

        let report = ShutdownReport {
            terminated,
            files: self.files.len(),
            ticks: self.tick_count,
        };
        info!(
            terminated = report.terminated.len(),
            files = report.files,
            ticks = report.ticks,
            "Kernel shut down"
        );
        report
    }

    /// Full re-initialisation: empty tables, PIDs restart at 1
    pub fn reset(&mut self) {
        self.processes.reset();
        self.scheduler.reset();
        self.files.reset();
        self.tick_count = 0;
        info!("Kernel state reset");
    }
}

impl Default for Kernel {
    fn default() -> Self {
        Self::new()
    }
}
