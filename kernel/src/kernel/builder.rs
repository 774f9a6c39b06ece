/*!
 * Kernel Builder
 * Builder pattern for Kernel construction
 */

use super::Kernel;
use crate::core::config::KernelConfig;
use crate::core::errors::ConfigError;
use crate::process::{Entropy, ProcessRegistry, RandomEntropy, Scheduler};
use crate::vfs::FileStore;
use tracing::info;

/// Builder for Kernel
pub struct KernelBuilder {
    config: KernelConfig,
    entropy: Option<Box<dyn Entropy>>,
}

impl KernelBuilder {
    /// Create a new Kernel builder with default limits
    pub fn new() -> Self {
        Self {
            config: KernelConfig::default(),
            entropy: None,
        }
    }

    pub fn with_config(mut self, config: KernelConfig) -> Self {
        self.config = config;
        self
    }

    /// Use `entropy` for priorities and simulated I/O instead of a random source
    pub fn with_entropy(mut self, entropy: impl Entropy + 'static) -> Self {
        self.entropy = Some(Box::new(entropy));
        self
    }

    /// Build the Kernel
    pub fn build(self) -> Result<Kernel, ConfigError> {
        self.config.validate()?;

        let seeded = self.config.seed.is_some();
        let entropy = match self.entropy {
            Some(entropy) => entropy,
            None => Box::new(RandomEntropy::from_seed(self.config.seed)),
        };

        info!(
            max_processes = self.config.max_processes,
            max_files = self.config.max_files,
            max_file_size = self.config.max_file_size,
            cpu_time_budget = self.config.cpu_time_budget,
            seeded,
            "Kernel initialized"
        );

        Ok(Kernel {
            processes: ProcessRegistry::with_capacity(self.config.max_processes),
            scheduler: Scheduler::with_budget(self.config.cpu_time_budget),
            files: FileStore::with_limits(self.config.max_files, self.config.max_file_size),
            entropy,
            tick_count: 0,
            config: self.config,
        })
    }
}

impl Default for KernelBuilder {
    fn default() -> Self {
        Self::new()
    }
}
