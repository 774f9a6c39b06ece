/*!
 * Kernel Configuration
 *
 * Table capacities, the CPU budget and the decision-source seed. Defaults
 * come from `core::limits`; the environment can override them at boot.
 */

use super::errors::ConfigError;
use super::limits::*;
use super::types::CpuTicks;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Path to a JSON config file
pub const ENV_CONFIG: &str = "KERNEL_CONFIG";
pub const ENV_MAX_PROCESSES: &str = "KERNEL_MAX_PROCESSES";
pub const ENV_MAX_FILES: &str = "KERNEL_MAX_FILES";
pub const ENV_MAX_FILE_SIZE: &str = "KERNEL_MAX_FILE_SIZE";
pub const ENV_CPU_BUDGET: &str = "KERNEL_CPU_BUDGET";
/// Seed for the random decision source
pub const ENV_SEED: &str = "KERNEL_SEED";

/// Boot-time kernel configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct KernelConfig {
    /// Process table capacity
    pub max_processes: usize,
    /// File table capacity
    pub max_files: usize,
    /// File buffer size in bytes; writes must be strictly smaller
    pub max_file_size: usize,
    /// CPU ticks a process may exceed before it completes
    pub cpu_time_budget: CpuTicks,
    /// Fixed seed for reproducible runs; entropy from the OS when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            max_processes: MAX_PROCESSES,
            max_files: MAX_FILES,
            max_file_size: MAX_FILE_SIZE,
            cpu_time_budget: CPU_TIME_BUDGET,
            seed: None,
        }
    }
}

impl KernelConfig {
    /// Load configuration from the environment
    ///
    /// Environment variables:
    /// - KERNEL_CONFIG: JSON file used as the base (default: built-in limits)
    /// - KERNEL_MAX_PROCESSES, KERNEL_MAX_FILES, KERNEL_MAX_FILE_SIZE,
    ///   KERNEL_CPU_BUDGET, KERNEL_SEED: per-field overrides
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(ENV_CONFIG) {
            Ok(path) => Self::parse_json(&read_file(Path::new(&path))?)?,
            Err(_) => Self::default(),
        };

        if let Some(value) = env_override(ENV_MAX_PROCESSES)? {
            config.max_processes = value;
        }
        if let Some(value) = env_override(ENV_MAX_FILES)? {
            config.max_files = value;
        }
        if let Some(value) = env_override(ENV_MAX_FILE_SIZE)? {
            config.max_file_size = value;
        }
        if let Some(value) = env_override(ENV_CPU_BUDGET)? {
            config.cpu_time_budget = value;
        }
        if let Some(value) = env_override(ENV_SEED)? {
            config.seed = Some(value);
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON config file; missing fields take their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json(&read_file(path.as_ref())?)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config = Self::parse_json(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse without validating; `from_env` validates once overrides are in
    fn parse_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_processes == 0 {
            return Err(ConfigError::Invalid("max_processes must be at least 1".into()));
        }
        if self.max_files == 0 {
            return Err(ConfigError::Invalid("max_files must be at least 1".into()));
        }
        if self.max_file_size < MIN_FILE_SIZE {
            return Err(ConfigError::Invalid(format!(
                "max_file_size must be at least {}",
                MIN_FILE_SIZE
            )));
        }
        Ok(())
    }
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn env_override<T: FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value,
            }),
        Err(_) => Ok(None),
    }
}
