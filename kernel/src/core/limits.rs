/*!
 * System Limits and Constants
 *
 * Centralized location for all system-wide limits and magic numbers.
 * Every value here is the default; `KernelConfig` may override capacities
 * at boot.
 */

use super::types::{CpuTicks, Priority};

// =============================================================================
// PROCESS LIMITS
// =============================================================================

/// Process table capacity
pub const MAX_PROCESSES: usize = 10;

/// Process name buffer size (one byte reserved, so names keep 31 bytes)
pub const MAX_PROCESS_NAME: usize = 32;

/// First PID handed out after boot or reset
pub const FIRST_PID: u32 = 1;

/// Lowest priority a process can be assigned
pub const MIN_PRIORITY: Priority = 1;

/// Highest priority a process can be assigned
pub const MAX_PRIORITY: Priority = 5;

// =============================================================================
// SCHEDULER
// =============================================================================

/// A process whose CPU time exceeds this after a dispatch completes
pub const CPU_TIME_BUDGET: CpuTicks = 10;

/// One in `BLOCK_ODDS` dispatches ends in a simulated I/O wait
pub const BLOCK_ODDS: u32 = 3;

/// One in `WAKE_ODDS` waiting processes wakes on an idle tick
pub const WAKE_ODDS: u32 = 2;

// =============================================================================
// FILESYSTEM LIMITS
// =============================================================================

/// File table capacity
pub const MAX_FILES: usize = 20;

/// Filename buffer size (one byte reserved, so names keep 31 bytes)
pub const MAX_FILENAME: usize = 32;

/// File data buffer size; a write must be strictly smaller than this
pub const MAX_FILE_SIZE: usize = 1024;

/// Smallest file buffer a config may ask for (one usable byte)
pub const MIN_FILE_SIZE: usize = 2;
