/*!
 * Core Types
 * Common types used across the kernel
 */

use std::time::SystemTime;

/// Process ID type
pub type Pid = u32;

/// Priority level (1-5, assigned at creation)
pub type Priority = u8;

/// Simulated CPU time, counted in scheduler ticks
pub type CpuTicks = u32;

/// Wall-clock timestamp recorded on table entries
pub type Timestamp = SystemTime;
