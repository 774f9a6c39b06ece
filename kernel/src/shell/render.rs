/*!
 * Shell Rendering
 * Text layouts for listings, reads, ticks and lifecycle messages
 */

use crate::core::types::Timestamp;
use crate::kernel::ShutdownReport;
use crate::process::{DispatchOutcome, ProcessInfo, SchedulerStats, TickReport};
use crate::vfs::{FileContents, FileInfo};
use time::macros::format_description;
use time::OffsetDateTime;

pub const BANNER: &str = r"
  _____ _                 _       ___  _____
 /  ___(_)               | |     / _ \|  ___|
 \ `--. _ _ __ ___  _ __ | | ___/ /_\ \ `--.
  `--. \ | '_ ` _ \| '_ \| |/ _ \  _  |`--. \
 /\__/ / | | | | | | |_) | |  __/ | | /\__/ /
 \____/|_|_| |_| |_| .__/|_|\___|_| |_\____/
                   | |
                   |_|
";

pub const HELP: &str = "
Available commands:
  Process Management:
    create <name>     - Create a new process
    list              - List all processes
    kill <pid>        - Kill a process
    schedule          - Run scheduler tick
    stats             - Show scheduler statistics

  File System:
    touch <filename>  - Create a file
    write <file> <data> - Write to a file
    read <filename>   - Read a file
    ls                - List files
    rm <filename>     - Remove a file

  System:
    help              - Show this help
    clear             - Clear screen
    exit              - Shutdown kernel
";

/// ANSI clear-screen and cursor-home
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// `YYYY-MM-DD HH:MM` in UTC
///
/// Always UTC, never the host's local time.
pub fn timestamp(ts: Timestamp) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]");
    OffsetDateTime::from(ts)
        .format(format)
        .unwrap_or_else(|_| "-".to_string())
}

pub fn process_table(processes: &[ProcessInfo]) -> String {
    let mut out = String::from("PID   NAME                    STATE       PRIORITY  CPU_TIME\n");
    out.push_str(&"-".repeat(64));
    out.push('\n');

    if processes.is_empty() {
        out.push_str("No processes running.\n");
    }
    for p in processes {
        out.push_str(&format!(
            "{:<5} {:<23} {:<11} {:<9} {}\n",
            p.pid, p.name, p.state, p.priority, p.cpu_time
        ));
    }
    out
}

pub fn file_table(files: &[FileInfo]) -> String {
    let mut out =
        String::from("FILENAME                        SIZE    CREATED             MODIFIED\n");
    out.push_str(&"-".repeat(72));
    out.push('\n');

    if files.is_empty() {
        out.push_str("No files in file system.\n");
    }
    for f in files {
        out.push_str(&format!(
            "{:<31} {:<7} {:<19} {:<19}\n",
            f.filename,
            f.size,
            timestamp(f.created_at),
            timestamp(f.modified_at)
        ));
    }
    out
}

pub fn file_contents(filename: &str, contents: &FileContents) -> String {
    let body = if contents.is_empty() {
        "(empty file)".to_string()
    } else {
        contents.to_string_lossy()
    };
    format!("--- {} ({} bytes) ---\n{}\n---\n", filename, contents.size, body)
}

pub fn tick(report: &TickReport) -> String {
    match report {
        TickReport::Empty => "[SCHEDULER] No processes to schedule.\n".to_string(),
        TickReport::Dispatched(dispatch) => {
            let mut out = format!(
                "[SCHEDULER] Running PID {} ({}) - CPU Time: {}\n",
                dispatch.pid, dispatch.name, dispatch.cpu_time
            );
            match dispatch.outcome {
                DispatchOutcome::Waiting => out.push_str(&format!(
                    "[SCHEDULER] PID {} is now WAITING (I/O)\n",
                    dispatch.pid
                )),
                DispatchOutcome::Completed => out.push_str(&format!(
                    "[SCHEDULER] PID {} completed execution\n",
                    dispatch.pid
                )),
                DispatchOutcome::Running => {}
            }
            out
        }
        TickReport::Idle { woken } => {
            let mut out: String = woken
                .iter()
                .map(|pid| format!("[SCHEDULER] PID {} is now READY (I/O complete)\n", pid))
                .collect();
            out.push_str("[SCHEDULER] No READY processes, system idle.\n");
            out
        }
    }
}

pub fn stats(ticks: u64, stats: &SchedulerStats) -> String {
    format!(
        "Kernel ticks:      {}\n\
         Dispatches:        {}\n\
         Idle ticks:        {}\n\
         Empty ticks:       {}\n\
         Blocked on I/O:    {}\n\
         Woken from I/O:    {}\n\
         Completed:         {}\n",
        ticks,
        stats.dispatches,
        stats.idle_ticks,
        stats.empty_ticks,
        stats.blocked,
        stats.woken,
        stats.completed
    )
}

pub fn shutdown(report: &ShutdownReport) -> String {
    let mut out = String::from("[KERNEL] Cleaning up processes...\n");
    for p in &report.terminated {
        out.push_str(&format!("[PROCESS] Terminating PID {} ({})\n", p.pid, p.name));
    }
    out.push_str("[KERNEL] Unmounting file system...\n");
    out.push_str(&format!("[FILESYSTEM] {} files in system\n", report.files));
    out.push_str("[KERNEL] Shutdown complete. Goodbye!\n");
    out
}
