/*!
 * Shell
 *
 * Thin command dispatcher over [`Kernel`]: parses a line, calls exactly one
 * kernel operation and renders the result as text. Holds no state of its own
 * beyond the kernel it drives.
 */

mod command;
pub mod render;

pub use command::{Command, ParseError};

use crate::core::errors::KernelError;
use crate::kernel::Kernel;
use tracing::debug;

/// Text produced by one command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// The command asked the kernel to shut down
    pub exit: bool,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: false,
        }
    }

    fn line(text: impl std::fmt::Display) -> Self {
        Self::text(format!("{}\n", text))
    }
}

/// Interactive front end for a kernel
pub struct Shell {
    kernel: Kernel,
}

impl Shell {
    pub fn new(kernel: Kernel) -> Self {
        Self { kernel }
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    pub fn into_kernel(self) -> Kernel {
        self.kernel
    }

    /// Parse and run one input line
    pub fn execute(&mut self, line: &str) -> Reply {
        match Command::parse(line) {
            Ok(Some(command)) => {
                debug!(?command, "Dispatching shell command");
                self.dispatch(command)
            }
            Ok(None) => Reply::default(),
            Err(err) => Reply::line(err),
        }
    }

    /// Run an already parsed command
    pub fn dispatch(&mut self, command: Command) -> Reply {
        let kernel = &mut self.kernel;

        match command {
            Command::Help => Reply::text(render::HELP),
            Command::Clear => Reply::text(format!("{}{}", render::CLEAR_SCREEN, render::BANNER)),
            Command::Exit => Reply {
                text: String::new(),
                exit: true,
            },

            Command::Create(name) => match kernel.create_process(&name) {
                Ok(pid) => {
                    let (name, priority) = kernel
                        .process(pid)
                        .map_or((name, 0), |p| (p.name, p.priority));
                    Reply::line(format!(
                        "[PROCESS] Created process PID {}: {} (Priority: {})",
                        pid, name, priority
                    ))
                }
                Err(err) => process_error(err.into()),
            },
            Command::List => Reply::text(render::process_table(&kernel.list_processes())),
            Command::Kill(pid) => {
                let name = kernel.process(pid).map(|p| p.name);
                match kernel.kill_process(pid) {
                    Ok(()) => Reply::line(format!(
                        "[PROCESS] Killing process PID {} ({})",
                        pid,
                        name.unwrap_or_default()
                    )),
                    Err(err) => process_error(err.into()),
                }
            }
            Command::Schedule => Reply::text(render::tick(&kernel.tick())),
            Command::Stats => Reply::text(render::stats(
                kernel.tick_count(),
                &kernel.scheduler_stats(),
            )),

            Command::Touch(filename) => match kernel.create_file(&filename) {
                Ok(()) => Reply::line(format!("[FILESYSTEM] Created file: {}", filename)),
                Err(err) => fs_error(err.into()),
            },
            Command::Write { filename, data } => {
                match kernel.write_file(&filename, data.as_bytes()) {
                    Ok(bytes) => Reply::line(format!(
                        "[FILESYSTEM] Wrote {} bytes to {}",
                        bytes, filename
                    )),
                    Err(err) => fs_error(err.into()),
                }
            }
            Command::Read(filename) => match kernel.read_file(&filename) {
                Ok(contents) => Reply::text(render::file_contents(&filename, &contents)),
                Err(err) => fs_error(err.into()),
            },
            Command::Ls => Reply::text(render::file_table(&kernel.list_files())),
            Command::Rm(filename) => match kernel.delete_file(&filename) {
                Ok(()) => Reply::line(format!("[FILESYSTEM] Deleting file: {}", filename)),
                Err(err) => fs_error(err.into()),
            },
        }
    }
}

fn process_error(err: KernelError) -> Reply {
    Reply::line(format!("[PROCESS] Error: {}", err))
}

fn fs_error(err: KernelError) -> Reply {
    Reply::line(format!("[FILESYSTEM] Error: {}", err))
}
