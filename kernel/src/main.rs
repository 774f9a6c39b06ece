/*!
 * SimpleOS - Main Entry Point
 *
 * Boots a kernel from the environment and runs the interactive shell on
 * stdin until `exit`, end of input or Ctrl-C.
 */

use simpleos_kernel::shell::render;
use simpleos_kernel::{init_tracing, Kernel, KernelConfig, KernelError, Shell};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

const PROMPT: &str = "SimpleOS> ";

#[tokio::main]
async fn main() -> miette::Result<()> {
    init_tracing();

    let config = KernelConfig::from_env()?;
    let kernel = Kernel::boot(config)?;

    let mut stdout = io::stdout();
    let mut boot = String::new();
    boot.push_str(render::BANNER);
    boot.push_str(&format!(
        "[KERNEL] Booting SimpleOS v{}...\n",
        env!("CARGO_PKG_VERSION")
    ));
    boot.push_str(&format!(
        "[KERNEL] Initializing process table ({} slots)...\n",
        kernel.config().max_processes
    ));
    boot.push_str(&format!(
        "[KERNEL] Initializing file system ({} files, {} bytes each)...\n",
        kernel.config().max_files,
        kernel.config().max_file_size
    ));
    boot.push_str("[KERNEL] Boot complete!\n");
    boot.push_str(render::HELP);
    write_out(&mut stdout, &boot).await?;

    let mut shell = Shell::new(kernel);
    let mut lines = BufReader::new(io::stdin()).lines();

    loop {
        write_out(&mut stdout, PROMPT).await?;

        let line = tokio::select! {
            line = lines.next_line() => line,
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, shutting down");
                write_out(&mut stdout, "\n").await?;
                break;
            }
        };

        let line = match line {
            Ok(Some(line)) => line,
            Ok(None) => {
                write_out(&mut stdout, "\n").await?;
                break;
            }
            Err(err) => {
                warn!(error = %err, "Failed to read from stdin");
                break;
            }
        };

        let reply = shell.execute(&line);
        write_out(&mut stdout, &reply.text).await?;
        if reply.exit {
            break;
        }
    }

    let mut kernel = shell.into_kernel();
    let mut report = String::from("[KERNEL] Shutting down...\n");
    report.push_str(&render::shutdown(&kernel.shutdown()));
    write_out(&mut stdout, &report).await?;

    Ok(())
}

async fn write_out(stdout: &mut io::Stdout, text: &str) -> Result<(), KernelError> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}
