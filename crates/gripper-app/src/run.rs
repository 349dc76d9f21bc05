//! `gripper run`: stream a console command's output through the event bus.

use std::io::Write;
use std::path::PathBuf;

use gripper_common::{
    ConsoleOutputEvent, ConsoleOutputHandler, EventBus, GripperError, HandlerError,
};
use gripper_config::GripperConfig;
use gripper_console::{ConsoleProcess, ProcessExit, ProcessOptions};
use tracing::{info, warn};

/// Exit code reported when the command was interrupted from the terminal.
const INTERRUPTED_EXIT_CODE: i32 = 130;

// =============================================================================
// PRINTERS
// =============================================================================

/// Writes console output of one stream kind to `W`.
pub struct StreamPrinter<W> {
    errors: bool,
    out: std::cell::RefCell<W>,
}

impl<W: Write> StreamPrinter<W> {
    /// Prints stdout chunks only.
    pub fn stdout(out: W) -> Self {
        Self {
            errors: false,
            out: std::cell::RefCell::new(out),
        }
    }

    /// Prints stderr chunks only.
    pub fn stderr(out: W) -> Self {
        Self {
            errors: true,
            out: std::cell::RefCell::new(out),
        }
    }
}

impl<W: Write> ConsoleOutputHandler for StreamPrinter<W> {
    fn on_console_output(&self, event: &ConsoleOutputEvent) -> Result<(), HandlerError> {
        if event.is_error() != self.errors {
            return Ok(());
        }
        let mut out = self.out.borrow_mut();
        out.write_all(event.output().as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| HandlerError::new(format!("failed to write console output: {e}")))
    }
}

// =============================================================================
// RUN
// =============================================================================

pub struct RunRequest {
    pub command: String,
    pub directory: Option<PathBuf>,
    pub input: Option<String>,
}

/// Run the command to completion, dispatching its output on `bus`.
///
/// Ctrl-C interrupts the command; its exit is still awaited.
pub async fn run_command(
    request: RunRequest,
    config: &GripperConfig,
    bus: &EventBus,
) -> Result<ProcessExit, GripperError> {
    let mut options = ProcessOptions::from_config(&config.console);
    if let Some(dir) = request.directory {
        options = options.working_dir(dir);
    }

    let mut process = ConsoleProcess::new(request.command, options);
    if let Some(input) = &request.input {
        process.enqueue_input(input)?;
    }
    let mut pump = process.start().await?;
    process.close_input();

    let mut interrupted = false;
    let exit = loop {
        tokio::select! {
            exit = pump.run_to_exit(bus) => break exit?,
            signal = tokio::signal::ctrl_c(), if !interrupted => {
                if let Err(e) = signal {
                    warn!("failed to listen for ctrl-c: {e}");
                }
                info!(handle = %process.handle(), "interrupt requested");
                process.interrupt()?;
                interrupted = true;
            }
        }
    };
    Ok(exit)
}

/// Process exit code for a finished command.
pub fn exit_code(exit: &ProcessExit) -> i32 {
    match exit.code {
        Some(code) => code,
        None if exit.interrupted => INTERRUPTED_EXIT_CODE,
        None => 1,
    }
}

// =============================================================================
// TESTS
// =============================================================================
