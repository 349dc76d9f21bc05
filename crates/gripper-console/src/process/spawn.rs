//! Process spawn and termination.

use std::process::Stdio;

use gripper_common::ConsoleError;
use tokio::process::Command;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use super::io::{forward_input, forward_stream};
use super::pump::ConsolePump;
use super::types::{ConsoleProcess, ProcessExit, ProcessMessage};

// =============================================================================
// COMMAND
// =============================================================================

fn build_command(process: &ConsoleProcess) -> Command {
    let mut cmd = Command::new(&process.options.shell);
    cmd.arg("-c")
        .arg(&process.command)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    if let Some(dir) = &process.options.working_dir {
        cmd.current_dir(dir);
    }
    cmd
}

// =============================================================================
// START / INTERRUPT
// =============================================================================

impl ConsoleProcess {
    /// Spawn the process and return the pump that delivers its output.
    ///
    /// Must be called from within a tokio runtime. Input queued with
    /// [`enqueue_input`](Self::enqueue_input) before starting is handed to
    /// the stdin writer task; `start` itself never waits on the pipe, so
    /// once the child is spawned the pump is always returned.
    pub async fn start(&mut self) -> Result<ConsolePump, ConsoleError> {
        if self.started {
            return Err(ConsoleError::AlreadyStarted(self.handle.to_string()));
        }

        let mut child = build_command(self)
            .spawn()
            .map_err(|source| ConsoleError::Spawn {
                command: self.command.clone(),
                source,
            })?;
        self.started = true;
        info!(handle = %self.handle, command = %self.command, pid = ?child.id(), "console process started");

        let (tx, rx) = mpsc::channel(self.options.channel_capacity);
        let (interrupt_tx, interrupt_rx) = oneshot::channel();
        self.interrupt_tx = Some(interrupt_tx);

        let (input_tx, input_rx) = mpsc::unbounded_channel();
        if !self.input_queue.is_empty() {
            let _ = input_tx.send(std::mem::take(&mut self.input_queue));
        }
        if let Some(stdin) = child.stdin.take() {
            tokio::spawn(forward_input(stdin, input_rx, tx.clone(), self.handle.clone()));
            self.input_tx = Some(input_tx);
        }

        let stdout_task = child
            .stdout
            .take()
            .map(|out| tokio::spawn(forward_stream(out, false, tx.clone())));
        let stderr_task = child
            .stderr
            .take()
            .map(|err| tokio::spawn(forward_stream(err, true, tx.clone())));

        let handle = self.handle.clone();
        tokio::spawn(async move {
            let mut interrupted = false;
            let status = tokio::select! {
                status = child.wait() => status,
                _ = interrupt_rx => {
                    interrupted = true;
                    if let Err(e) = child.start_kill() {
                        debug!(%handle, "kill failed: {e}");
                    }
                    child.wait().await
                }
            };

            // Output must reach the pump before the exit notice.
            for task in [stdout_task, stderr_task].into_iter().flatten() {
                let _ = task.await;
            }

            let exit = match status {
                Ok(status) => ProcessExit {
                    code: status.code(),
                    interrupted,
                },
                Err(e) => {
                    warn!(%handle, "failed to wait for console process: {e}");
                    ProcessExit {
                        code: None,
                        interrupted,
                    }
                }
            };
            let _ = tx.send(ProcessMessage::Exited(exit)).await;
        });

        Ok(ConsolePump::new(self.handle.clone(), rx))
    }

    /// Ask the running process to stop.
    ///
    /// The exit is still reported through the pump, with
    /// [`ProcessExit::interrupted`] set.
    pub fn interrupt(&mut self) -> Result<(), ConsoleError> {
        if !self.started {
            return Err(ConsoleError::NotStarted(self.handle.to_string()));
        }
        if let Some(tx) = self.interrupt_tx.take() {
            info!(handle = %self.handle, "interrupting console process");
            let _ = tx.send(());
        }
        Ok(())
    }
}
