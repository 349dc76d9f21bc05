//! Delivers console process output onto the event bus.
//!
//! The process tasks run on tokio; the bus is single-threaded. The pump is
//! the hand-off point: it owns the receiving end of the channel and is
//! drained from the thread that owns the bus.

use gripper_common::{ConsoleError, EventBus, ProcessHandle};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tracing::{debug, info, warn};

use super::types::{ProcessExit, ProcessMessage};

pub struct ConsolePump {
    handle: ProcessHandle,
    rx: mpsc::Receiver<ProcessMessage>,
    exit: Option<ProcessExit>,
    input_error: Option<String>,
}

impl ConsolePump {
    pub(super) fn new(handle: ProcessHandle, rx: mpsc::Receiver<ProcessMessage>) -> Self {
        Self {
            handle,
            rx,
            exit: None,
            input_error: None,
        }
    }

    pub fn handle(&self) -> &ProcessHandle {
        &self.handle
    }

    /// The exit status, once the pump has seen it.
    pub fn exit(&self) -> Option<ProcessExit> {
        self.exit
    }

    /// Why writing to stdin failed, once the pump has seen it.
    ///
    /// The process keeps running; only its input is cut off.
    pub fn input_error(&self) -> Option<&str> {
        self.input_error.as_deref()
    }

    /// Dispatch all output received so far without waiting.
    ///
    /// Returns the number of output events dispatched.
    pub fn drain(&mut self, bus: &EventBus) -> usize {
        let mut count = 0;
        loop {
            match self.rx.try_recv() {
                Ok(msg) => {
                    if self.deliver(bus, msg) {
                        count += 1;
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        count
    }

    /// Dispatch output until the process exits.
    pub async fn run_to_exit(&mut self, bus: &EventBus) -> Result<ProcessExit, ConsoleError> {
        if let Some(exit) = self.exit {
            return Ok(exit);
        }
        while let Some(msg) = self.rx.recv().await {
            self.deliver(bus, msg);
            if let Some(exit) = self.exit {
                return Ok(exit);
            }
        }
        Err(ConsoleError::Lost(self.handle.to_string()))
    }

    /// Returns true if `msg` was output.
    fn deliver(&mut self, bus: &EventBus, msg: ProcessMessage) -> bool {
        match msg {
            ProcessMessage::Output(event) => {
                let report = bus.dispatch(&event);
                if !report.is_clean() {
                    warn!(
                        handle = %self.handle,
                        failures = report.failures.len(),
                        "console output handlers failed"
                    );
                }
                debug!(handle = %self.handle, bytes = event.output().len(), "console output dispatched");
                true
            }
            ProcessMessage::InputFailed(reason) => {
                warn!(handle = %self.handle, "console input failed: {reason}");
                self.input_error = Some(reason);
                false
            }
            ProcessMessage::Exited(exit) => {
                info!(handle = %self.handle, code = ?exit.code, interrupted = exit.interrupted, "console process exited");
                self.exit = Some(exit);
                false
            }
        }
    }
}

impl std::fmt::Debug for ConsolePump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsolePump")
            .field("handle", &self.handle)
            .field("exit", &self.exit)
            .field("input_error", &self.input_error)
            .finish_non_exhaustive()
    }
}
