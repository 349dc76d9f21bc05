//! Console process types: launch options, the process handle, and the
//! messages it sends back to the UI thread.

use std::path::PathBuf;

use gripper_common::{ConsoleOutputEvent, ProcessHandle};
use gripper_config::schema::ConsoleConfig;
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// CONSTANTS
// =============================================================================

/// Maximum bytes read from a process stream in one chunk (8 KB).
pub(crate) const READ_CHUNK: usize = 8_192;

// =============================================================================
// OPTIONS
// =============================================================================

/// How a console process is launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Shell that interprets the command line (`<shell> -c <command>`).
    pub shell: String,
    pub working_dir: Option<PathBuf>,
    /// Messages buffered between the process tasks and the pump.
    pub channel_capacity: usize,
}

impl ProcessOptions {
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self {
            shell: config.shell.clone(),
            working_dir: None,
            channel_capacity: config.channel_capacity.max(1) as usize,
        }
    }

    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self::from_config(&ConsoleConfig::default())
    }
}

// =============================================================================
// MESSAGES
// =============================================================================

/// How a console process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    /// Exit code, or `None` if the process was terminated by a signal.
    pub code: Option<i32>,
    /// Whether the process was stopped through [`ConsoleProcess::interrupt`].
    pub interrupted: bool,
}

impl ProcessExit {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Sent from the process tasks to the [`ConsolePump`](super::ConsolePump).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessMessage {
    Output(ConsoleOutputEvent),
    /// Writing to stdin failed; later input is discarded.
    InputFailed(String),
    Exited(ProcessExit),
}

// =============================================================================
// PROCESS
// =============================================================================

/// A shell command whose output is published as console output events.
///
/// Dropping a started `ConsoleProcess` kills the child.
pub struct ConsoleProcess {
    pub(super) command: String,
    pub(super) options: ProcessOptions,
    pub(super) handle: ProcessHandle,
    pub(super) started: bool,
    /// Feeds the stdin writer task; `None` before start and after close.
    pub(super) input_tx: Option<mpsc::UnboundedSender<String>>,
    /// Input written before the process was running.
    pub(super) input_queue: String,
    pub(super) interrupt_tx: Option<oneshot::Sender<()>>,
}

impl ConsoleProcess {
    pub fn new(command: impl Into<String>, options: ProcessOptions) -> Self {
        Self {
            command: command.into(),
            options,
            handle: ProcessHandle::new(),
            started: false,
            input_tx: None,
            input_queue: String::new(),
            interrupt_tx: None,
        }
    }

    /// The id clients use to refer to this process.
    pub fn handle(&self) -> &ProcessHandle {
        &self.handle
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Input waiting to be written once the process is running.
    pub fn pending_input(&self) -> &str {
        &self.input_queue
    }
}

impl std::fmt::Debug for ConsoleProcess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleProcess")
            .field("handle", &self.handle)
            .field("command", &self.command)
            .field("started", &self.started)
            .finish_non_exhaustive()
    }
}
