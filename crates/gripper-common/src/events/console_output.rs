use serde::{Deserialize, Serialize};

use super::bus::{BusEvent, EventBus};
use super::registry::HandlerRegistration;
use crate::errors::HandlerError;

/// A chunk of text written by a console process.
///
/// `error` distinguishes the error stream from standard output. The payload
/// is not validated and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleOutputEvent {
    output: String,
    error: bool,
}

impl ConsoleOutputEvent {
    pub fn new(output: impl Into<String>, error: bool) -> Self {
        Self {
            output: output.into(),
            error,
        }
    }

    pub fn stdout(output: impl Into<String>) -> Self {
        Self::new(output, false)
    }

    pub fn stderr(output: impl Into<String>) -> Self {
        Self::new(output, true)
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn is_error(&self) -> bool {
        self.error
    }
}

impl BusEvent for ConsoleOutputEvent {
    const NAME: &'static str = "console_output";
}

/// Receives console output published on an [`EventBus`].
pub trait ConsoleOutputHandler {
    fn on_console_output(&self, event: &ConsoleOutputEvent) -> Result<(), HandlerError>;
}

impl EventBus {
    /// Subscribe a [`ConsoleOutputHandler`] to console output.
    pub fn add_console_output_handler<H>(&self, handler: H) -> HandlerRegistration
    where
        H: ConsoleOutputHandler + 'static,
    {
        self.subscribe(move |event: &ConsoleOutputEvent| handler.on_console_output(event))
    }
}
