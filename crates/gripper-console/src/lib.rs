//! Console processes that publish their output as
//! [`ConsoleOutputEvent`](gripper_common::ConsoleOutputEvent)s.
//!
//! Process I/O runs on tokio tasks. Output reaches the UI thread through a
//! bounded channel and is dispatched on the caller's
//! [`EventBus`](gripper_common::EventBus) by a [`ConsolePump`].

pub mod process;

pub use process::{ConsoleProcess, ConsolePump, ProcessExit, ProcessMessage, ProcessOptions};
