//! Console process lifecycle: spawn, input, interrupt, output pumping.

mod io;
mod pump;
mod spawn;
mod types;

#[cfg(test)]
mod tests;

pub use pump::ConsolePump;
pub use types::{ConsoleProcess, ProcessExit, ProcessMessage, ProcessOptions};
