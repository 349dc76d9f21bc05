use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// gripper: drive a resize handle from recorded pointer input, or run a
/// console command through the event bus.
#[derive(Parser, Debug)]
#[command(name = "gripper", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a JSON pointer-event script against a resizable panel.
    Replay {
        /// Path to a JSON array of steps, e.g. `[{"type":"down","x":0,"y":0}]`.
        script: PathBuf,

        /// Print the outcome as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Run a shell command, streaming its output through the event bus.
    Run {
        /// Command line passed to the configured shell.
        command: String,

        /// Working directory to start in.
        #[arg(short = 'd', long)]
        directory: Option<PathBuf>,

        /// Text written to the command's stdin before it is closed.
        #[arg(short = 'i', long)]
        input: Option<String>,
    },
}

pub fn parse() -> Args {
    Args::parse()
}
