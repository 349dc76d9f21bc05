//! Console process configuration.

use serde::{Deserialize, Serialize};

/// How console commands are launched and buffered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Shell used to interpret commands. Invoked as `<shell> -c <command>`.
    pub shell: String,
    /// Output chunks buffered between the process and the UI thread
    /// (valid range: 1-4096).
    pub channel_capacity: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            shell: "/bin/sh".into(),
            channel_capacity: 256,
        }
    }
}
