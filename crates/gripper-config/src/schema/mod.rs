//! Configuration schema types for gripper.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod console;
mod drag;
mod handle;
mod system;

pub use console::*;
pub use drag::*;
pub use handle::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for gripper.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GripperConfig {
    pub handle: HandleConfig,
    pub drag: DragConfig,
    pub console: ConsoleConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_all_defaults() {
        let config: GripperConfig = toml::from_str("").unwrap();
        assert_eq!(config, GripperConfig::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: GripperConfig = toml::from_str(
            r#"
[drag]
min_width = 50
"#,
        )
        .unwrap();
        assert_eq!(config.drag.min_width, 50);
        assert_eq!(config.drag.max_width, DragConfig::default().max_width);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn log_level_parses_uppercase() {
        let config: GripperConfig = toml::from_str(
            r#"
[logging]
level = "DEBUG"
"#,
        )
        .unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.level.as_directive(), "debug");
    }
}
