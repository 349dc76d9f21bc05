//! Config validation.
//!
//! Section checks append to one shared problem list so a single
//! `ValidationError` reports everything wrong with a file.

mod helpers;
mod sections;


use crate::schema::GripperConfig;
use gripper_common::ConfigError;
use tracing::debug;

type SectionCheck = fn(&mut Vec<String>, &GripperConfig);

const SECTION_CHECKS: [(&str, SectionCheck); 3] = [
    ("handle", sections::validate_handle),
    ("drag", sections::validate_drag),
    ("console", sections::validate_console),
];

/// Check every section, failing with all problems joined by `"; "`.
pub fn validate(config: &GripperConfig) -> Result<(), ConfigError> {
    let mut problems = Vec::new();
    for (section, check) in SECTION_CHECKS {
        let before = problems.len();
        check(&mut problems, config);
        if problems.len() > before {
            debug!(section, count = problems.len() - before, "config section rejected");
        }
    }

    match problems.as_slice() {
        [] => Ok(()),
        _ => Err(ConfigError::ValidationError(problems.join("; "))),
    }
}
