//! Per-section validation: handle, drag and console.

use crate::schema::GripperConfig;

use super::helpers::{validate_ordered, validate_range};

/// Validate handle size overrides.
pub(crate) fn validate_handle(errors: &mut Vec<String>, config: &GripperConfig) {
    if let Some(width) = config.handle.width {
        validate_range(errors, "handle.width", width, 1, 256);
    }
    if let Some(height) = config.handle.height {
        validate_range(errors, "handle.height", height, 1, 256);
    }
}

/// Validate panel bounds: min <= initial <= max on both axes.
pub(crate) fn validate_drag(errors: &mut Vec<String>, config: &GripperConfig) {
    let drag = &config.drag;
    validate_ordered(
        errors,
        "drag.min_width",
        drag.min_width,
        "drag.max_width",
        drag.max_width,
    );
    validate_ordered(
        errors,
        "drag.min_height",
        drag.min_height,
        "drag.max_height",
        drag.max_height,
    );
    validate_range(
        errors,
        "drag.initial_width",
        drag.initial_width,
        drag.min_width,
        drag.max_width,
    );
    validate_range(
        errors,
        "drag.initial_height",
        drag.initial_height,
        drag.min_height,
        drag.max_height,
    );
}

/// Validate console launch settings.
pub(crate) fn validate_console(errors: &mut Vec<String>, config: &GripperConfig) {
    if config.console.shell.trim().is_empty() {
        errors.push("console.shell must not be empty".into());
    }
    validate_range(
        errors,
        "console.channel_capacity",
        config.console.channel_capacity,
        1,
        4096,
    );
}
