//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# gripper configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[handle]
# width = 12             # 1-256, defaults to the bundled image
# height = 12            # 1-256, defaults to the bundled image

[drag]
# initial_width = 400
# initial_height = 300
# min_width = 100
# min_height = 60
# max_width = 4096
# max_height = 4096

[console]
# shell = "/bin/sh"
# channel_capacity = 256 # 1-4096

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
