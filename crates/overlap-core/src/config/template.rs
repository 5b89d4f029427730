/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `overlap init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# overlap configuration
# Location: ~/.config/overlap/config.toml

[input]
# Rectangles past this count are ignored when a document is loaded.
max_rects = 1000

[output]
# How `overlap solve` prints results: "text" or "json".
format = "text"

[logging]
# Enable file logging to ~/.config/overlap/logs/overlap.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}
