use std::path::{Path, PathBuf};

use thiserror::Error;

use super::Config;
use crate::log_warn;

/// Returns the config directory: `~/.config/overlap/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("overlap"))
}

/// Returns the config file path: `~/.config/overlap/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse the default `config.toml`.
///
/// Returns `Ok(Config)` on success, or an error string describing
/// what went wrong (IO error, parse error, etc.).
pub fn try_load() -> Result<Config, String> {
    let path = config_path().ok_or("could not determine config path")?;
    try_load_from(&path)
}

/// Tries to load and parse the config file at `path`.
pub fn try_load_from(path: &Path) -> Result<Config, String> {
    read(path).map_err(|e| format!("{}: {e}", path.display()))
}

/// Loads the default configuration file, falling back to defaults.
pub fn load() -> Config {
    match config_path() {
        Some(path) => load_from(&path),
        None => Config::default(),
    }
}

/// Loads the config file at `path`, falling back to defaults.
///
/// After loading, values are clamped to safe ranges via [`Config::validate`].
/// A missing file silently returns defaults; other errors are reported
/// on stderr and logged.
pub fn load_from(path: &Path) -> Config {
    match read(path) {
        Ok(config) => config,
        Err(ReadError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Config::default(),
        Err(e) => {
            let msg = format!("{}: {e}", path.display());
            eprintln!("Warning: {msg}");
            log_warn!("{msg}");
            Config::default()
        }
    }
}

#[derive(Debug, Error)]
enum ReadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Parse(#[from] toml::de::Error),
}

fn read(path: &Path) -> Result<Config, ReadError> {
    let content = std::fs::read_to_string(path)?;
    let mut config: Config = toml::from_str(&content)?;
    config.validate();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("overlap-{}-{name}", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        // Arrange
        let path = Path::new("/definitely/not/here/config.toml");

        // Act
        let config = load_from(path);

        // Assert
        assert_eq!(config, Config::default());
        assert!(try_load_from(path).is_err());
    }

    #[test]
    fn file_values_are_loaded_and_clamped() {
        // Arrange
        let path = temp_file("clamp.toml", "[input]\nmax_rects = 0\n");

        // Act
        let config = try_load_from(&path);
        let _ = std::fs::remove_file(&path);

        // Assert
        assert_eq!(config.unwrap().input.max_rects, 1);
    }

    #[test]
    fn invalid_toml_reports_the_path() {
        // Arrange
        let path = temp_file("broken.toml", "[input\nmax_rects = ");

        // Act
        let err = try_load_from(&path).unwrap_err();
        let fallback = load_from(&path);
        let _ = std::fs::remove_file(&path);

        // Assert
        assert!(err.contains("broken.toml"), "got {err}");
        assert_eq!(fallback, Config::default());
    }
}
