//! Configuration loading and discovery for `pixelbrawl.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::PixelbrawlConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for during discovery
pub const CONFIG_FILE_NAME: &str = "pixelbrawl.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse pixelbrawl.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override output directory
    pub dir: Option<PathBuf>,
    /// Override scale factor
    pub scale: Option<u32>,
    /// Override strip wrap width
    pub columns: Option<u32>,
    /// Force GIF previews on
    pub gif: Option<bool>,
    /// Override JSON manifests
    pub json: Option<bool>,
}

/// Find pixelbrawl.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for pixelbrawl.toml
/// 2. Check XDG_CONFIG_HOME/pixelbrawl/pixelbrawl.toml (or
///    ~/.config/pixelbrawl/pixelbrawl.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find pixelbrawl.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("pixelbrawl").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find pixelbrawl.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a pixelbrawl.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses
/// [`find_config`] to locate one. If no config file is found, returns the
/// default configuration.
pub fn load_config(path: Option<&Path>) -> Result<PixelbrawlConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            log::debug!("loading config from {}", p.display());
            load_config_file(&p)
        }
        None => Ok(PixelbrawlConfig::default()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<PixelbrawlConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: PixelbrawlConfig = toml::from_str(&contents)?;
    check(config)
}

fn check(config: PixelbrawlConfig) -> Result<PixelbrawlConfig, ConfigError> {
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(
            errors.into_iter().map(|e| e.to_string()).collect(),
        ));
    }
    Ok(config)
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut PixelbrawlConfig, overrides: &CliOverrides) {
    if let Some(ref dir) = overrides.dir {
        config.output.dir = dir.clone();
    }
    if let Some(scale) = overrides.scale {
        config.output.scale = scale;
    }
    if let Some(columns) = overrides.columns {
        config.output.columns = Some(columns);
    }
    if let Some(gif) = overrides.gif {
        config.output.gif = gif;
    }
    if let Some(json) = overrides.json {
        config.output.json = json;
    }
}

/// Load, apply overrides, then validate the merged result.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<PixelbrawlConfig, ConfigError> {
    let mut config = load_config(path)?;
    merge_cli_overrides(&mut config, overrides);
    check(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &Path, body: &[u8]) -> PathBuf {
        let config_path = dir.join(CONFIG_FILE_NAME);
        File::create(&config_path)
            .expect("should create config file")
            .write_all(body)
            .expect("should write config content");
        config_path
    }

    #[test]
    fn test_find_config_in_current_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), b"[output]\nscale = 2\n");

        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), b"");

        let subdir = temp.path().join("game").join("assets");
        fs::create_dir_all(&subdir).expect("should create subdirectories");

        let found = find_config_from(subdir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_not_found() {
        let temp = TempDir::new().expect("should create temp dir");
        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, None);
    }

    #[test]
    #[serial]
    fn test_find_xdg_config() {
        let temp = TempDir::new().expect("should create temp dir");
        let app_dir = temp.path().join("pixelbrawl");
        fs::create_dir_all(&app_dir).expect("should create xdg dir");
        let config_path = write_config(&app_dir, b"");

        let previous = env::var_os("XDG_CONFIG_HOME");
        env::set_var("XDG_CONFIG_HOME", temp.path());
        let found = find_xdg_config();
        match previous {
            Some(value) => env::set_var("XDG_CONFIG_HOME", value),
            None => env::remove_var("XDG_CONFIG_HOME"),
        }

        assert_eq!(found, Some(config_path));
    }

    #[test]
    #[serial]
    fn test_find_xdg_config_missing() {
        let temp = TempDir::new().expect("should create temp dir");

        let previous = env::var_os("XDG_CONFIG_HOME");
        env::set_var("XDG_CONFIG_HOME", temp.path());
        let found = find_xdg_config();
        match previous {
            Some(value) => env::set_var("XDG_CONFIG_HOME", value),
            None => env::remove_var("XDG_CONFIG_HOME"),
        }

        assert_eq!(found, None);
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(
            temp.path(),
            br#"
[output]
dir = "out"
scale = 3
gif = true
"#,
        );

        let config = load_config(Some(&config_path)).expect("should load valid config");
        assert_eq!(config.output.dir, PathBuf::from("out"));
        assert_eq!(config.output.scale, 3);
        assert!(config.output.gif);
        assert!(config.output.json);
    }

    #[test]
    fn test_load_config_missing_file_errors() {
        let temp = TempDir::new().expect("should create temp dir");
        let result = load_config(Some(&temp.path().join("nonexistent.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), b"this is not valid toml {{{");

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_validation_error() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), b"[output]\nscale = 40\ncolumns = 0\n");

        match load_config(Some(&config_path)) {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 2);
                let message = ConfigError::Validation(errors).to_string();
                assert!(message.starts_with("Config validation failed:\n  - "));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_merge_cli_overrides() {
        let mut config = PixelbrawlConfig::default();
        let overrides = CliOverrides {
            dir: Some(PathBuf::from("dist")),
            scale: Some(4),
            columns: Some(2),
            gif: Some(true),
            json: Some(false),
        };

        merge_cli_overrides(&mut config, &overrides);
        assert_eq!(config.output.dir, PathBuf::from("dist"));
        assert_eq!(config.output.scale, 4);
        assert_eq!(config.output.columns, Some(2));
        assert!(config.output.gif);
        assert!(!config.output.json);
    }

    #[test]
    fn test_empty_overrides_keep_file_values() {
        let mut config = PixelbrawlConfig::default();
        config.output.scale = 5;
        merge_cli_overrides(&mut config, &CliOverrides::default());
        assert_eq!(config.output.scale, 5);
        assert!(config.output.json);
    }

    #[test]
    fn test_resolve_config_validates_overrides() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), b"");
        let overrides = CliOverrides {
            scale: Some(0),
            ..Default::default()
        };

        let result = resolve_config(Some(&config_path), &overrides);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
