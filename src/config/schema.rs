//! Configuration schema types for `pixelbrawl.toml`
//!
//! Defines the structure and validation rules for render settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Largest accepted upscale factor.
pub const MAX_SCALE: u32 = 16;

/// Where and how `pxb render` writes its files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output directory
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    /// Nearest-neighbor upscale factor
    #[serde(default = "default_scale")]
    pub scale: u32,
    /// Wrap strips after this many frames
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    /// Also write looping GIF previews
    #[serde(default)]
    pub gif: bool,
    /// Also write a JSON manifest per sheet
    #[serde(default = "default_true")]
    pub json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            scale: default_scale(),
            columns: None,
            gif: false,
            json: true,
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("build/sprites")
}

fn default_scale() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

/// Terminal preview settings for `pxb show`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreviewConfig {
    /// Glyph printed for transparent pixels when colors are unavailable
    #[serde(default = "default_transparent_glyph")]
    pub transparent_glyph: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            transparent_glyph: default_transparent_glyph(),
        }
    }
}

fn default_transparent_glyph() -> String {
    ".".to_string()
}

impl PreviewConfig {
    /// The configured glyph; `.` if it is not a single character.
    pub fn glyph(&self) -> char {
        let mut chars = self.transparent_glyph.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => '.',
        }
    }
}

/// Complete pixelbrawl.toml configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PixelbrawlConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "output.scale")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pixelbrawl.toml: '{}' {}", self.field, self.message)
    }
}

impl PixelbrawlConfig {
    /// Validate the configuration and return every problem found
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if !(1..=MAX_SCALE).contains(&self.output.scale) {
            errors.push(ConfigValidationError {
                field: "output.scale".to_string(),
                message: format!("must be between 1 and {}", MAX_SCALE),
            });
        }

        if self.output.columns == Some(0) {
            errors.push(ConfigValidationError {
                field: "output.columns".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        if self.output.dir.as_os_str().is_empty() {
            errors.push(ConfigValidationError {
                field: "output.dir".to_string(),
                message: "must be a non-empty path".to_string(),
            });
        }

        if self.preview.transparent_glyph.chars().count() != 1 {
            errors.push(ConfigValidationError {
                field: "preview.transparent_glyph".to_string(),
                message: "must be exactly one character".to_string(),
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: PixelbrawlConfig = toml::from_str("").unwrap();
        assert_eq!(config, PixelbrawlConfig::default());
        assert_eq!(config.output.dir, PathBuf::from("build/sprites"));
        assert_eq!(config.output.scale, 1);
        assert_eq!(config.output.columns, None);
        assert!(!config.output.gif);
        assert!(config.output.json);
        assert_eq!(config.preview.glyph(), '.');
        assert!(config.is_valid());
    }

    #[test]
    fn test_full_config_parse() {
        let toml = r#"
[output]
dir = "assets/generated"
scale = 4
columns = 3
gif = true
json = false

[preview]
transparent_glyph = " "
"#;
        let config: PixelbrawlConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.output.dir, PathBuf::from("assets/generated"));
        assert_eq!(config.output.scale, 4);
        assert_eq!(config.output.columns, Some(3));
        assert!(config.output.gif);
        assert!(!config.output.json);
        assert_eq!(config.preview.glyph(), ' ');
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: Result<PixelbrawlConfig, _> = toml::from_str("[output]\npadding = 2\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let toml = r#"
[output]
scale = 0
columns = 0

[preview]
transparent_glyph = "ab"
"#;
        let config: PixelbrawlConfig = toml::from_str(toml).unwrap();
        let errors = config.validate();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["output.scale", "output.columns", "preview.transparent_glyph"]
        );
        assert_eq!(
            errors[0].to_string(),
            "pixelbrawl.toml: 'output.scale' must be between 1 and 16"
        );
    }

    #[test]
    fn test_scale_upper_bound() {
        let mut config = PixelbrawlConfig::default();
        config.output.scale = MAX_SCALE;
        assert!(config.is_valid());
        config.output.scale = MAX_SCALE + 1;
        assert!(!config.is_valid());
    }

    #[test]
    fn test_glyph_fallback() {
        let preview = PreviewConfig {
            transparent_glyph: String::new(),
        };
        assert_eq!(preview.glyph(), '.');
    }
}
