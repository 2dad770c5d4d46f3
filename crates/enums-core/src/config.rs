//! Configuration structures for the enums generator.
//!
//! - [`Target`] - Output language of the generated code
//! - [`GenerateConfig`] - Where and how generated files are written
//!
//! Configuration is read from a JSON file; every field is optional and falls
//! back to its [`Default`] value.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::DEFAULT_TYPE_PREFIX;

/// Output language of the generated code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// Go source with a `String()` method and a `FromString` function.
    #[default]
    Go,
    /// Rust source with `as_str`, `FromStr` and `TryFrom<u16>`.
    Rust,
    /// JSON description of the table.
    Json,
}

impl Target {
    /// All targets, in declaration order.
    pub const ALL: [Self; 3] = [Self::Go, Self::Rust, Self::Json];

    /// Returns the file extension of generated files, without the dot.
    ///
    /// # Examples
    ///
    /// ```
    /// use enums_core::Target;
    ///
    /// assert_eq!(Target::Go.extension(), "go");
    /// assert_eq!(Target::Rust.extension(), "rs");
    /// ```
    #[inline]
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Rust => "rs",
            Self::Json => "json",
        }
    }

    /// Returns a human-readable label for this target.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Go => "Go",
            Self::Rust => "Rust",
            Self::Json => "JSON",
        }
    }
}

/// Settings for a generation run.
///
/// # Examples
///
/// ```
/// use enums_core::{GenerateConfig, Target};
///
/// let config = GenerateConfig::default();
/// assert_eq!(config.file_template, "language_$");
/// assert_eq!(config.target, Target::Go);
/// assert!(config.languages.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Directory generated files are written to.
    pub output_dir: Utf8PathBuf,

    /// File name template; each `$` is replaced by the lowercase container name.
    pub file_template: String,

    /// Output language.
    pub target: Target,

    /// Prefix of generated type names.
    pub type_prefix: String,

    /// Built-in grammars to generate for. Empty means all of them.
    pub languages: Vec<String>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output_dir: Utf8PathBuf::from("."),
            file_template: "language_$".to_owned(),
            target: Target::Go,
            type_prefix: DEFAULT_TYPE_PREFIX.to_owned(),
            languages: Vec::new(),
        }
    }
}

impl GenerateConfig {
    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingFile`] if `path` does not exist
    /// - [`ConfigError::Io`] if the file cannot be read
    /// - [`ConfigError::Parse`] if it is not valid JSON for this structure
    /// - [`ConfigError::InvalidOption`] if a value fails [`validate`](Self::validate)
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_owned()));
        }
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks option values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] if the file template is empty or
    /// the type prefix contains characters not allowed in an identifier.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.file_template.trim().is_empty() {
            return Err(ConfigError::InvalidOption {
                option: "file_template".to_owned(),
                reason: "must not be empty".to_owned(),
            });
        }

        let prefix_ok = !self.type_prefix.starts_with(|c: char| c.is_ascii_digit())
            && self
                .type_prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !prefix_ok {
            return Err(ConfigError::InvalidOption {
                option: "type_prefix".to_owned(),
                reason: format!("'{}' cannot start an identifier", self.type_prefix),
            });
        }

        Ok(())
    }

    /// Returns `true` if several containers would be written to distinct files.
    #[inline]
    #[must_use]
    pub fn template_is_per_container(&self) -> bool {
        self.file_template.contains('$')
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_generate_config_defaults() {
        let config = GenerateConfig::default();
        assert_eq!(config.output_dir, Utf8PathBuf::from("."));
        assert_eq!(config.type_prefix, "SyntaxType");
        assert!(config.template_is_per_container());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_deserialize_with_missing_fields() {
        let json = r#"{"target": "rust", "languages": ["tsx"]}"#;
        let config: GenerateConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.target, Target::Rust);
        assert_eq!(config.languages, vec!["tsx"]);
        // Other fields should have defaults
        assert_eq!(config.file_template, "language_$");
    }

    #[test]
    fn test_target_serialization() {
        assert_eq!(serde_json::to_string(&Target::Json).unwrap(), r#""json""#);
        assert_eq!(Target::ALL.map(Target::extension), ["go", "rs", "json"]);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = GenerateConfig {
            file_template: "  ".to_owned(),
            ..GenerateConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidOption { option, .. }) if option == "file_template"
        ));

        let config = GenerateConfig {
            type_prefix: "Syntax-".to_owned(),
            ..GenerateConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GenerateConfig {
            type_prefix: String::new(),
            ..GenerateConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"output_dir": "gen", "type_prefix": "Kind"}}"#).unwrap();
        let path = Utf8Path::from_path(file.path()).unwrap();

        let config = GenerateConfig::load(path).unwrap();
        assert_eq!(config.output_dir, Utf8PathBuf::from("gen"));
        assert_eq!(config.type_prefix, "Kind");
    }

    #[test]
    fn test_load_missing_file() {
        let err = GenerateConfig::load(Utf8Path::new("/nonexistent/enums.json")).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile(_)));
    }
}
