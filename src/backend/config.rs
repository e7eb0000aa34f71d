//! Placeholder vocabulary for template compilation
//!
//! A template marks its placeholders with reserved variable names. The
//! default vocabulary is:
//!
//! - `TREE`, `CONST`, `VAR`: anonymous wildcards
//! - `TREE_<aliases>`, `CONST_<aliases>`, `VAR_<aliases>`: named wildcards,
//!   where `<aliases>` is split on the separator into an ordered alias list
//!
//! The vocabulary can be overridden from a TOML document:
//!
//! ```toml
//! [placeholders]
//! tree = "ANY"
//! constant = "NUM"
//! variable = "SYM"
//! separator = "."
//! ```
//!
//! Omitted keys keep their defaults.

use std::path::Path;

use serde::Deserialize;

/// Errors raised while loading or validating a [`PlaceholderConfig`]
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    Io(std::io::Error),
    /// The document is not valid TOML for this schema
    Parse(toml::de::Error),
    /// A marker word is empty
    EmptyMarker(&'static str),
    /// The alias separator is empty
    EmptySeparator,
    /// Two placeholder kinds share the same marker word
    DuplicateMarker(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read placeholder config: {}", e),
            Self::Parse(e) => write!(f, "Failed to parse placeholder config: {}", e),
            Self::EmptyMarker(kind) => write!(f, "Marker for {} placeholders is empty", kind),
            Self::EmptySeparator => write!(f, "Alias separator is empty"),
            Self::DuplicateMarker(marker) => {
                write!(f, "Marker '{}' is used by more than one placeholder kind", marker)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Marker words and alias separator recognised by the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlaceholderConfig {
    /// Marker for subtree placeholders (default `TREE`)
    pub tree: String,
    /// Marker for constant placeholders (default `CONST`)
    pub constant: String,
    /// Marker for variable placeholders (default `VAR`)
    pub variable: String,
    /// Separator between the marker and each alias (default `_`)
    pub separator: String,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        PlaceholderConfig {
            tree: "TREE".to_string(),
            constant: "CONST".to_string(),
            variable: "VAR".to_string(),
            separator: "_".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    placeholders: PlaceholderConfig,
}

impl PlaceholderConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        file.placeholders.validate()?;
        Ok(file.placeholders)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check that the vocabulary is unambiguous.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let markers = [
            ("tree", &self.tree),
            ("constant", &self.constant),
            ("variable", &self.variable),
        ];
        for (kind, marker) in markers {
            if marker.is_empty() {
                return Err(ConfigError::EmptyMarker(kind));
            }
        }
        if self.separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        for (i, (_, a)) in markers.iter().enumerate() {
            if markers[i + 1..].iter().any(|(_, b)| a == b) {
                return Err(ConfigError::DuplicateMarker((*a).clone()));
            }
        }
        Ok(())
    }
}
