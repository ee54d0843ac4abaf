//! Run configuration.
//!
//! Settings come from built-in defaults, optionally overridden by a TOML file
//! and then by command-line flags. Every key in the file is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::render::DEFAULT_SEPARATOR_WIDTH;

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "changesort.toml";

/// Everything a sort run needs to know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortConfig {
    /// Product name in the output title
    pub product: String,

    /// Version whose changelog is sorted
    pub version: String,

    /// Directory holding the raw changelog
    pub input_dir: PathBuf,

    /// Directory the sorted changelog is written to
    pub output_dir: PathBuf,

    /// Raw changelog file name; `{version}` is replaced
    pub input_pattern: String,

    /// Sorted changelog file name; `{version}` is replaced
    pub output_pattern: String,

    /// Number of `=` in section rules
    pub separator_width: usize,

    /// `chrono` strftime format for the "Generated at" line, in local time
    pub timestamp_format: String,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            product: "GT++".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            input_pattern: "CHANGELOG Basic {version}.txt".to_string(),
            output_pattern: "CHANGELOG_SORTED_{version}.txt".to_string(),
            separator_width: DEFAULT_SEPARATOR_WIDTH,
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
        }
    }
}

impl SortConfig {
    /// Parse a config from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content).map_err(|e| Error::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load `explicit` if given, else [`DEFAULT_CONFIG_FILE`] from `dir` if
    /// it exists, else the defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, Error> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using config file");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}

/// Errors loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_defaults() {
        assert_eq!(SortConfig::from_toml("").unwrap(), SortConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = SortConfig::from_toml(
            r#"
            version = "1.7.02.89-debug"
            input_dir = "D:/Coding/Java/Projects/GTplusplus"
            separator_width = 40
            "#,
        )
        .unwrap();
        assert_eq!(config.version, "1.7.02.89-debug");
        assert_eq!(config.input_dir, Path::new("D:/Coding/Java/Projects/GTplusplus"));
        assert_eq!(config.separator_width, 40);
        assert_eq!(config.product, "GT++");
        assert_eq!(config.output_pattern, "CHANGELOG_SORTED_{version}.txt");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(SortConfig::from_toml("verison = \"1.0\"").is_err());
    }

    #[test]
    fn toml_round_trip() {
        let config = SortConfig {
            product: "Widget".to_string(),
            ..SortConfig::default()
        };
        let text = config.to_toml().unwrap();
        assert_eq!(SortConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn discover_prefers_explicit_then_working_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            SortConfig::discover(None, dir.path()).unwrap(),
            SortConfig::default()
        );

        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "product = \"Local\"").unwrap();
        assert_eq!(
            SortConfig::discover(None, dir.path()).unwrap().product,
            "Local"
        );

        let explicit = dir.path().join("other.toml");
        std::fs::write(&explicit, "product = \"Explicit\"").unwrap();
        assert_eq!(
            SortConfig::discover(Some(&explicit), dir.path())
                .unwrap()
                .product,
            "Explicit"
        );
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SortConfig::discover(Some(&dir.path().join("nope.toml")), dir.path())
            .unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }
}
