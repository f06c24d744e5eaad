//! Project configuration.
//!
//! An `ngsmith.toml` at or above the target directory configures the
//! selector/class-name prefix. A missing file is not an error; defaults
//! apply.

use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use thiserror::Error;

use crate::naming::name_parts;

/// Result type for configuration loading (boxed to reduce size on stack).
pub type ConfigResult<T> = std::result::Result<T, Box<ConfigError>>;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse ngsmith.toml")]
    #[diagnostic(code(ngsmith::config_parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

/// Root schema for ngsmith.toml.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Prefix folded into selectors and module class names, e.g. "app".
    #[serde(default)]
    pub prefix: Option<String>,
}

impl Config {
    /// Configuration file name searched for by [`Config::discover`].
    pub const FILE_NAME: &'static str = "ngsmith.toml";

    /// Walk up from `start` looking for an `ngsmith.toml`; defaults when
    /// no file is found.
    pub fn discover(start: &Path) -> ConfigResult<Self> {
        let mut dir = start;

        loop {
            let candidate = dir.join(Self::FILE_NAME);
            if candidate.is_file() {
                return Self::from_file(&candidate);
            }
            match dir.parent() {
                Some(parent) => dir = parent,
                None => return Ok(Self::default()),
            }
        }
    }

    /// Open and parse a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;

        Self::parse(&content, &path.display().to_string())
    }

    /// Parse configuration content, reporting toml errors with a span.
    pub fn parse(content: &str, filename: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|source: toml::de::Error| {
            let span = source.span().map(SourceSpan::from);
            Box::new(ConfigError::Parse {
                src: NamedSource::new(filename, content.to_string()),
                span,
                source,
            })
        })
    }

    /// The configured prefix as lowercase word parts, empty when unset.
    pub fn prefix_parts(&self) -> Vec<String> {
        self.prefix
            .as_deref()
            .map(name_parts)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_prefix() {
        let config = Config::parse("prefix = \"appShared\"\n", "ngsmith.toml").unwrap();
        assert_eq!(config.prefix.as_deref(), Some("appShared"));
        assert_eq!(config.prefix_parts(), vec!["app", "shared"]);
    }

    #[test]
    fn test_parse_empty_content_defaults() {
        let config = Config::parse("", "ngsmith.toml").unwrap();
        assert!(config.prefix.is_none());
        assert!(config.prefix_parts().is_empty());
    }

    #[test]
    fn test_parse_error_carries_span() {
        let err = Config::parse("prefix = [not valid", "ngsmith.toml").unwrap_err();
        assert!(matches!(*err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_discover_walks_up() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("src").join("app");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join(Config::FILE_NAME), "prefix = \"lucid\"\n").unwrap();

        let config = Config::discover(&nested).unwrap();

        assert_eq!(config.prefix.as_deref(), Some("lucid"));
    }

    #[test]
    fn test_discover_defaults_when_absent() {
        let temp = TempDir::new().unwrap();
        let config = Config::discover(temp.path()).unwrap();
        assert!(config.prefix.is_none());
    }
}
