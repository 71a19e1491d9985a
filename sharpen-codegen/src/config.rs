//! Render configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    ConfigError,
    builder::{Indent, LineEnding},
};

/// Whitespace choices applied when fragments are written out.
///
/// The default (4 spaces, `\n`) is the canonical layout.
///
/// ```
/// use sharpen_codegen::{RenderConfig, builder::{Indent, LineEnding}};
///
/// let config = RenderConfig::from_toml_str("indent = \"tab\"").unwrap();
/// assert_eq!(config.indent, Indent::Tab);
/// assert_eq!(config.line_ending, LineEnding::Lf);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub indent: Indent,
    pub line_ending: LineEnding,
}

impl RenderConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        Self::parse_named(src, "<inline>")
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_named(&src, &path.display().to_string())
    }

    fn parse_named(src: &str, filename: &str) -> Result<Self, ConfigError> {
        toml::from_str(src).map_err(|e| ConfigError::parse(e, src, filename))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = RenderConfig::from_toml_str("").unwrap();
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.indent, Indent::Spaces(4));
        assert_eq!(config.line_ending, LineEnding::Lf);
    }

    #[test]
    fn test_spaces_and_crlf() {
        let config = RenderConfig::from_toml_str(
            r#"
            indent = { spaces = 2 }
            line_ending = "crlf"
            "#,
        )
        .unwrap();
        assert_eq!(config.indent, Indent::Spaces(2));
        assert_eq!(config.line_ending, LineEnding::CrLf);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = RenderConfig::from_toml_str("tabs = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_syntax_error_has_span() {
        let err = RenderConfig::from_toml_str("indent = ").unwrap_err();
        match err {
            ConfigError::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("Expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "indent = \"tab\"").unwrap();

        let config = RenderConfig::load(file.path()).unwrap();
        assert_eq!(config.indent, Indent::Tab);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = RenderConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { path: p, .. } if p == path));
    }
}
