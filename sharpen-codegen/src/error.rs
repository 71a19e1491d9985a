use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors raised while loading a [`RenderConfig`](crate::RenderConfig).
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(sharpen::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse render configuration")]
    #[diagnostic(
        code(sharpen::config::parse),
        help("expected keys are `indent` (e.g. `{{ spaces = 4 }}` or `\"tab\"`) and `line_ending` (`\"lf\"` or `\"crlf\"`)")
    )]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Self {
        let span = source.span().map(SourceSpan::from);
        ConfigError::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        }
    }
}
