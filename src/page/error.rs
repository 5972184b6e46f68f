//! Errors raised while reading content documents.

use std::path::PathBuf;
use thiserror::Error;

use super::frontmatter::ParseError;

/// Failure to load or parse one content document.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid TOML frontmatter in `{0}`")]
    Toml(PathBuf, #[source] toml::de::Error),

    #[error("invalid YAML frontmatter in `{0}`")]
    Yaml(PathBuf, #[source] serde_yaml::Error),

    #[error("frontmatter in `{0}` is not a key/value mapping")]
    NotMapping(PathBuf),
}

impl FrontmatterError {
    /// Attach the document path to a frontmatter parse failure.
    pub fn parse(path: PathBuf, err: ParseError) -> Self {
        match err {
            ParseError::Toml(err) => Self::Toml(path, err),
            ParseError::Yaml(err) => Self::Yaml(path, err),
            ParseError::NotMapping => Self::NotMapping(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_error_display_names_path() {
        let err = FrontmatterError::Io(
            PathBuf::from("posts/hello.md"),
            Error::new(ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("posts/hello.md"));
    }

    #[test]
    fn test_parse_error_keeps_path() {
        let err = FrontmatterError::parse(PathBuf::from("posts/list.md"), ParseError::NotMapping);
        assert!(matches!(&err, FrontmatterError::NotMapping(p) if p.ends_with("list.md")));
        assert!(err.to_string().contains("posts/list.md"));
    }
}
