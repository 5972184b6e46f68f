//! A single markdown source document.

use std::path::{Path, PathBuf};

use super::{Frontmatter, FrontmatterError, FrontmatterFormat, frontmatter};

/// One content file being processed.
///
/// The frontmatter mapping is owned by the document; transforms receive
/// `&mut` access to it one document at a time.
#[derive(Debug, Clone)]
pub struct Document {
    /// Source file path.
    pub path: PathBuf,
    /// Fence style of the frontmatter block, if any.
    pub format: FrontmatterFormat,
    /// Frontmatter metadata.
    pub frontmatter: Frontmatter,
    /// Markdown body after the frontmatter block.
    pub body: String,
}

impl Document {
    /// Parse a document from its source text.
    pub fn parse(path: impl Into<PathBuf>, source: &str) -> Result<Self, FrontmatterError> {
        let path = path.into();
        let (frontmatter, body, format) = frontmatter::parse(source)
            .map_err(|err| FrontmatterError::parse(path.clone(), err))?;

        Ok(Self {
            path,
            format,
            frontmatter,
            body: body.to_string(),
        })
    }

    /// Read and parse a document from disk.
    pub fn load(path: &Path) -> Result<Self, FrontmatterError> {
        let source = std::fs::read_to_string(path)
            .map_err(|err| FrontmatterError::Io(path.to_path_buf(), err))?;
        Self::parse(path, &source)
    }

    /// The `layout` field as a string, if set.
    pub fn layout(&self) -> Option<&str> {
        self.frontmatter.get("layout").and_then(|v| v.as_str())
    }

    /// The `title` field as a string, if set.
    pub fn title(&self) -> Option<&str> {
        self.frontmatter.get("title").and_then(|v| v.as_str())
    }
}
