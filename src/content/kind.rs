//! Content file kinds.

use std::path::Path;

/// Kind of content file recognized by the frontmatter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// Markdown file (.md, .markdown)
    Markdown,
    /// MDX file (.mdx): markdown with components, same frontmatter rules
    Mdx,
}

impl ContentKind {
    /// Detect content kind from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "md" | "markdown" => Some(Self::Markdown),
            "mdx" => Some(Self::Mdx),
            _ => None,
        }
    }

    /// Detect content kind from file path.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Check if a path is a content file.
    #[inline]
    pub fn is_content_file(path: &Path) -> bool {
        Self::from_path(path).is_some()
    }
}
