//! Frontmatter processing pipeline.
//!
//! An ordered list of [`DocumentTransform`]s, run in registration order
//! once per document:
//!
//! ```text
//! Document (parsed) -> transform 1 -> transform 2 -> ... -> Document (resolved)
//! ```
//!
//! The pipeline knows nothing about where documents come from; the content
//! pass in `content` feeds it.

pub mod transform;

use crate::config::section::MarkdownConfig;
use crate::page::{Document, Frontmatter};

pub use transform::{DEFAULT_LAYOUT, DocumentTransform, LAYOUT_KEY, LayoutDefault, TransformKind};

/// Ordered list of frontmatter transforms.
#[derive(Default)]
pub struct TransformPipeline {
    transforms: Vec<Box<dyn DocumentTransform>>,
}

impl TransformPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the pipeline registered under `[markdown]`.
    pub fn from_config(markdown: &MarkdownConfig) -> Self {
        markdown
            .transforms
            .iter()
            .fold(Self::new(), |pipeline, kind| match kind {
                TransformKind::Layout => {
                    pipeline.pipe(LayoutDefault::new(markdown.default_layout.clone()))
                }
            })
    }

    /// Append a transform; it runs after everything registered before it.
    pub fn pipe(mut self, transform: impl DocumentTransform + 'static) -> Self {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Apply every transform to one frontmatter mapping.
    pub fn apply(&self, frontmatter: &mut Frontmatter) {
        for transform in &self.transforms {
            transform.apply(frontmatter);
        }
    }

    /// Apply every transform to a document's frontmatter.
    #[inline]
    pub fn run(&self, doc: &mut Document) {
        self.apply(&mut doc.frontmatter);
    }

    /// Registered transform names, in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

impl std::fmt::Debug for TransformPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
