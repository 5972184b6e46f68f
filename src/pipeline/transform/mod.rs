//! Frontmatter transforms.
//!
//! Each transform mutates one document's frontmatter in place and is
//! registered into a [`TransformPipeline`](super::TransformPipeline).
//!
//! # Modules
//!
//! - `layout`: Supplies a default `layout` when the author left it unset

mod layout;

pub use layout::{DEFAULT_LAYOUT, LAYOUT_KEY, LayoutDefault};

use serde::{Deserialize, Serialize};

use crate::page::Frontmatter;

/// A per-document frontmatter transform.
///
/// Implementations must be stateless: the pipeline may run them for
/// different documents on different threads, and applying one twice must
/// leave the mapping as applying it once did.
pub trait DocumentTransform: Send + Sync {
    /// Short name used in logs and `[markdown] transforms`.
    fn name(&self) -> &'static str;

    /// Mutate `frontmatter` in place.
    fn apply(&self, frontmatter: &mut Frontmatter);
}

/// Transforms that can be registered by name from `enigma.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransformKind {
    /// [`LayoutDefault`]
    Layout,
}

impl TransformKind {
    /// Name as written in config.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Layout => "layout",
        }
    }
}
