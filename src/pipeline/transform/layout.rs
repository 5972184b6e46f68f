//! Default `layout` injection.

use serde_json::Value;

use super::DocumentTransform;
use crate::page::{Frontmatter, truthy_field};

/// Frontmatter key holding the page template path.
pub const LAYOUT_KEY: &str = "layout";

/// Template used for posts that do not name one.
pub const DEFAULT_LAYOUT: &str = "../../layouts/PostLayout.astro";

/// Sets `layout` to a fixed template path when it is absent or falsy.
///
/// A truthy `layout` is never touched. An existing falsy value is
/// overwritten where it stands; a missing key is appended.
#[derive(Debug, Clone)]
pub struct LayoutDefault {
    layout: String,
}

impl LayoutDefault {
    pub fn new(layout: impl Into<String>) -> Self {
        Self {
            layout: layout.into(),
        }
    }
}

impl Default for LayoutDefault {
    fn default() -> Self {
        Self::new(DEFAULT_LAYOUT)
    }
}

impl DocumentTransform for LayoutDefault {
    fn name(&self) -> &'static str {
        "layout"
    }

    fn apply(&self, frontmatter: &mut Frontmatter) {
        if truthy_field(frontmatter, LAYOUT_KEY).is_none() {
            frontmatter.insert(LAYOUT_KEY.to_string(), Value::String(self.layout.clone()));
        }
    }
}
