//! Content documents and their frontmatter.
//!
//! - [`Document`]: one markdown source file (path, frontmatter, body)
//! - [`frontmatter`]: `---` / `+++` block detection and parsing
//! - [`Frontmatter`]: the metadata mapping every transform mutates

mod document;
mod error;
pub mod frontmatter;

pub use document::Document;
pub use error::FrontmatterError;
pub use frontmatter::FrontmatterFormat;

use serde_json::Value;

/// Frontmatter metadata: string keys to arbitrary values, insertion order kept.
pub type Frontmatter = serde_json::Map<String, Value>;

/// Whether a frontmatter value counts as "set".
///
/// `null`, `false`, numeric zero and the empty string are falsy.
/// Everything else, empty arrays and tables included, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Look up `key` and return it only when truthy.
pub fn truthy_field<'a>(frontmatter: &'a Frontmatter, key: &str) -> Option<&'a Value> {
    frontmatter.get(key).filter(|v| is_truthy(v))
}
