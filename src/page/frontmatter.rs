//! Frontmatter detection and parsing.
//!
//! Two block styles are recognized at the top of a markdown file:
//!
//! ```text
//! ---                      +++
//! title: Hello             title = "Hello"
//! layout: ../Custom.astro  tags = ["rust"]
//! ---                      +++
//! ```
//!
//! Fences must sit on a line of their own. Both styles are converted to a
//! JSON mapping that keeps the author's key order.

use serde_json::{Number, Value};
use serde_yaml::{Mapping, Value as Yaml};
use thiserror::Error;

use super::Frontmatter;

/// Which fence a document's frontmatter used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontmatterFormat {
    /// `---` fenced YAML mapping.
    Yaml,
    /// `+++` fenced TOML table.
    Toml,
    /// No frontmatter block.
    #[default]
    None,
}

/// Why a frontmatter block could not be turned into a mapping.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error("frontmatter must be a key/value mapping")]
    NotMapping,
}

/// Split `content` into `(frontmatter, body, format)`.
///
/// Returns `None` when the document has no frontmatter block, including
/// when the opening fence is never closed.
pub fn split(content: &str) -> Option<(&str, &str, FrontmatterFormat)> {
    let trimmed = content.trim_start();
    let (first, rest) = trimmed.split_once('\n')?;

    let fence = first.trim();
    let format = match fence {
        "---" => FrontmatterFormat::Yaml,
        "+++" => FrontmatterFormat::Toml,
        _ => return None,
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim() == fence {
            let fm = &rest[..offset];
            let body = rest[offset + line.len()..].trim_start_matches(['\r', '\n']);
            return Some((fm, body, format));
        }
        offset += line.len();
    }

    None
}

/// Parse the frontmatter block of `content`.
///
/// Returns the mapping, the body and the detected format. A document
/// without a block yields an empty mapping and the whole content as body.
pub fn parse(content: &str) -> Result<(Frontmatter, &str, FrontmatterFormat), ParseError> {
    let Some((fm, body, format)) = split(content) else {
        return Ok((Frontmatter::new(), content, FrontmatterFormat::None));
    };

    let map = match format {
        FrontmatterFormat::Toml => parse_toml(fm)?,
        _ => parse_yaml(fm)?,
    };

    Ok((map, body, format))
}

/// Parse a YAML block. An empty block is an empty mapping.
fn parse_yaml(content: &str) -> Result<Frontmatter, ParseError> {
    if content.trim().is_empty() {
        return Ok(Frontmatter::new());
    }

    match serde_yaml::from_str::<Yaml>(content)? {
        Yaml::Null => Ok(Frontmatter::new()),
        Yaml::Mapping(map) => Ok(mapping_to_json(map)),
        _ => Err(ParseError::NotMapping),
    }
}

fn mapping_to_json(map: Mapping) -> Frontmatter {
    map.into_iter()
        .map(|(key, value)| (yaml_key(key), yaml_to_json(value)))
        .collect()
}

/// JSON keys are strings; other scalar keys keep their YAML spelling.
fn yaml_key(key: Yaml) -> String {
    match key {
        Yaml::String(s) => s,
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Convert a YAML value to JSON. Tags are dropped.
fn yaml_to_json(value: Yaml) -> Value {
    match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64()
                    .and_then(Number::from_f64)
                    .map_or(Value::Null, Value::Number)
            }
        }
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(seq) => Value::Array(seq.into_iter().map(yaml_to_json).collect()),
        Yaml::Mapping(map) => Value::Object(mapping_to_json(map)),
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

/// Parse TOML frontmatter into a JSON mapping.
fn parse_toml(content: &str) -> Result<Frontmatter, ParseError> {
    let table: toml::Table = toml::from_str(content)?;
    Ok(table
        .into_iter()
        .map(|(key, value)| (key, toml_to_json(value)))
        .collect())
}

/// Convert a TOML value to JSON. Datetimes become their TOML string form.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(arr) => Value::Array(arr.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}
