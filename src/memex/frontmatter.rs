//! # Front Matter Serialization
//!
//! A document stores its metadata between two delimiter lines:
//!
//! ```text
//! ---
//! layout: post
//! title: Git Cheatsheet
//! categories: [🤖 tech, 🧙 git]
//! ---
//! body...
//! ```
//!
//! [`render`] is the single serializer for [`FrontMatter`]. It walks the
//! recognized fields in canonical order and asks each field for its
//! [`FieldStyle`]: inline-list fields come out as flow sequences, everything
//! else goes through `serde_yaml` as an ordinary block mapping entry. Extra keys
//! follow the recognized ones, in the order they were parsed.
//!
//! [`split`] finds the block boundaries. Only the first two delimiter lines count,
//! so a `---` rule inside the body is left alone.

use crate::error::{MemexError, Result};
use crate::model::{Field, FieldStyle, FieldValue, FrontMatter};
use serde_yaml::{Mapping, Value};

pub const DELIMITER: &str = "---";

const FLOW_INDICATORS: &[char] = &[',', '[', ']', '{', '}'];

/// Render front matter as a YAML block mapping, without a trailing newline.
pub fn render(fm: &FrontMatter) -> Result<String> {
    let mut out = String::new();

    for (field, value) in fm.fields() {
        match (field.style(), flow_items(value)) {
            (FieldStyle::InlineList, Some(items)) => {
                out.push_str(field.key());
                out.push_str(": ");
                out.push_str(&flow_sequence(&items)?);
                out.push('\n');
            }
            _ => out.push_str(&block_entry(
                Value::String(field.key().to_string()),
                value.to_yaml(),
            )?),
        }
    }

    for (key, value) in &fm.extra {
        out.push_str(&block_entry(key.clone(), value.clone())?);
    }

    // Only the entry terminator goes; further newlines belong to a kept block scalar.
    if out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}

/// Parse a front-matter block. The block must be a YAML mapping (or empty).
pub fn parse(raw: &str) -> Result<FrontMatter> {
    if raw.trim().is_empty() {
        return Ok(FrontMatter::new());
    }

    let value: Value =
        serde_yaml::from_str(raw).map_err(|e| MemexError::MalformedFrontMatter(e.to_string()))?;
    let mapping = match value {
        Value::Null => Mapping::new(),
        Value::Mapping(m) => m,
        _ => {
            return Err(MemexError::MalformedFrontMatter(
                "front matter is not a mapping".to_string(),
            ));
        }
    };

    let mut fm = FrontMatter::new();
    for (key, value) in mapping {
        match key.as_str().and_then(Field::from_key) {
            Some(field) => fm.set(field, FieldValue::from_yaml(value)),
            None => {
                fm.extra.insert(key, value);
            }
        }
    }
    Ok(fm)
}

/// The two halves of a document with front matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<'a> {
    /// Raw YAML between the delimiter lines.
    pub front: &'a str,
    /// Everything after the closing `---`, starting with its line ending.
    pub body: &'a str,
}

pub fn split(text: &str) -> Result<Split<'_>> {
    if !text.starts_with(DELIMITER) {
        return Err(MemexError::NoFrontMatter);
    }

    let open_end = text.find('\n').ok_or_else(missing_close)?;
    if text[..open_end].trim_end_matches('\r') != DELIMITER {
        return Err(MemexError::MalformedFrontMatter(
            "opening delimiter must be on its own line".to_string(),
        ));
    }

    let front_start = open_end + 1;
    let mut line_start = front_start;
    while line_start <= text.len() {
        let rest = &text[line_start..];
        let line_len = rest.find('\n').unwrap_or(rest.len());
        if rest[..line_len].trim_end_matches('\r') == DELIMITER {
            return Ok(Split {
                front: &text[front_start..line_start],
                body: &text[line_start + DELIMITER.len()..],
            });
        }
        if line_len == rest.len() {
            break;
        }
        line_start += line_len + 1;
    }

    Err(missing_close())
}

/// Reassemble a document from a rendered block and an untouched body.
pub fn compose(front: &str, body: &str) -> String {
    format!("{DELIMITER}\n{front}\n{DELIMITER}{body}")
}

fn missing_close() -> MemexError {
    MemexError::MalformedFrontMatter("missing closing delimiter".to_string())
}

fn block_entry(key: Value, value: Value) -> Result<String> {
    let mut entry = Mapping::new();
    entry.insert(key, value);
    let mut yaml = serde_yaml::to_string(&entry)?;
    // A `|+` scalar at the end of a stream gets a `...` document end marker.
    if yaml.ends_with("\n...\n") {
        yaml.truncate(yaml.len() - "...\n".len());
    }
    Ok(yaml)
}

/// Items of a value that can be written as a flow sequence of scalars.
fn flow_items(value: &FieldValue) -> Option<Vec<Value>> {
    match value {
        FieldValue::List(items) => Some(items.iter().cloned().map(Value::String).collect()),
        FieldValue::Raw(Value::Sequence(items))
            if items
                .iter()
                .all(|v| v.is_string() || v.is_number() || v.is_bool() || v.is_null()) =>
        {
            Some(items.clone())
        }
        _ => None,
    }
}

fn flow_sequence(items: &[Value]) -> Result<String> {
    let rendered = items
        .iter()
        .map(flow_item)
        .collect::<Result<Vec<_>>>()?;
    Ok(format!("[{}]", rendered.join(", ")))
}

fn flow_item(value: &Value) -> Result<String> {
    if let Value::String(s) = value
        && s.contains(['\n', '\r'])
    {
        // JSON string escapes are valid YAML double-quoted scalars
        return Ok(serde_json::to_string(s)?);
    }

    let rendered = serde_yaml::to_string(value)?;
    let rendered = rendered.trim_end_matches('\n');
    let is_plain = !rendered.starts_with(['\'', '"']);
    match value {
        Value::String(s) if is_plain && rendered.contains(FLOW_INDICATORS) => {
            Ok(format!("'{}'", s.replace('\'', "''")))
        }
        _ => Ok(rendered.to_string()),
    }
}
