//! Parsed documents: frontmatter metadata plus the remaining body
//!
//! A [`Document`] is produced once per input by the frontmatter parser and is
//! never mutated afterwards. It can be emitted as JSON/YAML, deserialized into
//! a typed struct, or written back out as markdown.

mod metadata;
mod value;

pub use metadata::Metadata;
pub use value::Value;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::frontmatter::{DELIMITER, opens_block};

/// Structured metadata and verbatim body of one input text
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    metadata: Metadata,
    body: String,
}

impl Document {
    pub fn new(metadata: Metadata, body: impl Into<String>) -> Self {
        Self {
            metadata,
            body: body.into(),
        }
    }

    /// A document without frontmatter
    pub fn from_body(body: impl Into<String>) -> Self {
        Self::new(Metadata::new(), body)
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn has_metadata(&self) -> bool {
        !self.metadata.is_empty()
    }

    pub fn into_parts(self) -> (Metadata, String) {
        (self.metadata, self.body)
    }

    /// Top-level metadata value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// Metadata value by dotted path, see [`Metadata::lookup`]
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        self.metadata.lookup(path)
    }

    /// Deserialize the metadata into a typed struct.
    ///
    /// Missing fields follow the target type's serde attributes.
    pub fn deserialize_metadata<T: DeserializeOwned>(&self) -> Result<T> {
        let value = serde_yaml::to_value(&self.metadata)?;
        Ok(serde_yaml::from_value(value)?)
    }

    /// Render back to markdown with a canonical frontmatter block.
    ///
    /// A blank line separates the closing delimiter from the body; the parser
    /// drops it again, so parsing the output yields an equal document.
    /// Documents without metadata render as the bare body, unless the body
    /// itself opens with a delimiter line; then an empty block comes first.
    pub fn to_markdown(&self) -> Result<String> {
        if self.metadata.is_empty() {
            if opens_block(&self.body) {
                return Ok(format!("{DELIMITER}\n{DELIMITER}\n{}", self.body));
            }
            return Ok(self.body.clone());
        }
        let yaml = serde_yaml::to_string(&self.metadata)?;
        Ok(format!("{DELIMITER}\n{yaml}{DELIMITER}\n\n{}", self.body))
    }
}
