use serde_yaml::Value as YamlValue;

use super::lines::{Line, lines};
use crate::document::{Document, Metadata};
use crate::error::Result;
use crate::error::frontmatter::{invalid_yaml, not_a_mapping, unterminated};

const BOM: char = '\u{feff}';

/// Parse `input`, falling back to a body-only document when the frontmatter
/// block is malformed. Never fails and never panics.
pub fn parse(input: &str) -> Document {
    try_parse(input).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "ignoring malformed frontmatter, treating input as body");
        Document::from_body(input)
    })
}

/// Parse `input`, reporting a malformed frontmatter block as an error.
///
/// Input that does not start with a delimiter line is not an error: it yields
/// empty metadata and the whole input as body.
pub fn try_parse(input: &str) -> Result<Document> {
    let content = input.strip_prefix(BOM).unwrap_or(input);
    let mut scan = lines(content);

    let Some(opening) = scan.next().filter(Line::is_delimiter) else {
        return Ok(Document::from_body(input));
    };
    let closing = scan
        .find(Line::is_delimiter)
        .ok_or_else(|| unterminated(1))?;

    let metadata = parse_block(&content[opening.end..closing.start])?;
    let body = strip_leading_blank_line(&content[closing.end..]);
    tracing::trace!(keys = metadata.len(), body_len = body.len(), "parsed frontmatter");

    Ok(Document::new(metadata, body))
}

/// Whether `input` starts with an opening delimiter line.
pub(crate) fn opens_block(input: &str) -> bool {
    let content = input.strip_prefix(BOM).unwrap_or(input);
    lines(content).next().is_some_and(|line| line.is_delimiter())
}

fn parse_block(block: &str) -> Result<Metadata> {
    let has_content = block.lines().any(|line| {
        let line = line.trim();
        !line.is_empty() && !line.starts_with('#')
    });
    if !has_content {
        return Ok(Metadata::new());
    }
    let value: YamlValue = serde_yaml::from_str(block).map_err(|e| invalid_yaml(e.to_string()))?;
    match strip_tag(value) {
        YamlValue::Null => Ok(Metadata::new()),
        YamlValue::Mapping(mapping) => Metadata::from_yaml_mapping(mapping),
        other => Err(not_a_mapping(describe(&other))),
    }
}

fn strip_tag(value: YamlValue) -> YamlValue {
    match value {
        YamlValue::Tagged(tagged) => strip_tag(tagged.value),
        other => other,
    }
}

fn describe(value: &YamlValue) -> &'static str {
    match value {
        YamlValue::Null => "null",
        YamlValue::Bool(_) => "a boolean",
        YamlValue::Number(_) => "a number",
        YamlValue::String(_) => "a string",
        YamlValue::Sequence(_) => "a sequence",
        YamlValue::Mapping(_) => "a mapping",
        YamlValue::Tagged(_) => "a tagged value",
    }
}

fn strip_leading_blank_line(body: &str) -> &str {
    match lines(body).next() {
        Some(first) if first.is_blank() && first.is_terminated() => &body[first.end..],
        _ => body,
    }
}

/// Frontmatter parser with a configurable failure policy.
///
/// The default parser is lenient, see [`parse`]. A strict parser surfaces
/// malformed blocks as errors, see [`try_parse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrontmatterParser {
    strict: bool,
}

impl FrontmatterParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strict(strict: bool) -> Self {
        Self { strict }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Only a strict parser returns `Err`.
    pub fn parse(&self, input: &str) -> Result<Document> {
        if self.strict {
            try_parse(input)
        } else {
            Ok(parse(input))
        }
    }
}
