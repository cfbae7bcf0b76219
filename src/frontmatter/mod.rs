//! Frontmatter parsing
//!
//! Splits a text document into the YAML block delimited by two `---` lines
//! and the body that follows it. Parsing is pure: no I/O, no shared state.
//!
//! The lenient entry point [`parse`] never fails; a malformed block is
//! treated as ordinary body text. [`try_parse`] reports the same problems as
//! errors instead.

mod lines;
mod parser;

pub use parser::{FrontmatterParser, parse, try_parse};
pub(crate) use parser::opens_block;

/// Marker line that opens and closes a frontmatter block
pub const DELIMITER: &str = "---";
