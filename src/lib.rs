//! mdmatter - split markdown documents into YAML frontmatter and body
//!
//! ```
//! let doc = mdmatter::parse("---\ntitle: Hello\n---\n\n# Hello\n");
//! assert_eq!(doc.metadata()["title"], "Hello");
//! assert_eq!(doc.body(), "# Hello\n");
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod frontmatter;

pub use document::{Document, Metadata, Value};
pub use error::{MdmatterError, Result};
pub use frontmatter::{FrontmatterParser, parse, try_parse};
