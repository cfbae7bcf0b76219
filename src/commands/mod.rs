//! Command implementations for mdmatter CLI

pub mod body;
pub mod completions;
pub mod fmt;
pub mod get;
pub mod helpers;
pub mod parse;
pub mod scan;
pub mod show;
pub mod version;
