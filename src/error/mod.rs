//! Error types and handling for mdmatter
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`frontmatter`]: Malformed frontmatter blocks (strict parsing only)
//! - [`metadata`]: Metadata lookup errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors
//! - [`cli`]: Command-line usage errors

pub mod cli;
pub mod config;
pub mod frontmatter;
pub mod fs;
pub mod metadata;

mod macros;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mdmatter operations
#[derive(Error, Diagnostic, Debug)]
pub enum MdmatterError {
    // Frontmatter errors
    #[error("Frontmatter opened on line {line} is never closed")]
    #[diagnostic(
        code(mdmatter::frontmatter::unterminated),
        help("Add a closing '---' line after the metadata block")
    )]
    UnterminatedFrontmatter { line: usize },

    #[error("Frontmatter is not valid YAML: {reason}")]
    #[diagnostic(code(mdmatter::frontmatter::invalid_yaml))]
    InvalidFrontmatterYaml { reason: String },

    #[error("Frontmatter must be a mapping, found {found}")]
    #[diagnostic(
        code(mdmatter::frontmatter::not_a_mapping),
        help("Write the metadata block as 'key: value' lines")
    )]
    FrontmatterNotAMapping { found: String },

    #[error("Unsupported frontmatter key: {key}")]
    #[diagnostic(
        code(mdmatter::frontmatter::unsupported_key),
        help("Keys must be strings, numbers or booleans")
    )]
    UnsupportedFrontmatterKey { key: String },

    #[error("Duplicate frontmatter key: {key}")]
    #[diagnostic(
        code(mdmatter::frontmatter::duplicate_key),
        help("Keys such as 1 and '1' name the same entry; keep only one")
    )]
    DuplicateFrontmatterKey { key: String },

    // Metadata errors
    #[error("Metadata key '{key}' not found")]
    #[diagnostic(
        code(mdmatter::metadata::key_not_found),
        help("Use dots to reach nested values, e.g. 'author.name' or 'tags.0'")
    )]
    KeyNotFound { key: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(mdmatter::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(mdmatter::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(mdmatter::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(mdmatter::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(mdmatter::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(mdmatter::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(mdmatter::fs::io_error))]
    IoError { message: String },

    // Command errors
    #[error("Unsupported shell: {shell}")]
    #[diagnostic(
        code(mdmatter::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    #[error("Cannot write in place when reading from stdin")]
    #[diagnostic(
        code(mdmatter::cli::stdin_not_writable),
        help("Pass a file path to use --write")
    )]
    StdinNotWritable,

    #[error("{failed} of {total} files could not be parsed")]
    #[diagnostic(
        code(mdmatter::scan::failed),
        help("Run without --strict to treat malformed frontmatter as body")
    )]
    ScanFailed { failed: usize, total: usize },

    // Serialization errors
    #[error("Serialization failed: {reason}")]
    #[diagnostic(code(mdmatter::serialize::failed))]
    SerializationFailed { reason: String },
}

impl From<std::io::Error> for MdmatterError {
    fn from(err: std::io::Error) -> Self {
        MdmatterError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for MdmatterError {
    fn from(err: serde_yaml::Error) -> Self {
        MdmatterError::SerializationFailed {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MdmatterError {
    fn from(err: serde_json::Error) -> Self {
        MdmatterError::SerializationFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MdmatterError>;
