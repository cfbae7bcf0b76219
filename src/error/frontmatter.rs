//! Malformed frontmatter errors
//!
//! Only strict parsing surfaces these; the lenient parser degrades to body.

use super::MdmatterError;

/// Creates an unterminated frontmatter error for a block opened on `line` (1-based)
pub fn unterminated(line: usize) -> MdmatterError {
    MdmatterError::UnterminatedFrontmatter { line }
}

/// Creates an invalid YAML error
pub fn invalid_yaml(reason: impl Into<String>) -> MdmatterError {
    MdmatterError::InvalidFrontmatterYaml {
        reason: reason.into(),
    }
}

/// Creates a not-a-mapping error
pub fn not_a_mapping(found: impl Into<String>) -> MdmatterError {
    MdmatterError::FrontmatterNotAMapping {
        found: found.into(),
    }
}

/// Creates a duplicate key error for keys that collide once stringified
pub fn duplicate_key(key: impl Into<String>) -> MdmatterError {
    MdmatterError::DuplicateFrontmatterKey { key: key.into() }
}

/// Creates an unsupported key error
pub fn unsupported_key(key: impl Into<String>) -> MdmatterError {
    MdmatterError::UnsupportedFrontmatterKey { key: key.into() }
}
