//! Metadata lookup errors

use super::MdmatterError;

/// Creates a key not found error
pub fn key_not_found(key: impl Into<String>) -> MdmatterError {
    MdmatterError::KeyNotFound { key: key.into() }
}
