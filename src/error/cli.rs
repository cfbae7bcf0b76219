//! Command-line usage errors

use super::MdmatterError;

/// Creates an unsupported shell error
pub fn unsupported_shell(shell: impl Into<String>) -> MdmatterError {
    MdmatterError::UnsupportedShell {
        shell: shell.into(),
    }
}

/// Creates a scan failed error
pub fn scan_failed(failed: usize, total: usize) -> MdmatterError {
    MdmatterError::ScanFailed { failed, total }
}
