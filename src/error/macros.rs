//! Error context macros for consistent error messages

/// Macro for adding context to file read failures
///
/// # Example
/// ```rust,ignore
/// let content = std::fs::read_to_string(path)
///     .map_err(|e| file_error_context!("Failed to read input", path.display(), e))?;
/// ```
#[macro_export]
macro_rules! file_error_context {
    ($operation:expr, $path:expr, $err:expr) => {
        $crate::error::fs::read_failed($path.to_string(), format!("{}: {}", $operation, $err))
    };
}
