//! Command helper utilities

use std::io::Read;
use std::path::{Path, PathBuf};

use mdmatter::config::OutputFormat;
use mdmatter::error::fs::{io_error, not_found};
use mdmatter::{Result, Value, file_error_context};
use serde::Serialize;

/// Whether `path` is the `-` placeholder for stdin
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Human-readable name of an input for messages
pub fn display_name(path: &Path) -> String {
    if is_stdin(path) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Read a whole input file, or stdin for `-`
pub fn read_input(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| file_error_context!("Failed to read input", "<stdin>", e))?;
        return Ok(content);
    }

    if !path.is_file() {
        return Err(not_found(path.display().to_string()));
    }
    std::fs::read_to_string(path)
        .map_err(|e| file_error_context!("Failed to read input", path.display(), e))
}

/// Resolve the directory used for config lookup
pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| io_error(format!("Failed to get current directory: {e}")))
}

/// Strings print raw; everything else prints as compact JSON
pub fn render_value(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Ok(serde_json::to_string(other)?),
    }
}

/// Serialize structured output, always ending with a newline
pub fn render_structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(value)?)),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
    }
}
