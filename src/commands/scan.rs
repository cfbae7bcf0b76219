//! Scan command implementation
//!
//! Walks a directory and prints one summary record per matching document.

use std::path::Path;

use mdmatter::config::{Config, OutputFormat};
use mdmatter::error::cli::scan_failed;
use mdmatter::error::fs::{io_error, not_found};
use mdmatter::{FrontmatterParser, Result, Value};
use serde::Serialize;
use walkdir::WalkDir;

use super::helpers::read_input;
use crate::cli::ScanArgs;

/// Summary of one scanned document
#[derive(Debug, Serialize)]
pub struct ScanEntry {
    pub path: String,
    pub keys: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub body_bytes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn run(config: &Config, args: ScanArgs) -> Result<()> {
    let parser = FrontmatterParser::with_strict(args.strict || config.strict);
    let entries = collect(config, parser, &args.dir)?;

    match args.format.unwrap_or(config.format) {
        OutputFormat::Json => {
            for entry in &entries {
                println!("{}", serde_json::to_string(entry)?);
            }
        }
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&entries)?),
    }

    let failed = entries.iter().filter(|e| e.error.is_some()).count();
    if failed > 0 {
        return Err(scan_failed(failed, entries.len()));
    }
    Ok(())
}

fn collect(config: &Config, parser: FrontmatterParser, dir: &Path) -> Result<Vec<ScanEntry>> {
    if !dir.is_dir() {
        return Err(not_found(dir.display().to_string()));
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| io_error(format!("Failed to walk directory: {e}")))?;
        let path = entry.path();
        if !entry.file_type().is_file() || !config.matches_extension(path) {
            tracing::trace!(path = %path.display(), "skipping");
            continue;
        }
        entries.push(summarize(parser, dir, path));
    }
    tracing::debug!(count = entries.len(), dir = %dir.display(), "scanned documents");
    Ok(entries)
}

fn summarize(parser: FrontmatterParser, root: &Path, path: &Path) -> ScanEntry {
    let relative = path.strip_prefix(root).unwrap_or(path).display().to_string();
    let parsed = read_input(path).and_then(|content| parser.parse(&content));
    match parsed {
        Ok(document) => ScanEntry {
            path: relative,
            keys: document.metadata().keys().map(str::to_string).collect(),
            title: document
                .get("title")
                .and_then(Value::as_str)
                .map(str::to_string),
            body_bytes: document.body().len(),
            error: None,
        },
        Err(err) => ScanEntry {
            path: relative,
            keys: Vec::new(),
            title: None,
            body_bytes: 0,
            error: Some(err.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        std::fs::create_dir_all(root.join("posts")).unwrap();
        std::fs::write(root.join("a.md"), "---\ntitle: A\n---\nbody").unwrap();
        std::fs::write(root.join("posts/b.markdown"), "no frontmatter").unwrap();
        std::fs::write(root.join("posts/c.md"), "---\nbroken: [\n---\n").unwrap();
        std::fs::write(root.join("notes.txt"), "---\ntitle: skip\n---\n").unwrap();
        temp
    }

    #[test]
    fn test_collect_lenient() {
        let temp = tree();
        let entries = collect(&Config::default(), FrontmatterParser::new(), temp.path()).unwrap();
        let paths: Vec<_> = entries.iter().map(|e| e.path.replace('\\', "/")).collect();
        assert_eq!(paths, vec!["a.md", "posts/b.markdown", "posts/c.md"]);
        assert_eq!(entries[0].title.as_deref(), Some("A"));
        assert_eq!(entries[0].keys, vec!["title"]);
        assert!(entries[1].keys.is_empty());
        assert!(entries.iter().all(|e| e.error.is_none()));
    }

    #[test]
    fn test_collect_strict_records_errors() {
        let temp = tree();
        let parser = FrontmatterParser::with_strict(true);
        let entries = collect(&Config::default(), parser, temp.path()).unwrap();
        let failed: Vec<_> = entries.iter().filter(|e| e.error.is_some()).collect();
        assert_eq!(failed.len(), 1);
        assert!(failed[0].path.ends_with("c.md"));
    }

    #[test]
    fn test_collect_missing_directory() {
        let temp = TempDir::new().unwrap();
        let result = collect(
            &Config::default(),
            FrontmatterParser::new(),
            &temp.path().join("missing"),
        );
        assert!(result.is_err());
    }
}
