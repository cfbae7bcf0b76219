//! Configuration file handling for mdmatter
//!
//! Settings live in an optional `.mdmatter.yaml`:
//!
//! ```yaml
//! format: json
//! strict: false
//! extensions: [md, markdown]
//! ```
//!
//! Command-line flags override values read from the file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::error::config::{not_found, parse_failed, read_failed};
use crate::frontmatter::FrontmatterParser;

/// File looked up in the working directory when no config path is given
pub const CONFIG_FILE_NAME: &str = ".mdmatter.yaml";

/// Output encoding for structured command output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default output format for `parse` and `scan`
    pub format: OutputFormat,

    /// Report malformed frontmatter instead of treating it as body
    pub strict: bool,

    /// File extensions `scan` considers, without the leading dot
    pub extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            strict: false,
            extensions: vec!["md".to_string(), "markdown".to_string()],
        }
    }
}

impl Config {
    /// Parse configuration from YAML. `origin` names the source in errors.
    pub fn from_yaml(yaml: &str, origin: &str) -> Result<Self> {
        let has_content = yaml.lines().any(|line| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        });
        if !has_content {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| parse_failed(origin, e.to_string()))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, [`CONFIG_FILE_NAME`] in
    /// `dir` is used when present, otherwise defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) if !path.is_file() => return Err(not_found(path.display().to_string())),
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = dir.join(CONFIG_FILE_NAME);
                if !candidate.is_file() {
                    tracing::debug!("no {CONFIG_FILE_NAME} in {}, using defaults", dir.display());
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let origin = path.display().to_string();
        let yaml = std::fs::read_to_string(&path).map_err(|e| read_failed(&origin, e.to_string()))?;
        tracing::debug!(path = %origin, "loaded configuration");
        Self::from_yaml(&yaml, &origin)
    }

    /// Whether `path` has one of the configured extensions (case-insensitive)
    pub fn matches_extension(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.extensions
            .iter()
            .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }

    pub fn parser(&self) -> FrontmatterParser {
        FrontmatterParser::with_strict(self.strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MdmatterError;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.strict);
        assert_eq!(config.extensions, vec!["md", "markdown"]);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml("strict: true\n", "test").unwrap();
        assert!(config.strict);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.extensions.len(), 2);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = "format: yaml\nstrict: true\nextensions: [txt]\n";
        let config = Config::from_yaml(yaml, "test").unwrap();
        assert_eq!(config.format, OutputFormat::Yaml);
        assert_eq!(config.extensions, vec!["txt"]);
        assert!(config.parser().is_strict());
    }

    #[test]
    fn test_empty_or_comment_only_yaml_is_default() {
        assert_eq!(Config::from_yaml("", "test").unwrap(), Config::default());
        assert_eq!(
            Config::from_yaml("# nothing yet\n", "test").unwrap(),
            Config::default()
        );
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = Config::from_yaml("colour: blue\n", "cfg.yaml").unwrap_err();
        assert!(matches!(err, MdmatterError::ConfigParseFailed { ref path, .. } if path == "cfg.yaml"));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yaml");
        let err = Config::load(Some(&missing), temp.path()).unwrap_err();
        assert!(matches!(err, MdmatterError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_from_directory() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE_NAME), "format: yaml\n").unwrap();
        let config = Config::load(None, temp.path()).unwrap();
        assert_eq!(config.format, OutputFormat::Yaml);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        assert_eq!(Config::load(None, temp.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_load_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.yaml");
        std::fs::write(&path, "strict: true\n").unwrap();
        assert!(Config::load(Some(&path), temp.path()).unwrap().strict);
    }

    #[test]
    fn test_matches_extension() {
        let config = Config::from_yaml("extensions: [md, .MDX]\n", "test").unwrap();
        assert!(config.matches_extension(Path::new("post.md")));
        assert!(config.matches_extension(Path::new("post.MD")));
        assert!(config.matches_extension(Path::new("post.mdx")));
        assert!(!config.matches_extension(Path::new("post.txt")));
        assert!(!config.matches_extension(Path::new("README")));
    }
}
