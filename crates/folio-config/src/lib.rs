//! Configuration management for Folio.
//!
//! Parses `folio.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `site.title` and `site.footer` support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override build output directory.
    pub output_dir: Option<PathBuf>,
    /// Override site title.
    pub title: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "folio.toml";

/// Deepest heading level HTML supports.
const MAX_HEADING_LEVEL: u8 = 6;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site-wide shell settings.
    pub site: SiteConfig,
    /// Documentation paths (relative strings from TOML).
    docs: DocsConfigRaw,
    /// Table of contents settings.
    pub toc: TocConfig,
    /// Explicit navigation entries. Empty means derive from pages.
    pub nav: Vec<NavEntry>,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site shell configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, appended to page titles and shown in the navigation header.
    pub title: String,
    /// Document language (`<html lang>`).
    pub lang: String,
    /// Footer text. Rendered escaped inside `footer-inner`.
    pub footer: Option<String>,
    /// Stylesheet URLs linked from `<head>`.
    pub stylesheets: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            lang: "en".to_owned(),
            footer: None,
            stylesheets: Vec::new(),
        }
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    output_dir: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory for markdown files.
    pub source_dir: PathBuf,
    /// Directory rendered HTML is written to.
    pub output_dir: PathBuf,
}

/// Heading range included in the table of contents.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct TocConfig {
    /// Shallowest heading level listed.
    pub min_level: u8,
    /// Deepest heading level listed.
    pub max_level: u8,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            min_level: 2,
            max_level: 3,
        }
    }
}

/// Explicit navigation entry.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Link text.
    pub title: String,
    /// Link target.
    pub href: String,
    /// Nested entries.
    #[serde(default)]
    pub children: Vec<NavEntry>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.footer`").
        field: String,
        /// Error message (e.g., "${`YEAR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `folio.toml` in current directory and parents.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.docs_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(title) = &settings.title {
            self.site.title.clone_from(title);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            docs: DocsConfigRaw::default(),
            toc: TocConfig::default(),
            nav: Vec::new(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
                output_dir: base.join("dist"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        self.validate_toc()?;
        for entry in &self.nav {
            validate_nav_entry(entry)?;
        }
        Ok(())
    }

    /// Validate the table of contents heading range.
    fn validate_toc(&self) -> Result<(), ConfigError> {
        let TocConfig {
            min_level,
            max_level,
        } = self.toc;

        if min_level == 0 || max_level > MAX_HEADING_LEVEL {
            return Err(ConfigError::Validation(format!(
                "toc levels must be between 1 and {MAX_HEADING_LEVEL}"
            )));
        }
        if min_level > max_level {
            return Err(ConfigError::Validation(
                "toc.min_level cannot exceed toc.max_level".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.title = expand::expand_env(&self.site.title, "site.title")?;
        if let Some(ref footer) = self.site.footer {
            self.site.footer = Some(expand::expand_env(footer, "site.footer")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "docs"),
            output_dir: resolve(self.docs.output_dir.as_deref(), "dist"),
        };
    }
}

fn validate_nav_entry(entry: &NavEntry) -> Result<(), ConfigError> {
    require_non_empty(&entry.title, "nav.title")?;
    require_non_empty(&entry.href, "nav.href")?;
    entry.children.iter().try_for_each(validate_nav_entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.site.title, "Documentation");
        assert_eq!(config.site.lang, "en");
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs"));
        assert_eq!(config.docs_resolved.output_dir, PathBuf::from("/test/dist"));
        assert_eq!(config.toc, TocConfig::default());
        assert!(config.nav.is_empty());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.site.title, "Documentation");
        assert_eq!(config.toc.min_level, 2);
        assert_eq!(config.toc.max_level, 3);
    }

    #[test]
    fn test_parse_site_config() {
        let toml = r#"
[site]
title = "Handbook"
lang = "de"
footer = "Built with care"
stylesheets = ["/assets/site.css"]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site.title, "Handbook");
        assert_eq!(config.site.lang, "de");
        assert_eq!(config.site.footer.as_deref(), Some("Built with care"));
        assert_eq!(config.site.stylesheets, vec!["/assets/site.css".to_owned()]);
    }

    #[test]
    fn test_parse_nav_entries() {
        let toml = r#"
[[nav]]
title = "Guide"
href = "/guide/"

[[nav.children]]
title = "Setup"
href = "/guide/setup/"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.nav.len(), 1);
        assert_eq!(config.nav[0].title, "Guide");
        assert_eq!(config.nav[0].children[0].href, "/guide/setup/");
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[docs]
source_dir = "content"
output_dir = "public"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/project/content")
        );
        assert_eq!(
            config.docs_resolved.output_dir,
            PathBuf::from("/project/public")
        );
    }

    #[test]
    fn test_validate_rejects_inverted_toc_range() {
        let toml = r"
[toc]
min_level = 4
max_level = 2
";
        let config: Config = toml::from_str(toml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("min_level"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_level() {
        let toml = r"
[toc]
max_level = 7
";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let toml = r#"
[site]
title = "  "
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site.title"));
    }

    #[test]
    fn test_validate_rejects_nav_without_href() {
        let toml = r#"
[[nav]]
title = "Guide"
href = ""
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            output_dir: Some(PathBuf::from("/out")),
            title: Some("Override".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.docs_resolved.output_dir, PathBuf::from("/out"));
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs"));
        assert_eq!(config.site.title, "Override");
    }

    #[test]
    fn test_load_from_file_resolves_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[site]\ntitle = \"Handbook\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site.title, "Handbook");
        assert_eq!(config.docs_resolved.source_dir, dir.path().join("docs"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let result = Config::load(Some(Path::new("/nonexistent/folio.toml")), None);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }
}
