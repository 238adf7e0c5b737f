//! Configuration management for `decor.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── decorate   # [decorate] and sub-sections
//! │   └── site       # [site]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # DecorConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section               | Purpose                                   |
//! |-----------------------|-------------------------------------------|
//! | `[site]`              | Site url / base path for icon urls        |
//! | `[build]`             | Rendered site directory, page extensions  |
//! | `[decorate]`          | Post content container selector           |
//! | `[decorate.credit]`   | Image credit label                        |
//! | `[decorate.heading]`  | Heading permalinks                        |
//! | `[decorate.anchor]`   | Gutter anchor icons                       |
//!
//! The config file is optional: without one every section uses its defaults,
//! which match the markup Jekyll + kramdown produce for the blog theme.

pub mod section;
pub mod types;
mod util;

pub use section::{BuildSectionConfig, DecorateSectionConfig, SiteSectionConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands, DecorateArgs},
    debug, log,
    utils::{path::expand_path, url::relative_url},
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::find_config_file;

/// Default config file name, searched upward from the working directory.
pub const CONFIG_FILE: &str = "decor.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing decor.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecorConfig {
    /// Absolute path to the config file, empty when running on defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file, or cwd
    #[serde(skip)]
    pub root: PathBuf,

    /// Site url settings
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Rendered site settings
    #[serde(default)]
    pub build: BuildSectionConfig,

    /// Decorator settings
    #[serde(default)]
    pub decorate: DecorateSectionConfig,
}

impl DecorConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// An explicit `--config` must exist. Without it, `decor.toml` is searched
    /// upward from cwd, and defaults are used if none is found.
    pub fn load(cli: &Cli) -> Result<Self> {
        if cli.command.decorate_args().verbose {
            crate::logger::enable_verbose();
        }

        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let found = match &cli.config {
            Some(explicit) => {
                let path = expand_path(explicit);
                let path = if path.is_absolute() { path } else { cwd.join(path) };
                if !path.is_file() {
                    return Err(ConfigError::Io(
                        path,
                        std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
                    )
                    .into());
                }
                Some(path)
            }
            None => find_config_file(Path::new(CONFIG_FILE), &cwd),
        };

        let mut config = match found {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = crate::utils::path::normalize_path(&path);
                config.root = config
                    .config_path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| cwd.clone());
                debug!("config"; "loaded {}", config.config_path.display());
                config
            }
            None => {
                debug!("config"; "no {} found, using defaults", CONFIG_FILE);
                Self {
                    root: cwd,
                    ..Self::default()
                }
            }
        };

        config.finalize(cli);
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI overrides and resolve derived values.
    pub(crate) fn finalize(&mut self, cli: &Cli) {
        self.apply_command_options(cli);
        if let Some(output) = &cli.output {
            self.build.output = expand_path(output);
        }
        self.normalize_paths();
        self.site.sync_path_prefix();
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get path relative to the site root, for display
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Final `src` of the gutter anchor icon, with the site base path applied.
    pub fn icon_url(&self) -> String {
        relative_url(&self.site.path_prefix, &self.decorate.anchor.icon)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        self.apply_decorate_args(cli.command.decorate_args());
        if let Commands::Run { args } = &cli.command {
            self.build.dry = args.dry;
        }
    }

    /// Apply decorator toggles and site url from CLI.
    fn apply_decorate_args(&mut self, args: &DecorateArgs) {
        Self::update_option(&mut self.decorate.credit.enable, args.credit.as_ref());
        Self::update_option(&mut self.decorate.heading.enable, args.heading.as_ref());
        Self::update_option(&mut self.decorate.anchor.enable, args.anchor.as_ref());

        // Override site URL if provided via CLI
        // path_prefix is derived from it in sync_path_prefix()
        if let Some(ref url) = args.site_url {
            self.site.url = Some(url.clone());
            self.site.base_path = None;
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Resolve the output directory against the root.
    fn normalize_paths(&mut self) {
        let output = self.root.join(&self.build.output);
        self.build.output = crate::utils::path::normalize_path(&output);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration, collecting all errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.build.validate(&mut diag);
        self.decorate.validate(&mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> DecorConfig {
    let (parsed, ignored) = DecorConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_invalid_toml_rejected() {
        let err = DecorConfig::parse_with_ignored("[decorate\ncontent = \".x\"").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_default_config() {
        let config = DecorConfig::default();
        assert_eq!(config.decorate.content, ".post-content");
        assert_eq!(config.decorate.credit.label, "Image credit: ");
        assert_eq!(config.decorate.heading.levels, vec![2, 3, 4, 5]);
        assert_eq!(config.decorate.anchor.icon, "/assets/img/meta/permalink.png");
        assert_eq!(config.build.output, PathBuf::from("_site"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_sections() {
        let config = test_parse_config(
            r#"
[site]
url = "https://example.github.io/blog"

[build]
output = "public"

[decorate]
content = "article.post"

[decorate.credit]
label = "Photo: "

[decorate.heading]
levels = [2, 3]

[decorate.anchor]
enable = false
"#,
        );
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.decorate.content, "article.post");
        assert_eq!(config.decorate.credit.label, "Photo: ");
        assert_eq!(config.decorate.credit.tag, "strong");
        assert_eq!(config.decorate.heading.levels, vec![2, 3]);
        assert!(!config.decorate.anchor.enable);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[decorate]\ncontent = \".post-content\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = DecorConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.decorate.content, ".post-content");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_icon_url_uses_base_path() {
        let mut config = test_parse_config("[site]\nurl = \"https://example.github.io/blog/\"");
        config.site.sync_path_prefix();
        assert_eq!(config.icon_url(), "/blog/assets/img/meta/permalink.png");

        let mut config = DecorConfig::default();
        config.site.sync_path_prefix();
        assert_eq!(config.icon_url(), "/assets/img/meta/permalink.png");
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "decor",
            "run",
            "--dry",
            "--heading=false",
            "--site-url",
            "https://example.org/sub",
        ]);
        let mut config = DecorConfig::default();
        config.finalize(&cli);

        assert!(config.build.dry);
        assert!(!config.decorate.heading.enable);
        assert!(config.decorate.credit.enable);
        assert_eq!(config.site.path_prefix, "sub");
        assert!(config.build.output.is_absolute());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut config = DecorConfig::default();
        config.decorate.content = String::new();
        config.decorate.heading.levels = vec![9];
        let err = config.validate().unwrap_err();
        let err = err.downcast::<ConfigError>().unwrap();
        match err {
            ConfigError::Diagnostics(diag) => assert_eq!(diag.errors().len(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }
}
