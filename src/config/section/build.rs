//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "_site"                # Rendered site directory (relative to site root)
//! extensions = ["html", "htm"]    # Files treated as pages
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Rendered site directory.
    pub output: PathBuf,

    /// File extensions (without dot) treated as HTML pages.
    pub extensions: Vec<String>,

    /// Report what would change without writing (CLI only).
    #[serde(skip)]
    pub dry: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            output: "_site".into(),
            extensions: vec!["html".into(), "htm".into()],
            dry: false,
        }
    }
}

impl BuildSectionConfig {
    pub const EXTENSIONS: FieldPath = FieldPath::new("build.extensions");

    /// Check whether `path` has one of the configured page extensions.
    pub fn is_page(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.extensions.is_empty() {
            diag.error_with_hint(
                Self::EXTENSIONS,
                "no page extensions configured",
                r#"the default is `["html", "htm"]`"#,
            );
        }
        if self.extensions.iter().any(|ext| ext.starts_with('.')) {
            diag.warn(Self::EXTENSIONS, "extensions are matched without the leading dot");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_page() {
        let build = BuildSectionConfig::default();
        assert!(build.is_page(Path::new("_site/posts/a.html")));
        assert!(build.is_page(Path::new("index.HTM")));
        assert!(!build.is_page(Path::new("feed.xml")));
        assert!(!build.is_page(Path::new("README")));
    }

    #[test]
    fn test_validate_empty_extensions() {
        let build = BuildSectionConfig {
            extensions: vec![],
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        build.validate(&mut diag);
        assert!(!diag.errors().is_empty());
    }
}
