//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://example.github.io/blog"   # path component becomes the base path
//! base_path = "/blog"                       # explicit base path, wins over `url`
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::config::util::extract_url_path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Public site URL.
    pub url: Option<String>,

    /// Base path the site is served under (Jekyll's `baseurl`).
    pub base_path: Option<String>,

    /// Resolved base path without surrounding slashes (internal use only).
    #[serde(skip)]
    pub path_prefix: String,
}

impl SiteSectionConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");

    /// Derive `path_prefix` from `base_path`, falling back to the url path.
    pub fn sync_path_prefix(&mut self) {
        let prefix = match (&self.base_path, &self.url) {
            (Some(base), _) => base.trim_matches('/').to_string(),
            (None, Some(url)) => extract_url_path(url).unwrap_or_default(),
            (None, None) => String::new(),
        };
        self.path_prefix = prefix;
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url) = &self.url
            && url::Url::parse(url).is_err()
        {
            diag.error_with_hint(
                Self::URL,
                format!("`{url}` is not a valid URL"),
                "use an absolute URL such as `https://example.github.io/blog`",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_from_url() {
        let mut site = SiteSectionConfig {
            url: Some("https://example.github.io/blog/".into()),
            ..Default::default()
        };
        site.sync_path_prefix();
        assert_eq!(site.path_prefix, "blog");
    }

    #[test]
    fn test_base_path_wins() {
        let mut site = SiteSectionConfig {
            url: Some("https://example.github.io/blog".into()),
            base_path: Some("/other/".into()),
            ..Default::default()
        };
        site.sync_path_prefix();
        assert_eq!(site.path_prefix, "other");
    }

    #[test]
    fn test_invalid_url() {
        let site = SiteSectionConfig {
            url: Some("not a url".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(!diag.errors().is_empty());
    }
}
