//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Extract the path component of a site URL, without surrounding slashes.
///
/// Returns `None` if the URL doesn't parse.
///
/// ```ignore
/// extract_url_path("https://example.github.io/blog/") -> Some("blog")
/// extract_url_path("https://example.com")             -> Some("")
/// extract_url_path("blog")                            -> None
/// ```
pub fn extract_url_path(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;
    Some(parsed.path().trim_matches('/').to_string())
}

/// Find `config_name` in `start` or any of its ancestors.
///
/// An absolute `config_name` is returned as-is when it exists.
///
/// ```text
/// /home/user/blog/_site/posts/  ← start
/// /home/user/blog/decor.toml    ← found
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_extract_url_path() {
        assert_eq!(
            extract_url_path("https://example.github.io/blog/"),
            Some("blog".to_string())
        );
        assert_eq!(
            extract_url_path("https://example.com:8080/a/b?q=1#frag"),
            Some("a/b".to_string())
        );
        assert_eq!(extract_url_path("https://example.com"), Some(String::new()));
        assert_eq!(extract_url_path("invalid-url"), None);
    }

    #[test]
    fn test_find_config_file_in_ancestor() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("_site/posts");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("decor.toml"), "").unwrap();

        let found = find_config_file(Path::new("decor.toml"), &nested).unwrap();
        assert_eq!(found, dir.path().join("decor.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let dir = TempDir::new().unwrap();
        assert!(find_config_file(Path::new("no-such-decor-config.toml"), dir.path()).is_none());
    }
}
