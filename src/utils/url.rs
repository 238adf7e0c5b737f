//! Site URL helpers.

/// Resolve a site-relative path against the site base path.
///
/// Mirrors Jekyll's `relative_url` filter: `prefix` is the base path without
/// surrounding slashes (empty for a root site). Absolute URLs, protocol-relative
/// URLs and `data:` URIs pass through unchanged.
///
/// ```ignore
/// relative_url("", "/assets/a.png")     -> "/assets/a.png"
/// relative_url("blog", "assets/a.png")  -> "/blog/assets/a.png"
/// relative_url("blog", "https://x/a")   -> "https://x/a"
/// ```
pub fn relative_url(prefix: &str, path: &str) -> String {
    if is_absolute_url(path) {
        return path.to_string();
    }

    let prefix = prefix.trim_matches('/');
    let path = path.trim_start_matches('/');
    if prefix.is_empty() {
        format!("/{path}")
    } else {
        format!("/{prefix}/{path}")
    }
}

/// Check for a scheme (`https:`, `data:`) or protocol-relative (`//`) URL.
fn is_absolute_url(path: &str) -> bool {
    path.starts_with("//") || url::Url::parse(path).is_ok()
}
