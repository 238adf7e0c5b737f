//! Path normalization utilities.
//!
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `expand_path` - `~` expansion for user-supplied paths

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Expand a leading `~` to the home directory.
///
/// Non-UTF-8 paths are returned unchanged.
pub fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("relative/path/file.html"));
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("relative/path/file.html"));
    }

    #[test]
    fn test_normalize_path_existing() {
        let dir = tempfile::TempDir::new().unwrap();
        let dotted = dir.path().join(".");
        assert_eq!(normalize_path(&dotted), normalize_path(dir.path()));
    }

    #[test]
    fn test_expand_path_plain() {
        assert_eq!(expand_path(Path::new("_site")), PathBuf::from("_site"));
    }

    #[test]
    fn test_expand_path_tilde() {
        let expanded = expand_path(Path::new("~/blog/_site"));
        assert!(!expanded.starts_with("~") || std::env::var_os("HOME").is_none());
        assert!(expanded.ends_with("blog/_site"));
    }
}
