//! Common utilities shared across CLI commands.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use jwalk::WalkDir;
use rustc_hash::FxHashSet;

use crate::config::BuildSectionConfig;
use crate::utils::path::{expand_path, normalize_path};

/// Collect the pages to decorate.
///
/// With no `paths`, every page under `output` is collected. Otherwise each path
/// may be a page file or a directory to walk. Relative paths are tried against
/// the working directory first, then against `output`. `-` reads paths from
/// stdin, one per line.
pub fn collect_pages(
    paths: &[PathBuf],
    output: &Path,
    build: &BuildSectionConfig,
) -> Result<Vec<PathBuf>> {
    let paths: Vec<PathBuf> = if paths.len() == 1 && paths[0].as_os_str() == "-" {
        read_paths(io::stdin().lock())?
    } else {
        paths.to_vec()
    };

    if paths.is_empty() {
        if !output.is_dir() {
            bail!("Output directory not found: {}", output.display());
        }
        return Ok(walk_pages(output, build));
    }

    let mut seen = FxHashSet::default();
    let mut pages = Vec::new();
    for path in &paths {
        let resolved = resolve_path(path, output);

        let found = if resolved.is_file() {
            if !build.is_page(&resolved) {
                bail!("Not a page: {}", path.display());
            }
            vec![resolved]
        } else if resolved.is_dir() {
            walk_pages(&resolved, build)
        } else {
            bail!(
                "Path not found: {}\n  Tried:\n    - {}\n    - {}",
                path.display(),
                path.display(),
                output.join(path).display()
            );
        };

        for page in found {
            let page = normalize_path(&page);
            if seen.insert(page.clone()) {
                pages.push(page);
            }
        }
    }

    Ok(pages)
}

/// Expand `~`, then resolve against cwd, falling back to `output`.
fn resolve_path(path: &Path, output: &Path) -> PathBuf {
    let path = expand_path(path);
    if path.is_absolute() || path.exists() {
        return path;
    }
    let in_output = output.join(&path);
    if in_output.exists() { in_output } else { path }
}

/// Walk `dir` in parallel, keeping files with a page extension. Sorted for
/// stable output.
fn walk_pages(dir: &Path, build: &BuildSectionConfig) -> Vec<PathBuf> {
    let mut pages: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| build.is_page(p))
        .collect();
    pages.sort();
    pages
}

/// Paths listed one per line, as piped to `decor run -`. Blank lines are
/// skipped.
fn read_paths(reader: impl BufRead) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(PathBuf::from(trimmed));
        }
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn site() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("posts/2024")).unwrap();
        fs::create_dir_all(root.join("assets")).unwrap();
        fs::write(root.join("index.html"), "").unwrap();
        fs::write(root.join("posts/2024/a.html"), "").unwrap();
        fs::write(root.join("posts/2024/b.htm"), "").unwrap();
        fs::write(root.join("assets/style.css"), "").unwrap();
        fs::write(root.join("feed.xml"), "").unwrap();
        dir
    }

    #[test]
    fn test_collect_whole_output() {
        let dir = site();
        let pages = collect_pages(&[], dir.path(), &BuildSectionConfig::default()).unwrap();
        assert_eq!(pages.len(), 3);
        assert!(pages.iter().all(|p| p.extension().is_some_and(|e| e == "html" || e == "htm")));
    }

    #[test]
    fn test_collect_paths_relative_to_output_dedup() {
        let dir = site();
        let paths = [PathBuf::from("posts"), PathBuf::from("posts/2024/a.html")];
        let pages = collect_pages(&paths, dir.path(), &BuildSectionConfig::default()).unwrap();
        assert_eq!(pages.len(), 2);
    }

    #[test]
    fn test_collect_rejects_non_page_file() {
        let dir = site();
        let paths = [dir.path().join("feed.xml")];
        assert!(collect_pages(&paths, dir.path(), &BuildSectionConfig::default()).is_err());
    }

    #[test]
    fn test_read_paths_skips_blank_lines() {
        let input = Cursor::new("posts/2024/a.html\n\n  index.html  \r\n");
        let paths = read_paths(input).unwrap();
        assert_eq!(
            paths,
            vec![PathBuf::from("posts/2024/a.html"), PathBuf::from("index.html")]
        );
    }

    #[test]
    fn test_piped_paths_resolve_against_output() {
        let dir = site();
        let paths = read_paths(Cursor::new("posts/2024/b.htm\nindex.html\nposts/2024/b.htm\n")).unwrap();
        let pages = collect_pages(&paths, dir.path(), &BuildSectionConfig::default()).unwrap();
        assert_eq!(pages.len(), 2);
        assert!(pages[0].ends_with("posts/2024/b.htm"));
        assert!(pages[1].ends_with("index.html"));
    }

    #[test]
    fn test_collect_missing_output() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("_site");
        let err = collect_pages(&[], &missing, &BuildSectionConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Output directory not found"));
    }
}
