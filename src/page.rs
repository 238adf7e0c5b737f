//! Decorating a single rendered page on disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::decorate::{DecorateStats, Decorators};

/// What to do with a page after decorating it in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// Decorate and write back.
    Write,
    /// Decorate, but leave the file alone.
    DryRun,
    /// Count targets only.
    Scan,
}

/// Outcome of processing one page.
#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub stats: DecorateStats,
    pub written: bool,
}

/// Decorate the page at `path`.
///
/// The file is rewritten only in [`PageMode::Write`] and only when at least one
/// element was decorated; untouched pages keep their exact bytes.
pub fn process_page(path: &Path, decorators: &Decorators, mode: PageMode) -> Result<PageReport> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let context = || format!("Failed to decorate {}", path.display());
    let (output, stats) = match mode {
        PageMode::Scan => (None, decorators.scan(&html).with_context(context)?),
        PageMode::Write | PageMode::DryRun => {
            let (output, stats) = decorators.run(&html).with_context(context)?;
            (Some(output), stats)
        }
    };

    let written = mode == PageMode::Write && !stats.is_empty();
    if written && let Some(output) = output {
        fs::write(path, output).with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(PageReport {
        path: path.to_path_buf(),
        stats,
        written,
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DecorConfig;
    use tempfile::TempDir;

    const POST: &str = "<!DOCTYPE html>\n<html><body><div class=\"post-content\"><h2 id=\"a\">A</h2></div></body></html>\n";

    fn decorators() -> Decorators {
        let mut config = DecorConfig::default();
        config.site.sync_path_prefix();
        Decorators::from_config(&config).unwrap()
    }

    fn write_page(dir: &TempDir, name: &str, html: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, html).unwrap();
        path
    }

    #[test]
    fn test_write_mode_rewrites_page() {
        let dir = TempDir::new().unwrap();
        let path = write_page(&dir, "post.html", POST);

        let report = process_page(&path, &decorators(), PageMode::Write).unwrap();
        assert!(report.written);
        assert_eq!(report.stats.headings, 1);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "<!DOCTYPE html>\n<html><body><div class=\"post-content\"><h2 id=\"a\"><a href=\"#a\">A</a></h2></div></body></html>\n"
        );
    }

    #[test]
    fn test_page_without_matches_untouched() {
        let dir = TempDir::new().unwrap();
        let html = "<html><body><p class='intro'>Hi</p></body></html>";
        let path = write_page(&dir, "index.html", html);

        let report = process_page(&path, &decorators(), PageMode::Write).unwrap();
        assert!(!report.written);
        assert_eq!(fs::read_to_string(&path).unwrap(), html);
    }

    #[test]
    fn test_dry_run_and_scan_do_not_write() {
        let dir = TempDir::new().unwrap();
        let path = write_page(&dir, "post.html", POST);

        let dry = process_page(&path, &decorators(), PageMode::DryRun).unwrap();
        let scan = process_page(&path, &decorators(), PageMode::Scan).unwrap();

        assert!(!dry.written && !scan.written);
        assert_eq!(dry.stats, scan.stats);
        assert_eq!(fs::read_to_string(&path).unwrap(), POST);
    }

    #[test]
    fn test_page_with_inline_script() {
        let dir = TempDir::new().unwrap();
        let html = "<html><head><script>if (a<b && c>d) { x = '</p>'; }</script></head><body><div class=\"post-content\"><h2 id=\"s\">S</h2><style>p>a{color:red}</style></div></body></html>";
        let path = write_page(&dir, "post.html", html);

        process_page(&path, &decorators(), PageMode::Write).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            html.replace("<h2 id=\"s\">S</h2>", "<h2 id=\"s\"><a href=\"#s\">S</a></h2>")
        );
    }

    #[test]
    fn test_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let err = process_page(&dir.path().join("nope.html"), &decorators(), PageMode::Scan)
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_report_json() {
        let report = PageReport {
            path: PathBuf::from("_site/post.html"),
            stats: DecorateStats {
                credits: 1,
                headings: 2,
                anchors: 0,
            },
            written: true,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["path"], "_site/post.html");
        assert_eq!(json["headings"], 2);
        assert_eq!(json["written"], true);
    }
}
