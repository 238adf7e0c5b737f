//! `decor scan`: report decorator targets without writing.

use std::path::PathBuf;

use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use rayon::prelude::*;

use super::ScanArgs;
use super::common::collect_pages;
use super::run::describe;
use crate::config::DecorConfig;
use crate::decorate::{DecorateStats, Decorators};
use crate::log;
use crate::page::{PageMode, PageReport, process_page};
use crate::utils::plural_count;

/// Scan the selected pages and print a table, or JSON with `--json`.
///
/// Unreadable pages are logged and skipped; the command fails after the
/// report for the remaining pages is printed.
pub fn run_scan(config: &DecorConfig, args: &ScanArgs) -> Result<()> {
    let decorators = Decorators::from_config(config)?;
    let pages = collect_pages(&args.decorate.paths, &config.build.output, &config.build)?;

    let (reports, failed) = scan_pages(config, &decorators, &pages);

    if args.json {
        println!("{}", format_json(&reports, args.pretty)?);
    } else {
        print_table(config, &reports);
    }

    if failed > 0 {
        bail!("{} failed", plural_count(failed, "page"));
    }
    Ok(())
}

/// Scan in parallel. Reports keep page order; errors are logged in page
/// order and counted.
fn scan_pages(
    config: &DecorConfig,
    decorators: &Decorators,
    pages: &[PathBuf],
) -> (Vec<PageReport>, usize) {
    let results: Vec<_> = pages
        .par_iter()
        .map(|path| process_page(path, decorators, PageMode::Scan))
        .collect();

    let mut reports = Vec::with_capacity(results.len());
    let mut failed = 0;
    for (path, result) in pages.iter().zip(results) {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                failed += 1;
                log!("error"; "{}: {:#}", config.root_relative(path).display(), e);
            }
        }
    }
    (reports, failed)
}

fn format_json(reports: &[PageReport], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(reports)?
    } else {
        serde_json::to_string(reports)?
    };
    Ok(json)
}

fn print_table(config: &DecorConfig, reports: &[PageReport]) {
    let mut total = DecorateStats::default();
    let mut matched = 0;

    for report in reports {
        total += report.stats;
        if report.stats.is_empty() {
            continue;
        }
        matched += 1;
        println!(
            "{:>4} {:>4} {:>4}  {}",
            report.stats.credits,
            report.stats.headings,
            report.stats.anchors,
            config.root_relative(&report.path).display().dimmed()
        );
    }

    log!(
        "scan";
        "{} in {} of {}",
        describe(&total),
        matched,
        plural_count(reports.len(), "page")
    );
}
