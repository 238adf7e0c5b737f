//! `decor run`: decorate pages in place.

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, bail};
use parking_lot::Mutex;
use rayon::prelude::*;

use super::common::collect_pages;
use crate::config::DecorConfig;
use crate::decorate::{DecorateStats, Decorators};
use crate::logger::ProgressLine;
use crate::page::{PageMode, process_page};
use crate::utils::plural_count;
use crate::{debug, log};

/// Decorate every selected page, attempting all of them before failing.
pub fn run_decorate(config: &DecorConfig, args: &super::RunArgs) -> Result<()> {
    let decorators = Decorators::from_config(config)?;
    if decorators.is_empty() {
        log!("run"; "all decorators disabled, nothing to do");
        return Ok(());
    }

    let pages = collect_pages(&args.decorate.paths, &config.build.output, &config.build)?;
    if pages.is_empty() {
        log!("run"; "no pages found in {}", config.root_relative(&config.build.output).display());
        return Ok(());
    }

    let mode = if config.build.dry {
        PageMode::DryRun
    } else {
        PageMode::Write
    };

    debug!("run"; "{} enabled", plural_count(decorators.len(), "decorator"));
    log!("run"; "decorating {}", plural_count(pages.len(), "page"));

    let total = Mutex::new(DecorateStats::default());
    let written = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);

    let progress = ProgressLine::new("run", "pages", pages.len());
    pages.par_iter().for_each(|path| {
        match process_page(path, &decorators, mode) {
            Ok(report) => {
                if report.written {
                    written.fetch_add(1, Ordering::Relaxed);
                }
                if !report.stats.is_empty() {
                    debug!("run"; "{}: {}", config.root_relative(path).display(), describe(&report.stats));
                }
                *total.lock() += report.stats;
            }
            Err(e) => {
                failed.fetch_add(1, Ordering::Relaxed);
                log!("error"; "{}: {:#}", config.root_relative(path).display(), e);
            }
        }
        progress.inc();
    });
    progress.finish();

    let total = total.into_inner();
    let written = written.into_inner();
    let failed = failed.into_inner();

    let verb = if mode == PageMode::DryRun {
        "would decorate"
    } else {
        "decorated"
    };
    log!("done"; "{verb} {} ({}), {} written", describe(&total), plural_count(pages.len(), "page"), written);

    if failed > 0 {
        bail!("{} failed", plural_count(failed, "page"));
    }
    Ok(())
}

/// `1 credit, 3 headings, 0 anchors`
pub(super) fn describe(stats: &DecorateStats) -> String {
    format!(
        "{}, {}, {}",
        plural_count(stats.credits, "credit"),
        plural_count(stats.headings, "heading"),
        plural_count(stats.anchors, "anchor"),
    )
}
