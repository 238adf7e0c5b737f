//! Terminal output: tagged log lines and an in-place page counter.
//!
//! ```ignore
//! log!("run"; "decorating {} pages", count);
//! debug!("run"; "{}: 2 headings", path.display()); // only with --verbose
//!
//! let progress = ProgressLine::new("run", "pages", 42);
//! progress.inc();
//! progress.finish();
//! ```

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
use parking_lot::Mutex;
use std::{
    io::{StdoutLock, Write, stdout},
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set while a [`ProgressLine`] owns the last terminal line.
static PROGRESS_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Turn on `debug!` output for the rest of the process.
pub fn enable_verbose() {
    VERBOSE.store(true, Ordering::SeqCst);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// `log!("tag"; "format", args..)`
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Like `log!`, printed only with `--verbose`.
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

pub fn log(module: &str, message: &str) {
    let mut out = stdout().lock();
    if PROGRESS_ACTIVE.load(Ordering::SeqCst) {
        clear_line(&mut out);
    }
    writeln!(out, "{} {message}", tag(module)).ok();
    out.flush().ok();
}

fn tag(module: &str) -> String {
    let tag = format!("[{module}]");
    match module {
        "run" | "scan" => tag.bright_blue().bold().to_string(),
        "done" => tag.bright_green().bold().to_string(),
        "error" => tag.bright_red().bold().to_string(),
        _ => tag.bright_yellow().bold().to_string(),
    }
}

fn clear_line(out: &mut StdoutLock<'_>) {
    execute!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
}

/// `[run] pages(42/69)`, redrawn in place as workers call [`inc`](Self::inc).
///
/// Log lines printed meanwhile clear the counter first; the next `inc`
/// redraws it below them.
pub struct ProgressLine {
    label: &'static str,
    name: &'static str,
    total: usize,
    done: AtomicUsize,
    redraw: Mutex<()>,
}

impl ProgressLine {
    pub fn new(label: &'static str, name: &'static str, total: usize) -> Self {
        PROGRESS_ACTIVE.store(true, Ordering::SeqCst);
        let progress = Self {
            label,
            name,
            total,
            done: AtomicUsize::new(0),
            redraw: Mutex::new(()),
        };
        progress.draw(false);
        progress
    }

    /// Count one finished item. A redraw already in progress wins, so
    /// workers never wait on the terminal.
    pub fn inc(&self) {
        self.done.fetch_add(1, Ordering::Relaxed);
        if let Some(_guard) = self.redraw.try_lock() {
            self.draw(false);
        }
    }

    fn line(&self) -> String {
        format!(
            "{} {}({}/{})",
            tag(self.label),
            self.name,
            self.done.load(Ordering::Relaxed),
            self.total
        )
    }

    fn draw(&self, newline: bool) {
        let mut out = stdout().lock();
        clear_line(&mut out);
        if newline {
            writeln!(out, "{}", self.line()).ok();
        } else {
            write!(out, "{}", self.line()).ok();
        }
        out.flush().ok();
    }

    /// Leave the final count on its own line.
    pub fn finish(self) {
        PROGRESS_ACTIVE.store(false, Ordering::SeqCst);
        {
            let _guard = self.redraw.lock();
            self.draw(true);
        }
        std::mem::forget(self);
    }
}

impl Drop for ProgressLine {
    // Not finished: wipe the partial count instead of leaving it behind.
    fn drop(&mut self) {
        PROGRESS_ACTIVE.store(false, Ordering::SeqCst);
        let mut out = stdout().lock();
        clear_line(&mut out);
        out.flush().ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_verbose() {
        enable_verbose();
        assert!(is_verbose());
    }

    #[test]
    fn test_progress_counts() {
        let progress = ProgressLine::new("run", "pages", 3);
        progress.inc();
        progress.inc();
        assert_eq!(progress.done.load(Ordering::Relaxed), 2);
        assert!(progress.line().contains("pages(2/3)"));
        progress.finish();
    }
}
