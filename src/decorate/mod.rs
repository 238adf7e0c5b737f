//! Page decorators.
//!
//! Each decorator registers element handlers on a streaming `lol_html`
//! rewriter. Selectors are scoped to the post content container, and every
//! matched element is decorated once as it streams past. Bytes the decorators
//! don't touch (including `<script>` and `<style>` bodies) pass through as
//! written.
//!
//! | Decorator              | Targets                              | Adds                       |
//! |------------------------|--------------------------------------|----------------------------|
//! | [`CreditPrefixer`]     | `.post-content .figure div.credit`   | leading `<strong>` label   |
//! | [`HeadingPermalinker`] | `.post-content h2` .. `h5`           | `<a href="#id">` wrapper   |
//! | [`AnchorIconInserter`] | `.post-content span.anchor`          | `<a href="#id"><img></a>`  |
//!
//! Decorating is not idempotent: running twice over the same page prefixes
//! and wraps twice.

mod anchor;
mod credit;
mod heading;

pub use anchor::AnchorIconInserter;
pub use credit::CreditPrefixer;
pub use heading::HeadingPermalinker;

use anyhow::{Context, Result, bail};
use lol_html::html_content::Element;
use lol_html::{ElementContentHandlers, RewriteStrSettings, Selector, rewrite_str};
use serde::Serialize;
use std::borrow::Cow;
use std::cell::Cell;
use std::ops::AddAssign;

use crate::config::DecorConfig;

/// Which counter a decorator contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoratorKind {
    Credit,
    Heading,
    Anchor,
}

/// A single-pass page transformation.
pub trait Decorator: Send + Sync {
    fn kind(&self) -> DecoratorKind;

    /// Selectors of the elements this decorator handles.
    fn selectors(&self) -> &[String];

    /// Decorate one matched element.
    fn apply(&self, element: &mut Element<'_, '_>);
}

/// Parse a single (non-grouped) selector.
pub fn parse_selector(source: &str) -> Result<Selector> {
    if source.contains(',') {
        bail!("selector groups are not supported: `{source}`");
    }
    source
        .parse::<Selector>()
        .with_context(|| format!("invalid selector `{source}`"))
}

/// Per-decorator counts for one page (or a whole run).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DecorateStats {
    pub credits: usize,
    pub headings: usize,
    pub anchors: usize,
}

impl DecorateStats {
    pub fn record(&mut self, kind: DecoratorKind, count: usize) {
        match kind {
            DecoratorKind::Credit => self.credits += count,
            DecoratorKind::Heading => self.headings += count,
            DecoratorKind::Anchor => self.anchors += count,
        }
    }

    pub fn total(&self) -> usize {
        self.credits + self.headings + self.anchors
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl AddAssign for DecorateStats {
    fn add_assign(&mut self, rhs: Self) {
        self.credits += rhs.credits;
        self.headings += rhs.headings;
        self.anchors += rhs.anchors;
    }
}

/// The enabled decorators, in registration order.
pub struct Decorators {
    list: Vec<Box<dyn Decorator>>,
}

impl Decorators {
    /// Build the enabled decorators from config.
    ///
    /// Every selector is parsed once here so that a bad selector fails the
    /// command before any page is touched.
    pub fn from_config(config: &DecorConfig) -> Result<Self> {
        let decorate = &config.decorate;
        let content = decorate.content.trim();
        let scoped = |target: &str| format!("{content} {}", target.trim());

        let mut list: Vec<Box<dyn Decorator>> = Vec::with_capacity(3);

        if decorate.credit.enable {
            list.push(Box::new(CreditPrefixer::new(
                scoped(&decorate.credit.selector),
                &decorate.credit.tag,
                &decorate.credit.label,
            )));
        }

        if decorate.heading.enable {
            list.push(Box::new(HeadingPermalinker::new(
                content,
                &decorate.heading.levels,
            )));
        }

        if decorate.anchor.enable {
            list.push(Box::new(AnchorIconInserter::new(
                scoped(&decorate.anchor.selector),
                &config.icon_url(),
            )));
        }

        for decorator in &list {
            for selector in decorator.selectors() {
                parse_selector(selector)?;
            }
        }

        Ok(Self::from_list(list))
    }

    pub fn from_list(list: Vec<Box<dyn Decorator>>) -> Self {
        Self { list }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Decorate `html`, returning the rewritten page and per-decorator counts.
    pub fn run(&self, html: &str) -> Result<(String, DecorateStats)> {
        self.rewrite(html, true)
    }

    /// Count what [`run`](Self::run) would touch, without decorating.
    pub fn scan(&self, html: &str) -> Result<DecorateStats> {
        self.rewrite(html, false).map(|(_, stats)| stats)
    }

    fn rewrite(&self, html: &str, apply: bool) -> Result<(String, DecorateStats)> {
        let counts: Vec<Cell<usize>> = self.list.iter().map(|_| Cell::new(0)).collect();

        let mut handlers: Vec<(Cow<'_, Selector>, ElementContentHandlers<'_>)> = Vec::new();
        for (decorator, count) in self.list.iter().zip(&counts) {
            for source in decorator.selectors() {
                let selector = parse_selector(source)?;
                let handler = move |element: &mut Element<'_, '_>| -> lol_html::HandlerResult {
                    count.set(count.get() + 1);
                    if apply {
                        decorator.apply(element);
                    }
                    Ok(())
                };
                handlers.push((
                    Cow::Owned(selector),
                    ElementContentHandlers::default().element(handler),
                ));
            }
        }

        let output = rewrite_str(
            html,
            RewriteStrSettings {
                element_content_handlers: handlers,
                ..RewriteStrSettings::new()
            },
        )?;

        let mut stats = DecorateStats::default();
        for (decorator, count) in self.list.iter().zip(&counts) {
            stats.record(decorator.kind(), count.get());
        }
        Ok((output, stats))
    }
}

// =============================================================================
// Tests
// =============================================================================
