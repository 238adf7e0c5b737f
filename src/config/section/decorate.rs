//! `[decorate]` section configuration.
//!
//! Selects the post content container and configures each decorator.
//! Decorator selectors are relative to `content`.
//!
//! # Example
//!
//! ```toml
//! [decorate]
//! content = ".post-content"
//!
//! [decorate.credit]
//! enable = true
//! selector = ".figure div.credit"
//! label = "Image credit: "
//! tag = "strong"
//!
//! [decorate.heading]
//! enable = true
//! levels = [2, 3, 4, 5]
//!
//! [decorate.anchor]
//! enable = true
//! selector = "span.anchor"
//! icon = "/assets/img/meta/permalink.png"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::decorate::parse_selector;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorateSectionConfig {
    /// Selector for the post content container.
    pub content: String,

    /// Image credit label settings.
    pub credit: CreditConfig,

    /// Heading permalink settings.
    pub heading: HeadingConfig,

    /// Gutter anchor icon settings.
    pub anchor: AnchorConfig,
}

impl Default for DecorateSectionConfig {
    fn default() -> Self {
        Self {
            content: ".post-content".into(),
            credit: CreditConfig::default(),
            heading: HeadingConfig::default(),
            anchor: AnchorConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditConfig {
    pub enable: bool,
    pub selector: String,
    /// Label text (plain text, escaped on insertion).
    pub label: String,
    /// Element wrapping the label.
    pub tag: String,
}

impl Default for CreditConfig {
    fn default() -> Self {
        Self {
            enable: true,
            selector: ".figure div.credit".into(),
            label: "Image credit: ".into(),
            tag: "strong".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingConfig {
    pub enable: bool,
    /// Heading levels to permalink, processed in this order.
    pub levels: Vec<u8>,
}

impl Default for HeadingConfig {
    fn default() -> Self {
        Self {
            enable: true,
            levels: vec![2, 3, 4, 5],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    pub enable: bool,
    pub selector: String,
    /// Site-relative icon path (or absolute URL).
    pub icon: String,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            enable: true,
            selector: "span.anchor".into(),
            icon: "/assets/img/meta/permalink.png".into(),
        }
    }
}

impl DecorateSectionConfig {
    pub const CONTENT: FieldPath = FieldPath::new("decorate.content");
    pub const CREDIT_SELECTOR: FieldPath = FieldPath::new("decorate.credit.selector");
    pub const CREDIT_TAG: FieldPath = FieldPath::new("decorate.credit.tag");
    pub const HEADING_LEVELS: FieldPath = FieldPath::new("decorate.heading.levels");
    pub const ANCHOR_SELECTOR: FieldPath = FieldPath::new("decorate.anchor.selector");
    pub const ANCHOR_ICON: FieldPath = FieldPath::new("decorate.anchor.icon");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_selector(&self.content, Self::CONTENT, diag);

        if self.credit.enable {
            check_selector(&self.credit.selector, Self::CREDIT_SELECTOR, diag);
            let tag = &self.credit.tag;
            if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                diag.error_with_hint(
                    Self::CREDIT_TAG,
                    format!("`{tag}` is not a valid tag name"),
                    "use an element name such as `strong` or `em`",
                );
            }
        }

        if self.heading.enable {
            if self.heading.levels.is_empty() {
                diag.warn(
                    Self::HEADING_LEVELS,
                    "no heading levels configured, set `enable = false` instead",
                );
            }
            for level in &self.heading.levels {
                if !(1..=6).contains(level) {
                    diag.error_with_hint(
                        Self::HEADING_LEVELS,
                        format!("`{level}` is not a heading level"),
                        "heading levels range from 1 to 6",
                    );
                }
            }
        }

        if self.anchor.enable {
            check_selector(&self.anchor.selector, Self::ANCHOR_SELECTOR, diag);
            if self.anchor.icon.trim().is_empty() {
                diag.error(Self::ANCHOR_ICON, "icon path is empty");
            }
        }
    }
}

fn check_selector(source: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if let Err(e) = parse_selector(source) {
        diag.error_with_hint(
            field,
            format!("{e:#}"),
            "use a single CSS selector, groups joined with `,` are not accepted",
        );
    }
}
