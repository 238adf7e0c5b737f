//! Config field paths for diagnostics.

use owo_colors::OwoColorize;
use std::fmt;

/// Dotted path of a config field, e.g. `decorate.credit.selector`.
///
/// Section structs expose their paths as associated constants so that
/// diagnostics never drift from the TOML layout:
///
/// ```ignore
/// diag.error(DecorateSectionConfig::CREDIT_SELECTOR, "invalid selector");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
