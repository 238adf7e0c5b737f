//! Image credit label prefixing.

use lol_html::html_content::{ContentType, Element};

use super::{Decorator, DecoratorKind};
use crate::utils::html::escape;

/// Prefixes each credit block with a bold label.
///
/// `<div class="credit">Jane Doe</div>` becomes
/// `<div class="credit"><strong>Image credit: </strong>Jane Doe</div>`.
pub struct CreditPrefixer {
    selector: String,
    /// Rendered label markup, e.g. `<strong>Image credit: </strong>`.
    label: String,
}

impl CreditPrefixer {
    pub fn new(selector: String, tag: &str, label: &str) -> Self {
        let tag = tag.to_ascii_lowercase();
        Self {
            selector,
            label: format!("<{tag}>{}</{tag}>", escape(label)),
        }
    }
}

impl Decorator for CreditPrefixer {
    fn kind(&self) -> DecoratorKind {
        DecoratorKind::Credit
    }

    fn selectors(&self) -> &[String] {
        std::slice::from_ref(&self.selector)
    }

    fn apply(&self, element: &mut Element<'_, '_>) {
        element.prepend(&self.label, ContentType::Html);
    }
}
