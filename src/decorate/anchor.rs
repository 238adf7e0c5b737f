//! Gutter anchor icons.
//!
//! Authors mark a paragraph with `<span class="anchor" id="tag"></span>` at its
//! start (a span, so the markdown renderer keeps it inside the `<p>`). Site CSS
//! floats the inserted icon link into the text gutter.

use lol_html::html_content::{ContentType, Element};

use super::{Decorator, DecoratorKind};
use crate::debug;
use crate::utils::html::{encode_quotes, escape_attr};

/// Appends `<a href="#id"><img src="icon"></a>` to each anchor marker.
pub struct AnchorIconInserter {
    selector: String,
    /// Escaped icon `src`, base path already applied.
    icon_src: String,
}

impl AnchorIconInserter {
    pub fn new(selector: String, icon_src: &str) -> Self {
        Self {
            selector,
            icon_src: escape_attr(icon_src).into_owned(),
        }
    }
}

impl Decorator for AnchorIconInserter {
    fn kind(&self) -> DecoratorKind {
        DecoratorKind::Anchor
    }

    fn selectors(&self) -> &[String] {
        std::slice::from_ref(&self.selector)
    }

    fn apply(&self, element: &mut Element<'_, '_>) {
        let id = element.get_attribute("id").unwrap_or_default();
        if id.is_empty() {
            debug!("anchor"; "anchor marker without id, linking to `#`");
        }
        let link = format!(
            "<a href=\"#{}\"><img src=\"{}\"></a>",
            encode_quotes(&id),
            self.icon_src
        );
        element.append(&link, ContentType::Html);
    }
}
