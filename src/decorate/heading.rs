//! Heading permalinks.
//!
//! kramdown renders `<h3 id="...">Text</h3>` with no link; wrapping the
//! heading content in `<a href="#id">` lets readers right-click to copy a
//! link to the section.

use lol_html::html_content::{ContentType, Element};

use super::{Decorator, DecoratorKind};
use crate::debug;
use crate::utils::html::encode_quotes;

/// Wraps heading content in a link to the heading's own id.
pub struct HeadingPermalinker {
    /// One selector per level, in configured order.
    selectors: Vec<String>,
}

impl HeadingPermalinker {
    /// Build selectors `<content> h<level>` for each level.
    pub fn new(content: &str, levels: &[u8]) -> Self {
        let selectors = levels
            .iter()
            .map(|level| format!("{content} h{level}"))
            .collect();
        Self { selectors }
    }
}

impl Decorator for HeadingPermalinker {
    fn kind(&self) -> DecoratorKind {
        DecoratorKind::Heading
    }

    fn selectors(&self) -> &[String] {
        &self.selectors
    }

    /// The heading's content streams through unchanged between the two
    /// inserted tags, so it ends up inside the link in its original order.
    fn apply(&self, element: &mut Element<'_, '_>) {
        let id = element.get_attribute("id").unwrap_or_default();
        if id.is_empty() {
            debug!("heading"; "<{}> without id, linking to `#`", element.tag_name());
        }
        element.prepend(&format!("<a href=\"#{}\">", encode_quotes(&id)), ContentType::Html);
        element.append("</a>", ContentType::Html);
    }
}
