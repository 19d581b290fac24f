//! HTML parsing seam.
//!
//! Extraction depends on a small set of tree operations rather than on a
//! concrete DOM. [`ScraperParser`] implements them on top of `scraper`'s
//! html5ever tree; other hosts can plug in their own document type.

use scraper::{ElementRef, Html, Node, Selector};

use crate::sanitize::SanitizedMarkup;

/// Elements whose boundaries separate words in the extracted text.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "ol", "p",
    "pre", "section", "table", "td", "th", "tr", "ul",
];

/// An element located in a parsed document.
///
/// Carries the element's attributes and its position among same-named
/// elements so the parser can find it again for removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementHandle {
    tag: String,
    ordinal: usize,
    attributes: Vec<(String, String)>,
}

impl ElementHandle {
    pub fn new(tag: impl Into<String>, ordinal: usize, attributes: Vec<(String, String)>) -> Self {
        Self {
            tag: tag.into(),
            ordinal,
            attributes,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Zero-based position among elements with the same tag, in document order.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Tree operations needed by the extractor.
pub trait HtmlParser {
    type Document;

    /// Parse sanitized markup into a working tree owned by the caller.
    fn parse(&self, markup: &SanitizedMarkup) -> Self::Document;

    /// First element named `tag` in document order.
    fn first_of_type(&self, doc: &Self::Document, tag: &str) -> Option<ElementHandle>;

    /// Detach `element` from the tree. Returns `false` if it is no longer present.
    fn remove(&self, doc: &mut Self::Document, element: &ElementHandle) -> bool;

    /// Detach every element named `tag`, returning how many were removed.
    fn remove_all(&self, doc: &mut Self::Document, tag: &str) -> usize;

    /// Concatenated text in document order, block boundaries as whitespace.
    fn text_content(&self, doc: &Self::Document) -> String;

    /// Serialized markup of what remains in the tree.
    fn inner_html(&self, doc: &Self::Document) -> String;
}

/// [`HtmlParser`] backed by the `scraper` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScraperParser;

impl ScraperParser {
    fn selector(tag: &str) -> Option<Selector> {
        Selector::parse(tag).ok()
    }
}

impl HtmlParser for ScraperParser {
    type Document = Html;

    fn parse(&self, markup: &SanitizedMarkup) -> Html {
        Html::parse_fragment(markup.as_str())
    }

    fn first_of_type(&self, doc: &Html, tag: &str) -> Option<ElementHandle> {
        let selector = Self::selector(tag)?;
        // Select from the root element: `Html::select` would also visit detached nodes.
        doc.root_element().select(&selector).next().map(|el| {
            let attributes = el
                .value()
                .attrs()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect();
            ElementHandle::new(tag, 0, attributes)
        })
    }

    fn remove(&self, doc: &mut Html, element: &ElementHandle) -> bool {
        let Some(selector) = Self::selector(element.tag()) else {
            return false;
        };
        let Some(node_id) = doc
            .root_element()
            .select(&selector)
            .nth(element.ordinal())
            .map(|el| el.id())
        else {
            return false;
        };

        match doc.tree.get_mut(node_id) {
            Some(mut node) => {
                node.detach();
                true
            }
            None => false,
        }
    }

    fn remove_all(&self, doc: &mut Html, tag: &str) -> usize {
        let Some(selector) = Self::selector(tag) else {
            return 0;
        };
        let node_ids: Vec<_> = doc
            .root_element()
            .select(&selector)
            .map(|el| el.id())
            .collect();

        let mut removed = 0;
        for node_id in node_ids {
            if let Some(mut node) = doc.tree.get_mut(node_id) {
                node.detach();
                removed += 1;
            }
        }
        removed
    }

    fn text_content(&self, doc: &Html) -> String {
        let mut text = String::new();
        collect_text(doc.root_element(), &mut text);
        text
    }

    fn inner_html(&self, doc: &Html) -> String {
        doc.root_element().inner_html()
    }
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                let Some(child_element) = ElementRef::wrap(child) else {
                    continue;
                };
                let is_block = BLOCK_ELEMENTS.contains(&el.name());
                if is_block {
                    out.push(' ');
                }
                collect_text(child_element, out);
                if is_block {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }
}
