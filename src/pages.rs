//! Page tree views and top-level page normalization.
//!
//! Some scanner families wrap their real configuration pages in a single page
//! named after the product or the scanner type. The UI does not render those
//! wrappers as sections, so they are replaced by their children.

use crate::document::ConfigDocument;
use crate::model::Protection;
use crate::tree::ElementId;
use serde::Serialize;
use std::collections::VecDeque;

/// Titles of scanner-family wrapper pages, hoisted unless the product is a
/// `-BASE-` variant.
pub const SCANNER_WRAPPER_TITLES: [&str; 2] = ["2D Imager Scanner", "Linear Imager Scanner"];

const BASE_VARIANT_MARKER: &str = "-BASE-";

/// Borrowed view of a `<page>` element.
#[derive(Clone, Copy)]
pub struct PageNode<'a> {
    doc: &'a ConfigDocument,
    id: ElementId,
}

impl<'a> PageNode<'a> {
    pub fn new(doc: &'a ConfigDocument, id: ElementId) -> Self {
        Self { doc, id }
    }

    pub fn title(&self) -> Option<&'a str> {
        self.doc.tree().get(self.id).attribute("title")
    }

    pub fn protection(&self) -> Option<Protection> {
        self.doc
            .tree()
            .get(self.id)
            .attribute("protection")
            .map(Protection::parse)
    }

    /// Visible at the `USER` level: no protection or `USER`.
    pub fn is_user_visible(&self) -> bool {
        self.protection().is_none_or(|p| p.is_user())
    }

    /// Child `<page>` elements, in document order.
    pub fn children(&self) -> Vec<PageNode<'a>> {
        let doc = self.doc;
        doc.tree()
            .children_tagged(self.id, "page")
            .map(|id| PageNode::new(doc, id))
            .collect()
    }

    /// Owned copy of this page and its sub-pages.
    pub fn to_outline(&self) -> PageOutline {
        PageOutline {
            title: self.title().map(str::to_string),
            protection: self.protection(),
            children: self.children().iter().map(|c| c.to_outline()).collect(),
        }
    }
}

impl std::fmt::Debug for PageNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageNode")
            .field("title", &self.title())
            .field("protection", &self.protection())
            .finish()
    }
}

impl PartialEq for PageNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

/// Serializable page tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageOutline {
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protection: Option<Protection>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PageOutline>,
}

/// Whether `title` names a wrapper page that should be replaced by its
/// children for `product_name`.
pub fn is_wrapper_title(title: &str, product_name: &str) -> bool {
    title.contains(product_name)
        || (!product_name.contains(BASE_VARIANT_MARKER)
            && SCANNER_WRAPPER_TITLES.iter().any(|t| title.contains(t)))
}

/// Top-level pages of the document after wrapper hoisting.
///
/// Starts from the children of the "Configuration" page. A wrapper page is
/// replaced in place by its child pages, which are examined again; a wrapper
/// without children disappears.
pub fn top_level_pages(doc: &ConfigDocument) -> Vec<PageNode<'_>> {
    let Some(configuration) = doc.configuration_page() else {
        return Vec::new();
    };
    let mut worklist: VecDeque<PageNode<'_>> = PageNode::new(doc, configuration)
        .children()
        .into_iter()
        .collect();
    let mut pages = Vec::new();
    while let Some(page) = worklist.pop_front() {
        let hoist = page
            .title()
            .is_some_and(|t| is_wrapper_title(t, &doc.product_name));
        if hoist {
            for child in page.children().into_iter().rev() {
                worklist.push_front(child);
            }
        } else {
            pages.push(page);
        }
    }
    pages
}

/// Top-level pages visible at the `USER` level. The UI is ready once it renders
/// exactly this many sections.
pub fn user_top_level_pages(doc: &ConfigDocument) -> Vec<PageNode<'_>> {
    top_level_pages(doc)
        .into_iter()
        .filter(PageNode::is_user_visible)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapper_titles() {
        assert!(is_wrapper_title("Widget-100 Settings", "Widget-100"));
        assert!(is_wrapper_title("2D Imager Scanner", "Widget-100"));
        assert!(is_wrapper_title("Linear Imager Scanner Setup", "Widget-100"));
        assert!(!is_wrapper_title("2D Imager Scanner", "Widget-BASE-100"));
        assert!(is_wrapper_title("Widget-BASE-100", "Widget-BASE-100"));
        assert!(!is_wrapper_title("Interface", "Widget-100"));
    }
}
