//! Owned XML element arena.
//!
//! `roxmltree` documents borrow the source text, so a loaded configuration
//! document copies every element into an [`ElementTree`]. Each element keeps a
//! link to its parent, which makes ancestor walks O(depth) without a separate
//! hash map.

use indexmap::IndexMap;
use roxmltree::Node;

/// Index of an element inside its [`ElementTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    /// Attributes in document order.
    pub attributes: IndexMap<String, String>,
    /// Text directly inside the element (trimmed, `None` when empty).
    pub text: Option<String>,
    pub parent: Option<ElementId>,
    pub children: Vec<ElementId>,
}

impl Element {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag == tag
    }
}

#[derive(Debug, Clone)]
pub struct ElementTree {
    elements: Vec<Element>,
}

impl ElementTree {
    /// Copy the element structure of a parsed document. Element ids follow
    /// document (pre-)order, so the root is always `ElementId(0)`.
    pub fn from_document(doc: &roxmltree::Document) -> Self {
        let mut tree = ElementTree {
            elements: Vec::new(),
        };
        tree.push(doc.root_element(), None);
        tree
    }

    fn push(&mut self, node: Node, parent: Option<ElementId>) -> ElementId {
        let id = ElementId(self.elements.len());
        let attributes = node
            .attributes()
            .map(|a| (a.name().to_string(), a.value().to_string()))
            .collect();
        let text = node
            .children()
            .filter(|c| c.is_text())
            .filter_map(|c| c.text())
            .collect::<String>();
        let text = text.trim();
        self.elements.push(Element {
            tag: node.tag_name().name().to_string(),
            attributes,
            text: (!text.is_empty()).then(|| text.to_string()),
            parent,
            children: Vec::new(),
        });
        for child in node.children().filter(|c| c.is_element()) {
            let child_id = self.push(child, Some(id));
            self.elements[id.0].children.push(child_id);
        }
        id
    }

    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.elements[id.0].parent
    }

    pub fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        (0..self.elements.len()).map(ElementId)
    }

    /// Element children with the given tag, in document order.
    pub fn children_tagged<'a>(
        &'a self,
        id: ElementId,
        tag: &'a str,
    ) -> impl Iterator<Item = ElementId> + 'a {
        self.elements[id.0]
            .children
            .iter()
            .copied()
            .filter(move |c| self.elements[c.0].has_tag(tag))
    }

    pub fn first_child_tagged(&self, id: ElementId, tag: &str) -> Option<ElementId> {
        self.children_tagged(id, tag).next()
    }

    /// All descendants of `id` (excluding `id` itself) in document order.
    pub fn descendants(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack: Vec<ElementId> =
            self.elements[id.0].children.iter().rev().copied().collect();
        while let Some(cur) = stack.pop() {
            out.push(cur);
            stack.extend(self.elements[cur.0].children.iter().rev().copied());
        }
        out
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        std::iter::successors(self.parent(id), move |p| self.parent(*p))
    }
}
