//! Resolved launch document model
//!
//! The tree builder and the annotation extractor both read the same
//! substitution-resolved document. It is stored as an owned arena so that
//! component nodes can refer back to their declaring element through a plain
//! [`ElementId`] instead of a borrow of the parsed XML.

use serde::{Deserialize, Serialize};

/// Provenance token: index of an element inside a [`LaunchDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub usize);

/// Element kinds the launch dialect gives meaning to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// `<group>`
    Group,
    /// `<test>`
    Test,
    /// `<include>`
    Include,
    /// `<node>`
    Component,
    /// `<param>`
    Param,
    /// `<remap>`
    Remap,
    /// Anything else (`<launch>`, `<arg>`, `<env>`, ...)
    Other,
}

impl ElementKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "group" => ElementKind::Group,
            "test" => ElementKind::Test,
            "include" => ElementKind::Include,
            "node" => ElementKind::Component,
            "param" => ElementKind::Param,
            "remap" => ElementKind::Remap,
            _ => ElementKind::Other,
        }
    }

    /// Kinds that open a namespace scope on enter and close it on exit.
    pub fn is_scope(self) -> bool {
        matches!(
            self,
            ElementKind::Group | ElementKind::Test | ElementKind::Include | ElementKind::Component
        )
    }
}

/// Content item of an element, in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Element(ElementId),
    Comment(String),
}

/// A single element of the resolved document
#[derive(Debug, Clone)]
pub struct Element {
    pub id: ElementId,
    pub tag: String,
    pub kind: ElementKind,
    pub attributes: Vec<(String, String)>,
    pub parent: Option<ElementId>,
    pub content: Vec<Content>,
}

impl Element {
    /// Get attribute value if present
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Get attribute value, reading an absent attribute as the empty string
    pub fn attr_or_empty(&self, name: &str) -> &str {
        self.attr(name).unwrap_or("")
    }

    /// Child element ids in document order
    pub fn child_elements(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.content.iter().filter_map(|c| match c {
            Content::Element(id) => Some(*id),
            Content::Comment(_) => None,
        })
    }

    /// Comment texts directly inside this element, in document order
    pub fn comments(&self) -> impl Iterator<Item = &str> + '_ {
        self.content.iter().filter_map(|c| match c {
            Content::Comment(text) => Some(text.as_str()),
            Content::Element(_) => None,
        })
    }
}

/// Arena of elements making up one resolved launch document
#[derive(Debug, Clone)]
pub struct LaunchDocument {
    elements: Vec<Element>,
}

impl LaunchDocument {
    /// Copy a parsed roxmltree document into the arena.
    pub fn from_roxmltree(doc: &roxmltree::Document) -> Self {
        let mut document = Self {
            elements: Vec::new(),
        };
        document.import(doc.root_element(), None);
        document
    }

    fn import(&mut self, node: roxmltree::Node, parent: Option<ElementId>) -> ElementId {
        let id = ElementId(self.elements.len());
        let tag = node.tag_name().name().to_string();
        self.elements.push(Element {
            id,
            kind: ElementKind::from_tag(&tag),
            tag,
            attributes: node
                .attributes()
                .map(|attr| (attr.name().to_string(), attr.value().to_string()))
                .collect(),
            parent,
            content: Vec::new(),
        });

        for child in node.children() {
            let item = if child.is_element() {
                Content::Element(self.import(child, Some(id)))
            } else if child.is_comment() {
                Content::Comment(child.text().unwrap_or("").to_string())
            } else {
                continue;
            };
            self.elements[id.0].content.push(item);
        }

        id
    }

    /// The document's root element
    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    /// Kind of the element's parent, if it has one
    pub fn parent_kind(&self, id: ElementId) -> Option<ElementKind> {
        self.element(id).parent.map(|p| self.element(p).kind)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
