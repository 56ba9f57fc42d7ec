//! Depth-first enter/exit traversal over a [`LaunchDocument`]

use super::entity::{Element, LaunchDocument};

/// Receives element events during a depth-first walk.
///
/// `exit` for an element always fires after the `exit` of every element
/// nested inside it.
pub trait DocumentVisitor {
    fn enter(&mut self, doc: &LaunchDocument, element: &Element);
    fn exit(&mut self, doc: &LaunchDocument, element: &Element);
}

/// Walk the whole document starting at its root element
pub fn walk<V: DocumentVisitor + ?Sized>(doc: &LaunchDocument, visitor: &mut V) {
    if doc.is_empty() {
        return;
    }
    walk_element(doc, doc.element(doc.root()), visitor);
}

fn walk_element<V: DocumentVisitor + ?Sized>(
    doc: &LaunchDocument,
    element: &Element,
    visitor: &mut V,
) {
    visitor.enter(doc, element);
    for child in element.child_elements() {
        walk_element(doc, doc.element(child), visitor);
    }
    visitor.exit(doc, element);
}
