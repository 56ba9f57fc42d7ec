//! Namespace-aware component tree builder
//!
//! A single depth-first walk over a resolved launch document. Scoping
//! elements (`group`, `test`, `include`, `node`) push a namespace scope on
//! enter and pop it on exit. `remap` elements add to the innermost scope and
//! `param` elements collect into a pending buffer that is claimed by the
//! enclosing `node` or promoted to the tree's global params.
//!
//! A component is addressed by its innermost scope only, but inherits the
//! remaps of every enclosing scope, nearest first.

pub mod context;
mod path;

pub use context::TraversalContext;

use crate::{
    names,
    tree::{ComponentTree, NodeDesc},
    xml::{walk, DocumentVisitor, Element, ElementKind, LaunchDocument},
};

pub struct TreeBuilder {
    tree: ComponentTree,
    context: TraversalContext,
}

impl TreeBuilder {
    pub fn new(root_file: impl Into<String>) -> Self {
        let root_file = root_file.into();
        let tree = ComponentTree::new(root_file.clone());
        let context = TraversalContext::new(root_file, tree.root());
        Self { tree, context }
    }

    /// Build the component tree for `doc`, recording `root_file` as the
    /// provenance of everything outside an include.
    pub fn build(doc: &LaunchDocument, root_file: impl Into<String>) -> ComponentTree {
        let mut builder = Self::new(root_file);
        walk(doc, &mut builder);
        builder.into_tree()
    }

    pub fn tree(&self) -> &ComponentTree {
        &self.tree
    }

    pub fn context(&self) -> &TraversalContext {
        &self.context
    }

    pub fn into_tree(self) -> ComponentTree {
        if self.context.has_pending_params() {
            log::warn!("Builder finished with unclaimed params");
        }
        self.tree
    }

    /// Move the cursor to the entry of the innermost namespace scope
    fn sync_cursor(&mut self) {
        let ns = self.context.current_namespace().name.clone();
        self.context.cursor = self.create_path(&ns);
    }

    fn enter_scope(&mut self, element: &Element) {
        let declared = element.attr("ns");
        let ns = names::normalize_namespace(&self.context.current_namespace().name, declared);
        self.context.push_namespace(ns.clone());

        if declared.is_some() {
            self.context.cursor = self.create_path(&ns);
        }
    }

    fn exit_scope(&mut self) {
        self.context.pop_namespace();
        self.sync_cursor();
    }

    fn exit_component(&mut self, element: &Element) {
        let namespace = self.context.merged_namespace();

        self.exit_scope();

        let cursor = self.context.cursor;
        let desc = NodeDesc {
            name: element.attr_or_empty("name").to_string(),
            path: self.tree.absolute_path(cursor),
            node_type: element.attr_or_empty("type").to_string(),
            package: element.attr_or_empty("pkg").to_string(),
            source_file: self.context.current_file().to_string(),
            namespace: Some(namespace),
            params: self.context.take_params(),
            args: element.attr_or_empty("args").to_string(),
            ports: Vec::new(),
            source_element: Some(element.id),
        };

        log::debug!(
            "component {}{} ({}/{}) with {} params",
            desc.path,
            desc.name,
            desc.package,
            desc.node_type,
            desc.params.len()
        );

        self.tree.append_child(cursor, desc);
    }

    /// Promote every pending param to a global param under the cursor
    fn promote_params(&mut self) {
        let prefix = self.tree.absolute_path(self.context.cursor);
        for (name, value) in self.context.take_params() {
            let name = if name.starts_with('/') {
                name
            } else {
                format!("{}{}", prefix, name)
            };
            log::debug!("global param {}={}", name, value);
            self.tree.global_params.push((name, value));
        }
    }
}

impl DocumentVisitor for TreeBuilder {
    fn enter(&mut self, _doc: &LaunchDocument, element: &Element) {
        match element.kind {
            ElementKind::Group | ElementKind::Test | ElementKind::Component => {
                self.enter_scope(element);
            }
            ElementKind::Include => {
                self.enter_scope(element);
                self.context
                    .push_file(element.attr_or_empty("file").to_string());
            }
            ElementKind::Param => {
                if let (Some(name), Some(value)) = (element.attr("name"), element.attr("value")) {
                    self.context.push_param(name.to_string(), value.to_string());
                }
            }
            ElementKind::Remap => {
                self.context.add_remap(
                    element.attr_or_empty("from").to_string(),
                    element.attr_or_empty("to").to_string(),
                );
            }
            ElementKind::Other => {}
        }
    }

    fn exit(&mut self, doc: &LaunchDocument, element: &Element) {
        match element.kind {
            ElementKind::Group | ElementKind::Test => self.exit_scope(),
            ElementKind::Include => {
                self.exit_scope();
                self.context.pop_file();
            }
            ElementKind::Component => self.exit_component(element),
            ElementKind::Param => {
                if doc.parent_kind(element.id) != Some(ElementKind::Component) {
                    self.promote_params();
                }
            }
            ElementKind::Remap | ElementKind::Other => {}
        }
    }
}
