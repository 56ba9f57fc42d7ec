//! Component tree
//!
//! An ordered forest rooted at `/`, stored as an arena. Parent and child
//! links are [`NodeId`] indices, so the tree can be cloned, compared and
//! serialized without touching the document it was built from.

pub mod types;

pub use types::{Namespace, NodeDesc, Port, PortKind};

use crate::names;
use serde::{Deserialize, Serialize};

/// Index of an entry in a [`ComponentTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub desc: NodeDesc,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentTree {
    nodes: Vec<TreeNode>,
    /// Parameters declared outside any component, keyed by absolute name
    pub global_params: Vec<(String, String)>,
}

impl ComponentTree {
    /// Create a tree holding only the root entry `/`
    pub fn new(root_file: impl Into<String>) -> Self {
        Self {
            nodes: vec![TreeNode {
                desc: NodeDesc::namespace_only("/", "", root_file),
                parent: None,
                children: Vec::new(),
            }],
            global_params: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn get(&self, id: NodeId) -> &NodeDesc {
        &self.nodes[id.0].desc
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut NodeDesc {
        &mut self.nodes[id.0].desc
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Number of entries, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append `desc` as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, desc: NodeDesc) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            desc,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// First child of `parent` whose name equals `name`
    pub fn find_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|child| self.get(*child).name == name)
    }

    /// Absolute namespace path an entry denotes: `/` for the root, `/a/b/`
    /// for the entry `b` under `a`.
    pub fn absolute_path(&self, id: NodeId) -> String {
        let mut segments = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current {
            if node != self.root() {
                segments.push(self.get(node).name.as_str());
            }
            current = self.parent(node);
        }
        segments.reverse();
        names::join_namespace(segments)
    }

    /// All entry ids in pre-order (document order), root first
    pub fn ids(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev());
        }
        order
    }

    /// All entries in pre-order
    pub fn iter(&self) -> impl Iterator<Item = &NodeDesc> + '_ {
        self.ids().into_iter().map(move |id| self.get(id))
    }

    /// Declared components in pre-order
    pub fn components(&self) -> impl Iterator<Item = &NodeDesc> + '_ {
        self.iter().filter(|desc| desc.is_component())
    }

    /// Find an entry by its absolute namespace path (`/a/b/`)
    pub fn find_path(&self, path: &str) -> Option<NodeId> {
        let mut current = self.root();
        for segment in names::split_namespace(path) {
            current = self.find_child(current, segment)?;
        }
        Some(current)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tree_has_root() {
        let tree = ComponentTree::new("root.launch");
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get(tree.root()).name, "/");
        assert_eq!(tree.absolute_path(tree.root()), "/");
        assert!(tree.global_params.is_empty());
    }

    #[test]
    fn test_absolute_path() {
        let mut tree = ComponentTree::new("root.launch");
        let a = tree.append_child(tree.root(), NodeDesc::namespace_only("a", "/", "f"));
        let b = tree.append_child(a, NodeDesc::namespace_only("b", "/a/", "f"));
        assert_eq!(tree.absolute_path(a), "/a/");
        assert_eq!(tree.absolute_path(b), "/a/b/");
        assert_eq!(tree.find_path("/a/b/"), Some(b));
        assert_eq!(tree.find_path("/a/c/"), None);
    }

    #[test]
    fn test_preorder() {
        let mut tree = ComponentTree::new("root.launch");
        let a = tree.append_child(tree.root(), NodeDesc::namespace_only("a", "/", "f"));
        tree.append_child(a, NodeDesc::namespace_only("a1", "/a/", "f"));
        tree.append_child(tree.root(), NodeDesc::namespace_only("b", "/", "f"));

        let names: Vec<_> = tree.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["/", "a", "a1", "b"]);
    }

    #[test]
    fn test_serialize_tree() {
        let tree = ComponentTree::new("root.launch");
        let json = tree.to_json().unwrap();
        assert!(json.contains("\"global_params\""));
        assert!(json.contains("\"root.launch\""));

        let back: ComponentTree = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tree);
    }
}
