use super::TreeBuilder;
use crate::{
    names,
    tree::{NodeDesc, NodeId},
};

impl TreeBuilder {
    /// Find or create the tree entry for an absolute namespace path.
    ///
    /// Walks the path one segment at a time from the root, descending into
    /// an existing child of the same name or appending a namespace-only
    /// entry. Empty segments are skipped, so `/a//b` and `/a/b/` land on the
    /// same entry.
    pub fn create_path(&mut self, path: &str) -> NodeId {
        let mut current = self.tree.root();

        for segment in names::split_namespace(path) {
            current = match self.tree.find_child(current, segment) {
                Some(child) => child,
                None => {
                    let parent_path = self.tree.absolute_path(current);
                    log::trace!("create namespace entry {}{}", parent_path, segment);
                    self.tree.append_child(
                        current,
                        NodeDesc::namespace_only(
                            segment,
                            parent_path,
                            self.context.current_file(),
                        ),
                    )
                }
            };
        }

        current
    }
}
