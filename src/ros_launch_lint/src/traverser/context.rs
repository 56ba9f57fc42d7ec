//! Traversal state for one builder run
//!
//! Replaces the scope stacks a visitor would otherwise keep in loose fields
//! with one context object owned by the builder. It lives exactly as long as
//! the run that created it.

use crate::tree::{Namespace, NodeId};

#[derive(Debug)]
pub struct TraversalContext {
    /// Namespace scopes; the bottom entry is the root `/` and is never popped
    namespace_stack: Vec<Namespace>,

    /// Launch file provenance; the bottom entry is the root file
    file_stack: Vec<String>,

    /// Params seen since the last component exit or global promotion
    pending_params: Vec<(String, String)>,

    /// Current insertion point in the component tree
    pub cursor: NodeId,
}

impl TraversalContext {
    pub fn new(root_file: impl Into<String>, cursor: NodeId) -> Self {
        Self {
            namespace_stack: vec![Namespace::root()],
            file_stack: vec![root_file.into()],
            pending_params: Vec::new(),
            cursor,
        }
    }

    // ========== Namespace Methods ==========

    /// Innermost namespace scope
    pub fn current_namespace(&self) -> &Namespace {
        // The root scope is pushed in `new` and never popped.
        &self.namespace_stack[self.namespace_stack.len() - 1]
    }

    pub fn push_namespace(&mut self, name: String) {
        log::trace!("push namespace {}", name);
        self.namespace_stack.push(Namespace::new(name));
    }

    /// Pop the innermost scope, keeping the root scope in place
    pub fn pop_namespace(&mut self) -> Option<Namespace> {
        if self.namespace_stack.len() > 1 {
            let popped = self.namespace_stack.pop();
            log::trace!(
                "pop namespace, back in {}",
                self.current_namespace().name
            );
            popped
        } else {
            log::warn!("Unbalanced scope exit at the root namespace");
            None
        }
    }

    /// Record a remap in the innermost scope
    pub fn add_remap(&mut self, from: String, to: String) {
        if let Some(top) = self.namespace_stack.last_mut() {
            top.remaps.push((from, to));
        }
    }

    /// Namespace for a component whose own scope is the innermost one.
    ///
    /// The name comes from the innermost scope. Remaps are that scope's own
    /// followed by each enclosing scope's, nearest first.
    pub fn merged_namespace(&self) -> Namespace {
        let mut scopes = self.namespace_stack.iter().rev();
        let mut merged = scopes.next().cloned().unwrap_or_else(Namespace::root);
        for scope in scopes {
            merged.remaps.extend(scope.remaps.iter().cloned());
        }
        merged
    }

    pub fn namespace_depth(&self) -> usize {
        self.namespace_stack.len()
    }

    // ========== File Methods ==========

    pub fn current_file(&self) -> &str {
        self.file_stack.last().map(String::as_str).unwrap_or("")
    }

    pub fn push_file(&mut self, file: String) {
        self.file_stack.push(file);
    }

    pub fn pop_file(&mut self) {
        if self.file_stack.len() > 1 {
            self.file_stack.pop();
        }
    }

    // ========== Param Methods ==========

    pub fn push_param(&mut self, name: String, value: String) {
        self.pending_params.push((name, value));
    }

    /// Hand over the pending params, leaving the buffer empty
    pub fn take_params(&mut self) -> Vec<(String, String)> {
        std::mem::take(&mut self.pending_params)
    }

    pub fn has_pending_params(&self) -> bool {
        !self.pending_params.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> TraversalContext {
        TraversalContext::new("root.launch", NodeId(0))
    }

    #[test]
    fn test_root_scope_is_never_popped() {
        let mut ctx = context();
        assert!(ctx.pop_namespace().is_none());
        assert_eq!(ctx.current_namespace().name, "/");
        assert_eq!(ctx.namespace_depth(), 1);
    }

    #[test]
    fn test_merged_namespace_two_levels() {
        let mut ctx = context();
        ctx.push_namespace("/a/".to_string());
        ctx.add_remap("x".to_string(), "y".to_string());
        ctx.push_namespace("/a/b/".to_string());
        ctx.add_remap("y".to_string(), "z".to_string());
        // component scope
        ctx.push_namespace("/a/b/".to_string());

        let merged = ctx.merged_namespace();
        assert_eq!(merged.name, "/a/b/");
        assert_eq!(
            merged.remaps,
            vec![
                ("y".to_string(), "z".to_string()),
                ("x".to_string(), "y".to_string())
            ]
        );
    }

    #[test]
    fn test_merged_namespace_includes_own_remaps_first() {
        let mut ctx = context();
        ctx.add_remap("r".to_string(), "/r".to_string());
        ctx.push_namespace("/a/".to_string());
        ctx.add_remap("x".to_string(), "y".to_string());
        ctx.push_namespace("/a/".to_string());
        ctx.add_remap("own".to_string(), "mine".to_string());

        let merged = ctx.merged_namespace();
        let froms: Vec<_> = merged.remaps.iter().map(|(f, _)| f.as_str()).collect();
        assert_eq!(froms, vec!["own", "x", "r"]);
    }

    #[test]
    fn test_take_params_clears_buffer() {
        let mut ctx = context();
        ctx.push_param("rate".to_string(), "10".to_string());
        assert!(ctx.has_pending_params());
        assert_eq!(ctx.take_params().len(), 1);
        assert!(!ctx.has_pending_params());
    }

    #[test]
    fn test_file_stack_keeps_root() {
        let mut ctx = context();
        ctx.push_file("inc.launch".to_string());
        assert_eq!(ctx.current_file(), "inc.launch");
        ctx.pop_file();
        ctx.pop_file();
        assert_eq!(ctx.current_file(), "root.launch");
    }
}
