//! Upward links over an immutable syntax tree.

use qgis_lint_core::syntax::{named_children, preorder};
use std::collections::HashMap;
use tree_sitter::Node;

/// Side table from node id to its parent node.
///
/// Built once per tree before any check runs; the root has no entry.
#[derive(Debug, Default)]
pub struct ParentMap<'t> {
    parents: HashMap<usize, Node<'t>>,
}

impl<'t> ParentMap<'t> {
    /// Records the parent of every named node below `root`.
    #[must_use]
    pub fn annotate(root: Node<'t>) -> Self {
        let mut parents = HashMap::new();
        for node in preorder(root) {
            for child in named_children(node) {
                parents.insert(child.id(), node);
            }
        }
        Self { parents }
    }

    /// The structural parent of `node`.
    #[must_use]
    pub fn parent(&self, node: Node<'_>) -> Option<Node<'t>> {
        self.parents.get(&node.id()).copied()
    }

    /// The parent of `node`, skipping parenthesised-expression wrappers.
    #[must_use]
    pub fn logical_parent(&self, node: Node<'_>) -> Option<Node<'t>> {
        let mut parent = self.parent(node)?;
        while parent.kind() == "parenthesized_expression" {
            parent = self.parent(parent)?;
        }
        Some(parent)
    }

    /// Number of nodes with a recorded parent.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns true if the tree had no nodes below the root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}
