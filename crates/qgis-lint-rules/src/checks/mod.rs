//! The pattern catalogue, grouped by theme.
//!
//! Every check is a pure function of one node and the read-only
//! [`Context`]. Which checks see which node, and in what order, is decided
//! by the visitor.

pub mod imports;
pub mod literals;
pub mod names;
pub mod processing;
pub mod qt6;
pub mod return_values;
pub mod signatures;

use crate::ancestry::ParentMap;
use crate::imports::ImportedNames;
use crate::tables::ReferenceTables;
use qgis_lint_core::SourceTree;
use tree_sitter::Node;

/// Read-only state shared by every check during one analysis.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub tree: &'a SourceTree,
    pub parents: &'a ParentMap<'a>,
    pub imported: &'a ImportedNames,
    pub tables: &'a ReferenceTables,
}

impl<'a> Context<'a> {
    /// Source text of `node`.
    pub fn text(&self, node: Node<'_>) -> &'a str {
        self.tree.text(node)
    }
}
