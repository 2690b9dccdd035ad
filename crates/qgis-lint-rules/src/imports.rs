//! Names brought into scope by import statements.

use crate::shape::{import_from, import_names};
use qgis_lint_core::syntax::preorder;
use qgis_lint_core::SourceTree;
use std::collections::{BTreeSet, HashSet};

/// Every name imported anywhere in a module.
///
/// Collected in a full pass before the main traversal, so a call that
/// appears before its import still sees the imported class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportedNames {
    names: HashSet<String>,
}

impl ImportedNames {
    /// Scans the whole tree for imports.
    ///
    /// `from m import a, b as c` adds `a` and `b`; wildcard imports add
    /// nothing. `import a` and `import a as x` add `a` unless it is dotted.
    #[must_use]
    pub fn prescan(tree: &SourceTree) -> Self {
        let mut names = HashSet::new();
        for node in preorder(tree.root()) {
            match node.kind() {
                "import_from_statement" | "future_import_statement" => {
                    if let Some(import) = import_from(tree, node) {
                        names.extend(import.names.into_iter().filter(|n| n != "*"));
                    }
                }
                "import_statement" => {
                    names.extend(
                        import_names(tree, node)
                            .into_iter()
                            .filter(|n| !n.contains('.')),
                    );
                }
                _ => {}
            }
        }
        Self { names }
    }

    /// Returns true if `name` was imported.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// The members of `classes` that were imported, sorted.
    #[must_use]
    pub fn intersect<'a>(&self, classes: &'a BTreeSet<String>) -> BTreeSet<&'a str> {
        classes
            .iter()
            .filter(|class| self.names.contains(class.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Number of distinct imported names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if nothing was imported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
