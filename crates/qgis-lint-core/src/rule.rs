//! Rule trait for defining lint rules.

use crate::context::FileContext;
use crate::syntax::SourceTree;
use crate::types::Violation;

/// A per-file lint rule over a parsed Python module.
///
/// A single rule may report several codes; the [`Analyzer`](crate::Analyzer)
/// filters and re-grades the resulting violations per code.
///
/// # Example
///
/// ```ignore
/// use qgis_lint_core::{FileContext, Location, Rule, Severity, SourceTree, Violation};
/// use qgis_lint_core::syntax::{position, preorder};
///
/// pub struct NoPrint;
///
/// impl Rule for NoPrint {
///     fn name(&self) -> &'static str { "no-print" }
///
///     fn check(&self, ctx: &FileContext, tree: &SourceTree) -> Vec<Violation> {
///         preorder(tree.root())
///             .filter(|n| n.kind() == "identifier" && tree.text(*n) == "print")
///             .map(|n| {
///                 let (line, column) = position(n);
///                 Violation::new(
///                     "X001",
///                     self.name(),
///                     Severity::Warning,
///                     Location::new(ctx.relative_path.clone(), line, column),
///                     "X001 print() left in plugin code",
///                 )
///             })
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule set (e.g., "qgis").
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Checks a single file and returns any violations found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `tree` - The parsed syntax tree of the file
    ///
    /// # Returns
    ///
    /// Violations in the order the rule produced them.
    fn check(&self, ctx: &FileContext, tree: &SourceTree) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
