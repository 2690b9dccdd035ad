//! Host-facing adapter in the shape flake8 expects from a plugin.

use crate::collector::Diagnostic;
use crate::tables::ReferenceTables;
use crate::visitor::analyze;
use qgis_lint_core::SourceTree;

/// One reported problem: `(line, column, message, reporter)`.
///
/// Lines are 1-based, columns 0-based; the message starts with the code.
pub type Report = (usize, usize, String, &'static str);

const REPORTER: &str = env!("CARGO_PKG_NAME");

fn into_report(diagnostic: Diagnostic) -> Report {
    (diagnostic.line, diagnostic.column, diagnostic.message, REPORTER)
}

/// Runs the QGIS checks over one parsed module.
///
/// ```
/// use qgis_lint_core::SourceTree;
/// use qgis_lint_rules::Plugin;
///
/// let tree = SourceTree::parse("dialog.exec_()\n").unwrap();
/// let reports: Vec<_> = Plugin::new(&tree).run().collect();
/// assert_eq!(reports.len(), 1);
/// assert_eq!(reports[0].0, 1);
/// assert!(reports[0].2.starts_with("QGS107"));
/// assert_eq!(reports[0].3, Plugin::NAME);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Plugin<'a> {
    tree: &'a SourceTree,
    tables: &'a ReferenceTables,
}

impl<'a> Plugin<'a> {
    /// Reporter identity attached to every report.
    pub const NAME: &'static str = REPORTER;
    /// Package version.
    pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    /// Creates a plugin over `tree` using the process-wide tables.
    #[must_use]
    pub fn new(tree: &'a SourceTree) -> Self {
        Self::with_tables(tree, ReferenceTables::global())
    }

    /// Creates a plugin over `tree` using the given tables.
    #[must_use]
    pub fn with_tables(tree: &'a SourceTree, tables: &'a ReferenceTables) -> Self {
        Self { tree, tables }
    }

    /// Analyzes the module, yielding reports in traversal order.
    pub fn run(&self) -> impl Iterator<Item = Report> {
        analyze(self.tree, self.tables).into_iter().map(into_report)
    }
}
