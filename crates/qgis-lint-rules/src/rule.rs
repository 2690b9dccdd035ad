//! The QGIS checks as an analyzer [`Rule`].

use crate::return_methods::ReturnCheckTable;
use crate::tables::ReferenceTables;
use crate::visitor::analyze;
use qgis_lint_core::{FileContext, Location, Rule, SourceTree, Violation};
use std::path::Path;
use tracing::debug;

/// Rule set name.
pub const NAME: &str = "qgis";

/// Every QGS check, reported per code.
///
/// Uses the process-wide reference tables unless a custom return-value
/// table was supplied.
///
/// # Example
///
/// ```ignore
/// use qgis_lint_core::Analyzer;
/// use qgis_lint_rules::QgisRules;
///
/// let analyzer = Analyzer::builder()
///     .root("./my_plugin")
///     .rule(QgisRules::new())
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct QgisRules {
    tables: Option<ReferenceTables>,
}

impl QgisRules {
    /// Creates the rule set backed by the bundled tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the rule set with custom reference tables.
    #[must_use]
    pub fn with_tables(tables: ReferenceTables) -> Self {
        Self {
            tables: Some(tables),
        }
    }

    /// Creates the rule set with the return-value table at `path`.
    ///
    /// An unreadable or malformed file disables QGS201/QGS202 with a
    /// warning instead of failing.
    #[must_use]
    pub fn with_return_methods(path: &Path) -> Self {
        Self::with_tables(ReferenceTables::new(ReturnCheckTable::load(path)))
    }

    /// The tables the checks run against.
    #[must_use]
    pub fn tables(&self) -> &ReferenceTables {
        match &self.tables {
            Some(tables) => tables,
            None => ReferenceTables::global(),
        }
    }
}

impl Rule for QgisRules {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Deprecated or risky QGIS and PyQt API usage in plugins"
    }

    fn check(&self, ctx: &FileContext, tree: &SourceTree) -> Vec<Violation> {
        let diagnostics = analyze(tree, self.tables());
        debug!(
            "{} QGS diagnostics in {}",
            diagnostics.len(),
            ctx.relative_path.display()
        );

        diagnostics
            .into_iter()
            .map(|d| {
                let location = Location::new(ctx.relative_path.clone(), d.line, d.column)
                    .with_span(0, d.length);
                Violation::new(
                    d.code.as_str(),
                    d.code.name(),
                    d.code.default_severity(),
                    location,
                    d.message,
                )
            })
            .collect()
    }
}
