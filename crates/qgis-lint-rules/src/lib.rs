//! # qgis-lint-rules
//!
//! QGIS plugin checks for qgis-lint.
//!
//! A pre-order walk over a tree-sitter Python tree flags deprecated or risky
//! QGIS / PyQt API usage. Messages match the ones flake8-qgis users already
//! know, so existing `# noqa` comments and CI filters keep working.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | QGS101 | `private-module-from-import` | `from qgis._core import X` |
//! | QGS102 | `private-module-import` | `import qgis._core` |
//! | QGS103 | `pyqt-from-import` | `from PyQt5.QtCore import X` |
//! | QGS104 | `pyqt-import` | `import PyQt5.QtCore` |
//! | QGS105 | `iface-parameter` | `iface` passed as an argument |
//! | QGS106 | `gdal-ogr-import` | `import gdal` instead of `from osgeo import gdal` |
//! | QGS107 | `exec-alias` | `exec_` instead of `exec` |
//! | QGS108 | `temporary-output-literal` | `'TEMPORARY_OUTPUT'` literal |
//! | QGS109 | `temporary-output-typo` | misspelled `'TEMPORARY_OUTPUT'` |
//! | QGS110 | `processing-run-not-child` | `processing.run` without `is_child_algorithm=True` |
//! | QGS201 | `unchecked-return-value` | discarded success flag of an imported class |
//! | QGS202 | `possibly-unchecked-return-value` | discarded success flag, class unconfirmed |
//! | QGS401 | `qapp-global` | `qApp` |
//! | QGS402 | `qvariant-type-enum` | `QVariant.Int` instead of `QMetaType` |
//! | QGS403 | `renamed-enum` | enum members renamed in Qt6 |
//! | QGS404 | `font-metrics-width` | `QFontMetrics.width()` |
//! | QGS405 | `activated-str-signal` | `activated[str]` |
//! | QGS406 | `qregexp` | `QRegExp` |
//! | QGS407 | `desktop-widget` | `QApplication.desktop()` |
//! | QGS408 | `compiled-resources` | `resources_rc` imports |
//! | QGS409 | `fragile-add-action` | `addAction` with four or more positional arguments |
//! | QGS410 | `qvariant-null` | `QVariant()` used as NULL |
//! | QGS411 | `qdatetime-eight-args` | `QDateTime(y, m, d, h, M, s, ms, ts)` |
//! | QGS412 | `qdatetime-from-qdate` | `QDateTime(QDate(...))` |
//!
//! ## Usage
//!
//! ```ignore
//! use qgis_lint_core::Analyzer;
//! use qgis_lint_rules::QgisRules;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./my_plugin")
//!     .rule(QgisRules::new())
//!     .build()?;
//! let result = analyzer.analyze()?;
//! ```
//!
//! Or directly over one parsed module:
//!
//! ```
//! use qgis_lint_core::SourceTree;
//! use qgis_lint_rules::Plugin;
//!
//! let tree = SourceTree::parse("from qgis._core import QgsApplication\n").unwrap();
//! for (line, column, message, _) in Plugin::new(&tree).run() {
//!     println!("{line}:{column} {message}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ancestry;
mod checks;
mod code;
mod collector;
mod fuzzy;
mod imports;
mod messages;
mod plugin;
mod presets;
mod return_methods;
mod rule;
mod shape;
mod tables;
mod visitor;

pub use ancestry::ParentMap;
pub use code::Code;
pub use collector::{Diagnostic, Diagnostics};
pub use fuzzy::is_within_one_edit;
pub use imports::ImportedNames;
pub use plugin::{Plugin, Report};
pub use presets::Preset;
pub use return_methods::{ReturnCheckTable, ReturnTableError};
pub use rule::{QgisRules, NAME};
pub use tables::ReferenceTables;
pub use visitor::analyze;

/// Re-export core types for convenience.
pub use qgis_lint_core::{Rule, Severity, SourceTree, Violation};
