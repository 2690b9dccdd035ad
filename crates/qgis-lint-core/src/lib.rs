//! # qgis-lint-core
//!
//! Core framework for linting QGIS Python plugins over a tree-sitter
//! syntax tree.
//!
//! This crate provides the foundational traits and types for building
//! the linter. It includes:
//!
//! - [`SourceTree`] for parsed Python modules
//! - [`Rule`] trait for per-file rules
//! - [`Analyzer`] for orchestrating lint execution over a directory
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use qgis_lint_core::{Analyzer, Severity};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./my_plugin")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! if result.has_violations_at(Severity::Error) {
//!     std::process::exit(1);
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod rule;
pub mod syntax;
mod types;

/// Utility modules for rule implementations.
pub mod utils;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use rule::{Rule, RuleBox};
pub use syntax::{ParseError, SourceTree};
pub use types::{LintResult, Location, Severity, Violation, ViolationDiagnostic};
