//! Diagnostics produced by one analysis.

use crate::code::Code;
use qgis_lint_core::syntax::position;
use tree_sitter::Node;

/// A single finding: position plus a message that starts with its code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Line (1-indexed).
    pub line: usize,
    /// Column (0-indexed byte offset within the line).
    pub column: usize,
    /// Byte length of the flagged node.
    pub length: usize,
    /// Rule code, also the first word of `message`.
    pub code: Code,
    /// Rendered message.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic positioned at the start of `node`.
    #[must_use]
    pub fn at(node: Node<'_>, code: Code, message: impl Into<String>) -> Self {
        let (line, column) = position(node);
        let message = message.into();
        debug_assert!(message.starts_with(code.as_str()), "{message}");
        Self {
            line,
            column,
            length: node.byte_range().len(),
            code,
            message,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} {}", self.line, self.column, self.message)
    }
}

/// Append-only list of diagnostics in traversal order.
///
/// [`retract`](Self::retract) is the one exception, used to drop a
/// diagnostic that a later, more specific one supersedes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    /// Returns true if a Qt6 diagnostic mentioning `NULL` has been collected.
    ///
    /// Both QGS410 and a QGS402 for `QVariant.NULL` qualify.
    #[must_use]
    pub fn reports_null(&self) -> bool {
        self.items
            .iter()
            .any(|d| d.message.contains("QGS4") && d.message.contains("NULL"))
    }

    /// Removes every collected diagnostic with `code`, returning how many.
    pub fn retract(&mut self, code: Code) -> usize {
        let before = self.items.len();
        self.items.retain(|d| d.code != code);
        before - self.items.len()
    }

    /// Iterates the diagnostics in collection order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    /// Number of diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the collector.
    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
