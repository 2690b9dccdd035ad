//! The processing output sentinel and its misspellings.

use super::Context;
use crate::code::Code;
use crate::collector::Diagnostic;
use crate::fuzzy::is_within_one_edit;
use crate::messages;
use crate::shape::string_constants;
use tree_sitter::Node;

/// Magic output value understood by QGIS processing.
pub const TEMPORARY_OUTPUT: &str = "TEMPORARY_OUTPUT";

/// QGS108 for the exact sentinel, otherwise QGS109 for a near miss.
///
/// Each literal run of an f-string is judged on its own and reported at the
/// start of the whole literal.
pub fn temporary_output(cx: &Context<'_>, node: Node<'_>) -> Vec<Diagnostic> {
    string_constants(cx.tree, node)
        .iter()
        .filter_map(|value| sentinel(node, value))
        .collect()
}

/// A near miss starts with `TEMP`, contains `_` and is one edit away.
fn sentinel(node: Node<'_>, value: &str) -> Option<Diagnostic> {
    if value == TEMPORARY_OUTPUT {
        return Some(Diagnostic::at(node, Code::Qgs108, messages::QGS108));
    }
    let near_miss = value.starts_with("TEMP")
        && value.contains('_')
        && is_within_one_edit(value, TEMPORARY_OUTPUT);
    near_miss.then(|| Diagnostic::at(node, Code::Qgs109, messages::qgs109(value)))
}
