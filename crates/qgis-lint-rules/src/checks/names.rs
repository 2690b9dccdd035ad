//! Bare references to globals removed in Qt6.

use super::Context;
use crate::code::Code;
use crate::collector::Diagnostic;
use crate::messages;
use tree_sitter::Node;

/// QGS401: `qApp`.
pub fn qapp_global(cx: &Context<'_>, name: Node<'_>) -> Option<Diagnostic> {
    (cx.text(name) == "qApp").then(|| Diagnostic::at(name, Code::Qgs401, messages::QGS401))
}

/// QGS406: `QRegExp` used as a value.
pub fn qregexp_name(cx: &Context<'_>, name: Node<'_>) -> Option<Diagnostic> {
    (cx.text(name) == "QRegExp").then(|| Diagnostic::at(name, Code::Qgs406, messages::QGS406))
}
