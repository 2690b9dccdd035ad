//! Function signature rules: `iface` parameters and the `exec_` alias.

use super::Context;
use crate::code::Code;
use crate::collector::Diagnostic;
use crate::messages;
use crate::shape::{attribute, name_id, positional_params};
use tree_sitter::Node;

/// The plugin entry point QGIS calls with its interface object.
const CLASS_FACTORY: &str = "classFactory";
const QGIS_INTERFACE: &str = "QgisInterface";
const EXEC_ALIAS: &str = "exec_";

fn function_name<'a>(cx: &Context<'a>, function: Node<'_>) -> Option<&'a str> {
    function.child_by_field_name("name").map(|n| cx.text(n))
}

/// QGS105: one diagnostic per positional parameter that receives the QGIS
/// interface, reported at the function.
pub fn iface_parameter(cx: &Context<'_>, function: Node<'_>) -> Vec<Diagnostic> {
    debug_assert_eq!(function.kind(), "function_definition");
    if function_name(cx, function) == Some(CLASS_FACTORY) {
        return Vec::new();
    }

    positional_params(cx.tree, function)
        .into_iter()
        .filter(|param| {
            param.name == "iface"
                || param.type_comment == Some(QGIS_INTERFACE)
                || param
                    .annotation
                    .and_then(|ann| name_id(cx.tree, ann))
                    .is_some_and(|ann| ann == QGIS_INTERFACE)
        })
        .map(|_| Diagnostic::at(function, Code::Qgs105, messages::QGS105))
        .collect()
}

/// QGS107: `def exec_(...)`.
pub fn exec_definition(cx: &Context<'_>, function: Node<'_>) -> Option<Diagnostic> {
    (function_name(cx, function) == Some(EXEC_ALIAS))
        .then(|| Diagnostic::at(function, Code::Qgs107, messages::QGS107))
}

/// QGS107: `obj.exec_`.
pub fn exec_attribute(cx: &Context<'_>, node: Node<'_>) -> Option<Diagnostic> {
    let attr = attribute(cx.tree, node)?;
    (attr.attr == EXEC_ALIAS).then(|| Diagnostic::at(node, Code::Qgs107, messages::QGS107))
}
