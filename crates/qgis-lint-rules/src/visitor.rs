//! Pre-order traversal dispatching each node to its checks.
//!
//! The order of checks within a node kind is part of the behaviour: QGS410
//! on a call retracts QGS402 diagnostics collected earlier, and QGS402 is not
//! reported at all once a Qt6 diagnostic mentioning `NULL` exists.

use crate::ancestry::ParentMap;
use crate::checks::{
    imports, literals, names, processing, qt6, return_values, signatures, Context,
};
use crate::code::Code;
use crate::collector::Diagnostics;
use crate::imports::ImportedNames;
use crate::shape::{call_function, import_from, import_names, significant_children};
use crate::tables::ReferenceTables;
use qgis_lint_core::syntax::{named_children, preorder};
use qgis_lint_core::SourceTree;
use std::collections::VecDeque;
use tracing::trace;
use tree_sitter::Node;

/// Python AST node categories the catalogue cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// `import a.b, c as d`
    Import,
    /// `from m import a, b as c`
    ImportFrom,
    /// `def f(...)`; coroutines are [`Other`](Self::Other).
    FunctionDef,
    /// An identifier used as a value.
    Name,
    /// `object.attr`
    Attribute,
    /// `f(...)`
    Call,
    /// `value[index]`
    Subscript,
    /// A string literal, implicitly concatenated parts counted once.
    StringConstant,
    /// Anything else.
    Other,
}

/// Parents whose identifier children are parameter names.
const PARAMETER_LISTS: &[&str] = &["parameters", "lambda_parameters", "typed_parameter"];

fn is_field(parent: Node<'_>, field: &str, node: Node<'_>) -> bool {
    parent
        .child_by_field_name(field)
        .is_some_and(|child| child.id() == node.id())
}

/// Returns true if the identifier `node` is an expression, as opposed to a
/// binding name, member name or part of an import path.
fn is_name(cx: &Context<'_>, node: Node<'_>) -> bool {
    let Some(parent) = cx.parents.parent(node) else {
        return false;
    };
    match parent.kind() {
        "dotted_name" | "aliased_import" | "global_statement" | "nonlocal_statement" => false,
        kind if PARAMETER_LISTS.contains(&kind) => false,
        "attribute" => !is_field(parent, "attribute", node),
        "keyword_argument"
        | "default_parameter"
        | "typed_default_parameter"
        | "function_definition"
        | "class_definition" => !is_field(parent, "name", node),
        "list_splat_pattern" | "dictionary_splat_pattern" => !cx
            .parents
            .parent(parent)
            .is_some_and(|p| PARAMETER_LISTS.contains(&p.kind())),
        // `except E as e`: the bound name is not an expression.
        "except_clause" => significant_children(parent)
            .first()
            .is_some_and(|first| first.id() == node.id()),
        "as_pattern_target" => !cx
            .parents
            .parent(parent)
            .and_then(|pattern| cx.parents.parent(pattern))
            .is_some_and(|p| p.kind() == "except_clause"),
        _ => true,
    }
}

fn is_async(node: Node<'_>) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|child| child.kind() == "async");
    found
}

/// Classifies a tree-sitter node.
pub fn classify(cx: &Context<'_>, node: Node<'_>) -> NodeKind {
    match node.kind() {
        "import_statement" => NodeKind::Import,
        "import_from_statement" | "future_import_statement" => NodeKind::ImportFrom,
        "function_definition" if !is_async(node) => NodeKind::FunctionDef,
        "identifier" if is_name(cx, node) => NodeKind::Name,
        "attribute" => NodeKind::Attribute,
        "call" => NodeKind::Call,
        "subscript" => NodeKind::Subscript,
        "concatenated_string" => NodeKind::StringConstant,
        "string"
            if !cx
                .parents
                .logical_parent(node)
                .is_some_and(|p| p.kind() == "concatenated_string") =>
        {
            NodeKind::StringConstant
        }
        _ => NodeKind::Other,
    }
}

fn visit(cx: &Context<'_>, node: Node<'_>, out: &mut Diagnostics) {
    match classify(cx, node) {
        NodeKind::ImportFrom => {
            let Some(import) = import_from(cx.tree, node) else {
                return;
            };
            out.extend(imports::private_module_from_import(node, &import));
            out.extend(imports::pyqt_from_import(node, &import));
            out.extend(imports::qregexp_from_import(node, &import));
            out.extend(imports::resources_from_import(node, &import));
        }
        NodeKind::Import => {
            let names = import_names(cx.tree, node);
            out.extend(imports::private_module_import(node, &names));
            out.extend(imports::pyqt_import(node, &names));
            out.extend(imports::gdal_ogr_import(node, &names));
            out.extend(imports::qregexp_import(node, &names));
            out.extend(imports::resources_import(node, &names));
        }
        NodeKind::FunctionDef => {
            out.extend(signatures::iface_parameter(cx, node));
            out.extend(signatures::exec_definition(cx, node));
        }
        NodeKind::Name => {
            out.extend(names::qapp_global(cx, node));
            out.extend(names::qregexp_name(cx, node));
        }
        NodeKind::Attribute => {
            out.extend(signatures::exec_attribute(cx, node));
            if !out.reports_null() {
                out.extend(qt6::qvariant_type_enum(cx, node));
            }
            out.extend(qt6::renamed_enum(cx, node));
            out.extend(qt6::font_metrics_width(cx, node));
        }
        NodeKind::Call => visit_call(cx, node, out),
        NodeKind::Subscript => out.extend(qt6::activated_str(cx, node)),
        NodeKind::StringConstant => out.extend(literals::temporary_output(cx, node)),
        NodeKind::Other => {}
    }
}

fn visit_call(cx: &Context<'_>, call: Node<'_>, out: &mut Diagnostics) {
    let Some(callee) = call_function(call) else {
        return;
    };
    match callee.kind() {
        "attribute" => {
            out.extend(qt6::font_metrics_width_call(cx, call));
            out.extend(qt6::desktop_widget(cx, call));
            out.extend(qt6::fragile_add_action(cx, call));
            out.extend(processing::processing_run(cx, call));
            out.extend(return_values::unchecked_return_value(cx, call));
        }
        "identifier" => {
            if let Some(null) = qt6::qvariant_null(cx, call) {
                out.push(null);
                let retracted = out.retract(Code::Qgs402);
                if retracted > 0 {
                    trace!(retracted, "QGS410 superseded earlier QGS402 diagnostics");
                }
            }
            out.extend(qt6::qdatetime_eight_args(cx, call));
            out.extend(qt6::qdatetime_from_qdate(cx, call));
        }
        _ => {}
    }
}

fn is_import(node: Node<'_>) -> bool {
    matches!(
        node.kind(),
        "import_statement" | "import_from_statement" | "future_import_statement"
    )
}

/// Import statements in breadth-first order.
fn imports_breadth_first(root: Node<'_>) -> Vec<Node<'_>> {
    let mut found = Vec::new();
    let mut queue = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        if is_import(node) {
            found.push(node);
        } else {
            queue.extend(named_children(node));
        }
    }
    found
}

/// Runs every check over `tree`.
///
/// Imports are collected and parent links recorded before the first check
/// runs, so results do not depend on where in the module an import appears.
/// Import diagnostics come first, breadth-first, followed by everything else
/// in pre-order.
#[must_use]
pub fn analyze(tree: &SourceTree, tables: &ReferenceTables) -> Diagnostics {
    let imported = ImportedNames::prescan(tree);
    let parents = ParentMap::annotate(tree.root());
    let cx = Context {
        tree,
        parents: &parents,
        imported: &imported,
        tables,
    };

    let mut out = Diagnostics::new();
    for node in imports_breadth_first(tree.root()) {
        visit(&cx, node, &mut out);
    }
    for node in preorder(tree.root()).filter(|node| !is_import(*node)) {
        visit(&cx, node, &mut out);
    }
    out
}
