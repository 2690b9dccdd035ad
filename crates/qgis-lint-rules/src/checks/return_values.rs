//! Discarded results of QGIS methods that report failure through their
//! return value (QGS201 / QGS202).
//!
//! A method name alone says little: `prepare` or `read` exist on many
//! unrelated classes. The classes registered for the method are narrowed to
//! the ones the module imports. A confirmed class gives the strict QGS201;
//! otherwise the lenient QGS202 is reported, but only for camelCase names
//! that are unlikely to collide with ordinary Python methods.

use super::Context;
use crate::code::Code;
use crate::collector::Diagnostic;
use crate::messages;
use crate::shape::{attribute, call_function, significant_children};
use tree_sitter::Node;

/// Wrappers a condition walk passes through on its way to the statement.
const CONDITION_WRAPPERS: &[&str] = &[
    "not_operator",
    "unary_operator",
    "boolean_operator",
    "comparison_operator",
    "binary_operator",
    "named_expression",
    "parenthesized_expression",
];

/// Returns true if `call` is the whole expression of an expression statement.
pub fn call_is_ignored(cx: &Context<'_>, call: Node<'_>) -> bool {
    let Some(parent) = cx.parents.logical_parent(call) else {
        return false;
    };
    if parent.kind() != "expression_statement" {
        return false;
    }

    // `a(), b()` is a tuple expression, not a discarded call.
    let mut cursor = parent.walk();
    let has_comma = parent.children(&mut cursor).any(|c| c.kind() == ",");
    !has_comma && significant_children(parent).len() == 1
}

/// Returns true if the result of `call` is the test of an `if`, `elif`,
/// `while` or `assert`, possibly nested inside operators.
pub fn used_as_condition(cx: &Context<'_>, call: Node<'_>) -> bool {
    let mut current = call;
    while let Some(parent) = cx.parents.parent(current) {
        match parent.kind() {
            "subscript" | "attribute" => return false,
            kind if CONDITION_WRAPPERS.contains(&kind) => current = parent,
            "if_statement" | "elif_clause" | "while_statement" => {
                return parent
                    .child_by_field_name("condition")
                    .is_some_and(|test| test.id() == current.id());
            }
            "assert_statement" => {
                return significant_children(parent)
                    .first()
                    .is_some_and(|test| test.id() == current.id());
            }
            _ => return false,
        }
    }
    false
}

/// `A.m()` for one class, `some of (A.m(), B.m())` for several.
fn describe(classes: &[&str], method: &str) -> String {
    match classes {
        [class] => format!("{class}.{method}()"),
        _ => {
            let calls: Vec<String> = classes
                .iter()
                .map(|class| format!("{class}.{method}()"))
                .collect();
            format!("some of ({})", calls.join(", "))
        }
    }
}

/// QGS201 / QGS202 for a discarded `obj.method(...)` result.
pub fn unchecked_return_value(cx: &Context<'_>, call: Node<'_>) -> Option<Diagnostic> {
    let method = attribute(cx.tree, call_function(call)?)?.attr;
    if method.is_empty() {
        return None;
    }
    let classes = cx.tables.return_methods().classes_for(method)?;
    if !call_is_ignored(cx, call) || used_as_condition(cx, call) {
        return None;
    }

    let camel_case = method.chars().any(char::is_uppercase);
    if classes.is_empty() {
        return camel_case.then(|| Diagnostic::at(call, Code::Qgs202, messages::qgs202(method)));
    }

    let imported: Vec<&str> = cx.imported.intersect(classes).into_iter().collect();
    if !imported.is_empty() {
        let described = describe(&imported, method);
        return Some(Diagnostic::at(call, Code::Qgs201, messages::qgs201(&described)));
    }
    if !camel_case {
        return None;
    }

    let all: Vec<&str> = classes.iter().map(String::as_str).collect();
    let described = describe(&all, method);
    Some(Diagnostic::at(call, Code::Qgs202, messages::qgs202(&described)))
}
