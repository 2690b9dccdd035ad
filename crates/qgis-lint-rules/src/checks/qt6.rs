//! Qt5 to Qt6 migration rules (QGS402-QGS412).
//!
//! Patterns follow the QGIS `pyqt5_to_pyqt6` porting script: removed
//! `QVariant` type members, renamed enums, `QFontMetrics.width()`,
//! `activated[str]`, `QDesktopWidget`, variadic `addAction`, `QVariant`
//! used as NULL and the old `QDateTime` constructors.

use super::Context;
use crate::code::Code;
use crate::collector::Diagnostic;
use crate::messages;
use crate::shape::{
    attribute, call_args, call_function, name_id, single_subscript, string_value, Attribute,
};
use tree_sitter::Node;

/// `addAction` overloads with this many positional arguments or more are fragile.
const ADD_ACTION_ARG_COUNT: usize = 4;
/// Positional arguments of the removed `QDateTime(y, m, d, h, M, s, ms, ts)` form.
const QDATETIME_ARG_COUNT: usize = 8;

/// The attribute access `node` is the object of, if any.
fn enclosing_attribute<'a>(cx: &Context<'a>, node: Node<'_>) -> Option<Attribute<'a, 'a>> {
    let parent = cx.parents.logical_parent(node)?;
    attribute(cx.tree, parent)
}

/// The bare name a call is made on, e.g. `QVariant` in `QVariant()`.
fn called_name<'a>(cx: &Context<'a>, call: Node<'_>) -> Option<&'a str> {
    name_id(cx.tree, call_function(call)?)
}

/// The member name of an attribute call, e.g. `width` in `fm.width()`.
fn called_method<'a, 't>(cx: &Context<'a>, call: Node<'t>) -> Option<Attribute<'t, 'a>> {
    attribute(cx.tree, call_function(call)?)
}

/// QGS402: `QVariant.Int`, `QVariant.Type.Int`.
///
/// The visitor skips this check once a QGS410 diagnostic exists.
pub fn qvariant_type_enum(cx: &Context<'_>, node: Node<'_>) -> Option<Diagnostic> {
    let attr = attribute(cx.tree, node)?;
    if name_id(cx.tree, attr.object) != Some("QVariant") {
        return None;
    }

    let (old, new) = match enclosing_attribute(cx, node) {
        Some(outer) if attr.attr == "Type" => (
            format!("Type.{}", outer.attr),
            cx.tables.metatype_for(outer.attr),
        ),
        _ => (attr.attr.to_string(), cx.tables.metatype_for(attr.attr)),
    };
    Some(Diagnostic::at(node, Code::Qgs402, messages::qgs402(new, &old)))
}

/// QGS403: `Qt.MidButton` and the scoped `Qt.MouseButton.MidButton`.
pub fn renamed_enum(cx: &Context<'_>, node: Node<'_>) -> Option<Diagnostic> {
    let attr = attribute(cx.tree, node)?;
    let root = name_id(cx.tree, attr.object)?;

    if let Some((enum_name, member)) = cx.tables.renamed_enum(root, attr.attr) {
        let new = format!("{root}.{enum_name}.{member}");
        let old = format!("{root}.{}", attr.attr);
        return Some(Diagnostic::at(node, Code::Qgs403, messages::qgs403(&new, &old)));
    }

    let outer = enclosing_attribute(cx, node)?;
    let (enum_name, member) = cx.tables.renamed_enum(root, outer.attr)?;
    let new = format!("{root}.{enum_name}.{member}");
    let old = format!("{root}.{}.{}", attr.attr, outer.attr);
    Some(Diagnostic::at(node, Code::Qgs403, messages::qgs403(&new, &old)))
}

/// QGS404: `QFontMetrics(font).width` or `<something metrics>.width`.
pub fn font_metrics_width(cx: &Context<'_>, node: Node<'_>) -> Option<Diagnostic> {
    let attr = attribute(cx.tree, node)?;
    if attr.attr != "width" {
        return None;
    }

    let object = attr.object;
    let on_constructor = object.kind() == "call"
        && called_name(cx, object).is_some_and(|n| matches!(n, "QFontMetrics" | "QFontMetricsF"));
    // Heuristic: variables such as `font_metrics` or `fm_metrics`.
    let on_metrics_name =
        name_id(cx.tree, object).is_some_and(|n| n.to_lowercase().contains("metrics"));

    (on_constructor || on_metrics_name)
        .then(|| Diagnostic::at(node, Code::Qgs404, messages::QGS404))
}

/// QGS404: `widget.fontMetrics.width(...)`.
pub fn font_metrics_width_call(cx: &Context<'_>, call: Node<'_>) -> Option<Diagnostic> {
    let method = called_method(cx, call)?;
    if method.attr != "width" {
        return None;
    }
    let holder = attribute(cx.tree, method.object)?;
    matches!(holder.attr.to_lowercase().as_str(), "fontmetrics" | "qfontmetrics")
        .then(|| Diagnostic::at(call, Code::Qgs404, messages::QGS404))
}

/// QGS405: `combo.activated[str]` and `combo.activated['str']`.
pub fn activated_str(cx: &Context<'_>, node: Node<'_>) -> Option<Diagnostic> {
    let signal = attribute(cx.tree, node.child_by_field_name("value")?)?;
    if signal.attr != "activated" {
        return None;
    }
    let index = single_subscript(node)?;
    let is_str = name_id(cx.tree, index) == Some("str")
        || string_value(cx.tree, index).as_deref() == Some("str");
    is_str.then(|| Diagnostic::at(node, Code::Qgs405, messages::QGS405))
}

/// QGS407: `QApplication.desktop()`.
pub fn desktop_widget(cx: &Context<'_>, call: Node<'_>) -> Option<Diagnostic> {
    (called_method(cx, call)?.attr == "desktop")
        .then(|| Diagnostic::at(call, Code::Qgs407, messages::QGS407))
}

/// QGS409: `menu.addAction(icon, text, receiver, slot)`.
pub fn fragile_add_action(cx: &Context<'_>, call: Node<'_>) -> Option<Diagnostic> {
    if called_method(cx, call)?.attr != "addAction" {
        return None;
    }
    (call_args(cx.tree, call).positional.len() >= ADD_ACTION_ARG_COUNT)
        .then(|| Diagnostic::at(call, Code::Qgs409, messages::QGS409))
}

/// QGS410: `QVariant()` and `QVariant(QVariant.Int)` used as NULL.
pub fn qvariant_null(cx: &Context<'_>, call: Node<'_>) -> Option<Diagnostic> {
    if called_name(cx, call)? != "QVariant" {
        return None;
    }

    let args = call_args(cx.tree, call);
    let attr = match args.positional.as_slice() {
        [] => "",
        [arg]
            if attribute(cx.tree, *arg)
                .is_some_and(|a| name_id(cx.tree, a.object) == Some("QVariant")) =>
        {
            "QVariant"
        }
        _ => return None,
    };
    Some(Diagnostic::at(call, Code::Qgs410, messages::qgs410(attr)))
}

/// QGS411: `QDateTime(yyyy, mm, dd, hh, MM, ss, ms, ts)`.
pub fn qdatetime_eight_args(cx: &Context<'_>, call: Node<'_>) -> Option<Diagnostic> {
    if called_name(cx, call)? != "QDateTime" {
        return None;
    }
    (call_args(cx.tree, call).positional.len() == QDATETIME_ARG_COUNT)
        .then(|| Diagnostic::at(call, Code::Qgs411, messages::QGS411))
}

/// QGS412: `QDateTime(QDate(...))`.
pub fn qdatetime_from_qdate(cx: &Context<'_>, call: Node<'_>) -> Option<Diagnostic> {
    if called_name(cx, call)? != "QDateTime" {
        return None;
    }
    let args = call_args(cx.tree, call);
    let [arg] = args.positional.as_slice() else {
        return None;
    };
    (arg.kind() == "call" && called_name(cx, *arg) == Some("QDate"))
        .then(|| Diagnostic::at(call, Code::Qgs412, messages::QGS412))
}
