//! Diagnostic message templates.
//!
//! The text of every message is part of the output contract shared with
//! existing flake8-based tooling and must not change.

use crate::code::Code;

pub const QGS105: &str = "QGS105 Do not pass iface (QgisInterface) as an argument, \
     instead import it: 'from qgis.utils import iface'";
pub const QGS107: &str = "QGS107 Use 'exec' instead of 'exec_'";
pub const QGS108: &str = "QGS108 Replace 'TEMPORARY_OUTPUT' with QgsProcessing.TEMPORARY_OUTPUT";
pub const QGS110: &str =
    "QGS110 Use is_child_algorithm=True when running other algorithms in the plugin";
pub const QGS401: &str =
    "QGS401 Use 'QApplication.instance()' or 'QgsApplication.instance()' instead of 'qApp'";
pub const QGS404: &str = "QGS404 QFontMetrics.width() has been removed in Qt6. \
     Use QFontMetrics.horizontalAdvance() or QFontMetrics.boundingRect().width() instead.";
pub const QGS405: &str =
    "QGS405 activated[str] has been removed in Qt6, use textActivated instead";
pub const QGS406: &str = "QGS406 QRegExp is removed in Qt6, use QRegularExpression instead";
pub const QGS407: &str =
    "QGS407 QDesktopWidget is removed in Qt6. Replace with alternative approach instead.";
pub const QGS408: &str = "QGS408 support for compiled resources is removed in Qt6. \
     Directly load icon resources. by file path and load UI fields using \
     uic.loadUiType by file path instead.";
pub const QGS409: &str = "QGS409 fragile call to addAction. \
     Use my_action = QAction(...), obj.addAction(my_action) instead.";
pub const QGS411: &str = "QGS411 QDateTime(yyyy, mm, dd, hh, MM, ss, ms, ts) doesn't work \
     anymore in Qt6, port to more reliable QDateTime(QDate, QTime, ts) form.";
pub const QGS412: &str = "QGS412 QDateTime(QDate(...)) doesn't work anymore in Qt6, \
     port to more reliable QDatetime(QDate, QTime(0,0,0)) form.";

/// QGS101 / QGS103.
pub fn from_import_use_instead_of(
    code: Code,
    correct_module: &str,
    module: &str,
    members: &str,
) -> String {
    format!(
        "{code} Use 'from {correct_module} import {members}' \
         instead of 'from {module} import {members}'"
    )
}

/// QGS102 / QGS104.
pub fn import_use_instead_of(code: Code, correct: &str, incorrect: &str) -> String {
    format!("{code} Use 'import {correct}' instead of 'import {incorrect}'")
}

pub fn qgs106(members: &str) -> String {
    format!("QGS106 Use 'from osgeo import {members}' instead of 'import {members}'")
}

pub fn qgs109(old: &str) -> String {
    format!("QGS109 Replace '{old}' with QgsProcessing.TEMPORARY_OUTPUT")
}

pub fn qgs201(method: &str) -> String {
    format!(
        "QGS201 Check the success flag and possibly error message \
         from return value of {method}."
    )
}

pub fn qgs202(method: &str) -> String {
    format!(
        "QGS202 Check the success flag and possibly error message from return value \
         of the method if it is {method}. Otherwise ignore this error."
    )
}

pub fn qgs402(new: &str, old: &str) -> String {
    format!(
        "QGS402 Use 'QMetaType.{new}' or 'QMetaType.Type.{new}' instead of \
         'QVariant.{old}'. WARNING: after this, the plugin may not be compatible with QGIS 3."
    )
}

pub fn qgs403(new: &str, old: &str) -> String {
    format!("QGS403 Enum has been changed in Qt6. Use '{new}' instead of '{old}'.")
}

pub fn qgs410(attr: &str) -> String {
    format!(
        "QGS410 Invalid conversion of QVariant({attr}) to NULL. \
         Use from qgis.core import NULL instead."
    )
}
