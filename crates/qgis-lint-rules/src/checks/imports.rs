//! Import-shape rules: private QGIS modules, bare PyQt packages, GDAL/OGR,
//! `QRegExp` and compiled resources.

use crate::code::Code;
use crate::collector::Diagnostic;
use crate::messages;
use crate::shape::ImportFrom;
use qgis_lint_core::utils::{first_segment, replace_first_segment};
use tree_sitter::Node;

const PYQT_PACKAGES: &[&str] = &["PyQt4", "PyQt5", "PyQt6"];
const QGIS_PYQT: &str = "qgis.PyQt";
const RESOURCES_MODULE: &str = "resources_rc";

/// Public spelling of a private QGIS module path, e.g. `qgis._core` to
/// `qgis.core`.
///
/// Only the second segment is considered, and `_3d` is a real module name.
#[must_use]
pub fn public_module(module: &str) -> Option<String> {
    let mut segments: Vec<&str> = module.split('.').collect();
    let (Some(&root), Some(&second)) = (segments.first(), segments.get(1)) else {
        return None;
    };
    if !matches!(root, "qgs" | "qgis") || second == "_3d" {
        return None;
    }
    let stripped = second.strip_prefix('_')?;
    segments[1] = stripped;
    Some(segments.join("."))
}

/// `qgis.PyQt` spelling of a module under a versioned PyQt package.
#[must_use]
pub fn qgis_pyqt_module(module: &str) -> Option<String> {
    PYQT_PACKAGES
        .contains(&first_segment(module))
        .then(|| replace_first_segment(module, QGIS_PYQT))
}

fn rewritten_from_import(
    node: Node<'_>,
    import: &ImportFrom,
    code: Code,
    rewrite: fn(&str) -> Option<String>,
) -> Option<Diagnostic> {
    let module = import.module.as_deref()?;
    let correct = rewrite(module)?;
    let members = import.names.join(", ");
    Some(Diagnostic::at(
        node,
        code,
        messages::from_import_use_instead_of(code, &correct, module, &members),
    ))
}

fn rewritten_imports(
    node: Node<'_>,
    names: &[String],
    code: Code,
    rewrite: fn(&str) -> Option<String>,
) -> Vec<Diagnostic> {
    names
        .iter()
        .filter_map(|name| {
            let correct = rewrite(name)?;
            Some(Diagnostic::at(
                node,
                code,
                messages::import_use_instead_of(code, &correct, name),
            ))
        })
        .collect()
}

/// QGS101: `from qgis._core import X`.
pub fn private_module_from_import(node: Node<'_>, import: &ImportFrom) -> Option<Diagnostic> {
    rewritten_from_import(node, import, Code::Qgs101, public_module)
}

/// QGS103: `from PyQt5.QtCore import X`.
pub fn pyqt_from_import(node: Node<'_>, import: &ImportFrom) -> Option<Diagnostic> {
    rewritten_from_import(node, import, Code::Qgs103, qgis_pyqt_module)
}

/// QGS406: one diagnostic per `QRegExp` among the imported names.
pub fn qregexp_from_import(node: Node<'_>, import: &ImportFrom) -> Vec<Diagnostic> {
    import
        .names
        .iter()
        .filter(|name| *name == "QRegExp")
        .map(|_| Diagnostic::at(node, Code::Qgs406, messages::QGS406))
        .collect()
}

/// QGS408: `from resources_rc import X`.
pub fn resources_from_import(node: Node<'_>, import: &ImportFrom) -> Option<Diagnostic> {
    (import.module.as_deref() == Some(RESOURCES_MODULE))
        .then(|| Diagnostic::at(node, Code::Qgs408, messages::QGS408))
}

/// QGS102: `import qgis._core`.
pub fn private_module_import(node: Node<'_>, names: &[String]) -> Vec<Diagnostic> {
    rewritten_imports(node, names, Code::Qgs102, public_module)
}

/// QGS104: `import PyQt5.QtCore`.
pub fn pyqt_import(node: Node<'_>, names: &[String]) -> Vec<Diagnostic> {
    rewritten_imports(node, names, Code::Qgs104, qgis_pyqt_module)
}

/// QGS106: `import gdal` / `import ogr`.
pub fn gdal_ogr_import(node: Node<'_>, names: &[String]) -> Vec<Diagnostic> {
    names
        .iter()
        .filter(|name| matches!(name.as_str(), "gdal" | "ogr"))
        .map(|name| Diagnostic::at(node, Code::Qgs106, messages::qgs106(name)))
        .collect()
}

/// QGS406: `import QRegExp`.
pub fn qregexp_import(node: Node<'_>, names: &[String]) -> Vec<Diagnostic> {
    names
        .iter()
        .filter(|name| *name == "QRegExp")
        .map(|_| Diagnostic::at(node, Code::Qgs406, messages::QGS406))
        .collect()
}

/// QGS408: `import resources_rc`.
pub fn resources_import(node: Node<'_>, names: &[String]) -> Vec<Diagnostic> {
    names
        .iter()
        .filter(|name| *name == RESOURCES_MODULE)
        .map(|_| Diagnostic::at(node, Code::Qgs408, messages::QGS408))
        .collect()
}
