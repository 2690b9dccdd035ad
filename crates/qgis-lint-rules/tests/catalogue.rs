//! End-to-end behaviour of every QGS check through the plugin adapter.

use qgis_lint_core::SourceTree;
use qgis_lint_rules::{Plugin, ReferenceTables, ReturnCheckTable};
use std::collections::BTreeSet;

/// Renders reports as `line:col message`, the format flake8-qgis tests use.
fn results(source: &str) -> BTreeSet<String> {
    let tree = SourceTree::parse(source).expect("valid python");
    Plugin::new(&tree)
        .run()
        .map(|(line, col, msg, _)| format!("{line}:{col} {msg}"))
        .collect()
}

fn ordered(source: &str) -> Vec<String> {
    let tree = SourceTree::parse(source).expect("valid python");
    Plugin::new(&tree)
        .run()
        .map(|(line, col, msg, _)| format!("{line}:{col} {}", &msg[..6]))
        .collect()
}

fn set<const N: usize>(items: [&str; N]) -> BTreeSet<String> {
    items.into_iter().map(String::from).collect()
}

#[test]
fn trivial_case() {
    assert!(results("").is_empty());
}

#[test]
fn plugin_identity() {
    assert!(Plugin::VERSION.contains('.'));
    assert!(!Plugin::NAME.is_empty());
}

#[test]
fn qgs101_private_module_from_import() {
    assert!(results("from qgs.core import QgsMapLayer, QgsVectorLayer").is_empty());
    assert!(results("from qgis._3d import *").is_empty());

    let mut found = results("from qgs._core import QgsMapLayer, QgsVectorLayer");
    found.extend(results("from qgis._core import QgsApplication"));
    assert_eq!(
        found,
        set([
            "1:0 QGS101 Use 'from qgis.core import QgsApplication' instead of 'from \
             qgis._core import QgsApplication'",
            "1:0 QGS101 Use 'from qgs.core import QgsMapLayer, QgsVectorLayer' instead of \
             'from qgs._core import QgsMapLayer, QgsVectorLayer'",
        ])
    );
}

#[test]
fn qgs102_private_module_import() {
    assert!(results("import qgs.core.QgsVectorLayer as QgsVectorLayer").is_empty());
    assert!(results("import qgis._3d").is_empty());
    assert_eq!(
        results("import qgs._core.QgsVectorLayer as QgsVectorLayer"),
        set(["1:0 QGS102 Use 'import qgs.core.QgsVectorLayer' instead of 'import \
              qgs._core.QgsVectorLayer'"])
    );
}

#[test]
fn qgs103_pyqt_from_import() {
    let mut passing = results("from qgis.PyQt.QtCore import pyqtSignal");
    passing.extend(results("from qgis.PyQt.QtWidgets import QCheckBox"));
    assert!(passing.is_empty());

    let mut found = results("from PyQt5.QtCore import pyqtSignal");
    found.extend(results("from PyQt6.QtWidgets import QCheckBox"));
    assert_eq!(
        found,
        set([
            "1:0 QGS103 Use 'from qgis.PyQt.QtWidgets import QCheckBox' instead of 'from \
             PyQt6.QtWidgets import QCheckBox'",
            "1:0 QGS103 Use 'from qgis.PyQt.QtCore import pyqtSignal' instead of 'from \
             PyQt5.QtCore import pyqtSignal'",
        ])
    );
}

#[test]
fn qgs104_pyqt_import() {
    assert!(results("import qgis.PyQt.QtCore.pyqtSignal as pyqtSignal").is_empty());
    assert_eq!(
        results("import PyQt5.QtCore.pyqtSignal as pyqtSignal"),
        set(["1:0 QGS104 Use 'import qgis.PyQt.QtCore.pyqtSignal' instead of 'import \
              PyQt5.QtCore.pyqtSignal'"])
    );
}

const QGS105: &str = "QGS105 Do not pass iface (QgisInterface) as an argument, instead import \
                      it: 'from qgis.utils import iface'";

#[test]
fn qgs105_iface_parameter() {
    assert!(results("\ndef classFactory(iface):\n    pass\n").is_empty());
    assert_eq!(
        results("\ndef some_function(somearg, iface):\n    pass\n"),
        set([&*format!("2:0 {QGS105}")])
    );
    assert_eq!(
        results("\ndef some_function(somearg, interface: QgisInterface):\n    pass\n"),
        set([&*format!("2:0 {QGS105}")])
    );
    assert_eq!(
        results("\nclass SomeClass:\n    def some_method(self, somearg, iface):\n        pass\n"),
        set([&*format!("3:4 {QGS105}")])
    );

    let found = results(
        "\nclass SomeClass:\n    @staticmethod\n    def some_method(somearg, iface):\n        pass\n",
    );
    assert_eq!(found.len(), 1);
    assert!(found.iter().all(|r| r.ends_with(QGS105)));
}

#[test]
fn qgs106_gdal_ogr_import() {
    let mut passing = results("from osgeo import gdal");
    passing.extend(results("from osgeo import ogr"));
    assert!(passing.is_empty());

    let mut found = results("import gdal");
    found.extend(results("import ogr"));
    assert_eq!(
        found,
        set([
            "1:0 QGS106 Use 'from osgeo import gdal' instead of 'import gdal'",
            "1:0 QGS106 Use 'from osgeo import ogr' instead of 'import ogr'",
        ])
    );
}

#[test]
fn qgs107_exec_alias() {
    assert_eq!(
        results("dialog.exec_()"),
        set(["1:0 QGS107 Use 'exec' instead of 'exec_'"])
    );
    assert_eq!(
        results("def exec_(): pass"),
        set(["1:0 QGS107 Use 'exec' instead of 'exec_'"])
    );
}

#[test]
fn coroutine_definitions_are_not_checked() {
    assert!(results("async def f(iface): pass").is_empty());
    assert!(results("async def exec_(): pass").is_empty());
    assert_eq!(ordered("async def f(iface):\n    dialog.exec_()\n"), vec!["2:4 QGS107"]);
}

#[test]
fn qgs108_and_qgs109_temporary_output() {
    assert_eq!(
        results("output = \"TEMPORARY_OUTPUT\""),
        set(["1:9 QGS108 Replace 'TEMPORARY_OUTPUT' with QgsProcessing.TEMPORARY_OUTPUT"])
    );
    assert_eq!(
        results(
            "\nprocessing.run(\"foo\", \"bar\", \"TEMPORARY_OUTPUT\", is_child_algorithm=True)\n"
        ),
        set(["2:29 QGS108 Replace 'TEMPORARY_OUTPUT' with QgsProcessing.TEMPORARY_OUTPUT"])
    );
    assert_eq!(
        results("output = \"TEMPORARY_OUTPT\""),
        set(["1:9 QGS109 Replace 'TEMPORARY_OUTPT' with QgsProcessing.TEMPORARY_OUTPUT"])
    );
    assert_eq!(
        results("output = \"TEMPORARY_OUTPUTS\""),
        set(["1:9 QGS109 Replace 'TEMPORARY_OUTPUTS' with QgsProcessing.TEMPORARY_OUTPUT"])
    );
    assert!(results("output = \"something else\"").is_empty());
}

#[test]
fn qgs108_formatted_string_runs() {
    let expected =
        set(["1:4 QGS108 Replace 'TEMPORARY_OUTPUT' with QgsProcessing.TEMPORARY_OUTPUT"]);
    assert_eq!(results("x = f\"TEMPORARY_OUTPUT\""), expected);
    assert_eq!(results("x = f\"TEMPORARY_OUTPUT{y}\""), expected);
    assert_eq!(results("x = \"TEMPORARY\" f\"_OUTPUT{y}\""), expected);
    assert_eq!(
        ordered("x = f\"{a}TEMPORARY_OUTPUT{b}TEMPORARY_OUTPT\""),
        vec!["1:4 QGS108", "1:4 QGS109"]
    );
    assert!(results("x = b\"TEMPORARY_OUTPUT\"").is_empty());
}

#[test]
fn qgs110_processing_run() {
    let expected =
        set(["1:0 QGS110 Use is_child_algorithm=True when running other algorithms in the plugin"]);
    assert!(results("processing.run('native:buffer', {}, is_child_algorithm=True)").is_empty());
    assert_eq!(results("processing.run('native:buffer', {})"), expected);
    assert_eq!(
        results("processing.run('native:buffer', {}, is_child_algorithm=False)"),
        expected
    );
}

#[test]
fn qgs201_imported_class() {
    let cases = [
        ("addMapLayer", "from qgis.core import QgsProject", "QgsProject.addMapLayer()"),
        (
            "saveWithDetails",
            "from qgis.core import QgsAttributeForm",
            "QgsAttributeForm.saveWithDetails()",
        ),
    ];
    for (method, imports, expected) in cases {
        let source = format!("\n{imports}\n\nproject.instance().{method}('foo')\n");
        assert_eq!(
            results(&source),
            set([&*format!(
                "4:0 QGS201 Check the success flag and possibly error message from return \
                 value of {expected}."
            )]),
            "{method}"
        );
    }
}

#[test]
fn qgs201_result_used() {
    assert!(results(
        "\nfrom qgis.core import QgsProject\n\nlayer = project.instance().addMapLayer('foo')\n"
    )
    .is_empty());
}

#[test]
fn qgs202_unconfirmed_class() {
    assert_eq!(
        results("project.addMapLayer(layer)"),
        set(["1:0 QGS202 Check the success flag and possibly error message from return \
              value of the method if it is some of (QgsMapLayerStore.addMapLayer(), \
              QgsProject.addMapLayer()). Otherwise ignore this error."])
    );
    // Lowercase method names are too common to report without an import.
    assert!(results("project.prepare(layer)").is_empty());
    assert!(results("project.calculate(layer)").is_empty());
}

#[test]
fn qgs202_lowercase_names_with_imports() {
    let found =
        results("from qgis.core import QgsProperty, QgsDiagramLayerSettings\nx.prepare(c)\n");
    assert_eq!(
        found,
        set(["2:0 QGS201 Check the success flag and possibly error message from return \
              value of some of (QgsDiagramLayerSettings.prepare(), QgsProperty.prepare())."])
    );
}

#[test]
fn qgs202_used_as_condition() {
    assert!(results("\nif project.read(\"foo\"):\n    pass\n").is_empty());
    assert!(results("\nwhile not project.commitChanges():\n    pass\n").is_empty());
}

#[test]
fn qgs401_qapp() {
    assert_eq!(
        results("qApp.processEvents()"),
        set(["1:0 QGS401 Use 'QApplication.instance()' or 'QgsApplication.instance()' \
              instead of 'qApp'"])
    );
}

#[test]
fn qgs402_qvariant_types() {
    assert_eq!(
        results("QVariant.Type.UInt"),
        set(["1:0 QGS402 Use 'QMetaType.UInt' or 'QMetaType.Type.UInt' instead of \
              'QVariant.Type.UInt'. WARNING: after this, the plugin may not be compatible \
              with QGIS 3."])
    );
    assert_eq!(
        results("QVariant.Int"),
        set(["1:0 QGS402 Use 'QMetaType.Int' or 'QMetaType.Type.Int' instead of \
              'QVariant.Int'. WARNING: after this, the plugin may not be compatible with \
              QGIS 3."])
    );
    assert_eq!(
        results("QVariant.Invalid"),
        set(["1:0 QGS402 Use 'QMetaType.UnknownType' or 'QMetaType.Type.UnknownType' \
              instead of 'QVariant.Invalid'. WARNING: after this, the plugin may not be \
              compatible with QGIS 3."])
    );
}

#[test]
fn qgs402_not_repeated_after_null_enum() {
    assert_eq!(ordered("a = QVariant.NULL\nb = QVariant.Int\n"), vec!["1:4 QGS402"]);
}

#[test]
fn qgs403_renamed_enums() {
    assert_eq!(
        results("value = QPainter.HighQualityAntialiasing"),
        set(["1:8 QGS403 Enum has been changed in Qt6. Use \
              'QPainter.RenderHint.Antialiasing' instead of \
              'QPainter.HighQualityAntialiasing'."])
    );
    assert_eq!(
        results("role = Qt.MouseButton.MidButton"),
        set(["1:7 QGS403 Enum has been changed in Qt6. Use 'Qt.MouseButton.MiddleButton' \
              instead of 'Qt.MouseButton.MidButton'."])
    );
}

#[test]
fn qgs404_font_metrics_width() {
    let expected = set(["1:0 QGS404 QFontMetrics.width() has been removed in Qt6. \
                         Use QFontMetrics.horizontalAdvance() or \
                         QFontMetrics.boundingRect().width() instead."]);
    assert_eq!(results("QFontMetrics.width()"), expected);
    assert_eq!(results("font_metrics.width()"), expected);
    assert!(results("self.width()").is_empty());
}

#[test]
fn qgs405_activated_str() {
    assert_eq!(
        results("combo_box.activated[str].connect(foo)"),
        set(["1:0 QGS405 activated[str] has been removed in Qt6, use textActivated instead"])
    );
}

#[test]
fn qgs406_qregexp() {
    let message = "QGS406 QRegExp is removed in Qt6, use QRegularExpression instead";
    assert_eq!(
        results("from qgis.PyQt.QtCore import QRegExp"),
        set([&*format!("1:0 {message}")])
    );
    assert_eq!(results("import QRegExp"), set([&*format!("1:0 {message}")]));
    assert_eq!(results("re = QRegExp('foo')"), set([&*format!("1:5 {message}")]));
}

#[test]
fn qgs407_desktop() {
    assert_eq!(
        results("QApplication.desktop()"),
        set(["1:0 QGS407 QDesktopWidget is removed in Qt6. Replace with alternative \
              approach instead."])
    );
}

#[test]
fn qgs408_compiled_resources() {
    let expected = set(["1:0 QGS408 support for compiled resources is removed in Qt6. Directly \
                         load icon resources. by file path and load UI fields using \
                         uic.loadUiType by file path instead."]);
    assert_eq!(results("import resources_rc"), expected);
    assert_eq!(results("from resources_rc import item"), expected);
}

#[test]
fn qgs409_add_action() {
    assert!(results("menu.addAction(foo, bar, baz)").is_empty());
    assert_eq!(
        results("menu.addAction(foo, bar, baz, qux)"),
        set(["1:0 QGS409 fragile call to addAction. Use my_action = QAction(...), \
              obj.addAction(my_action) instead."])
    );
}

#[test]
fn qgs410_qvariant_null() {
    assert_eq!(
        results("val = QVariant()"),
        set(["1:6 QGS410 Invalid conversion of QVariant() to NULL. Use from qgis.core \
              import NULL instead."])
    );
    assert_eq!(
        results("val = QVariant(QVariant.Int)"),
        set(["1:6 QGS410 Invalid conversion of QVariant(QVariant) to NULL. Use from \
              qgis.core import NULL instead."])
    );
}

#[test]
fn qgs411_qdatetime_eight_args() {
    assert_eq!(
        results("val = QDateTime(0,0,0,0,0,0,0,0)"),
        set(["1:6 QGS411 QDateTime(yyyy, mm, dd, hh, MM, ss, ms, ts) doesn't work anymore \
              in Qt6, port to more reliable QDateTime(QDate, QTime, ts) form."])
    );
}

#[test]
fn qgs412_qdatetime_from_qdate() {
    assert_eq!(
        results("val = QDateTime(QDate(2023, 1, 1))"),
        set(["1:6 QGS412 QDateTime(QDate(...)) doesn't work anymore in Qt6, \
              port to more reliable QDatetime(QDate, QTime(0,0,0)) form."])
    );
}

#[test]
fn diagnostics_follow_traversal_order() {
    let source = "\
import gdal
def exec_(iface):
    qApp.quit()
    return 'TEMPORARY_OUTPUT'
";
    assert_eq!(
        ordered(source),
        vec!["1:0 QGS106", "2:0 QGS105", "2:0 QGS107", "3:4 QGS401", "4:11 QGS108"]
    );
}

#[test]
fn import_diagnostics_come_first() {
    assert_eq!(
        ordered("qApp.quit()\nimport PyQt5.QtCore\n"),
        vec!["2:0 QGS104", "1:0 QGS401"]
    );
}

#[test]
fn analysis_is_idempotent() {
    let source = "from PyQt5.QtCore import QVariant\nx = QVariant.String\nlayer.commitChanges()\n";
    let tree = SourceTree::parse(source).expect("valid python");
    let plugin = Plugin::new(&tree);
    let first: Vec<_> = plugin.run().collect();
    assert_eq!(first, plugin.run().collect::<Vec<_>>());
    assert_eq!(first.len(), 3);
}

#[test]
fn empty_return_table_silences_only_return_checks() {
    let tree =
        SourceTree::parse("project.addMapLayer(layer)\ndialog.exec_()\n").expect("valid python");
    let tables = ReferenceTables::new(ReturnCheckTable::new());
    let codes: Vec<String> = Plugin::with_tables(&tree, &tables)
        .run()
        .map(|(_, _, msg, _)| msg[..6].to_string())
        .collect();
    assert_eq!(codes, vec!["QGS107"]);
}
