//! Integration tests for the analyzer over a temporary plugin tree.

use qgis_lint_core::syntax::{position, preorder};
use qgis_lint_core::{
    Analyzer, Config, FileContext, Location, Rule, Severity, SourceTree, Violation,
};
use std::fs;
use std::path::PathBuf;

/// Flags every bare `qApp` reference.
struct QAppName;

impl Rule for QAppName {
    fn name(&self) -> &'static str {
        "qapp-name"
    }

    fn description(&self) -> &'static str {
        "Flags the qApp global"
    }

    fn check(&self, ctx: &FileContext, tree: &SourceTree) -> Vec<Violation> {
        preorder(tree.root())
            .filter(|n| n.kind() == "identifier" && tree.text(*n) == "qApp")
            .map(|n| {
                let (line, column) = position(n);
                Violation::new(
                    "QGS401",
                    self.name(),
                    Severity::Error,
                    Location::new(ctx.relative_path.clone(), line, column),
                    "QGS401 Use 'QApplication.instance()' or 'QgsApplication.instance()' instead of 'qApp'",
                )
            })
            .collect()
    }
}

fn plugin_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::create_dir_all(dir.path().join("my_plugin/ui")).expect("mkdir");
    fs::write(
        dir.path().join("my_plugin/__init__.py"),
        "def classFactory(iface):\n    return None\n",
    )
    .expect("write");
    fs::write(
        dir.path().join("my_plugin/main.py"),
        "from qgis.PyQt.QtWidgets import qApp\n\nqApp.processEvents()  # noqa\nqApp.quit()\n",
    )
    .expect("write");
    fs::write(dir.path().join("my_plugin/ui/dialog.py"), "app = qApp\n").expect("write");
    dir
}

#[test]
fn reports_in_path_order_with_noqa_applied() {
    let dir = plugin_tree();
    let analyzer = Analyzer::builder()
        .root(dir.path())
        .rule(QAppName)
        .build()
        .expect("analyzer");

    let result = analyzer.analyze().expect("analysis");
    assert_eq!(result.files_checked, 3);

    let found: Vec<(PathBuf, usize, usize)> = result
        .violations
        .iter()
        .map(|v| (v.location.file.clone(), v.location.line, v.location.column))
        .collect();
    assert_eq!(
        found,
        vec![
            (PathBuf::from("my_plugin/main.py"), 1, 32),
            (PathBuf::from("my_plugin/main.py"), 4, 0),
            (PathBuf::from("my_plugin/ui/dialog.py"), 1, 6),
        ]
    );
}

#[test]
fn config_excludes_and_disables() {
    let dir = plugin_tree();

    let config = Config::parse(
        r#"
[analyzer]
exclude = ["**/ui/**"]
parallelism = 2
"#,
    )
    .expect("config");
    let analyzer = Analyzer::builder()
        .root(dir.path())
        .config(config)
        .rule(QAppName)
        .build()
        .expect("analyzer");
    let result = analyzer.analyze().expect("analysis");
    assert_eq!(result.files_checked, 2);
    assert_eq!(result.violations.len(), 2);

    let disabled = Config::parse("[rules.QGS401]\nenabled = false\n").expect("config");
    let analyzer = Analyzer::builder()
        .root(dir.path())
        .config(disabled)
        .rule(QAppName)
        .build()
        .expect("analyzer");
    assert!(analyzer.analyze().expect("analysis").violations.is_empty());
}
