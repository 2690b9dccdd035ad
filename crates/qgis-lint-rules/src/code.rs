//! Rule codes reported by the QGIS checks.

use qgis_lint_core::Severity;

/// One of the QGIS rule codes.
///
/// Codes are grouped by hundreds: `QGS1xx` for general plugin hygiene,
/// `QGS2xx` for unchecked return values and `QGS4xx` for Qt6 / QGIS 4
/// migration issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Code {
    Qgs101,
    Qgs102,
    Qgs103,
    Qgs104,
    Qgs105,
    Qgs106,
    Qgs107,
    Qgs108,
    Qgs109,
    Qgs110,
    Qgs201,
    Qgs202,
    Qgs401,
    Qgs402,
    Qgs403,
    Qgs404,
    Qgs405,
    Qgs406,
    Qgs407,
    Qgs408,
    Qgs409,
    Qgs410,
    Qgs411,
    Qgs412,
}

impl Code {
    /// Every code, in catalogue order.
    pub const ALL: [Self; 24] = [
        Self::Qgs101,
        Self::Qgs102,
        Self::Qgs103,
        Self::Qgs104,
        Self::Qgs105,
        Self::Qgs106,
        Self::Qgs107,
        Self::Qgs108,
        Self::Qgs109,
        Self::Qgs110,
        Self::Qgs201,
        Self::Qgs202,
        Self::Qgs401,
        Self::Qgs402,
        Self::Qgs403,
        Self::Qgs404,
        Self::Qgs405,
        Self::Qgs406,
        Self::Qgs407,
        Self::Qgs408,
        Self::Qgs409,
        Self::Qgs410,
        Self::Qgs411,
        Self::Qgs412,
    ];

    /// The code text, e.g. `"QGS101"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Qgs101 => "QGS101",
            Self::Qgs102 => "QGS102",
            Self::Qgs103 => "QGS103",
            Self::Qgs104 => "QGS104",
            Self::Qgs105 => "QGS105",
            Self::Qgs106 => "QGS106",
            Self::Qgs107 => "QGS107",
            Self::Qgs108 => "QGS108",
            Self::Qgs109 => "QGS109",
            Self::Qgs110 => "QGS110",
            Self::Qgs201 => "QGS201",
            Self::Qgs202 => "QGS202",
            Self::Qgs401 => "QGS401",
            Self::Qgs402 => "QGS402",
            Self::Qgs403 => "QGS403",
            Self::Qgs404 => "QGS404",
            Self::Qgs405 => "QGS405",
            Self::Qgs406 => "QGS406",
            Self::Qgs407 => "QGS407",
            Self::Qgs408 => "QGS408",
            Self::Qgs409 => "QGS409",
            Self::Qgs410 => "QGS410",
            Self::Qgs411 => "QGS411",
            Self::Qgs412 => "QGS412",
        }
    }

    /// Kebab-case rule name, usable as a configuration key.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Qgs101 => "private-module-from-import",
            Self::Qgs102 => "private-module-import",
            Self::Qgs103 => "pyqt-from-import",
            Self::Qgs104 => "pyqt-import",
            Self::Qgs105 => "iface-parameter",
            Self::Qgs106 => "gdal-ogr-import",
            Self::Qgs107 => "exec-alias",
            Self::Qgs108 => "temporary-output-literal",
            Self::Qgs109 => "temporary-output-typo",
            Self::Qgs110 => "processing-run-not-child",
            Self::Qgs201 => "unchecked-return-value",
            Self::Qgs202 => "possibly-unchecked-return-value",
            Self::Qgs401 => "qapp-global",
            Self::Qgs402 => "qvariant-type-enum",
            Self::Qgs403 => "renamed-enum",
            Self::Qgs404 => "font-metrics-width",
            Self::Qgs405 => "activated-str-signal",
            Self::Qgs406 => "qregexp",
            Self::Qgs407 => "desktop-widget",
            Self::Qgs408 => "compiled-resources",
            Self::Qgs409 => "fragile-add-action",
            Self::Qgs410 => "qvariant-null",
            Self::Qgs411 => "qdatetime-eight-args",
            Self::Qgs412 => "qdatetime-from-qdate",
        }
    }

    /// One-line description for `list-rules`.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Qgs101 => "Don't use imports from qgis protected members",
            Self::Qgs102 => "Don't import qgis protected members",
            Self::Qgs103 => "Don't use from-imports from PyQt directly",
            Self::Qgs104 => "Don't import PyQt directly",
            Self::Qgs105 => "Don't pass QgisInterface as an argument",
            Self::Qgs106 => "Don't import gdal or ogr directly, import them from osgeo",
            Self::Qgs107 => "Use 'exec' instead of 'exec_'",
            Self::Qgs108 => "Use QgsProcessing.TEMPORARY_OUTPUT instead of the literal",
            Self::Qgs109 => "Misspelled 'TEMPORARY_OUTPUT' literal",
            Self::Qgs110 => "Use is_child_algorithm=True with processing.run in plugins",
            Self::Qgs201 => "Check the return value of a call that reports success",
            Self::Qgs202 => "Check the return value if the call is the QGIS method",
            Self::Qgs401 => "qApp is removed in Qt6",
            Self::Qgs402 => "QVariant types are replaced by QMetaType in Qt6",
            Self::Qgs403 => "Enum member has been renamed in Qt6",
            Self::Qgs404 => "QFontMetrics.width() is removed in Qt6",
            Self::Qgs405 => "activated[str] is removed in Qt6",
            Self::Qgs406 => "QRegExp is removed in Qt6",
            Self::Qgs407 => "QDesktopWidget is removed in Qt6",
            Self::Qgs408 => "Compiled resources are removed in Qt6",
            Self::Qgs409 => "Fragile addAction call with four or more arguments",
            Self::Qgs410 => "QVariant() is not a valid NULL in Qt6",
            Self::Qgs411 => "QDateTime with eight integer arguments is removed in Qt6",
            Self::Qgs412 => "QDateTime(QDate) is unreliable in Qt6",
        }
    }

    /// Severity used unless the configuration overrides it.
    ///
    /// The lenient return-value variant only warns since the method name may
    /// belong to an unrelated class.
    #[must_use]
    pub fn default_severity(self) -> Severity {
        match self {
            Self::Qgs202 => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Looks a code up by its text (`QGS107`) or its rule name (`exec-alias`).
    #[must_use]
    pub fn lookup(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(key) || code.name() == key)
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
