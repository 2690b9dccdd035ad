//! Process-wide reference data consulted by the checks.

use crate::return_methods::ReturnCheckTable;
use std::collections::HashMap;
use std::sync::OnceLock;

/// `QVariant` type members and their `QMetaType` replacements.
///
/// Members missing from this list keep their name.
const QMETATYPE_MAPPING: &[(&str, &str)] = &[
    ("Invalid", "UnknownType"),
    ("BitArray", "QBitArray"),
    ("Bitmap", "QBitmap"),
    ("Brush", "QBrush"),
    ("ByteArray", "QByteArray"),
    ("Char", "QChar"),
    ("Color", "QColor"),
    ("Cursor", "QCursor"),
    ("Date", "QDate"),
    ("DateTime", "QDateTime"),
    ("EasingCurve", "QEasingCurve"),
    ("Uuid", "QUuid"),
    ("ModelIndex", "QModelIndex"),
    ("PersistentModelIndex", "QPersistentModelIndex"),
    ("Font", "QFont"),
    ("Hash", "QVariantHash"),
    ("Icon", "QIcon"),
    ("Image", "QImage"),
    ("KeySequence", "QKeySequence"),
    ("Line", "QLine"),
    ("LineF", "QLineF"),
    ("List", "QVariantList"),
    ("Locale", "QLocale"),
    ("Map", "QVariantMap"),
    ("Transform", "QTransform"),
    ("Matrix4x4", "QMatrix4x4"),
    ("Palette", "QPalette"),
    ("Pen", "QPen"),
    ("Pixmap", "QPixmap"),
    ("Point", "QPoint"),
    ("PointF", "QPointF"),
    ("Polygon", "QPolygon"),
    ("PolygonF", "QPolygonF"),
    ("Quaternion", "QQuaternion"),
    ("Rect", "QRect"),
    ("RectF", "QRectF"),
    ("RegularExpression", "QRegularExpression"),
    ("Region", "QRegion"),
    ("Size", "QSize"),
    ("SizeF", "QSizeF"),
    ("SizePolicy", "QSizePolicy"),
    ("String", "QString"),
    ("StringList", "QStringList"),
    ("TextFormat", "QTextFormat"),
    ("TextLength", "QTextLength"),
    ("Time", "QTime"),
    ("Url", "QUrl"),
    ("Vector2D", "QVector2D"),
    ("Vector3D", "QVector3D"),
    ("Vector4D", "QVector4D"),
    ("UserType", "User"),
];

/// `(root, member)` pairs renamed in Qt6, mapped to `(enum, new member)`.
const RENAMED_ENUMS: &[((&str, &str), (&str, &str))] = &[
    (("Qt", "MidButton"), ("MouseButton", "MiddleButton")),
    (("Qt", "TextColorRole"), ("ItemDataRole", "ForegroundRole")),
    (("Qt", "BackgroundColorRole"), ("ItemDataRole", "BackgroundRole")),
    (
        ("QPainter", "HighQualityAntialiasing"),
        ("RenderHint", "Antialiasing"),
    ),
];

/// Read-only tables shared by every analysis.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    return_methods: ReturnCheckTable,
    metatypes: HashMap<&'static str, &'static str>,
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::new(ReturnCheckTable::bundled())
    }
}

impl ReferenceTables {
    /// Builds the tables around the given return-value table.
    #[must_use]
    pub fn new(return_methods: ReturnCheckTable) -> Self {
        Self {
            return_methods,
            metatypes: QMETATYPE_MAPPING.iter().copied().collect(),
        }
    }

    /// The process-wide tables backed by the bundled return-value snapshot.
    pub fn global() -> &'static Self {
        static TABLES: OnceLock<ReferenceTables> = OnceLock::new();
        TABLES.get_or_init(Self::default)
    }

    /// The return-value lookup table.
    #[must_use]
    pub fn return_methods(&self) -> &ReturnCheckTable {
        &self.return_methods
    }

    /// The `QMetaType` member replacing `QVariant.<member>`.
    #[must_use]
    pub fn metatype_for<'a>(&self, member: &'a str) -> &'a str {
        self.metatypes.get(member).copied().unwrap_or(member)
    }

    /// The `(enum, new member)` replacing `root.member`, if it was renamed.
    #[must_use]
    pub fn renamed_enum(&self, root: &str, member: &str) -> Option<(&'static str, &'static str)> {
        RENAMED_ENUMS
            .iter()
            .find(|((r, m), _)| *r == root && *m == member)
            .map(|(_, new)| *new)
    }
}
