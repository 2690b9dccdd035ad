//! Code selections for common configurations.

use crate::code::Code;

/// Preset selections of QGS codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Every code except the lenient QGS202.
    #[default]
    Recommended,
    /// Every code.
    Strict,
    /// Only the Qt6 / QGIS 4 migration codes (`QGS4xx`).
    Qt6,
}

impl Preset {
    /// All presets, for listings.
    pub const ALL: [Self; 3] = [Self::Recommended, Self::Strict, Self::Qt6];

    /// Kebab-case preset name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Strict => "strict",
            Self::Qt6 => "qt6",
        }
    }

    /// The codes this preset reports.
    #[must_use]
    pub fn codes(self) -> Vec<Code> {
        Code::ALL
            .into_iter()
            .filter(|code| match self {
                Self::Recommended => *code != Code::Qgs202,
                Self::Strict => true,
                Self::Qt6 => code.as_str().starts_with("QGS4"),
            })
            .collect()
    }

    /// The codes as `select` entries for the analyzer configuration.
    #[must_use]
    pub fn select(self) -> Vec<String> {
        self.codes().into_iter().map(|c| c.as_str().to_string()).collect()
    }
}

impl std::str::FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown preset '{s}' (expected recommended, strict or qt6)"))
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
