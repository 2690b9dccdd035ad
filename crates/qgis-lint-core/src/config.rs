//! Configuration types for qgis-lint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for qgis-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Severity threshold for a failing exit status (default: "error").
    #[serde(default)]
    pub fail_on: Option<String>,

    /// Code prefixes to report. Empty means every code.
    #[serde(default)]
    pub select: Vec<String>,

    /// Code prefixes to drop, applied after `select`.
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Replacement for the bundled return-value lookup table.
    #[serde(default)]
    pub return_methods: Option<PathBuf>,

    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Per-rule configurations, keyed by code (`QGS202`) or name.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled, looking it up by code and by name.
    #[must_use]
    pub fn is_rule_enabled(&self, code: &str, name: &str) -> bool {
        self.rule_config(code, name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, code: &str, name: &str) -> Option<crate::Severity> {
        self.rule_config(code, name).and_then(|c| c.severity)
    }

    /// Applies `select` and `ignore` prefix lists to a code.
    ///
    /// Prefixes follow flake8: `QGS4` matches every `QGS4xx` code.
    #[must_use]
    pub fn is_code_selected(&self, code: &str) -> bool {
        let selected =
            self.select.is_empty() || self.select.iter().any(|p| code.starts_with(p.as_str()));
        selected && !self.ignore.iter().any(|p| code.starts_with(p.as_str()))
    }

    /// Parses `fail_on`, defaulting to [`Severity::Error`](crate::Severity::Error).
    ///
    /// # Errors
    ///
    /// Returns an error if `fail_on` names an unknown severity.
    pub fn fail_on_severity(&self) -> Result<crate::Severity, ConfigError> {
        self.fail_on
            .as_deref()
            .map_or(Ok(crate::Severity::Error), |s| {
                s.parse().map_err(|message| ConfigError::Parse { message })
            })
    }

    fn rule_config(&self, code: &str, name: &str) -> Option<&RuleConfig> {
        self.rules.get(code).or_else(|| self.rules.get(name))
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,

    /// Maximum number of parallel file analyses.
    #[serde(default)]
    pub parallelism: Option<usize>,

    /// Abort the run when a file fails to parse instead of skipping it.
    #[serde(default)]
    pub fail_on_parse_error: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: vec![
                "**/.venv/**".to_string(),
                "**/venv/**".to_string(),
                "**/__pycache__/**".to_string(),
            ],
            respect_gitignore: true,
            parallelism: None,
            fail_on_parse_error: false,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_true() -> bool {
    true
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<crate::Severity>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.analyzer.respect_gitignore);
        assert!(config.rules.is_empty());
        assert!(config.is_code_selected("QGS101"));
        assert_eq!(config.fail_on_severity().unwrap(), Severity::Error);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
fail_on = "warning"
ignore = ["QGS2"]
return_methods = "data/methods.json"

[analyzer]
root = "./plugin"
exclude = ["**/generated/**"]
parallelism = 2

[rules.QGS105]
enabled = false

[rules.exec-alias]
severity = "info"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.analyzer.root, PathBuf::from("./plugin"));
        assert_eq!(config.analyzer.parallelism, Some(2));
        assert_eq!(config.return_methods, Some(PathBuf::from("data/methods.json")));
        assert_eq!(config.fail_on_severity().unwrap(), Severity::Warning);

        assert!(!config.is_rule_enabled("QGS105", "iface-parameter"));
        assert!(config.is_rule_enabled("QGS107", "exec-alias"));
        assert_eq!(
            config.rule_severity("QGS107", "exec-alias"),
            Some(Severity::Info)
        );
    }

    #[test]
    fn select_and_ignore_are_prefixes() {
        let config = Config {
            select: vec!["QGS1".into(), "QGS4".into()],
            ignore: vec!["QGS108".into()],
            ..Config::default()
        };
        assert!(config.is_code_selected("QGS101"));
        assert!(config.is_code_selected("QGS412"));
        assert!(!config.is_code_selected("QGS108"));
        assert!(!config.is_code_selected("QGS201"));
    }

    #[test]
    fn unknown_fail_on_is_an_error() {
        let config = Config::parse("fail_on = \"fatal\"").expect("valid toml");
        assert!(config.fail_on_severity().is_err());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(matches!(
            Config::parse("[analyzer\nroot = 1"),
            Err(ConfigError::Parse { .. })
        ));
    }
}
