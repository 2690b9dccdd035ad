//! Check command implementation.

use anyhow::{Context, Result};
use qgis_lint_core::{Analyzer, Config};
use qgis_lint_rules::{Preset, QgisRules};
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Command-line overrides for one `check` run.
#[derive(Debug, Default)]
pub struct CheckOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated code prefixes to report.
    pub select: Option<String>,
    /// Comma-separated code prefixes to drop.
    pub ignore: Option<String>,
    /// Predefined selection, used when `select` is absent.
    pub preset: Option<Preset>,
    /// Extra exclude globs.
    pub exclude: Vec<String>,
    /// Replacement return-value table.
    pub return_methods: Option<PathBuf>,
}

/// Runs the check command.
///
/// Returns `false` when a violation reaches the `fail_on` threshold.
pub fn run(path: &Path, options: CheckOptions, source: &ConfigSource) -> Result<bool> {
    let mut config = load_config(source)?;
    apply_options(&mut config, &options);

    let threshold = config
        .fail_on_severity()
        .context("Invalid fail_on in configuration")?;

    let rules = match return_methods_path(&config, &options, source) {
        Some(table) => {
            tracing::info!("Using return-value table: {}", table.display());
            QgisRules::with_return_methods(&table)
        }
        None => QgisRules::new(),
    };

    let analyzer = Analyzer::builder()
        .root(path)
        .config(config)
        .excludes(options.exclude)
        .rule(rules)
        .build()
        .context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, options.format, analyzer.root())?;

    Ok(!result.has_violations_at(threshold))
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    match source {
        ConfigSource::Default => Ok(Config::default()),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p).with_context(|| format!("Failed to load config: {}", p.display()))
        }
    }
}

/// Command-line selections replace the configured ones.
fn apply_options(config: &mut Config, options: &CheckOptions) {
    if let Some(select) = &options.select {
        config.select = split_codes(select);
    } else if let Some(preset) = options.preset {
        config.select = preset.select();
    }
    if let Some(ignore) = &options.ignore {
        config.ignore = split_codes(ignore);
    }
}

/// `--return-methods` is taken as given; a configured path is relative to
/// the config file.
fn return_methods_path(
    config: &Config,
    options: &CheckOptions,
    source: &ConfigSource,
) -> Option<PathBuf> {
    if let Some(path) = &options.return_methods {
        return Some(path.clone());
    }
    let configured = config.return_methods.as_ref()?;
    let base = source.path().and_then(Path::parent);
    Some(match base {
        Some(dir) if configured.is_relative() => dir.join(configured),
        _ => configured.clone(),
    })
}

fn split_codes(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_ascii_uppercase)
        .collect()
}
