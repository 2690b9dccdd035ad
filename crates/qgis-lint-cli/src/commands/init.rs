//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# qgis-lint configuration

# Lowest severity that makes `qgis-lint check` exit with status 1
fail_on = "error"

# Code prefixes to report (empty = every code) and to drop
select = []
ignore = []

# Replace the bundled table of methods whose return value must be checked
# return_methods = "qgis_return_methods.json"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "."

# Glob patterns to exclude from analysis
exclude = [
    "**/.venv/**",
    "**/venv/**",
    "**/__pycache__/**",
]

# Respect .gitignore files
respect_gitignore = true

# Abort instead of skipping files that fail to parse
fail_on_parse_error = false

# Rule configurations, keyed by code or rule name
# Each rule can be enabled/disabled and have its severity overridden

[rules.QGS202]
enabled = true
# severity = "info"

# [rules.qvariant-type-enum]
# enabled = false
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("qgis-lint.toml"), force)?;

    println!("Created qgis-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit qgis-lint.toml to configure rules");
    println!("  2. Run: qgis-lint check");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
