//! List rules command implementation.

use qgis_lint_rules::{Code, Preset};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<8} {:<32} {:<8} Description", "Code", "Name", "Severity");
    println!("{}", "-".repeat(100));

    for code in Code::ALL {
        println!(
            "{:<8} {:<32} {:<8} {}",
            code.as_str(),
            code.name(),
            code.default_severity().to_string(),
            code.description()
        );
    }

    println!("\nPresets:");
    for preset in Preset::ALL {
        let codes = preset.select();
        let summary = match preset {
            Preset::Recommended => "every code except QGS202",
            Preset::Strict => "every code",
            Preset::Qt6 => "Qt6 / QGIS 4 migration codes",
        };
        println!("  {:<12} - {} ({} codes)", preset.name(), summary, codes.len());
    }

    println!("\nUse --select / --ignore with codes or prefixes, e.g.:");
    println!("  qgis-lint check --select QGS1,QGS401");
    println!("  qgis-lint check --preset qt6 --ignore QGS402");
}
