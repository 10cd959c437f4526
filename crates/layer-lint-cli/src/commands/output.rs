//! Shared output formatting for violation reports.

use anyhow::Result;
use layer_lint_core::ViolationReport;

use crate::OutputFormat;

/// Print a violation report in the specified format.
pub fn print(report: &ViolationReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report),
        OutputFormat::Json => return print_json(report),
        OutputFormat::Compact => print_compact(report),
    }
    Ok(())
}

fn print_text(report: &ViolationReport) {
    for violation in report {
        println!(
            "\x1b[31m{}\x1b[0m {}: {} -> {}",
            violation.code, violation.rule, violation.from, violation.to
        );
        println!("  {}", violation.message);
        println!();
    }

    if report.is_empty() {
        println!("\x1b[32mNo layer violations found\x1b[0m");
    } else {
        println!("\x1b[31mFound {} violation(s)\x1b[0m", report.len());
    }
}

fn print_json(report: &ViolationReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}

fn print_compact(report: &ViolationReport) {
    for violation in report {
        println!("{violation}");
    }
}
