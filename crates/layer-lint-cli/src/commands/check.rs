//! Check command implementation.

use anyhow::{Context, Result};
use layer_lint_core::{Checker, Manifest, RuleSet};
use layer_lint_rules::{all_rules, rule_set_from_names};
use std::path::Path;

use crate::OutputFormat;

/// Runs the check command.
pub fn run(manifest_path: &Path, format: OutputFormat, rules_filter: Option<&str>) -> Result<()> {
    let manifest = Manifest::from_file(manifest_path)
        .with_context(|| format!("failed to load manifest: {}", manifest_path.display()))?;

    let rules = select_rules(rules_filter, manifest.enabled_rules.as_deref())?;

    tracing::info!(
        "checking {} with {} module(s) and {} dependency edge(s)",
        manifest_path.display(),
        manifest.graph.module_count(),
        manifest.graph.dependency_count()
    );

    let checker = Checker::new(rules);
    let report = checker
        .check(&manifest.graph)
        .context("conformance check did not run")?;

    super::output::print(&report, format)?;

    // Exit with error code if there are violations
    if !report.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

/// Resolves the rule set: the command-line filter wins over the
/// manifest's `[rules]` table, which wins over the full built-in set.
fn select_rules(filter: Option<&str>, from_manifest: Option<&[String]>) -> Result<RuleSet> {
    let rules = match (filter, from_manifest) {
        (Some(filter), _) => {
            let names: Vec<&str> = filter.split(',').map(str::trim).collect();
            rule_set_from_names(&names)?
        }
        (None, Some(names)) => rule_set_from_names(names)?,
        (None, None) => all_rules(),
    };
    Ok(rules)
}
