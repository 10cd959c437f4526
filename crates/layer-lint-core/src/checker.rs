//! Conformance checker: runs a rule set over a module graph.

use thiserror::Error;
use tracing::{debug, info};

use crate::graph::ModuleGraph;
use crate::report::ViolationReport;
use crate::rule::RuleSet;

/// Errors raised when a check cannot run at all.
///
/// Rule violations are not errors; they come back inside the report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// The rule set contains no enabled rules.
    #[error("no enabled rules: a conformance check needs at least one rule")]
    EmptyRuleSet,
}

/// Runs a [`RuleSet`] over a [`ModuleGraph`] and aggregates the result.
///
/// Checking is read-only: the graph is borrowed immutably and every rule
/// is a pure predicate, so checking the same graph with the same rules
/// twice yields identical reports.
pub struct Checker {
    rules: RuleSet,
}

impl Checker {
    /// Creates a checker over the given rule set.
    #[must_use]
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// The rule set this checker runs.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Checks the graph against every enabled rule.
    ///
    /// Edge rules see each dependency edge once; graph rules see the
    /// whole graph. An empty graph trivially conforms and produces an
    /// empty report.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::EmptyRuleSet`] if no rule is enabled. The
    /// check refuses to run rather than handing back a vacuously clean
    /// report.
    pub fn check(&self, graph: &ModuleGraph) -> Result<ViolationReport, CheckError> {
        if self.rules.enabled_count() == 0 {
            return Err(CheckError::EmptyRuleSet);
        }

        info!(
            "checking {} module(s) and {} dependency edge(s) with {} rule(s)",
            graph.module_count(),
            graph.dependency_count(),
            self.rules.enabled_count()
        );

        let mut violations = Vec::new();

        for rule in self.rules.edge_rules() {
            if !self.rules.is_enabled(rule.name()) {
                debug!("skipping disabled rule: {}", rule.name());
                continue;
            }
            for dep in graph.dependencies() {
                if let Some(violation) = rule.check(&dep) {
                    violations.push(violation);
                }
            }
        }

        for rule in self.rules.graph_rules() {
            if !self.rules.is_enabled(rule.name()) {
                debug!("skipping disabled rule: {}", rule.name());
                continue;
            }
            violations.extend(rule.check_graph(graph));
        }

        info!("check complete: {} violation(s) found", violations.len());

        Ok(ViolationReport::new(violations))
    }
}
