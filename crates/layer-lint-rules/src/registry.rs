//! Built-in rule registry and name-based selection.

use std::collections::HashSet;

use layer_lint_core::RuleSet;
use thiserror::Error;

use crate::{
    no_application_to_infrastructure, no_bootstrap_dependency, no_cyclic_dependency,
    no_domain_to_application, no_domain_to_infrastructure, NoApplicationToInfrastructure,
    NoBootstrapDependency, NoCyclicDependency, NoDomainToApplication, NoDomainToInfrastructure,
};

/// A rule selection named a rule that does not exist.
#[derive(Debug, Clone, Error)]
#[error("unknown rule `{name}`, expected one of: {}", .valid.join(", "))]
pub struct UnknownRuleError {
    /// The name that failed to resolve.
    pub name: String,
    /// Every valid rule name.
    pub valid: Vec<&'static str>,
}

/// The canonical names of all built-in rules, in code order.
#[must_use]
pub fn rule_names() -> Vec<&'static str> {
    vec![
        no_domain_to_application::NAME,
        no_domain_to_infrastructure::NAME,
        no_application_to_infrastructure::NAME,
        no_bootstrap_dependency::NAME,
        no_cyclic_dependency::NAME,
    ]
}

/// Returns the default rule set: all five built-in rules.
#[must_use]
pub fn all_rules() -> RuleSet {
    RuleSet::new()
        .with_edge_rule(NoDomainToApplication::new())
        .with_edge_rule(NoDomainToInfrastructure::new())
        .with_edge_rule(NoApplicationToInfrastructure::new())
        .with_edge_rule(NoBootstrapDependency::new())
        .with_graph_rule(NoCyclicDependency::new())
}

/// Builds a rule set containing exactly the named built-in rules.
///
/// Rules can be selected by name (`no-cyclic-dependency`) or by code
/// (`LL005`); naming a rule twice registers it once.
///
/// # Errors
///
/// Returns [`UnknownRuleError`] if any entry matches no built-in rule.
pub fn rule_set_from_names<S: AsRef<str>>(names: &[S]) -> Result<RuleSet, UnknownRuleError> {
    let mut rules = RuleSet::new();
    let mut seen: HashSet<&'static str> = HashSet::new();

    for name in names {
        match name.as_ref() {
            "no-domain-to-application" | "LL001" => {
                if seen.insert(no_domain_to_application::CODE) {
                    rules.push_edge_rule(Box::new(NoDomainToApplication::new()));
                }
            }
            "no-domain-to-infrastructure" | "LL002" => {
                if seen.insert(no_domain_to_infrastructure::CODE) {
                    rules.push_edge_rule(Box::new(NoDomainToInfrastructure::new()));
                }
            }
            "no-application-to-infrastructure" | "LL003" => {
                if seen.insert(no_application_to_infrastructure::CODE) {
                    rules.push_edge_rule(Box::new(NoApplicationToInfrastructure::new()));
                }
            }
            "no-bootstrap-dependency" | "LL004" => {
                if seen.insert(no_bootstrap_dependency::CODE) {
                    rules.push_edge_rule(Box::new(NoBootstrapDependency::new()));
                }
            }
            "no-cyclic-dependency" | "LL005" => {
                if seen.insert(no_cyclic_dependency::CODE) {
                    rules.push_graph_rule(Box::new(NoCyclicDependency::new()));
                }
            }
            other => {
                return Err(UnknownRuleError {
                    name: other.to_string(),
                    valid: rule_names(),
                })
            }
        }
    }

    Ok(rules)
}
