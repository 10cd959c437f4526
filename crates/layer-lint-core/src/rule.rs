//! Rule traits and the rule set the checker runs.
//!
//! Rules come in two flavors: [`EdgeRule`] judges one dependency edge at
//! a time from the edge and its endpoint layers alone, while [`GraphRule`]
//! sees the whole graph for properties (such as cycles) that no single
//! edge can reveal. Both are pure: checking never mutates the graph.

use std::collections::HashSet;

use crate::graph::{Dependency, ModuleGraph};
use crate::report::Violation;

/// A rule judging a single dependency edge.
///
/// Implementations must be pure functions of the edge and its endpoint
/// layers: no graph traversal, no interior state.
///
/// # Example
///
/// ```
/// use layer_lint_core::{Dependency, EdgeRule, Violation};
///
/// struct DenySharedUtil;
///
/// impl EdgeRule for DenySharedUtil {
///     fn name(&self) -> &'static str {
///         "deny-shared-util"
///     }
///
///     fn code(&self) -> &'static str {
///         "X001"
///     }
///
///     fn check(&self, dep: &Dependency<'_>) -> Option<Violation> {
///         (dep.to == "Shared.Util").then(|| {
///             Violation::new(
///                 self.code(),
///                 self.name(),
///                 dep.from,
///                 dep.to,
///                 "Shared.Util is being dismantled",
///             )
///         })
///     }
/// }
/// ```
pub trait EdgeRule: Send + Sync {
    /// Unique kebab-case rule name, e.g. `no-domain-to-infrastructure`.
    fn name(&self) -> &'static str;

    /// Stable rule code, e.g. `LL002`.
    fn code(&self) -> &'static str;

    /// One-line description for rule listings.
    fn description(&self) -> &'static str {
        ""
    }

    /// Judges one edge; returns a violation if the edge breaks the rule.
    fn check(&self, dep: &Dependency<'_>) -> Option<Violation>;
}

/// A rule judging the module graph as a whole.
///
/// Used for properties that live on the graph rather than on any single
/// edge, such as dependency cycles. Implementations must not mutate the
/// graph and should report one violation per offending edge so that
/// reports stay edge-addressed.
pub trait GraphRule: Send + Sync {
    /// Unique kebab-case rule name, e.g. `no-cyclic-dependency`.
    fn name(&self) -> &'static str;

    /// Stable rule code, e.g. `LL005`.
    fn code(&self) -> &'static str;

    /// One-line description for rule listings.
    fn description(&self) -> &'static str {
        ""
    }

    /// Judges the whole graph, one violation per offending edge.
    fn check_graph(&self, graph: &ModuleGraph) -> Vec<Violation>;
}

/// Boxed edge rule, for collections of heterogeneous rules.
pub type EdgeRuleBox = Box<dyn EdgeRule>;

/// Boxed graph rule, for collections of heterogeneous rules.
pub type GraphRuleBox = Box<dyn GraphRule>;

// ────────────────────────────────────────────
// RuleInfo / RuleSet
// ────────────────────────────────────────────

/// Metadata describing a registered rule, for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleInfo {
    /// Stable rule code.
    pub code: &'static str,
    /// Kebab-case rule name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
}

/// The set of rules a [`Checker`](crate::Checker) runs.
///
/// Rules are kept in registration order. Individual rules can be disabled
/// by name without removing them from the set; disabled rules are skipped
/// by the checker and do not count as enabled.
#[derive(Default)]
pub struct RuleSet {
    edge_rules: Vec<EdgeRuleBox>,
    graph_rules: Vec<GraphRuleBox>,
    disabled: HashSet<String>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an edge rule (builder form).
    #[must_use]
    pub fn with_edge_rule(mut self, rule: impl EdgeRule + 'static) -> Self {
        self.edge_rules.push(Box::new(rule));
        self
    }

    /// Adds a graph rule (builder form).
    #[must_use]
    pub fn with_graph_rule(mut self, rule: impl GraphRule + 'static) -> Self {
        self.graph_rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed edge rule.
    pub fn push_edge_rule(&mut self, rule: EdgeRuleBox) {
        self.edge_rules.push(rule);
    }

    /// Adds a boxed graph rule.
    pub fn push_graph_rule(&mut self, rule: GraphRuleBox) {
        self.graph_rules.push(rule);
    }

    /// Disables the named rule. Unknown names are remembered but have no
    /// effect.
    pub fn disable(&mut self, name: &str) {
        self.disabled.insert(name.to_string());
    }

    /// Re-enables a previously disabled rule.
    pub fn enable(&mut self, name: &str) {
        self.disabled.remove(name);
    }

    /// Returns `true` if the named rule is not disabled.
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        !self.disabled.contains(name)
    }

    /// Number of registered rules, enabled or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edge_rules.len() + self.graph_rules.len()
    }

    /// Returns `true` if no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edge_rules.is_empty() && self.graph_rules.is_empty()
    }

    /// Number of rules that are currently enabled.
    #[must_use]
    pub fn enabled_count(&self) -> usize {
        self.edge_rules
            .iter()
            .filter(|rule| self.is_enabled(rule.name()))
            .count()
            + self
                .graph_rules
                .iter()
                .filter(|rule| self.is_enabled(rule.name()))
                .count()
    }

    /// The registered edge rules, in registration order.
    #[must_use]
    pub fn edge_rules(&self) -> &[EdgeRuleBox] {
        &self.edge_rules
    }

    /// The registered graph rules, in registration order.
    #[must_use]
    pub fn graph_rules(&self) -> &[GraphRuleBox] {
        &self.graph_rules
    }

    /// Metadata for every registered rule, edge rules first, each group
    /// in registration order.
    #[must_use]
    pub fn infos(&self) -> Vec<RuleInfo> {
        self.edge_rules
            .iter()
            .map(|rule| RuleInfo {
                code: rule.code(),
                name: rule.name(),
                description: rule.description(),
            })
            .chain(self.graph_rules.iter().map(|rule| RuleInfo {
                code: rule.code(),
                name: rule.name(),
                description: rule.description(),
            }))
            .collect()
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("edge_rules", &self.edge_rules.iter().map(|r| r.name()).collect::<Vec<_>>())
            .field("graph_rules", &self.graph_rules.iter().map(|r| r.name()).collect::<Vec<_>>())
            .field("disabled", &self.disabled)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Layer;

    struct DenyEverything;

    impl EdgeRule for DenyEverything {
        fn name(&self) -> &'static str {
            "deny-everything"
        }

        fn code(&self) -> &'static str {
            "T001"
        }

        fn description(&self) -> &'static str {
            "No edge is acceptable"
        }

        fn check(&self, dep: &Dependency<'_>) -> Option<Violation> {
            Some(Violation::new(
                self.code(),
                self.name(),
                dep.from,
                dep.to,
                "nothing may depend on anything",
            ))
        }
    }

    struct CountModules;

    impl GraphRule for CountModules {
        fn name(&self) -> &'static str {
            "count-modules"
        }

        fn code(&self) -> &'static str {
            "T101"
        }

        fn check_graph(&self, graph: &ModuleGraph) -> Vec<Violation> {
            let _ = graph.module_count();
            Vec::new()
        }
    }

    #[test]
    fn edge_rule_default_description_is_empty() {
        struct Bare;
        impl EdgeRule for Bare {
            fn name(&self) -> &'static str {
                "bare"
            }
            fn code(&self) -> &'static str {
                "T000"
            }
            fn check(&self, _dep: &Dependency<'_>) -> Option<Violation> {
                None
            }
        }

        assert_eq!(Bare.description(), "");
    }

    #[test]
    fn edge_rule_judges_a_dependency() {
        let dep = Dependency {
            from: "A",
            from_layer: Layer::Domain,
            to: "B",
            to_layer: Layer::Application,
        };

        let violation = DenyEverything.check(&dep).unwrap();

        assert_eq!(violation.rule, "deny-everything");
        assert_eq!(violation.from, "A");
        assert_eq!(violation.to, "B");
    }

    #[test]
    fn rule_set_tracks_registration_and_enablement() {
        let mut rules = RuleSet::new()
            .with_edge_rule(DenyEverything)
            .with_graph_rule(CountModules);

        assert_eq!(rules.len(), 2);
        assert_eq!(rules.enabled_count(), 2);
        assert!(rules.is_enabled("deny-everything"));

        rules.disable("deny-everything");
        assert!(!rules.is_enabled("deny-everything"));
        assert_eq!(rules.enabled_count(), 1);
        assert_eq!(rules.len(), 2);

        rules.enable("deny-everything");
        assert_eq!(rules.enabled_count(), 2);
    }

    #[test]
    fn infos_lists_edge_rules_before_graph_rules() {
        let rules = RuleSet::new()
            .with_edge_rule(DenyEverything)
            .with_graph_rule(CountModules);

        let infos = rules.infos();

        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].code, "T001");
        assert_eq!(infos[0].description, "No edge is acceptable");
        assert_eq!(infos[1].code, "T101");
    }

    #[test]
    fn empty_rule_set_reports_empty() {
        let rules = RuleSet::new();

        assert!(rules.is_empty());
        assert_eq!(rules.enabled_count(), 0);
    }
}
