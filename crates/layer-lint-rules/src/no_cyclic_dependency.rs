//! Rule to keep the module graph acyclic.
//!
//! # Rationale
//!
//! A dependency cycle means none of the participating modules can be
//! built, tested, or reasoned about without the others; the layer
//! direction inside the cycle is unfixable by moving code around. This
//! rule sees the whole graph rather than one edge at a time and flags
//! every edge sitting on a cycle, so each offending declaration shows
//! up in the report exactly once.

use layer_lint_core::{GraphRule, ModuleGraph, Violation};

/// Rule code for no-cyclic-dependency.
pub const CODE: &str = "LL005";

/// Rule name for no-cyclic-dependency.
pub const NAME: &str = "no-cyclic-dependency";

/// Forbids dependency cycles anywhere in the module graph, regardless
/// of layers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCyclicDependency;

impl NoCyclicDependency {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl GraphRule for NoCyclicDependency {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Module dependencies must not form cycles"
    }

    fn check_graph(&self, graph: &ModuleGraph) -> Vec<Violation> {
        graph
            .edges_in_cycles()
            .into_iter()
            .map(|dep| {
                Violation::new(
                    CODE,
                    NAME,
                    dep.from,
                    dep.to,
                    format!(
                        "modules `{}` and `{}` are part of a dependency cycle",
                        dep.from, dep.to
                    ),
                )
            })
            .collect()
    }
}
