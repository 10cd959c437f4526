//! Rule to keep the composition root at the edge of the system.
//!
//! # Rationale
//!
//! Bootstrap modules wire the application together: they know every
//! other layer, and nothing is supposed to know them. Any inward edge
//! into the bootstrap layer turns startup wiring into a load-bearing
//! dependency. Edges between two bootstrap modules are left alone;
//! splitting the composition root into several wiring modules is fine.

use layer_lint_core::{Dependency, EdgeRule, Layer, Violation};

/// Rule code for no-bootstrap-dependency.
pub const CODE: &str = "LL004";

/// Rule name for no-bootstrap-dependency.
pub const NAME: &str = "no-bootstrap-dependency";

/// Forbids dependency edges into bootstrap modules from any other
/// layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBootstrapDependency;

impl NoBootstrapDependency {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EdgeRule for NoBootstrapDependency {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Only bootstrap modules may depend on bootstrap modules"
    }

    fn check(&self, dep: &Dependency<'_>) -> Option<Violation> {
        (dep.to_layer == Layer::Bootstrap && dep.from_layer != Layer::Bootstrap).then(|| {
            Violation::new(
                CODE,
                NAME,
                dep.from,
                dep.to,
                format!(
                    "module `{}` must not depend on bootstrap module `{}`",
                    dep.from, dep.to
                ),
            )
        })
    }
}
