//! Rule to keep domain modules independent of use-case orchestration.
//!
//! # Rationale
//!
//! In a hexagonal architecture the dependency arrow points inward:
//! application modules orchestrate the domain, never the other way
//! around. A domain module that references an application module has
//! inverted that arrow, and domain logic can no longer be reused or
//! tested without dragging the use-case layer along.

use layer_lint_core::{Dependency, EdgeRule, Layer, Violation};

/// Rule code for no-domain-to-application.
pub const CODE: &str = "LL001";

/// Rule name for no-domain-to-application.
pub const NAME: &str = "no-domain-to-application";

/// Forbids dependency edges from domain modules to application modules.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDomainToApplication;

impl NoDomainToApplication {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EdgeRule for NoDomainToApplication {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Domain modules must not depend on application modules"
    }

    fn check(&self, dep: &Dependency<'_>) -> Option<Violation> {
        (dep.from_layer == Layer::Domain && dep.to_layer == Layer::Application).then(|| {
            Violation::new(
                CODE,
                NAME,
                dep.from,
                dep.to,
                format!(
                    "domain module `{}` must not depend on application module `{}`",
                    dep.from, dep.to
                ),
            )
        })
    }
}
