//! Rule to keep use-case orchestration behind ports.
//!
//! # Rationale
//!
//! Application modules may depend on the domain and on port
//! abstractions, but reaching directly into infrastructure bypasses the
//! ports entirely: the adapter should depend on the application, never
//! the reverse. Direct edges into the bootstrap layer are equally
//! inverted, since wiring belongs strictly outside the use cases.

use layer_lint_core::{Dependency, EdgeRule, Layer, Violation};

/// Rule code for no-application-to-infrastructure.
pub const CODE: &str = "LL003";

/// Rule name for no-application-to-infrastructure.
pub const NAME: &str = "no-application-to-infrastructure";

/// Forbids dependency edges from application modules to infrastructure
/// or bootstrap modules.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoApplicationToInfrastructure;

impl NoApplicationToInfrastructure {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EdgeRule for NoApplicationToInfrastructure {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Application modules must not depend on infrastructure or bootstrap modules"
    }

    fn check(&self, dep: &Dependency<'_>) -> Option<Violation> {
        let outward = matches!(dep.to_layer, Layer::Infrastructure | Layer::Bootstrap);
        (dep.from_layer == Layer::Application && outward).then(|| {
            Violation::new(
                CODE,
                NAME,
                dep.from,
                dep.to,
                format!(
                    "application module `{}` must not depend on {} module `{}`",
                    dep.from, dep.to_layer, dep.to
                ),
            )
        })
    }
}
