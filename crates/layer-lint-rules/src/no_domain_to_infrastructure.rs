//! Rule to keep domain modules free of technical concerns.
//!
//! # Rationale
//!
//! The domain core defines ports; infrastructure implements them. An
//! edge from a domain module to an infrastructure module couples
//! business logic to persistence, transport, or framework code and
//! makes the core untestable in isolation. Edges into the bootstrap
//! layer are flagged for the same reason: the composition root sits at
//! the very outside of the system.

use layer_lint_core::{Dependency, EdgeRule, Layer, Violation};

/// Rule code for no-domain-to-infrastructure.
pub const CODE: &str = "LL002";

/// Rule name for no-domain-to-infrastructure.
pub const NAME: &str = "no-domain-to-infrastructure";

/// Forbids dependency edges from domain modules to infrastructure or
/// bootstrap modules.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDomainToInfrastructure;

impl NoDomainToInfrastructure {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EdgeRule for NoDomainToInfrastructure {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Domain modules must not depend on infrastructure or bootstrap modules"
    }

    fn check(&self, dep: &Dependency<'_>) -> Option<Violation> {
        let outward = matches!(dep.to_layer, Layer::Infrastructure | Layer::Bootstrap);
        (dep.from_layer == Layer::Domain && outward).then(|| {
            Violation::new(
                CODE,
                NAME,
                dep.from,
                dep.to,
                format!(
                    "domain module `{}` must not depend on {} module `{}`",
                    dep.from, dep.to_layer, dep.to
                ),
            )
        })
    }
}
