//! # layer-lint-rules
//!
//! Built-in layer dependency rules for layer-lint.
//!
//! This crate provides the canonical hexagonal-architecture rule set
//! applied to a module graph from `layer-lint-core`.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | LL001 | `no-domain-to-application` | Domain modules must not depend on application modules |
//! | LL002 | `no-domain-to-infrastructure` | Domain modules must not depend on infrastructure or bootstrap modules |
//! | LL003 | `no-application-to-infrastructure` | Application modules must not depend on infrastructure or bootstrap modules |
//! | LL004 | `no-bootstrap-dependency` | Only bootstrap modules may depend on bootstrap modules |
//! | LL005 | `no-cyclic-dependency` | Module dependencies must not form cycles |
//!
//! ## Usage
//!
//! ```ignore
//! use layer_lint_core::Checker;
//! use layer_lint_rules::all_rules;
//!
//! let checker = Checker::new(all_rules());
//! let report = checker.check(&graph)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod no_application_to_infrastructure;
mod no_bootstrap_dependency;
mod no_cyclic_dependency;
mod no_domain_to_application;
mod no_domain_to_infrastructure;
mod registry;

pub use no_application_to_infrastructure::NoApplicationToInfrastructure;
pub use no_bootstrap_dependency::NoBootstrapDependency;
pub use no_cyclic_dependency::NoCyclicDependency;
pub use no_domain_to_application::NoDomainToApplication;
pub use no_domain_to_infrastructure::NoDomainToInfrastructure;
pub use registry::{all_rules, rule_names, rule_set_from_names, UnknownRuleError};

/// Re-export core types for convenience.
pub use layer_lint_core::{EdgeRule, GraphRule, RuleSet, Violation};
