//! # layer-lint-core
//!
//! Core framework for checking a module dependency graph against layer
//! rules.
//!
//! This crate provides the foundational types for layer conformance
//! checking. It includes:
//!
//! - [`ModuleGraph`] holding modules, their layers, and dependency edges
//! - [`EdgeRule`] trait for rules judging one edge at a time
//! - [`GraphRule`] trait for whole-graph rules such as cycle detection
//! - [`Checker`] for running a rule set and aggregating violations
//! - [`ViolationReport`] with deterministic ordering and rendering
//! - [`Manifest`] for loading graphs from TOML
//!
//! ## Example
//!
//! ```ignore
//! use layer_lint_core::{Checker, Layer, ModuleGraph};
//!
//! let mut graph = ModuleGraph::new();
//! graph.add_module("Domain.Order", Layer::Domain)?;
//! graph.add_module("Infra.OrderRepo", Layer::Infrastructure)?;
//! graph.add_dependency("Domain.Order", "Infra.OrderRepo")?;
//!
//! let checker = Checker::new(layer_lint_rules::all_rules());
//! let report = checker.check(&graph)?;
//! println!("{}", report.render_text());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod checker;
mod graph;
mod report;
mod rule;

/// TOML manifest loading.
pub mod manifest;

pub use checker::{CheckError, Checker};
pub use graph::{Dependency, GraphError, Layer, ModuleGraph};
pub use manifest::{Manifest, ManifestError};
pub use report::{Violation, ViolationReport};
pub use rule::{EdgeRule, EdgeRuleBox, GraphRule, GraphRuleBox, RuleInfo, RuleSet};
