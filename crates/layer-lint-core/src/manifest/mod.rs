//! TOML manifests declaring a module graph and a rule selection.
//!
//! ```text
//! TOML file
//!   ↓ serde
//! dto (raw shapes)
//!   ↓ conversion + validation
//! Manifest (module graph + rule selection)
//! ```
//!
//! A manifest declares modules, their layers, and the dependency edges
//! between them:
//!
//! ```toml
//! [[modules]]
//! name = "Domain.Order"
//! layer = "domain"
//!
//! [[modules]]
//! name = "Infra.OrderRepo"
//! layer = "infrastructure"
//!
//! [[dependencies]]
//! from = "Infra.OrderRepo"
//! to = "Domain.Order"
//!
//! [rules]
//! enabled = ["no-domain-to-infrastructure", "no-cyclic-dependency"]
//! ```

mod dto;
mod loader;

pub use dto::{DependencyDto, ManifestDto, ModuleDto, RulesDto};
pub use loader::{Manifest, ManifestError};
