//! Raw TOML shapes for module-graph manifests.
//!
//! These types mirror the TOML structure one-to-one and validate
//! nothing; the loader turns them into a checked [`Manifest`]
//! (see [`super::loader`]).
//!
//! [`Manifest`]: super::Manifest

use serde::Deserialize;

/// Top-level manifest document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManifestDto {
    /// `[[modules]]` tables.
    #[serde(default)]
    pub modules: Vec<ModuleDto>,

    /// `[[dependencies]]` tables.
    #[serde(default)]
    pub dependencies: Vec<DependencyDto>,

    /// `[rules]` table.
    #[serde(default)]
    pub rules: RulesDto,
}

/// One `[[modules]]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleDto {
    /// Unique module name.
    pub name: String,

    /// Layer name; a module without one is treated as unclassified.
    #[serde(default)]
    pub layer: Option<String>,
}

/// One `[[dependencies]]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct DependencyDto {
    /// Name of the depending module.
    pub from: String,

    /// Name of the depended-upon module.
    pub to: String,
}

/// The `[rules]` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RulesDto {
    /// Rules to enable, by name or code. Absent means all built-in
    /// rules.
    #[serde(default)]
    pub enabled: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_manifest_deserializes() {
        let toml = r#"
[[modules]]
name = "Domain.Order"
layer = "domain"

[[modules]]
name = "Scripts.Migrate"

[[dependencies]]
from = "Scripts.Migrate"
to = "Domain.Order"

[rules]
enabled = ["no-cyclic-dependency"]
"#;

        let dto: ManifestDto = toml::from_str(toml).unwrap();

        assert_eq!(dto.modules.len(), 2);
        assert_eq!(dto.modules[0].layer.as_deref(), Some("domain"));
        assert_eq!(dto.modules[1].layer, None);
        assert_eq!(dto.dependencies.len(), 1);
        assert_eq!(dto.dependencies[0].from, "Scripts.Migrate");
        assert_eq!(
            dto.rules.enabled,
            Some(vec!["no-cyclic-dependency".to_string()])
        );
    }

    #[test]
    fn empty_document_uses_defaults() {
        let dto: ManifestDto = toml::from_str("").unwrap();

        assert!(dto.modules.is_empty());
        assert!(dto.dependencies.is_empty());
        assert_eq!(dto.rules.enabled, None);
    }
}
