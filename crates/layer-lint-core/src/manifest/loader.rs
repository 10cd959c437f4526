//! DTO → validated manifest conversion.
//!
//! Loading replays the manifest's declarations against a fresh
//! [`ModuleGraph`], so every graph invariant (unique names, known
//! endpoints, no self-edges) is enforced here with the position in the
//! manifest attached to the error.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::dto::ManifestDto;
use crate::graph::{GraphError, Layer, ModuleGraph};

/// Errors raised while reading or validating a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// IO error reading the manifest file.
    #[error("failed to read manifest {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The document is not valid TOML for a manifest.
    #[error("failed to parse manifest: {message}")]
    Toml {
        /// Parse error message.
        message: String,
    },

    /// A module declared a layer outside the known set.
    #[error(
        "{context}: unknown layer `{value}`, expected one of: \
         domain, application, infrastructure, bootstrap, unclassified"
    )]
    UnknownLayer {
        /// Position in the manifest, e.g. `modules[2]`.
        context: String,
        /// The unrecognized layer string.
        value: String,
    },

    /// A declaration violated a graph invariant.
    #[error("{context}: {source}")]
    Graph {
        /// Position in the manifest, e.g. `dependencies[0]`.
        context: String,
        /// Underlying graph error.
        source: GraphError,
    },
}

/// A validated manifest: the module graph it declares plus its rule
/// selection.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    /// The declared module graph.
    pub graph: ModuleGraph,
    /// Rules selected in the `[rules]` table, by name or code. `None`
    /// means every built-in rule.
    pub enabled_rules: Option<Vec<String>>,
}

impl Manifest {
    /// Loads and validates a manifest from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML,
    /// or declares a graph that violates an invariant.
    pub fn from_file(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|e| ManifestError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses and validates a manifest from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or the declared graph
    /// violates an invariant.
    pub fn parse(content: &str) -> Result<Self, ManifestError> {
        let dto: ManifestDto = toml::from_str(content).map_err(|e| ManifestError::Toml {
            message: e.to_string(),
        })?;
        Self::from_dto(dto)
    }

    /// Builds a validated manifest from its raw TOML shape.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::UnknownLayer`] for a layer name outside
    /// the known set and [`ManifestError::Graph`] when a declaration
    /// breaks a graph invariant, both carrying the offending position.
    pub fn from_dto(dto: ManifestDto) -> Result<Self, ManifestError> {
        let mut graph = ModuleGraph::new();

        for (i, module) in dto.modules.iter().enumerate() {
            let context = format!("modules[{i}]");
            let layer = match module.layer.as_deref() {
                Some(value) => parse_layer(value, &context)?,
                None => Layer::Unclassified,
            };
            graph
                .add_module(module.name.as_str(), layer)
                .map_err(|e| ManifestError::Graph {
                    context,
                    source: e,
                })?;
        }

        for (i, dep) in dto.dependencies.iter().enumerate() {
            graph
                .add_dependency(&dep.from, &dep.to)
                .map_err(|e| ManifestError::Graph {
                    context: format!("dependencies[{i}]"),
                    source: e,
                })?;
        }

        Ok(Self {
            graph,
            enabled_rules: dto.rules.enabled,
        })
    }
}

fn parse_layer(value: &str, context: &str) -> Result<Layer, ManifestError> {
    match value {
        "domain" => Ok(Layer::Domain),
        "application" => Ok(Layer::Application),
        "infrastructure" => Ok(Layer::Infrastructure),
        "bootstrap" => Ok(Layer::Bootstrap),
        "unclassified" => Ok(Layer::Unclassified),
        _ => Err(ManifestError::UnknownLayer {
            context: context.to_string(),
            value: value.to_string(),
        }),
    }
}
