//! Module graph: named modules tagged with layers, plus directed
//! dependency edges between them.
//!
//! [`ModuleGraph`] is the single mutable aggregate of this crate. Every
//! mutation validates its input and leaves the graph untouched when it
//! fails, so a graph can never hold a dangling edge, a self-referential
//! edge, or two modules with the same name.

use std::collections::HashMap;
use std::fmt;

use petgraph::algo::tarjan_scc;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ────────────────────────────────────────────
// Layer
// ────────────────────────────────────────────

/// Architectural layer a module is assigned to.
///
/// Layers carry no implicit ordering or hierarchy; which layer may depend
/// on which is expressed solely by the rules that inspect edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Business logic at the core of the system.
    Domain,
    /// Use-case orchestration around the domain.
    Application,
    /// Technical adapters: persistence, transport, frameworks.
    Infrastructure,
    /// Composition root that wires everything together.
    Bootstrap,
    /// Modules that have not been assigned a layer.
    Unclassified,
}

impl Layer {
    /// Canonical lowercase name, as written in manifests.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Layer::Domain => "domain",
            Layer::Application => "application",
            Layer::Infrastructure => "infrastructure",
            Layer::Bootstrap => "bootstrap",
            Layer::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────
// GraphError
// ────────────────────────────────────────────

/// Errors raised by [`ModuleGraph`] mutations.
///
/// A failed mutation never changes the graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A module name was empty.
    #[error("module name must not be empty")]
    EmptyModuleName,

    /// A module was re-registered under a different layer.
    #[error("module `{name}` is already registered in layer `{existing}` (requested `{requested}`)")]
    DuplicateModule {
        /// Name of the module that was re-registered.
        name: String,
        /// Layer the module already belongs to.
        existing: Layer,
        /// Layer the rejected registration asked for.
        requested: Layer,
    },

    /// An edge endpoint names a module the graph does not contain.
    #[error("unknown module `{name}`: add it to the graph before referencing it in an edge")]
    UnknownModule {
        /// The unresolved module name.
        name: String,
    },

    /// An edge had the same module on both ends.
    #[error("module `{name}` must not depend on itself")]
    SelfDependency {
        /// The module named on both ends.
        name: String,
    },
}

// ────────────────────────────────────────────
// Dependency
// ────────────────────────────────────────────

/// A dependency edge resolved against the graph: both endpoint names and
/// the layers they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency<'a> {
    /// Name of the depending module.
    pub from: &'a str,
    /// Layer of the depending module.
    pub from_layer: Layer,
    /// Name of the depended-upon module.
    pub to: &'a str,
    /// Layer of the depended-upon module.
    pub to_layer: Layer,
}

// ────────────────────────────────────────────
// ModuleGraph
// ────────────────────────────────────────────

#[derive(Debug, Clone)]
struct ModuleNode {
    name: String,
    layer: Layer,
}

/// Directed graph of modules and their dependency edges.
///
/// Modules are identified by their unique name and carry exactly one
/// [`Layer`]. Edges have set semantics: re-adding an existing edge is a
/// no-op. Iteration order over modules and dependencies is deterministic
/// for a given mutation history but otherwise unspecified; reports sort
/// their violations and do not depend on it.
#[derive(Debug, Clone, Default)]
pub struct ModuleGraph {
    graph: StableDiGraph<ModuleNode, ()>,
    index: HashMap<String, NodeIndex>,
}

impl ModuleGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a module under the given layer.
    ///
    /// Registering the same name with the same layer again is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyModuleName`] for an empty name and
    /// [`GraphError::DuplicateModule`] when the name is already registered
    /// under a different layer; the module keeps its original layer.
    pub fn add_module(&mut self, name: impl Into<String>, layer: Layer) -> Result<(), GraphError> {
        let name = name.into();
        if name.is_empty() {
            return Err(GraphError::EmptyModuleName);
        }
        if let Some(&idx) = self.index.get(&name) {
            let existing = self.graph[idx].layer;
            if existing == layer {
                return Ok(());
            }
            return Err(GraphError::DuplicateModule {
                name,
                existing,
                requested: layer,
            });
        }
        let idx = self.graph.add_node(ModuleNode {
            name: name.clone(),
            layer,
        });
        self.index.insert(name, idx);
        Ok(())
    }

    /// Adds a directed dependency edge from `from` to `to`.
    ///
    /// Edges have set semantics: adding an edge that already exists is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownModule`] when either endpoint is not
    /// registered (checked before anything else, so an unknown module
    /// depending on itself reports the missing module) and
    /// [`GraphError::SelfDependency`] when both endpoints name the same
    /// module.
    pub fn add_dependency(&mut self, from: &str, to: &str) -> Result<(), GraphError> {
        let from_idx = self.resolve(from)?;
        let to_idx = self.resolve(to)?;
        if from == to {
            return Err(GraphError::SelfDependency {
                name: from.to_string(),
            });
        }
        self.graph.update_edge(from_idx, to_idx, ());
        Ok(())
    }

    /// Removes a module and every edge incident to it, in either
    /// direction. Removing an absent module is a no-op.
    pub fn remove_module(&mut self, name: &str) {
        if let Some(idx) = self.index.remove(name) {
            self.graph.remove_node(idx);
        }
    }

    /// Removes the dependency edge from `from` to `to`, if present.
    /// Removing an absent edge (or referencing an unknown module) is a
    /// no-op.
    pub fn remove_dependency(&mut self, from: &str, to: &str) {
        let (Some(&from_idx), Some(&to_idx)) = (self.index.get(from), self.index.get(to)) else {
            return;
        };
        if let Some(edge) = self.graph.find_edge(from_idx, to_idx) {
            self.graph.remove_edge(edge);
        }
    }

    /// Returns `true` if a module with this name is registered.
    #[must_use]
    pub fn contains_module(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the layer of the named module, or `None` if it is not
    /// registered.
    #[must_use]
    pub fn layer_of(&self, name: &str) -> Option<Layer> {
        self.index.get(name).map(|&idx| self.graph[idx].layer)
    }

    /// Returns `true` if the edge from `from` to `to` exists.
    #[must_use]
    pub fn has_dependency(&self, from: &str, to: &str) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&from_idx), Some(&to_idx)) => {
                self.graph.find_edge(from_idx, to_idx).is_some()
            }
            _ => false,
        }
    }

    /// Number of registered modules.
    #[must_use]
    pub fn module_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of dependency edges.
    #[must_use]
    pub fn dependency_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterates over all modules as `(name, layer)` pairs.
    pub fn modules(&self) -> impl Iterator<Item = (&str, Layer)> + '_ {
        self.graph
            .node_indices()
            .map(move |idx| (self.graph[idx].name.as_str(), self.graph[idx].layer))
    }

    /// Iterates over all dependency edges, each resolved with the layers
    /// of its endpoints.
    pub fn dependencies(&self) -> impl Iterator<Item = Dependency<'_>> + '_ {
        self.dependencies_with_indices().map(|(_, _, dep)| dep)
    }

    /// Returns every edge that participates in a dependency cycle.
    ///
    /// An edge participates in a cycle exactly when both endpoints belong
    /// to the same strongly connected component of two or more modules
    /// (a single module can never form a cycle: self-edges are rejected
    /// at insertion). Runs Tarjan's algorithm, `O(modules + edges)`.
    #[must_use]
    pub fn edges_in_cycles(&self) -> Vec<Dependency<'_>> {
        let mut component: HashMap<NodeIndex, usize> = HashMap::new();
        for (id, scc) in tarjan_scc(&self.graph).into_iter().enumerate() {
            if scc.len() < 2 {
                continue;
            }
            for node in scc {
                component.insert(node, id);
            }
        }

        self.dependencies_with_indices()
            .filter_map(|(a, b, dep)| {
                match (component.get(&a), component.get(&b)) {
                    (Some(ca), Some(cb)) if ca == cb => Some(dep),
                    _ => None,
                }
            })
            .collect()
    }

    fn dependencies_with_indices(
        &self,
    ) -> impl Iterator<Item = (NodeIndex, NodeIndex, Dependency<'_>)> + '_ {
        self.graph.edge_indices().filter_map(move |edge| {
            let (a, b) = self.graph.edge_endpoints(edge)?;
            let from = &self.graph[a];
            let to = &self.graph[b];
            Some((
                a,
                b,
                Dependency {
                    from: &from.name,
                    from_layer: from.layer,
                    to: &to.name,
                    to_layer: to.layer,
                },
            ))
        })
    }

    fn resolve(&self, name: &str) -> Result<NodeIndex, GraphError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownModule {
                name: name.to_string(),
            })
    }
}
