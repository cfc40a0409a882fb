//! One-time derivation of the relation index from a model graph.
//!
//! The builder flattens the declared relationships into a directed edge set
//! over model identities. An edge `(X, Y)` means a locator for `X` may carry
//! a related entity of `Y`. Any ordered pair produced by more than one
//! declaration is treated as an unsupported schema shape and dropped from the
//! final index rather than kept.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use crate::error::SchemaError;
use crate::graph::{ModelGraph, ModelId, Relationship};

/// Bijection between model identities and table names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassToTableMap {
    by_model: BTreeMap<ModelId, String>,
    by_table: BTreeMap<String, ModelId>,
}

impl ClassToTableMap {
    /// Check whether a model identity is part of the schema.
    pub fn contains(&self, model: ModelId) -> bool {
        self.by_model.contains_key(&model)
    }

    /// Table name backing a model.
    pub fn table_for(&self, model: ModelId) -> Option<&str> {
        self.by_model.get(&model).map(String::as_str)
    }

    /// Model identity backed by a table.
    pub fn model_for(&self, table: &str) -> Option<ModelId> {
        self.by_table.get(table).copied()
    }

    /// Iterate over every model identity in the schema.
    pub fn models(&self) -> impl Iterator<Item = ModelId> + '_ {
        self.by_model.keys().copied()
    }

    /// Number of models in the schema.
    pub fn len(&self) -> usize {
        self.by_model.len()
    }

    /// Check whether the schema declares no models.
    pub fn is_empty(&self) -> bool {
        self.by_model.is_empty()
    }

    // Both directions must stay injective; a collision on either side is a
    // schema-shape error, never a silent overwrite.
    fn insert(&mut self, model: ModelId, table: String) -> Result<(), SchemaError> {
        if self.by_model.contains_key(&model) {
            return Err(SchemaError::DuplicateModel { model });
        }
        if let Some(&existing) = self.by_table.get(&table) {
            return Err(SchemaError::DuplicateTable {
                table,
                existing,
                model,
            });
        }
        self.by_model.insert(model, table.clone());
        self.by_table.insert(table, model);
        Ok(())
    }
}

/// The deduplicated set of valid directed relation edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationIndex {
    edges: BTreeSet<(ModelId, ModelId)>,
}

impl RelationIndex {
    /// Check whether a locator for `from` may carry a related `to` entity.
    pub fn contains(&self, from: ModelId, to: ModelId) -> bool {
        self.edges.contains(&(from, to))
    }

    /// Iterate over the models reachable as relations of `from`.
    pub fn targets_of(&self, from: ModelId) -> impl Iterator<Item = ModelId> + '_ {
        self.edges
            .iter()
            .filter(move |(source, _)| *source == from)
            .map(|&(_, target)| target)
    }

    /// Number of edges in the index.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check whether the index has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Derives the table bijection and relation index from a model graph.
///
/// The derivation is pure and order-independent: the same graph yields the
/// same index no matter how its declarations are ordered.
pub struct RelationIndexBuilder<'a> {
    graph: &'a ModelGraph,
}

impl<'a> RelationIndexBuilder<'a> {
    /// Create a builder over a model graph.
    pub fn new(graph: &'a ModelGraph) -> Self {
        Self { graph }
    }

    /// Run the derivation.
    ///
    /// Fails only on schema-shape violations (a non-bijective table mapping).
    /// Ambiguous edges are not an error: any ordered pair produced by two or
    /// more declarations is removed from the final index.
    pub fn build(self) -> Result<(ClassToTableMap, RelationIndex), SchemaError> {
        let mut tables = ClassToTableMap::default();
        for descriptor in self.graph.models() {
            tables.insert(descriptor.model, descriptor.table.clone())?;
        }

        let mut edges = BTreeSet::new();
        let mut ambiguous = BTreeSet::new();
        for relationship in self.graph.relationships() {
            each_edge(relationship, |from, to| {
                if !edges.insert((from, to)) {
                    ambiguous.insert((from, to));
                }
            });
        }
        for &(from, to) in &ambiguous {
            warn!(%from, %to, "relation edge produced by multiple declarations, dropping it");
            edges.remove(&(from, to));
        }

        debug!(
            models = tables.len(),
            edges = edges.len(),
            dropped = ambiguous.len(),
            "relation index built"
        );

        Ok((tables, RelationIndex { edges }))
    }
}

// Directed edges contributed by a single relationship declaration.
fn each_edge(relationship: &Relationship, mut edge: impl FnMut(ModelId, ModelId)) {
    match relationship {
        Relationship::OneToMany { many, one } => edge(*many, *one),
        Relationship::OneToOne { model, linked } => edge(*linked, *model),
        Relationship::Recursive { model } => edge(*model, *model),
        Relationship::Polymorphic { model, variants } => {
            for variant in variants {
                edge(*model, *variant);
            }
        }
        Relationship::ManyToMany { .. } => {}
    }
}
