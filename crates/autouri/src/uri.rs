//! Immutable locator builders validated against the relation index.
//!
//! [`AutoUris`] is built once from a model graph and then mints locators:
//! [`ModelUri`] for a collection-level path node, [`EntityUri`] for one
//! concrete instance. Every extending call validates the proposed relation
//! edge against the index and returns a new value; existing locators are
//! never touched. Locators compare by structure, so two independently built
//! paths over the same schema are equal when their fields are.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::{Error, RelationError, SchemaError};
use crate::graph::{ModelGraph, ModelId};
use crate::index::{ClassToTableMap, RelationIndex, RelationIndexBuilder};

/// Identifier column used by [`ModelUri::id`] unless overridden.
pub const DEFAULT_ID_COLUMN: &str = "_id";

// Index internals shared by every locator minted from one `AutoUris`.
// Read-only after construction, so sharing needs no synchronization.
#[derive(Debug)]
struct UriCore {
    tables: ClassToTableMap,
    relations: RelationIndex,
    id_column: String,
}

/// Entry point minting validated locators for a model graph.
#[derive(Debug, Clone)]
pub struct AutoUris {
    core: Arc<UriCore>,
}

impl AutoUris {
    /// Start configuring locator construction for a model graph.
    pub fn builder(graph: &ModelGraph) -> AutoUrisBuilder<'_> {
        AutoUrisBuilder {
            graph,
            id_column: DEFAULT_ID_COLUMN.to_string(),
        }
    }

    /// Build with the default configuration.
    pub fn from_graph(graph: &ModelGraph) -> Result<Self, SchemaError> {
        Self::builder(graph).build()
    }

    /// Collection locator for the model type `T`.
    pub fn model<T: 'static>(&self) -> Result<ModelUri, Error> {
        self.model_id(ModelId::of::<T>())
    }

    /// Collection locator for a model identity.
    pub fn model_id(&self, model: ModelId) -> Result<ModelUri, Error> {
        if !self.core.tables.contains(model) {
            return Err(Error::UnknownModel(model));
        }

        Ok(ModelUri {
            core: Arc::clone(&self.core),
            model,
            related: BTreeMap::new(),
        })
    }

    /// The model/table bijection derived from the graph.
    pub fn tables(&self) -> &ClassToTableMap {
        &self.core.tables
    }

    /// The deduplicated relation edge set derived from the graph.
    pub fn relations(&self) -> &RelationIndex {
        &self.core.relations
    }

    /// The configured default identifier column.
    pub fn default_id_column(&self) -> &str {
        &self.core.id_column
    }
}

/// Configuration builder for [`AutoUris`].
#[derive(Debug)]
pub struct AutoUrisBuilder<'a> {
    graph: &'a ModelGraph,
    id_column: String,
}

impl AutoUrisBuilder<'_> {
    /// Override the default identifier column.
    pub fn default_id_column(mut self, column: impl Into<String>) -> Self {
        self.id_column = column.into();
        self
    }

    /// Derive the relation index and finish construction.
    pub fn build(self) -> Result<AutoUris, SchemaError> {
        let (tables, relations) = RelationIndexBuilder::new(self.graph).build()?;

        Ok(AutoUris {
            core: Arc::new(UriCore {
                tables,
                relations,
                id_column: self.id_column,
            }),
        })
    }
}

/// A collection-level path node for one model, optionally filtered by
/// related entities.
#[derive(Debug, Clone)]
pub struct ModelUri {
    core: Arc<UriCore>,
    model: ModelId,
    related: BTreeMap<ModelId, EntityUri>,
}

impl ModelUri {
    /// The model this locator points at.
    pub fn model(&self) -> ModelId {
        self.model
    }

    /// Attach a related entity, returning the extended locator.
    ///
    /// The relation index must declare an edge from this locator's model to
    /// the entity's model, and at most one relation per related model may be
    /// attached.
    pub fn related_to(&self, entity: EntityUri) -> Result<Self, Error> {
        let related = extend_related(&self.core.relations, self.model, &self.related, entity)?;

        Ok(Self {
            core: Arc::clone(&self.core),
            model: self.model,
            related,
        })
    }

    /// Promote to an entity locator using the default identifier column.
    pub fn id(&self, id: i64) -> EntityUri {
        self.id_in_column(self.core.id_column.clone(), id)
    }

    /// Promote to an entity locator identified by `column = id`.
    ///
    /// Attached relations are carried over verbatim; no relation checks run.
    pub fn id_in_column(&self, column: impl Into<String>, id: i64) -> EntityUri {
        EntityUri {
            model_uri: self.clone(),
            id_column: column.into(),
            id,
            related: self.related.clone(),
        }
    }

    /// The related entity attached for a model, if any.
    pub fn related_entity(&self, model: ModelId) -> Option<&EntityUri> {
        self.related.get(&model)
    }

    /// Snapshot of every attached related entity.
    pub fn related_entities(&self) -> Vec<EntityUri> {
        self.related.values().cloned().collect()
    }
}

impl PartialEq for ModelUri {
    fn eq(&self, other: &Self) -> bool {
        self.model == other.model && self.related == other.related
    }
}

impl Eq for ModelUri {}

impl Hash for ModelUri {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.model.hash(state);
        self.related.hash(state);
    }
}

impl fmt::Display for ModelUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.model)?;
        fmt_related(&self.related, f)
    }
}

/// One concrete instance of a model, identified by `(column, id)`,
/// optionally filtered by related entities.
#[derive(Debug, Clone)]
pub struct EntityUri {
    model_uri: ModelUri,
    id_column: String,
    id: i64,
    related: BTreeMap<ModelId, EntityUri>,
}

impl EntityUri {
    /// The model this locator points at.
    pub fn model(&self) -> ModelId {
        self.model_uri.model
    }

    /// The collection-level locator this entity was promoted from.
    pub fn model_uri(&self) -> &ModelUri {
        &self.model_uri
    }

    /// The identifier value.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The identifier column name.
    pub fn id_column(&self) -> &str {
        &self.id_column
    }

    /// Attach a related entity, returning the extended locator.
    ///
    /// Same rules as [`ModelUri::related_to`], with this entity's model as
    /// the edge source.
    pub fn related_to(&self, entity: EntityUri) -> Result<Self, Error> {
        let related = extend_related(
            &self.model_uri.core.relations,
            self.model(),
            &self.related,
            entity,
        )?;

        Ok(Self {
            model_uri: self.model_uri.clone(),
            id_column: self.id_column.clone(),
            id: self.id,
            related,
        })
    }

    /// Collection locator for `T`, filtered by this entity.
    ///
    /// Shorthand for minting `T`'s locator and immediately attaching this
    /// entity to it; the same relation validation applies.
    pub fn related_model<T: 'static>(&self) -> Result<ModelUri, Error> {
        let uris = AutoUris {
            core: Arc::clone(&self.model_uri.core),
        };

        uris.model::<T>()?.related_to(self.clone())
    }

    /// The related entity attached for a model, if any.
    pub fn related_entity(&self, model: ModelId) -> Option<&EntityUri> {
        self.related.get(&model)
    }

    /// Snapshot of every attached related entity.
    pub fn related_entities(&self) -> Vec<EntityUri> {
        self.related.values().cloned().collect()
    }
}

impl PartialEq for EntityUri {
    fn eq(&self, other: &Self) -> bool {
        self.model_uri == other.model_uri
            && self.id_column == other.id_column
            && self.id == other.id
            && self.related == other.related
    }
}

impl Eq for EntityUri {}

impl Hash for EntityUri {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.model_uri.hash(state);
        self.id_column.hash(state);
        self.id.hash(state);
        self.related.hash(state);
    }
}

impl fmt::Display for EntityUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}={})", self.model(), self.id_column, self.id)?;
        fmt_related(&self.related, f)
    }
}

// Validation shared by both locator shapes: the edge must be declared and
// the related model must not repeat on the same locator.
fn extend_related(
    relations: &RelationIndex,
    from: ModelId,
    related: &BTreeMap<ModelId, EntityUri>,
    entity: EntityUri,
) -> Result<BTreeMap<ModelId, EntityUri>, Error> {
    let to = entity.model();
    if !relations.contains(from, to) {
        return Err(RelationError::Undeclared { from, to }.into());
    }
    if related.contains_key(&to) {
        return Err(RelationError::Duplicate(to).into());
    }

    let mut extended = related.clone();
    extended.insert(to, entity);
    Ok(extended)
}

fn fmt_related(related: &BTreeMap<ModelId, EntityUri>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if related.is_empty() {
        return Ok(());
    }

    write!(f, " [")?;
    for (position, entity) in related.values().enumerate() {
        if position > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{entity}")?;
    }
    write!(f, "]")
}
