//! Error types for index derivation and locator construction.

use crate::graph::ModelId;
use thiserror::Error;

/// Schema-shape violations, fatal when the relation index is derived.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A model identity was declared more than once.
    #[error("model `{model}` is declared more than once")]
    DuplicateModel {
        /// The repeated model.
        model: ModelId,
    },

    /// Two distinct model identities map to the same table name.
    #[error("table `{table}` is mapped by both `{existing}` and `{model}`")]
    DuplicateTable {
        /// The contested table name.
        table: String,
        /// The model that claimed the table first.
        existing: ModelId,
        /// The model that tried to claim it again.
        model: ModelId,
    },
}

/// Locator construction errors.
///
/// These are contract violations surfaced synchronously to the caller; a
/// failed call leaves every existing locator untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The model identity is not part of the supplied model graph.
    #[error("model `{0}` is not present in the model graph")]
    UnknownModel(ModelId),

    /// The proposed relation edge was rejected.
    #[error("invalid relation: {0}")]
    InvalidRelation(#[from] RelationError),
}

/// Why a proposed relation edge was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelationError {
    /// No relationship declaration produced an edge between the two models.
    #[error("no relation from `{from}` to `{to}` in the model graph")]
    Undeclared {
        /// Model of the locator being extended.
        from: ModelId,
        /// Model of the entity being attached.
        to: ModelId,
    },

    /// The locator already carries a relation for the related model.
    #[error("duplicate relation for model `{0}`")]
    Duplicate(ModelId),
}
