//! Model graph abstraction.
//!
//! Declares the entities (models with backing tables) and the relationships
//! between them. The graph itself carries no validation logic; it is the
//! input the relation index is derived from, once, at startup.

mod graph;
mod model;
mod relationship;

pub use graph::ModelGraph;
pub use model::{ModelDescriptor, ModelId};
pub use relationship::Relationship;
