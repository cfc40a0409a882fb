//! autouri - schema-validated hierarchical resource locators.
//!
//! Given a declarative graph of models and the relationships between them,
//! this crate derives, once, a flattened relation index and then exposes an
//! immutable builder API for composing locator paths such as
//! `posts -> post(3) -> comments`. Each step is validated against the index:
//! only relations the schema declares may be attached, and never twice for
//! the same related model.
//!
//! ```
//! use autouri::{AutoUris, ModelDescriptor, ModelGraph, ModelId, Relationship};
//!
//! struct User;
//! struct Post;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = ModelGraph::new()
//!     .with_model(ModelDescriptor::of::<User>("users"))
//!     .with_model(ModelDescriptor::of::<Post>("posts"))
//!     .with_relationship(Relationship::one_to_many::<Post, User>());
//!
//! let uris = AutoUris::from_graph(&graph)?;
//!
//! // All posts by user 1.
//! let author = uris.model::<User>()?.id(1);
//! let posts = uris.model::<Post>()?.related_to(author)?;
//! assert!(posts.related_entity(ModelId::of::<User>()).is_some());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod graph;
pub mod index;
pub mod uri;

pub use error::{Error, RelationError, SchemaError};
pub use graph::{ModelDescriptor, ModelGraph, ModelId, Relationship};
pub use index::{ClassToTableMap, RelationIndex, RelationIndexBuilder};
pub use uri::{AutoUris, AutoUrisBuilder, DEFAULT_ID_COLUMN, EntityUri, ModelUri};
