//! The declarative model graph consumed by the index builder.

use super::{ModelDescriptor, Relationship};

/// A set of model descriptors plus the relationships declared between them.
///
/// The graph is an opaque input as far as the locator machinery is concerned:
/// the index builder only ever iterates [`models`](Self::models) and
/// [`relationships`](Self::relationships), in no particular order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelGraph {
    models: Vec<ModelDescriptor>,
    relationships: Vec<Relationship>,
}

impl ModelGraph {
    /// Create an empty model graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a model descriptor to the graph.
    pub fn with_model(mut self, model: ModelDescriptor) -> Self {
        self.models.push(model);
        self
    }

    /// Add a relationship declaration to the graph.
    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.relationships.push(relationship);
        self
    }

    /// Visit every declared model descriptor.
    pub fn models(&self) -> impl Iterator<Item = &ModelDescriptor> {
        self.models.iter()
    }

    /// Visit every declared relationship.
    pub fn relationships(&self) -> impl Iterator<Item = &Relationship> {
        self.relationships.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ModelId;

    struct User;
    struct Post;

    #[test]
    fn test_graph_builder() {
        let graph = ModelGraph::new()
            .with_model(ModelDescriptor::of::<User>("users"))
            .with_model(ModelDescriptor::of::<Post>("posts"))
            .with_relationship(Relationship::one_to_many::<Post, User>());

        assert_eq!(graph.models().count(), 2);
        assert_eq!(graph.relationships().count(), 1);
    }

    #[test]
    fn test_graph_iteration_yields_declarations() {
        let graph = ModelGraph::new().with_model(ModelDescriptor::of::<User>("users"));

        let tables: Vec<_> = graph.models().map(|m| m.table.as_str()).collect();
        assert_eq!(tables, vec!["users"]);
        assert_eq!(graph.models().next().unwrap().model, ModelId::of::<User>());
    }
}
