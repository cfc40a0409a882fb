//! Relationship declarations between models.

use super::ModelId;

/// A relationship declared between models in the graph.
///
/// Each variant contributes zero or more directed relation edges when the
/// index is derived; the direction rules live with the index builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relationship {
    /// Many instances of `many` each reference one instance of `one`.
    OneToMany {
        /// The referencing side.
        many: ModelId,
        /// The referenced side.
        one: ModelId,
    },
    /// `linked` references exactly one instance of `model`.
    OneToOne {
        /// The referenced side.
        model: ModelId,
        /// The referencing side.
        linked: ModelId,
    },
    /// A model referencing another instance of itself.
    Recursive {
        /// The self-referencing model.
        model: ModelId,
    },
    /// `model` references one instance of any of the listed variants.
    Polymorphic {
        /// The referencing side.
        model: ModelId,
        /// The possible referenced models.
        variants: Vec<ModelId>,
    },
    /// Join-table relationship. Contributes no locator edge.
    ManyToMany {
        /// One side of the join.
        left: ModelId,
        /// The other side of the join.
        right: ModelId,
    },
}

impl Relationship {
    /// Declare a one-to-many relationship: many `Many` per one `One`.
    pub fn one_to_many<Many: 'static, One: 'static>() -> Self {
        Self::OneToMany {
            many: ModelId::of::<Many>(),
            one: ModelId::of::<One>(),
        }
    }

    /// Declare a one-to-one relationship: `Linked` references `Model`.
    pub fn one_to_one<Model: 'static, Linked: 'static>() -> Self {
        Self::OneToOne {
            model: ModelId::of::<Model>(),
            linked: ModelId::of::<Linked>(),
        }
    }

    /// Declare a recursive self-relationship on `Model`.
    pub fn recursive<Model: 'static>() -> Self {
        Self::Recursive {
            model: ModelId::of::<Model>(),
        }
    }

    /// Declare a polymorphic relationship from `Model` to each variant.
    pub fn polymorphic<Model: 'static>(variants: impl IntoIterator<Item = ModelId>) -> Self {
        Self::Polymorphic {
            model: ModelId::of::<Model>(),
            variants: variants.into_iter().collect(),
        }
    }

    /// Declare a many-to-many relationship between `Left` and `Right`.
    pub fn many_to_many<Left: 'static, Right: 'static>() -> Self {
        Self::ManyToMany {
            left: ModelId::of::<Left>(),
            right: ModelId::of::<Right>(),
        }
    }
}
