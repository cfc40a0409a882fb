//! Model identity and descriptors.

use std::any::{TypeId, type_name};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Stable identity of a model type.
///
/// Identity is the Rust type itself; the captured type name is carried only
/// for diagnostics and takes no part in equality or ordering.
#[derive(Debug, Clone, Copy)]
pub struct ModelId {
    type_id: TypeId,
    name: &'static str,
}

impl ModelId {
    /// Get the identity of the model type `T`.
    pub fn of<T: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Fully qualified type name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Unqualified type name, used in error messages and display output.
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }
}

impl PartialEq for ModelId {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ModelId {}

impl Hash for ModelId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl PartialOrd for ModelId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ModelId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.type_id.cmp(&other.type_id)
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Describes one entity type: its identity plus the storage table backing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor {
    /// Model identity.
    pub model: ModelId,
    /// Name of the table storing instances of the model.
    pub table: String,
}

impl ModelDescriptor {
    /// Describe the model type `T` as backed by the given table.
    pub fn of<T: 'static>(table: impl Into<String>) -> Self {
        Self {
            model: ModelId::of::<T>(),
            table: table.into(),
        }
    }
}
