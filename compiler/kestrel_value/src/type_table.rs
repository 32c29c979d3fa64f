//! Declared type hierarchy.
//!
//! Every type has at most one parent. The builtin hierarchy is:
//!
//! ```text
//! any
//! ├── number
//! │   ├── int
//! │   │   └── bool
//! │   └── float
//! ├── none, str, bytes, list, tuple, map, type, named
//! └── <user types declared with `TypeTable::declare`>
//! ```
//!
//! User types may extend any existing type, including builtins.

use rustc_hash::FxHashMap;

use crate::TypeId;

/// Errors raised while declaring types.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TypeTableError {
    #[error("type `{name}` is already declared")]
    DuplicateName { name: String },
    #[error("parent {parent:?} of type `{name}` is not declared")]
    UnknownParent { name: String, parent: TypeId },
}

/// Name and parent of one declared type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeInfo {
    pub name: String,
    pub parent: Option<TypeId>,
}

/// Table of all known types and their parent links.
///
/// Built once during setup; lookups are read-only afterwards, so the table
/// is usually shared behind an `Arc` by the dispatchers that need subtype
/// checks.
#[derive(Clone, Debug)]
pub struct TypeTable {
    types: Vec<TypeInfo>,
    by_name: FxHashMap<String, TypeId>,
}

impl TypeTable {
    /// Create a table holding only the builtin types.
    pub fn new() -> Self {
        let mut types = Vec::with_capacity(TypeId::BUILTINS.len());
        let mut by_name = FxHashMap::default();
        for (id, name, parent) in TypeId::BUILTINS {
            types.push(TypeInfo {
                name: name.to_string(),
                parent,
            });
            by_name.insert(name.to_string(), id);
        }
        TypeTable { types, by_name }
    }

    /// Declare a user type extending `parent`.
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        parent: TypeId,
    ) -> Result<TypeId, TypeTableError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(TypeTableError::DuplicateName { name });
        }
        if self.get(parent).is_none() {
            return Err(TypeTableError::UnknownParent { name, parent });
        }

        let raw = u32::try_from(self.types.len()).unwrap_or(u32::MAX);
        let id = TypeId::from_raw(raw);
        self.types.push(TypeInfo {
            name: name.clone(),
            parent: Some(parent),
        });
        self.by_name.insert(name, id);
        Ok(id)
    }

    /// Get the entry for a type.
    pub fn get(&self, id: TypeId) -> Option<&TypeInfo> {
        self.types.get(id.index())
    }

    /// Find a type by name.
    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).copied()
    }

    /// Name of a type, or `"<unknown>"` for ids this table never issued.
    pub fn name(&self, id: TypeId) -> &str {
        self.get(id).map_or("<unknown>", |info| info.name.as_str())
    }

    /// Parent of a type. `ANY` and unknown ids have none.
    pub fn parent(&self, id: TypeId) -> Option<TypeId> {
        self.get(id).and_then(|info| info.parent)
    }

    /// Iterate over `id` and all of its ancestors, nearest first.
    pub fn ancestors(&self, id: TypeId) -> impl Iterator<Item = TypeId> + '_ {
        let start = self.get(id).map(|_| id);
        std::iter::successors(start, move |current| self.parent(*current))
    }

    /// Check whether `sub` is `sup` or a declared descendant of it.
    pub fn is_subtype(&self, sub: TypeId, sup: TypeId) -> bool {
        self.ancestors(sub).any(|ancestor| ancestor == sup)
    }

    /// Number of declared types, builtins included.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Always false: the builtins are always present.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
