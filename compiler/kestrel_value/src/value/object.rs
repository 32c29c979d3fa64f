//! Instances of user-declared types.

use std::collections::BTreeMap;

use super::{Heap, Value};
use crate::TypeId;

/// An instance of a type declared in a `TypeTable`.
///
/// The object only stores its `TypeId`; subtype questions go to the table.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectValue {
    pub type_id: TypeId,
    pub fields: Heap<BTreeMap<String, Value>>,
}

impl ObjectValue {
    pub(super) fn new(type_id: TypeId, fields: BTreeMap<String, Value>) -> Self {
        ObjectValue {
            type_id,
            fields: Heap::new(fields),
        }
    }

    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}
