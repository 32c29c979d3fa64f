//! Type identifier.
//!
//! Builtin types are pre-interned at fixed indices; user-declared types are
//! allocated by `TypeTable::declare` starting at `TypeId::FIRST_USER`.

use std::fmt;

/// Identifier of a runtime type.
///
/// `TypeId(u32)` gives O(1) equality comparison and hashing. The subtype
/// relation lives in `TypeTable`; a bare `TypeId` knows nothing about its
/// parents.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    // Pre-interned builtin types
    /// Root of the hierarchy; every type is a subtype of `ANY`.
    pub const ANY: TypeId = TypeId(0);
    pub const NONE: TypeId = TypeId(1);
    pub const BOOL: TypeId = TypeId(2);
    pub const INT: TypeId = TypeId(3);
    pub const FLOAT: TypeId = TypeId(4);
    /// Abstract numeric type, parent of `INT` and `FLOAT`.
    pub const NUMBER: TypeId = TypeId(5);
    pub const STR: TypeId = TypeId(6);
    pub const BYTES: TypeId = TypeId(7);
    pub const LIST: TypeId = TypeId(8);
    pub const TUPLE: TypeId = TypeId(9);
    pub const MAP: TypeId = TypeId(10);
    /// Type of `Value::Type` values.
    pub const TYPE: TypeId = TypeId(11);
    /// Type of the keyword-arguments marker appended to a candidate sequence.
    pub const NAMED: TypeId = TypeId(12);

    /// First ID handed out for user-declared types.
    pub const FIRST_USER: u32 = 13;

    /// All builtin types with their names and parents, in index order.
    pub(crate) const BUILTINS: [(TypeId, &'static str, Option<TypeId>); 13] = [
        (TypeId::ANY, "any", None),
        (TypeId::NONE, "none", Some(TypeId::ANY)),
        (TypeId::BOOL, "bool", Some(TypeId::INT)),
        (TypeId::INT, "int", Some(TypeId::NUMBER)),
        (TypeId::FLOAT, "float", Some(TypeId::NUMBER)),
        (TypeId::NUMBER, "number", Some(TypeId::ANY)),
        (TypeId::STR, "str", Some(TypeId::ANY)),
        (TypeId::BYTES, "bytes", Some(TypeId::ANY)),
        (TypeId::LIST, "list", Some(TypeId::ANY)),
        (TypeId::TUPLE, "tuple", Some(TypeId::ANY)),
        (TypeId::MAP, "map", Some(TypeId::ANY)),
        (TypeId::TYPE, "type", Some(TypeId::ANY)),
        (TypeId::NAMED, "named", Some(TypeId::ANY)),
    ];

    /// Create a `TypeId` from a raw index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TypeId(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the type table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is a pre-interned builtin type.
    #[inline]
    pub const fn is_builtin(self) -> bool {
        self.0 < Self::FIRST_USER
    }

    /// Name of a builtin type, or `None` for user-declared types.
    ///
    /// User type names live in the `TypeTable`.
    pub fn builtin_name(self) -> Option<&'static str> {
        Self::BUILTINS.get(self.index()).map(|(_, name, _)| *name)
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.builtin_name() {
            Some(name) => write!(f, "TypeId({name})"),
            None => write!(f, "TypeId({})", self.0),
        }
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.builtin_name() {
            Some(name) => f.write_str(name),
            None => write!(f, "type#{}", self.0),
        }
    }
}
