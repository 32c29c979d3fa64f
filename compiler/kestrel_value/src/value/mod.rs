//! Runtime values.
//!
//! # Heap Enforcement
//!
//! All heap allocations go through factory methods on `Value`. The `Heap<T>`
//! wrapper has a `pub(super)` constructor, so external code cannot build
//! heap values directly:
//!
//! ```text
//! let s = Value::string("hello");                     // OK
//! let t = Value::tuple(vec![Value::int(1)]);          // OK
//! let s = Value::Str(Heap::new("hello".to_string())); // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Equality
//!
//! `PartialEq` is strict structural equality: a list never equals a tuple.
//! Dispatch compares values through `Canonical`, which treats lists and
//! tuples with equal elements as the same value.

mod canonical;
mod heap;
mod named;
mod object;

use std::collections::BTreeMap;
use std::fmt;

pub use canonical::Canonical;
pub use heap::Heap;
pub use named::NamedArgs;
pub use object::ObjectValue;

use crate::TypeId;

/// Runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    // Primitives (inline, no heap allocation)
    /// The absent value.
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// A type used as a value.
    Type(TypeId),

    // Heap types
    Str(Heap<String>),
    Bytes(Heap<Vec<u8>>),
    List(Heap<Vec<Value>>),
    Tuple(Heap<Vec<Value>>),
    /// Map from string keys to values, ordered by key.
    Map(Heap<BTreeMap<String, Value>>),

    /// Instance of a user-declared type.
    Object(ObjectValue),
    /// Keyword-arguments marker.
    ///
    /// Appended as the last element of a candidate sequence when a call
    /// carries named arguments; its runtime type is `TypeId::NAMED`.
    Named(Heap<NamedArgs>),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn bytes(b: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(Heap::new(b.into()))
    }

    /// Create a list value.
    ///
    /// ```text
    /// let nums = Value::list(vec![Value::int(1), Value::int(2)]);
    /// ```
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a tuple value.
    ///
    /// A lone tuple argument is spread into the candidate sequence of a
    /// call, so `Value::tuple` is also how callers pass an argument pack.
    #[inline]
    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(Heap::new(items))
    }

    #[inline]
    pub fn map(entries: BTreeMap<String, Value>) -> Self {
        Value::Map(Heap::new(entries))
    }

    /// Create an instance of a user-declared type.
    ///
    /// ```text
    /// let node = Value::object(binop, [("op", Value::string("+"))]);
    /// ```
    pub fn object<K, I>(type_id: TypeId, fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let fields = fields
            .into_iter()
            .map(|(name, value)| (name.into(), value))
            .collect();
        Value::Object(ObjectValue::new(type_id, fields))
    }

    /// Create the keyword-arguments marker for `named`.
    #[inline]
    pub fn named(named: NamedArgs) -> Self {
        Value::Named(Heap::new(named))
    }
}

// Value Methods

impl Value {
    /// Runtime type of this value.
    pub fn type_id(&self) -> TypeId {
        match self {
            Value::None => TypeId::NONE,
            Value::Bool(_) => TypeId::BOOL,
            Value::Int(_) => TypeId::INT,
            Value::Float(_) => TypeId::FLOAT,
            Value::Type(_) => TypeId::TYPE,
            Value::Str(_) => TypeId::STR,
            Value::Bytes(_) => TypeId::BYTES,
            Value::List(_) => TypeId::LIST,
            Value::Tuple(_) => TypeId::TUPLE,
            Value::Map(_) => TypeId::MAP,
            Value::Object(obj) => obj.type_id,
            Value::Named(_) => TypeId::NAMED,
        }
    }

    /// Get the type name for error messages.
    ///
    /// User-declared types report `"object"`; their names live in the
    /// `TypeTable`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Object(_) => "object",
            other => other.type_id().builtin_name().unwrap_or("object"),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric view of ints and floats.
    #[allow(
        clippy::cast_precision_loss,
        reason = "numeric coercion follows int-to-float promotion"
    )]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_type(&self) -> Option<TypeId> {
        match self {
            Value::Type(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Elements of a list or tuple.
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Check equality under the canonical comparison used by dispatch.
    pub fn canonical_eq(&self, other: &Value) -> bool {
        canonical::eq(self, other)
    }
}

// Conversions

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<TypeId> for Value {
    fn from(id: TypeId) -> Self {
        Value::Type(id)
    }
}

// Trait Implementations

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "none"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Type(id) => write!(f, "<{id}>"),
            Value::Str(s) => write!(f, "{:?}", &**s),
            Value::Bytes(b) => write!(f, "b{:?}", String::from_utf8_lossy(b)),
            Value::List(items) => {
                write!(f, "[")?;
                write_items(f, items)?;
                write!(f, "]")
            }
            Value::Tuple(items) => {
                write!(f, "(")?;
                write_items(f, items)?;
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                write!(f, "}}")
            }
            Value::Object(obj) => {
                write!(f, "<{}", obj.type_id)?;
                for (name, value) in obj.fields.iter() {
                    write!(f, " {name}={value}")?;
                }
                write!(f, ">")
            }
            Value::Named(named) => write!(f, "**{{{named}}}"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => canonical::float_eq(*a, *b),
            (Value::Type(a), Value::Type(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Named(a), Value::Named(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl std::hash::Hash for Value {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // Use discriminant tags to distinguish variants
        std::mem::discriminant(self).hash(state);

        match self {
            Value::None => {}
            Value::Bool(b) => b.hash(state),
            Value::Int(n) => n.hash(state),
            Value::Float(x) => canonical::float_key(*x).hash(state),
            Value::Type(id) => id.hash(state),
            Value::Str(s) => s.hash(state),
            Value::Bytes(b) => b.hash(state),
            Value::List(items) | Value::Tuple(items) => items.hash(state),
            Value::Map(entries) => entries.hash(state),
            Value::Object(obj) => obj.hash(state),
            Value::Named(named) => named.hash(state),
        }
    }
}
