//! Pattern tokens.
//!
//! A token is one slot of a pattern:
//!
//! | Token        | Matches                                       | Display   |
//! |--------------|-----------------------------------------------|-----------|
//! | `Exact(v)`   | one value canonically equal to `v`            | `v`       |
//! | `Any`        | exactly one value of any kind                 | `_`       |
//! | `Rest`       | zero or more contiguous values                | `..`      |
//! | `Guard(g)`   | one value for which the predicate returns true | `?name`  |
//!
//! Under the subtype strategy an `Exact(Value::Type(t))` token also matches
//! any candidate type declared below `t`.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use kestrel_value::{TypeId, Value};

use crate::DispatchError;

/// Predicate signature for guard tokens.
///
/// An `Err` from the predicate counts as a non-match for that token; it is
/// never propagated to the caller.
pub type GuardFn = dyn Fn(&Value) -> Result<bool, DispatchError> + Send + Sync;

static NEXT_GUARD_ID: AtomicU64 = AtomicU64::new(0);

/// A named predicate used as a value-dispatch token.
///
/// Guards compare by identity: two guards are the same registration key
/// only if one is a clone of the other.
#[derive(Clone)]
pub struct Guard {
    id: u64,
    name: Arc<str>,
    func: Arc<GuardFn>,
}

impl Guard {
    pub fn new<F>(name: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn(&Value) -> Result<bool, DispatchError> + Send + Sync + 'static,
    {
        Guard {
            id: NEXT_GUARD_ID.fetch_add(1, Ordering::Relaxed),
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Create a guard from an infallible predicate.
    pub fn predicate<F>(name: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Guard::new(name, move |value| Ok(func(value)))
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the predicate against one candidate value.
    pub fn test(&self, value: &Value) -> bool {
        match (self.func)(value) {
            Ok(hit) => hit,
            Err(err) => {
                tracing::trace!(guard = %self.name, %err, "guard raised, treated as no match");
                false
            }
        }
    }
}

impl PartialEq for Guard {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Guard {}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guard({}#{})", self.name, self.id)
    }
}

/// One slot of a pattern.
#[derive(Clone, Debug)]
pub enum Token {
    /// A literal value (or a type, for type dispatch).
    Exact(Value),
    /// Match-one wildcard.
    Any,
    /// Match-many wildcard.
    Rest,
    /// Predicate over one value.
    Guard(Guard),
}

impl Token {
    pub fn exact(value: impl Into<Value>) -> Self {
        Token::Exact(value.into())
    }

    /// Token matching a type (exactly, or by subtype in the second type
    /// dispatch pass).
    pub fn ty(id: TypeId) -> Self {
        Token::Exact(Value::Type(id))
    }

    pub fn guard<F>(name: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Token::Guard(Guard::predicate(name, func))
    }

    #[inline]
    pub fn is_rest(&self) -> bool {
        matches!(self, Token::Rest)
    }

    /// True for `Any` and `Rest`.
    #[inline]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Token::Any | Token::Rest)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Token::Exact(a), Token::Exact(b)) => a.canonical_eq(b),
            (Token::Any, Token::Any) | (Token::Rest, Token::Rest) => true,
            (Token::Guard(a), Token::Guard(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Token {}

impl From<Value> for Token {
    fn from(value: Value) -> Self {
        Token::Exact(value)
    }
}

impl From<TypeId> for Token {
    fn from(id: TypeId) -> Self {
        Token::ty(id)
    }
}

impl From<Guard> for Token {
    fn from(guard: Guard) -> Self {
        Token::Guard(guard)
    }
}

impl From<i64> for Token {
    fn from(n: i64) -> Self {
        Token::Exact(Value::int(n))
    }
}

impl From<i32> for Token {
    fn from(n: i32) -> Self {
        Token::Exact(Value::from(n))
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token::Exact(Value::string(s))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Exact(value) => write!(f, "{value}"),
            Token::Any => write!(f, "_"),
            Token::Rest => write!(f, ".."),
            Token::Guard(guard) => write!(f, "?{}", guard.name),
        }
    }
}
