//! Call-signature resolution.
//!
//! Turns the actual arguments of one call into the flat candidate sequence
//! the sequence matcher consumes.

use std::fmt;

use kestrel_value::{NamedArgs, Value};

use crate::Family;

/// Actual arguments of one call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallArgs {
    pub positional: Vec<Value>,
    pub named: NamedArgs,
}

impl CallArgs {
    pub fn new(positional: Vec<Value>) -> Self {
        CallArgs {
            positional,
            named: NamedArgs::new(),
        }
    }

    #[must_use]
    pub fn with_named(mut self, named: NamedArgs) -> Self {
        self.named = named;
        self
    }
}

impl From<Vec<Value>> for CallArgs {
    fn from(positional: Vec<Value>) -> Self {
        CallArgs::new(positional)
    }
}

impl fmt::Display for CallArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.positional.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        if !self.named.is_empty() {
            if !self.positional.is_empty() {
                write!(f, ", ")?;
            }
            write!(f, "{}", self.named)?;
        }
        write!(f, ")")
    }
}

/// A flat sequence of concrete values tagged with its container family.
///
/// A one-element tuple or list candidate is unboxed to `Family::Scalar`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    items: Vec<Value>,
    family: Family,
}

impl Candidate {
    pub fn new(items: Vec<Value>, family: Family) -> Self {
        let family = if items.len() == 1 {
            Family::Scalar
        } else {
            family
        };
        Candidate { items, family }
    }

    pub fn scalar(value: Value) -> Self {
        Candidate {
            items: vec![value],
            family: Family::Scalar,
        }
    }

    pub fn tuple(items: Vec<Value>) -> Self {
        Candidate::new(items, Family::Tuple)
    }

    pub fn list(items: Vec<Value>) -> Self {
        Candidate::new(items, Family::List)
    }

    #[inline]
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    #[inline]
    pub fn family(&self) -> Family {
        self.family
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The candidate of runtime types used by type dispatch.
    ///
    /// Family is kept, so `(1, "x")` becomes `(<int>, <str>)`.
    pub fn types(&self) -> Candidate {
        Candidate {
            items: self.items.iter().map(|v| Value::Type(v.type_id())).collect(),
            family: self.family,
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = match self.family {
            Family::Scalar => ("", ""),
            Family::Tuple => ("(", ")"),
            Family::List => ("[", "]"),
        };
        write!(f, "{open}")?;
        for (i, value) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "{close}")
    }
}

/// A call resolved for matching and invocation.
#[derive(Clone, Debug)]
pub struct ResolvedCall<'a> {
    /// Arguments as the caller passed them, for diagnostics.
    pub args: &'a CallArgs,
    /// What the patterns are matched against.
    pub candidate: Candidate,
    /// Positional values forwarded to the selected handler.
    pub values: Vec<Value>,
}

impl ResolvedCall<'_> {
    pub fn named(&self) -> &NamedArgs {
        &self.args.named
    }
}

/// Flatten a call into its candidate sequence.
///
/// - A lone positional tuple or list is spread into its elements and keeps
///   its family.
/// - Otherwise the positional values form a tuple-family sequence.
/// - Named values, when present, are appended as one trailing
///   `Value::Named` marker.
/// - A single remaining element is unboxed to a scalar candidate.
pub fn resolve_call(args: &CallArgs) -> ResolvedCall<'_> {
    let (values, family) = match args.positional.as_slice() {
        [Value::Tuple(items)] => (items.to_vec(), Family::Tuple),
        [Value::List(items)] => (items.to_vec(), Family::List),
        other => (other.to_vec(), Family::Tuple),
    };

    let mut items = values.clone();
    if !args.named.is_empty() {
        items.push(Value::named(args.named.clone()));
    }

    ResolvedCall {
        args,
        candidate: Candidate::new(items, family),
        values,
    }
}

#[cfg(test)]
mod tests;
