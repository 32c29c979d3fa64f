//! Canonical comparison of values.
//!
//! Dispatch compares candidate values against pattern literals after
//! normalising containers: lists and tuples are both treated as ordered
//! element sequences, so `[1, 2]` and `(1, 2)` are canonically equal. Maps,
//! named arguments and object fields compare entry by entry with the same
//! rule applied to their values. Bools, ints and floats compare by numeric
//! value, so `true`, `1` and `1.0` are one key while `1.5` only equals
//! itself. NaN equals NaN here, which keeps the key relation reflexive.
//! Everything else falls back to strict equality.

use std::hash::{Hash, Hasher};

use super::Value;

/// Tag hashed in place of the discriminant for lists and tuples.
const SEQ_TAG: u8 = 0xA5;

/// Tag hashed in place of the discriminant for bools, ints and floats.
const NUM_TAG: u8 = 0x5A;

/// Numeric view of a scalar. Integral floats inside the `i64` range
/// collapse to `Int`.
#[derive(Copy, Clone, Debug)]
enum Number {
    Int(i64),
    Float(f64),
}

fn number(value: &Value) -> Option<Number> {
    match *value {
        Value::Bool(b) => Some(Number::Int(i64::from(b))),
        Value::Int(n) => Some(Number::Int(n)),
        Value::Float(x) => Some(integral(x).map_or(Number::Float(x), Number::Int)),
        _ => None,
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "fraction and range are checked before the cast"
)]
fn integral(x: f64) -> Option<i64> {
    // -2^63 is exact; 2^63 is the first value past i64::MAX.
    const LOW: f64 = i64::MIN as f64;
    if x.fract() == 0.0 && x >= LOW && x < -LOW {
        Some(x as i64)
    } else {
        None
    }
}

/// Float equality with NaN equal to itself.
pub(super) fn float_eq(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Hash key for a float agreeing with [`float_eq`]: both zeros share one
/// key, as do all NaNs.
pub(super) fn float_key(x: f64) -> u64 {
    if x.is_nan() {
        f64::NAN.to_bits()
    } else if x == 0.0 {
        0
    } else {
        x.to_bits()
    }
}

pub(super) fn eq(a: &Value, b: &Value) -> bool {
    if let (Some(x), Some(y)) = (number(a), number(b)) {
        return match (x, y) {
            (Number::Int(x), Number::Int(y)) => x == y,
            (Number::Float(x), Number::Float(y)) => float_eq(x, y),
            _ => false,
        };
    }
    match (a, b) {
        (Value::List(x) | Value::Tuple(x), Value::List(y) | Value::Tuple(y)) => seq_eq(x, y),
        (Value::Map(x), Value::Map(y)) => {
            x.len() == y.len()
                && x.iter()
                    .zip(y.iter())
                    .all(|((ka, va), (kb, vb))| ka == kb && eq(va, vb))
        }
        (Value::Named(x), Value::Named(y)) => {
            x.len() == y.len()
                && x.iter()
                    .zip(y.iter())
                    .all(|((ka, va), (kb, vb))| ka == kb && eq(va, vb))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.type_id == y.type_id
                && x.fields.len() == y.fields.len()
                && x.fields
                    .iter()
                    .zip(y.fields.iter())
                    .all(|((ka, va), (kb, vb))| ka == kb && eq(va, vb))
        }
        _ => a == b,
    }
}

fn seq_eq(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| eq(x, y))
}

fn hash<H: Hasher>(value: &Value, state: &mut H) {
    if let Some(n) = number(value) {
        NUM_TAG.hash(state);
        match n {
            Number::Int(n) => (0u8, n).hash(state),
            Number::Float(x) => (1u8, float_key(x)).hash(state),
        }
        return;
    }
    match value {
        Value::List(items) | Value::Tuple(items) => {
            SEQ_TAG.hash(state);
            items.len().hash(state);
            for item in items.iter() {
                hash(item, state);
            }
        }
        Value::Map(entries) => {
            std::mem::discriminant(value).hash(state);
            entries.len().hash(state);
            for (key, item) in entries.iter() {
                key.hash(state);
                hash(item, state);
            }
        }
        Value::Named(named) => {
            std::mem::discriminant(value).hash(state);
            named.len().hash(state);
            for (key, item) in named.iter() {
                key.hash(state);
                hash(item, state);
            }
        }
        Value::Object(obj) => {
            std::mem::discriminant(value).hash(state);
            obj.type_id.hash(state);
            for (key, item) in obj.fields.iter() {
                key.hash(state);
                hash(item, state);
            }
        }
        other => other.hash(state),
    }
}

/// A value compared and hashed in canonical form.
///
/// Used as a map key wherever "the same value" must ignore the
/// list/tuple distinction, e.g. when detecting duplicate dispatch patterns.
#[derive(Clone, Debug)]
pub struct Canonical(pub Value);

impl Canonical {
    pub fn value(&self) -> &Value {
        &self.0
    }
}

impl PartialEq for Canonical {
    fn eq(&self, other: &Self) -> bool {
        eq(&self.0, &other.0)
    }
}

impl Eq for Canonical {}

impl Hash for Canonical {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash(&self.0, state);
    }
}

impl From<Value> for Canonical {
    fn from(value: Value) -> Self {
        Canonical(value)
    }
}
