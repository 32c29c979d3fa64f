//! Kestrel Value - runtime values for the Kestrel dispatch engine.
//!
//! This crate provides:
//! - Runtime value types (`Value`, `Heap`, `ObjectValue`, `NamedArgs`)
//! - Type identifiers and the declared type hierarchy (`TypeId`, `TypeTable`)
//! - Canonical comparison of values (`Canonical`)
//!
//! # Types as Values
//!
//! Type dispatch matches on the runtime *types* of arguments. Types are
//! first-class here: `Value::Type(TypeId)` lets a type appear anywhere a
//! value can, so patterns over types and patterns over values share one
//! token representation.

mod type_id;
mod type_table;
mod value;

pub use type_id::TypeId;
pub use type_table::{TypeInfo, TypeTable, TypeTableError};
pub use value::{Canonical, Heap, NamedArgs, ObjectValue, Value};
