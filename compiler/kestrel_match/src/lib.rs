//! Kestrel Match - sequence pattern matching and multiple dispatch.
//!
//! This crate provides:
//! - Pattern tokens and patterns (`Token`, `Guard`, `Pattern`, `Family`)
//! - The element and sequence matchers (`element_matches`, `SequenceMatcher`)
//! - The case registry (`CaseRegistry`)
//! - Dispatch front-ends (`TypeDispatch`, `ValueDispatch`)
//! - Call-signature resolution (`CallArgs`, `resolve_call`) and declared
//!   handler signatures (`Signature`)
//!
//! # Architecture
//!
//! Dispatch front-ends resolve a call into a flat candidate sequence, ask
//! the registry for the first case whose pattern matches it, and invoke the
//! case's handler:
//!
//! ```text
//! CallArgs ──resolve_call──▶ Candidate ──CaseRegistry::lookup──▶ Handler ──▶ Value
//!                                          │
//!                                          └─ SequenceMatcher + element_matches
//! ```
//!
//! Registration happens during setup and takes `&mut self`; lookups and
//! invocations take `&self` and touch no shared mutable state.

mod call;
mod dispatch;
mod element;
mod errors;
mod handler;
mod pattern;
mod registry;
mod sequence;
mod signature;
mod token;

pub use call::{resolve_call, CallArgs, Candidate, ResolvedCall};
pub use dispatch::{Dispatcher, TypeDispatch, TypeMatchPolicy, ValueDispatch};
pub use element::{element_matches, Strategy};
pub use errors::{DispatchError, DispatchResult, MalformedReason};
pub use handler::{handler, nullary, FnHandler, Handler, HandlerRef};
pub use pattern::{Family, Pattern, PatternKey};
pub use registry::{Case, CaseRegistry, Selected};
pub use sequence::{match_sequence, LookaheadMatcher, SequenceMatcher};
pub use signature::{Param, ParamKind, Signature};
pub use token::{Guard, GuardFn, Token};

pub use kestrel_value::{NamedArgs, TypeId, TypeTable, Value};
