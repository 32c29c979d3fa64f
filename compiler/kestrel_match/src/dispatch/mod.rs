//! Dispatch front-ends.
//!
//! A dispatcher owns a `CaseRegistry` and decides which strategies its
//! lookups run. `TypeDispatch` matches the runtime types of the arguments,
//! `ValueDispatch` the argument values themselves. Both are handlers, so a
//! dispatcher can serve as the handler of a case in another dispatcher.

mod type_dispatch;
mod value_dispatch;

pub use type_dispatch::TypeDispatch;
pub use value_dispatch::ValueDispatch;

use kestrel_value::Value;

use crate::handler::invoke_handler;
use crate::{
    resolve_call, CallArgs, CaseRegistry, DispatchError, DispatchResult, Handler, HandlerRef,
    Pattern, ResolvedCall, Selected, SequenceMatcher,
};

/// How `TypeDispatch` compares argument types with pattern types.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypeMatchPolicy {
    /// Exact types first; if nothing matches, retry every case accepting
    /// subtypes.
    #[default]
    ExactThenSubtype,
    /// Exact types only.
    ExactOnly,
}

impl TypeMatchPolicy {
    /// Whether lookups get a second, subtype-accepting pass.
    #[inline]
    pub fn allows_subtype(self) -> bool {
        matches!(self, Self::ExactThenSubtype)
    }
}

/// Shared surface of the dispatch front-ends.
pub trait Dispatcher: Handler {
    /// Sequence matcher used by the registry.
    type Matcher: SequenceMatcher;

    fn registry(&self) -> &CaseRegistry<Self::Matcher>;

    fn registry_mut(&mut self) -> &mut CaseRegistry<Self::Matcher>;

    /// Pick the case (or fallback) for a resolved call.
    ///
    /// # Errors
    ///
    /// `Mismatch` if nothing matches and there is no fallback.
    fn select<'a>(&'a self, call: &ResolvedCall<'_>) -> Result<Selected<'a>, DispatchError>;

    /// Register `handler` under an explicit pattern.
    ///
    /// # Errors
    ///
    /// `Conflict` if the pattern is already registered.
    fn register(&mut self, pattern: Pattern, handler: HandlerRef) -> Result<(), DispatchError> {
        self.registry_mut().register(pattern, handler)
    }

    /// # Errors
    ///
    /// `Conflict` if a fallback is already registered.
    fn register_fallback(&mut self, handler: HandlerRef) -> Result<(), DispatchError> {
        self.registry_mut().register_fallback(handler)
    }

    /// Resolve `args`, select a handler and invoke it.
    ///
    /// # Errors
    ///
    /// `Mismatch` when nothing matches; otherwise whatever the selected
    /// handler returns.
    #[tracing::instrument(level = "debug", skip_all, fields(dispatch = %self.name(), %args))]
    fn invoke(&self, args: &CallArgs) -> DispatchResult {
        let call = resolve_call(args);
        let selected = self.select(&call)?;
        invoke_handler(selected.handler().as_ref(), &call)
    }

    /// Invoke with positional values only.
    ///
    /// # Errors
    ///
    /// As for [`Dispatcher::invoke`].
    fn apply(&self, values: Vec<Value>) -> DispatchResult {
        self.invoke(&CallArgs::new(values))
    }

    /// Registered patterns and handler names, one per line.
    fn explain(&self) -> String {
        self.registry().explain()
    }
}
