//! Dispatch on the argument values.

use kestrel_value::{NamedArgs, Value};

use super::Dispatcher;
use crate::{
    CallArgs, CaseRegistry, DispatchError, DispatchResult, Handler, HandlerRef, LookaheadMatcher,
    Pattern, ResolvedCall, Selected, SequenceMatcher, Signature, Strategy,
};

/// Multiple dispatch over argument values.
///
/// Patterns hold literal values, guards and wildcards, all compared with
/// canonical equality. A guard that fails with an error simply does not
/// match.
#[derive(Clone, Debug)]
pub struct ValueDispatch<M = LookaheadMatcher> {
    name: String,
    registry: CaseRegistry<M>,
    signature: Signature,
}

impl ValueDispatch {
    pub fn new(name: impl Into<String>) -> Self {
        ValueDispatch::with_matcher(name, LookaheadMatcher)
    }

    /// Build a dispatcher from `(pattern, handler)` cases, in order.
    ///
    /// # Errors
    ///
    /// `Conflict` on the first duplicate pattern.
    pub fn from_cases(
        name: impl Into<String>,
        cases: impl IntoIterator<Item = (Pattern, HandlerRef)>,
    ) -> Result<Self, DispatchError> {
        let mut dispatch = ValueDispatch::new(name);
        for (pattern, handler) in cases {
            dispatch.register(pattern, handler)?;
        }
        Ok(dispatch)
    }
}

impl<M: SequenceMatcher> ValueDispatch<M> {
    /// Create an empty dispatcher whose registry matches with `matcher`.
    pub fn with_matcher(name: impl Into<String>, matcher: M) -> Self {
        ValueDispatch {
            name: name.into(),
            registry: CaseRegistry::with_matcher(matcher),
            signature: Signature::variadic(),
        }
    }
}

impl<M: SequenceMatcher + Send + Sync> Dispatcher for ValueDispatch<M> {
    type Matcher = M;

    fn registry(&self) -> &CaseRegistry<M> {
        &self.registry
    }

    fn registry_mut(&mut self) -> &mut CaseRegistry<M> {
        &mut self.registry
    }

    fn select<'a>(&'a self, call: &ResolvedCall<'_>) -> Result<Selected<'a>, DispatchError> {
        self.registry
            .lookup(&call.candidate, &[Strategy::Exact], call.args)
    }
}

impl<M: SequenceMatcher + Send + Sync> Handler for ValueDispatch<M> {
    fn name(&self) -> &str {
        &self.name
    }

    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn call(&self, args: &[Value], named: &NamedArgs) -> DispatchResult {
        self.invoke(&CallArgs::new(args.to_vec()).with_named(named.clone()))
    }
}
