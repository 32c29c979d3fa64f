//! Dispatch on the runtime types of the arguments.

use std::sync::Arc;

use kestrel_value::{NamedArgs, TypeTable, Value};

use super::{Dispatcher, TypeMatchPolicy};
use crate::{
    CallArgs, CaseRegistry, DispatchError, DispatchResult, Handler, HandlerRef, LookaheadMatcher,
    Pattern, ResolvedCall, Selected, SequenceMatcher, Signature, Strategy,
};

/// Multiple dispatch over argument types.
///
/// The candidate is the sequence of runtime types of the resolved call
/// (named arguments contribute the `NAMED` marker type). Patterns hold type
/// tokens and wildcards.
///
/// ```text
/// let mut area = TypeDispatch::new("area", types);
/// area.case(handler("circle", Signature::of_types(&[circle]), ...))?;
/// area.apply(vec![Value::object(circle, [("r", Value::float(1.0))])])?;
/// ```
///
/// `M` is the sequence matcher behind the registry; see
/// [`TypeDispatch::with_matcher`].
#[derive(Clone, Debug)]
pub struct TypeDispatch<M = LookaheadMatcher> {
    name: String,
    types: Arc<TypeTable>,
    policy: TypeMatchPolicy,
    registry: CaseRegistry<M>,
    signature: Signature,
}

impl TypeDispatch {
    pub fn new(name: impl Into<String>, types: Arc<TypeTable>) -> Self {
        TypeDispatch::with_matcher(name, types, LookaheadMatcher)
    }

    /// Build a dispatcher from explicit `(pattern, handler)` cases, in order.
    ///
    /// # Errors
    ///
    /// `Conflict` on the first duplicate pattern.
    pub fn from_cases(
        name: impl Into<String>,
        types: Arc<TypeTable>,
        cases: impl IntoIterator<Item = (Pattern, HandlerRef)>,
    ) -> Result<Self, DispatchError> {
        let mut dispatch = TypeDispatch::new(name, types);
        for (pattern, handler) in cases {
            dispatch.register(pattern, handler)?;
        }
        Ok(dispatch)
    }
}

impl<M: SequenceMatcher> TypeDispatch<M> {
    /// Create an empty dispatcher whose registry matches with `matcher`.
    pub fn with_matcher(name: impl Into<String>, types: Arc<TypeTable>, matcher: M) -> Self {
        TypeDispatch {
            name: name.into(),
            types,
            policy: TypeMatchPolicy::default(),
            registry: CaseRegistry::with_matcher(matcher),
            signature: Signature::variadic(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: TypeMatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> TypeMatchPolicy {
        self.policy
    }

    pub fn types(&self) -> &TypeTable {
        &self.types
    }

    /// Register `handler` under the pattern derived from its signature.
    ///
    /// # Errors
    ///
    /// `Malformed` for a nullary signature, `Conflict` if the derived
    /// pattern is already registered.
    pub fn case(&mut self, handler: HandlerRef) -> Result<(), DispatchError> {
        let pattern = handler.signature().to_pattern()?;
        self.registry.register(pattern, handler)
    }
}

impl<M: SequenceMatcher + Send + Sync> Dispatcher for TypeDispatch<M> {
    type Matcher = M;

    fn registry(&self) -> &CaseRegistry<M> {
        &self.registry
    }

    fn registry_mut(&mut self) -> &mut CaseRegistry<M> {
        &mut self.registry
    }

    fn select<'a>(&'a self, call: &ResolvedCall<'_>) -> Result<Selected<'a>, DispatchError> {
        let candidate = call.candidate.types();
        let strategies = [Strategy::Exact, Strategy::Subtype(&self.types)];
        let passes = if self.policy.allows_subtype() { 2 } else { 1 };
        self.registry
            .lookup(&candidate, &strategies[..passes], call.args)
    }
}

impl<M: SequenceMatcher + Send + Sync> Handler for TypeDispatch<M> {
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

#[cfg(test)]
mod tests;
