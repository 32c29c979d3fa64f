//! Handlers: the callables cases dispatch to.

use std::fmt;
use std::sync::Arc;

use kestrel_value::{NamedArgs, Value};

use crate::{DispatchResult, ResolvedCall, Signature};

/// A callable with a declared signature.
///
/// Handlers must be `Send + Sync` so a fully built dispatcher can be shared
/// between threads for read-only lookups.
pub trait Handler: Send + Sync {
    /// Name used in diagnostics and conflict messages.
    fn name(&self) -> &str;

    fn signature(&self) -> &Signature;

    /// Number of declared parameters. Arity-0 handlers are invoked with no
    /// values at all.
    fn arity(&self) -> usize {
        self.signature().arity()
    }

    fn call(&self, args: &[Value], named: &NamedArgs) -> DispatchResult;
}

/// Shared handle to a handler.
pub type HandlerRef = Arc<dyn Handler>;

impl fmt::Debug for dyn Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler({}{})", self.name(), self.signature())
    }
}

/// A handler backed by a closure.
pub struct FnHandler<F> {
    name: String,
    signature: Signature,
    func: F,
}

impl<F> FnHandler<F>
where
    F: Fn(&[Value], &NamedArgs) -> DispatchResult + Send + Sync,
{
    pub fn new(name: impl Into<String>, signature: Signature, func: F) -> Self {
        FnHandler {
            name: name.into(),
            signature,
            func,
        }
    }
}

impl<F> Handler for FnHandler<F>
where
    F: Fn(&[Value], &NamedArgs) -> DispatchResult + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn call(&self, args: &[Value], named: &NamedArgs) -> DispatchResult {
        (self.func)(args, named)
    }
}

/// Wrap a closure as a shared handler.
pub fn handler<F>(name: impl Into<String>, signature: Signature, func: F) -> HandlerRef
where
    F: Fn(&[Value], &NamedArgs) -> DispatchResult + Send + Sync + 'static,
{
    Arc::new(FnHandler::new(name, signature, func))
}

/// Wrap a closure taking no arguments as a shared handler.
pub fn nullary<F>(name: impl Into<String>, func: F) -> HandlerRef
where
    F: Fn() -> DispatchResult + Send + Sync + 'static,
{
    Arc::new(FnHandler::new(name, Signature::new(), move |_: &[Value], _: &NamedArgs| {
        func()
    }))
}

/// Invoke the handler selected for `call`.
pub(crate) fn invoke_handler(handler: &dyn Handler, call: &ResolvedCall<'_>) -> DispatchResult {
    if handler.arity() == 0 {
        handler.call(&[], &NamedArgs::new())
    } else {
        handler.call(&call.values, call.named())
    }
}
