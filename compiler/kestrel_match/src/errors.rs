//! Error types for registration and dispatch.
//!
//! Every error is terminal to the call that raised it: the engine never
//! retries or partially recovers. Errors raised by handlers travel through
//! nested dispatchers unchanged.

use kestrel_value::Value;

use crate::CallArgs;

/// Result of invoking a handler or a dispatcher.
pub type DispatchResult = Result<Value, DispatchError>;

/// Why a pattern was rejected at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    #[error("a pattern needs at least one token")]
    Empty,
    #[error("a match-many wildcard cannot directly follow another")]
    AdjacentRest,
    #[error("a pattern may hold at most one match-many wildcard")]
    MultipleRest,
}

/// Dispatch error.
#[derive(Clone, Debug, thiserror::Error)]
pub enum DispatchError {
    /// A pattern key (or the fallback slot) was registered twice.
    ///
    /// Raised at registration time only.
    #[error("{key} is already registered to `{existing}`")]
    Conflict { key: String, existing: String },

    /// No case and no fallback matched the call.
    #[error("no case matches arguments {args}")]
    Mismatch { args: CallArgs },

    /// A pattern is structurally invalid.
    #[error("malformed pattern {tokens}: {reason}")]
    Malformed {
        tokens: String,
        reason: MalformedReason,
    },

    /// Raised by a handler's own code.
    #[error("handler `{handler}` failed: {message}")]
    Handler { handler: String, message: String },
}

impl DispatchError {
    /// Create the error a handler returns to signal its own failure.
    pub fn raised(handler: impl Into<String>, message: impl Into<String>) -> Self {
        DispatchError::Handler {
            handler: handler.into(),
            message: message.into(),
        }
    }

    pub(crate) fn mismatch(args: &CallArgs) -> Self {
        DispatchError::Mismatch { args: args.clone() }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, DispatchError::Conflict { .. })
    }

    pub fn is_mismatch(&self) -> bool {
        matches!(self, DispatchError::Mismatch { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, DispatchError::Malformed { .. })
    }
}
