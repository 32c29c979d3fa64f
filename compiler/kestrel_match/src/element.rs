//! Element matcher: one candidate value against one token.

use kestrel_value::{TypeTable, Value};

use crate::Token;

/// How `Token::Exact` compares against a candidate value.
#[derive(Copy, Clone, Debug, Default)]
pub enum Strategy<'a> {
    /// Canonical equality.
    #[default]
    Exact,
    /// A type token also accepts candidate types declared below it.
    Subtype(&'a TypeTable),
}

impl Strategy<'_> {
    /// Short name for logs.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Exact => "exact",
            Strategy::Subtype(_) => "subtype",
        }
    }
}

/// Check whether `value` satisfies `token` under `strategy`.
///
/// Both wildcards accept any single value. Guards run their predicate;
/// a failing predicate is a non-match.
pub fn element_matches(value: &Value, token: &Token, strategy: Strategy<'_>) -> bool {
    match token {
        Token::Any | Token::Rest => true,
        Token::Guard(guard) => guard.test(value),
        Token::Exact(expected) => match (strategy, expected, value) {
            (Strategy::Subtype(types), Value::Type(sup), Value::Type(sub)) => {
                types.is_subtype(*sub, *sup)
            }
            _ => value.canonical_eq(expected),
        },
    }
}
