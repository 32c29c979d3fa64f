//! Patterns: validated token sequences used as registration keys.

use std::fmt;

use kestrel_value::{Canonical, TypeId};
use smallvec::SmallVec;

use crate::{DispatchError, MalformedReason, Token};

/// Container family of a pattern or candidate.
///
/// Structural matching only proceeds between sequences of the same family.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// A single unboxed element.
    Scalar,
    Tuple,
    List,
}

/// An ordered, non-empty sequence of tokens.
///
/// Construction rejects empty patterns and patterns whose match-many
/// wildcards the lookahead matcher cannot place. One-token tuple and list
/// patterns are unboxed to `Family::Scalar`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    tokens: SmallVec<[Token; 4]>,
    family: Family,
}

impl Pattern {
    pub fn new(
        tokens: impl IntoIterator<Item = Token>,
        family: Family,
    ) -> Result<Self, DispatchError> {
        let tokens: SmallVec<[Token; 4]> = tokens.into_iter().collect();
        if let Some(reason) = malformed(&tokens) {
            return Err(DispatchError::Malformed {
                tokens: render(&tokens, family),
                reason,
            });
        }
        let family = if tokens.len() == 1 {
            Family::Scalar
        } else {
            family
        };
        Ok(Pattern { tokens, family })
    }

    /// A one-token pattern.
    pub fn scalar(token: impl Into<Token>) -> Self {
        let mut tokens = SmallVec::new();
        tokens.push(token.into());
        Pattern {
            tokens,
            family: Family::Scalar,
        }
    }

    pub fn tuple(tokens: impl IntoIterator<Item = Token>) -> Result<Self, DispatchError> {
        Pattern::new(tokens, Family::Tuple)
    }

    pub fn list(tokens: impl IntoIterator<Item = Token>) -> Result<Self, DispatchError> {
        Pattern::new(tokens, Family::List)
    }

    /// A tuple pattern of type tokens, one per type.
    pub fn of_types(types: &[TypeId]) -> Result<Self, DispatchError> {
        Pattern::tuple(types.iter().copied().map(Token::ty))
    }

    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn family(&self) -> Family {
        self.family
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false for a constructed pattern; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn has_rest(&self) -> bool {
        self.tokens.iter().any(Token::is_rest)
    }

    /// The registration key: canonical tokens plus family.
    pub fn key(&self) -> PatternKey {
        PatternKey {
            tokens: self.tokens.iter().map(KeyToken::from).collect(),
            family: self.family,
        }
    }
}

fn malformed(tokens: &[Token]) -> Option<MalformedReason> {
    if tokens.is_empty() {
        return Some(MalformedReason::Empty);
    }
    if tokens.windows(2).any(|w| w[0].is_rest() && w[1].is_rest()) {
        return Some(MalformedReason::AdjacentRest);
    }
    if tokens.iter().filter(|t| t.is_rest()).count() > 1 {
        return Some(MalformedReason::MultipleRest);
    }
    None
}

fn render(tokens: &[Token], family: Family) -> String {
    let body = tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    match family {
        Family::Scalar if tokens.len() == 1 => body,
        Family::List => format!("[{body}]"),
        Family::Scalar | Family::Tuple => format!("({body})"),
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.tokens, self.family))
    }
}

/// Hashable registration key of a pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PatternKey {
    tokens: SmallVec<[KeyToken; 4]>,
    family: Family,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum KeyToken {
    Exact(Canonical),
    Any,
    Rest,
    Guard(u64),
}

impl From<&Token> for KeyToken {
    fn from(token: &Token) -> Self {
        match token {
            Token::Exact(value) => KeyToken::Exact(Canonical::from(value.clone())),
            Token::Any => KeyToken::Any,
            Token::Rest => KeyToken::Rest,
            Token::Guard(guard) => KeyToken::Guard(guard.id()),
        }
    }
}

#[cfg(test)]
mod tests;
