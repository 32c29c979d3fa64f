//! Declared handler signatures.
//!
//! Type dispatch derives a case's pattern from its handler's signature once,
//! at registration; matching never looks at the signature again.

use std::fmt;

use kestrel_value::TypeId;
use smallvec::SmallVec;

use crate::{DispatchError, Pattern, Token};

/// How a parameter receives its argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// Required positional parameter.
    Positional,
    /// Required parameter passed by name only.
    KeywordOnly,
    /// Collects any remaining positional arguments (`*args`).
    VarPositional,
    /// Collects any remaining named arguments (`**named`).
    VarKeyword,
}

/// One declared parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: TypeId,
    pub kind: ParamKind,
}

/// Ordered parameters of a handler.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Signature {
    params: SmallVec<[Param; 4]>,
}

impl Signature {
    /// A signature with no parameters.
    pub fn new() -> Self {
        Signature::default()
    }

    /// Positional parameters, one per type, named `arg0`, `arg1`, ...
    pub fn of_types(types: &[TypeId]) -> Self {
        types
            .iter()
            .enumerate()
            .fold(Signature::new(), |sig, (i, ty)| sig.positional(format!("arg{i}"), *ty))
    }

    /// `(*args, **named)`: accepts anything. Dispatchers use this.
    pub fn variadic() -> Self {
        Signature::new()
            .var_positional("args", TypeId::ANY)
            .var_keyword("named", TypeId::ANY)
    }

    #[must_use]
    pub fn positional(self, name: impl Into<String>, ty: TypeId) -> Self {
        self.push(name, ty, ParamKind::Positional)
    }

    #[must_use]
    pub fn keyword(self, name: impl Into<String>, ty: TypeId) -> Self {
        self.push(name, ty, ParamKind::KeywordOnly)
    }

    #[must_use]
    pub fn var_positional(self, name: impl Into<String>, ty: TypeId) -> Self {
        self.push(name, ty, ParamKind::VarPositional)
    }

    #[must_use]
    pub fn var_keyword(self, name: impl Into<String>, ty: TypeId) -> Self {
        self.push(name, ty, ParamKind::VarKeyword)
    }

    fn push(mut self, name: impl Into<String>, ty: TypeId, kind: ParamKind) -> Self {
        self.params.push(Param {
            name: name.into(),
            ty,
            kind,
        });
        self
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Number of declared parameters, variadic ones included.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn is_nullary(&self) -> bool {
        self.params.is_empty()
    }

    /// Declared types in declaration order.
    pub fn declared_parameter_types(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.params.iter().map(|param| param.ty)
    }

    /// Derive the type pattern a handler with this signature accepts.
    ///
    /// Positional parameters contribute their types in order and a variadic
    /// positional parameter contributes `Rest`. Keyword-only and variadic
    /// keyword parameters together contribute one trailing `NAMED` marker,
    /// matching the marker call resolution appends for named arguments.
    ///
    /// A nullary signature has no pattern and is `Malformed`.
    pub fn to_pattern(&self) -> Result<Pattern, DispatchError> {
        let mut tokens: SmallVec<[Token; 4]> = SmallVec::new();
        let mut takes_named = false;
        for param in &self.params {
            match param.kind {
                ParamKind::Positional => tokens.push(Token::ty(param.ty)),
                ParamKind::VarPositional => tokens.push(Token::Rest),
                ParamKind::KeywordOnly | ParamKind::VarKeyword => takes_named = true,
            }
        }
        if takes_named {
            tokens.push(Token::ty(TypeId::NAMED));
        }
        Pattern::tuple(tokens)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let prefix = match param.kind {
                ParamKind::Positional | ParamKind::KeywordOnly => "",
                ParamKind::VarPositional => "*",
                ParamKind::VarKeyword => "**",
            };
            write!(f, "{prefix}{}: {}", param.name, param.ty)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests;
