//! Case registry.
//!
//! Insertion-ordered mapping from pattern to handler. Order decides which of
//! several overlapping patterns wins; literal duplicates are rejected when
//! registered.

use std::fmt::Write;

use rustc_hash::FxHashMap;

use crate::{
    CallArgs, Candidate, DispatchError, HandlerRef, LookaheadMatcher, Pattern, PatternKey,
    SequenceMatcher, Strategy,
};

/// A registered pattern and its handler.
#[derive(Clone, Debug)]
pub struct Case {
    pub pattern: Pattern,
    pub handler: HandlerRef,
}

/// Outcome of a successful lookup.
#[derive(Copy, Clone, Debug)]
pub enum Selected<'a> {
    Case(&'a Case),
    Fallback(&'a HandlerRef),
}

impl<'a> Selected<'a> {
    pub fn handler(&self) -> &'a HandlerRef {
        match self {
            Selected::Case(case) => &case.handler,
            Selected::Fallback(handler) => handler,
        }
    }

    pub fn pattern(&self) -> Option<&'a Pattern> {
        match self {
            Selected::Case(case) => Some(&case.pattern),
            Selected::Fallback(_) => None,
        }
    }
}

/// Registered cases plus an optional fallback.
#[derive(Clone, Debug)]
pub struct CaseRegistry<M = LookaheadMatcher> {
    cases: Vec<Case>,
    index: FxHashMap<PatternKey, usize>,
    fallback: Option<HandlerRef>,
    matcher: M,
}

impl CaseRegistry {
    pub fn new() -> Self {
        CaseRegistry::with_matcher(LookaheadMatcher)
    }
}

impl Default for CaseRegistry {
    fn default() -> Self {
        CaseRegistry::new()
    }
}

impl<M: SequenceMatcher> CaseRegistry<M> {
    /// Create a registry that matches with `matcher`.
    pub fn with_matcher(matcher: M) -> Self {
        CaseRegistry {
            cases: Vec::new(),
            index: FxHashMap::default(),
            fallback: None,
            matcher,
        }
    }

    /// Add a case.
    ///
    /// # Errors
    ///
    /// `Conflict` if an equal pattern (compared after unboxing, canonically)
    /// is already registered.
    pub fn register(&mut self, pattern: Pattern, handler: HandlerRef) -> Result<(), DispatchError> {
        let key = pattern.key();
        if let Some(&existing) = self.index.get(&key) {
            return Err(DispatchError::Conflict {
                key: format!("pattern {pattern}"),
                existing: self.cases[existing].handler.name().to_string(),
            });
        }
        tracing::debug!(%pattern, handler = handler.name(), "register case");
        self.index.insert(key, self.cases.len());
        self.cases.push(Case { pattern, handler });
        Ok(())
    }

    /// Set the handler used when no case matches.
    ///
    /// # Errors
    ///
    /// `Conflict` if a fallback is already set.
    pub fn register_fallback(&mut self, handler: HandlerRef) -> Result<(), DispatchError> {
        if let Some(existing) = &self.fallback {
            return Err(DispatchError::Conflict {
                key: "fallback".to_string(),
                existing: existing.name().to_string(),
            });
        }
        tracing::debug!(handler = handler.name(), "register fallback");
        self.fallback = Some(handler);
        Ok(())
    }

    /// First case whose pattern matches `candidate`. Ignores the fallback.
    pub fn find(&self, candidate: &Candidate, strategy: Strategy<'_>) -> Option<&Case> {
        self.cases
            .iter()
            .find(|case| self.matcher.matches(candidate, &case.pattern, strategy))
    }

    /// Select a handler for `candidate`.
    ///
    /// Each strategy is tried in turn over all cases; the fallback is used
    /// only once every strategy has missed.
    ///
    /// # Errors
    ///
    /// `Mismatch` carrying `args` if nothing matches and there is no
    /// fallback.
    pub fn lookup(
        &self,
        candidate: &Candidate,
        strategies: &[Strategy<'_>],
        args: &CallArgs,
    ) -> Result<Selected<'_>, DispatchError> {
        for &strategy in strategies {
            if let Some(case) = self.find(candidate, strategy) {
                tracing::trace!(
                    %candidate,
                    pattern = %case.pattern,
                    strategy = strategy.label(),
                    "case selected"
                );
                return Ok(Selected::Case(case));
            }
        }
        match &self.fallback {
            Some(handler) => {
                tracing::trace!(%candidate, "fallback selected");
                Ok(Selected::Fallback(handler))
            }
            None => Err(DispatchError::mismatch(args)),
        }
    }

    /// Human-readable listing of the cases, fallback last.
    pub fn explain(&self) -> String {
        let mut out = String::new();
        for case in &self.cases {
            let _ = writeln!(out, "{} => {}", case.pattern, case.handler.name());
        }
        if let Some(fallback) = &self.fallback {
            let _ = writeln!(out, "* => {}", fallback.name());
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = &Case> {
        self.cases.iter()
    }

    pub fn patterns(&self) -> impl Iterator<Item = &Pattern> {
        self.cases.iter().map(|case| &case.pattern)
    }

    pub fn fallback(&self) -> Option<&HandlerRef> {
        self.fallback.as_ref()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}
