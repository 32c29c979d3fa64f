//! Sequence matcher.
//!
//! Runs a candidate sequence against a pattern with a cursor pair
//! `(values, tokens)`. Each step either ends the run or shrinks at least one
//! side, so every run terminates.
//!
//! The match-many wildcard (`Rest`) is resolved with one token of
//! lookahead, never by backtracking:
//!
//! - **unload**: the token after `Rest` (the anchor) matches the value after
//!   the current one, so `Rest` takes the current value and the cursor moves
//!   past both the wildcard and its anchor;
//! - **drag**: otherwise `Rest` takes the current value and stays active;
//! - on the last value with no anchor hit, `Rest` is dropped without taking
//!   anything so the next token can try the value.
//!
//! Patterns that only a backtracking search would accept are rejected.
//! `(.., 1, 2)` against `(1, 1, 1, 2)` is one such case: the anchor hits on
//! the second value and the run then fails comparing `1` with `2`. A `Rest`
//! also never matches an empty run once the values are used up:
//! `(1, 2, ..)` does not accept `(1, 2)`.

use kestrel_value::Value;

use crate::{element_matches, Candidate, Family, Pattern, Strategy, Token};

/// Decides whether a candidate matches a pattern.
///
/// The dispatch front-ends only see this trait, so a different matching
/// algorithm can be swapped in through `CaseRegistry::with_matcher` or the
/// front-ends' `with_matcher` constructors.
pub trait SequenceMatcher {
    fn matches(&self, candidate: &Candidate, pattern: &Pattern, strategy: Strategy<'_>) -> bool;
}

/// The greedy one-token-lookahead matcher.
#[derive(Copy, Clone, Debug, Default)]
pub struct LookaheadMatcher;

impl SequenceMatcher for LookaheadMatcher {
    fn matches(&self, candidate: &Candidate, pattern: &Pattern, strategy: Strategy<'_>) -> bool {
        let mut cursor = Cursor {
            values: candidate.items(),
            tokens: pattern.tokens(),
        };
        let families = (candidate.family(), pattern.family());
        loop {
            match cursor.advance(families, strategy) {
                Step::Continue(next) => cursor = next,
                Step::Matched => return true,
                Step::NoMatch => return false,
            }
        }
    }
}

/// Index of the first pattern in `patterns` that `candidate` matches.
pub fn match_sequence<'p, I>(candidate: &Candidate, patterns: I, strategy: Strategy<'_>) -> Option<usize>
where
    I: IntoIterator<Item = &'p Pattern>,
{
    patterns
        .into_iter()
        .position(|pattern| LookaheadMatcher.matches(candidate, pattern, strategy))
}

#[derive(Copy, Clone, Debug)]
struct Cursor<'v, 't> {
    values: &'v [Value],
    tokens: &'t [Token],
}

#[derive(Debug)]
enum Step<'v, 't> {
    Continue(Cursor<'v, 't>),
    Matched,
    NoMatch,
}

impl<'v, 't> Cursor<'v, 't> {
    fn advance(self, (candidate, pattern): (Family, Family), strategy: Strategy<'_>) -> Step<'v, 't> {
        let (values, tokens) = (self.values, self.tokens);

        let (Some((value, rest_values)), Some((token, rest_tokens))) =
            (values.split_first(), tokens.split_first())
        else {
            return if values.is_empty() && tokens.is_empty() {
                Step::Matched
            } else {
                Step::NoMatch
            };
        };

        // A trailing `Rest` takes whatever is left.
        if tokens.len() == 1 && token.is_rest() {
            return Step::Matched;
        }

        if candidate != pattern {
            return Step::NoMatch;
        }

        if values.len() == 1 && tokens.len() == 1 {
            return if element_matches(value, token, strategy) {
                Step::Matched
            } else {
                Step::NoMatch
            };
        }

        if !token.is_rest() {
            return if element_matches(value, token, strategy) {
                Step::Continue(Cursor {
                    values: rest_values,
                    tokens: rest_tokens,
                })
            } else {
                Step::NoMatch
            };
        }

        let anchored = match (rest_values.split_first(), rest_tokens.split_first()) {
            (Some((next_value, after_value)), Some((anchor, after_anchor))) => {
                element_matches(next_value, anchor, strategy).then_some(Cursor {
                    values: after_value,
                    tokens: after_anchor,
                })
            }
            _ => None,
        };

        let next = match anchored {
            Some(unloaded) => unloaded,
            None if !rest_values.is_empty() => Cursor {
                values: rest_values,
                tokens,
            },
            None => Cursor {
                values,
                tokens: rest_tokens,
            },
        };
        tracing::trace!(
            values = next.values.len(),
            tokens = next.tokens.len(),
            "rest wildcard step"
        );
        Step::Continue(next)
    }
}
