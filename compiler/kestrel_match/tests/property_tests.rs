//! Property-based tests for the sequence matcher.
//!
//! Generates small integer candidates and well-formed patterns over a
//! matching alphabet and checks:
//! 1. Determinism: the same inputs always give the same answer
//! 2. First match wins: `match_sequence` picks the lowest matching index
//! 3. Structural facts that hold for every input (exact literals, lengths)
//!
//! Every run terminating at all is the termination property.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use kestrel_match::{
    match_sequence, Candidate, LookaheadMatcher, Pattern, SequenceMatcher,
    Strategy as MatchStrategy, Token, Value,
};
use proptest::prelude::*;

// -- Generation Strategies --

fn value_strategy() -> impl Strategy<Value = i64> {
    0i64..4
}

fn candidate_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(value_strategy(), 0..8)
}

fn token_strategy() -> impl Strategy<Value = Token> {
    prop_oneof![
        4 => value_strategy().prop_map(Token::from),
        2 => Just(Token::Any),
        1 => Just(Token::Rest),
    ]
}

/// Well-formed tuple patterns: malformed token lists are filtered out.
fn pattern_strategy() -> impl Strategy<Value = Pattern> {
    prop::collection::vec(token_strategy(), 1..6)
        .prop_filter_map("well-formed", |tokens| Pattern::tuple(tokens).ok())
}

fn candidate(values: &[i64]) -> Candidate {
    Candidate::tuple(values.iter().copied().map(Value::int).collect())
}

fn matches(values: &[i64], pattern: &Pattern) -> bool {
    LookaheadMatcher.matches(&candidate(values), pattern, MatchStrategy::Exact)
}

proptest! {
    #[test]
    fn matching_is_deterministic(values in candidate_strategy(), pattern in pattern_strategy()) {
        let first = matches(&values, &pattern);
        let second = matches(&values, &pattern);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn first_match_wins(
        values in candidate_strategy(),
        patterns in prop::collection::vec(pattern_strategy(), 0..6),
    ) {
        let expected = patterns.iter().position(|p| matches(&values, p));
        let found = match_sequence(&candidate(&values), &patterns, MatchStrategy::Exact);
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn literal_pattern_matches_itself(values in prop::collection::vec(value_strategy(), 1..8)) {
        let pattern = Pattern::tuple(values.iter().copied().map(Token::from)).unwrap();
        prop_assert!(matches(&values, &pattern));
    }

    #[test]
    fn rest_free_patterns_need_equal_length(values in candidate_strategy(), pattern in pattern_strategy()) {
        prop_assume!(!pattern.has_rest());
        if matches(&values, &pattern) {
            prop_assert_eq!(values.len(), pattern.len());
        }
    }

    #[test]
    fn any_then_rest_accepts_every_long_candidate(values in prop::collection::vec(value_strategy(), 2..8)) {
        let pattern = Pattern::tuple([Token::Any, Token::Rest]).unwrap();
        prop_assert!(matches(&values, &pattern));
    }

    #[test]
    fn empty_candidate_never_matches(pattern in pattern_strategy()) {
        prop_assert!(!matches(&[], &pattern));
    }
}
