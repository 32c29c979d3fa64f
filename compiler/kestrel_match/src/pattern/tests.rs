#![allow(clippy::unwrap_used, reason = "tests use unwrap to panic on unexpected state")]

use pretty_assertions::assert_eq;

use super::*;
use kestrel_value::Value;

#[test]
fn test_one_token_patterns_are_unboxed() {
    let boxed = Pattern::tuple([Token::from(1)]).unwrap();
    assert_eq!(boxed.family(), Family::Scalar);
    assert_eq!(boxed, Pattern::scalar(1));
    assert_eq!(boxed.key(), Pattern::scalar(1).key());

    let listed = Pattern::list([Token::from("x")]).unwrap();
    assert_eq!(listed.family(), Family::Scalar);
}

#[test]
fn test_empty_pattern_is_malformed() {
    let err = Pattern::tuple([]).unwrap_err();
    assert!(matches!(
        err,
        DispatchError::Malformed {
            reason: MalformedReason::Empty,
            ..
        }
    ));
}

#[test]
fn test_adjacent_rest_is_malformed() {
    let err = Pattern::tuple([Token::from(1), Token::Rest, Token::Rest]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed pattern (1, .., ..): a match-many wildcard cannot directly follow another"
    );
}

#[test]
fn test_two_rests_are_malformed() {
    let err = Pattern::tuple([Token::Rest, Token::from(1), Token::Rest]).unwrap_err();
    assert!(matches!(
        err,
        DispatchError::Malformed {
            reason: MalformedReason::MultipleRest,
            ..
        }
    ));
}

#[test]
fn test_rest_anywhere_is_allowed() {
    for tokens in [
        vec![Token::Rest, Token::from(1)],
        vec![Token::from(1), Token::Rest, Token::from(2)],
        vec![Token::Any, Token::Any, Token::Rest],
    ] {
        let pattern = Pattern::tuple(tokens).unwrap();
        assert!(pattern.has_rest());
    }
}

#[test]
fn test_keys_compare_canonically() {
    let a = Pattern::tuple([
        Token::exact(Value::list(vec![Value::int(1)])),
        Token::Any,
    ])
    .unwrap();
    let b = Pattern::tuple([
        Token::exact(Value::tuple(vec![Value::int(1)])),
        Token::Any,
    ])
    .unwrap();
    assert_eq!(a.key(), b.key());
}

#[test]
fn test_keys_distinguish_family() {
    let tuple = Pattern::tuple([Token::from("x"), Token::from("y")]).unwrap();
    let list = Pattern::list([Token::from("x"), Token::from("y")]).unwrap();
    assert_ne!(tuple.key(), list.key());
}

#[test]
fn test_keys_distinguish_guards() {
    let a = Pattern::scalar(Token::guard("pos", |_| true));
    let b = Pattern::scalar(Token::guard("pos", |_| true));
    assert_ne!(a.key(), b.key());
    assert_eq!(a.key(), a.clone().key());
}

#[test]
fn test_of_types() {
    let pattern = Pattern::of_types(&[TypeId::INT, TypeId::STR]).unwrap();
    assert_eq!(pattern.len(), 2);
    assert_eq!(pattern.to_string(), "(<int>, <str>)");
    assert_eq!(Pattern::of_types(&[TypeId::INT]).unwrap().to_string(), "<int>");
}

#[test]
fn test_display() {
    let pattern = Pattern::list([Token::Any, Token::from("+"), Token::Rest]).unwrap();
    assert_eq!(pattern.to_string(), "[_, \"+\", ..]");
}
