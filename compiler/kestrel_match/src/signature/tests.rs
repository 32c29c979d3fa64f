#![allow(clippy::unwrap_used, reason = "tests use unwrap to panic on unexpected state")]

use pretty_assertions::assert_eq;

use super::*;
use crate::{Family, MalformedReason};

#[test]
fn test_positional_pattern() {
    let sig = Signature::new()
        .positional("amount", TypeId::INT)
        .positional("chr", TypeId::STR);
    let pattern = sig.to_pattern().unwrap();
    assert_eq!(pattern, Pattern::of_types(&[TypeId::INT, TypeId::STR]).unwrap());
    assert_eq!(sig.arity(), 2);
}

#[test]
fn test_single_param_unboxes() {
    let pattern = Signature::of_types(&[TypeId::INT]).to_pattern().unwrap();
    assert_eq!(pattern.family(), Family::Scalar);
    assert_eq!(pattern, Pattern::scalar(TypeId::INT));
}

#[test]
fn test_var_positional_becomes_rest() {
    let sig = Signature::new()
        .positional("begin", TypeId::INT)
        .positional("end", TypeId::INT)
        .var_positional("seq", TypeId::ANY);
    assert_eq!(sig.to_pattern().unwrap().to_string(), "(<int>, <int>, ..)");
}

#[test]
fn test_keyword_params_add_one_marker() {
    let sig = Signature::new()
        .positional("node", TypeId::ANY)
        .keyword("depth", TypeId::INT)
        .keyword("indent", TypeId::STR)
        .var_keyword("rest", TypeId::ANY);
    assert_eq!(sig.to_pattern().unwrap().to_string(), "(<any>, <named>)");
}

#[test]
fn test_variadic_signature() {
    let sig = Signature::variadic();
    assert_eq!(sig.arity(), 2);
    assert_eq!(sig.to_pattern().unwrap().to_string(), "(.., <named>)");
    assert_eq!(sig.to_string(), "(*args: any, **named: any)");
}

#[test]
fn test_nullary_has_no_pattern() {
    let sig = Signature::new();
    assert!(sig.is_nullary());
    let err = sig.to_pattern().unwrap_err();
    assert!(matches!(
        err,
        DispatchError::Malformed {
            reason: MalformedReason::Empty,
            ..
        }
    ));
}

#[test]
fn test_declared_parameter_types() {
    let sig = Signature::new()
        .positional("a", TypeId::INT)
        .var_positional("more", TypeId::FLOAT)
        .keyword("k", TypeId::STR);
    let types: Vec<_> = sig.declared_parameter_types().collect();
    assert_eq!(types, vec![TypeId::INT, TypeId::FLOAT, TypeId::STR]);
}
