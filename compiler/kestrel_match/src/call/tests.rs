use pretty_assertions::assert_eq;

use super::*;
use kestrel_value::TypeId;

#[test]
fn test_single_argument_is_unboxed() {
    let args = CallArgs::new(vec![Value::int(1)]);
    let call = resolve_call(&args);
    assert_eq!(call.candidate, Candidate::scalar(Value::int(1)));
    assert_eq!(call.values, vec![Value::int(1)]);
}

#[test]
fn test_several_arguments_form_a_tuple() {
    let args = CallArgs::new(vec![Value::int(1), Value::string("x")]);
    let call = resolve_call(&args);
    assert_eq!(call.candidate.family(), Family::Tuple);
    assert_eq!(call.candidate.items(), &[Value::int(1), Value::string("x")]);
}

#[test]
fn test_lone_tuple_is_spread() {
    let args = CallArgs::new(vec![Value::tuple(vec![Value::int(3), Value::string("x")])]);
    let call = resolve_call(&args);
    assert_eq!(call.candidate.family(), Family::Tuple);
    assert_eq!(call.values, vec![Value::int(3), Value::string("x")]);
}

#[test]
fn test_lone_list_is_spread_and_keeps_family() {
    let args = CallArgs::new(vec![Value::list(vec![Value::int(1), Value::int(2)])]);
    let call = resolve_call(&args);
    assert_eq!(call.candidate.family(), Family::List);
    assert_eq!(call.candidate.len(), 2);
}

#[test]
fn test_one_element_tuple_unboxes() {
    let args = CallArgs::new(vec![Value::tuple(vec![Value::string("x")])]);
    let call = resolve_call(&args);
    assert_eq!(call.candidate, Candidate::scalar(Value::string("x")));
}

#[test]
fn test_named_marker_is_appended() {
    let named = NamedArgs::new().with("depth", 2);
    let args = CallArgs::new(vec![Value::int(1)]).with_named(named.clone());
    let call = resolve_call(&args);
    assert_eq!(call.candidate.family(), Family::Tuple);
    assert_eq!(call.candidate.items(), &[Value::int(1), Value::named(named.clone())]);
    assert_eq!(call.values, vec![Value::int(1)]);
    assert_eq!(call.named(), &named);
}

#[test]
fn test_empty_call() {
    let args = CallArgs::default();
    let call = resolve_call(&args);
    assert!(call.candidate.is_empty());
    assert_eq!(call.candidate.family(), Family::Tuple);
}

#[test]
fn test_types_keeps_family() {
    let cand = Candidate::tuple(vec![Value::int(1), Value::string("x")]);
    assert_eq!(
        cand.types(),
        Candidate::tuple(vec![Value::Type(TypeId::INT), Value::Type(TypeId::STR)])
    );
    assert_eq!(
        Candidate::scalar(Value::float(1.5)).types(),
        Candidate::scalar(Value::Type(TypeId::FLOAT))
    );
}

#[test]
fn test_display() {
    assert_eq!(CallArgs::default().to_string(), "()");
    assert_eq!(
        CallArgs::default()
            .with_named(NamedArgs::new().with("a", 1))
            .to_string(),
        "(a=1)"
    );
    assert_eq!(
        Candidate::list(vec![Value::int(1), Value::int(2)]).to_string(),
        "[1, 2]"
    );
    assert_eq!(Candidate::scalar(Value::int(7)).to_string(), "7");
}
