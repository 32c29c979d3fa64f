#![allow(clippy::unwrap_used, reason = "tests use unwrap to panic on unexpected state")]

use std::sync::Arc;

use pretty_assertions::assert_eq;

use super::*;
use crate::{handler, nullary, Token, TypeId};

fn int_arg(args: &[Value], i: usize) -> i64 {
    args[i].as_int().unwrap()
}

/// int => x + 4, str => greeting, (int, str) => repeat, (int, _) => 10 - n
fn fixture() -> TypeDispatch {
    let mut dispatch = TypeDispatch::new("fixture", Arc::new(TypeTable::new()));
    dispatch
        .case(handler("plus_four", Signature::of_types(&[TypeId::INT]), |args, _| {
            Ok(Value::int(int_arg(args, 0) + 4))
        }))
        .unwrap();
    dispatch
        .case(handler("greet", Signature::of_types(&[TypeId::STR]), |args, _| {
            Ok(Value::string(format!("Hello, {}!", args[0].as_str().unwrap())))
        }))
        .unwrap();
    dispatch
        .case(handler(
            "repeat",
            Signature::new().positional("amount", TypeId::INT).positional("chr", TypeId::STR),
            |args, _| {
                let amount = usize::try_from(int_arg(args, 0)).unwrap();
                Ok(Value::string(args[1].as_str().unwrap().repeat(amount)))
            },
        ))
        .unwrap();
    dispatch
        .register(
            Pattern::tuple([Token::ty(TypeId::INT), Token::Any]).unwrap(),
            handler("ten_minus", Signature::variadic(), |args, _| {
                Ok(Value::int(10 - int_arg(args, 0)))
            }),
        )
        .unwrap();
    dispatch
}

#[test]
fn test_hits() {
    let dispatch = fixture();
    assert_eq!(dispatch.apply(vec![Value::int(1)]).unwrap(), Value::int(5));
    assert_eq!(
        dispatch.apply(vec![Value::string("World")]).unwrap(),
        Value::string("Hello, World!")
    );
    assert_eq!(
        dispatch
            .apply(vec![Value::tuple(vec![Value::int(3), Value::string("x")])])
            .unwrap(),
        Value::string("xxx")
    );
    assert_eq!(
        dispatch.apply(vec![Value::int(5), Value::int(5)]).unwrap(),
        Value::int(5)
    );
}

#[test]
fn test_mismatch_carries_arguments() {
    let dispatch = fixture();
    let err = dispatch.apply(vec![Value::float(1.5)]).unwrap_err();
    assert!(err.is_mismatch());
    assert_eq!(err.to_string(), "no case matches arguments (1.5)");
}

#[test]
fn test_subtype_pass() {
    let mut dispatch = TypeDispatch::new("num", Arc::new(TypeTable::new()));
    dispatch
        .case(handler("number", Signature::of_types(&[TypeId::NUMBER]), |_, _| {
            Ok(Value::string("number"))
        }))
        .unwrap();
    assert_eq!(
        dispatch.apply(vec![Value::int(1)]).unwrap(),
        Value::string("number")
    );
    assert_eq!(
        dispatch.apply(vec![Value::Bool(true)]).unwrap(),
        Value::string("number")
    );
    assert!(dispatch.apply(vec![Value::string("1")]).unwrap_err().is_mismatch());
}

#[test]
fn test_exact_pass_beats_earlier_supertype_case() {
    let mut dispatch = TypeDispatch::new("num", Arc::new(TypeTable::new()));
    dispatch
        .case(handler("number", Signature::of_types(&[TypeId::NUMBER]), |_, _| {
            Ok(Value::string("number"))
        }))
        .unwrap();
    dispatch
        .case(handler("int", Signature::of_types(&[TypeId::INT]), |_, _| {
            Ok(Value::string("int"))
        }))
        .unwrap();
    assert_eq!(dispatch.apply(vec![Value::int(1)]).unwrap(), Value::string("int"));
    assert_eq!(
        dispatch.apply(vec![Value::float(1.0)]).unwrap(),
        Value::string("number")
    );
}

#[test]
fn test_exact_only_policy() {
    let mut dispatch = TypeDispatch::new("num", Arc::new(TypeTable::new()))
        .with_policy(TypeMatchPolicy::ExactOnly);
    dispatch
        .case(handler("number", Signature::of_types(&[TypeId::NUMBER]), |_, _| {
            Ok(Value::None)
        }))
        .unwrap();
    assert_eq!(dispatch.policy(), TypeMatchPolicy::ExactOnly);
    assert!(dispatch.apply(vec![Value::int(1)]).unwrap_err().is_mismatch());
}

#[test]
fn test_user_types_and_objects() {
    let mut types = TypeTable::new();
    let shape = types.declare("Shape", TypeId::ANY).unwrap();
    let circle = types.declare("Circle", shape).unwrap();
    let square = types.declare("Square", shape).unwrap();
    let mut area = TypeDispatch::new("area", Arc::new(types));

    area.case(handler("square", Signature::of_types(&[square]), |args, _| {
        let side = args[0].as_object().unwrap().get_field("side").unwrap();
        Ok(Value::float(side.as_float().unwrap().powi(2)))
    }))
    .unwrap();
    area.case(handler("shape", Signature::of_types(&[shape]), |_, _| {
        Ok(Value::None)
    }))
    .unwrap();

    let sq = Value::object(square, [("side", Value::float(3.0))]);
    let circ = Value::object(circle, [("r", Value::float(1.0))]);
    assert_eq!(area.apply(vec![sq]).unwrap(), Value::float(9.0));
    assert_eq!(area.apply(vec![circ]).unwrap(), Value::None);
    assert_eq!(area.types().name(circle), "Circle");
}

#[test]
fn test_nullary_case_gets_no_arguments() {
    let mut dispatch = TypeDispatch::new("kind", Arc::new(TypeTable::new()));
    dispatch
        .register(Pattern::scalar(TypeId::STR), nullary("text", || Ok(Value::string("text"))))
        .unwrap();
    assert_eq!(
        dispatch.apply(vec![Value::string("anything")]).unwrap(),
        Value::string("text")
    );
}

#[test]
fn test_nullary_signature_cannot_derive_a_case() {
    let mut dispatch = TypeDispatch::new("kind", Arc::new(TypeTable::new()));
    let err = dispatch.case(nullary("nothing", || Ok(Value::None))).unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn test_keyword_parameters_match_named_marker() {
    let mut dispatch = TypeDispatch::new("render", Arc::new(TypeTable::new()));
    dispatch
        .case(handler(
            "indent",
            Signature::new()
                .positional("text", TypeId::STR)
                .keyword("depth", TypeId::INT),
            |args, named| {
                let depth = usize::try_from(named.get("depth").unwrap().as_int().unwrap()).unwrap();
                Ok(Value::string(format!("{}{}", " ".repeat(depth), args[0].as_str().unwrap())))
            },
        ))
        .unwrap();

    let args = CallArgs::new(vec![Value::string("x")])
        .with_named(NamedArgs::new().with("depth", 2));
    assert_eq!(dispatch.invoke(&args).unwrap(), Value::string("  x"));
    assert!(dispatch.apply(vec![Value::string("x")]).unwrap_err().is_mismatch());
}

#[test]
fn test_duplicate_derived_pattern_conflicts() {
    let mut dispatch = fixture();
    let err = dispatch
        .case(handler("again", Signature::of_types(&[TypeId::INT]), |_, _| {
            Ok(Value::None)
        }))
        .unwrap_err();
    assert_eq!(err.to_string(), "pattern <int> is already registered to `plus_four`");
}

#[test]
fn test_from_cases() {
    let dispatch = TypeDispatch::from_cases(
        "cases",
        Arc::new(TypeTable::new()),
        [
            (Pattern::scalar(TypeId::INT), nullary("int", || Ok(Value::int(0)))),
            (Pattern::scalar(TypeId::STR), nullary("str", || Ok(Value::int(1)))),
        ],
    )
    .unwrap();
    assert_eq!(dispatch.registry().len(), 2);
    assert_eq!(dispatch.explain(), "<int> => int\n<str> => str\n");
}

#[test]
fn test_custom_matcher_reaches_lookup() {
    use crate::Candidate;

    struct Never;
    impl SequenceMatcher for Never {
        fn matches(&self, _: &Candidate, _: &Pattern, _: Strategy<'_>) -> bool {
            false
        }
    }

    let mut dispatch = TypeDispatch::with_matcher("never", Arc::new(TypeTable::new()), Never);
    dispatch
        .register(Pattern::scalar(Token::Any), nullary("any", || Ok(Value::int(1))))
        .unwrap();
    assert!(dispatch.apply(vec![Value::int(5)]).unwrap_err().is_mismatch());

    dispatch
        .register_fallback(nullary("fallback", || Ok(Value::int(0))))
        .unwrap();
    assert_eq!(dispatch.apply(vec![Value::int(5)]).unwrap(), Value::int(0));
}
