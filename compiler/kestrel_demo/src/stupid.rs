//! A small, silly expression language.
//!
//! ```text
//! kestrel expr 1            # 1
//! kestrel expr hello        # 99999
//! kestrel expr 4 / 2        # 2.0
//! kestrel expr 2 4 1 2 3 4 5  # (3, 4)
//! ```

use std::sync::Arc;

use kestrel_match::{
    handler, DispatchError, DispatchResult, Dispatcher, HandlerRef, Pattern, Signature, Token,
    TypeDispatch, TypeId, ValueDispatch,
};
use kestrel_value::{TypeTable, Value};

fn int(value: &Value) -> Result<i64, DispatchError> {
    value
        .as_int()
        .ok_or_else(|| DispatchError::raised("expr", format!("expected an int, got {value}")))
}

/// Resolve a slice bound against a sequence of `len` values. Negative
/// bounds count from the end; the result is clamped to `0..=len`.
fn index(value: &Value, len: usize) -> Result<usize, DispatchError> {
    let n = int(value)?;
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    let n = if n < 0 { n.saturating_add(len) } else { n };
    Ok(usize::try_from(n.clamp(0, len)).unwrap_or(0))
}

fn operator(op: &'static str, apply: fn(i64, i64) -> DispatchResult) -> Result<(Pattern, HandlerRef), DispatchError> {
    let pattern = Pattern::tuple([Token::Any, Token::from(op), Token::Any])?;
    let h = handler(op, Signature::variadic(), move |args, _| match args {
        [a, _, b] => apply(int(a)?, int(b)?),
        _ => Err(DispatchError::raised(op, "expected `a op b`")),
    });
    Ok((pattern, h))
}

#[allow(clippy::cast_precision_loss, reason = "operands come from the command line")]
fn divide(a: i64, b: i64) -> DispatchResult {
    if b == 0 {
        return Err(DispatchError::raised("/", "division by zero"));
    }
    Ok(Value::float(a as f64 / b as f64))
}

fn checked(op: &'static str, result: Option<i64>) -> DispatchResult {
    result
        .map(Value::int)
        .ok_or_else(|| DispatchError::raised(op, "integer overflow"))
}

/// The operator table: `(_, op, _)` for `+ - * /`.
pub fn operators() -> Result<ValueDispatch, DispatchError> {
    ValueDispatch::from_cases(
        "operators",
        [
            operator("+", |a, b| checked("+", a.checked_add(b)))?,
            operator("-", |a, b| checked("-", a.checked_sub(b)))?,
            operator("*", |a, b| checked("*", a.checked_mul(b)))?,
            operator("/", divide)?,
        ],
    )
}

/// Build the expression dispatcher.
///
/// Case order matters: `(int, int, ..)` must come before `(int, ..)`.
pub fn build() -> Result<TypeDispatch, DispatchError> {
    let int_t = Token::ty(TypeId::INT);
    let mut expr = TypeDispatch::new("expr", Arc::new(TypeTable::new()));

    expr.case(handler(
        "identity",
        Signature::new().positional("n", TypeId::INT),
        |args, _| Ok(args.first().cloned().unwrap_or(Value::None)),
    ))?;
    expr.case(handler(
        "marker",
        Signature::new().positional("s", TypeId::STR),
        |_, _| Ok(Value::int(99999)),
    ))?;
    expr.register(
        Pattern::tuple([Token::Any, Token::ty(TypeId::STR), Token::Any])?,
        Arc::new(operators()?),
    )?;
    expr.case(handler(
        "slice",
        Signature::new()
            .positional("begin", TypeId::INT)
            .positional("end", TypeId::INT)
            .var_positional("seq", TypeId::ANY),
        |args, _| match args {
            [begin, end, seq @ ..] => {
                let begin = index(begin, seq.len())?;
                let end = index(end, seq.len())?.max(begin);
                Ok(Value::tuple(seq[begin..end].to_vec()))
            }
            _ => Err(DispatchError::raised("slice", "expected begin, end, values...")),
        },
    ))?;
    expr.register(
        Pattern::tuple([int_t, Token::Rest])?,
        handler("take", Signature::variadic(), |args, _| match args {
            [n, seq @ ..] => {
                let n = index(n, seq.len())?;
                Ok(Value::tuple(seq[..n].to_vec()))
            }
            [] => Ok(Value::tuple(Vec::new())),
        }),
    )?;
    Ok(expr)
}
