//! `+ - * /`: left folds over the arguments.

use super::{require_int, require_number};
use crate::errors::{integer_overflow, type_mismatch, wrong_arg_count, EvalResult};
use crate::{Interpreter, Number, Value};

fn fold_args(
    name: &'static str,
    args: &[Value],
    step: impl Fn(Value, &Value) -> EvalResult,
) -> EvalResult {
    let Some((first, rest)) = args.split_first() else {
        return Err(wrong_arg_count(name, "at least 1", 0));
    };
    rest.iter().try_fold(first.clone(), |acc, next| step(acc, next))
}

fn numeric(
    name: &'static str,
    args: &[Value],
    op: fn(Number, Number) -> EvalResult<Number>,
) -> EvalResult {
    if let [only] = args {
        require_number(name, only)?;
    }
    fold_args(name, args, |acc, next| {
        let a = require_number(name, &acc)?;
        let b = require_number(name, next)?;
        op(a, b).map(Value::Number)
    })
}

/// Numbers add; strings and lists concatenate into a new value.
pub(super) fn add(_: &mut Interpreter, args: &[Value]) -> EvalResult {
    fold_args("+", args, |acc, next| match (&acc, next) {
        (Value::Number(a), Value::Number(b)) => a.add(*b).map(Value::Number),
        (Value::Str(a), Value::Str(b)) => Ok(Value::string(&format!("{a}{b}"))),
        (Value::List(a), Value::List(b)) => {
            let mut items = a.borrow().clone();
            items.extend(b.borrow().iter().cloned());
            Ok(Value::list(items))
        }
        (Value::Number(_) | Value::Str(_) | Value::List(_), other) => {
            Err(type_mismatch("+", acc.type_name(), other.type_name()))
        }
        (other, _) => Err(type_mismatch("+", "number, string or list", other.type_name())),
    })
}

pub(super) fn sub(_: &mut Interpreter, args: &[Value]) -> EvalResult {
    numeric("-", args, Number::sub)
}

/// Numbers multiply; a string or list times an integer repeats.
pub(super) fn mul(_: &mut Interpreter, args: &[Value]) -> EvalResult {
    fold_args("*", args, |acc, next| match &acc {
        Value::Number(a) => {
            let b = require_number("*", next)?;
            a.mul(b).map(Value::Number)
        }
        Value::Str(s) => {
            let count = repeat_count(s.len(), next)?;
            Ok(Value::string(&s.repeat(count)))
        }
        Value::List(items) => {
            let items = items.borrow();
            let count = repeat_count(items.len(), next)?;
            let mut repeated = Vec::with_capacity(items.len() * count);
            for _ in 0..count {
                repeated.extend(items.iter().cloned());
            }
            Ok(Value::list(repeated))
        }
        other => Err(type_mismatch("*", "number, string or list", other.type_name())),
    })
}

/// Repetitions of a sequence of `len` elements. Negative counts give zero.
fn repeat_count(len: usize, count: &Value) -> EvalResult<usize> {
    let count = usize::try_from(require_int("*", count)?.max(0)).unwrap_or(usize::MAX);
    match len.checked_mul(count) {
        Some(_) => Ok(count),
        None => Err(integer_overflow("*")),
    }
}

pub(super) fn div(_: &mut Interpreter, args: &[Value]) -> EvalResult {
    numeric("/", args, Number::div)
}
