//! Chained comparisons: true only if the predicate holds for every
//! adjacent pair of arguments.

use std::cmp::Ordering;

use crate::errors::{type_mismatch, EvalResult};
use crate::{Interpreter, Value};

fn chained(
    op: &'static str,
    args: &[Value],
    holds: fn(Ordering) -> bool,
) -> EvalResult {
    for pair in args.windows(2) {
        let [a, b] = pair else { continue };
        let ordering = a
            .compare(b)
            .ok_or_else(|| type_mismatch(op, a.type_name(), b.type_name()))?;
        if !holds(ordering) {
            return Ok(Value::bool(false));
        }
    }
    Ok(Value::bool(true))
}

pub(super) fn all_equal(args: &[Value]) -> bool {
    args.windows(2).all(|pair| pair[0] == pair[1])
}

pub(super) fn eq(_: &mut Interpreter, args: &[Value]) -> EvalResult {
    Ok(Value::bool(all_equal(args)))
}

/// Negation of `=`: true when some adjacent pair differs.
pub(super) fn ne(_: &mut Interpreter, args: &[Value]) -> EvalResult {
    Ok(Value::bool(!all_equal(args)))
}

pub(super) fn lt(_: &mut Interpreter, args: &[Value]) -> EvalResult {
    chained("<", args, Ordering::is_lt)
}

pub(super) fn gt(_: &mut Interpreter, args: &[Value]) -> EvalResult {
    chained(">", args, Ordering::is_gt)
}

pub(super) fn le(_: &mut Interpreter, args: &[Value]) -> EvalResult {
    chained("<=", args, Ordering::is_le)
}

pub(super) fn ge(_: &mut Interpreter, args: &[Value]) -> EvalResult {
    chained(">=", args, Ordering::is_ge)
}
