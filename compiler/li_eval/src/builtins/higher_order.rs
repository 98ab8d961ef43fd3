//! `map`, `fold` and `filter`.
//!
//! The sequence argument is realized up front: list elements, the
//! characters of a string, or the keys of a map. The function argument is
//! anything callable.

use super::require_args;
use crate::errors::{type_mismatch, EvalResult};
use crate::{Interpreter, Value};

fn elements(op: &'static str, seq: &Value) -> EvalResult<Vec<Value>> {
    match seq {
        Value::List(items) => Ok(items.borrow().clone()),
        Value::Str(s) => Ok(s
            .chars()
            .map(|c| Value::string(c.encode_utf8(&mut [0; 4])))
            .collect()),
        Value::Map(map) => Ok(map.keys().iter().map(|k| Value::string(k)).collect()),
        other => Err(type_mismatch(op, "list, map or string", other.type_name())),
    }
}

/// `(map f seq)`: always a list.
pub(super) fn map(interp: &mut Interpreter, args: &[Value]) -> EvalResult {
    require_args("map", 2, args)?;
    let f = &args[0];
    let mapped = elements("map", &args[1])?
        .into_iter()
        .map(|x| interp.call_value(f, vec![x]))
        .collect::<EvalResult<Vec<_>>>()?;
    Ok(Value::list(mapped))
}

/// `(fold f seq)`: `(f (f a b) c)` and so on. An empty sequence is an error.
pub(super) fn fold(interp: &mut Interpreter, args: &[Value]) -> EvalResult {
    require_args("fold", 2, args)?;
    let f = &args[0];
    let mut items = elements("fold", &args[1])?.into_iter();
    let Some(first) = items.next() else {
        return Err(type_mismatch("fold", "non-empty sequence", "empty sequence"));
    };
    items.try_fold(first, |acc, x| interp.call_value(f, vec![acc, x]))
}

/// `(filter f seq)`: elements for which `f` is truthy. Strings stay strings.
pub(super) fn filter(interp: &mut Interpreter, args: &[Value]) -> EvalResult {
    require_args("filter", 2, args)?;
    let f = &args[0];
    let mut kept = Vec::new();
    for x in elements("filter", &args[1])? {
        if interp.call_value(f, vec![x.clone()])?.is_truthy() {
            kept.push(x);
        }
    }
    match &args[1] {
        Value::Str(_) => {
            let text: String = kept.iter().map(ToString::to_string).collect();
            Ok(Value::string(&text))
        }
        _ => Ok(Value::list(kept)),
    }
}
