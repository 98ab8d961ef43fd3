//! Sizes and in-place edits of lists, strings and maps.
//!
//! `ins` and `del` mutate their list or map argument, so every holder of
//! that value sees the change. `cut` builds new values.

use super::{clamp_index, require_args, require_int, require_str};
use crate::errors::{key_not_found, type_mismatch, EvalResult};
use crate::exec::index::position;
use crate::{Interpreter, Value};

/// Sum of the sizes of all arguments.
pub(super) fn len(_: &mut Interpreter, args: &[Value]) -> EvalResult {
    let mut total: usize = 0;
    for arg in args {
        total += match arg {
            Value::Str(s) => s.chars().count(),
            Value::List(items) => items.borrow().len(),
            Value::Map(map) => map.len(),
            other => return Err(type_mismatch("len", "list, map or string", other.type_name())),
        };
    }
    Ok(Value::int(i64::try_from(total).unwrap_or(i64::MAX)))
}

/// `(ins xs i v)`: insert `v` before position `i`, clamped to the list.
/// Returns the list.
pub(super) fn ins(_: &mut Interpreter, args: &[Value]) -> EvalResult {
    require_args("ins", 3, args)?;
    let Value::List(items) = &args[0] else {
        return Err(type_mismatch("ins", "list", args[0].type_name()));
    };
    let index = require_int("ins", &args[1])?;
    {
        let mut items = items.borrow_mut();
        let at = clamp_index(index, items.len());
        items.insert(at, args[2].clone());
    }
    Ok(args[0].clone())
}

/// `(del xs i)` removes and returns the element at `i`; `(del m "k")`
/// removes and returns the entry `k`.
pub(super) fn del(_: &mut Interpreter, args: &[Value]) -> EvalResult {
    require_args("del", 2, args)?;
    match &args[0] {
        Value::List(items) => {
            let mut items = items.borrow_mut();
            let at = position(&args[1], items.len())?;
            Ok(items.remove(at))
        }
        Value::Map(map) => {
            let key = require_str("del", &args[1])?;
            map.remove_own(key).ok_or_else(|| key_not_found(key))
        }
        other => Err(type_mismatch("del", "list or map", other.type_name())),
    }
}

/// `(cut seq i)`: split a list or string at `i` into `[head tail]`.
pub(super) fn cut(_: &mut Interpreter, args: &[Value]) -> EvalResult {
    require_args("cut", 2, args)?;
    let index = require_int("cut", &args[1])?;
    let (head, tail) = match &args[0] {
        Value::List(items) => {
            let items = items.borrow();
            let (head, tail) = items.split_at(clamp_index(index, items.len()));
            (Value::list(head.to_vec()), Value::list(tail.to_vec()))
        }
        Value::Str(s) => {
            let at = clamp_index(index, s.chars().count());
            let byte = s.char_indices().nth(at).map_or(s.len(), |(b, _)| b);
            let (head, tail) = s.split_at(byte);
            (Value::string(head), Value::string(tail))
        }
        other => return Err(type_mismatch("cut", "list or string", other.type_name())),
    };
    Ok(Value::list(vec![head, tail]))
}
