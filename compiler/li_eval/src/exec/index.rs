//! Indexing through a list, map or string head.
//!
//! `(xs 0)` reads, `(xs 0 v)` writes and returns `v`. Negative positions
//! count from the end. Strings are read-only.

use crate::errors::{
    index_out_of_bounds, key_not_found, type_mismatch, wrong_arg_count, EvalResult,
};
use crate::Value;

pub(super) fn access(head: &Value, args: &[Value]) -> EvalResult {
    match args {
        [key] => read(head, key),
        [key, value] => write(head, key, value.clone()),
        _ => Err(wrong_arg_count("index", "1 or 2", args.len())),
    }
}

fn read(head: &Value, key: &Value) -> EvalResult {
    match head {
        Value::List(items) => {
            let items = items.borrow();
            let i = position(key, items.len())?;
            Ok(items[i].clone())
        }
        Value::Map(map) => {
            let key = map_key(key)?;
            map.get_own(key).ok_or_else(|| key_not_found(key))
        }
        Value::Str(s) => {
            let count = s.chars().count();
            let i = position(key, count)?;
            let c = s.chars().nth(i).unwrap_or_default();
            Ok(Value::string(c.encode_utf8(&mut [0; 4])))
        }
        other => Err(type_mismatch("index", "list, map or string", other.type_name())),
    }
}

fn write(head: &Value, key: &Value, value: Value) -> EvalResult {
    match head {
        Value::List(items) => {
            let mut items = items.borrow_mut();
            let i = position(key, items.len())?;
            items[i] = value.clone();
        }
        Value::Map(map) => map.set_own(map_key(key)?, value.clone()),
        other => return Err(type_mismatch("index", "list or map", other.type_name())),
    }
    Ok(value)
}

fn map_key(key: &Value) -> EvalResult<&str> {
    match key {
        Value::Str(s) => Ok(s),
        other => Err(type_mismatch("index", "string", other.type_name())),
    }
}

/// Resolve an index value against `len`, accepting negatives from the end.
pub(crate) fn position(key: &Value, len: usize) -> EvalResult<usize> {
    let index = match key {
        Value::Number(n) => n
            .as_int()
            .ok_or_else(|| type_mismatch("index", "integer", "float"))?,
        other => return Err(type_mismatch("index", "integer", other.type_name())),
    };
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    let resolved = if index < 0 { index + len_i } else { index };
    if (0..len_i).contains(&resolved) {
        usize::try_from(resolved).map_err(|_| index_out_of_bounds(index, len))
    } else {
        Err(index_out_of_bounds(index, len))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Env, EvalError};

    fn list() -> Value {
        Value::list(vec![Value::int(10), Value::int(20), Value::int(30)])
    }

    #[test]
    fn list_reads_with_negative_positions() {
        let xs = list();
        assert_eq!(access(&xs, &[Value::int(0)]), Ok(Value::int(10)));
        assert_eq!(access(&xs, &[Value::int(-1)]), Ok(Value::int(30)));
        assert_eq!(
            access(&xs, &[Value::int(3)]),
            Err(EvalError::IndexOutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn list_write_is_shared() {
        let xs = list();
        let alias = xs.clone();
        assert_eq!(access(&xs, &[Value::int(1), Value::int(7)]), Ok(Value::int(7)));
        assert_eq!(access(&alias, &[Value::int(1)]), Ok(Value::int(7)));
    }

    #[test]
    fn map_reads_own_entries_and_inserts() {
        let outer = Env::root();
        outer.set_own("hidden", Value::int(1));
        let map = Value::Map(Env::child(&outer));
        assert_eq!(
            access(&map, &[Value::string("hidden")]),
            Err(EvalError::KeyNotFound("hidden".into()))
        );
        access(&map, &[Value::string("k"), Value::int(2)]).ok();
        assert_eq!(access(&map, &[Value::string("k")]), Ok(Value::int(2)));
    }

    #[test]
    fn strings_index_by_character() {
        let s = Value::string("héllo");
        assert_eq!(access(&s, &[Value::int(1)]), Ok(Value::string("é")));
        assert!(matches!(
            access(&s, &[Value::int(0), Value::string("x")]),
            Err(EvalError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn zero_or_three_keys_is_an_arity_error() {
        assert!(matches!(
            access(&list(), &[]),
            Err(EvalError::ArityMismatch { name: "index", .. })
        ));
        assert!(matches!(
            access(&list(), &[Value::int(0), Value::int(1), Value::int(2)]),
            Err(EvalError::ArityMismatch { got: 3, .. })
        ));
    }

    #[test]
    fn bool_positions_count_as_integers() {
        assert_eq!(access(&list(), &[Value::bool(true)]), Ok(Value::int(20)));
    }
}
