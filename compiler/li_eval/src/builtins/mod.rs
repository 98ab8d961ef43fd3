//! The standard primitives.
//!
//! Each primitive takes the interpreter and its evaluated arguments. Names
//! registered here are canonical; the interpreter localizes them through its
//! dialect.

mod arithmetic;
mod compare;
mod higher_order;
mod host;
mod io;
mod sequence;

pub(crate) use host::HostFiles;

use crate::errors::{type_mismatch, wrong_arg_count, EvalResult};
use crate::{Catalog, Number, Value};

pub(crate) fn register(catalog: &mut Catalog) {
    catalog.insert("+", arithmetic::add);
    catalog.insert("-", arithmetic::sub);
    catalog.insert("*", arithmetic::mul);
    catalog.insert("/", arithmetic::div);

    catalog.insert("=", compare::eq);
    catalog.insert("!", compare::ne);
    catalog.insert("<", compare::lt);
    catalog.insert(">", compare::gt);
    catalog.insert("<=", compare::le);
    catalog.insert(">=", compare::ge);

    catalog.insert("print", io::print);
    catalog.insert("println", io::println);
    catalog.insert("input", io::input);
    catalog.insert("assert", io::assert);
    catalog.insert("round", io::round);
    catalog.insert("type", io::type_of);
    catalog.insert("import", io::import);

    catalog.insert("len", sequence::len);
    catalog.insert("ins", sequence::ins);
    catalog.insert("del", sequence::del);
    catalog.insert("cut", sequence::cut);

    catalog.insert("map", higher_order::map);
    catalog.insert("fold", higher_order::fold);
    catalog.insert("filter", higher_order::filter);

    catalog.insert("open", host::open);
    catalog.insert("read", host::read);
    catalog.insert("write", host::write);
    catalog.insert("close", host::close);
}

// Argument helpers

/// Check an exact argument count.
#[inline]
fn require_args(name: &'static str, expected: usize, args: &[Value]) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(wrong_arg_count(name, arity_text(expected), args.len()))
    }
}

fn arity_text(n: usize) -> &'static str {
    match n {
        0 => "0",
        1 => "1",
        2 => "2",
        3 => "3",
        _ => "several",
    }
}

#[inline]
fn require_number(op: &'static str, value: &Value) -> EvalResult<Number> {
    value
        .as_number()
        .ok_or_else(|| type_mismatch(op, "number", value.type_name()))
}

#[inline]
fn require_int(op: &'static str, value: &Value) -> EvalResult<i64> {
    match value {
        Value::Number(n) => n
            .as_int()
            .ok_or_else(|| type_mismatch(op, "integer", "float")),
        other => Err(type_mismatch(op, "integer", other.type_name())),
    }
}

#[inline]
fn require_str<'a>(op: &'static str, value: &'a Value) -> EvalResult<&'a str> {
    match value {
        Value::Str(s) => Ok(s),
        other => Err(type_mismatch(op, "string", other.type_name())),
    }
}

/// Python-style slice bound: negatives count from the end, then clamp.
fn clamp_index(index: i64, len: usize) -> usize {
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    let resolved = if index < 0 { index.saturating_add(len_i) } else { index };
    usize::try_from(resolved.clamp(0, len_i)).unwrap_or(len)
}
