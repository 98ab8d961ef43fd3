//! Runtime values.
//!
//! Scalars are immutable and cheap to clone. Lists and maps are shared
//! handles: every binding that holds the same list sees its mutations.
//! A map is a scope in its own right, whose parent is the scope the literal
//! was built in, so functions stored in a map resolve sibling entries first.

use std::cmp::Ordering;
use std::fmt::{self, Write as _};
use std::rc::Rc;

use crate::{Env, FunctionValue, LocalScope, Number};

#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Number(Number),
    Str(Rc<str>),
    List(LocalScope<Vec<Value>>),
    Map(Env),
    Function(FunctionValue),
    /// A catalog entry referred to by name.
    Builtin(Rc<str>),
}

impl Value {
    #[inline]
    pub fn int(v: i64) -> Self {
        Value::Number(Number::Int(v))
    }

    #[inline]
    pub fn float(v: f64) -> Self {
        Value::Number(Number::Float(v))
    }

    #[inline]
    pub fn bool(v: bool) -> Self {
        Value::Number(Number::Bool(v))
    }

    pub fn string(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(LocalScope::new(items))
    }

    pub fn builtin(name: &str) -> Self {
        Value::Builtin(Rc::from(name))
    }

    /// Tag name reported by the `type` primitive.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Function(_) => "function",
            Value::Builtin(_) => "builtin",
        }
    }

    /// `null`, zero and empty containers are false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Number(n) => !n.is_zero(),
            Value::Str(s) => !s.is_empty(),
            Value::List(items) => !items.borrow().is_empty(),
            Value::Map(entries) => !entries.is_empty(),
            Value::Function(_) | Value::Builtin(_) => true,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Ordering for the comparison primitives: numbers numerically, strings
    /// and lists lexicographically. Anything else is unordered.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.compare(*b),
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            (Value::List(a), Value::List(b)) => {
                let (a, b) = (a.borrow(), b.borrow());
                for (x, y) in a.iter().zip(b.iter()) {
                    match x.compare(y)? {
                        Ordering::Equal => {}
                        unequal => return Some(unequal),
                    }
                }
                Some(a.len().cmp(&b.len()))
            }
            _ => None,
        }
    }

    fn write_to(&self, out: &mut impl fmt::Write, nested: bool, seen: &mut Vec<*const ()>) -> fmt::Result {
        match self {
            Value::Null => out.write_str("null"),
            Value::Number(n) => write!(out, "{n}"),
            Value::Str(s) if nested => write!(out, "{:?}", &**s),
            Value::Str(s) => out.write_str(s),
            Value::List(items) => {
                if seen.contains(&items.addr()) {
                    return out.write_str("[...]");
                }
                seen.push(items.addr());
                out.write_char('[')?;
                for (i, item) in items.borrow().iter().enumerate() {
                    if i > 0 {
                        out.write_str(", ")?;
                    }
                    item.write_to(out, true, seen)?;
                }
                seen.pop();
                out.write_char(']')
            }
            Value::Map(map) => {
                if seen.contains(&map.addr()) {
                    return out.write_str("{...}");
                }
                seen.push(map.addr());
                out.write_char('{')?;
                for (i, (key, value)) in map.entries().iter().enumerate() {
                    if i > 0 {
                        out.write_str(", ")?;
                    }
                    write!(out, "{key}: ")?;
                    value.write_to(out, true, seen)?;
                }
                seen.pop();
                out.write_char('}')
            }
            Value::Function(func) => write!(out, "{func}"),
            Value::Builtin(name) => write!(out, "<builtin {name}>"),
        }
    }

    /// Nested rendering: strings are quoted.
    pub fn repr(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut out, true, &mut Vec::new());
        out
    }
}

/// Loose equality: numbers compare across representations, containers
/// compare by contents, functions by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a.ptr_eq(b) || *a.borrow() == *b.borrow(),
            (Value::Map(a), Value::Map(b)) => {
                a.ptr_eq(b)
                    || (a.len() == b.len()
                        && a
                            .entries()
                            .iter()
                            .all(|(k, v)| b.get_own(k).is_some_and(|w| w == *v)))
            }
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            _ => false,
        }
    }
}

/// Top-level rendering, as `print` shows it: strings appear raw.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, false, &mut Vec::new())
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}
