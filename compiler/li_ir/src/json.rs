//! JSON view of parsed forms.
//!
//! The shape follows Li's historical AST encoding:
//!
//! | form                 | JSON                                   |
//! |----------------------|----------------------------------------|
//! | `null`, numbers      | the scalar itself                      |
//! | name                 | `"name"`                               |
//! | string, list, map    | `{"lit": ...}`                         |
//! | `k: v`               | `{"k": v}`                             |
//! | `def(a) {..}`        | `{"params": ["a"], "def": [..]}`       |
//! | `f(a b)`             | `["f", a, b]`                          |
//! | `if`                 | `["if", c1, [..], c2, [..], [else]]`   |
//! | `while`              | `["while", c, [..], [else]]`           |
//!
//! Keywords are always canonical, whatever dialect the source used.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::dialect::{BODY_KEY, IF_HEAD, LIT_KEY, LOOP_HEAD, PARAMS_KEY};
use crate::form::{Bindings, CallForm, Conditional, Form, FunctionDef, LoopForm};

fn lit<S: Serializer, T: Serialize + ?Sized>(s: S, value: &T) -> Result<S::Ok, S::Error> {
    let mut map = s.serialize_map(Some(1))?;
    map.serialize_entry(LIT_KEY, value)?;
    map.end()
}

impl Serialize for Form {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Form::Null => s.serialize_unit(),
            Form::Int(v) => s.serialize_i64(*v),
            Form::Float(v) => s.serialize_f64(*v),
            Form::Name(name) => s.serialize_str(name),
            Form::Str(text) => lit(s, text),
            Form::List(items) => lit(s, items),
            Form::Map(bindings) => lit(s, bindings),
            Form::Bind(bindings) => bindings.serialize(s),
            Form::Function(def) => def.serialize(s),
            Form::Call(call) => call.serialize(s),
            Form::If(cond) => cond.serialize(s),
            Form::Loop(lp) => lp.serialize(s),
        }
    }
}

impl Serialize for Bindings {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut map = s.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for FunctionDef {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut map = s.serialize_map(Some(2))?;
        map.serialize_entry(PARAMS_KEY, &self.params)?;
        map.serialize_entry(BODY_KEY, &self.body)?;
        map.end()
    }
}

impl Serialize for CallForm {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut seq = s.serialize_seq(Some(self.args.len() + 1))?;
        seq.serialize_element(&*self.head)?;
        for arg in &self.args {
            seq.serialize_element(arg)?;
        }
        seq.end()
    }
}

impl Serialize for Conditional {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let len = 1 + self.branches.len() * 2 + usize::from(self.otherwise.is_some());
        let mut seq = s.serialize_seq(Some(len))?;
        seq.serialize_element(IF_HEAD)?;
        for branch in &self.branches {
            seq.serialize_element(&branch.condition)?;
            seq.serialize_element(&branch.body)?;
        }
        if let Some(body) = &self.otherwise {
            seq.serialize_element(body)?;
        }
        seq.end()
    }
}

impl Serialize for LoopForm {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let len = 3 + usize::from(self.otherwise.is_some());
        let mut seq = s.serialize_seq(Some(len))?;
        seq.serialize_element(LOOP_HEAD)?;
        seq.serialize_element(&self.branch.condition)?;
        seq.serialize_element(&self.branch.body)?;
        if let Some(body) = &self.otherwise {
            seq.serialize_element(body)?;
        }
        seq.end()
    }
}
