//! Binding forms and map literals.

use li_ir::Bindings;

use crate::errors::{reserved_word, EvalResult};
use crate::{Env, Interpreter, Value};

impl Interpreter {
    /// Bind each `key: value` into `env`, in order, returning the last value.
    ///
    /// Every key is checked against the reserved words before anything is
    /// bound. With several keys the values are evaluated in a snapshot of
    /// `env` taken first, so siblings cannot see each other's new values;
    /// functions created against that snapshot are then re-pointed at `env`
    /// and see all their siblings.
    pub(crate) fn eval_bindings(&mut self, bindings: &Bindings, env: &Env) -> EvalResult {
        if let Some(key) = bindings.keys().find(|key| self.is_reserved(key)) {
            return Err(reserved_word(key));
        }
        let scope = if bindings.len() > 1 {
            env.snapshot()
        } else {
            env.clone()
        };

        let mut last = Value::Null;
        let mut functions = Vec::new();
        for (key, form) in bindings.iter() {
            let value = self.eval(form, &scope)?;
            env.assign(key, value.clone());
            if let Value::Function(function) = &value {
                functions.push(function.clone());
            }
            last = value;
        }

        if !scope.ptr_eq(env) {
            for function in functions {
                if function.defining_env().ptr_eq(&scope) {
                    function.repoint(env.clone());
                }
            }
        }
        Ok(last)
    }

    /// Build a map scope over `env`.
    ///
    /// Entries are evaluated in a snapshot of `env`; functions defined by the
    /// literal itself are re-pointed at the map so they resolve sibling
    /// entries, and writes to those entries update the map.
    pub(super) fn eval_map(&mut self, entries: &Bindings, env: &Env) -> EvalResult {
        let scope = env.snapshot();
        let map = Env::child(env);
        for (key, form) in entries.iter() {
            let value = self.eval(form, &scope)?;
            if let Value::Function(function) = &value {
                if function.defining_env().ptr_eq(&scope) {
                    function.repoint(map.clone());
                }
            }
            map.set_own(key, value);
        }
        Ok(Value::Map(map))
    }
}
