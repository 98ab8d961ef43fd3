//! Form evaluation.
//!
//! [`Interpreter::eval`] evaluates a form to a value. Internally every form
//! goes through `eval_step`, which may return a pending tail call instead
//! of a value when the form sits in tail position; `settle` runs pending
//! calls until a value comes out.

mod binding;
mod call;
mod control;
pub(crate) mod index;

use std::rc::Rc;

use li_ir::{Form, FunctionDef};
use li_stack::ensure_sufficient_stack;

use crate::errors::{reserved_word, unbound_variable, EvalResult};
use crate::{Env, FunctionValue, Interpreter, Value};

/// Outcome of evaluating a form that may be in tail position.
pub(crate) enum Step {
    Done(Value),
    /// A call deferred to the nearest trampoline. `name` labels errors
    /// raised while running it.
    TailCall {
        name: String,
        function: FunctionValue,
        args: Vec<Value>,
    },
}

impl Interpreter {
    /// Evaluate `form` in `env`.
    pub fn eval(&mut self, form: &Form, env: &Env) -> EvalResult {
        let step = self.eval_step(form, env, false)?;
        self.settle(step)
    }

    pub(crate) fn eval_step(&mut self, form: &Form, env: &Env, tail: bool) -> EvalResult<Step> {
        ensure_sufficient_stack(|| self.eval_form(form, env, tail))
    }

    fn eval_form(&mut self, form: &Form, env: &Env, tail: bool) -> EvalResult<Step> {
        let value = match form {
            Form::Null => Value::Null,
            Form::Int(v) => Value::int(*v),
            Form::Float(v) => Value::float(*v),
            Form::Str(s) => Value::string(s),
            Form::Name(name) => self.resolve(name, env)?,
            Form::List(items) => {
                let values = items
                    .iter()
                    .map(|item| self.eval(item, env))
                    .collect::<EvalResult<Vec<_>>>()?;
                Value::list(values)
            }
            Form::Map(entries) => self.eval_map(entries, env)?,
            Form::Bind(bindings) => self.eval_bindings(bindings, env)?,
            Form::Function(def) => self.make_function(def, env)?,
            Form::Call(call) => return self.eval_call(call, env, tail),
            Form::If(conditional) => return self.eval_conditional(conditional, env, tail),
            Form::Loop(repeat) => self.eval_loop(repeat, env)?,
        };
        Ok(Step::Done(value))
    }

    /// Catalog names evaluate to themselves; anything else is looked up.
    fn resolve(&self, name: &str, env: &Env) -> EvalResult {
        if self.catalog.contains(name) {
            return Ok(Value::builtin(name));
        }
        env.lookup(name).ok_or_else(|| unbound_variable(name))
    }

    fn make_function(&self, def: &Rc<FunctionDef>, env: &Env) -> EvalResult {
        if let Some(param) = def.params.iter().find(|p| self.is_reserved(p)) {
            return Err(reserved_word(param));
        }
        Ok(Value::Function(FunctionValue::new(Rc::clone(def), env.clone())))
    }
}
