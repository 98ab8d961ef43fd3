//! Call forms, head dispatch and the tail-call trampoline.

use li_ir::CallForm;
use tracing::trace;

use super::Step;
use crate::errors::{not_callable, unbound_variable, EvalResult};
use crate::{Env, FunctionValue, Interpreter, Value};

impl Interpreter {
    /// Evaluate the head and arguments, then dispatch.
    ///
    /// In tail position a function head is not entered; the call is handed
    /// back as [`Step::TailCall`]. Errors are wrapped with the call's label.
    pub(super) fn eval_call(&mut self, call: &CallForm, env: &Env, tail: bool) -> EvalResult<Step> {
        let (head, args) = self
            .eval_operands(call, env)
            .map_err(|e| e.in_call(call.label()))?;
        match head {
            Value::Function(function) if tail => Ok(Step::TailCall {
                name: call.label(),
                function,
                args,
            }),
            head => self
                .apply(&head, args)
                .map(Step::Done)
                .map_err(|e| e.in_call(call.label())),
        }
    }

    fn eval_operands(&mut self, call: &CallForm, env: &Env) -> EvalResult<(Value, Vec<Value>)> {
        let head = self.eval(&call.head, env)?;
        let args = call
            .args
            .iter()
            .map(|arg| self.eval(arg, env))
            .collect::<EvalResult<Vec<_>>>()?;
        Ok((head, args))
    }

    /// Call `callee` with already evaluated arguments.
    ///
    /// This is how primitives such as `map` and `fold` call back into Li.
    pub fn call_value(&mut self, callee: &Value, args: Vec<Value>) -> EvalResult {
        self.apply(callee, args)
    }

    fn apply(&mut self, head: &Value, args: Vec<Value>) -> EvalResult {
        match head {
            Value::Builtin(name) => {
                let primitive = self
                    .catalog
                    .get(name)
                    .ok_or_else(|| unbound_variable(name))?;
                primitive(self, &args)
            }
            Value::Function(function) => self.call_function(function, args),
            Value::List(_) | Value::Map(_) | Value::Str(_) => super::index::access(head, &args),
            Value::Null | Value::Number(_) => Err(not_callable(head.type_name())),
        }
    }

    /// Enter `function` and run any tail calls it hands back.
    pub(crate) fn call_function(&mut self, function: &FunctionValue, args: Vec<Value>) -> EvalResult {
        let step = self.invoke(function, args)?;
        self.settle(step)
    }

    /// The trampoline.
    pub(super) fn settle(&mut self, mut step: Step) -> EvalResult {
        loop {
            match step {
                Step::Done(value) => return Ok(value),
                Step::TailCall {
                    name,
                    function,
                    args,
                } => {
                    trace!(%name, "tail call");
                    step = self.invoke(&function, args).map_err(|e| e.in_call(name))?;
                }
            }
        }
    }

    /// Bind parameters into a fresh overlay on the defining scope and run the
    /// body with its last statement in tail position.
    ///
    /// Missing arguments leave their parameters unbound; extra arguments are
    /// ignored.
    #[tracing::instrument(level = "debug", skip_all, fields(arity = args.len()))]
    fn invoke(&mut self, function: &FunctionValue, args: Vec<Value>) -> EvalResult<Step> {
        let overlay = Env::child(&function.defining_env());
        for (param, arg) in function.params().iter().zip(args) {
            overlay.set_own(param, arg);
        }
        let def = function.def();
        self.exec_block(&def.body, &overlay, true)
    }
}
