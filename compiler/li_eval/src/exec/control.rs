//! Statement blocks, conditionals and loops.

use li_ir::{Conditional, Form, LoopForm};

use super::Step;
use crate::errors::EvalResult;
use crate::{Env, Interpreter, Value};

impl Interpreter {
    /// Run `body` in order. Only the last statement inherits `tail`; an
    /// empty body yields `null`.
    pub(crate) fn exec_block(&mut self, body: &[Form], env: &Env, tail: bool) -> EvalResult<Step> {
        let Some((last, init)) = body.split_last() else {
            return Ok(Step::Done(Value::Null));
        };
        for statement in init {
            self.eval(statement, env)?;
        }
        self.eval_step(last, env, tail)
    }

    /// The first branch with a truthy condition runs; otherwise the `else`
    /// body if there is one, else `null`.
    pub(super) fn eval_conditional(
        &mut self,
        conditional: &Conditional,
        env: &Env,
        tail: bool,
    ) -> EvalResult<Step> {
        for branch in &conditional.branches {
            if self.eval(&branch.condition, env)?.is_truthy() {
                return self.exec_block(&branch.body, env, tail);
            }
        }
        match &conditional.otherwise {
            Some(body) => self.exec_block(body, env, tail),
            None => Ok(Step::Done(Value::Null)),
        }
    }

    /// Run the body while the condition holds, then the `else` body once.
    /// Never in tail position.
    pub(super) fn eval_loop(&mut self, repeat: &LoopForm, env: &Env) -> EvalResult {
        while self.eval(&repeat.branch.condition, env)?.is_truthy() {
            let step = self.exec_block(&repeat.branch.body, env, false)?;
            self.settle(step)?;
        }
        match &repeat.otherwise {
            Some(body) => {
                let step = self.exec_block(body, env, false)?;
                self.settle(step)
            }
            None => Ok(Value::Null),
        }
    }
}
