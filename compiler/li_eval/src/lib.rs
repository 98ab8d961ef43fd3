//! Tree-walking evaluator for Li.
//!
//! Evaluation walks [`li_ir::Form`]s directly against chained [`Env`]
//! scopes. Calls in tail position are returned as pending steps and run by
//! a trampoline, so self and mutual tail recursion use constant native
//! stack. Everything else recurses through
//! [`li_stack::ensure_sufficient_stack`].
//!
//! Primitives live in a [`Catalog`] owned by the [`Interpreter`]; hosts add
//! more through [`Extension`]s which scripts pull in with `(import "name")`.

mod builtins;
mod catalog;
mod environment;
pub mod errors;
mod exec;
mod extension;
mod function_val;
mod input;
mod interpreter;
mod number;
mod print_handler;
mod value;

pub use catalog::{Catalog, Primitive};
pub use environment::{Env, LocalScope};
pub use errors::{EvalError, EvalResult};
pub use extension::{Extension, ExtensionRegistry, TimeExtension};
pub use function_val::FunctionValue;
pub use input::InputSource;
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use number::Number;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use value::Value;

#[cfg(test)]
mod tests;
