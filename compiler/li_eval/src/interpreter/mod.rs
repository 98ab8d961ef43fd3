//! The interpreter: catalog, dialect and host state around the evaluator.
//!
//! # Architecture
//!
//! Evaluation itself lives in `crate::exec`, as `impl Interpreter` blocks:
//!
//! - `exec::mod` - form dispatch, names, literals, the stack guard
//! - `exec::call` - call forms, dispatch on the evaluated head, the trampoline
//! - `exec::control` - conditionals, loops, statement blocks
//! - `exec::binding` - binding forms and map literals
//! - `exec::index` - reads and writes through list, map and string heads
//!
//! The interpreter owns everything primitives may touch: the catalog (which
//! `import` extends), the print handler, the input source and the host file
//! table. Scopes are not owned here; every evaluation receives its [`Env`].

mod builder;

pub use builder::InterpreterBuilder;

use li_ir::{Dialect, Program};

use crate::builtins::HostFiles;
use crate::errors::{not_callable, unbound_variable, EvalResult};
use crate::{Catalog, Env, ExtensionRegistry, InputSource, SharedPrintHandler, Value};

pub struct Interpreter {
    pub(crate) catalog: Catalog,
    pub(crate) dialect: Dialect,
    pub(crate) extensions: ExtensionRegistry,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) input: InputSource,
    pub(crate) files: HostFiles,
}

impl Interpreter {
    /// Interpreter with the english dialect, stdout output and stdin input.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn extensions(&self) -> &ExtensionRegistry {
        &self.extensions
    }

    /// Whether user code may not bind `name`: catalog entries and the
    /// dialect's structural keywords. Grows when `import` extends the
    /// catalog.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.catalog.contains(name) || self.dialect.is_structural(name)
    }

    /// Bind every top-level entry of `program` into `globals`.
    pub fn load_program(&mut self, program: &Program, globals: &Env) -> EvalResult {
        self.eval_bindings(program, globals)
    }

    /// Load `program` into a fresh global scope and call its `main`.
    ///
    /// Returns the value `main` returns. Errors raised while running `main`
    /// are wrapped with the name `main`.
    #[tracing::instrument(level = "debug", skip_all, fields(bindings = program.len()))]
    pub fn run_program(&mut self, program: &Program) -> EvalResult {
        let globals = Env::root();
        self.load_program(program, &globals)?;
        let main = globals
            .get_own("main")
            .ok_or_else(|| unbound_variable("main"))?;
        match &main {
            Value::Function(function) => self
                .call_function(function, Vec::new())
                .map_err(|e| e.in_call("main")),
            other => Err(not_callable(other.type_name())),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}
