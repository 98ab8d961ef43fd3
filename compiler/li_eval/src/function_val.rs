//! Function values.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use li_ir::{Form, FunctionDef};

use crate::Env;

struct FunctionInner {
    def: Rc<FunctionDef>,
    /// Scope the body resolves free names in. Re-pointed when the function
    /// is bound next to siblings it should see.
    defining: RefCell<Env>,
}

/// A user function: shared definition plus its defining scope.
///
/// Clones share identity, so re-pointing one handle re-points all of them.
#[derive(Clone)]
pub struct FunctionValue(Rc<FunctionInner>);

impl FunctionValue {
    pub fn new(def: Rc<FunctionDef>, defining: Env) -> Self {
        FunctionValue(Rc::new(FunctionInner {
            def,
            defining: RefCell::new(defining),
        }))
    }

    pub fn params(&self) -> &[String] {
        &self.0.def.params
    }

    pub fn body(&self) -> &[Form] {
        &self.0.def.body
    }

    /// Shared definition, so the caller can walk the body while holding no
    /// borrow of the function.
    pub fn def(&self) -> Rc<FunctionDef> {
        Rc::clone(&self.0.def)
    }

    pub fn defining_env(&self) -> Env {
        self.0.defining.borrow().clone()
    }

    pub fn repoint(&self, env: Env) {
        *self.0.defining.borrow_mut() = env;
    }

    #[inline]
    pub fn ptr_eq(&self, other: &FunctionValue) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function({})>", self.params().join(", "))
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("params", &self.params())
            .field("body_len", &self.body().len())
            .finish()
    }
}
