//! Environments: chained, shared name-to-value scopes.
//!
//! Every scope lives behind a [`LocalScope`] handle, so closures, maps and
//! call overlays that hold the same scope observe each other's writes.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::Value;

/// A single-threaded shared cell.
///
/// Wraps `Rc<RefCell<T>>` so every shared allocation in the evaluator goes
/// through one factory. Not thread-safe; Li evaluation is single-threaded.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Identity comparison.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Address of the shared allocation, for cycle detection.
    #[inline]
    pub fn addr(&self) -> *const () {
        Rc::as_ptr(&self.0).cast()
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// One scope: insertion-ordered bindings plus an optional parent.
#[derive(Clone, Default)]
pub struct Scope {
    index: FxHashMap<String, usize>,
    slots: Vec<(String, Value)>,
    parent: Option<Env>,
}

impl Scope {
    fn get(&self, name: &str) -> Option<&Value> {
        self.index.get(name).map(|&i| &self.slots[i].1)
    }

    fn set(&mut self, name: &str, value: Value) {
        if let Some(&i) = self.index.get(name) {
            self.slots[i].1 = value;
        } else {
            self.index.insert(name.to_string(), self.slots.len());
            self.slots.push((name.to_string(), value));
        }
    }

    fn remove(&mut self, name: &str) -> Option<Value> {
        let i = self.index.remove(name)?;
        let (_, value) = self.slots.remove(i);
        for slot in self.index.values_mut() {
            if *slot > i {
                *slot -= 1;
            }
        }
        Some(value)
    }
}

/// Handle to a shared [`Scope`].
///
/// Cloning the handle aliases the scope; [`Env::snapshot`] copies it.
#[derive(Clone, Default)]
pub struct Env(LocalScope<Scope>);

impl Env {
    /// A scope with no parent.
    pub fn root() -> Self {
        Env::default()
    }

    /// An empty scope layered over `parent`.
    pub fn child(parent: &Env) -> Self {
        Env(LocalScope::new(Scope {
            parent: Some(parent.clone()),
            ..Scope::default()
        }))
    }

    /// A copy of this scope's own bindings, sharing the same parent.
    ///
    /// Values inside are still shared; only the name table is copied.
    pub fn snapshot(&self) -> Self {
        Env(LocalScope::new(self.0.borrow().clone()))
    }

    pub fn parent(&self) -> Option<Env> {
        self.0.borrow().parent.clone()
    }

    /// Resolve `name` through the scope chain.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        let mut scope = self.clone();
        loop {
            let next = {
                let frame = scope.0.borrow();
                if let Some(value) = frame.get(name) {
                    return Some(value.clone());
                }
                frame.parent.clone()?
            };
            scope = next;
        }
    }

    /// Nearest scope in the chain that binds `name`.
    fn holder(&self, name: &str) -> Option<Env> {
        let mut scope = self.clone();
        loop {
            let next = {
                let frame = scope.0.borrow();
                if frame.get(name).is_some() {
                    break;
                }
                frame.parent.clone()?
            };
            scope = next;
        }
        Some(scope)
    }

    /// Write `name` following the chain rule.
    ///
    /// A name bound in this scope, or bound nowhere, is written here. A name
    /// bound only in an enclosing scope is updated in that scope.
    pub fn assign(&self, name: &str, value: Value) {
        let target = self.holder(name).unwrap_or_else(|| self.clone());
        target.0.borrow_mut().set(name, value);
    }

    pub fn get_own(&self, name: &str) -> Option<Value> {
        self.0.borrow().get(name).cloned()
    }

    pub fn contains_own(&self, name: &str) -> bool {
        self.0.borrow().index.contains_key(name)
    }

    pub fn set_own(&self, name: &str, value: Value) {
        self.0.borrow_mut().set(name, value);
    }

    pub fn remove_own(&self, name: &str) -> Option<Value> {
        self.0.borrow_mut().remove(name)
    }

    pub fn len(&self) -> usize {
        self.0.borrow().slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().slots.is_empty()
    }

    /// Own bindings in insertion order.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.0.borrow().slots.clone()
    }

    pub fn keys(&self) -> Vec<String> {
        self.0.borrow().slots.iter().map(|(k, _)| k.clone()).collect()
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Env) -> bool {
        self.0.ptr_eq(&other.0)
    }

    #[inline]
    pub(crate) fn addr(&self) -> *const () {
        self.0.addr()
    }
}

/// Scopes can reach themselves through closures, so only names are shown.
impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frame = self.0.borrow();
        f.debug_struct("Env")
            .field("names", &frame.slots.iter().map(|(k, _)| k).collect::<Vec<_>>())
            .field("has_parent", &frame.parent.is_some())
            .finish()
    }
}
