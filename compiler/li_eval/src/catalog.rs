//! The primitive registry.

use std::fmt;

use li_ir::Dialect;
use rustc_hash::FxHashMap;

use crate::{EvalResult, Interpreter, Value};

/// A native operation. Primitives receive the interpreter so higher-order
/// ones can call back into evaluation.
pub type Primitive = fn(&mut Interpreter, &[Value]) -> EvalResult;

/// Names mapped to primitives.
///
/// [`Catalog::standard`] seeds the built-ins; [`Catalog::extend`] merges
/// another catalog over this one.
#[derive(Clone, Default)]
pub struct Catalog {
    entries: FxHashMap<String, Primitive>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// The built-in primitives under their canonical names.
    pub fn standard() -> Self {
        let mut catalog = Catalog::new();
        crate::builtins::register(&mut catalog);
        catalog
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, primitive: Primitive) -> Self {
        self.insert(name, primitive);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, primitive: Primitive) {
        self.entries.insert(name.into(), primitive);
    }

    /// Merge `other` in. Entries of `other` win on collision.
    pub fn extend(&mut self, other: Catalog) {
        self.entries.extend(other.entries);
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<Primitive> {
        self.entries.get(name).copied()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Sorted names.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rename canonical entries to their surface spelling in `dialect`.
    #[must_use]
    pub fn localized(self, dialect: &Dialect) -> Catalog {
        let entries = self
            .entries
            .into_iter()
            .map(|(name, primitive)| (dialect.surface_name(&name).to_string(), primitive))
            .collect();
        Catalog { entries }
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;

    use super::*;

    fn one(_: &mut Interpreter, _: &[Value]) -> EvalResult {
        Ok(Value::int(1))
    }

    fn two(_: &mut Interpreter, _: &[Value]) -> EvalResult {
        Ok(Value::int(2))
    }

    #[test]
    fn standard_catalog_has_the_core_primitives() {
        let catalog = Catalog::standard();
        for name in [
            "+", "-", "*", "/", "=", "!", "<", ">", "<=", ">=", "print", "println", "len", "ins",
            "del", "cut", "map", "fold", "filter", "assert", "round", "type", "import", "input",
            "open", "read", "write", "close",
        ] {
            assert!(catalog.contains(name), "missing {name}");
        }
    }

    #[test]
    fn extend_overrides_on_collision() {
        let mut base = Catalog::new().with("f", one).with("g", one);
        base.extend(Catalog::new().with("f", two));
        let mut interp = Interpreter::builder().build();
        assert_eq!(base.get("f").unwrap()(&mut interp, &[]).unwrap(), Value::int(2));
        assert_eq!(base.get("g").unwrap()(&mut interp, &[]).unwrap(), Value::int(1));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn names_are_sorted() {
        let catalog = Catalog::new().with("b", one).with("a", one).with("c", one);
        assert_eq!(catalog.names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn localized_renames_aliased_entries_only() {
        let catalog = Catalog::standard().localized(&Dialect::french());
        assert!(catalog.contains("affiche"));
        assert!(catalog.contains("taille"));
        assert!(!catalog.contains("print"));
        assert!(catalog.contains("+"));
        assert_eq!(catalog.len(), Catalog::standard().len());
    }
}
