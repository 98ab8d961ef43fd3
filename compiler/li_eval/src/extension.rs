//! Host extensions: named catalogs that scripts merge in with `import`.

use std::fmt;
use std::time::Duration;

use crate::errors::{host_error, type_mismatch, wrong_arg_count};
use crate::{Catalog, EvalResult, Interpreter, Value};

/// A named bundle of primitives.
///
/// Entries use canonical names; importing localizes them through the active
/// dialect.
pub trait Extension {
    fn name(&self) -> &str;

    fn catalog(&self) -> Catalog;
}

/// Extensions available to `import`, looked up by name.
#[derive(Default)]
pub struct ExtensionRegistry {
    extensions: Vec<Box<dyn Extension>>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        ExtensionRegistry::default()
    }

    /// Add `extension`, replacing one already registered under its name.
    pub fn register(&mut self, extension: Box<dyn Extension>) {
        self.extensions.retain(|e| e.name() != extension.name());
        self.extensions.push(extension);
    }

    pub fn find(&self, name: &str) -> Option<&dyn Extension> {
        self.extensions
            .iter()
            .find(|e| e.name() == name)
            .map(|e| &**e)
    }

    pub fn names(&self) -> Vec<&str> {
        self.extensions.iter().map(|e| e.name()).collect()
    }
}

impl fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// `time`: provides `wait(seconds)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeExtension;

impl Extension for TimeExtension {
    fn name(&self) -> &str {
        "time"
    }

    fn catalog(&self) -> Catalog {
        Catalog::new().with("wait", wait)
    }
}

fn wait(_: &mut Interpreter, args: &[Value]) -> EvalResult {
    let [Value::Number(seconds)] = args else {
        return match args {
            [other] => Err(type_mismatch("wait", "number", other.type_name())),
            _ => Err(wrong_arg_count("wait", "1", args.len())),
        };
    };
    let duration = Duration::try_from_secs_f64(seconds.as_f64()).map_err(|e| host_error("wait", e))?;
    std::thread::sleep(duration);
    Ok(Value::Null)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct Named(&'static str);

    impl Extension for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn catalog(&self) -> Catalog {
            Catalog::new()
        }
    }

    #[test]
    fn register_replaces_same_name() {
        let mut registry = ExtensionRegistry::new();
        registry.register(Box::new(Named("a")));
        registry.register(Box::new(Named("b")));
        registry.register(Box::new(Named("a")));
        assert_eq!(registry.names(), vec!["b", "a"]);
        assert!(registry.find("a").is_some());
        assert!(registry.find("c").is_none());
    }

    #[test]
    fn time_extension_provides_wait() {
        let catalog = TimeExtension.catalog();
        assert!(catalog.contains("wait"));
        let mut interp = Interpreter::builder().build();
        assert_eq!(wait(&mut interp, &[Value::float(0.0)]), Ok(Value::Null));
        assert!(matches!(
            wait(&mut interp, &[Value::int(-1)]),
            Err(crate::EvalError::Host { op: "wait", .. })
        ));
        assert!(matches!(
            wait(&mut interp, &[]),
            Err(crate::EvalError::ArityMismatch { .. })
        ));
    }
}
