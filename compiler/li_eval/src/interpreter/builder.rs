//! `InterpreterBuilder` for configuring an [`Interpreter`].

use li_ir::Dialect;

use super::Interpreter;
use crate::builtins::HostFiles;
use crate::{
    stdout_handler, Catalog, Extension, ExtensionRegistry, InputSource, SharedPrintHandler,
    TimeExtension,
};

/// Builder for [`Interpreter`].
///
/// Defaults: english dialect, stdout printing, stdin input, and the `time`
/// extension available to `import`.
pub struct InterpreterBuilder {
    dialect: Dialect,
    print_handler: Option<SharedPrintHandler>,
    input: InputSource,
    extensions: ExtensionRegistry,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        let mut extensions = ExtensionRegistry::new();
        extensions.register(Box::new(TimeExtension));
        Self {
            dialect: Dialect::english(),
            print_handler: None,
            input: InputSource::Stdin,
            extensions,
        }
    }

    /// Dialect for catalog names and reserved keywords. Must match the
    /// dialect the program was parsed with.
    #[must_use]
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    #[must_use]
    pub fn input(mut self, input: InputSource) -> Self {
        self.input = input;
        self
    }

    /// Make `extension` available to `import`.
    #[must_use]
    pub fn extension(mut self, extension: impl Extension + 'static) -> Self {
        self.extensions.register(Box::new(extension));
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            catalog: Catalog::standard().localized(&self.dialect),
            dialect: self.dialect,
            extensions: self.extensions,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            input: self.input,
            files: HostFiles::new(),
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        InterpreterBuilder::new()
    }
}
