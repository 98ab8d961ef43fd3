//! Evaluation errors and their constructors.
//!
//! Errors are plain values propagated with `?`. Each call site that
//! dispatches a call wraps failures with [`EvalError::in_call`], so a
//! reported error reads as the chain of calls that led to it:
//!
//! ```text
//! main: countdown: +: type mismatch in +: expected number, found string
//! ```

/// Result of evaluating a form.
pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// Malformed program structure found at run time, such as calling a
    /// value that is not callable.
    #[error("{0}")]
    Syntax(String),

    #[error("unbound variable: {0}")]
    UnboundVariable(String),

    #[error("{0} is a reserved word")]
    ReservedWord(String),

    /// An error raised while evaluating or dispatching the call `name`.
    #[error("{name}: {cause}")]
    FunctionCall { name: String, cause: Box<EvalError> },

    #[error("type mismatch in {op}: expected {expected}, found {found}")]
    TypeMismatch {
        op: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in {0}")]
    IntegerOverflow(&'static str),

    #[error("index {index} out of range for length {len}")]
    IndexOutOfBounds { index: i64, len: usize },

    #[error("key not found: {0}")]
    KeyNotFound(String),

    #[error("{name} expects {expected} argument(s), got {got}")]
    ArityMismatch {
        name: &'static str,
        expected: &'static str,
        got: usize,
    },

    /// Failure reported by the host, such as a file operation.
    #[error("{op}: {message}")]
    Host { op: &'static str, message: String },

    #[error("unknown extension: {0}")]
    UnknownExtension(String),
}

impl EvalError {
    /// Wrap this error as raised by the call `name`.
    #[cold]
    #[must_use]
    pub fn in_call(self, name: impl Into<String>) -> EvalError {
        EvalError::FunctionCall {
            name: name.into(),
            cause: Box::new(self),
        }
    }

    /// The innermost error beneath all call wrappers.
    pub fn root_cause(&self) -> &EvalError {
        let mut err = self;
        while let EvalError::FunctionCall { cause, .. } = err {
            err = cause.as_ref();
        }
        err
    }

    /// Call names from outermost to innermost.
    pub fn call_chain(&self) -> Vec<&str> {
        let mut chain = Vec::new();
        let mut err = self;
        while let EvalError::FunctionCall { name, cause } = err {
            chain.push(name.as_str());
            err = cause.as_ref();
        }
        chain
    }
}

// Structure errors

#[cold]
pub fn not_callable(found: &'static str) -> EvalError {
    EvalError::Syntax(format!("not callable: {found}"))
}

#[cold]
pub fn unbound_variable(name: &str) -> EvalError {
    EvalError::UnboundVariable(name.to_string())
}

#[cold]
pub fn reserved_word(name: &str) -> EvalError {
    EvalError::ReservedWord(name.to_string())
}

// Primitive faults

#[cold]
pub fn type_mismatch(op: &'static str, expected: &'static str, found: &'static str) -> EvalError {
    EvalError::TypeMismatch {
        op,
        expected,
        found,
    }
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::DivisionByZero
}

#[cold]
pub fn integer_overflow(op: &'static str) -> EvalError {
    EvalError::IntegerOverflow(op)
}

#[cold]
pub fn index_out_of_bounds(index: i64, len: usize) -> EvalError {
    EvalError::IndexOutOfBounds { index, len }
}

#[cold]
pub fn key_not_found(key: &str) -> EvalError {
    EvalError::KeyNotFound(key.to_string())
}

#[cold]
pub fn wrong_arg_count(name: &'static str, expected: &'static str, got: usize) -> EvalError {
    EvalError::ArityMismatch {
        name,
        expected,
        got,
    }
}

#[cold]
pub fn host_error(op: &'static str, message: impl ToString) -> EvalError {
    EvalError::Host {
        op,
        message: message.to_string(),
    }
}

#[cold]
pub fn unknown_extension(name: &str) -> EvalError {
    EvalError::UnknownExtension(name.to_string())
}
