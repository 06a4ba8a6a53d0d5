//! Runtime fault types.
//!
//! A `RuntimeError` is raised by compiled user code or by a native builtin.
//! The printer never produces one, and the loop trampoline passes them
//! through untouched.

use crate::value::Value;

/// Result of evaluating compiled code.
pub type EvalResult = Result<Value, RuntimeError>;

/// A fault raised while running compiled code.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// User code failed explicitly (e.g. a `panic` or failed assertion).
    #[error("{message}")]
    Thrown { message: String },

    /// A non-function value was called.
    #[error("{type_name} is not a function")]
    NotCallable { type_name: &'static str },

    /// A value of the wrong kind reached an operation.
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
}

/// User code failed with `message`.
#[cold]
pub fn thrown(message: impl Into<String>) -> RuntimeError {
    RuntimeError::Thrown {
        message: message.into(),
    }
}

/// `value` was called but is not a function.
#[cold]
pub fn not_callable(value: &Value) -> RuntimeError {
    RuntimeError::NotCallable {
        type_name: value.type_name(),
    }
}

/// An operation expected `expected` but was handed `got`.
#[cold]
pub fn type_mismatch(expected: &'static str, got: &Value) -> RuntimeError {
    RuntimeError::TypeMismatch {
        expected,
        got: got.type_name(),
    }
}
