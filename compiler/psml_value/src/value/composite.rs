//! Opaque values: functions and symbols.
//!
//! Neither exposes its contents to the printer; both compare by identity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::Value;
use crate::errors::EvalResult;

// FunctionValue

/// Native body of a function value. PolySubML functions take exactly one
/// argument; multiple parameters arrive as a tuple-encoded object.
pub type NativeFn = dyn Fn(Value) -> EvalResult + Send + Sync;

/// Callable value.
#[derive(Clone)]
pub struct FunctionValue {
    body: Arc<NativeFn>,
}

impl FunctionValue {
    pub(super) fn new(body: impl Fn(Value) -> EvalResult + Send + Sync + 'static) -> Self {
        FunctionValue {
            body: Arc::new(body),
        }
    }

    /// Invoke the function. Faults propagate unchanged.
    pub fn call(&self, arg: Value) -> EvalResult {
        (self.body)(arg)
    }

    /// Whether both values refer to the same closure.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.body, &b.body)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function>")
    }
}

// Symbol

static NEXT_SYMBOL: AtomicU64 = AtomicU64::new(0);

/// Unique opaque handle. Two symbols are equal only if one was cloned from
/// the other; the description is for debugging.
#[derive(Clone)]
pub struct Symbol {
    id: u64,
    description: Arc<str>,
}

impl Symbol {
    pub(super) fn new(description: &str) -> Self {
        Symbol {
            id: NEXT_SYMBOL.fetch_add(1, Ordering::Relaxed),
            description: Arc::from(description),
        }
    }

    /// Debug description given at creation.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?}#{})", self.description, self.id)
    }
}
