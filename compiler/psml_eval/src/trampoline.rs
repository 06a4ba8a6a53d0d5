//! Loop trampoline.
//!
//! The compiler lowers `loop <body>` to a zero-argument step closure. Each
//! call runs the body once and reports whether to go around again or to
//! finish with a value. Driving the step from a plain `loop` keeps the native
//! stack flat however many iterations a program runs.

use std::ops::ControlFlow;

use psml_value::encoding::{BREAK_TAG, CONTINUE_TAG, PAYLOAD_FIELD};
use psml_value::Value;

/// Outcome of one loop body evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum LoopStep {
    /// Run the body again.
    Continue,
    /// Leave the loop with this result.
    Break(Value),
}

impl LoopStep {
    /// Decode the object a compiled loop body returns.
    ///
    /// Only an object tagged `Continue` continues. Every other value ends
    /// the loop with its `$val` field, or `Undefined` when there is none
    /// (including for non-objects).
    pub fn from_value(value: &Value) -> LoopStep {
        let Value::Object(object) = value else {
            return LoopStep::Break(Value::Undefined);
        };
        let object = object.read();
        if object.variant_tag() == Some(CONTINUE_TAG) {
            LoopStep::Continue
        } else {
            LoopStep::Break(object.get(PAYLOAD_FIELD).cloned().unwrap_or_default())
        }
    }

    /// Encode as the object a compiled loop body would return.
    pub fn into_value(self) -> Value {
        match self {
            LoopStep::Continue => Value::variant(CONTINUE_TAG, Value::Null),
            LoopStep::Break(result) => Value::variant(BREAK_TAG, result),
        }
    }

    /// The driver's transition: keep going, or stop with a result.
    #[inline]
    pub fn transition(self) -> ControlFlow<Value> {
        match self {
            LoopStep::Continue => ControlFlow::Continue(()),
            LoopStep::Break(result) => ControlFlow::Break(result),
        }
    }
}

/// Run `step` until it breaks, returning the break value.
///
/// Errors from `step` end the loop and propagate unchanged. A step that
/// never breaks runs forever.
pub fn run_loop<E>(mut step: impl FnMut() -> Result<LoopStep, E>) -> Result<Value, E> {
    let mut iterations: u64 = 0;
    loop {
        iterations += 1;
        if let ControlFlow::Break(result) = step()?.transition() {
            tracing::debug!(iterations, "loop finished");
            return Ok(result);
        }
    }
}

/// Run a step that returns encoded loop objects (see [`LoopStep::from_value`]).
pub fn run_loop_value<E>(mut step: impl FnMut() -> Result<Value, E>) -> Result<Value, E> {
    run_loop(|| step().map(|value| LoopStep::from_value(&value)))
}
