//! Property-based tests for the loop trampoline.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use proptest::prelude::*;
use psml_eval::{init_tracing, run_loop, run_loop_value, LoopStep};
use psml_value::{thrown, RuntimeError, Value};

proptest! {
    #[test]
    fn breaks_after_k_continues(k in 0usize..2000, result in any::<i64>()) {
        init_tracing();
        let mut calls = 0;
        let value: Result<Value, RuntimeError> = run_loop(|| {
            calls += 1;
            Ok(if calls > k { LoopStep::Break(Value::int(result)) } else { LoopStep::Continue })
        });
        prop_assert_eq!(value.unwrap(), Value::int(result));
        prop_assert_eq!(calls, k + 1);
    }

    #[test]
    fn encoded_steps_drive_the_same_loop(k in 0usize..200, tag in "[A-Z][a-z]{0,8}") {
        // Any tag other than `Continue` ends the loop.
        prop_assume!(tag != "Continue");
        let mut calls = 0;
        let value: Result<Value, RuntimeError> = run_loop_value(|| {
            calls += 1;
            Ok(if calls > k {
                Value::variant(tag.as_str(), Value::int(1))
            } else {
                LoopStep::Continue.into_value()
            })
        });
        prop_assert_eq!(value.unwrap(), Value::int(1));
        prop_assert_eq!(calls, k + 1);
    }

    #[test]
    fn first_error_wins(fail_at in 1usize..500) {
        let mut calls = 0;
        let value = run_loop(|| {
            calls += 1;
            if calls == fail_at {
                Err(thrown(format!("failed at {calls}")))
            } else {
                Ok(LoopStep::Continue)
            }
        });
        prop_assert_eq!(value, Err(thrown(format!("failed at {fail_at}"))));
        prop_assert_eq!(calls, fail_at);
    }
}
