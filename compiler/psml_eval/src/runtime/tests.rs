use super::*;
use crate::print_handler::{buffer_handler, silent_handler};
use crate::trampoline::{run_loop_value, LoopStep};
use pretty_assertions::assert_eq;
use psml_value::thrown;

fn buffered() -> Runtime {
    Runtime::builder().print_handler(buffer_handler()).build()
}

fn output(runtime: &Runtime) -> String {
    runtime.print_handler().output()
}

#[test]
fn print_writes_one_line() {
    let runtime = buffered();
    let result = runtime.print(&[
        Value::string("x ="),
        Value::variant("Some", Value::int(3)),
    ]);
    assert!(result.is_undefined());
    assert_eq!(output(&runtime), "x = Some 3\n");
}

#[test]
fn print_calls_accumulate() {
    let runtime = buffered();
    runtime.print(&[Value::int(1)]);
    runtime.print(&[]);
    runtime.print(&[Value::string("done")]);
    assert_eq!(output(&runtime), "1\n\ndone\n");
}

#[test]
fn tuple_argument_prints_as_one_value() {
    let runtime = buffered();
    let pair = Value::tuple(vec![Value::int(1), Value::int(2)]);
    runtime.print(&[pair.clone()]);
    runtime.print(&[Value::string("pair:"), pair]);
    assert_eq!(output(&runtime), "(1, 2)\npair: (1, 2)\n");
}

#[test]
fn show_result_skips_undefined() {
    let runtime = buffered();
    assert_eq!(runtime.show_result(&Value::Undefined), None);
    assert_eq!(output(&runtime), "");
}

#[test]
fn show_result_shows_null_and_empty_values() {
    let runtime = buffered();
    assert_eq!(runtime.show_result(&Value::Null).as_deref(), Some("null"));
    assert_eq!(runtime.show_result(&Value::string("")).as_deref(), Some(r#""""#));
    assert_eq!(output(&runtime), "null\n\"\"\n");
}

#[test]
fn show_result_writes_formatted_line() {
    let runtime = buffered();
    let shown = runtime.show_result(&Value::variant("Ok", Value::float(1.0)));
    assert_eq!(shown.as_deref(), Some("Ok 1.0"));
    assert_eq!(output(&runtime), "Ok 1.0\n");
}

#[test]
fn execute_prints_output_then_result() {
    let runtime = buffered();
    let result = runtime.execute(|rt| {
        rt.print(&[Value::string("hello")]);
        Ok(Value::int(42))
    });
    assert_eq!(result.unwrap(), Value::int(42));
    assert_eq!(output(&runtime), "hello\n42\n");
}

#[test]
fn execute_with_undefined_result_shows_nothing() {
    let runtime = buffered();
    runtime
        .execute(|rt| Ok(rt.print(&[Value::string("only output")])))
        .unwrap();
    assert_eq!(output(&runtime), "only output\n");
}

#[test]
fn execute_returns_faults_unchanged() {
    let runtime = buffered();
    let result = runtime.execute(|rt| {
        rt.print(&[Value::string("before")]);
        Err(thrown("assertion failed"))
    });
    let err = result.unwrap_err();
    assert_eq!(err, thrown("assertion failed"));
    assert_eq!(Runtime::error_line(&err), "Runtime error: assertion failed");
    assert_eq!(output(&runtime), "before\n");
}

#[test]
fn execute_runs_loops() {
    let runtime = buffered();
    let mut countdown = 3;
    let result = runtime.execute(|rt| {
        run_loop_value(|| {
            rt.print(&[Value::int(countdown)]);
            countdown -= 1;
            let step = if countdown == 0 {
                LoopStep::Break(Value::string("liftoff"))
            } else {
                LoopStep::Continue
            };
            Ok(step.into_value())
        })
    });
    assert_eq!(result.unwrap(), Value::string("liftoff"));
    assert_eq!(output(&runtime), "3\n2\n1\n\"liftoff\"\n");
}

#[test]
fn silent_runtime_still_returns_results() {
    let runtime = Runtime::builder().print_handler(silent_handler()).build();
    let result = runtime.execute(|rt| {
        rt.print(&[Value::int(1)]);
        Ok(Value::int(2))
    });
    assert_eq!(result.unwrap(), Value::int(2));
    assert_eq!(output(&runtime), "");
}
