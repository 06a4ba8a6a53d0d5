//! The host side of a compiled program: `print` and result display.
//!
//! Compiled `loop` bodies do not go through the runtime; they call
//! [`crate::run_loop_value`] directly.

use psml_print::{format, print_line};
use psml_value::{EvalResult, RuntimeError, Value};

use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Runtime services handed to compiled code.
pub struct Runtime {
    print_handler: SharedPrintHandler,
}

impl Runtime {
    /// Runtime printing to stdout.
    pub fn new() -> Self {
        RuntimeBuilder::new().build()
    }

    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// The `print` statement: strings verbatim, other values formatted,
    /// space separated, one line.
    pub fn print(&self, args: &[Value]) -> Value {
        self.print_handler.write(&print_line(args));
        Value::Undefined
    }

    /// Display a program's final value the way the batch driver does.
    ///
    /// `Undefined` and blank output are skipped. Otherwise the formatted
    /// value is written as a line and returned.
    pub fn show_result(&self, value: &Value) -> Option<String> {
        if value.is_undefined() {
            return None;
        }
        let text = format(value);
        if text.trim().is_empty() {
            return None;
        }
        self.print_handler.write(&text);
        self.print_handler.write("\n");
        Some(text)
    }

    /// Run a compiled program and display its result.
    ///
    /// A fault is logged and returned unchanged; nothing is displayed for it.
    pub fn execute(&self, program: impl FnOnce(&Runtime) -> EvalResult) -> EvalResult {
        match program(self) {
            Ok(result) => {
                self.show_result(&result);
                Ok(result)
            }
            Err(err) => {
                tracing::error!(%err, "program failed");
                Err(err)
            }
        }
    }

    /// The line a host reports for a fault.
    pub fn error_line(err: &RuntimeError) -> String {
        format!("Runtime error: {err}")
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new()
    }
}

/// Builder for [`Runtime`].
#[derive(Default)]
pub struct RuntimeBuilder {
    print_handler: Option<SharedPrintHandler>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        RuntimeBuilder::default()
    }

    /// Set where `print` output goes. Defaults to stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    pub fn build(self) -> Runtime {
        Runtime {
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap to panic on unexpected state")]
mod tests;
