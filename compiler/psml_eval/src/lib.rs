//! PSML Eval - Host runtime for compiled PolySubML programs.
//!
//! Compiled code is plain native closures over `psml_value::Value`. This
//! crate supplies the pieces those closures call back into:
//!
//! - The loop trampoline (`run_loop`, `run_loop_value`, `LoopStep`), which
//!   turns a compiled `loop` into constant-stack iteration
//! - Print handlers, so `print` output can go to stdout, a buffer or nowhere
//! - `Runtime`, which binds a print handler to the `print` statement and
//!   displays a program's final result
//!
//! # Logging
//!
//! Library code only emits `tracing` events. Binaries and test harnesses opt
//! into output with [`init_tracing`] and `RUST_LOG`:
//!
//! ```text
//! RUST_LOG=psml_eval=debug      # loop iteration counts, runtime faults
//! RUST_LOG=psml_print=trace     # printer truncation decisions
//! ```

mod print_handler;
mod runtime;
mod trampoline;

use std::sync::Once;

pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler,
};
pub use runtime::{Runtime, RuntimeBuilder};
pub use trampoline::{run_loop, run_loop_value, LoopStep};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`, logging to stderr so
/// program output on stdout stays clean.
///
/// Does nothing when `RUST_LOG` is unset or unparsable, or when the host has
/// already installed a global subscriber. Safe to call from every test.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init();
        if installed.is_err() {
            tracing::debug!("global subscriber already set; keeping it");
        }
    });
}
