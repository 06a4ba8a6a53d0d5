//! PSML Print - Structural printer for PolySubML runtime values.
//!
//! Renders any runtime value graph to a short, human-readable string. The
//! printer is total: it never fails and never mutates its input.
//!
//! # Shapes
//!
//! Objects are classified by their fields, first match wins:
//!
//! | Shape | Rule | Output |
//! |---|---|---|
//! | tagged variant | `$tag` holds a non-empty string | `Some 42`, `Pair(1.0, 2.0)` |
//! | tuple | fields are exactly `_0.._{n-1}`, n >= 2 | `(1, "a")` |
//! | record | anything else | `{x=1; y=2}` |
//!
//! A record that happens to use `_0`, `_1` naming prints as a tuple, and a
//! value with both a tag and positional fields prints as a variant. Golden
//! outputs depend on this, so it is fixed behaviour.
//!
//! # Bounds
//!
//! Each top-level call gets fresh visitation state. A composite that was
//! already visited in the same call prints as `...`, which stops cycles and
//! also elides shared substructure. Once more than [`PRINT_BUDGET`]
//! characters have been written, remaining composites and aggregate fields
//! print as `...` too.

mod literal;
mod printer;
mod shape;

pub use literal::{format_float, quote_string};
pub use printer::{format, print_line, Printer, ELLIPSIS, PRINT_BUDGET};
pub use shape::{classify_object, Shape};
