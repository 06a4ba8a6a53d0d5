//! PSML Value - Runtime value model for compiled PolySubML programs.
//!
//! This crate provides:
//! - Runtime value types (`Value`, `Heap`, `ObjectRef`, `FunctionValue`, `Symbol`)
//! - The wire encoding shared with the compiler (`encoding`)
//! - Runtime fault types (`RuntimeError`, `EvalResult`)
//!
//! # Value Graphs
//!
//! Structured values are shared, mutable objects with ordered fields. Compiled
//! code may alias them and build cycles (`x.next = x`), so consumers that walk
//! a value graph must track identity through `ObjectRef::id`.
//!
//! All heap allocations go through `Value::` factory methods; `Heap<T>` has a
//! private constructor to enforce this.

pub mod encoding;
mod errors;
mod value;

pub use errors::{not_callable, thrown, type_mismatch, EvalResult, RuntimeError};
pub use value::{FunctionValue, Heap, NativeFn, Object, ObjectId, ObjectRef, Symbol, Value};

// Re-export so hosts can build integer values without naming the crate directly.
pub use num_bigint::BigInt;
