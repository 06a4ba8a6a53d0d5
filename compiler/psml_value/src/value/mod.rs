//! Runtime values produced by compiled PolySubML code.
//!
//! # Heap Enforcement
//!
//! Heap-backed variants hold `Heap<T>` (or `ObjectRef`), whose constructors
//! are private to this module. Build values through the factory methods:
//!
//! ```text
//! let s = Value::string("hello");                       // OK
//! let pair = Value::tuple(vec![Value::int(1), Value::float(2.0)]);
//! let some = Value::variant("Some", Value::int(42));
//! let s = Value::Str(Heap::new(...));                   // ERROR: Heap::new is private
//! ```
//!
//! # Structured Values
//!
//! The compiler lowers records, tuples and sum-type cases to one kind of
//! runtime object; only field naming tells them apart (see `crate::encoding`).
//! `Value::Object` therefore stays open-ended and consumers classify objects
//! by inspecting their fields.

mod composite;
mod heap;
mod object;

use std::fmt;

use num_bigint::BigInt;

pub use composite::{FunctionValue, NativeFn, Symbol};
pub use heap::Heap;
pub use object::{Object, ObjectId, ObjectRef};

use crate::encoding::{tuple_field, PAYLOAD_FIELD, TAG_FIELD};
use crate::errors::{not_callable, type_mismatch, EvalResult};

/// Runtime value.
#[derive(Clone, Default)]
pub enum Value {
    // Primitives
    /// Boolean value.
    Bool(bool),
    /// Arbitrary-precision integer.
    Int(Heap<BigInt>),
    /// Floating-point number.
    Float(f64),
    /// Text.
    Str(Heap<String>),
    /// Callable; opaque to the printer.
    Function(FunctionValue),
    /// Language-level symbol; opaque to the printer.
    Symbol(Symbol),
    /// Absence of a value.
    Null,
    /// Absence of a binding.
    #[default]
    Undefined,

    // Composite
    /// Structured value (record, tuple or tagged variant).
    Object(ObjectRef),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    /// Create an integer value.
    #[inline]
    pub fn int(n: impl Into<BigInt>) -> Self {
        Value::Int(Heap::new(n.into()))
    }

    /// Create a float value.
    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Wrap an object in a fresh shared handle.
    #[inline]
    pub fn object(object: Object) -> Self {
        Value::Object(ObjectRef::new(object))
    }

    /// Create a record from `(name, value)` pairs, in order.
    pub fn record<K: Into<String>>(fields: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::object(Object::from_fields(fields))
    }

    /// Create a tuple, encoded as fields `_0.._{n-1}`.
    pub fn tuple(items: Vec<Value>) -> Self {
        Value::record(
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| (tuple_field(i), item)),
        )
    }

    /// Create a tagged variant (sum-type case).
    pub fn variant(tag: impl Into<String>, payload: Value) -> Self {
        Value::record([
            (TAG_FIELD, Value::string(tag)),
            (PAYLOAD_FIELD, payload),
        ])
    }

    /// Create a function value from a native closure.
    pub fn function(body: impl Fn(Value) -> EvalResult + Send + Sync + 'static) -> Self {
        Value::Function(FunctionValue::new(body))
    }

    /// Create a fresh, unique symbol.
    pub fn symbol(description: &str) -> Self {
        Value::Symbol(Symbol::new(description))
    }
}

// Accessors

impl Value {
    /// Get the boolean, if this is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the integer, if this is one.
    pub fn as_int(&self) -> Option<&BigInt> {
        match self {
            Value::Int(n) => Some(&**n),
            _ => None,
        }
    }

    /// Get the float, if this is one.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the text, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get the object handle, if this is structured.
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Whether this value can take part in a value graph (has identity and
    /// children). Everything else is a leaf.
    pub fn is_composite(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Short name of the value's kind, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Function(_) => "function",
            Value::Symbol(_) => "symbol",
            Value::Null => "null",
            Value::Undefined => "undefined",
            Value::Object(_) => "object",
        }
    }
}

// Operations used by compiled code

impl Value {
    /// Call this value with one argument.
    pub fn call(&self, arg: Value) -> EvalResult {
        match self {
            Value::Function(f) => f.call(arg),
            other => Err(not_callable(other)),
        }
    }

    /// Read a field; a missing field reads as `Undefined`.
    pub fn field(&self, name: &str) -> EvalResult {
        match self {
            Value::Object(o) => Ok(o.get(name).unwrap_or_default()),
            other => Err(type_mismatch("object", other)),
        }
    }

    /// Write a field, returning the previous value (`Undefined` if new).
    pub fn set_field(&self, name: &str, value: Value) -> EvalResult {
        match self {
            Value::Object(o) => Ok(o.set(name, value).unwrap_or_default()),
            other => Err(type_mismatch("object", other)),
        }
    }
}

// JSON import

impl Value {
    /// Convert a JSON document into a runtime value.
    ///
    /// Integral numbers become `Int`, other numbers `Float`. Objects keep
    /// their key order. Arrays become tuples (fields `_0.._{n-1}`).
    pub fn from_json(json: &serde_json::Value) -> Value {
        use serde_json::Value as Json;

        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(*b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::int(u)
                } else {
                    Value::float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(s) => Value::string(s.as_str()),
            Json::Array(items) => Value::tuple(items.iter().map(Value::from_json).collect()),
            Json::Object(map) => {
                Value::record(map.iter().map(|(k, v)| (k.as_str(), Value::from_json(v))))
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

// Trait Implementations

/// Strict equality: primitives by value, functions, symbols and objects by
/// identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => FunctionValue::ptr_eq(a, b),
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Null, Value::Null) | (Value::Undefined, Value::Undefined) => true,
            (Value::Object(a), Value::Object(b)) => ObjectRef::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({})", &**n),
            Value::Float(x) => write!(f, "Float({x:?})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Function(func) => write!(f, "Function({func:?})"),
            Value::Symbol(sym) => write!(f, "{sym:?}"),
            Value::Null => write!(f, "Null"),
            Value::Undefined => write!(f, "Undefined"),
            Value::Object(o) => write!(f, "{o:?}"),
        }
    }
}
