//! Structured values: ordered field maps behind a shared, identity-bearing handle.

use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use super::Value;
use crate::encoding::{PAYLOAD_FIELD, TAG_FIELD};

// Object

/// Field map of a structured value.
///
/// Fields iterate in insertion order. Overwriting an existing field keeps its
/// original position.
#[derive(Clone, Debug, Default)]
pub struct Object {
    fields: Vec<(String, Value)>,
}

impl Object {
    /// Create an object with no fields.
    pub fn new() -> Self {
        Object::default()
    }

    /// Create an object from `(name, value)` pairs; a repeated name keeps its
    /// first position and its last value.
    pub fn from_fields<K: Into<String>>(fields: impl IntoIterator<Item = (K, Value)>) -> Self {
        let mut object = Object::new();
        for (name, value) in fields {
            object.set(name, value);
        }
        object
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Set a field, returning the previous value if it existed.
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        let name = name.into();
        if let Some(slot) = self.fields.iter_mut().find(|(field, _)| *field == name) {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        self.fields.push((name, value));
        None
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the object has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Iterate over field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// The discriminant of a tagged variant.
    ///
    /// Only a non-empty string in the tag field counts; anything else means
    /// the object is not a variant.
    pub fn variant_tag(&self) -> Option<&str> {
        match self.get(TAG_FIELD) {
            Some(Value::Str(tag)) if !tag.is_empty() => Some(tag.as_str()),
            _ => None,
        }
    }

    /// The payload of a tagged variant, `Undefined` when the field is absent.
    pub fn variant_payload(&self) -> Value {
        self.get(PAYLOAD_FIELD).cloned().unwrap_or_default()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Object::from_fields(iter)
    }
}

// ObjectRef

/// Stable identity of an object allocation, valid while the object is alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(usize);

/// Shared handle to a mutable [`Object`].
///
/// Cloning the handle aliases the object; equality of handles is identity.
#[derive(Clone)]
pub struct ObjectRef(Arc<RwLock<Object>>);

impl ObjectRef {
    pub(super) fn new(object: Object) -> Self {
        ObjectRef(Arc::new(RwLock::new(object)))
    }

    /// Identity of the underlying allocation.
    #[inline]
    pub fn id(&self) -> ObjectId {
        ObjectId(Arc::as_ptr(&self.0).cast::<()>() as usize)
    }

    /// Whether both handles refer to the same object.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Read a field.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.0.read().get(name).cloned()
    }

    /// Write a field, returning the previous value if it existed.
    pub fn set(&self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.0.write().set(name, value)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    /// Check if the object has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }

    /// Copy of the current field map.
    ///
    /// Graph walkers take a snapshot instead of holding the lock, so the
    /// object may be revisited (or mutated) while its children are visited.
    pub fn snapshot(&self) -> Object {
        self.0.read().clone()
    }

    /// Borrow the field map for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, Object> {
        self.0.read()
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        ObjectRef::ptr_eq(self, other)
    }
}

impl Eq for ObjectRef {}

// Never recurses into fields: the object graph may be cyclic.
impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let object = self.0.read();
        write!(f, "Object#{:x}[", self.id().0)?;
        for (i, name) in object.keys().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}")?;
        }
        write!(f, "]")
    }
}
