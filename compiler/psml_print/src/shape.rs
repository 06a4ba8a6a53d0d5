//! Shape classification for runtime values.
//!
//! The compiler emits one kind of object for records, tuples and variants,
//! so the printer decides how to render each object by inspecting its field
//! names once, up front.

use psml_value::encoding::tuple_index;
use psml_value::{Object, Value};

/// How the printer renders one visit.
#[derive(Debug)]
pub enum Shape<'v> {
    /// Leaf value, printed as a literal.
    Primitive(&'v Value),
    /// Sum-type case: tag followed by its payload.
    Tagged { tag: String, payload: Value },
    /// Positional fields in index order.
    Tuple(Vec<Value>),
    /// Named fields in insertion order.
    Record(Object),
    /// Object already visited during this print.
    Cyclic,
    /// Output budget spent before this object.
    BudgetExceeded,
}

/// Classify an object snapshot. Tag detection beats tuple detection, which
/// beats the record fallback.
pub fn classify_object(object: Object) -> Shape<'static> {
    if let Some(tag) = object.variant_tag() {
        return Shape::Tagged {
            tag: tag.to_string(),
            payload: object.variant_payload(),
        };
    }
    match tuple_items(&object) {
        Some(items) => Shape::Tuple(items),
        None => Shape::Record(object),
    }
}

/// Fields of a tuple-like object, ordered by index.
///
/// Field names are unique, so `n` names that all parse to indices below `n`
/// cover `_0.._{n-1}` exactly.
fn tuple_items(object: &Object) -> Option<Vec<Value>> {
    let len = object.len();
    if len < 2 {
        return None;
    }
    let mut slots: Vec<Option<Value>> = vec![None; len];
    for (name, value) in object.iter() {
        let index = tuple_index(name).filter(|&i| i < len)?;
        slots[index] = Some(value.clone());
    }
    slots.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(fields: &[(&str, Value)]) -> Object {
        Object::from_fields(fields.iter().cloned())
    }

    #[test]
    fn tag_field_makes_a_variant() {
        let shape = classify_object(object(&[
            ("$tag", Value::string("Some")),
            ("$val", Value::int(1)),
        ]));
        match shape {
            Shape::Tagged { tag, payload } => {
                assert_eq!(tag, "Some");
                assert_eq!(payload, Value::int(1));
            }
            other => panic!("expected Tagged, got {other:?}"),
        }
    }

    #[test]
    fn tag_beats_positional_fields() {
        let shape = classify_object(object(&[
            ("_0", Value::int(1)),
            ("_1", Value::int(2)),
            ("$tag", Value::string("T")),
        ]));
        assert!(matches!(shape, Shape::Tagged { .. }));
    }

    #[test]
    fn empty_tag_is_not_a_variant() {
        let shape = classify_object(object(&[("$tag", Value::string(""))]));
        assert!(matches!(shape, Shape::Record(_)));
    }

    #[test]
    fn positional_fields_are_reordered_by_index() {
        let shape = classify_object(object(&[
            ("_1", Value::string("b")),
            ("_0", Value::string("a")),
            ("_2", Value::string("c")),
        ]));
        match shape {
            Shape::Tuple(items) => assert_eq!(
                items,
                vec![Value::string("a"), Value::string("b"), Value::string("c")]
            ),
            other => panic!("expected Tuple, got {other:?}"),
        }
    }

    #[test]
    fn single_positional_field_is_a_record() {
        let shape = classify_object(object(&[("_0", Value::int(1))]));
        assert!(matches!(shape, Shape::Record(_)));
    }

    #[test]
    fn gap_in_positions_is_a_record() {
        let shape = classify_object(object(&[("_0", Value::int(1)), ("_2", Value::int(2))]));
        assert!(matches!(shape, Shape::Record(_)));
    }

    #[test]
    fn extra_named_field_is_a_record() {
        let shape = classify_object(object(&[
            ("_0", Value::int(1)),
            ("_1", Value::int(2)),
            ("x", Value::int(3)),
        ]));
        assert!(matches!(shape, Shape::Record(_)));
    }

    #[test]
    fn empty_object_is_a_record() {
        assert!(matches!(classify_object(Object::new()), Shape::Record(_)));
    }
}
