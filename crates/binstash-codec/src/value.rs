//! Dynamic tagged value representation
//!
//! [`Value`] is the enum-based stand-in for "any composite object" when a
//! blob has no static type: nested maps, sequences, sets, and primitives all
//! serialize through the same tagged encoding as any other serde type.
//!
//! Equality is value equality, not encoding equality: `Set` and `Map`
//! compare order-insensitively, because unordered collections have no
//! canonical element order.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    /// Unordered collection; element order is an encoding artifact.
    Set(Vec<Value>),
    /// Key/value pairs; pair order is an encoding artifact.
    Map(Vec<(Value, Value)>),
}

impl Value {
    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::List(items.into_iter().collect())
    }

    pub fn set(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Set(items.into_iter().collect())
    }

    pub fn map(pairs: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Value::Map(pairs.into_iter().collect())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::*;
        match (self, other) {
            (Null, Null) => true,
            (Bool(a), Bool(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (Float(a), Float(b)) => a == b,
            (Str(a), Str(b)) => a == b,
            (Bytes(a), Bytes(b)) => a == b,
            (List(a), List(b)) => a == b,
            // quadratic scans are fine at the sizes dynamic values reach
            (Set(a), Set(b)) => a.len() == b.len() && a.iter().all(|x| b.contains(x)),
            (Map(a), Map(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(k, v)| b.iter().any(|(bk, bv)| k == bk && v == bv))
            }
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_compare_by_value() {
        assert_eq!(Value::Int(7), Value::Int(7));
        assert_ne!(Value::Int(7), Value::Int(8));
        assert_ne!(Value::Int(7), Value::Float(7.0));
        assert_eq!(Value::from("abc"), Value::Str("abc".to_string()));
    }

    #[test]
    fn set_equality_ignores_order() {
        let a = Value::set([Value::Int(1), Value::Int(2), Value::Int(3)]);
        let b = Value::set([Value::Int(3), Value::Int(1), Value::Int(2)]);
        assert_eq!(a, b);
        assert_ne!(a, Value::set([Value::Int(1), Value::Int(2)]));
    }

    #[test]
    fn map_equality_ignores_order() {
        let a = Value::map([
            (Value::Int(1), Value::Int(2)),
            (Value::Int(3), Value::Int(4)),
        ]);
        let b = Value::map([
            (Value::Int(3), Value::Int(4)),
            (Value::Int(1), Value::Int(2)),
        ]);
        assert_eq!(a, b);
        assert_ne!(
            a,
            Value::map([(Value::Int(1), Value::Int(2)), (Value::Int(3), Value::Int(5))])
        );
    }

    #[test]
    fn list_equality_keeps_order() {
        let a = Value::list([Value::Int(1), Value::Int(2)]);
        let b = Value::list([Value::Int(2), Value::Int(1)]);
        assert_ne!(a, b);
    }

    #[test]
    fn nested_structures_compare() {
        let build = || {
            Value::map([(
                Value::from("inner"),
                Value::list([Value::Null, Value::set([Value::from(true)])]),
            )])
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn postcard_round_trip() {
        let value = Value::map([
            (Value::from("name"), Value::from("binstash")),
            (
                Value::from("payload"),
                Value::Bytes(vec![0, 1, 2, 255]),
            ),
            (Value::from("pi"), Value::Float(3.5)),
        ]);
        let bytes = postcard::to_stdvec(&value).unwrap();
        let back: Value = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(value, back);
    }
}
