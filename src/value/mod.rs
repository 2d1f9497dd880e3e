//! Dynamic value model with one variant per classification category.

pub mod callable;
pub mod json;
pub mod object;
pub mod opaque;
pub mod symbol;

use indexmap::IndexMap;
use num_bigint::BigInt;

pub use callable::{Callable, CallableFn};
pub use object::KeyedObject;
pub use opaque::Opaque;
pub use symbol::Symbol;

use std::sync::Arc;

/// A dynamically typed value.
///
/// Containers own their elements. Host objects, callables and opaque payloads
/// are reference counted, so cloning a `Value` never deep-copies them.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// No value at all (undefined-equivalent).
    #[default]
    Undefined,
    /// Explicit absence (null-equivalent).
    Null,
    Text(String),
    Integer(i64),
    Float(f64),
    /// Arbitrary-precision integer.
    BigInt(BigInt),
    Bool(bool),
    /// Ordered, indexable container.
    Sequence(Vec<Value>),
    /// Conventional keyed mapping; insertion order is preserved.
    Mapping(IndexMap<String, Value>),
    /// Mapping-like host object whose keys are produced on demand.
    Object(Arc<dyn KeyedObject>),
    Symbol(Symbol),
    Callable(Callable),
    /// Any other Rust value.
    Other(Opaque),
}

impl Value {
    /// Build a `Mapping` from key/value pairs.
    pub fn mapping<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Build a `Sequence` from anything convertible into values.
    pub fn sequence<V: Into<Value>>(items: impl IntoIterator<Item = V>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Wrap a host object.
    pub fn object(object: impl KeyedObject + 'static) -> Self {
        Value::Object(Arc::new(object))
    }

    /// Returns true for `Undefined` and `Null`.
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Mapping(entries) => Some(entries),
            _ => None,
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Undefined
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

macro_rules! from_lossless_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Integer(i64::from(value))
                }
            }
        )*
    };
}

from_lossless_int!(i8, i16, i32, i64, u8, u16, u32);

// Integers that may not fit `i64` fall back to `BigInt`.
macro_rules! from_wide_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    match i64::try_from(value) {
                        Ok(small) => Value::Integer(small),
                        Err(_) => Value::BigInt(BigInt::from(value)),
                    }
                }
            }
        )*
    };
}

from_wide_int!(i128, u64, u128, isize, usize);

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::sequence(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Value::Mapping(entries)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Value::Symbol(symbol)
    }
}

impl From<Callable> for Value {
    fn from(callable: Callable) -> Self {
        Value::Callable(callable)
    }
}

impl From<Opaque> for Value {
    fn from(opaque: Opaque) -> Self {
        Value::Other(opaque)
    }
}
