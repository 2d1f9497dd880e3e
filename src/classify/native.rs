//! [`Emptiness`] for native Rust types.
//!
//! Each impl follows the rule of the category the type maps to, so a native
//! value and its [`crate::Value`] conversion always agree.

use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap, VecDeque},
    rc::Rc,
    sync::Arc,
};

use indexmap::IndexMap;
use num_bigint::{BigInt, BigUint, Sign};
use serde_json::{Map, Value as JsonValue};

use super::{is_blank, is_trimmable, Category, Emptiness};
use crate::value::{Callable, Opaque, Symbol};

impl Emptiness for () {
    fn category(&self) -> Category {
        Category::Absent
    }

    fn is_empty_value(&self) -> bool {
        true
    }
}

impl<T: Emptiness> Emptiness for Option<T> {
    fn category(&self) -> Category {
        self.as_ref().map_or(Category::Absent, T::category)
    }

    fn is_empty_value(&self) -> bool {
        match self {
            Some(value) => value.is_empty_value(),
            None => true,
        }
    }
}

impl Emptiness for str {
    fn category(&self) -> Category {
        Category::Text
    }

    fn is_empty_value(&self) -> bool {
        is_blank(self)
    }
}

impl Emptiness for String {
    fn category(&self) -> Category {
        Category::Text
    }

    fn is_empty_value(&self) -> bool {
        is_blank(self)
    }
}

impl Emptiness for Cow<'_, str> {
    fn category(&self) -> Category {
        Category::Text
    }

    fn is_empty_value(&self) -> bool {
        is_blank(self)
    }
}

impl Emptiness for char {
    fn category(&self) -> Category {
        Category::Text
    }

    fn is_empty_value(&self) -> bool {
        is_trimmable(*self)
    }
}

impl Emptiness for bool {
    fn category(&self) -> Category {
        Category::Boolean
    }

    fn is_empty_value(&self) -> bool {
        !*self
    }
}

macro_rules! integer_emptiness {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Emptiness for $ty {
                fn category(&self) -> Category {
                    Category::Integer
                }

                fn is_empty_value(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

integer_emptiness!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Emptiness for f32 {
    fn category(&self) -> Category {
        Category::Float
    }

    fn is_empty_value(&self) -> bool {
        *self == 0.0
    }
}

impl Emptiness for f64 {
    fn category(&self) -> Category {
        Category::Float
    }

    fn is_empty_value(&self) -> bool {
        *self == 0.0
    }
}

impl Emptiness for BigInt {
    fn category(&self) -> Category {
        Category::BigInteger
    }

    fn is_empty_value(&self) -> bool {
        self.sign() == Sign::NoSign
    }
}

impl Emptiness for BigUint {
    fn category(&self) -> Category {
        Category::BigInteger
    }

    fn is_empty_value(&self) -> bool {
        self.bits() == 0
    }
}

// Sequences: length only, elements are never classified.

impl<T> Emptiness for [T] {
    fn category(&self) -> Category {
        Category::Sequence
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, const N: usize> Emptiness for [T; N] {
    fn category(&self) -> Category {
        Category::Sequence
    }

    fn is_empty_value(&self) -> bool {
        N == 0
    }
}

impl<T> Emptiness for Vec<T> {
    fn category(&self) -> Category {
        Category::Sequence
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for VecDeque<T> {
    fn category(&self) -> Category {
        Category::Sequence
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

// Mappings: a key is present or it is not, whatever it maps to.

impl<K, V, S> Emptiness for HashMap<K, V, S> {
    fn category(&self) -> Category {
        Category::Mapping
    }

    fn is_empty_value(&self) -> bool {
        self.keys().next().is_none()
    }
}

impl<K, V> Emptiness for BTreeMap<K, V> {
    fn category(&self) -> Category {
        Category::Mapping
    }

    fn is_empty_value(&self) -> bool {
        self.keys().next().is_none()
    }
}

impl<K, V, S> Emptiness for IndexMap<K, V, S> {
    fn category(&self) -> Category {
        Category::Mapping
    }

    fn is_empty_value(&self) -> bool {
        self.keys().next().is_none()
    }
}

impl Emptiness for Map<String, JsonValue> {
    fn category(&self) -> Category {
        Category::Mapping
    }

    fn is_empty_value(&self) -> bool {
        self.keys().next().is_none()
    }
}

impl Emptiness for JsonValue {
    fn category(&self) -> Category {
        match self {
            JsonValue::Null => Category::Absent,
            JsonValue::Bool(_) => Category::Boolean,
            JsonValue::Number(number) if number.is_i64() => Category::Integer,
            JsonValue::Number(number) if number.is_u64() => Category::BigInteger,
            JsonValue::Number(_) => Category::Float,
            JsonValue::String(_) => Category::Text,
            JsonValue::Array(_) => Category::Sequence,
            JsonValue::Object(_) => Category::Mapping,
        }
    }

    fn is_empty_value(&self) -> bool {
        match self {
            JsonValue::Null => true,
            JsonValue::Bool(flag) => !flag,
            JsonValue::Number(number) => {
                number.as_i64() == Some(0) || number.as_f64() == Some(0.0)
            }
            JsonValue::String(text) => is_blank(text),
            JsonValue::Array(items) => items.is_empty(),
            JsonValue::Object(entries) => entries.is_empty_value(),
        }
    }
}

impl Emptiness for Symbol {
    fn category(&self) -> Category {
        Category::Symbolic
    }

    fn is_empty_value(&self) -> bool {
        false
    }
}

impl Emptiness for Callable {
    fn category(&self) -> Category {
        Category::Callable
    }

    fn is_empty_value(&self) -> bool {
        false
    }
}

impl Emptiness for Opaque {
    fn category(&self) -> Category {
        Category::Other
    }

    fn is_empty_value(&self) -> bool {
        false
    }
}

macro_rules! delegate_emptiness {
    ($($wrapper:ident),* $(,)?) => {
        $(
            impl<T: Emptiness + ?Sized> Emptiness for $wrapper<T> {
                fn category(&self) -> Category {
                    (**self).category()
                }

                fn is_empty_value(&self) -> bool {
                    (**self).is_empty_value()
                }
            }
        )*
    };
}

delegate_emptiness!(Box, Rc, Arc);

impl<T: Emptiness + ?Sized> Emptiness for &T {
    fn category(&self) -> Category {
        (**self).category()
    }

    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<T: Emptiness + ?Sized> Emptiness for &mut T {
    fn category(&self) -> Category {
        (**self).category()
    }

    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}
