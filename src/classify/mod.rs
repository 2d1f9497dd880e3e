//! Type-relative emptiness classification.
//!
//! Emptiness is decided per category rather than by a single truthiness
//! check: whitespace-only text is empty, `[0]` is not, and a mapping with a
//! key is not empty even when that key holds an absent value. The rules, in
//! precedence order:
//!
//! | Category | Empty when |
//! |---|---|
//! | absent | always |
//! | text | nothing is left after trimming whitespace |
//! | integer, float | the value equals zero (`-0.0` included, NaN excluded) |
//! | big integer | the value equals zero |
//! | boolean | `false` |
//! | sequence | it has no elements; elements are never inspected |
//! | mapping | no key is present |
//! | symbolic, callable, other | never |
//!
//! Classification is total and has no observable side effects; a `trace`
//! event is emitted on the `emptiness::classify` target when enabled.

pub mod category;
pub mod native;

use num_bigint::Sign;
use tracing::trace;

pub use category::Category;

use crate::value::Value;

const CLASSIFY_TARGET: &str = "emptiness::classify";

/// Anything that can be classified as empty or non-empty.
pub trait Emptiness {
    /// Category whose rule decides this value.
    fn category(&self) -> Category;

    /// Apply the category's rule.
    fn is_empty_value(&self) -> bool;
}

/// Returns true when `value` is empty for its category.
pub fn is_empty<T: Emptiness + ?Sized>(value: &T) -> bool {
    let empty = value.is_empty_value();
    trace!(
        target: CLASSIFY_TARGET,
        category = %value.category(),
        empty,
        "Classified value"
    );
    empty
}

/// Negation of [`is_empty`].
pub fn is_not_empty<T: Emptiness + ?Sized>(value: &T) -> bool {
    !is_empty(value)
}

/// Text is blank when trimming leaves nothing.
///
/// The trimmed set is ECMAScript `WhiteSpace` plus `LineTerminator`: Unicode
/// `White_Space` without NEL (U+0085), plus the byte-order mark.
pub(crate) fn is_blank(text: &str) -> bool {
    text.chars().all(is_trimmable)
}

pub(crate) fn is_trimmable(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

impl Value {
    pub fn category(&self) -> Category {
        match self {
            Value::Undefined | Value::Null => Category::Absent,
            Value::Text(_) => Category::Text,
            Value::Integer(_) => Category::Integer,
            Value::Float(_) => Category::Float,
            Value::BigInt(_) => Category::BigInteger,
            Value::Bool(_) => Category::Boolean,
            Value::Sequence(_) => Category::Sequence,
            Value::Mapping(_) | Value::Object(_) => Category::Mapping,
            Value::Symbol(_) => Category::Symbolic,
            Value::Callable(_) => Category::Callable,
            Value::Other(_) => Category::Other,
        }
    }

    /// Shortcut for [`is_empty`].
    pub fn is_empty(&self) -> bool {
        is_empty(self)
    }
}

impl Emptiness for Value {
    fn category(&self) -> Category {
        Value::category(self)
    }

    fn is_empty_value(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => true,
            Value::Text(text) => is_blank(text),
            Value::Integer(number) => *number == 0,
            Value::Float(number) => *number == 0.0,
            Value::BigInt(number) => number.sign() == Sign::NoSign,
            Value::Bool(flag) => !flag,
            Value::Sequence(items) => items.is_empty(),
            Value::Mapping(entries) => entries.keys().next().is_none(),
            Value::Object(object) => !object.has_any_key(),
            Value::Symbol(_) | Value::Callable(_) | Value::Other(_) => false,
        }
    }
}
