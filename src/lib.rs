//! Type-relative emptiness classification.
//!
//! [`is_empty`] decides whether a value is "empty" by the rules of its
//! category: absent values are empty, text is empty when blank, numbers when
//! zero, booleans when `false`, sequences when they have no elements and
//! mappings when they have no keys. Symbols, callables and anything else are
//! never empty.
//!
//! ```
//! use emptiness::{is_empty, Value};
//!
//! assert!(is_empty("   "));
//! assert!(is_empty(&Value::Null));
//! assert!(!is_empty(&vec![0]));
//! assert!(!is_empty(&Value::mapping([("a", Value::Undefined)])));
//! ```

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod classify;
pub mod value;

pub use classify::{is_empty, is_not_empty, Category, Emptiness};
pub use lib_mod::errors::ValueError;
pub use value::{Callable, KeyedObject, Opaque, Symbol, Value};
