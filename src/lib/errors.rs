use thiserror::Error;

use crate::classify::Category;

/// Errors raised while exporting a [`crate::Value`] to JSON.
///
/// `path` is a JSON-pointer-like location of the offending element
/// (`""` for the root, `/items/0` for nested elements).
#[derive(Debug, Error, PartialEq)]
pub enum ValueError {
    /// The value's category has no JSON representation.
    #[error("{category} value at `{path}` has no JSON representation")]
    Unrepresentable { category: Category, path: String },
    /// NaN and infinities cannot be written as JSON numbers.
    #[error("non-finite float {value} at `{path}` cannot be written as JSON")]
    NonFiniteFloat { value: f64, path: String },
    /// Big integer outside the `i64`/`u64` range.
    #[error("big integer {value} at `{path}` does not fit a JSON integer")]
    BigIntOutOfRange { value: String, path: String },
    /// A host object listed a key its `get` could not resolve.
    #[error("host object key at `{path}` is listed but has no value")]
    UnresolvedKey { path: String },
    /// A host object produced more keys than export will read.
    #[error("host object at `{path}` has more than {limit} keys")]
    KeyLimitExceeded { limit: usize, path: String },
    /// Containers nested deeper than export will follow.
    #[error("value at `{path}` is nested deeper than {limit} levels")]
    DepthLimitExceeded { limit: usize, path: String },
}

impl ValueError {
    /// Location of the value that failed to export.
    pub fn path(&self) -> &str {
        match self {
            ValueError::Unrepresentable { path, .. }
            | ValueError::NonFiniteFloat { path, .. }
            | ValueError::BigIntOutOfRange { path, .. }
            | ValueError::UnresolvedKey { path }
            | ValueError::KeyLimitExceeded { path, .. }
            | ValueError::DepthLimitExceeded { path, .. } => path,
        }
    }
}
