use std::fmt;

use serde::Serialize;

/// Semantic category a value belongs to when it is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Absent,
    Text,
    Integer,
    Float,
    BigInteger,
    Boolean,
    Sequence,
    Mapping,
    Symbolic,
    Callable,
    Other,
}

impl Category {
    /// Every category, in rule precedence order.
    pub const ALL: [Category; 11] = [
        Category::Absent,
        Category::Text,
        Category::Integer,
        Category::Float,
        Category::BigInteger,
        Category::Boolean,
        Category::Sequence,
        Category::Mapping,
        Category::Symbolic,
        Category::Callable,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Absent => "absent",
            Category::Text => "text",
            Category::Integer => "integer",
            Category::Float => "float",
            Category::BigInteger => "big_integer",
            Category::Boolean => "boolean",
            Category::Sequence => "sequence",
            Category::Mapping => "mapping",
            Category::Symbolic => "symbolic",
            Category::Callable => "callable",
            Category::Other => "other",
        }
    }

    /// True for categories whose values are never empty.
    pub fn is_always_non_empty(&self) -> bool {
        matches!(
            self,
            Category::Symbolic | Category::Callable | Category::Other
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
