//! Mapping-like host objects.

use std::{borrow::Cow, collections::BTreeMap, fmt};

use super::Value;

/// A mapping-like object whose keys are produced on demand.
///
/// Only the object's own keys are exposed; there is no inherited key chain.
pub trait KeyedObject: fmt::Debug + Send + Sync {
    /// Enumerable keys, in the order the object chooses.
    fn keys(&self) -> Box<dyn Iterator<Item = Cow<'_, str>> + '_>;

    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<Value>;

    /// Live presence test. Must agree with `keys().next().is_some()`.
    fn has_any_key(&self) -> bool {
        self.keys().next().is_some()
    }
}

impl KeyedObject for BTreeMap<String, Value> {
    fn keys(&self) -> Box<dyn Iterator<Item = Cow<'_, str>> + '_> {
        Box::new(BTreeMap::keys(self).map(|key| Cow::Borrowed(key.as_str())))
    }

    fn get(&self, key: &str) -> Option<Value> {
        BTreeMap::get(self, key).cloned()
    }

    fn has_any_key(&self) -> bool {
        !self.is_empty()
    }
}
