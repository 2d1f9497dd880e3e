use std::{fmt, sync::Arc};

use super::Value;

/// Function signature stored inside a [`Callable`].
pub type CallableFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// Shared function value.
///
/// The body is opaque: nothing in this crate inspects or invokes it except
/// [`Callable::call`].
#[derive(Clone)]
pub struct Callable {
    name: Option<Arc<str>>,
    body: Arc<CallableFn>,
}

impl Callable {
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: None,
            body: Arc::new(body),
        }
    }

    pub fn named<F>(name: impl Into<Arc<str>>, body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            body: Arc::new(body),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.body)(args)
    }

    /// True when both handles share the same function body.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Callable")
            .field(&self.name().unwrap_or("<anonymous>"))
            .finish()
    }
}
