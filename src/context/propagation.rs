//! Immutable layered key/value context.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

struct Layer {
    key: &'static str,
    value: Arc<dyn Any + Send + Sync>,
    parent: Option<Arc<Layer>>,
}

/// Value carrier passed down a call chain.
///
/// Deriving a context never modifies the original: each
/// [`with_value`](Context::with_value) adds a layer on top of a shared
/// parent. Lookups start at the newest layer, so a child shadows any parent
/// value stored under the same key.
#[derive(Clone, Default)]
pub struct Context {
    head: Option<Arc<Layer>>,
}

impl Context {
    /// Empty root context.
    pub fn background() -> Self {
        Self::default()
    }

    /// Derived context carrying `value` under `key`.
    pub fn with_value<T>(&self, key: &'static str, value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            head: Some(Arc::new(Layer {
                key,
                value: Arc::new(value),
                parent: self.head.clone(),
            })),
        }
    }

    /// Value stored under `key` by the newest layer holding that key.
    ///
    /// Returns `None` when the key is absent or when the newest value for it
    /// is not a `T`.
    pub fn value<T: Any>(&self, key: &str) -> Option<&T> {
        self.layers()
            .find(|layer| layer.key == key)
            .and_then(|layer| layer.value.downcast_ref::<T>())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.layers().any(|layer| layer.key == key)
    }

    /// Number of layers above the root.
    pub fn depth(&self) -> usize {
        self.layers().count()
    }

    fn layers(&self) -> impl Iterator<Item = &Layer> {
        std::iter::successors(self.head.as_deref(), |layer| layer.parent.as_deref())
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.layers().map(|layer| layer.key))
            .finish()
    }
}
