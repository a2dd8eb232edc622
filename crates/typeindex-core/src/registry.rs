//! Process-wide, lazily populated storage for type-info records.
//!
//! Rust has no generic statics, so a backend cannot write "one static per
//! `T`". Instead each backend owns one `static` [`Registry`] keyed by type
//! identity. The map only hands out a per-key [`OnceLock`]; the record itself
//! is built through `OnceLock::get_or_init`, so:
//!
//! - each key is initialized exactly once, even when many threads race on
//!   first use,
//! - every thread observes the fully built record once it is published,
//! - records are never mutated or freed, so `&'static` references are handed
//!   out freely.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{OnceLock, PoisonError, RwLock};

use rustc_hash::{FxBuildHasher, FxHashMap};

/// Lazily populated `K -> &'static V` map with one-time initialization per key.
///
/// # Examples
///
/// ```
/// use typeindex_core::Registry;
///
/// static SQUARES: Registry<u32, u64> = Registry::new();
///
/// let first = SQUARES.get_or_init(12, || 144);
/// let again = SQUARES.get_or_init(12, || unreachable!());
/// assert!(std::ptr::eq(first, again));
/// ```
pub struct Registry<K, V: 'static> {
    slots: RwLock<FxHashMap<K, &'static OnceLock<V>>>,
}

impl<K, V> Registry<K, V>
where
    K: Eq + Hash,
    V: Send + Sync + 'static,
{
    /// Create an empty registry. Usable in `static` position.
    pub const fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::with_hasher(FxBuildHasher)),
        }
    }

    /// Return the record for `key`, building it with `init` on first use.
    ///
    /// `init` runs at most once per key for the lifetime of the process.
    pub fn get_or_init(&self, key: K, init: impl FnOnce() -> V) -> &'static V {
        self.slot(key).get_or_init(init)
    }

    /// Return the record for `key` if it has already been published.
    pub fn get(&self, key: &K) -> Option<&'static V> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots.get(key).copied().and_then(OnceLock::get)
    }

    /// Number of keys that have been requested so far.
    pub fn len(&self) -> usize {
        self.slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no key has been requested yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg_attr(feature = "profiling", profiling::function)]
    fn slot(&self, key: K) -> &'static OnceLock<V> {
        {
            let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(slot) = slots.get(&key) {
                return *slot;
            }
        }

        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        *slots.entry(key).or_insert_with(|| {
            tracing::trace!(
                record = std::any::type_name::<V>(),
                "allocating type-info slot"
            );
            Box::leak(Box::new(OnceLock::new()))
        })
    }
}

impl<K, V> Default for Registry<K, V>
where
    K: Eq + Hash,
    V: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
