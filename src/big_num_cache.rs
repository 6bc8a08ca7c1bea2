use std::collections::HashMap;

use lazy_static::*;
use parking_lot::RwLock;

use crate::big_num_constants::*;
use crate::{BigInt, Fixed64};

/// Memo table for canonical instances of small integers.
///
/// Only values in `[SMALL_CACHE_MIN, SMALL_CACHE_MAX)` are stored; anything else is built
/// on every call. Entries are never evicted. Two threads racing on the same key may both
/// build the value, the first insert wins and both observe equal values.
pub struct SmallValueCache<T> {
    slots: RwLock<HashMap<i32, T>>,
}

impl<T: Clone> SmallValueCache<T> {
    pub fn new() -> Self {
        SmallValueCache { slots: RwLock::new(HashMap::new()) }
    }

    pub fn covers(value: i32) -> bool {
        (SMALL_CACHE_MIN..SMALL_CACHE_MAX).contains(&value)
    }

    pub fn get_or_insert_with<F>(&self, value: i32, build: F) -> T
    where
        F: FnOnce() -> T,
    {
        if !Self::covers(value) {
            return build();
        }
        if let Some(hit) = self.slots.read().get(&value) {
            return hit.clone();
        }
        let fresh = build();
        tracing::trace!(value, "populating small value cache");
        self.slots.write().entry(value).or_insert(fresh).clone()
    }

    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Default for SmallValueCache<T> {
    fn default() -> Self {
        SmallValueCache::new()
    }
}

lazy_static! {
    pub static ref BIG_INT_CACHE: SmallValueCache<BigInt> = SmallValueCache::new();
    pub static ref FIXED64_CACHE: SmallValueCache<Fixed64> = SmallValueCache::new();
}

#[test]
fn test_cache_bounds() {
    let cache: SmallValueCache<i64> = SmallValueCache::new();
    assert!(cache.is_empty());

    assert_eq!(cache.get_or_insert_with(-128, || -128), -128);
    assert_eq!(cache.get_or_insert_with(127, || 127), 127);
    assert_eq!(cache.len(), 2);

    // 128 is past the end of the range
    assert_eq!(cache.get_or_insert_with(128, || 128), 128);
    assert_eq!(cache.get_or_insert_with(-129, || -129), -129);
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_cache_keeps_first_entry() {
    let cache: SmallValueCache<&'static str> = SmallValueCache::new();
    assert_eq!(cache.get_or_insert_with(5, || "first"), "first");
    assert_eq!(cache.get_or_insert_with(5, || "second"), "first");
    assert_eq!(cache.len(), 1);
}
