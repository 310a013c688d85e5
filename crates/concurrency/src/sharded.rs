//! Sharded accumulator
//!
//! A partitioned concurrent map: `shard_count` pairs of (mutex, ordered map).
//! A key always lives in shard `key mod shard_count`.
//!
//! # Locking discipline
//!
//! Every operation acquires exactly one shard lock at a time and never nests
//! shard locks, so no operation of this type can deadlock with another.
//!
//! # Snapshot consistency
//!
//! [`ShardedMap::snapshot`] locks shards one after another. Each shard is
//! copied atomically, the map as a whole is not: when writers run during a
//! snapshot, the result may contain entries that never coexisted at any single
//! instant. Take snapshots after all writers have joined when an exact view
//! is required, or consume the map with [`ShardedMap::into_map`].

use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};
use std::collections::BTreeMap;

/// Guard returned by [`ShardedMap::access`].
///
/// Derefs to the value slot; the owning shard stays locked until the guard
/// is dropped.
pub type Access<'a, V> = MappedMutexGuard<'a, V>;

/// Key that can be deterministically assigned to a shard.
pub trait ShardKey: Copy + Ord {
    /// Index of the shard owning this key, in `0..shard_count`.
    fn shard_index(&self, shard_count: usize) -> usize;
}

macro_rules! impl_shard_key {
    ($($t:ty),*) => {
        $(
            impl ShardKey for $t {
                #[inline]
                fn shard_index(&self, shard_count: usize) -> usize {
                    // rem_euclid keeps negative keys in range
                    (*self as i128).rem_euclid(shard_count as i128) as usize
                }
            }
        )*
    };
}

impl_shard_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Fixed-shard concurrent map with one exclusive lock per shard.
///
/// # Example
///
/// ```
/// use quarry_concurrency::ShardedMap;
///
/// let scores: ShardedMap<i32, f64> = ShardedMap::new(4);
/// *scores.access(7) += 0.5;
/// *scores.access(7) += 0.25;
/// assert_eq!(scores.snapshot().get(&7), Some(&0.75));
/// ```
pub struct ShardedMap<K, V> {
    shards: Box<[Mutex<BTreeMap<K, V>>]>,
}

impl<K: ShardKey, V> ShardedMap<K, V> {
    /// Create a map with `shard_count` shards (at least one).
    pub fn new(shard_count: usize) -> Self {
        let shards = (0..shard_count.max(1))
            .map(|_| Mutex::new(BTreeMap::new()))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Self { shards }
    }

    /// Number of shards
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Index of the shard that owns `key`
    #[inline]
    pub fn shard_for(&self, key: K) -> usize {
        key.shard_index(self.shards.len())
    }

    /// Lock the owning shard and return the value slot for `key`.
    ///
    /// The slot is default-constructed if absent. The shard lock is released
    /// when the returned guard is dropped, so callers must not hold it while
    /// calling back into this map.
    pub fn access(&self, key: K) -> Access<'_, V>
    where
        V: Default,
    {
        let guard = self.shards[self.shard_for(key)].lock();
        MutexGuard::map(guard, |map| map.entry(key).or_default())
    }

    /// Read-modify-write the slot for `key` under its shard lock.
    pub fn update<F>(&self, key: K, f: F)
    where
        V: Default,
        F: FnOnce(&mut V),
    {
        f(&mut self.access(key));
    }

    /// Remove `key` if present, returning its value.
    pub fn erase(&self, key: K) -> Option<V> {
        self.shards[self.shard_for(key)].lock().remove(&key)
    }

    /// Check whether `key` is present.
    pub fn contains_key(&self, key: K) -> bool {
        self.shards[self.shard_for(key)].lock().contains_key(&key)
    }

    /// Total number of entries.
    ///
    /// Shards are counted one at a time; the same caveat as
    /// [`ShardedMap::snapshot`] applies under concurrent writers.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.lock().len()).sum()
    }

    /// Check if every shard is empty
    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|shard| shard.lock().is_empty())
    }

    /// Merge all shards into a plain ordered map.
    ///
    /// Weak snapshot: each shard is copied under its own lock, one shard at a
    /// time. See the module docs for what concurrent writers can cause.
    pub fn snapshot(&self) -> BTreeMap<K, V>
    where
        V: Clone,
    {
        let mut merged = BTreeMap::new();
        for shard in self.shards.iter() {
            let guard = shard.lock();
            merged.extend(guard.iter().map(|(k, v)| (*k, v.clone())));
        }
        merged
    }

    /// Consume the map and merge all shards without locking.
    pub fn into_map(self) -> BTreeMap<K, V> {
        let mut merged = BTreeMap::new();
        for shard in self.shards.into_vec() {
            merged.append(&mut shard.into_inner());
        }
        merged
    }
}

impl<K, V> std::fmt::Debug for ShardedMap<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShardedMap")
            .field("shard_count", &self.shards.len())
            .finish()
    }
}
