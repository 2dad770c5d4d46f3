//! Fast hash map and hash set type aliases.
//!
//! Lookup tables in this workspace are keyed by display strings and constant
//! names. The Fx hash from `rustc-hash` is faster than SipHash for such keys
//! and denial-of-service resistance is irrelevant for generator input.
//!
//! ```
//! use enums_core::{FxHashMap, fx_hash_map_with_capacity};
//!
//! let mut map: FxHashMap<&str, u16> = fx_hash_map_with_capacity(2);
//! map.insert("identifier", 0);
//! assert_eq!(map.get("identifier"), Some(&0));
//! ```

/// A [`HashMap`](std::collections::HashMap) using the Fx hash algorithm.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// A [`HashSet`](std::collections::HashSet) using the Fx hash algorithm.
pub type FxHashSet<V> = rustc_hash::FxHashSet<V>;

/// Creates a new [`FxHashMap`] with the specified capacity.
#[inline]
#[must_use]
pub fn fx_hash_map_with_capacity<K, V>(capacity: usize) -> FxHashMap<K, V> {
    FxHashMap::with_capacity_and_hasher(capacity, rustc_hash::FxBuildHasher)
}

/// Creates a new [`FxHashSet`] with the specified capacity.
#[inline]
#[must_use]
pub fn fx_hash_set_with_capacity<V>(capacity: usize) -> FxHashSet<V> {
    FxHashSet::with_capacity_and_hasher(capacity, rustc_hash::FxBuildHasher)
}
