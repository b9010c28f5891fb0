//! # Common Types

/// The index assigned to a vocabulary token.
///
/// Index `0` is reserved for padding; assigned indices start at `1`.
pub type TokenIndex = usize;

/// The reserved padding index.
pub const PAD_INDEX: TokenIndex = 0;

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type GLHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> GLHashMap<K, V> {
            GLHashMap::with_capacity(capacity)
        }
    } else {
        /// Type Alias for hash maps in this crate.
        pub type GLHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> GLHashMap<K, V> {
            GLHashMap::with_capacity(capacity)
        }
    }
}

/// Compile-time check that a value is [`Send`].
#[cfg(any(test, feature = "testing"))]
pub fn check_is_send<S: Send>(_: S) {}

/// Compile-time check that a value is [`Sync`].
#[cfg(any(test, feature = "testing"))]
pub fn check_is_sync<S: Sync>(_: S) {}
