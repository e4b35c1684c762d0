//! chainmap: a string-keyed hash table with separate chaining and
//! grow-only rehashing.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small associative container whose bucket placement, collision
//!   handling and resize policy are all visible and testable.
//! - Layers:
//!   - `hash`: polynomial rolling hash (`h = h * 31 + c`) and bucket index.
//!   - `Chain<V>`: singly linked list per bucket, nodes stored in a
//!     per-chain `SlotMap` and linked by generational keys.
//!   - `BucketTable<V>`: `Vec<Option<Chain<V>>>`, live entry count, load
//!     factor and rehash. Generic over the value only so the map and the
//!     key-only set share one engine.
//!   - `StringHashMap` / `StringHashSet`: public API.
//!
//! Constraints
//! - Single-threaded; mutation needs `&mut self`. Wrap the whole map in one
//!   lock for shared use.
//! - Keys are strings. Lookups return `Option`, so `Some("")` and `None`
//!   stay distinct.
//! - At most one entry per key per chain; `set` on an existing key
//!   overwrites in place.
//!
//! Rehash invariants
//! - A new insertion that brings `len / bucket_count` to the load factor
//!   doubles the bucket array before `set` returns. Every entry is moved into
//!   a freshly allocated array and re-placed against the new modulus.
//! - Re-placement never checks the load factor, so a rehash cannot nest. If
//!   one doubling leaves the ratio at or above the threshold (load factors at
//!   or below `1 / bucket_count`), the triggering `set` doubles again.
//! - After `set` returns, `len / bucket_count < load_factor`.
//!
//! Notes and non-goals
//! - No shrink path: `remove` and `clear` never reduce the bucket count.
//! - Buckets hold no chain until their first insertion after construction,
//!   `clear` or rehash. Chains emptied by `remove` stay allocated.
//! - Chain size is counted by traversal; only the table keeps a counter.

mod bucket_table;
mod chain;
mod config;
pub mod hash;
mod string_map;
mod string_map_proptest;
mod string_set;

// Public surface
pub use config::{ConfigError, TableConfig, DEFAULT_INITIAL_BUCKETS, DEFAULT_LOAD_FACTOR};
pub use string_map::{Iter, StringHashMap};
pub use string_set::{Keys, StringHashSet};
