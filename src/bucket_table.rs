//! BucketTable: array of optional chains with the load-factor rehash policy.
//!
//! Shared engine behind `StringHashMap` (`V = String`) and `StringHashSet`
//! (`V = ()`). Keys are always strings.

use crate::chain::{self, Chain, Upsert};
use crate::config::{ConfigError, TableConfig, DEFAULT_INITIAL_BUCKETS, DEFAULT_LOAD_FACTOR};
use crate::hash::bucket_index;
use core::fmt;
use tracing::{debug, trace, warn};

#[derive(Debug, Clone)]
pub(crate) struct BucketTable<V> {
    buckets: Vec<Option<Chain<V>>>,
    len: usize,
    load_factor: f64,
}

fn empty_buckets<V>(n: usize) -> Vec<Option<Chain<V>>> {
    let mut buckets = Vec::with_capacity(n);
    buckets.resize_with(n, || None);
    buckets
}

impl<V> BucketTable<V> {
    /// Default bucket count and load factor; skips validation.
    pub fn new() -> Self {
        Self {
            buckets: empty_buckets(DEFAULT_INITIAL_BUCKETS),
            len: 0,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }

    pub fn with_config(config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            buckets: empty_buckets(config.initial_buckets),
            len: 0,
            load_factor: config.load_factor,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    fn chain(&self, key: &str) -> Option<&Chain<V>> {
        let i = bucket_index(key, self.buckets.len());
        self.buckets.get(i)?.as_ref()
    }

    fn chain_mut(&mut self, key: &str) -> Option<&mut Chain<V>> {
        let i = bucket_index(key, self.buckets.len());
        self.buckets.get_mut(i)?.as_mut()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.chain(key).is_some_and(|c| c.contains(key))
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.chain(key)?.get(key)
    }

    /// Insert or overwrite, then grow if the load factor was reached.
    /// Returns the previous value when `key` was already present.
    pub fn set(&mut self, key: String, value: V) -> Option<V> {
        match self.place(key, value) {
            Upsert::Updated(old) => Some(old),
            Upsert::Inserted => {
                while self.load_reached() {
                    if !self.rehash() {
                        break;
                    }
                }
                None
            }
        }
    }

    /// Put an entry in its bucket, materialising the chain if needed.
    /// Never checks the load factor, so redistribution inside `rehash`
    /// cannot start another rehash.
    fn place(&mut self, key: String, value: V) -> Upsert<V> {
        let i = bucket_index(&key, self.buckets.len());
        let slot = &mut self.buckets[i];
        let chain = slot.get_or_insert_with(|| {
            trace!(bucket = i, "allocating chain");
            Chain::new()
        });
        let res = chain.insert_or_update(key, value);
        if let Upsert::Inserted = res {
            self.len += 1;
        }
        res
    }

    fn load_reached(&self) -> bool {
        self.len as f64 / self.buckets.len() as f64 >= self.load_factor
    }

    /// Double the bucket array and re-place every entry against the new
    /// modulus. Returns `false` if the bucket count cannot be doubled.
    fn rehash(&mut self) -> bool {
        let from = self.buckets.len();
        let Some(to) = from.checked_mul(2) else {
            warn!(buckets = from, "bucket count cannot grow further");
            return false;
        };
        debug!(from, to, entries = self.len, "rehashing");

        let old = core::mem::replace(&mut self.buckets, empty_buckets(to));
        self.len = 0;
        for chain in old.into_iter().flatten() {
            for (key, value) in chain.into_entries() {
                self.place(key, value);
            }
        }
        debug_assert_eq!(self.len, self.counted_len());
        true
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        let value = self.chain_mut(key)?.remove(key)?;
        self.len -= 1;
        Some(value)
    }

    /// Drop every chain; the bucket count is kept.
    pub fn clear(&mut self) {
        let n = self.buckets.len();
        self.buckets = empty_buckets(n);
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
        }
    }

    /// Sum of per-chain sizes, by traversal.
    pub(crate) fn counted_len(&self) -> usize {
        self.buckets.iter().flatten().map(Chain::size).sum()
    }

    #[cfg(test)]
    pub(crate) fn allocated_chains(&self) -> usize {
        self.buckets.iter().filter(|b| b.is_some()).count()
    }

    /// One line per bucket: `<index> -> <chain>` or `<index> -> nil`.
    pub fn fmt_buckets(
        &self,
        f: &mut fmt::Formatter<'_>,
        chain_fmt: impl Fn(&Chain<V>, &mut fmt::Formatter<'_>) -> fmt::Result,
    ) -> fmt::Result {
        for (i, bucket) in self.buckets.iter().enumerate() {
            write!(f, "{i} -> ")?;
            match bucket {
                Some(c) => chain_fmt(c, f)?,
                None => f.write_str("nil")?,
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over every entry, bucket order then chain order.
pub struct Iter<'a, V> {
    buckets: core::slice::Iter<'a, Option<Chain<V>>>,
    chain: Option<chain::Iter<'a, V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.chain.as_mut().and_then(Iterator::next) {
                return Some(item);
            }
            self.chain = self.buckets.next()?.as_ref().map(Chain::iter);
        }
    }
}
