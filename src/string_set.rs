//! StringHashSet: key-only variant sharing the chained table engine.

use crate::bucket_table::{self, BucketTable};
use crate::config::{ConfigError, TableConfig};
use core::fmt;

#[derive(Debug, Clone)]
pub struct StringHashSet {
    table: BucketTable<()>,
}

impl StringHashSet {
    pub fn new() -> Self {
        Self {
            table: BucketTable::new(),
        }
    }

    pub fn with_config(config: TableConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            table: BucketTable::with_config(config)?,
        })
    }

    pub fn with_capacity_and_load_factor(
        initial_buckets: usize,
        load_factor: f64,
    ) -> Result<Self, ConfigError> {
        Self::with_config(
            TableConfig::new()
                .with_initial_buckets(initial_buckets)
                .with_load_factor(load_factor),
        )
    }

    /// Returns `true` if `key` was not already present.
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        self.table.set(key.into(), ()).is_none()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.table.contains(key)
    }

    /// Returns `true` if `key` was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.table.remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn clear(&mut self) {
        self.table.clear()
    }

    pub fn bucket_count(&self) -> usize {
        self.table.bucket_count()
    }

    pub fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    pub fn iter(&self) -> Keys<'_> {
        Keys {
            inner: self.table.iter(),
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.iter().map(str::to_owned).collect()
    }

    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl Default for StringHashSet {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Keys<'a> {
    inner: bucket_table::Iter<'a, ()>,
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

impl<'a> IntoIterator for &'a StringHashSet {
    type Item = &'a str;
    type IntoIter = Keys<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>> Extend<K> for StringHashSet {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for k in iter {
            self.insert(k);
        }
    }
}

impl<K: Into<String>> FromIterator<K> for StringHashSet {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut s = Self::new();
        s.extend(iter);
        s
    }
}

impl fmt::Display for StringHashSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.table.fmt_buckets(f, |c, f| c.fmt_keys(f))
    }
}
