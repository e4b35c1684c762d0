//! StringHashMap: public string-to-string map over `BucketTable`.

use crate::bucket_table::{self, BucketTable};
use crate::config::{ConfigError, TableConfig};
use core::fmt;

/// A `String -> String` hash map using separate chaining.
///
/// ```
/// use chainmap::StringHashMap;
///
/// let mut m = StringHashMap::new();
/// m.set("k", "v1");
/// assert_eq!(m.set("k", "v2").as_deref(), Some("v1"));
/// assert_eq!(m.get("k"), Some("v2"));
/// assert_eq!(m.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct StringHashMap {
    table: BucketTable<String>,
}

impl StringHashMap {
    /// 16 buckets, load factor 0.75.
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

    /// Insert or overwrite. Returns the previous value if `key` was present.
    /// A new key that brings the table to its load factor doubles the bucket
    /// count before this returns. For very small load factors (at or below
    /// `1 / bucket_count`) one doubling may not be enough, and the count is
    /// doubled again until the ratio drops below the threshold.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.table.set(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.table.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.table.contains(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.table.remove(key)
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

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.table.iter(),
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.iter().map(|(k, _)| k.to_owned()).collect()
    }

    pub fn values(&self) -> Vec<String> {
        self.iter().map(|(_, v)| v.to_owned()).collect()
    }

    pub fn entries(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl Default for StringHashMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowing iterator over `(key, value)` in bucket order, then chain order.
pub struct Iter<'a> {
    inner: bucket_table::Iter<'a, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v.as_str()))
    }
}

impl<'a> IntoIterator for &'a StringHashMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for StringHashMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StringHashMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut m = Self::new();
        m.extend(iter);
        m
    }
}

impl fmt::Display for StringHashMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.table.fmt_buckets(f, |c, f| fmt::Display::fmt(c, f))
    }
}
