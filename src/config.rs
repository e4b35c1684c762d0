//! Construction parameters for the bucket table.

use thiserror::Error;

/// Bucket count used by `new()`.
pub const DEFAULT_INITIAL_BUCKETS: usize = 16;

/// Ratio of entries to buckets at which the table doubles.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("initial bucket count must be greater than zero")]
    ZeroBuckets,
    #[error("load factor must be finite and greater than zero, got {0}")]
    InvalidLoadFactor(f64),
}

/// Initial bucket count and load factor for a table.
///
/// Load factors above `1.0` are accepted: chains may hold more than one entry
/// per bucket on average.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    pub initial_buckets: usize,
    pub load_factor: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_buckets: DEFAULT_INITIAL_BUCKETS,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_buckets(mut self, buckets: usize) -> Self {
        self.initial_buckets = buckets;
        self
    }

    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_buckets == 0 {
            return Err(ConfigError::ZeroBuckets);
        }
        if !self.load_factor.is_finite() || self.load_factor <= 0.0 {
            return Err(ConfigError::InvalidLoadFactor(self.load_factor));
        }
        Ok(())
    }
}
