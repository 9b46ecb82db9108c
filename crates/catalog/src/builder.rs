use crate::error::CatalogError;
use crate::table::ChainedHashTable;
use cplan_domain::KeyMode;
use cplan_domain::config::CatalogConfig;
use cplan_domain::constants::{DEFAULT_BUCKET_COUNT, MAX_BUCKET_COUNT};
use std::num::NonZeroU32;
use tracing::debug;

/// Fluent configuration for a [`ChainedHashTable`].
///
/// The bucket count is fixed once the table is built; there is no rehashing.
#[derive(Debug, Clone, Copy)]
pub struct TableBuilder {
    bucket_count: u32,
    key_mode: KeyMode,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self { bucket_count: DEFAULT_BUCKET_COUNT, key_mode: KeyMode::default() }
    }
}

impl TableBuilder {
    #[must_use = "Creates a new table builder with default configuration"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the builder from the `[catalog]` configuration section.
    #[must_use = "Creates a table builder from configuration"]
    pub const fn from_config(config: &CatalogConfig) -> Self {
        Self { bucket_count: config.bucket_count, key_mode: config.key_mode }
    }

    #[must_use = "Sets the number of buckets of the table"]
    pub const fn buckets(mut self, bucket_count: u32) -> Self {
        self.bucket_count = bucket_count;
        self
    }

    #[must_use = "Sets how insertion derives the hashing key"]
    pub const fn key_mode(mut self, key_mode: KeyMode) -> Self {
        self.key_mode = key_mode;
        self
    }

    /// Allocates the bucket array.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidBucketCount`] if the bucket count is zero, above
    /// [`MAX_BUCKET_COUNT`], or the bucket array cannot be allocated.
    pub fn build(self) -> Result<ChainedHashTable, CatalogError> {
        let Some(bucket_count) = NonZeroU32::new(self.bucket_count) else {
            return Err(CatalogError::InvalidBucketCount {
                message: "bucket count must be greater than zero".into(),
                context: None,
            });
        };
        if bucket_count.get() > MAX_BUCKET_COUNT {
            return Err(CatalogError::InvalidBucketCount {
                message: format!("{bucket_count} exceeds the maximum of {MAX_BUCKET_COUNT}").into(),
                context: None,
            });
        }

        let table = ChainedHashTable::allocate(bucket_count, self.key_mode)?;
        debug!(buckets = bucket_count.get(), key_mode = %self.key_mode, "Allocated catalog table");
        Ok(table)
    }
}
