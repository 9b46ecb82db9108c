//! Fixed-size hash table with separate chaining, keyed by course identifier.
//!
//! Each bucket is an insertion-ordered chain. Entries are only ever appended to the tail and
//! are never removed or mutated, so a chain always reflects load order.

use crate::builder::TableBuilder;
use crate::error::CatalogError;
use crate::hash;
use cplan_domain::course::normalize;
use cplan_domain::{Course, KeyMode};
use std::borrow::Cow;
use std::num::NonZeroU32;
use tracing::{debug, trace};

/// One chain node: the record plus the bucket it was hashed into.
#[derive(Debug)]
struct Entry {
    bucket: u32,
    course: Course,
}

/// Snapshot of how records are spread over the buckets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStats {
    pub buckets: usize,
    pub entries: usize,
    pub occupied_buckets: usize,
    pub longest_chain: usize,
    pub load_factor: f64,
}

/// In-memory course catalog backed by a bucket array of chains.
///
/// * **Insert** appends to the tail of the target chain and never checks for duplicates;
///   the earliest insertion of an identifier wins on lookup.
/// * **Search** is case-insensitive and returns a copy of the record, or `None` on a miss.
/// * **List** returns every record sorted by identifier.
///
/// The bucket count never changes after construction, so the load factor is unbounded.
///
/// # Example
///
/// ```rust
/// use cplan_catalog::{ChainedHashTable, CatalogError};
/// use cplan_domain::Course;
///
/// # fn main() -> Result<(), CatalogError> {
/// let mut table = ChainedHashTable::with_buckets(10)?;
/// table.insert(Course::new("CS101", "Intro", Vec::<String>::new()))?;
/// table.insert(Course::new("CS102", "Data Structures", ["CS101"]))?;
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.search("cs102").map(|c| c.name().to_owned()), Some("Data Structures".to_owned()));
/// assert!(table.search("MATH999").is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ChainedHashTable {
    buckets: Vec<Vec<Entry>>,
    bucket_count: NonZeroU32,
    key_mode: KeyMode,
    len: usize,
}

impl Default for ChainedHashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainedHashTable {
    /// Table with the default bucket count and [`KeyMode::Uppercase`].
    #[must_use]
    pub fn new() -> Self {
        let mut buckets = Vec::new();
        buckets.resize_with(default_bucket_count().get() as usize, Vec::new);
        Self { buckets, bucket_count: default_bucket_count(), key_mode: KeyMode::default(), len: 0 }
    }

    /// Shorthand for `ChainedHashTable::builder().buckets(bucket_count).build()`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidBucketCount`] if `bucket_count` is zero.
    pub fn with_buckets(bucket_count: u32) -> Result<Self, CatalogError> {
        TableBuilder::new().buckets(bucket_count).build()
    }

    #[must_use = "The table is not allocated until you call .build()"]
    pub fn builder() -> TableBuilder {
        TableBuilder::new()
    }

    pub(crate) fn allocate(bucket_count: NonZeroU32, key_mode: KeyMode) -> Result<Self, CatalogError> {
        let slots = bucket_count.get() as usize;
        let mut buckets = Vec::new();
        buckets.try_reserve_exact(slots).map_err(|err| CatalogError::InvalidBucketCount {
            message: format!("cannot allocate {slots} buckets: {err}").into(),
            context: None,
        })?;
        buckets.resize_with(slots, Vec::new);
        Ok(Self { buckets, bucket_count, key_mode, len: 0 })
    }

    #[must_use]
    pub const fn bucket_count(&self) -> u32 {
        self.bucket_count.get()
    }

    #[must_use]
    pub const fn key_mode(&self) -> KeyMode {
        self.key_mode
    }

    /// Number of records inserted so far, duplicates included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bucket index of `key` exactly as given, with no case normalization.
    #[must_use]
    pub fn hash(&self, key: &str) -> usize {
        hash::bucket_index(key, self.bucket_count) as usize
    }

    /// Bucket an identifier is placed in on insertion under this table's key mode.
    #[must_use]
    pub fn bucket_of(&self, identifier: &str) -> usize {
        self.hash(&self.insert_key(identifier))
    }

    /// Appends `course` to the tail of its bucket's chain and returns the bucket index.
    ///
    /// Duplicate identifiers are stored side by side; lookups return the first one.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyIdentifier`] for a course without an identifier, since an
    /// empty identifier means "not found" to every caller.
    pub fn insert(&mut self, course: Course) -> Result<usize, CatalogError> {
        if course.identifier().is_empty() {
            return Err(CatalogError::EmptyIdentifier {
                message: format!("course named '{}'", course.name()).into(),
                context: None,
            });
        }

        let key = hash::bucket_index(&self.insert_key(course.identifier()), self.bucket_count);
        debug!(identifier = course.identifier(), bucket = key, "Course added");

        self.buckets[key as usize].push(Entry { bucket: key, course });
        self.len += 1;

        Ok(key as usize)
    }

    /// Case-insensitive exact match on the identifier.
    ///
    /// The search term is uppercased and hashed, and only that bucket's chain is walked. A miss
    /// is `None`, never an error. The empty string always misses.
    #[must_use]
    pub fn search(&self, identifier: &str) -> Option<Course> {
        let wanted = normalize(identifier);
        if wanted.is_empty() {
            return None;
        }

        let bucket = self.hash(&wanted);
        let found = self.buckets.get(bucket)?.iter().find(|entry| entry.course.identifier().eq_ignore_ascii_case(&wanted));
        trace!(identifier = %wanted, bucket, hit = found.is_some(), "Catalog lookup");

        found.map(|entry| entry.course.clone())
    }

    /// Every record sorted by identifier, byte-wise. Equal identifiers keep chain order.
    #[must_use]
    pub fn list_all(&self) -> Vec<Course> {
        let mut courses: Vec<Course> =
            self.buckets.iter().flatten().map(|entry| entry.course.clone()).collect();
        courses.sort_by(|a, b| a.identifier().cmp(b.identifier()));
        courses
    }

    /// Identifiers stored in one bucket, in chain order. Out-of-range buckets are empty.
    pub fn chain(&self, bucket: usize) -> impl Iterator<Item = &str> + '_ {
        self.buckets.get(bucket).into_iter().flatten().map(move |entry| {
            debug_assert_eq!(entry.bucket as usize, bucket, "entry chained into a foreign bucket");
            entry.course.identifier()
        })
    }

    /// Chain distribution for diagnostics.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn stats(&self) -> TableStats {
        let occupied_buckets = self.buckets.iter().filter(|chain| !chain.is_empty()).count();
        let longest_chain = self.buckets.iter().map(Vec::len).max().unwrap_or(0);

        TableStats {
            buckets: self.buckets.len(),
            entries: self.len,
            occupied_buckets,
            longest_chain,
            load_factor: self.len as f64 / self.buckets.len() as f64,
        }
    }

    fn insert_key<'a>(&self, identifier: &'a str) -> Cow<'a, str> {
        match self.key_mode {
            KeyMode::Uppercase => Cow::Owned(normalize(identifier)),
            KeyMode::Verbatim => Cow::Borrowed(identifier),
        }
    }
}

const fn default_bucket_count() -> NonZeroU32 {
    match NonZeroU32::new(cplan_domain::constants::DEFAULT_BUCKET_COUNT) {
        Some(n) => n,
        None => NonZeroU32::MIN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, name: &str) -> Course {
        Course::new(id, name, Vec::<String>::new())
    }

    #[test]
    fn new_table_uses_default_buckets() {
        let table = ChainedHashTable::new();
        assert_eq!(table.bucket_count(), 100);
        assert_eq!(table.key_mode(), KeyMode::Uppercase);
        assert!(table.is_empty());
        assert!(table.list_all().is_empty());
    }

    #[test]
    fn colliding_identifiers_share_a_chain_in_load_order() {
        let mut table = ChainedHashTable::with_buckets(10).unwrap();
        assert_eq!(table.insert(course("CSCI350", "Operating Systems")).unwrap(), 8);
        assert_eq!(table.insert(course("CSCI300", "Intro to Algorithms")).unwrap(), 8);

        let chain: Vec<&str> = table.chain(8).collect();
        assert_eq!(chain, ["CSCI350", "CSCI300"]);
        assert_eq!(table.search("csci300").unwrap().name(), "Intro to Algorithms");
    }

    #[test]
    fn empty_identifier_is_rejected_and_never_found() {
        let mut table = ChainedHashTable::new();
        let err = table.insert(course("", "Nameless")).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyIdentifier { .. }));
        assert_eq!(table.len(), 0);
        assert!(table.search("").is_none());
    }

    #[test]
    fn verbatim_mode_reproduces_legacy_miss() {
        let mut table = ChainedHashTable::builder().buckets(10).key_mode(KeyMode::Verbatim).build().unwrap();
        // "cs101" hashes to bucket 5 as loaded, while the lookup "CS101" walks bucket 7.
        assert_eq!(table.insert(course("cs101", "Intro")).unwrap(), 5);
        assert!(table.search("CS101").is_none());

        table.insert(course("CS102", "Data Structures")).unwrap();
        assert!(table.search("cs102").is_some());
    }

    #[test]
    fn uppercase_mode_places_by_normalized_key() {
        let table = ChainedHashTable::with_buckets(10).unwrap();
        assert_eq!(table.bucket_of("cs101"), table.hash("CS101"));
        assert_eq!(table.hash("cs101"), 5);
    }

    #[test]
    fn stats_track_chain_distribution() {
        let mut table = ChainedHashTable::with_buckets(10).unwrap();
        for id in ["CSCI300", "CSCI350", "CSCI100", "CSCI101"] {
            table.insert(course(id, "x")).unwrap();
        }

        let stats = table.stats();
        assert_eq!(stats.buckets, 10);
        assert_eq!(stats.entries, 4);
        assert_eq!(stats.occupied_buckets, 3);
        assert_eq!(stats.longest_chain, 2);
        assert!((stats.load_factor - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn every_chained_entry_belongs_to_its_bucket() {
        let mut table = ChainedHashTable::with_buckets(10).unwrap();
        for id in ["CSCI100", "CSCI101", "CSCI200", "MATH201", "CSCI300", "CSCI350", "cs101"] {
            table.insert(course(id, "x")).unwrap();
        }

        for (index, chain) in table.buckets.iter().enumerate() {
            assert!(chain.iter().all(|entry| entry.bucket as usize == index));
            assert_eq!(table.chain(index).count(), chain.len());
        }
        assert_eq!(table.stats().occupied_buckets, 6);
    }

    #[test]
    fn chain_out_of_range_is_empty() {
        let table = ChainedHashTable::with_buckets(3).unwrap();
        assert_eq!(table.chain(42).count(), 0);
    }
}
