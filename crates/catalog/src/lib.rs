//! # Catalog
//!
//! An in-memory course catalog built on a fixed-size hash table with separate chaining.
//!
//! # Core Features
//!
//! - **Deterministic Hashing**: A doubling rolling hash over the key bytes, reduced modulo the
//!   bucket count, so bucket placement is reproducible across runs and platforms.
//! - **Chaining**: Each bucket is an insertion-ordered chain; colliding records are appended to
//!   the tail and duplicates are kept (the earliest one wins on lookup).
//! - **Case-Insensitive Lookup**: Search terms are uppercased before hashing and comparison.
//!   [`KeyMode`] decides whether insertion hashes the identifier uppercased or verbatim.
//! - **Sorted Listing**: [`ChainedHashTable::list_all`] dumps every record ordered by identifier.
//! - **Loader**: [`loader`] reads the comma-separated catalog format and reports malformed lines.
//!
//! # Architectural Overview
//!
//! 1.  **[`ChainedHashTable`]**: Owns the buckets and every record in them.
//! 2.  **[`TableBuilder`]**: Bucket count and key mode, validated at build time.
//! 3.  **[`loader`]**: Turns text lines into [`Course`] records and inserts them in file order.
//!
//! # Examples
//!
//! ```rust
//! use cplan_catalog::{ChainedHashTable, CatalogError, KeyMode, loader};
//! use std::io::Cursor;
//!
//! # fn main() -> Result<(), CatalogError> {
//! let mut table = ChainedHashTable::builder().buckets(10).key_mode(KeyMode::Uppercase).build()?;
//!
//! let source = "CSCI100,Introduction to Computer Science\nCSCI200,Data Structures,CSCI101\n";
//! let report = loader::load_reader(Cursor::new(source), &mut table)?;
//! assert_eq!(report.loaded, 2);
//!
//! let course = table.search("csci200").expect("loaded above");
//! assert_eq!(course.prerequisites(), ["CSCI101"]);
//!
//! let ids: Vec<String> = table.list_all().iter().map(|c| c.identifier().to_owned()).collect();
//! assert_eq!(ids, ["CSCI100", "CSCI200"]);
//! # Ok(())
//! # }
//! ```

mod builder;
mod error;
pub mod hash;
pub mod loader;
mod table;

pub use builder::TableBuilder;
pub use cplan_domain::{Course, KeyMode};
pub use error::{CatalogError, CatalogErrorExt};
pub use loader::{LineError, LoadReport, SkippedLine};
pub use table::{ChainedHashTable, TableStats};
