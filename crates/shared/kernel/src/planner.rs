//! Catalog service used by the apps.
//!
//! [`Planner`] owns the active [`ChainedHashTable`] and the settings it is built from. Loading
//! always fills a fresh table and swaps it in only when the whole file was read, so a failed
//! load leaves the previous catalog untouched.

use cplan_catalog::{CatalogError, ChainedHashTable, LoadReport, TableBuilder, TableStats, loader};
use cplan_domain::Course;
use cplan_domain::config::CatalogConfig;
use std::fmt;
use std::path::Path;
use tracing::{info, warn};

/// A prerequisite that names a course missing from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedPrerequisite {
    pub course: String,
    pub prerequisite: String,
}

impl fmt::Display for UnresolvedPrerequisite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} requires unknown course {}", self.course, self.prerequisite)
    }
}

#[derive(Debug)]
pub struct Planner {
    table: ChainedHashTable,
    settings: CatalogConfig,
}

impl Planner {
    /// Creates a planner with an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidBucketCount`] if the configured bucket count is zero.
    pub fn new(settings: CatalogConfig) -> Result<Self, CatalogError> {
        let table = TableBuilder::from_config(&settings).build()?;
        Ok(Self { table, settings })
    }

    #[must_use]
    pub const fn settings(&self) -> &CatalogConfig {
        &self.settings
    }

    /// File used when the user asks for the default catalog.
    #[must_use]
    pub fn default_file(&self) -> &Path {
        &self.settings.default_file
    }

    /// Replaces the catalog with the contents of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::FileNotFound`] or [`CatalogError::Io`] when the file cannot be
    /// read. The previous catalog is kept in that case.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, CatalogError> {
        let path = path.as_ref();
        let mut table = TableBuilder::from_config(&self.settings).build()?;
        let report = loader::load_file(path, &mut table)?;

        let previous = std::mem::replace(&mut self.table, table);
        info!(
            path = %path.display(),
            courses = self.table.len(),
            replaced = previous.len(),
            "Catalog swapped in"
        );

        for missing in self.unresolved_prerequisites() {
            warn!(course = %missing.course, prerequisite = %missing.prerequisite, "Unresolved prerequisite");
        }

        Ok(report)
    }

    /// Loads [`Planner::default_file`].
    ///
    /// # Errors
    ///
    /// Same as [`Planner::load`].
    pub fn load_default(&mut self) -> Result<LoadReport, CatalogError> {
        let path = self.settings.default_file.clone();
        self.load(path)
    }

    /// Every course, sorted by identifier.
    #[must_use]
    pub fn courses(&self) -> Vec<Course> {
        self.table.list_all()
    }

    /// Case-insensitive lookup by identifier.
    #[must_use]
    pub fn find(&self, identifier: &str) -> Option<Course> {
        self.table.search(identifier)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> TableStats {
        self.table.stats()
    }

    /// Prerequisites that do not resolve to a course in the catalog, in course order.
    #[must_use]
    pub fn unresolved_prerequisites(&self) -> Vec<UnresolvedPrerequisite> {
        self.table
            .list_all()
            .iter()
            .flat_map(|course| {
                course
                    .prerequisites()
                    .iter()
                    .filter(|prerequisite| self.table.search(prerequisite).is_none())
                    .map(|prerequisite| UnresolvedPrerequisite {
                        course: course.identifier().to_owned(),
                        prerequisite: prerequisite.clone(),
                    })
            })
            .collect()
    }
}
