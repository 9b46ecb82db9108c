use std::borrow::Cow;

/// A specialized [`CatalogError`] enum of this crate.
///
/// A lookup miss is not an error: [`crate::ChainedHashTable::search`] returns `None`.
#[cplan_derive::cplan_error]
pub enum CatalogError {
    #[error("Invalid bucket count{}: {message}", format_context(.context))]
    InvalidBucketCount { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Record without identifier rejected{}: {message}", format_context(.context))]
    EmptyIdentifier { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Catalog file not found{}: {message}", format_context(.context))]
    FileNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Catalog I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}
