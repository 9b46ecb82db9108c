/// Bucket count used when neither the caller nor the configuration picks one.
pub const DEFAULT_BUCKET_COUNT: u32 = 100;

/// Catalog file offered when the user answers `y` at the load prompt.
pub const DEFAULT_CATALOG_FILE: &str = "CS 300 ABCU_Advising_Program_Input.csv";

/// Separator between fields of a catalog line.
pub const FIELD_SEPARATOR: char = ',';

/// Largest accepted bucket count; the bucket array is allocated up front.
pub const MAX_BUCKET_COUNT: u32 = 1 << 24;
