use serde::Deserialize;
use std::fmt;

/// How the catalog derives the hashing key of a record at insertion time.
///
/// Lookups always hash the uppercased search term. With [`KeyMode::Verbatim`] a record whose
/// stored identifier is not already uppercase can land in a different bucket than its lookup,
/// which yields a miss.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyMode {
    /// Hash the uppercased identifier, matching lookups for any input casing.
    #[default]
    Uppercase,
    /// Hash the identifier exactly as loaded, reproducing legacy bucket placement.
    Verbatim,
}

impl fmt::Display for KeyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Uppercase => "uppercase",
            Self::Verbatim => "verbatim",
        })
    }
}
