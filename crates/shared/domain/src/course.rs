use std::fmt;

/// A single catalog record: course number, display name and prerequisite course numbers.
///
/// The identifier is stored exactly as loaded; lookups compare it case-insensitively.
/// Fields are read-only once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Course {
    identifier: String,
    name: String,
    prerequisites: Vec<String>,
}

impl Course {
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        prerequisites: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            prerequisites: prerequisites.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }

    /// Uppercased identifier, the form used for every lookup comparison.
    #[must_use]
    pub fn normalized_identifier(&self) -> String {
        normalize(&self.identifier)
    }
}

/// Renders as `IDENTIFIER, Name`, the catalog listing format.
impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.identifier, self.name)
    }
}

/// Case normalization shared by insertion and lookup.
#[must_use]
pub fn normalize(identifier: &str) -> String {
    identifier.to_ascii_uppercase()
}
