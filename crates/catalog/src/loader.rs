//! Line-oriented catalog reader.
//!
//! Each line is `identifier,name[,prerequisite]*` with no quoting. Empty prerequisite
//! fields are dropped. Blank lines are ignored. Lines missing an identifier or a name are
//! skipped and reported instead of aborting the load.

use crate::error::{CatalogError, CatalogErrorExt};
use crate::table::ChainedHashTable;
use cplan_domain::Course;
use cplan_domain::constants::FIELD_SEPARATOR;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use tracing::{info, warn};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Why a line could not be turned into a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("missing course identifier")]
    MissingIdentifier,
    #[error("missing course name")]
    MissingName,
}

/// A malformed line left out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source.
    pub line_number: usize,
    pub content: String,
    pub reason: LineError,
}

/// Outcome of a load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedLine>,
}

/// Parses one catalog line. Blank lines yield `Ok(None)`.
///
/// # Errors
///
/// Returns [`LineError::MissingName`] when the line has no separator and
/// [`LineError::MissingIdentifier`] when the first field is empty.
pub fn parse_line(line: &str) -> Result<Option<Course>, LineError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let mut fields = line.split(FIELD_SEPARATOR);
    let identifier = fields.next().unwrap_or_default();
    let Some(name) = fields.next() else {
        return Err(LineError::MissingName);
    };
    if identifier.is_empty() {
        return Err(LineError::MissingIdentifier);
    }

    Ok(Some(Course::new(identifier, name, fields.filter(|field| !field.is_empty()))))
}

/// Inserts every well-formed line of `reader` into `table`, in source order.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] if reading fails, including on invalid UTF-8.
pub fn load_reader<R: BufRead>(reader: R, table: &mut ChainedHashTable) -> Result<LoadReport, CatalogError> {
    let mut report = LoadReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.context(format!("Failed to read catalog line {line_number}"))?;
        let line = if index == 0 { line.trim_start_matches(BYTE_ORDER_MARK) } else { line.as_str() };

        match parse_line(line) {
            Ok(Some(course)) => {
                table.insert(course).context(format!("Line {line_number}"))?;
                report.loaded += 1;
            },
            Ok(None) => {},
            Err(reason) => {
                warn!(line_number, %reason, "Skipping malformed catalog line");
                let content = line.trim_end_matches('\r').to_owned();
                report.skipped.push(SkippedLine { line_number, content, reason });
            },
        }
    }

    info!(loaded = report.loaded, skipped = report.skipped.len(), "Catalog load finished");
    Ok(report)
}

/// Opens `path` and loads it with [`load_reader`].
///
/// # Errors
///
/// Returns [`CatalogError::FileNotFound`] if the file does not exist, and
/// [`CatalogError::Io`] if it cannot be opened or read.
pub fn load_file(path: impl AsRef<Path>, table: &mut ChainedHashTable) -> Result<LoadReport, CatalogError> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(CatalogError::FileNotFound { message: path.display().to_string().into(), context: None });
        },
        Err(source) => {
            return Err(CatalogError::Io {
                source,
                context: Some(format!("Failed to open catalog: {}", path.display()).into()),
            });
        },
    };

    info!(path = %path.display(), "Loading catalog");
    load_reader(BufReader::new(file), table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fields_and_drops_empty_prerequisites() {
        let course = parse_line("CSCI300,Introduction to Algorithms,CSCI200,,MATH201,").unwrap().unwrap();
        assert_eq!(course.identifier(), "CSCI300");
        assert_eq!(course.name(), "Introduction to Algorithms");
        assert_eq!(course.prerequisites(), ["CSCI200", "MATH201"]);
    }

    #[test]
    fn two_fields_mean_no_prerequisites() {
        let course = parse_line("MATH201,Discrete Mathematics\r").unwrap().unwrap();
        assert_eq!(course.name(), "Discrete Mathematics");
        assert!(course.prerequisites().is_empty());
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   \r"), Ok(None));
    }

    #[test]
    fn malformed_lines_are_classified() {
        assert_eq!(parse_line("CSCI100"), Err(LineError::MissingName));
        assert_eq!(parse_line(",Orphan Name,CSCI100"), Err(LineError::MissingIdentifier));
    }

    #[test]
    fn fields_are_not_trimmed_or_unquoted() {
        let course = parse_line("\"CS1\", Quoted").unwrap().unwrap();
        assert_eq!(course.identifier(), "\"CS1\"");
        assert_eq!(course.name(), " Quoted");
    }
}
