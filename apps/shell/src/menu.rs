//! Interactive advising menu.
//!
//! The menu reads one answer per line from any [`BufRead`] and writes prompts and results to
//! any [`Write`], so it runs the same against a terminal or an in-memory script.

use cplan_kernel::Planner;
use cplan_kernel::catalog::CatalogError;
use cplan_kernel::domain::Course;
use std::io::{self, BufRead, Write};
use tracing::{debug, error};

const EXIT_OPTION: i64 = 9;

/// One parsed answer to the main prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Load,
    List,
    Find,
    Exit,
    Unknown(i64),
}

impl From<i64> for Choice {
    fn from(value: i64) -> Self {
        match value {
            1 => Self::Load,
            2 => Self::List,
            3 => Self::Find,
            EXIT_OPTION => Self::Exit,
            other => Self::Unknown(other),
        }
    }
}

#[derive(Debug)]
pub struct Menu<'a, R, W> {
    planner: &'a mut Planner,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub const fn new(planner: &'a mut Planner, input: R, output: W) -> Self {
        Self { planner, input, output }
    }

    /// Runs the menu loop until the user picks `9` or the input ends.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while reading answers or writing output.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show_menu()?;
            let Some(answer) = self.read_answer()? else {
                debug!("Input closed, leaving menu");
                writeln!(self.output)?;
                return Ok(());
            };

            let Ok(number) = answer.trim().parse::<i64>() else {
                writeln!(self.output, "Please enter a valid number:")?;
                continue;
            };

            match Choice::from(number) {
                Choice::Load => self.load()?,
                Choice::List => self.list()?,
                Choice::Find => self.find()?,
                Choice::Exit => {
                    writeln!(self.output, "Thank you for using the course planner!")?;
                    return self.output.flush();
                },
                Choice::Unknown(other) => writeln!(self.output, "{other} is not a valid option.")?,
            }
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "ABCU Course Planner Menu")?;
        writeln!(self.output, "----------------------------")?;
        writeln!(self.output, "1. Load Course Data")?;
        writeln!(self.output, "2. Print Course List")?;
        writeln!(self.output, "3. Find a Course")?;
        writeln!(self.output, "9. Exit")?;
        write!(self.output, "What would you like to do?: ")?;
        self.output.flush()
    }

    fn load(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Please enter the name of the file you wish to load, or type 'y' to use the default file name - "
        )?;
        writeln!(self.output, "\"{}\"", self.planner.default_file().display())?;
        self.output.flush()?;

        let answer = self.read_answer()?.unwrap_or_default();
        let file_name = answer.trim();
        if file_name.is_empty() {
            return writeln!(self.output, "File name cannot be empty!");
        }

        writeln!(self.output, "Attempting to load file...")?;
        let result = if file_name.eq_ignore_ascii_case("y") {
            self.planner.load_default()
        } else {
            self.planner.load(file_name)
        };

        match result {
            Ok(report) => {
                if !report.skipped.is_empty() {
                    writeln!(self.output, "Skipped {} malformed line(s).", report.skipped.len())?;
                }
                writeln!(self.output, "File has been successfully loaded.")
            },
            Err(err @ (CatalogError::FileNotFound { .. } | CatalogError::Io { .. })) => {
                error!(%err, "Catalog load failed");
                writeln!(self.output, "Error opening file.")
            },
            Err(err) => {
                error!(%err, "Catalog load failed");
                writeln!(self.output, "Error loading file: {err}")
            },
        }
    }

    fn list(&mut self) -> io::Result<()> {
        if self.planner.is_empty() {
            return writeln!(self.output, "No courses loaded yet. Please load course data first.");
        }

        for course in self.planner.courses() {
            writeln!(self.output, "{course}")?;
        }
        Ok(())
    }

    fn find(&mut self) -> io::Result<()> {
        writeln!(self.output, "What course do you want to know about?")?;
        self.output.flush()?;

        let answer = self.read_answer()?.unwrap_or_default();
        match self.planner.find(answer.trim()) {
            Some(course) => self.describe(&course),
            None => writeln!(self.output, "Course not found."),
        }
    }

    fn describe(&mut self, course: &Course) -> io::Result<()> {
        writeln!(self.output, "Course Information:")?;
        writeln!(self.output, "{course}")?;
        if course.prerequisites().is_empty() {
            writeln!(self.output, "Prerequisites: None.")
        } else {
            writeln!(self.output, "Prerequisites: {}", course.prerequisites().join(", "))
        }
    }

    /// Next input line without its line ending, or `None` at end of input.
    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_map_from_numbers() {
        assert_eq!(Choice::from(1), Choice::Load);
        assert_eq!(Choice::from(2), Choice::List);
        assert_eq!(Choice::from(3), Choice::Find);
        assert_eq!(Choice::from(9), Choice::Exit);
        assert_eq!(Choice::from(4), Choice::Unknown(4));
        assert_eq!(Choice::from(0), Choice::Unknown(0));
        assert_eq!(Choice::from(-1), Choice::Unknown(-1));
    }
}
