#![forbid(unsafe_code)]

//! Human-readable output formatter
//!
//! Prints one line per checked field:
//!
//! ```text
//! ✓ email: valid
//! ✗ username: Username is too short
//! ```

use crate::report::CheckReport;
use std::io;
use termcolor::{Color, ColorSpec, WriteColor};

/// Human-readable formatter for check reports
pub struct HumanFormatter;

impl HumanFormatter {
    /// Creates a new HumanFormatter
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Write the report to `out`, coloring the markers when `out` supports it
    pub fn write(&self, report: &CheckReport, out: &mut dyn WriteColor) -> io::Result<()> {
        for outcome in &report.outcomes {
            match &outcome.error {
                None => {
                    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
                    write!(out, "✓")?;
                    out.reset()?;
                    writeln!(out, " {}: valid", outcome.field)?;
                }
                Some(error) => {
                    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
                    write!(out, "✗")?;
                    out.reset()?;
                    writeln!(out, " {}: {}", outcome.field, error)?;
                }
            }
        }
        Ok(())
    }

    /// Format the report as plain text without color
    pub fn format(&self, report: &CheckReport) -> String {
        let mut buffer = termcolor::Buffer::no_color();
        // Writing to an in-memory buffer cannot fail
        self.write(report, &mut buffer).ok();
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}
