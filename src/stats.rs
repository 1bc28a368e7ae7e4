//! Descriptive statistics over a wordlist

use colored::*;
use std::io::{self, Write};

use crate::dedup::{Projection, SeenSet};
use crate::filter::has_special;
use crate::progress::format_number;

/// Read-only snapshot of a line set's statistics
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsReport {
    pub total: usize,
    pub unique: usize,
    pub duplicates: usize,
    pub min_length: usize,
    pub min_example: String,
    pub max_length: usize,
    pub max_example: String,
    pub mean_length: f64,
    pub median_length: f64,
    pub with_digits: usize,
    pub with_upper: usize,
    pub with_special: usize,
}

/// Compute statistics; `None` when there are no lines
pub fn analyze(lines: &[String]) -> Option<StatisticsReport> {
    let first = lines.first()?;

    let mut seen = SeenSet::with_capacity(Projection::Exact, lines.len());
    let mut lengths = Vec::with_capacity(lines.len());

    let first_len = first.chars().count();
    let (mut min_length, mut min_example) = (first_len, first);
    let (mut max_length, mut max_example) = (first_len, first);

    let mut with_digits = 0;
    let mut with_upper = 0;
    let mut with_special = 0;

    for line in lines {
        seen.insert(line);

        let len = line.chars().count();
        lengths.push(len);
        if len < min_length {
            min_length = len;
            min_example = line;
        }
        if len > max_length {
            max_length = len;
            max_example = line;
        }

        if line.chars().any(|c| c.is_ascii_digit()) {
            with_digits += 1;
        }
        if line.chars().any(char::is_uppercase) {
            with_upper += 1;
        }
        if has_special(line) {
            with_special += 1;
        }
    }

    let total = lines.len();
    let unique = seen.len();
    let mean_length = lengths.iter().sum::<usize>() as f64 / total as f64;

    lengths.sort_unstable();
    let mid = total / 2;
    let median_length = if total % 2 == 0 {
        (lengths[mid - 1] + lengths[mid]) as f64 / 2.0
    } else {
        lengths[mid] as f64
    };

    Some(StatisticsReport {
        total,
        unique,
        duplicates: total - unique,
        min_length,
        min_example: min_example.clone(),
        max_length,
        max_example: max_example.clone(),
        mean_length,
        median_length,
        with_digits,
        with_upper,
        with_special,
    })
}

impl StatisticsReport {
    /// Render the report
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", "═".repeat(60).green())?;
        writeln!(out, "{}", "                    WORDLIST STATISTICS".green().bold())?;
        writeln!(out, "{}", "═".repeat(60).green())?;
        writeln!(out)?;

        writeln!(out, "  {} {}", "Total lines:    ".green(), format_number(self.total as u64))?;
        writeln!(out, "  {} {}", "Unique lines:   ".green(), format_number(self.unique as u64))?;
        writeln!(out, "  {} {}", "Duplicates:     ".yellow(), format_number(self.duplicates as u64))?;
        writeln!(out)?;

        writeln!(out, "  {} {} ({:?})", "Min length:     ".green(), self.min_length, self.min_example)?;
        writeln!(out, "  {} {} ({:?})", "Max length:     ".green(), self.max_length, self.max_example)?;
        writeln!(out, "  {} {:.2}", "Mean length:    ".green(), self.mean_length)?;
        writeln!(out, "  {} {:.1}", "Median length:  ".green(), self.median_length)?;
        writeln!(out)?;

        writeln!(out, "  {} {}", "With digits:    ".green(), format_number(self.with_digits as u64))?;
        writeln!(out, "  {} {}", "With uppercase: ".green(), format_number(self.with_upper as u64))?;
        writeln!(out, "  {} {}", "With special:   ".green(), format_number(self.with_special as u64))?;
        writeln!(out)?;
        writeln!(out, "{}", "═".repeat(60).green())?;
        Ok(())
    }
}
