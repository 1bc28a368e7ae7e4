//! Primary operations
//!
//! Each invocation runs exactly one operation. Its result is a line set that
//! is then handed to the pipeline, except for `stats` which is analyzed
//! directly.

use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::dedup::{self, Projection};
use crate::error::{CrunchError, Result};
use crate::filter::{AffixFilter, LengthRange, LineFilter, PatternFilter, SubstringFilter, UniqueCharsFilter};
use crate::source::{ReadOptions, Source};

/// The operation selected for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Concatenate files, optionally keeping only first occurrences
    Merge { files: Vec<PathBuf>, unique: bool },
    /// Remove lines of `from` that appear in `delete`
    Delete { from: PathBuf, delete: PathBuf },
    /// Keep lines whose length is within `[min_len, max_len]`
    FilterLength {
        file: PathBuf,
        min_len: usize,
        max_len: usize,
    },
    /// Keep lines containing a substring
    Contains { file: PathBuf, substring: String },
    /// Keep lines matching a regex anywhere
    Regex { file: PathBuf, pattern: String },
    /// Keep lines with the given prefix and/or suffix
    StartsEnds {
        file: PathBuf,
        starts_with: Option<String>,
        ends_with: Option<String>,
    },
    /// Keep lines with at least `min_unique` distinct characters
    UniqueChars { file: PathBuf, min_unique: usize },
    /// Report statistics instead of emitting lines
    Stats { file: PathBuf },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Merge { .. } => "merge",
            Self::Delete { .. } => "delete",
            Self::FilterLength { .. } => "filter-length",
            Self::Contains { .. } => "contains",
            Self::Regex { .. } => "regex",
            Self::StartsEnds { .. } => "starts-ends",
            Self::UniqueChars { .. } => "unique-chars",
            Self::Stats { .. } => "stats",
        }
    }

    /// All input paths, in argument order
    pub fn inputs(&self) -> Vec<&Path> {
        match self {
            Self::Merge { files, .. } => files.iter().map(PathBuf::as_path).collect(),
            Self::Delete { from, delete } => vec![from.as_path(), delete.as_path()],
            Self::FilterLength { file, .. }
            | Self::Contains { file, .. }
            | Self::Regex { file, .. }
            | Self::StartsEnds { file, .. }
            | Self::UniqueChars { file, .. }
            | Self::Stats { file } => vec![file.as_path()],
        }
    }

    /// Check that every input exists before anything is read
    pub fn validate(&self) -> Result<()> {
        for path in self.inputs() {
            if !path.exists() {
                return Err(CrunchError::NotFound(path.to_path_buf()));
            }
        }
        Ok(())
    }

    /// Run the operation and return its line set.
    ///
    /// For `Stats` this is the raw content of the file.
    pub fn execute(&self, read: &ReadOptions, case_insensitive: bool) -> Result<Vec<String>> {
        let projection = Projection::new(case_insensitive);

        let lines = match self {
            Self::Merge { files, unique } => {
                let lists = files
                    .iter()
                    .map(|path| load(path, read))
                    .collect::<Result<Vec<_>>>()?;
                dedup::merge(lists, *unique, projection)
            }
            Self::Delete { from, delete } => {
                let reference = load(delete, read)?;
                dedup::subtract(load(from, read)?, &reference, projection)
            }
            Self::FilterLength {
                file,
                min_len,
                max_len,
            } => LengthRange::new(*min_len, *max_len).apply(load(file, read)?),
            Self::Contains { file, substring } => {
                SubstringFilter::new(substring, case_insensitive).apply(load(file, read)?)
            }
            Self::Regex { file, pattern } => {
                // Compile before touching the input
                let filter = PatternFilter::new(pattern, case_insensitive)?;
                debug!("Compiled pattern {:?}", filter.pattern_str());
                filter.apply(load(file, read)?)
            }
            Self::StartsEnds {
                file,
                starts_with,
                ends_with,
            } => AffixFilter::new(starts_with.as_deref(), ends_with.as_deref(), case_insensitive)
                .apply(load(file, read)?),
            Self::UniqueChars { file, min_unique } => {
                UniqueCharsFilter::new(*min_unique).apply(load(file, read)?)
            }
            Self::Stats { file } => load(file, read)?,
        };

        info!("{}: {} lines", self.name(), lines.len());
        Ok(lines)
    }
}

fn load(path: &Path, read: &ReadOptions) -> Result<Vec<String>> {
    Source::open(path)?.read(read)
}
