//! Line filtering module
//!
//! Predicates that keep or drop individual lines: length ranges, substrings,
//! regex patterns, prefixes/suffixes, distinct-character counts and content
//! classes.

use hashbrown::HashSet;
use regex::{Regex, RegexBuilder};

use crate::error::{CrunchError, Result};

/// A predicate over a single line
pub trait LineFilter {
    /// Check if a line should be kept
    fn matches(&self, line: &str) -> bool;

    /// Keep matching lines, preserving order
    fn apply(&self, lines: Vec<String>) -> Vec<String> {
        lines.into_iter().filter(|line| self.matches(line)).collect()
    }
}

/// Inclusive character-length range
#[derive(Debug, Clone, Copy)]
pub struct LengthRange {
    pub min: usize,
    pub max: usize,
}

impl LengthRange {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

impl LineFilter for LengthRange {
    #[inline]
    fn matches(&self, line: &str) -> bool {
        // Byte length equals char count for ASCII
        let len = if line.is_ascii() {
            line.len()
        } else {
            line.chars().count()
        };
        self.min <= len && len <= self.max
    }
}

/// Substring containment
#[derive(Debug, Clone)]
pub struct SubstringFilter {
    needle: String,
    case_insensitive: bool,
}

impl SubstringFilter {
    pub fn new(needle: &str, case_insensitive: bool) -> Self {
        let needle = if case_insensitive {
            needle.to_lowercase()
        } else {
            needle.to_string()
        };
        Self {
            needle,
            case_insensitive,
        }
    }
}

impl LineFilter for SubstringFilter {
    fn matches(&self, line: &str) -> bool {
        if self.case_insensitive {
            line.to_lowercase().contains(&self.needle)
        } else {
            line.contains(&self.needle)
        }
    }
}

/// Regex search anywhere in the line
#[derive(Debug, Clone)]
pub struct PatternFilter {
    pattern: Regex,
}

impl PatternFilter {
    pub fn new(pattern: &str, case_insensitive: bool) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|source| CrunchError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;

        Ok(Self { pattern: regex })
    }

    pub fn pattern_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl LineFilter for PatternFilter {
    #[inline]
    fn matches(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

/// Prefix and/or suffix constraint; an absent constraint always passes
#[derive(Debug, Clone)]
pub struct AffixFilter {
    prefix: Option<String>,
    suffix: Option<String>,
    case_insensitive: bool,
}

impl AffixFilter {
    pub fn new(prefix: Option<&str>, suffix: Option<&str>, case_insensitive: bool) -> Self {
        let fold = |s: &str| {
            if case_insensitive {
                s.to_lowercase()
            } else {
                s.to_string()
            }
        };

        Self {
            prefix: prefix.map(fold),
            suffix: suffix.map(fold),
            case_insensitive,
        }
    }
}

impl LineFilter for AffixFilter {
    fn matches(&self, line: &str) -> bool {
        let folded;
        let line = if self.case_insensitive {
            folded = line.to_lowercase();
            folded.as_str()
        } else {
            line
        };

        self.prefix.as_deref().map_or(true, |p| line.starts_with(p))
            && self.suffix.as_deref().map_or(true, |s| line.ends_with(s))
    }
}

/// Minimum number of distinct characters, counted case-insensitively
#[derive(Debug, Clone, Copy)]
pub struct UniqueCharsFilter {
    min_unique: usize,
}

impl UniqueCharsFilter {
    pub fn new(min_unique: usize) -> Self {
        Self { min_unique }
    }
}

/// Number of distinct characters in the lowercased line
pub fn distinct_chars(line: &str) -> usize {
    line.to_lowercase().chars().collect::<HashSet<char>>().len()
}

impl LineFilter for UniqueCharsFilter {
    fn matches(&self, line: &str) -> bool {
        distinct_chars(line) >= self.min_unique
    }
}

/// Content class filter applied by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ContentClass {
    /// Non-empty and only decimal digits
    Digits,
    /// Non-empty and only alphabetic characters
    Alpha,
    /// At least one non-alphanumeric character
    #[value(alias = "has_special")]
    HasSpecial,
    /// At least one uppercase letter
    #[value(alias = "has_upper")]
    HasUpper,
    /// At least one decimal digit
    #[value(alias = "has_number")]
    HasNumber,
}

impl LineFilter for ContentClass {
    fn matches(&self, line: &str) -> bool {
        match self {
            Self::Digits => !line.is_empty() && line.chars().all(|c| c.is_ascii_digit()),
            Self::Alpha => !line.is_empty() && line.chars().all(char::is_alphabetic),
            Self::HasSpecial => has_special(line),
            Self::HasUpper => line.chars().any(char::is_uppercase),
            Self::HasNumber => line.chars().any(|c| c.is_ascii_digit()),
        }
    }
}

#[inline]
pub(crate) fn has_special(line: &str) -> bool {
    line.chars().any(|c| !c.is_alphanumeric())
}
