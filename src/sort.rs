//! Line sorting
//!
//! All sorts are stable. Numeric sorting gives lines that do not parse as a
//! finite number a key of `+inf`, so they trail in ascending order and lead
//! in descending order.

use std::cmp::Ordering;

/// Sort key for the final ordering stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortKey {
    /// Lexicographic by character code
    Alpha,
    /// By character count
    Length,
    /// By floating-point value
    Numeric,
}

/// Numeric sort key of a line
pub fn numeric_key(line: &str) -> f64 {
    match line.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => f64::INFINITY,
    }
}

/// Sort lines by `key`, descending when `reverse` is set.
///
/// Equal keys keep their original relative order in both directions.
pub fn sort_lines(mut lines: Vec<String>, key: SortKey, reverse: bool) -> Vec<String> {
    match key {
        SortKey::Alpha => sort_by_key(&mut lines, reverse, |a, b| a.cmp(b)),
        SortKey::Length => sort_by_key(&mut lines, reverse, |a, b| {
            a.chars().count().cmp(&b.chars().count())
        }),
        SortKey::Numeric => {
            // Parse each key once
            let mut keyed: Vec<(f64, String)> = lines
                .into_iter()
                .map(|line| (numeric_key(&line), line))
                .collect();
            sort_by_key(&mut keyed, reverse, |a, b| a.0.total_cmp(&b.0));
            return keyed.into_iter().map(|(_, line)| line).collect();
        }
    }
    lines
}

fn sort_by_key<T, F>(items: &mut [T], reverse: bool, compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    if reverse {
        items.sort_by(|a, b| compare(b, a));
    } else {
        items.sort_by(compare);
    }
}
