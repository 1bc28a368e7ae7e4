//! Deduplication and set operations over wordlists
//!
//! Lines are compared through a [`Projection`]: either their exact text or
//! a lowercase folding. Output always keeps the original line text.

use ahash::RandomState;
use hashbrown::HashSet;
use log::debug;
use std::borrow::Cow;

/// Value used for equality checks between lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    /// Compare lines byte for byte
    #[default]
    Exact,
    /// Compare lowercase-folded lines
    CaseFolded,
}

impl Projection {
    pub fn new(case_insensitive: bool) -> Self {
        if case_insensitive {
            Self::CaseFolded
        } else {
            Self::Exact
        }
    }

    #[inline]
    pub fn key<'a>(&self, line: &'a str) -> Cow<'a, str> {
        match self {
            Self::Exact => Cow::Borrowed(line),
            Self::CaseFolded => Cow::Owned(line.to_lowercase()),
        }
    }
}

/// Set of already-seen projection keys
pub struct SeenSet {
    set: HashSet<String, RandomState>,
    projection: Projection,
}

impl SeenSet {
    pub fn new(projection: Projection) -> Self {
        Self::with_capacity(projection, 0)
    }

    pub fn with_capacity(projection: Projection, capacity: usize) -> Self {
        Self {
            set: HashSet::with_capacity_and_hasher(capacity, RandomState::new()),
            projection,
        }
    }

    /// Record a line; returns true if its projection was not seen before
    pub fn insert(&mut self, line: &str) -> bool {
        let key = self.projection.key(line);
        if self.set.contains(key.as_ref()) {
            return false;
        }
        self.set.insert(key.into_owned())
    }

    /// Check if a line's projection was already recorded
    pub fn contains(&self, line: &str) -> bool {
        self.set.contains(self.projection.key(line).as_ref())
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

/// Concatenate lists in order; with `unique`, keep the first occurrence of
/// each projection in first-seen order.
pub fn merge(lists: Vec<Vec<String>>, unique: bool, projection: Projection) -> Vec<String> {
    let total: usize = lists.iter().map(Vec::len).sum();
    let mut merged = Vec::with_capacity(total);

    if !unique {
        for list in lists {
            merged.extend(list);
        }
        return merged;
    }

    let mut seen = SeenSet::with_capacity(projection, total);
    for line in lists.into_iter().flatten() {
        if seen.insert(&line) {
            merged.push(line);
        }
    }
    merged
}

/// Lines of `primary` whose projection does not appear in `reference`
pub fn subtract(primary: Vec<String>, reference: &[String], projection: Projection) -> Vec<String> {
    let mut excluded = SeenSet::with_capacity(projection, reference.len());
    for line in reference {
        excluded.insert(line);
    }
    if excluded.is_empty() {
        return primary;
    }
    debug!("Excluding {} distinct lines", excluded.len());

    primary
        .into_iter()
        .filter(|line| !excluded.contains(line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_seen_set_exact() {
        let mut seen = SeenSet::new(Projection::Exact);

        assert!(seen.insert("test1"));
        assert!(seen.insert("Test1"));
        assert!(!seen.insert("test1"));

        assert_eq!(seen.len(), 2);
        assert!(seen.contains("test1"));
        assert!(!seen.contains("test3"));
    }

    #[test]
    fn test_seen_set_case_folded() {
        let mut seen = SeenSet::new(Projection::CaseFolded);

        assert!(seen.insert("Admin"));
        assert!(!seen.insert("ADMIN"));
        assert!(seen.contains("admin"));
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn test_merge_keeps_everything() {
        let out = merge(
            vec![lines(&["a", "b"]), lines(&["b", "c"])],
            false,
            Projection::Exact,
        );
        assert_eq!(out, vec!["a", "b", "b", "c"]);
    }

    #[test]
    fn test_merge_unique_first_seen_order() {
        let out = merge(
            vec![lines(&["b", "a", "b"]), lines(&["c", "a", "d"])],
            true,
            Projection::Exact,
        );
        assert_eq!(out, vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_merge_unique_case_folded_keeps_original() {
        let out = merge(
            vec![lines(&["Admin", "root"]), lines(&["ADMIN", "Root", "guest"])],
            true,
            Projection::CaseFolded,
        );
        assert_eq!(out, vec!["Admin", "root", "guest"]);
    }

    #[test]
    fn test_subtract() {
        let out = subtract(
            lines(&["admin", "root", "guest", "root"]),
            &lines(&["root"]),
            Projection::Exact,
        );
        assert_eq!(out, vec!["admin", "guest"]);
    }

    #[test]
    fn test_subtract_case_folded() {
        let out = subtract(
            lines(&["Admin", "root", "GUEST"]),
            &lines(&["admin", "guest"]),
            Projection::CaseFolded,
        );
        assert_eq!(out, vec!["root"]);

        let out = subtract(
            lines(&["Admin", "root"]),
            &lines(&["admin"]),
            Projection::Exact,
        );
        assert_eq!(out, vec!["Admin", "root"]);
    }

    #[test]
    fn test_subtract_empty_reference() {
        let primary = lines(&["b", "a", "b"]);
        assert_eq!(subtract(primary.clone(), &[], Projection::Exact), primary);

        let seen = SeenSet::new(Projection::Exact);
        assert!(seen.is_empty());
    }
}
