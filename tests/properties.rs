//! Property-based tests for the set operations, filters and sorter
//!
//! These exercise the pure line-set functions directly; file reading is
//! covered by the end-to-end tests.

use proptest::prelude::*;

use wordcrunch::dedup::{merge, subtract, Projection};
use wordcrunch::filter::{LengthRange, LineFilter};
use wordcrunch::sort::{sort_lines, SortKey};

/// Short words from a small alphabet so duplicates are common
fn word_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[a-cA-C]{0,4}", "[0-9]{1,3}", "[a-z0-9 ]{0,6}",]
}

fn list_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..20)
}

fn projection_strategy() -> impl Strategy<Value = Projection> {
    prop_oneof![Just(Projection::Exact), Just(Projection::CaseFolded)]
}

fn sort_key_strategy() -> impl Strategy<Value = SortKey> {
    prop_oneof![Just(SortKey::Alpha), Just(SortKey::Length), Just(SortKey::Numeric)]
}

fn sorted_copy(lines: &[String]) -> Vec<String> {
    let mut copy = lines.to_vec();
    copy.sort();
    copy
}

proptest! {
    #[test]
    fn merge_without_unique_concatenates(lists in prop::collection::vec(list_strategy(), 0..5)) {
        let expected: Vec<String> = lists.iter().flatten().cloned().collect();
        let merged = merge(lists, false, Projection::Exact);
        prop_assert_eq!(merged, expected);
    }

    #[test]
    fn merge_unique_keeps_first_occurrences(
        lists in prop::collection::vec(list_strategy(), 0..5),
        projection in projection_strategy(),
    ) {
        let all: Vec<String> = lists.iter().flatten().cloned().collect();
        let merged = merge(lists, true, projection);

        // Each projection appears exactly once
        let keys: Vec<String> = merged.iter().map(|l| projection.key(l).into_owned()).collect();
        let mut unique_keys = keys.clone();
        unique_keys.sort();
        unique_keys.dedup();
        prop_assert_eq!(keys.len(), unique_keys.len());

        // And at the position of its first occurrence
        let mut expected = Vec::new();
        let mut seen = Vec::new();
        for line in &all {
            let key = projection.key(line).into_owned();
            if !seen.contains(&key) {
                seen.push(key);
                expected.push(line.clone());
            }
        }
        prop_assert_eq!(merged, expected);
    }

    #[test]
    fn delete_removes_exactly_reference_lines(
        primary in list_strategy(),
        reference in list_strategy(),
        projection in projection_strategy(),
    ) {
        let reference_keys: Vec<String> =
            reference.iter().map(|l| projection.key(l).into_owned()).collect();
        let expected: Vec<String> = primary
            .iter()
            .filter(|l| !reference_keys.contains(&projection.key(l).into_owned()))
            .cloned()
            .collect();

        let once = subtract(primary, &reference, projection);
        prop_assert_eq!(&once, &expected);

        let twice = subtract(once.clone(), &reference, projection);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn filter_length_respects_bounds(lines in list_strategy(), min in 0usize..8, max in 0usize..8) {
        let kept = LengthRange::new(min, max).apply(lines);

        if min > max {
            prop_assert!(kept.is_empty());
        }
        for line in &kept {
            let len = line.chars().count();
            prop_assert!(min <= len && len <= max);
        }
    }

    #[test]
    fn alpha_sort_is_idempotent(lines in list_strategy(), reverse in any::<bool>()) {
        let once = sort_lines(lines, SortKey::Alpha, reverse);
        let twice = sort_lines(once.clone(), SortKey::Alpha, reverse);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn sort_preserves_multiset(
        lines in list_strategy(),
        key in sort_key_strategy(),
        reverse in any::<bool>(),
    ) {
        let sorted = sort_lines(lines.clone(), key, reverse);
        prop_assert_eq!(sorted_copy(&sorted), sorted_copy(&lines));
    }
}
