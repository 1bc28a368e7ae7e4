//! Line normalization: whitespace stripping and empty-line removal

/// Strip surrounding whitespace and/or drop empty lines.
///
/// Stripping happens first, so whitespace-only lines are dropped when both
/// flags are set.
pub fn normalize(lines: Vec<String>, strip: bool, remove_empty: bool) -> Vec<String> {
    if !strip && !remove_empty {
        return lines;
    }

    lines
        .into_iter()
        .map(|line| if strip { line.trim().to_string() } else { line })
        .filter(|line| !(remove_empty && line.is_empty()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_strip_only() {
        let out = normalize(lines(&["  a ", "\tb", "   "]), true, false);
        assert_eq!(out, vec!["a", "b", ""]);
    }

    #[test]
    fn test_remove_empty_only() {
        let out = normalize(lines(&["a", "", "  "]), false, true);
        assert_eq!(out, vec!["a", "  "]);
    }

    #[test]
    fn test_strip_before_remove() {
        let out = normalize(lines(&[" a ", "", "   ", "b"]), true, true);
        assert_eq!(out, vec!["a", "b"]);
    }

    #[test]
    fn test_noop() {
        let input = lines(&[" a ", ""]);
        assert_eq!(normalize(input.clone(), false, false), input);
    }
}
