//! Per-line text transforms

/// Transform applied to every line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TransformKind {
    Lower,
    Upper,
    /// First character uppercased, remainder lowercased
    Capitalize,
    /// Character order reversed within the line
    Reverse,
}

impl TransformKind {
    pub fn apply(self, line: &str) -> String {
        match self {
            Self::Lower => line.to_lowercase(),
            Self::Upper => line.to_uppercase(),
            Self::Capitalize => capitalize(line),
            Self::Reverse => line.chars().rev().collect(),
        }
    }
}

fn capitalize(line: &str) -> String {
    let mut chars = line.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out: String = first.to_uppercase().collect();
    out.push_str(&chars.as_str().to_lowercase());
    out
}

/// Apply `kind` to every line, or pass lines through when no transform is set
pub fn transform(lines: Vec<String>, kind: Option<TransformKind>) -> Vec<String> {
    match kind {
        Some(kind) => lines.iter().map(|line| kind.apply(line)).collect(),
        None => lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_transforms() {
        assert_eq!(TransformKind::Lower.apply("PassWord"), "password");
        assert_eq!(TransformKind::Upper.apply("PassWord"), "PASSWORD");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(TransformKind::Capitalize.apply("pASSWORD"), "Password");
        assert_eq!(TransformKind::Capitalize.apply("1abc"), "1abc");
        assert_eq!(TransformKind::Capitalize.apply(""), "");
    }

    #[test]
    fn test_reverse_within_line() {
        let out = transform(
            vec!["abc".to_string(), "héllo".to_string()],
            Some(TransformKind::Reverse),
        );
        assert_eq!(out, vec!["cba", "olléh"]);
    }

    #[test]
    fn test_none_passes_through() {
        let input = vec!["MiXeD".to_string()];
        assert_eq!(transform(input.clone(), None), input);
    }
}
