//! Command-line interface definition for wordcrunch
//!
//! One subcommand selects the primary operation; the shared options shape
//! the post-processing pipeline and output.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::filter::ContentClass;
use crate::operations::Operation;
use crate::sort::SortKey;
use crate::source::DecodeMode;
use crate::transform::TransformKind;

/// Wordlist swiss army knife
///
/// Merge, deduplicate, delete, filter, transform and sort wordlists.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wordcrunch",
    version,
    about = "Wordlist swiss army knife - merge, delete, filter, transform and sort wordlists",
    long_about = r#"
Merge, deduplicate, delete and filter line-based wordlists. Inputs may be
plain text, gzip (.gz) or a zip archive (.zip) holding a .txt entry.

Every operation's result runs through the same post-processing chain:
    normalize (--strip, --remove-empty)
    -> transform (--transform)
    -> content filter (--filter)
    -> sort (--sort, --reverse)

EXAMPLES:
    # Merge two lists, dropping duplicates regardless of case
    wordcrunch merge rockyou.txt extra.txt.gz --unique -i -o merged.txt

    # Remove already-tried passwords
    wordcrunch delete candidates.txt tried.txt -o remaining.txt

    # Words of 8 to 12 characters, lowercased and sorted by length
    wordcrunch filter-length words.zip 8 12 --transform lower --sort length

    # Preview lines starting with "admin"
    wordcrunch starts-ends users.txt --starts-with admin --preview

    # Statistics for a list
    wordcrunch stats rockyou.txt
"#
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Quiet mode - no banner or status messages
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Do not print the banner
    #[arg(long, global = true, default_value_t = false)]
    pub no_banner: bool,
}

/// Primary operations
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Merge multiple wordlists
    Merge {
        /// Input files, read in order
        #[arg(required = true, value_name = "FILES")]
        files: Vec<PathBuf>,

        /// Keep only the first occurrence of each line
        #[arg(long, default_value_t = false)]
        unique: bool,
    },

    /// Remove entries of one list that appear in another
    Delete {
        /// List to remove entries from
        from_file: PathBuf,
        /// Entries to remove
        delete_file: PathBuf,
    },

    /// Keep lines whose length is within MIN_LEN..=MAX_LEN
    FilterLength {
        file: PathBuf,
        min_len: usize,
        max_len: usize,
    },

    /// Keep lines containing a substring
    Contains { file: PathBuf, substring: String },

    /// Keep lines matching a regex pattern
    Regex { file: PathBuf, pattern: String },

    /// Keep lines with a given prefix and/or suffix
    StartsEnds {
        file: PathBuf,

        /// Required prefix
        #[arg(long, value_name = "PREFIX")]
        starts_with: Option<String>,

        /// Required suffix
        #[arg(long, value_name = "SUFFIX")]
        ends_with: Option<String>,
    },

    /// Keep lines with at least MIN_UNIQUE distinct characters
    UniqueChars { file: PathBuf, min_unique: usize },

    /// Show statistics for a wordlist
    Stats { file: PathBuf },
}

/// Options shared by every operation
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct PipelineArgs {
    /// Case-insensitive comparison
    #[arg(short, long, global = true, default_value_t = false)]
    pub ignore_case: bool,

    /// Output file (default: stdout)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Sort the output
    #[arg(long, global = true, value_enum, value_name = "KEY")]
    pub sort: Option<SortKey>,

    /// Reverse the sort order
    #[arg(short, long, global = true, default_value_t = false)]
    pub reverse: bool,

    /// Strip leading and trailing whitespace
    #[arg(long, global = true, default_value_t = false)]
    pub strip: bool,

    /// Remove empty lines
    #[arg(long, global = true, default_value_t = false)]
    pub remove_empty: bool,

    /// Transform every line
    #[arg(long, global = true, value_enum, value_name = "KIND")]
    pub transform: Option<TransformKind>,

    /// Keep only lines of a content class
    #[arg(long, global = true, value_enum, value_name = "CLASS")]
    pub filter: Option<ContentClass>,

    /// Show the first 10 result lines instead of writing
    #[arg(long, global = true, default_value_t = false)]
    pub preview: bool,

    /// Report what would be written without writing
    #[arg(long, global = true, default_value_t = false)]
    pub dry_run: bool,

    /// Handling of malformed UTF-8 in inputs
    #[arg(long, global = true, value_enum, default_value_t = DecodeMode::Lossy)]
    pub decode: DecodeMode,

    /// Entry to read from zip inputs (default: first .txt entry)
    #[arg(long, global = true, value_name = "NAME")]
    pub zip_entry: Option<String>,
}

impl Args {
    /// The primary operation selected on the command line
    pub fn operation(&self) -> Operation {
        match self.command.clone() {
            Command::Merge { files, unique } => Operation::Merge { files, unique },
            Command::Delete {
                from_file,
                delete_file,
            } => Operation::Delete {
                from: from_file,
                delete: delete_file,
            },
            Command::FilterLength {
                file,
                min_len,
                max_len,
            } => Operation::FilterLength {
                file,
                min_len,
                max_len,
            },
            Command::Contains { file, substring } => Operation::Contains { file, substring },
            Command::Regex { file, pattern } => Operation::Regex { file, pattern },
            Command::StartsEnds {
                file,
                starts_with,
                ends_with,
            } => Operation::StartsEnds {
                file,
                starts_with,
                ends_with,
            },
            Command::UniqueChars { file, min_unique } => Operation::UniqueChars { file, min_unique },
            Command::Stats { file } => Operation::Stats { file },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("wordcrunch").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_merge_with_shared_options() {
        let args = parse(&["merge", "a.txt", "b.txt.gz", "--unique", "-i", "-o", "out.txt"]);

        assert_eq!(
            args.operation(),
            Operation::Merge {
                files: vec![PathBuf::from("a.txt"), PathBuf::from("b.txt.gz")],
                unique: true,
            }
        );
        assert!(args.pipeline.ignore_case);
        assert_eq!(args.pipeline.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_options_before_subcommand() {
        let args = parse(&["--sort", "numeric", "-r", "filter-length", "w.txt", "4", "8"]);

        assert_eq!(args.pipeline.sort, Some(SortKey::Numeric));
        assert!(args.pipeline.reverse);
        assert_eq!(
            args.operation(),
            Operation::FilterLength {
                file: PathBuf::from("w.txt"),
                min_len: 4,
                max_len: 8,
            }
        );
    }

    #[test]
    fn test_value_enums() {
        let args = parse(&[
            "contains", "w.txt", "ab", "--transform", "capitalize", "--filter", "has_special",
            "--decode", "strict",
        ]);

        assert_eq!(args.pipeline.transform, Some(TransformKind::Capitalize));
        assert_eq!(args.pipeline.filter, Some(ContentClass::HasSpecial));
        assert_eq!(args.pipeline.decode, DecodeMode::Strict);

        let args = parse(&["stats", "w.txt", "--filter", "has-upper"]);
        assert_eq!(args.pipeline.filter, Some(ContentClass::HasUpper));
    }

    #[test]
    fn test_starts_ends() {
        let args = parse(&["starts-ends", "w.txt", "--ends-with", "123"]);
        assert_eq!(
            args.operation(),
            Operation::StartsEnds {
                file: PathBuf::from("w.txt"),
                starts_with: None,
                ends_with: Some("123".to_string()),
            }
        );
    }

    #[test]
    fn test_merge_requires_files() {
        assert!(Args::try_parse_from(["wordcrunch", "merge"]).is_err());
    }
}
