//! # wordcrunch
//!
//! Wordlist swiss army knife: merge, deduplicate, delete, filter, transform
//! and sort line-based wordlists.
//!
//! ## Features
//!
//! - **Multi-format input**: plain text, gzip, or the first `.txt` entry of a zip archive
//! - **Set operations**: merge with optional deduplication, delete-by-reference
//! - **Filters**: length range, substring, regex, prefix/suffix, distinct characters
//! - **Pipeline**: normalize → transform → content-class filter → sort
//! - **Statistics**: counts, duplicates, length distribution, character classes
//!
//! ## Usage
//!
//! ```bash
//! # Merge and deduplicate, case-insensitively
//! wordcrunch merge a.txt b.txt.gz --unique -i -o merged.txt
//!
//! # Remove entries of one list from another
//! wordcrunch delete candidates.txt tried.txt
//!
//! # Words of 8-12 characters, sorted by length
//! wordcrunch filter-length words.txt 8 12 --sort length
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use wordcrunch::operations::Operation;
//! use wordcrunch::pipeline::PipelineConfig;
//! use wordcrunch::processor::{Processor, ProcessorConfig};
//! use wordcrunch::sort::SortKey;
//! use std::path::PathBuf;
//!
//! let config = ProcessorConfig {
//!     pipeline: PipelineConfig {
//!         strip: true,
//!         remove_empty: true,
//!         sort: Some(SortKey::Alpha),
//!         ..Default::default()
//!     },
//!     output: Some(PathBuf::from("merged.txt")),
//!     ..Default::default()
//! };
//!
//! let op = Operation::Merge {
//!     files: vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")],
//!     unique: true,
//! };
//!
//! let processor = Processor::new(config);
//! processor.run(&op, &mut std::io::stdout()).unwrap();
//! ```

pub mod cli;
pub mod dedup;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod operations;
pub mod output;
pub mod pipeline;
pub mod processor;
pub mod progress;
pub mod signal;
pub mod sort;
pub mod source;
pub mod stats;
pub mod transform;

pub use cli::Args;
pub use error::{CrunchError, Result};
pub use operations::Operation;
pub use pipeline::{Pipeline, PipelineConfig};
pub use processor::{Outcome, Processor, ProcessorConfig};
