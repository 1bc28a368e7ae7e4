//! Post-processing pipeline
//!
//! Every primary operation's result runs through the same fixed chain:
//! normalize → transform → content-class filter → sort. Unconfigured stages
//! pass lines through unchanged.

use log::debug;

use crate::filter::{ContentClass, LineFilter};
use crate::normalize::normalize;
use crate::sort::{sort_lines, SortKey};
use crate::transform::{transform, TransformKind};

/// Options shared by every operation, built once per invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    pub strip: bool,
    pub remove_empty: bool,
    pub transform: Option<TransformKind>,
    pub content_filter: Option<ContentClass>,
    pub sort: Option<SortKey>,
    pub reverse_sort: bool,
    pub case_insensitive: bool,
    pub preview: bool,
    pub dry_run: bool,
}

/// The fixed post-processing chain
pub struct Pipeline<'a> {
    config: &'a PipelineConfig,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a PipelineConfig) -> Self {
        Self { config }
    }

    pub fn apply(&self, lines: Vec<String>) -> Vec<String> {
        let config = self.config;

        let lines = stage("normalize", lines, |lines| {
            normalize(lines, config.strip, config.remove_empty)
        });
        let lines = stage("transform", lines, |lines| transform(lines, config.transform));
        let lines = stage("content filter", lines, |lines| match config.content_filter {
            Some(class) => class.apply(lines),
            None => lines,
        });
        stage("sort", lines, |lines| match config.sort {
            Some(key) => sort_lines(lines, key, config.reverse_sort),
            None => lines,
        })
    }
}

fn stage<F>(name: &str, lines: Vec<String>, run: F) -> Vec<String>
where
    F: FnOnce(Vec<String>) -> Vec<String>,
{
    let before = lines.len();
    let after = run(lines);
    debug!("Stage {}: {} -> {} lines", name, before, after.len());
    after
}
