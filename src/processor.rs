//! Core processing engine
//!
//! Runs one primary operation end to end: input validation, the operation
//! itself, the post-processing pipeline and the output sink.

use bytesize::ByteSize;
use log::info;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::cli::Args;
use crate::error::{CrunchError, Result};
use crate::operations::Operation;
use crate::output::{EmitMode, EmitReport, OutputSink};
use crate::pipeline::{Pipeline, PipelineConfig};
use crate::progress::{create_spinner, format_duration, print_bullet, print_header, print_success, print_warning};
use crate::source::ReadOptions;
use crate::stats::{analyze, StatisticsReport};

/// Processor configuration
#[derive(Debug, Clone, Default)]
pub struct ProcessorConfig {
    pub pipeline: PipelineConfig,
    pub output: Option<PathBuf>,
    pub read: ReadOptions,
    pub quiet: bool,
}

impl ProcessorConfig {
    pub fn from_args(args: &Args) -> Self {
        let opts = &args.pipeline;
        Self {
            pipeline: PipelineConfig {
                strip: opts.strip,
                remove_empty: opts.remove_empty,
                transform: opts.transform,
                content_filter: opts.filter,
                sort: opts.sort,
                reverse_sort: opts.reverse,
                case_insensitive: opts.ignore_case,
                preview: opts.preview,
                dry_run: opts.dry_run,
            },
            output: opts.output.clone(),
            read: ReadOptions {
                decode: opts.decode,
                zip_entry: opts.zip_entry.clone(),
            },
            quiet: args.quiet,
        }
    }
}

/// Result of a processor run
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Lines went through the pipeline and the sink
    Emitted(EmitReport),
    /// Statistics were reported; `None` when the input had no lines
    Stats(Option<StatisticsReport>),
}

/// Main processor
pub struct Processor {
    config: ProcessorConfig,
    interrupted: Arc<AtomicBool>,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self {
            config,
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Poll `flag` between stages and stop with `Interrupted` once it is set
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupted = flag;
        self
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Run `op`, sending stdout-bound text to `console`
    pub fn run<W: Write>(&self, op: &Operation, console: &mut W) -> Result<Outcome> {
        op.validate()?;

        let started = Instant::now();
        let spinner = create_spinner(&format!("Running {}...", op.name()), self.config.quiet);
        let result = op.execute(&self.config.read, self.config.pipeline.case_insensitive);
        spinner.finish_and_clear();
        let lines = result?;
        self.check_interrupt()?;

        if let Operation::Stats { .. } = op {
            let report = analyze(&lines);
            let written = match report {
                Some(ref report) => report.write_report(console),
                None => writeln!(console, "No data"),
            };
            written.map_err(|e| CrunchError::write("stdout", e))?;
            return Ok(Outcome::Stats(report));
        }

        let lines = Pipeline::new(&self.config.pipeline).apply(lines);
        self.check_interrupt()?;

        if !self.config.quiet && lines.is_empty() {
            print_warning("No lines left after processing");
        }

        let sink = OutputSink::new(
            self.config.output.clone(),
            self.config.pipeline.preview,
            self.config.pipeline.dry_run,
        );

        if sink.mode() == EmitMode::DryRun && !self.config.quiet {
            self.dry_run_report(op);
        }

        let report = sink.emit(&lines, console)?;
        info!(
            "{} finished in {}",
            op.name(),
            format_duration(started.elapsed())
        );

        if !self.config.quiet && report.mode == EmitMode::Write && self.config.output.is_some() {
            print_success(&format!(
                "Wrote {} lines to {} ({})",
                report.lines,
                report.target,
                ByteSize(report.bytes_written)
            ));
        }

        Ok(Outcome::Emitted(report))
    }

    fn check_interrupt(&self) -> Result<()> {
        if self.interrupted.load(Ordering::SeqCst) {
            return Err(CrunchError::Interrupted);
        }
        Ok(())
    }

    /// List inputs and the pipeline configuration without writing anything
    fn dry_run_report(&self, op: &Operation) {
        print_header("DRY RUN - No files will be written");

        for path in op.inputs() {
            let size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
            print_bullet(&format!("Input: {:?} ({})", path, ByteSize(size)));
        }

        let pipeline = &self.config.pipeline;
        print_bullet(&format!("Operation: {}", op.name()));
        print_bullet(&format!(
            "Normalize: strip={} remove_empty={}",
            pipeline.strip, pipeline.remove_empty
        ));
        if let Some(kind) = pipeline.transform {
            print_bullet(&format!("Transform: {:?}", kind));
        }
        if let Some(class) = pipeline.content_filter {
            print_bullet(&format!("Content filter: {:?}", class));
        }
        if let Some(key) = pipeline.sort {
            print_bullet(&format!(
                "Sort: {:?}{}",
                key,
                if pipeline.reverse_sort { " (reverse)" } else { "" }
            ));
        }
    }
}
