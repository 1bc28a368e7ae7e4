//! wordcrunch - wordlist swiss army knife
//!
//! Main entry point for the command-line application.

use clap::Parser;
use log::LevelFilter;
use std::io;
use std::process;

use wordcrunch::cli::Args;
use wordcrunch::error::CrunchError;
use wordcrunch::operations::Operation;
use wordcrunch::processor::{Processor, ProcessorConfig};
use wordcrunch::progress::{print_banner, print_error, print_header, print_info};
use wordcrunch::signal::setup_interrupt_handler;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging; RUST_LOG still overrides
    let level = if args.verbose {
        LevelFilter::Debug
    } else if args.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        let code = e
            .downcast_ref::<CrunchError>()
            .map_or(1, CrunchError::exit_code);
        process::exit(code);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if !args.quiet && !args.no_banner {
        print_banner();
    }

    let interrupted = setup_interrupt_handler()?;

    let operation = args.operation();
    let processor = Processor::new(ProcessorConfig::from_args(&args)).with_interrupt(interrupted);

    if args.verbose && !args.quiet {
        print_config(&operation, processor.config());
    }

    let stdout = io::stdout();
    processor.run(&operation, &mut stdout.lock())?;

    Ok(())
}

/// Print configuration summary
fn print_config(operation: &Operation, config: &ProcessorConfig) {
    print_header("Configuration");

    print_info(&format!("Operation:    {}", operation.name()));
    print_info(&format!("Inputs:       {:?}", operation.inputs()));
    print_info(&format!(
        "Output:       {}",
        config
            .output
            .as_ref()
            .map_or_else(|| "stdout".to_string(), |p| p.display().to_string())
    ));
    print_info(&format!("Ignore case:  {}", config.pipeline.case_insensitive));
    print_info(&format!("Decode:       {:?}", config.read.decode));
    if let Some(ref entry) = config.read.zip_entry {
        print_info(&format!("Zip entry:    {}", entry));
    }
    print_info(&format!(
        "Pipeline:     strip={} remove_empty={} transform={:?} filter={:?} sort={:?} reverse={}",
        config.pipeline.strip,
        config.pipeline.remove_empty,
        config.pipeline.transform,
        config.pipeline.content_filter,
        config.pipeline.sort,
        config.pipeline.reverse_sort
    ));
}
