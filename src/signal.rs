//! Ctrl-C handling
//!
//! The handler only raises a shared flag; the processor polls it between
//! stages and stops with `CrunchError::Interrupted` before any output is
//! written. A second Ctrl-C exits immediately.

use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{Result, EXIT_INTERRUPTED};
use crate::progress::print_error;

/// Install the process-wide Ctrl-C handler and return its flag
pub fn setup_interrupt_handler() -> Result<Arc<AtomicBool>> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);

    ctrlc::set_handler(move || {
        if flag.swap(true, Ordering::SeqCst) {
            print_error("Interrupted again, exiting");
            process::exit(EXIT_INTERRUPTED);
        }
    })?;

    Ok(interrupted)
}
