//! Diagnostic logging for the request lifecycle.
//!
//! Failure causes are never shown in the user-facing error banner; they go
//! through `verbose!` instead. Enable with `set_verbose(true)` (the CLI
//! wires this to its `--verbose` flag).

use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enable or disable diagnostic output
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::SeqCst);
}

/// Check if diagnostic output is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Log a formatted message to stderr if diagnostic output is enabled
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::verbose::is_verbose() {
            eprintln!("[audscript] {}", format!($($arg)*));
        }
    };
}
