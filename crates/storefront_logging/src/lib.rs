#![deny(missing_docs)]
//! Shared logging utilities for the storefront workspace.
//!
//! The `storefront_*` macros forward to the `log` facade and prefix every record
//! emitted while a message is being dispatched with `[dispatch N] `, so a log
//! line can be traced back to the transition that produced it.

use std::cell::Cell;
use std::fmt;

thread_local! {
    /// Sequence number of the message being dispatched on this thread, 0 when idle.
    static DISPATCH_SEQ: Cell<u64> = const { Cell::new(0) };
}

/// Marks the current thread as dispatching message `seq` until dropped.
#[must_use = "the dispatch tag is cleared when the scope is dropped"]
pub struct DispatchScope {
    previous: u64,
}

impl Drop for DispatchScope {
    fn drop(&mut self) {
        DISPATCH_SEQ.with(|v| v.set(self.previous));
    }
}

/// Tag subsequent records on this thread with `seq`.
pub fn enter_dispatch(seq: u64) -> DispatchScope {
    let previous = DISPATCH_SEQ.with(|v| v.replace(seq));
    DispatchScope { previous }
}

/// Log prefix for the current thread. Renders nothing outside a dispatch.
#[derive(Debug, Clone, Copy)]
pub struct DispatchTag(u64);

impl DispatchTag {
    /// Tag for the message currently dispatched on this thread.
    pub fn current() -> Self {
        DispatchTag(DISPATCH_SEQ.with(|v| v.get()))
    }
}

impl fmt::Display for DispatchTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => Ok(()),
            seq => write!(f, "[dispatch {seq}] "),
        }
    }
}

/// Logs a trace-level message tagged with the current dispatch.
#[macro_export]
macro_rules! storefront_trace {
    ($($arg:tt)*) => {{
        log::trace!("{}{}", $crate::DispatchTag::current(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message tagged with the current dispatch.
#[macro_export]
macro_rules! storefront_info {
    ($($arg:tt)*) => {{
        log::info!("{}{}", $crate::DispatchTag::current(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message tagged with the current dispatch.
#[macro_export]
macro_rules! storefront_debug {
    ($($arg:tt)*) => {{
        log::debug!("{}{}", $crate::DispatchTag::current(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message tagged with the current dispatch.
#[macro_export]
macro_rules! storefront_warn {
    ($($arg:tt)*) => {{
        log::warn!("{}{}", $crate::DispatchTag::current(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message tagged with the current dispatch.
#[macro_export]
macro_rules! storefront_error {
    ($($arg:tt)*) => {{
        log::error!("{}{}", $crate::DispatchTag::current(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may have installed the logger already.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
