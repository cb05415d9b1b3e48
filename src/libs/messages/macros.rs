//! Messaging macros with conditional tracing support.
//!
//! Every user-facing line in obra goes through one of the `msg_*` macros.
//! The macros route output based on the runtime mode:
//!
//! - **Normal mode**: plain `println!`/`eprintln!` for clean console output.
//! - **Debug mode**: the `tracing` system, so messages interleave correctly
//!   with structured diagnostics (absorbed record defects, request traces).
//!
//! Debug mode is enabled when either `OBRA_DEBUG` or `RUST_LOG` is set in the
//! environment. Detection happens once and is cached.
//!
//! ## Macro Categories
//!
//! - `msg_print!` — general message display
//! - `msg_success!` / `msg_info!` / `msg_warning!` — prefixed notifications
//! - `msg_error!` — error display on stderr (or `tracing::error!`)
//! - `msg_debug!` — diagnostics, suppressed entirely outside debug mode
//! - `msg_bail_anyhow!` — return early with an `anyhow::Error` built from a
//!   [`Message`](super::Message)
//!
//! ## Usage
//!
//! ```rust
//! use obra::{msg_success, msg_error};
//! use obra::libs::messages::Message;
//!
//! msg_success!(Message::ConfigSaved);
//! msg_error!(Message::ProjectNotFound("p1".to_string()));
//! ```

use std::sync::OnceLock;

/// Cached result of debug mode detection.
///
/// Environment variables are checked exactly once per process; every later
/// call is a plain memory read.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks whether debug mode is enabled.
///
/// Debug mode is on when `OBRA_DEBUG` or `RUST_LOG` is set. The result is
/// cached for the lifetime of the process, so toggling the variables after
/// the first message has no effect.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("OBRA_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a general message, optionally padded with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with a ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error message with a ❌ prefix.
///
/// Normal mode writes to stderr so report output stays pipeable.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a warning message with a ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

/// Prints an informational message with an ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Debug-only diagnostics with a 🔍 prefix.
///
/// Entirely suppressed outside debug mode. This is the channel the report
/// generators use for absorbed per-record defects, so a debug run shows
/// which records were skipped for which metric.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Returns early from the enclosing function with an error built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
