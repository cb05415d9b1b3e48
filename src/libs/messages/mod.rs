//! Centralized message system for user-facing output.
//!
//! Every string the application prints lives in the [`Message`] catalog;
//! the `msg_*` macros route it to stdout, stderr or the tracing layer
//! depending on severity and debug mode.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
