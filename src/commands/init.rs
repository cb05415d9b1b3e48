//! Application configuration initialization command.
//!
//! Runs the interactive setup wizard that writes the portal connection
//! settings to the configuration file.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;

/// Executes the initialization command.
///
/// Prompts for the modules to configure, writes the result to disk and
/// confirms with a success message.
pub fn cmd() -> Result<()> {
    Config::init()?.save()?;
    msg_success!(Message::ConfigSaved);
    Ok(())
}
