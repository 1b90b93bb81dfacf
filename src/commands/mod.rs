// src/commands/mod.rs
//! Command handlers for the isoplug CLI

mod applicable;
mod plugins;
mod validate;

pub use applicable::cmd_applicable;
pub use plugins::cmd_plugins;
pub use validate::{cmd_validate_distributor, cmd_validate_importer};
