//! Core types for msgproc
//!
//! Domain types and tunables shared by the storage layer and the CLI.

mod constants;
mod env_config;
mod message;

pub use constants::*;
pub use env_config::env_parse_with_default;
pub use message::Message;
