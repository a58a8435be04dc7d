//! Command handlers.
//!
//! This module contains handlers for the generate, push, describe and config
//! commands.

pub mod config;
pub mod describe;
pub mod generate;
pub mod push;

pub use config::run_config;
pub use describe::{load_data, run_describe};
pub use generate::{generate_data, run_generate, GenerateOpts};
pub use push::{run_push, PushCommandArgs};
