//! Parsing of `mfpga.toml` case configuration files.
//!
//! A configuration names one benchmark case (the directory holding the four
//! input files) and where reports are written.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{find_config, load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
