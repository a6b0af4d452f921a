// src/config/mod.rs

pub mod config_load;

pub use config_load::{Config, ConfigError, PathConfig};
