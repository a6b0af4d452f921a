// src/lib.rs

//! Helper functions for Advent-of-Code-style puzzle solutions:
//! input parsing, small number theory, permutations and chunking,
//! and a rectangular `Grid` with flip/rotate transforms.

pub mod config;
pub mod grid;
pub mod input;
pub mod models;
pub mod utilities;

pub use config::Config;
pub use grid::{Grid, GridError};
pub use models::Point;
