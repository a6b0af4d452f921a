// src/grid/mod.rs

pub mod storage;
pub mod transform;

pub use storage::{Grid, GridError};
