// src/models/mod.rs

pub mod geometry;

pub use geometry::Point;
