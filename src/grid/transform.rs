// src/grid/transform.rs
//
// Geometric transforms over Grid. Each transform reads its input and
// allocates a fresh output grid; the input is never mutated. Elements are
// cloned once, so flips preserve extents and rotations swap them.

use super::Grid;

impl<T: Clone> Grid<T> {
    /// Flip top-to-bottom: input row `r` becomes output row `rows - 1 - r`.
    pub fn flip_vertical(&self) -> Grid<T> {
        let mut out = self.clone();
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                out[(self.rows() - 1 - r, c)] = self[(r, c)].clone();
            }
        }
        out
    }

    /// Flip left-to-right: input column `c` becomes output column
    /// `cols - 1 - c`.
    pub fn flip_horizontal(&self) -> Grid<T> {
        let mut out = self.clone();
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                out[(r, self.cols() - 1 - c)] = self[(r, c)].clone();
            }
        }
        out
    }

    /// Rotate 90 degrees clockwise. Output extents are (cols, rows);
    /// the element at input (r, c) lands at output (c, rows - 1 - r).
    pub fn rotate_clockwise(&self) -> Grid<T> {
        let mut data = Vec::with_capacity(self.len());
        // output row-major order: output row c is input column c read
        // bottom-to-top
        for c in 0..self.cols() {
            for r in (0..self.rows()).rev() {
                data.push(self[(r, c)].clone());
            }
        }
        Grid::from_flat(self.cols(), self.rows(), data)
            .expect("rotation preserves element count")
    }

    /// Rotate 90 degrees counter-clockwise. Output extents are (cols, rows);
    /// the element at input (r, c) lands at output (cols - 1 - c, r).
    pub fn rotate_counterclockwise(&self) -> Grid<T> {
        let mut data = Vec::with_capacity(self.len());
        // output row c is input column cols - 1 - c read top-to-bottom
        for c in (0..self.cols()).rev() {
            for r in 0..self.rows() {
                data.push(self[(r, c)].clone());
            }
        }
        Grid::from_flat(self.cols(), self.rows(), data)
            .expect("rotation preserves element count")
    }
}
