// src/grid/storage.rs
//
// Rectangular 2D container for puzzle maps.
//
// Storage is a flat Vec in row-major order with (rows, cols) extents fixed
// at construction. The checked constructors reject ragged and zero-extent
// input, so every Grid that exists is rectangular and non-empty; the
// transforms in transform.rs rely on that.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has zero extent in at least one dimension")]
    Empty,

    #[error("ragged input: row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from nested rows, checking that the input is
    /// non-empty and that every row has the same width.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        if rows.is_empty() {
            return Err(GridError::Empty);
        }
        let cols = rows[0].len();
        if cols == 0 {
            return Err(GridError::Empty);
        }
        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: index,
                    expected: cols,
                    found: row.len(),
                });
            }
        }

        let row_count = rows.len();
        let data: Vec<T> = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: row_count,
            cols,
            data,
        })
    }

    /// Build a grid from a flat row-major buffer with the given extents.
    pub fn from_flat(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        if data.len() != rows * cols {
            return Err(GridError::Ragged {
                row: rows,
                expected: rows * cols,
                found: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    // total element count
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        // constructors reject zero extents, so a constructed grid never is
        self.data.is_empty()
    }

    fn index_of(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows);
        debug_assert!(col < self.cols);
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// One row of the grid as a slice.
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    // flat row-major iterator over all elements
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks(self.cols)
    }
}

impl<T: Clone> Grid<T> {
    /// A rows x cols grid with every cell set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if either extent is zero.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        assert!(rows > 0 && cols > 0, "Grid::filled with zero extent");
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }
}

impl<T> std::ops::Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[self.index_of(row, col)]
    }
}

impl<T> std::ops::IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let index = self.index_of(row, col);
        &mut self.data[index]
    }
}
