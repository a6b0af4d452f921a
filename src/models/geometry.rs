// src/models/geometry.rs
// Integer point type for working with puzzle coordinates

use serde::{Deserialize, Serialize};
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    // Taxicab distance between two points
    pub fn manhattan_distance(&self, other: &Point) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        let tests = vec![
            // Format: (a, b, expected)
            ((0, 0), (0, 0), 0),
            ((0, 0), (3, 4), 7),
            ((3, 4), (0, 0), 7),
            ((-2, -3), (2, 3), 10),
            ((5, -1), (-1, 5), 12),
        ];

        for (a, b, expected) in tests {
            let a = Point::from(a);
            let b = Point::from(b);
            assert_eq!(
                a.manhattan_distance(&b),
                expected,
                "Failed for {:?} -> {:?}",
                a,
                b
            );
        }
    }

    #[test]
    fn test_point_addition() {
        let a = Point::new(1, 2);
        let b = Point::new(-3, 5);
        assert_eq!(a + b, Point::new(-2, 7));
    }
}
