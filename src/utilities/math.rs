// src/utilities/math.rs
// small number-theory helpers that come up in puzzle solutions

/// Greatest common divisor by Euclid's algorithm.
/// `gcd(0, b)` is `b` and `gcd(a, 0)` is `a`.
pub fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple. `lcm(0, _)` and `lcm(_, 0)` are 0.
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

/// Smallest of the given items.
///
/// # Panics
///
/// Panics if `items` is empty.
pub fn min_of_many<T: Ord + Copy>(items: &[T]) -> T {
    assert!(!items.is_empty(), "min_of_many on empty slice");
    items.iter().copied().fold(items[0], T::min)
}

/// Largest of the given items.
///
/// # Panics
///
/// Panics if `items` is empty.
pub fn max_of_many<T: Ord + Copy>(items: &[T]) -> T {
    assert!(!items.is_empty(), "max_of_many on empty slice");
    items.iter().copied().fold(items[0], T::max)
}
