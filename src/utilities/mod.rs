// src/utilities/mod.rs

pub mod math;
pub mod parsing;
pub mod sequence;

pub use math::{gcd, lcm, max_of_many, min_of_many};
pub use parsing::{digits, extract_ints, join_as_strings, reverse, split_by_newline, split_ints};
pub use sequence::{chunked, first_rest, first_two_rest, permutations};
