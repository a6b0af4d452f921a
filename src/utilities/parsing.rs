// src/utilities/parsing.rs
// a collection of helpers for turning raw puzzle text into numbers and lines

use std::fmt::Display;

/// Every decimal digit character of `s`, in order. Non-digits are skipped.
pub fn digits(s: &str) -> Vec<u32> {
    s.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Split on `delimiter` and parse each token as an integer.
/// Tokens that do not parse are silently skipped.
pub fn split_ints(s: &str, delimiter: &str) -> Vec<i64> {
    s.split(delimiter)
        .filter_map(|token| token.trim().parse::<i64>().ok())
        .collect()
}

/// Every signed integer embedded anywhere in `s`, in order of appearance.
/// Handles inputs like "pos=<-3, 14> r=7" without tokenizing first.
pub fn extract_ints(s: &str) -> Vec<i64> {
    let re = regex::Regex::new(r"-?\d+").expect("integer pattern is valid");
    re.find_iter(s)
        .filter_map(|m| m.as_str().parse::<i64>().ok())
        .collect()
}

/// Split into lines on any of `\r`, `\n`, `\r\n`, dropping blank and
/// whitespace-only lines. Set `trim` to also trim the surviving lines.
pub fn split_by_newline(input: &str, trim: bool) -> Vec<&str> {
    input
        .split(['\r', '\n'])
        .map(|line| if trim { line.trim() } else { line })
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// The characters of `s` in reverse order.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Concatenate the display form of every item, no separator.
pub fn join_as_strings<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    items.into_iter().map(|item| item.to_string()).collect()
}
