// src/utilities/sequence.rs
// helpers for reordering and slicing sequences

/// All orderings of `items`. Positions are treated as distinct, so an input
/// with duplicate values still yields `n!` permutations.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut results = Vec::new();
    let mut scratch: Vec<T> = items.to_vec();
    permute(&mut scratch, 0, &mut results);
    results
}

fn permute<T: Clone>(scratch: &mut Vec<T>, start: usize, results: &mut Vec<Vec<T>>) {
    if start == scratch.len() {
        results.push(scratch.clone());
        return;
    }
    for i in start..scratch.len() {
        scratch.swap(start, i);
        permute(scratch, start + 1, results);
        scratch.swap(start, i);
    }
}

/// Consecutive chunks of `size` elements; the final chunk may be shorter.
///
/// # Panics
///
/// Panics if `size` is 0.
pub fn chunked<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    assert!(size > 0, "chunked with size 0");
    items.chunks(size).map(|chunk| chunk.to_vec()).collect()
}

/// The first element and the rest, or None if the slice is empty.
pub fn first_rest<T>(items: &[T]) -> Option<(&T, &[T])> {
    items.split_first()
}

/// The first two elements and the rest, or None if the slice has
/// fewer than two elements.
pub fn first_two_rest<T>(items: &[T]) -> Option<(&T, &T, &[T])> {
    match items {
        [first, second, rest @ ..] => Some((first, second, rest)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutations_of_three() {
        let mut result = permutations(&[1, 2, 3]);
        result.sort();
        assert_eq!(
            result,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
    }

    #[test]
    fn test_permutations_edge_sizes() {
        assert_eq!(permutations(&[7]), vec![vec![7]]);
        // the empty arrangement of zero elements
        assert_eq!(permutations::<i32>(&[]), vec![Vec::<i32>::new()]);
        assert_eq!(permutations(&[1, 2, 3, 4]).len(), 24);
    }

    #[test]
    fn test_permutations_with_duplicates() {
        // positions are distinct: [1, 1] has two orderings, not one
        assert_eq!(permutations(&[1, 1]).len(), 2);
    }

    #[test]
    fn test_chunked() {
        assert_eq!(
            chunked(&[1, 2, 3, 4, 5], 2),
            vec![vec![1, 2], vec![3, 4], vec![5]]
        );
        assert_eq!(chunked(&[1, 2], 5), vec![vec![1, 2]]);
        assert_eq!(chunked::<i32>(&[], 3), Vec::<Vec<i32>>::new());
    }

    #[test]
    #[should_panic(expected = "size 0")]
    fn test_chunked_zero_size() {
        chunked(&[1, 2], 0);
    }

    #[test]
    fn test_first_rest() {
        let items = [1, 2, 3];
        assert_eq!(first_rest(&items), Some((&1, &items[1..])));
        assert_eq!(first_rest::<i32>(&[]), None);
    }

    #[test]
    fn test_first_two_rest() {
        let items = [1, 2, 3, 4];
        let (first, second, rest) = first_two_rest(&items).unwrap();
        assert_eq!(*first, 1);
        assert_eq!(*second, 2);
        assert_eq!(rest, &[3, 4]);

        assert_eq!(first_two_rest(&[1]), None);
        assert_eq!(first_two_rest::<i32>(&[]), None);
    }
}
