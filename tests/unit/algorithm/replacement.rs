//! Tests for combinations with replacement, including lengths beyond the source

#[cfg(test)]
mod tests {
    use itergen::algorithm::length::Length;
    use itergen::algorithm::replacement::combinations_with_replacement;

    // Tests pairs over two elements
    // Verified by incrementing only the pivot without levelling the tail
    #[test]
    fn test_pairs_with_replacement() {
        let result: Vec<Vec<i32>> =
            combinations_with_replacement(&[1, 2], Length::Exactly(2)).collect();
        assert_eq!(result, vec![vec![1, 1], vec![1, 2], vec![2, 2]]);
    }

    // Tests length greater than the source is allowed
    // Verified by rejecting lengths above the source length
    #[test]
    fn test_length_may_exceed_source() {
        let result: Vec<Vec<char>> =
            combinations_with_replacement(&['a', 'b'], Length::Exactly(3)).collect();
        assert_eq!(
            result,
            vec![
                vec!['a', 'a', 'a'],
                vec!['a', 'a', 'b'],
                vec!['a', 'b', 'b'],
                vec!['b', 'b', 'b'],
            ]
        );

        let single: Vec<Vec<u8>> = combinations_with_replacement(&[9], Length::Exactly(4)).collect();
        assert_eq!(single, vec![vec![9, 9, 9, 9]]);
    }

    // Tests indices never decrease within a tuple
    // Verified by resetting the tail to zero after the pivot
    #[test]
    fn test_tuples_are_non_decreasing() {
        let result: Vec<Vec<u32>> =
            combinations_with_replacement(&[0, 1, 2, 3], Length::Full).collect();
        assert_eq!(result.len(), 35);
        assert!(result.iter().all(|tuple| tuple.is_sorted()));
    }

    // Tests empty selections and empty sources
    // Verified by emitting the initial tuple for an empty source
    #[test]
    fn test_empty_edges() {
        let zero: Vec<Vec<u8>> = combinations_with_replacement(&[1, 2], Length::Exactly(0)).collect();
        assert_eq!(zero, vec![Vec::<u8>::new()]);

        let nothing: Vec<Vec<u8>> = combinations_with_replacement(&[], Length::Exactly(2)).collect();
        assert!(nothing.is_empty());

        let both_empty: Vec<Vec<u8>> = combinations_with_replacement(&[], Length::Full).collect();
        assert_eq!(both_empty, vec![Vec::<u8>::new()]);
    }

    // Tests size hint matches the multiset coefficient
    // Verified by seeding the remaining count with C(n, k)
    #[test]
    fn test_size_hint_matches_multiset_count() {
        let mut iter = combinations_with_replacement(&[1, 2, 3], Length::Exactly(2));
        assert_eq!(iter.size_hint(), (6, Some(6)));
        iter.next();
        assert_eq!(iter.size_hint(), (5, Some(5)));

        let empty = combinations_with_replacement::<u8>(&[], Length::Exactly(3));
        assert_eq!(empty.size_hint(), (0, Some(0)));
    }
}
