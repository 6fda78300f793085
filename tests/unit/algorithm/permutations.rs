//! Tests for permutation order, counts and length validation

#[cfg(test)]
mod tests {
    use itergen::GeneratorError;
    use itergen::algorithm::length::Length;
    use itergen::algorithm::permutations::permutations;
    use std::collections::HashSet;

    // Tests full permutations follow the cycle-counter order
    // Verified by swapping with indices[counter] instead of indices[n - counter]
    #[test]
    fn test_full_permutation_order() {
        let result: Vec<Vec<u8>> = permutations(&[0, 1, 2], Length::Full)
            .expect("valid length")
            .collect();

        assert_eq!(
            result,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    // Tests partial permutations use only the leading indices
    // Verified by emitting the whole index buffer
    #[test]
    fn test_partial_permutation_order() {
        let result: Vec<Vec<char>> = permutations(&['a', 'b', 'c'], Length::Exactly(2))
            .expect("valid length")
            .collect();

        assert_eq!(
            result,
            vec![
                vec!['a', 'b'],
                vec!['a', 'c'],
                vec!['b', 'a'],
                vec!['b', 'c'],
                vec!['c', 'a'],
                vec!['c', 'b'],
            ]
        );
    }

    // Tests several counter resets per sweep when two or more positions stay untaken
    // Verified by resetting counters to n instead of n - i
    #[test]
    fn test_partial_permutation_order_with_wide_tail() {
        let result: Vec<Vec<u8>> = permutations(&[0, 1, 2, 3], Length::Exactly(2))
            .expect("valid length")
            .collect();

        assert_eq!(
            result,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 0],
                vec![1, 2],
                vec![1, 3],
                vec![2, 0],
                vec![2, 1],
                vec![2, 3],
                vec![3, 0],
                vec![3, 1],
                vec![3, 2],
            ]
        );
    }

    // Tests every tuple is distinct and uses distinct positions
    // Verified by skipping the rotation when a counter resets
    #[test]
    fn test_permutations_are_distinct() {
        let result: Vec<Vec<u32>> = permutations(&[1, 2, 3, 4, 5], Length::Exactly(3))
            .expect("valid length")
            .collect();

        assert_eq!(result.len(), 60);
        let unique: HashSet<&Vec<u32>> = result.iter().collect();
        assert_eq!(unique.len(), 60);

        for tuple in &result {
            let positions: HashSet<&u32> = tuple.iter().collect();
            assert_eq!(positions.len(), 3, "tuple {tuple:?} repeats an element");
        }
    }

    // Tests zero length yields exactly one empty tuple
    // Verified by skipping the initial emission
    #[test]
    fn test_zero_length_yields_empty_tuple() {
        let result: Vec<Vec<i32>> = permutations(&[1, 2, 3], Length::Exactly(0))
            .expect("valid length")
            .collect();
        assert_eq!(result, vec![Vec::<i32>::new()]);

        let empty: Vec<Vec<i32>> = permutations(&[], Length::Full)
            .expect("valid length")
            .collect();
        assert_eq!(empty, vec![Vec::<i32>::new()]);
    }

    // Tests length beyond the source is rejected
    // Verified by removing the bounded length resolution
    #[test]
    fn test_length_exceeding_source_is_rejected() {
        let error = permutations(&[1, 2, 3], Length::Exactly(4)).expect_err("too long");
        match error {
            GeneratorError::InvalidParameter {
                operation,
                parameter,
                value,
                ..
            } => {
                assert_eq!(operation, "permutations");
                assert_eq!(parameter, "catch_len");
                assert_eq!(value, "4");
            }
            GeneratorError::Output { .. } => unreachable!("Expected InvalidParameter error type"),
        }
    }

    // Tests size hint tracks remaining tuples exactly
    // Verified by not decrementing the remaining count
    #[test]
    fn test_size_hint_counts_down() {
        let mut iter = permutations(&[1, 2, 3, 4], Length::Exactly(2)).expect("valid length");
        assert_eq!(iter.size_hint(), (12, Some(12)));

        iter.next();
        assert_eq!(iter.size_hint(), (11, Some(11)));

        let rest = iter.by_ref().count();
        assert_eq!(rest, 11);
        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert_eq!(iter.next(), None);
    }

    // Tests the source is copied rather than borrowed
    // Verified by comparing against a mutated source
    #[test]
    fn test_source_is_copied() {
        let mut source = vec![String::from("x"), String::from("y")];
        let iter = permutations(&source, Length::Full).expect("valid length");
        source.clear();

        let result: Vec<Vec<String>> = iter.collect();
        assert_eq!(result.len(), 2);
        assert_eq!(result.first(), Some(&vec![String::from("x"), String::from("y")]));
    }
}
