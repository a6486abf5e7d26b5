//! Unit and property tests for top-k selection.

use proptest::prelude::*;
use rstest::rstest;

use crate::{error::SelectionError, test_utils::suite_proptest_config};

use super::{sort_ascending, top_k};

#[rstest]
#[case::three_of_six(3, vec![7, 1, 9, 4, 9, 2], vec![7, 9, 9])]
#[case::zero(0, vec![3, 1, 2], vec![])]
#[case::more_than_available(5, vec![3, 1, 2], vec![1, 2, 3])]
#[case::exact(3, vec![3, 1, 2], vec![1, 2, 3])]
#[case::empty_input(4, vec![], vec![])]
#[case::all_equal(2, vec![5, 5, 5, 5], vec![5, 5])]
fn selects_largest_in_ascending_order(
    #[case] k: isize,
    #[case] input: Vec<i32>,
    #[case] expected: Vec<i32>,
) {
    let snapshot = input.clone();
    assert_eq!(top_k(k, &input), Ok(expected));
    assert_eq!(input, snapshot);
}

#[rstest]
#[case(-1)]
#[case(isize::MIN)]
fn rejects_negative_counts(#[case] k: isize) {
    assert_eq!(
        top_k(k, &[1, 2, 3]),
        Err(SelectionError::NegativeCount { k })
    );
}

#[test]
fn full_sort_returns_every_element() {
    let input = vec!["pear", "apple", "fig", "apple"];
    assert_eq!(sort_ascending(&input), vec!["apple", "apple", "fig", "pear"]);
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn matches_sorted_suffix(input in proptest::collection::vec(any::<i32>(), 0..64), k in 0_isize..80) {
        let snapshot = input.clone();
        let selected = top_k(k, &input).expect("non-negative k must succeed");

        let mut sorted = input.clone();
        sorted.sort_unstable();
        let take = usize::try_from(k).expect("non-negative").min(sorted.len());
        let expected = sorted.split_off(sorted.len() - take);

        prop_assert_eq!(selected, expected);
        prop_assert_eq!(input, snapshot);
    }
}
