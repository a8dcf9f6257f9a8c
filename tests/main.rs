use sort_bench_rs::{patterns, sort, try_sort, SortError, SortingType};

mod bubble {
    sort_bench_rs::instantiate_sort_tests!(sort_bench_rs::unstable::bubblesort::SortImpl);
}

mod shell {
    sort_bench_rs::instantiate_sort_tests!(sort_bench_rs::unstable::shellsort::SortImpl);
}

mod merge {
    sort_bench_rs::instantiate_sort_tests!(sort_bench_rs::stable::mergesort::SortImpl);
}

mod quick {
    sort_bench_rs::instantiate_sort_tests!(sort_bench_rs::unstable::quicksort::SortImpl);
}

// Total order over integers is unique, so all four strategies must agree
// element-wise on the same input.
#[test]
fn all_strategies_agree() {
    for (i, len) in [0usize, 1, 2, 17, 128, 1000].into_iter().enumerate() {
        let input = patterns::random_uniform(len, 0x5EED + i as u64);

        let reference = sort(SortingType::Bubble, &input);
        for ty in SortingType::ALL {
            assert_eq!(
                sort(ty, &input),
                reference,
                "{ty} disagrees on length {len}"
            );
        }
    }
}

#[test]
fn merge_sort_is_stable() {
    use std::cmp::Ordering;

    // Compared by key only; the tag records the original position.
    #[derive(Debug, Clone)]
    struct Tagged {
        key: i32,
        tag: usize,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Tagged {}

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    let keys = [3, 1, 3, 2, 1, 3, 2, 1];
    let input: Vec<Tagged> = keys
        .iter()
        .enumerate()
        .map(|(tag, &key)| Tagged { key, tag })
        .collect();

    let result = sort_bench_rs::stable::mergesort::sort(&input[..]);

    // Equal keys must keep their original relative order.
    for pair in result.windows(2) {
        assert!(pair[0].key <= pair[1].key);
        if pair[0].key == pair[1].key {
            assert!(
                pair[0].tag < pair[1].tag,
                "equal keys reordered: {:?} before {:?}",
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn labels_round_trip() {
    for ty in SortingType::ALL {
        assert_eq!(ty.label().parse::<SortingType>(), Ok(ty));
    }
    assert_eq!(" Merge ".parse::<SortingType>(), Ok(SortingType::Merge));
}

#[test]
fn unknown_label_is_rejected() {
    assert_eq!(
        "heapsort".parse::<SortingType>(),
        Err(SortError::UnsupportedVariant("heapsort".to_string()))
    );
}

#[test]
fn absent_input_is_rejected() {
    for ty in SortingType::ALL {
        assert_eq!(try_sort(ty, None), Err(SortError::InvalidInput));
    }
}

#[test]
fn try_sort_with_input_matches_sort() {
    let input = patterns::random_uniform(64, 0x7E57);
    for ty in SortingType::ALL {
        assert_eq!(try_sort(ty, Some(&input)), Ok(sort(ty, &input)));
    }
}
