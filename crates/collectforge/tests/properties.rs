//! Property tests shared by the factory modules and the builder.

use std::collections::{BTreeSet, HashSet, LinkedList};

use collectforge::{
    list_multimaps, lists, sets, sorted_maps, sorted_sets, Collect, PassOptions, Traversal,
};
use proptest::prelude::*;

fn sequential() -> PassOptions {
    PassOptions::new().with_traversal(Traversal::Sequential)
}

proptest! {
    #[test]
    fn fast_path_matches_sequential(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let indexed = Collect::new(&values)
            .map(|n: &i32| n.to_string())
            .into_vec()
            .unwrap();
        let walked = Collect::new(&values)
            .map(|n: &i32| n.to_string())
            .with_options(sequential())
            .into_vec()
            .unwrap();

        prop_assert_eq!(indexed, walked);
    }

    #[test]
    fn indexed_and_linked_sources_agree(values in prop::collection::vec(any::<i16>(), 0..64)) {
        let linked: LinkedList<i16> = values.iter().copied().collect();

        prop_assert_eq!(
            lists::filter(&values, |n| n % 3 != 0),
            lists::filter(&linked, |n| n % 3 != 0)
        );
    }

    #[test]
    fn filtering_is_idempotent(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let once = lists::filter(&values, |n| n % 2 == 0);
        let twice = lists::filter(&once, |n| n % 2 == 0);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filtering_keeps_admitted_in_order(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let admitted = lists::filter(&values, |n| *n > 0);
        let expected: Vec<i32> = values.iter().copied().filter(|n| *n > 0).collect();

        prop_assert_eq!(admitted, expected);
    }

    #[test]
    fn lists_keep_multiplicity_and_sets_dedup(values in prop::collection::vec(0u8..16, 0..64)) {
        let list = lists::transform(&values, |n| n / 2);
        let set = sets::transform(&values, |n| n / 2);
        let distinct: HashSet<u8> = list.iter().copied().collect();

        prop_assert_eq!(list.len(), values.len());
        prop_assert_eq!(set, distinct);
    }

    #[test]
    fn sorted_sets_match_natural_and_reverse_order(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let natural = sorted_sets::transform(&values, |n| *n);
        let reversed = sorted_sets::transform_by(&values, |n| *n, |a: &i32, b: &i32| b.cmp(a));
        let expected: BTreeSet<i32> = values.iter().copied().collect();

        prop_assert_eq!(&natural, &expected);
        prop_assert_eq!(
            reversed.into_vec(),
            expected.into_iter().rev().collect::<Vec<_>>()
        );
    }

    #[test]
    fn sorted_map_keys_are_ascending(values in prop::collection::vec(any::<u16>(), 0..64)) {
        let by_key = sorted_maps::index(&values, |n| n % 10);
        let keys: Vec<u16> = by_key.keys().copied().collect();

        prop_assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn list_multimaps_keep_every_value(values in prop::collection::vec(any::<u8>(), 0..64)) {
        let by_parity = list_multimaps::index(&values, |n| n % 2);
        let total: usize = by_parity.buckets().map(|(_, bucket)| bucket.len()).sum();

        prop_assert_eq!(by_parity.len(), values.len());
        prop_assert_eq!(total, values.len());
    }
}
