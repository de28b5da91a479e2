use nextsort::{Element, sort, sort_indices, sort_mut, sort_with};
use proptest::prelude::*;

const PROPTEST_CASES: u32 = 256;

fn keys(max_elements: usize) -> impl Strategy<Value = Vec<Vec<u8>>> {
    // A small alphabet and short keys produce plenty of shared prefixes and duplicates.
    proptest::collection::vec(proptest::collection::vec(0u8..4, 0..6), 0..max_elements)
}

fn sorted_with(keys: &[Vec<u8>], strategy: nextsort::Strategy) -> Vec<(Vec<u8>, usize)> {
    let mut elements: Vec<Element<'_, usize>> = keys
        .iter()
        .enumerate()
        .map(|(i, k)| Element::new(k.as_slice(), i))
        .collect();
    sort_with(&mut elements, strategy).unwrap();
    elements.iter().map(|e| (e.key.to_vec(), e.payload)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn output_matches_stable_std_sort(input in keys(64)) {
        let mut expected: Vec<(Vec<u8>, usize)> =
            input.iter().cloned().enumerate().map(|(i, k)| (k, i)).collect();
        expected.sort_by(|a, b| a.0.cmp(&b.0));

        for strategy in [nextsort::Strategy::Radix8Count, nextsort::Strategy::Radix8CountInsertion] {
            prop_assert_eq!(sorted_with(&input, strategy), expected.clone());
        }
    }

    #[test]
    fn output_is_a_permutation(input in keys(64)) {
        let sorted = sorted_with(&input, nextsort::Strategy::default());
        let mut seen = vec![false; input.len()];
        for (key, index) in &sorted {
            prop_assert!(!seen[*index]);
            seen[*index] = true;
            prop_assert_eq!(key, &input[*index]);
        }
        prop_assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn output_is_non_decreasing(input in keys(128)) {
        let mut refs: Vec<&Vec<u8>> = input.iter().collect();
        sort(&mut refs).unwrap();
        for pair in refs.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn engines_agree_around_cutover(input in proptest::collection::vec(proptest::collection::vec(0u8..4, 0..6), 4..8)) {
        prop_assert_eq!(
            sorted_with(&input, nextsort::Strategy::Radix8Count),
            sorted_with(&input, nextsort::Strategy::Radix8CountInsertion)
        );
    }

    #[test]
    fn pairs_match_general_path(prefix in proptest::collection::vec(any::<u8>(), 0..4),
                                a in proptest::collection::vec(any::<u8>(), 0..4),
                                b in proptest::collection::vec(any::<u8>(), 0..4)) {
        // Two keys sharing a first byte next to enough other keys to skip the cutover.
        let mut input: Vec<Vec<u8>> = (10u8..16).map(|x| vec![x]).collect();
        input.push([&[0u8][..], prefix.as_slice(), a.as_slice()].concat());
        input.push([&[0u8][..], prefix.as_slice(), b.as_slice()].concat());
        prop_assert_eq!(
            sorted_with(&input, nextsort::Strategy::Radix8Count),
            sorted_with(&input, nextsort::Strategy::Radix8CountInsertion)
        );
    }

    #[test]
    fn indices_and_in_place_agree(input in keys(64)) {
        let indices = sort_indices(&input).unwrap();
        let mut moved = input.clone();
        sort_mut(&mut moved).unwrap();
        let via_indices: Vec<Vec<u8>> = indices.iter().map(|&i| input[i].clone()).collect();
        prop_assert_eq!(moved, via_indices);
    }
}
