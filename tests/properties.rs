//! Property tests for prefix sums, searches, ranges and word layouts.

use proptest::prelude::*;
use wordlayout::consts;
use wordlayout::partition::split;
use wordlayout::range::{range, reverse, reverse_range, rotate_with_zero_tail};
use wordlayout::{first_equal, first_greater, LayoutError, PrefixSum, WordLayout};

fn arb_widths() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..=64, 0..24)
}

fn arb_word_size() -> impl Strategy<Value = u64> {
    prop_oneof![Just(1u64), Just(4), Just(8), Just(16), Just(32), Just(64), 1u64..=40]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_prefix_shape(widths in arb_widths()) {
        let p = PrefixSum::build(&widths);
        prop_assert_eq!(p.len(), widths.len() + 1);
        prop_assert_eq!(p[0], 0);
        prop_assert!(p.windows(2).all(|w| w[0] <= w[1]));
        let sum: u64 = widths.iter().map(|&w| u64::from(w)).sum();
        prop_assert_eq!(p.total(), sum);
    }

    #[test]
    fn prop_first_equal_is_smallest_match(seq in prop::collection::vec(0u8..8, 0..16), v in 0u8..10) {
        let i = first_equal(&seq, &v);
        prop_assert!(i <= seq.len());
        prop_assert!(seq[..i].iter().all(|x| *x != v));
        if i < seq.len() {
            prop_assert_eq!(seq[i], v);
        } else {
            prop_assert!(!seq.contains(&v));
        }
    }

    #[test]
    fn prop_first_greater_is_smallest_match(seq in prop::collection::vec(0u8..8, 0..16), v in 0u8..10) {
        let i = first_greater(&seq, &v);
        prop_assert!(seq[..i].iter().all(|x| *x <= v));
        if i < seq.len() {
            prop_assert!(seq[i] > v);
        }
    }

    #[test]
    fn prop_range_shape(min in 0usize..50, len in 0usize..50) {
        let r = range(min, min + len).unwrap();
        prop_assert_eq!(r.len(), len);
        if let Some(first) = r.first() {
            prop_assert_eq!(*first, min);
        }
        prop_assert!(r.windows(2).all(|w| w[0] + 1 == w[1]));
    }

    #[test]
    fn prop_reverse_range_matches_reverse(n in 0usize..64) {
        prop_assert_eq!(reverse_range(n), reverse(&range(0, n).unwrap()));
    }

    #[test]
    fn prop_rotate_is_permutation(n in 1usize..64) {
        let r = rotate_with_zero_tail(n);
        prop_assert_eq!(r.len(), n);
        prop_assert_eq!(r[n - 1], 0);
        let mut sorted = r.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, range(0, n).unwrap());
    }

    #[test]
    fn prop_split_concatenates(total in 0usize..64, cut in 0usize..64) {
        let at = cut.min(total);
        let (a, b) = split(at, total).unwrap();
        let joined: Vec<usize> = a.into_iter().chain(b).collect();
        prop_assert_eq!(joined, range(0, total).unwrap());
    }

    #[test]
    fn prop_word_count_or_divisibility(word_size in arb_word_size(), widths in arb_widths()) {
        let sum: u64 = widths.iter().map(|&w| u64::from(w)).sum();
        match WordLayout::compute(word_size, &widths) {
            Ok(layout) => {
                prop_assert_eq!(sum % word_size, 0);
                prop_assert_eq!(layout.word_count(), sum / word_size);
                prop_assert_eq!(layout.boundaries().len() as u64, layout.word_count() + 1);
                prop_assert_eq!(*layout.boundaries().last().unwrap(), widths.len() + 1);
            }
            Err(LayoutError::Divisibility { total_bits, remainder, .. }) => {
                prop_assert_eq!(total_bits, sum);
                prop_assert_eq!(remainder, sum % word_size);
                prop_assert!(remainder != 0);
            }
            Err(e) => prop_assert!(false, "unexpected error {}", e),
        }
    }

    #[test]
    fn prop_aligned_iff_every_word_end_hits_a_field(word_size in arb_word_size(), widths in arb_widths()) {
        if let Ok(layout) = WordLayout::compute(word_size, &widths) {
            let prefix = PrefixSum::build(&widths);
            let expected = (1..=layout.word_count()).all(|k| prefix.contains(&(k * word_size)));
            prop_assert_eq!(layout.is_aligned(), expected);
            prop_assert_eq!(layout.misaligned_words().is_empty(), expected);
            prop_assert_eq!(consts::is_word_aligned(word_size, &widths), expected);
        }
    }

    #[test]
    fn prop_word_ranges_cover_all_fields(widths in prop::collection::vec(prop_oneof![Just(8u32), Just(0)], 0..16)) {
        let layout = WordLayout::compute(8, &widths).unwrap();
        prop_assert!(layout.is_aligned());
        let ranges = layout.word_field_ranges().unwrap();
        let mut next = 0;
        for r in &ranges {
            prop_assert_eq!(r.start, next);
            next = r.end;
        }
        let expected_end = if ranges.is_empty() { 0 } else { layout.boundaries()[ranges.len() - 1] };
        prop_assert_eq!(next, expected_end);
    }
}
