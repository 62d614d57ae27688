//! Property-based tests for the combinator laws.

use lazyseq::prelude::*;
use proptest::prelude::*;

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1000i32..1000, 0..64)
}

proptest! {
    #[test]
    fn from_iter_then_collect_is_identity(input in small_vec()) {
        let out: Vec<_> = lazyseq::from_iter(input.clone()).collect();
        prop_assert_eq!(out, input);
    }

    #[test]
    fn nested_filters_compose(input in small_vec(), p in 1i32..7, q in 1i32..7) {
        let nested: Vec<_> = lazyseq::from_iter(input.clone())
            .filter(|n| n % q == 0)
            .filter(|n| n % p == 0)
            .collect();
        let fused: Vec<_> = lazyseq::from_iter(input)
            .filter(|n| n % q == 0 && n % p == 0)
            .collect();
        prop_assert_eq!(nested, fused);
    }

    #[test]
    fn filter_and_filter_false_partition(input in small_vec()) {
        let kept: Vec<_> = lazyseq::from_iter(input.clone()).filter(|n| *n >= 0).collect();
        let rest: Vec<_> = lazyseq::from_iter(input.clone()).filter_false(|n| *n >= 0).collect();
        let (expected_kept, expected_rest): (Vec<_>, Vec<_>) =
            input.into_iter().partition(|n| *n >= 0);
        prop_assert_eq!(kept, expected_kept);
        prop_assert_eq!(rest, expected_rest);
    }

    #[test]
    fn nested_maps_compose(input in small_vec()) {
        let nested: Vec<_> = lazyseq::from_iter(input.clone())
            .map(|n| n as i64 * 3)
            .map(|n| n - 1)
            .collect();
        let fused: Vec<_> = lazyseq::from_iter(input)
            .map(|n| n as i64 * 3 - 1)
            .collect();
        prop_assert_eq!(nested, fused);
    }

    #[test]
    fn zip_length_is_the_shorter_length(a in small_vec(), b in small_vec()) {
        let expected = a.len().min(b.len());
        let zipped: Vec<_> = lazyseq::from_iter(a).zip(b).collect();
        prop_assert_eq!(zipped.len(), expected);
    }

    #[test]
    fn ranges_match_std(start in -200i32..200, stop in -200i32..200, step in 1i32..20) {
        let up: Vec<_> = lazyseq::range_step(start, stop, step).collect();
        let expected: Vec<_> = (start..stop).step_by(step as usize).collect();
        prop_assert_eq!(up, expected);

        let down: Vec<_> = lazyseq::range_step(stop, start, -step).collect();
        let expected: Vec<_> = (start + 1..=stop).rev().step_by(step as usize).collect();
        prop_assert_eq!(down, expected);
    }

    #[test]
    fn range_size_hint_is_exact(start in -200i32..200, stop in -200i32..200, step in 1i32..20) {
        let seq = lazyseq::range_step(start, stop, step);
        let (lower, upper) = seq.size_hint();
        let len = seq.collect::<Vec<_>>().len();
        prop_assert_eq!(lower, len);
        prop_assert_eq!(upper, Some(len));
    }

    #[test]
    fn accumulate_ends_at_reduce(input in small_vec()) {
        let running: Vec<_> = lazyseq::from_iter(input.clone())
            .accumulate(0i64, |acc, n| acc + n as i64)
            .collect();
        let total = lazyseq::from_iter(input.clone()).reduce(0i64, |acc, n| acc + n as i64);
        prop_assert_eq!(running.len(), input.len());
        prop_assert_eq!(running.last().copied().unwrap_or(0), total);
    }

    #[test]
    fn take_while_then_drop_while_rebuild_the_input(input in small_vec(), limit in -1000i32..1000) {
        let mut joined: Vec<_> = lazyseq::from_iter(input.clone())
            .take_while(|n| *n < limit)
            .collect();
        joined.extend(
            lazyseq::from_iter(input.clone())
                .drop_while(|n| *n < limit)
                .into_iterator(),
        );
        prop_assert_eq!(joined, input);
    }

    #[test]
    fn chain_concatenates(a in small_vec(), b in small_vec()) {
        let chained: Vec<_> = lazyseq::from_iter(a.clone()).chain(b.clone()).collect();
        let expected: Vec<_> = a.into_iter().chain(b).collect();
        prop_assert_eq!(chained, expected);
    }

    #[test]
    fn cycle_replays_the_source(input in prop::collection::vec(any::<u8>(), 1..16), n in 0usize..100) {
        let cycled: Vec<_> = lazyseq::from_iter(input.clone()).cycle().take(n).collect();
        let expected: Vec<_> = input.iter().copied().cycle().take(n).collect();
        prop_assert_eq!(cycled, expected);
    }

    #[test]
    fn enumerate_positions_are_dense(input in small_vec()) {
        let positions: Vec<_> = lazyseq::from_iter(input.clone())
            .filter(|n| n % 2 == 0)
            .enumerate()
            .map(|(i, _)| i)
            .collect();
        let expected: Vec<_> = (0..positions.len()).collect();
        prop_assert_eq!(positions, expected);
    }
}
