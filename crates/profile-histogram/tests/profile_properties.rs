//! Property-based tests for binning and aggregation
//!
//! Every pair must be binned exactly once, only bins with two or more
//! entries survive, and surviving bins keep their original geometry.

use proptest::prelude::*;
use profile_histogram::{BinRule, BinningStrategy, ProfileBuilder};

fn paired_samples() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::vec((-100.0f64..100.0, -50.0f64..50.0), 2..200)
        .prop_map(|pairs| pairs.into_iter().unzip())
}

fn rules() -> impl Strategy<Value = BinRule> {
    prop_oneof![
        Just(BinRule::Auto),
        Just(BinRule::FreedmanDiaconis),
        Just(BinRule::Sturges),
        Just(BinRule::Scott),
        Just(BinRule::Rice),
        Just(BinRule::Sqrt),
        Just(BinRule::Doane),
        (1usize..40).prop_map(BinRule::Count),
    ]
}

proptest! {
    // Property: every pair lands in exactly one bin
    #[test]
    fn prop_occupancy_sums_to_sample_size((x, y) in paired_samples(), rule in rules()) {
        let (min, max) = x.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        prop_assume!(max > min);

        let hist = ProfileBuilder::new(rule).build(&x, &y).unwrap();
        prop_assert_eq!(hist.occupancy().iter().sum::<usize>(), x.len());
        prop_assert_eq!(hist.total_count(), x.len());
    }

    // Property: a bin is reported iff it holds at least two entries
    #[test]
    fn prop_skip_rule((x, y) in paired_samples(), rule in rules()) {
        let (min, max) = x.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        prop_assume!(max > min);

        let hist = ProfileBuilder::new(rule).build(&x, &y).unwrap();
        let reported: Vec<usize> = hist.bins().iter().map(|bin| bin.index).collect();
        let expected: Vec<usize> = hist
            .occupancy()
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count >= 2)
            .map(|(index, _)| index)
            .collect();
        prop_assert_eq!(&reported, &expected);

        for bin in hist.bins() {
            prop_assert_eq!(bin.count, hist.occupancy()[bin.index]);
        }
        prop_assert_eq!(hist.skipped_indices().len() + hist.len(), hist.edges().len());
    }

    // Property: centers come from each bin's own edge pair
    #[test]
    fn prop_centers_use_original_edges((x, y) in paired_samples(), bins in 1usize..40) {
        let (min, max) = x.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        prop_assume!(max > min);

        let hist = ProfileBuilder::new(BinRule::Count(bins)).build(&x, &y).unwrap();
        for bin in hist.bins() {
            let expected = hist.edges().center(bin.index).unwrap();
            prop_assert_eq!(bin.center(), expected);
        }
    }

    // Property: edges are uniform and span the sample exactly
    #[test]
    fn prop_edges_span_sample((x, _y) in paired_samples(), rule in rules()) {
        let (min, max) = x.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        prop_assume!(max > min);

        let edges = rule.edges(&x).unwrap();
        prop_assert_eq!(edges.lower(), min);
        prop_assert_eq!(edges.upper(), max);
        let width = edges.width();
        for pair in edges.as_slice().windows(2) {
            prop_assert!(((pair[1] - pair[0]) - width).abs() <= 1e-9 * width.max(1.0));
        }
    }

    // Property: bin means stay within the y range of their members
    #[test]
    fn prop_means_within_y_range((x, y) in paired_samples(), bins in 1usize..20) {
        let (min, max) = x.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        prop_assume!(max > min);

        let hist = ProfileBuilder::new(BinRule::Count(bins)).build(&x, &y).unwrap();
        for bin in hist.bins() {
            prop_assert!(bin.mean >= -50.0 - 1e-9 && bin.mean <= 50.0 + 1e-9);
            prop_assert!(bin.rms >= 0.0);
            prop_assert!(bin.error <= bin.rms);
        }
    }
}

#[test]
fn test_identical_x_is_degenerate() {
    let err = ProfileBuilder::default()
        .build(&[0.0, 0.0, 0.0, 0.0], &[1.0, 2.0, 3.0, 4.0])
        .unwrap_err();
    assert!(matches!(err, profile_core::Error::DegenerateGeometry(_)));
}
