//! Tests for distribution construction and combinators.

use dicestats_core::{Distribution, Mass};
use num_traits::{One, Zero};

fn ratio(numer: i64, denom: i64) -> Mass {
    Mass::new(numer.into(), denom.into())
}

fn two_d6() -> Distribution {
    let d6 = Distribution::die(6).unwrap();
    d6.combine_bin_op(&d6, |a, b| a + b).unwrap()
}

fn total(distribution: &Distribution) -> Mass {
    distribution.to_pairs().into_iter().map(|(_, mass)| mass).sum()
}

#[test]
fn test_from_pairs_sums_duplicates_before_normalizing() {
    let d = Distribution::from_pairs([
        (1, Mass::one()),
        (2, Mass::one()),
        (1, Mass::one()),
        (3, ratio(2, 1)),
    ])
    .unwrap();

    assert_eq!(d.to_pairs(), vec![(1, ratio(2, 5)), (2, ratio(1, 5)), (3, ratio(2, 5))]);
    assert_eq!(total(&d), Mass::one());
}

#[test]
fn test_prenormalized_and_unit_weights_agree() {
    let sixths = Distribution::from_pairs((1..=6).map(|v| (v, ratio(1, 6)))).unwrap();
    let units = Distribution::from_pairs((1..=6).map(|v| (v, Mass::one()))).unwrap();
    assert_eq!(sixths, units);
    assert_eq!(units, Distribution::die(6).unwrap());
}

#[test]
fn test_empty_input_is_empty_distribution() {
    let err = Distribution::from_pairs(Vec::new()).unwrap_err();
    assert!(err.is_empty_distribution());
}

#[test]
fn test_all_zero_weights_are_empty_distribution() {
    let err = Distribution::from_pairs([(4, Mass::zero()), (9, Mass::zero())]).unwrap_err();
    assert!(err.is_empty_distribution());
}

#[test]
fn test_two_d6_sum_matches_counting() {
    let d = two_d6();

    assert_eq!(d.support().collect::<Vec<_>>(), (2..=12).collect::<Vec<_>>());
    for k in 2..=12 {
        let ways = (1..=6)
            .flat_map(|a| (1..=6).map(move |b| a + b))
            .filter(|sum| *sum == k)
            .count() as i64;
        assert_eq!(d.probability_of(k), ratio(ways, 36), "mass at {}", k);
    }
    assert_eq!(d.probability_of(7), ratio(1, 6));
    assert_eq!(d.probability_of(2), ratio(1, 36));
    assert_eq!(total(&d), Mass::one());
}

#[test]
fn test_combine_with_non_additive_operator() {
    let d6 = Distribution::die(6).unwrap();
    let lowest = d6.combine_bin_op(&d6, i64::min).unwrap();

    // 11 of 36 pairs contain a 1
    assert_eq!(lowest.probability_of(1), ratio(11, 36));
    assert_eq!(lowest.probability_of(6), ratio(1, 36));

    let product = d6.combine_bin_op(&Distribution::point(-1), |a, b| a * b).unwrap();
    assert_eq!(product.support().collect::<Vec<_>>(), vec![-6, -5, -4, -3, -2, -1]);
}

#[test]
fn test_combine_non_commutative_operator_keeps_operand_order() {
    let left = Distribution::point(10);
    let right = Distribution::die(2).unwrap();
    let diff = left.combine_bin_op(&right, |a, b| a - b).unwrap();
    assert_eq!(diff.support().collect::<Vec<_>>(), vec![8, 9]);
}

#[test]
fn test_repeated_matches_manual_fold() {
    let d6 = Distribution::die(6).unwrap();
    let three = d6.repeated(3, |a, b| a + b).unwrap();
    let manual = two_d6().combine_bin_op(&d6, |a, b| a + b).unwrap();

    assert_eq!(three, manual);
    assert_eq!(three.probability_of(3), ratio(1, 216));
    assert_eq!(d6.repeated(1, |a, b| a + b).unwrap(), d6);
}

#[test]
fn test_repeated_zero_times_is_empty_pool() {
    let d6 = Distribution::die(6).unwrap();
    assert!(d6.repeated(0, |a, b| a + b).unwrap_err().is_empty_distribution());
}

#[test]
fn test_merge_weighted_conserves_mass() {
    let d4 = Distribution::die(4).unwrap();
    let d6 = Distribution::die(6).unwrap();
    let (w1, w2) = (ratio(1, 3), ratio(2, 3));

    let merged = Distribution::merge_weighted([(d4.clone(), w1.clone()), (d6.clone(), w2.clone())])
        .unwrap();

    for v in 1..=6 {
        let expected = &w1 * d4.probability_of(v) + &w2 * d6.probability_of(v);
        assert_eq!(merged.probability_of(v), expected, "mass at {}", v);
    }
    assert_eq!(total(&merged), Mass::one());
}

#[test]
fn test_merge_weighted_renormalizes_unnormalized_weights() {
    let merged = Distribution::merge_weighted([
        (Distribution::point(1), ratio(3, 1)),
        (Distribution::point(2), Mass::one()),
    ])
    .unwrap();
    assert_eq!(merged.probability_of(1), ratio(3, 4));
    assert_eq!(merged.probability_of(2), ratio(1, 4));
}

#[test]
fn test_merge_weighted_empty_or_zero_weights_fail() {
    assert!(
        Distribution::merge_weighted(Vec::new())
            .unwrap_err()
            .is_empty_distribution()
    );
    assert!(
        Distribution::merge_weighted([(Distribution::point(5), Mass::zero())])
            .unwrap_err()
            .is_empty_distribution()
    );
}

#[test]
fn test_drop_where_renormalizes_remaining_mass() {
    let d = two_d6();
    let without_seven = d.drop_where(|v| v == 7).unwrap();
    let remaining = Mass::one() - d.probability_of(7);
    assert_eq!(remaining, ratio(5, 6));

    assert_eq!(without_seven.len(), 10);
    assert_eq!(without_seven.probability_of(7), Mass::zero());
    for v in (2..=12).filter(|v| *v != 7) {
        assert_eq!(
            without_seven.probability_of(v),
            d.probability_of(v) / &remaining,
            "mass at {}",
            v
        );
    }
    assert_eq!(total(&without_seven), Mass::one());
}

#[test]
fn test_drop_where_everything_fails() {
    let d6 = Distribution::die(6).unwrap();
    assert!(d6.drop_where(|_| true).unwrap_err().is_empty_distribution());
}

#[test]
fn test_map_over_values_sums_collisions() {
    let d6 = Distribution::die(6).unwrap();
    let parity = d6.map_over_values(|v| v % 2);
    assert_eq!(parity.to_pairs(), vec![(0, ratio(1, 2)), (1, ratio(1, 2))]);
    assert_eq!(d6.map_over_values(|_| 0), Distribution::point(0));
}

#[test]
fn test_to_pairs_round_trip() {
    let d = two_d6().drop_where(|v| v > 9).unwrap();
    assert_eq!(Distribution::from_pairs(d.to_pairs()).unwrap(), d);
}

#[test]
fn test_normalized_distributions_are_never_null() {
    assert!(!two_d6().is_null());
    assert!(!Distribution::point(0).is_null());
}

#[test]
fn test_operations_do_not_mutate_inputs() {
    let d6 = Distribution::die(6).unwrap();
    let snapshot = d6.clone();
    let _ = d6.drop_where(|v| v < 3).unwrap();
    let _ = d6.map_over_values(|v| v * 10);
    let _ = d6.combine_bin_op(&d6, |a, b| a + b).unwrap();
    assert_eq!(d6, snapshot);
}
