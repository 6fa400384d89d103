//! Weight Solver Tests
//!
//! - Balanced weights over a small exhaustive grid, against the decimal model
//! - Normalized and accurate weights at magnitudes that force rescaling

use bancor_amm::reference;
use bancor_amm::tables::{MAX_UNF_WEIGHT, MAX_WEIGHT};
use bancor_amm::{Decimal, WeightSolver};
use bancor_types::{U256, U512};
use rust_decimal_macros::dec;

/// `(a / b) / (c / d)`, falling back to the non-zero pair when a weight is zero
fn weight_ratio(actual: (u32, u32), expected: (Decimal, Decimal)) -> Decimal {
    let (a, b) = (Decimal::from(actual.0), Decimal::from(actual.1));
    let (c, d) = expected;
    if a.is_zero() {
        return d / b;
    }
    if b.is_zero() {
        return a / c;
    }
    a / b / (c / d)
}

#[test]
fn test_balanced_weights_grid_matches_decimal_model() {
    for t in 0u64..5 {
        for s in 0u64..5 {
            for r in 0u64..5 {
                for q in 0u64..5 {
                    for p in 0u64..5 {
                        let actual = WeightSolver::balanced_weights(
                            U256::from(t),
                            U256::from(s),
                            U256::from(r),
                            U256::from(q),
                            U256::from(p),
                        );
                        let expected = reference::balanced_weights(
                            Decimal::from(t),
                            Decimal::from(s),
                            Decimal::from(r),
                            Decimal::from(q),
                            Decimal::from(p),
                        );
                        let label = format!("({t}, {s}, {r}, {q}, {p})");

                        match (actual, expected) {
                            (Ok(weights), Some(model)) => {
                                assert_eq!(weights.0 + weights.1, MAX_WEIGHT, "{label}");
                                let ratio = weight_ratio(weights, model);
                                assert!(
                                    ratio >= dec!(0.932714) && ratio <= dec!(1.078991),
                                    "{label}: ratio {ratio}"
                                );
                            }
                            (Err(_), None) => {}
                            (actual, expected) => {
                                panic!("{label}: engine {actual:?}, model {expected:?}")
                            }
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_balanced_weights_scale_invariance() {
    let base = WeightSolver::balanced_weights(
        U256::from(3u8),
        U256::from(4u8),
        U256::from(2u8),
        U256::from(3u8),
        U256::from(2u8),
    )
    .unwrap();

    let k = U256::exp10(18);
    let scaled = WeightSolver::balanced_weights(
        U256::from(3u8) * k,
        U256::from(4u8) * k,
        U256::from(2u8) * k,
        U256::from(3u8),
        U256::from(2u8),
    )
    .unwrap();

    assert_eq!(base, scaled);
}

#[test]
fn test_small_normalized_weights() {
    for a in 0u64..10 {
        for b in 1u64..=10 {
            let expected = reference::normalized_weights(Decimal::from(a), Decimal::from(b)).unwrap();
            let (x, y) = WeightSolver::normalized_weights(U256::from(a), U256::from(b)).unwrap();
            assert_eq!((Decimal::from(x), Decimal::from(y)), expected, "({a}, {b})");
        }
    }
}

/// `MAX_UNF_WEIGHT * 10^i + 1` for `i` in `0..=6`
fn large_operands() -> Vec<U256> {
    (0..=6)
        .map(|i| MAX_UNF_WEIGHT * U256::exp10(i) + U256::one())
        .collect()
}

/// `round(a * MAX_WEIGHT / (a + b))`, exact in 512 bits
fn rounded_share(a: U256, b: U256) -> u32 {
    let sum = U512::from(a) + U512::from(b);
    let numerator = U512::from(a) * U512::from(2 * MAX_WEIGHT) + sum;
    (numerator / (sum * U512::from(2u8))).low_u32()
}

#[test]
fn test_normalized_weights_at_large_magnitudes() {
    for a in large_operands() {
        for b in large_operands() {
            let expected = rounded_share(a, b);
            assert_eq!(
                WeightSolver::normalized_weights(a, b).unwrap(),
                (expected, MAX_WEIGHT - expected),
                "({a}, {b})"
            );
            assert_eq!(
                WeightSolver::accurate_weights(a, b).unwrap(),
                (expected, MAX_WEIGHT - expected),
                "({a}, {b})"
            );
        }
    }
}
