//! Bonding Curve Accuracy Tests
//!
//! Compares every curve formula against the decimal model across a grid of supplies,
//! balances, weights and amounts, then pins a few exact outputs.

use bancor_amm::reference::{self, to_decimal};
use bancor_amm::{BancorFormula, Decimal};
use bancor_types::{U256, U512};
use rust_decimal_macros::dec;

const AMOUNTS: [u64; 2] = [1_000_000_000_000_000, 1_000_000_000_000_000_000];
const WEIGHTS: [u32; 5] = [100_000, 333_333, 500_000, 900_000, 1_000_000];
const RATIOS: [u32; 5] = [100_000, 500_000, 1_000_000, 1_500_000, 2_000_000];

fn sizes() -> Vec<U256> {
    vec![U256::exp10(18), U256::exp10(24)]
}

fn amounts() -> Vec<U256> {
    AMOUNTS.iter().map(|a| U256::from(*a)).collect()
}

fn d(x: U256) -> Decimal {
    to_decimal(x).unwrap()
}

fn dec_str(s: &str) -> U256 {
    U256::from_dec_str(s).unwrap()
}

/// Within two units plus one part in 10^24 of the decimal model
fn assert_close(actual: U256, expected: Decimal, label: &str) {
    let actual = d(actual);
    let tolerance = dec!(2) + expected.abs() / dec!(1000000000000000000000000);
    assert!(
        (actual - expected).abs() <= tolerance,
        "{label}: {actual} vs {expected}"
    );
}

#[test]
fn test_purchase_and_sale_match_decimal_model() {
    for supply in sizes() {
        for balance in sizes() {
            for weight in WEIGHTS {
                for amount in amounts() {
                    let label = format!("({supply}, {balance}, {weight}, {amount})");

                    let purchase =
                        BancorFormula::purchase_target_amount(supply, balance, weight, amount)
                            .unwrap();
                    let expected =
                        reference::purchase_target_amount(d(supply), d(balance), weight, d(amount))
                            .unwrap();
                    assert_close(purchase, expected, &format!("purchase {label}"));

                    let sale =
                        BancorFormula::sale_target_amount(supply, balance, weight, amount).unwrap();
                    let expected =
                        reference::sale_target_amount(d(supply), d(balance), weight, d(amount))
                            .unwrap();
                    assert_close(sale, expected, &format!("sale {label}"));
                }
            }
        }
    }
}

#[test]
fn test_cross_reserve_matches_decimal_model() {
    for source in sizes() {
        for target in sizes() {
            for source_weight in WEIGHTS {
                for target_weight in WEIGHTS {
                    for amount in amounts() {
                        let actual = BancorFormula::cross_reserve_target_amount(
                            source,
                            source_weight,
                            target,
                            target_weight,
                            amount,
                        )
                        .unwrap();
                        let expected = reference::cross_reserve_target_amount(
                            d(source),
                            source_weight,
                            d(target),
                            target_weight,
                            d(amount),
                        )
                        .unwrap();
                        assert_close(
                            actual,
                            expected,
                            &format!(
                                "cross ({source}, {source_weight}, {target}, {target_weight}, {amount})"
                            ),
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_fund_operations_match_decimal_model() {
    for supply in sizes() {
        for balance in sizes() {
            for ratio in RATIOS {
                for amount in amounts() {
                    let label = format!("({supply}, {balance}, {ratio}, {amount})");

                    let cost = BancorFormula::fund_cost(supply, balance, ratio, amount).unwrap();
                    let expected =
                        reference::fund_cost(d(supply), d(balance), ratio, d(amount)).unwrap();
                    assert_close(cost, expected, &format!("fund_cost {label}"));

                    let minted =
                        BancorFormula::fund_supply_amount(supply, balance, ratio, amount).unwrap();
                    let expected =
                        reference::fund_supply_amount(d(supply), d(balance), ratio, d(amount))
                            .unwrap();
                    assert_close(minted, expected, &format!("fund_supply_amount {label}"));

                    let released =
                        BancorFormula::liquidate_reserve_amount(supply, balance, ratio, amount)
                            .unwrap();
                    let expected = reference::liquidate_reserve_amount(
                        d(supply),
                        d(balance),
                        ratio,
                        d(amount),
                    )
                    .unwrap();
                    assert_close(released, expected, &format!("liquidate {label}"));
                }
            }
        }
    }
}

#[test]
fn test_exact_outputs() {
    let e22 = U256::exp10(22);
    let e24 = U256::exp10(24);

    assert_eq!(
        BancorFormula::purchase_target_amount(e24, e24, 500_000, e22).unwrap(),
        dec_str("4987562112089027021926")
    );
    // 10^24 * (1 - 0.99^2), one unit below the exact value
    assert_eq!(
        BancorFormula::sale_target_amount(e24, e24, 500_000, e22).unwrap(),
        dec_str("19899999999999999999999")
    );
    assert_eq!(
        BancorFormula::cross_reserve_target_amount(e24, 300_000, e24, 600_000, e22).unwrap(),
        dec_str("4962809790010864334726")
    );
    assert_eq!(
        BancorFormula::fund_cost(e24, e24, 1_500_000, e22).unwrap(),
        dec_str("6655604652112435282549")
    );
    assert_eq!(
        BancorFormula::fund_supply_amount(e24, e24, 1_500_000, e22).unwrap(),
        dec_str("15037437733209917292145")
    );
    assert_eq!(
        BancorFormula::liquidate_reserve_amount(e24, e24, 1_500_000, e22).unwrap(),
        dec_str("6677827450494086094699")
    );
}

#[test]
fn test_fund_cost_rounds_up() {
    let e18 = U256::exp10(18);
    // 7 * 3e18 / 1e18 is exactly 21
    assert_eq!(
        BancorFormula::fund_cost(e18, U256::from(3u8) * e18, 1_000_000, U256::from(7u8)).unwrap(),
        U256::from(21u8)
    );
    // 7 * 3 / 2 = 10.5
    assert_eq!(
        BancorFormula::fund_cost(U256::from(2u8), U256::from(3u8), 1_000_000, U256::from(7u8))
            .unwrap(),
        U256::from(11u8)
    );
}

/// `ceil(balance * ((supply + amount) / supply)^k) - balance`, exact in 512 bits
fn exact_fund_cost(supply: U256, balance: U256, k: u32, amount: U256) -> U256 {
    let base_n = U512::from(supply + amount);
    let base_d = U512::from(supply);
    let mut n = U512::from(balance);
    let mut d = U512::one();
    for _ in 0..k {
        n *= base_n;
        d *= base_d;
    }
    let ceiled = (n + d - U512::one()) / d;
    U256::try_from(ceiled).unwrap() - balance
}

#[test]
fn test_fund_cost_rounds_up_for_integer_exponents() {
    let cases = [
        (
            (U256::one() << 60) + U256::from(12_345u32),
            U256::from(1_000_007u32),
            500_000u32,
            (U256::one() << 90) + U256::from(999u32),
        ),
        (
            U256::exp10(18) + U256::from(7u8),
            U256::from(3u8) * U256::exp10(18) + U256::one(),
            500_000,
            U256::exp10(21) + U256::from(3u8),
        ),
        (
            U256::from(12_345_678_901_234_567u64),
            U256::from(987_654_321u32),
            200_000,
            U256::from(98_765_432_109_876_543u64),
        ),
    ];

    for (supply, balance, ratio, amount) in cases {
        let cost = BancorFormula::fund_cost(supply, balance, ratio, amount).unwrap();
        let exact = exact_fund_cost(supply, balance, 1_000_000 / ratio, amount);
        assert_eq!(cost, exact, "fund_cost({supply}, {balance}, {ratio}, {amount})");
    }

    assert_eq!(
        BancorFormula::fund_cost(
            (U256::one() << 60) + U256::from(12_345u32),
            U256::from(1_000_007u32),
            500_000,
            (U256::one() << 90) + U256::from(999u32),
        )
        .unwrap(),
        dec_str("1152929577204853214141517")
    );
}

#[test]
fn test_integer_exponent_beyond_exact_range_uses_tables() {
    // (2^40)^2 is above every precision bound of the exact path
    let supply = (U256::one() << 80) + U256::from(12_345u32);
    let balance = U256::from(1_000_007u32);
    let amount = (U256::one() << 120) + U256::from(999u32);

    let integer = BancorFormula::fund_cost(supply, balance, 500_000, amount).unwrap();
    let neighbour = BancorFormula::fund_cost(supply, balance, 500_001, amount).unwrap();

    assert_eq!(integer, dec_str("954686423956175779941186150"));
    assert_eq!(neighbour, dec_str("954625782646052683225308674"));
    assert!(integer >= neighbour);
}

#[test_log::test]
fn test_steep_exponents_overflow() {
    let e18 = U256::exp10(18);
    let e21 = U256::exp10(21);

    // (1 + 1000)^9 leaves every precision level
    assert!(BancorFormula::cross_reserve_target_amount(e18, 900_000, e18, 100_000, e21).is_err());
    assert!(BancorFormula::fund_cost(e18, e18, 100_000, e21).is_err());
}
