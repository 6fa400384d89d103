//! Bonding curve conversion formulas
//!
//! Every formula reduces to one call into [`PowerApproximation::power`] with a reserve
//! weight as exponent. Zero amounts and 100% weights short-circuit to plain ratios, and
//! selling or liquidating the whole supply returns the whole reserve balance.

use crate::integer_math::IntegerMath;
use crate::power::PowerApproximation;
use crate::tables::MAX_WEIGHT;
use bancor_types::uint::{add, mul, shl, sub, U256};
use bancor_types::{MathError, Result};
use tracing::debug;

/// Bancor bonding curve formulas
pub struct BancorFormula;

impl BancorFormula {
    /// Pool tokens received for depositing `amount` of a reserve
    ///
    /// `supply * ((1 + amount / balance)^(weight / MAX_WEIGHT) - 1)`, rounded down.
    ///
    /// # Arguments
    /// * `supply` - Pool token supply
    /// * `reserve_balance` - Balance of the reserve being deposited into
    /// * `reserve_weight` - Reserve weight in PPM, in `(0, MAX_WEIGHT]`
    /// * `amount` - Deposit amount in reserve token units
    pub fn purchase_target_amount(
        supply: U256,
        reserve_balance: U256,
        reserve_weight: u32,
        amount: U256,
    ) -> Result<U256> {
        validate_supply(supply)?;
        validate_balance(reserve_balance)?;
        validate_weight(reserve_weight)?;

        if amount.is_zero() {
            return Ok(U256::zero());
        }
        if reserve_weight == MAX_WEIGHT {
            return Ok(mul(supply, amount, "purchase_target_amount")? / reserve_balance);
        }

        let base_n = add(amount, reserve_balance, "purchase_target_amount")?;
        let (result, precision) =
            PowerApproximation::power(base_n, reserve_balance, reserve_weight, MAX_WEIGHT)?;
        let grown = mul(supply, result, "purchase_target_amount")? >> precision;
        sub(grown, supply, "purchase_target_amount")
    }

    /// Reserve tokens received for selling `amount` pool tokens
    ///
    /// `balance * (1 - (1 - amount / supply)^(MAX_WEIGHT / weight))`, rounded down.
    pub fn sale_target_amount(
        supply: U256,
        reserve_balance: U256,
        reserve_weight: u32,
        amount: U256,
    ) -> Result<U256> {
        validate_supply(supply)?;
        validate_balance(reserve_balance)?;
        validate_weight(reserve_weight)?;
        validate_amount(amount, supply)?;

        if amount.is_zero() {
            return Ok(U256::zero());
        }
        if amount == supply {
            return Ok(reserve_balance);
        }
        if reserve_weight == MAX_WEIGHT {
            return Ok(mul(reserve_balance, amount, "sale_target_amount")? / supply);
        }

        let (result, precision) =
            PowerApproximation::power(supply, supply - amount, MAX_WEIGHT, reserve_weight)?;
        shrink(reserve_balance, result, precision, "sale_target_amount")
    }

    /// Target reserve tokens received for converting `amount` of the source reserve
    ///
    /// `target * (1 - (source / (source + amount))^(source_weight / target_weight))`.
    pub fn cross_reserve_target_amount(
        source_balance: U256,
        source_weight: u32,
        target_balance: U256,
        target_weight: u32,
        amount: U256,
    ) -> Result<U256> {
        validate_balance(source_balance)?;
        validate_balance(target_balance)?;
        validate_weight(source_weight)?;
        validate_weight(target_weight)?;

        if source_weight == target_weight {
            let denominator = add(source_balance, amount, "cross_reserve_target_amount")?;
            return Ok(mul(target_balance, amount, "cross_reserve_target_amount")? / denominator);
        }

        let base_n = add(source_balance, amount, "cross_reserve_target_amount")?;
        let (result, precision) =
            PowerApproximation::power(base_n, source_balance, source_weight, target_weight)?;
        shrink(target_balance, result, precision, "cross_reserve_target_amount")
    }

    /// Reserve tokens required to mint `amount` pool tokens, rounded up
    ///
    /// `balance * ((1 + amount / supply)^(MAX_WEIGHT / ratio) - 1)`. `reserve_ratio` is
    /// the sum of all reserve weights, in `(1, 2 * MAX_WEIGHT]`.
    pub fn fund_cost(
        supply: U256,
        reserve_balance: U256,
        reserve_ratio: u32,
        amount: U256,
    ) -> Result<U256> {
        validate_supply(supply)?;
        validate_balance(reserve_balance)?;
        validate_ratio(reserve_ratio)?;

        if amount.is_zero() {
            return Ok(U256::zero());
        }
        if reserve_ratio == MAX_WEIGHT {
            let product = mul(amount, reserve_balance, "fund_cost")?;
            return Ok((product - U256::one()) / supply + U256::one());
        }

        let base_n = add(supply, amount, "fund_cost")?;
        // Integer exponents round up against the exact ratio, not the floored power
        if let Some((n, d)) =
            PowerApproximation::exact_power(base_n, supply, MAX_WEIGHT, reserve_ratio)
        {
            let ceiled = IntegerMath::mul_div_ceil(reserve_balance, n, d)?;
            return sub(ceiled, reserve_balance, "fund_cost");
        }

        let (result, precision) =
            PowerApproximation::power(base_n, supply, MAX_WEIGHT, reserve_ratio)?;
        let product = mul(reserve_balance, result, "fund_cost")?;
        let ceiled = ((product - U256::one()) >> precision) + U256::one();
        sub(ceiled, reserve_balance, "fund_cost")
    }

    /// Pool tokens received for depositing `amount` of one reserve into a multi-reserve pool
    ///
    /// `supply * ((1 + amount / balance)^(ratio / MAX_WEIGHT) - 1)`, rounded down.
    pub fn fund_supply_amount(
        supply: U256,
        reserve_balance: U256,
        reserve_ratio: u32,
        amount: U256,
    ) -> Result<U256> {
        validate_supply(supply)?;
        validate_balance(reserve_balance)?;
        validate_ratio(reserve_ratio)?;

        if amount.is_zero() {
            return Ok(U256::zero());
        }
        if reserve_ratio == MAX_WEIGHT {
            return Ok(mul(amount, supply, "fund_supply_amount")? / reserve_balance);
        }

        let base_n = add(reserve_balance, amount, "fund_supply_amount")?;
        let (result, precision) =
            PowerApproximation::power(base_n, reserve_balance, reserve_ratio, MAX_WEIGHT)?;
        let grown = mul(supply, result, "fund_supply_amount")? >> precision;
        sub(grown, supply, "fund_supply_amount")
    }

    /// Reserve tokens received for burning `amount` pool tokens of a multi-reserve pool
    ///
    /// `balance * (1 - (1 - amount / supply)^(MAX_WEIGHT / ratio))`, rounded down.
    pub fn liquidate_reserve_amount(
        supply: U256,
        reserve_balance: U256,
        reserve_ratio: u32,
        amount: U256,
    ) -> Result<U256> {
        validate_supply(supply)?;
        validate_balance(reserve_balance)?;
        validate_ratio(reserve_ratio)?;
        validate_amount(amount, supply)?;

        if amount.is_zero() {
            return Ok(U256::zero());
        }
        if amount == supply {
            return Ok(reserve_balance);
        }
        if reserve_ratio == MAX_WEIGHT {
            return Ok(mul(amount, reserve_balance, "liquidate_reserve_amount")? / supply);
        }

        let (result, precision) =
            PowerApproximation::power(supply, supply - amount, MAX_WEIGHT, reserve_ratio)?;
        shrink(reserve_balance, result, precision, "liquidate_reserve_amount")
    }
}

/// `balance * (result - 2^precision) / result`: the share of `balance` released when a
/// quantity grows by the factor `result / 2^precision`
fn shrink(balance: U256, result: U256, precision: usize, operation: &'static str) -> Result<U256> {
    let scaled = mul(balance, result, operation)?;
    let base = shl(balance, precision, operation)?;
    Ok(sub(scaled, base, operation)? / result)
}

fn validate_supply(supply: U256) -> Result<()> {
    if supply.is_zero() {
        debug!("Rejecting zero supply");
        return Err(MathError::InvalidSupply { supply });
    }
    Ok(())
}

fn validate_balance(balance: U256) -> Result<()> {
    if balance.is_zero() {
        debug!("Rejecting zero reserve balance");
        return Err(MathError::InvalidReserveBalance { balance });
    }
    Ok(())
}

fn validate_weight(weight: u32) -> Result<()> {
    if weight == 0 || weight > MAX_WEIGHT {
        debug!(weight, "Rejecting reserve weight");
        return Err(MathError::InvalidReserveWeight {
            weight,
            min: 0,
            max: MAX_WEIGHT,
        });
    }
    Ok(())
}

fn validate_ratio(ratio: u32) -> Result<()> {
    if ratio <= 1 || ratio > 2 * MAX_WEIGHT {
        debug!(ratio, "Rejecting reserve ratio");
        return Err(MathError::InvalidReserveWeight {
            weight: ratio,
            min: 1,
            max: 2 * MAX_WEIGHT,
        });
    }
    Ok(())
}

fn validate_amount(amount: U256, supply: U256) -> Result<()> {
    if amount > supply {
        debug!(%amount, %supply, "Rejecting amount above supply");
        return Err(MathError::InvalidAmount { amount, supply });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e18(units: u64) -> U256 {
        U256::from(units) * U256::exp10(18)
    }

    #[test]
    fn test_zero_amounts() {
        assert_eq!(
            BancorFormula::purchase_target_amount(e18(1), e18(1), 500_000, U256::zero()).unwrap(),
            U256::zero()
        );
        assert_eq!(
            BancorFormula::sale_target_amount(e18(1), e18(1), 500_000, U256::zero()).unwrap(),
            U256::zero()
        );
        assert_eq!(
            BancorFormula::fund_cost(e18(1), e18(1), 500_000, U256::zero()).unwrap(),
            U256::zero()
        );
    }

    #[test]
    fn test_full_weight_is_linear() {
        assert_eq!(
            BancorFormula::purchase_target_amount(e18(100), e18(50), MAX_WEIGHT, e18(5)).unwrap(),
            e18(10)
        );
        assert_eq!(
            BancorFormula::sale_target_amount(e18(100), e18(50), MAX_WEIGHT, e18(10)).unwrap(),
            e18(5)
        );
        assert_eq!(
            BancorFormula::fund_cost(U256::from(3u8), U256::from(10u8), MAX_WEIGHT, U256::one())
                .unwrap(),
            U256::from(4u8)
        );
        assert_eq!(
            BancorFormula::liquidate_reserve_amount(e18(100), e18(50), MAX_WEIGHT, e18(10))
                .unwrap(),
            e18(5)
        );
    }

    #[test]
    fn test_whole_supply_returns_whole_reserve() {
        assert_eq!(
            BancorFormula::sale_target_amount(e18(7), e18(3), 123_456, e18(7)).unwrap(),
            e18(3)
        );
        assert_eq!(
            BancorFormula::liquidate_reserve_amount(e18(7), e18(3), 1_500_000, e18(7)).unwrap(),
            e18(3)
        );
    }

    #[test]
    fn test_equal_weights_cross_conversion() {
        assert_eq!(
            BancorFormula::cross_reserve_target_amount(e18(90), 400_000, e18(60), 400_000, e18(10))
                .unwrap(),
            e18(6)
        );
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(
            BancorFormula::purchase_target_amount(U256::zero(), e18(1), 500_000, e18(1)),
            Err(MathError::InvalidSupply {
                supply: U256::zero()
            })
        );
        assert_eq!(
            BancorFormula::purchase_target_amount(e18(1), U256::zero(), 500_000, e18(1)),
            Err(MathError::InvalidReserveBalance {
                balance: U256::zero()
            })
        );
        assert!(matches!(
            BancorFormula::purchase_target_amount(e18(1), e18(1), 0, e18(1)),
            Err(MathError::InvalidReserveWeight { weight: 0, .. })
        ));
        assert!(matches!(
            BancorFormula::purchase_target_amount(e18(1), e18(1), MAX_WEIGHT + 1, e18(1)),
            Err(MathError::InvalidReserveWeight { .. })
        ));
        assert!(matches!(
            BancorFormula::sale_target_amount(e18(1), e18(1), 500_000, e18(2)),
            Err(MathError::InvalidAmount { .. })
        ));
        assert!(matches!(
            BancorFormula::fund_cost(e18(1), e18(1), 1, e18(1)),
            Err(MathError::InvalidReserveWeight { weight: 1, min: 1, .. })
        ));
        assert!(BancorFormula::fund_cost(e18(1), e18(1), 2 * MAX_WEIGHT, e18(1)).is_ok());
        assert!(matches!(
            BancorFormula::liquidate_reserve_amount(e18(1), e18(1), 2 * MAX_WEIGHT + 1, e18(1)),
            Err(MathError::InvalidReserveWeight { .. })
        ));
    }
}
