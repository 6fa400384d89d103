//! Decimal model of the engine formulas
//!
//! Every function here evaluates the closed-form expression the fixed-point engine
//! approximates, in 28-digit [`Decimal`] arithmetic. The integration tests use it as an
//! oracle at magnitudes `Decimal` can represent (mantissas below `2^96`).
//!
//! Functions return `None` when an intermediate value leaves the `Decimal` range or an
//! input is outside the formula's domain.

use bancor_types::{Fraction, U256};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::tables::MAX_WEIGHT;

const LN_2: Decimal = dec!(0.6931471805599453094172321215);
const EPSILON: Decimal = dec!(0.0000000000000000000000000001);

/// `Decimal` from an integer, `None` above `2^96 - 1`
pub fn to_decimal(x: U256) -> Option<Decimal> {
    if x.bits() > 96 {
        return None;
    }
    Decimal::try_from_i128_with_scale(x.as_u128() as i128, 0).ok()
}

/// `n / d` of a rate
pub fn rate(fraction: Fraction) -> Option<Decimal> {
    to_decimal(fraction.n)?.checked_div(to_decimal(fraction.d)?)
}

/// Round half away from zero to an integer
pub fn round(x: Decimal) -> Option<u128> {
    x.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u128()
}

/// Natural logarithm of a positive value
///
/// Reduces `x = m * 2^k` with `m` in `[1, 2)` and sums `2 * atanh((m - 1) / (m + 1))`.
pub fn ln(x: Decimal) -> Option<Decimal> {
    if x <= Decimal::ZERO {
        return None;
    }

    let mut m = x;
    let mut k: i64 = 0;
    while m >= Decimal::TWO {
        m /= Decimal::TWO;
        k += 1;
    }
    while m < Decimal::ONE {
        m *= Decimal::TWO;
        k -= 1;
    }

    let t = (m - Decimal::ONE).checked_div(m + Decimal::ONE)?;
    let t2 = t * t;
    let mut power = t;
    let mut sum = Decimal::ZERO;
    let mut i = 1u32;
    loop {
        let term = power / Decimal::from(i);
        if term < EPSILON {
            break;
        }
        sum += term;
        power *= t2;
        i += 2;
    }

    LN_2.checked_mul(Decimal::from(k))?
        .checked_add(sum * Decimal::TWO)
}

/// `e^x`
///
/// Halves the argument below `1/2`, sums the Taylor series and squares back up.
pub fn exp(x: Decimal) -> Option<Decimal> {
    if x.is_sign_negative() {
        return Decimal::ONE.checked_div(exp(-x)?);
    }

    let mut r = x;
    let mut halvings = 0u32;
    while r > dec!(0.5) {
        r /= Decimal::TWO;
        halvings += 1;
    }

    let mut sum = Decimal::ONE;
    let mut term = Decimal::ONE;
    let mut i = 1u32;
    loop {
        term = term * r / Decimal::from(i);
        if term < EPSILON {
            break;
        }
        sum += term;
        i += 1;
    }

    for _ in 0..halvings {
        sum = sum.checked_mul(sum)?;
    }
    Some(sum)
}

/// `base^exponent` for a positive base
pub fn pow(base: Decimal, exponent: Decimal) -> Option<Decimal> {
    exp(exponent.checked_mul(ln(base)?)?)
}

/// Lambert W on the principal branch
///
/// Ten Newton steps from `x`. `None` below `-1/e`, where no real solution exists.
pub fn lambert_w(x: Decimal) -> Option<Decimal> {
    let min_solvable = -Decimal::ONE.checked_div(exp(Decimal::ONE)?)?;
    if x < min_solvable {
        return None;
    }

    let mut a = x;
    for _ in 0..10 {
        let e = exp(a)?;
        let numerator = a.checked_mul(a)?.checked_mul(e)?.checked_add(x)?;
        let denominator = a.checked_mul(e)?.checked_add(e)?;
        a = numerator.checked_div(denominator)?;
    }
    Some(a)
}

fn max_weight() -> Decimal {
    Decimal::from(MAX_WEIGHT)
}

/// `supply * ((1 + amount / balance)^(weight / MAX_WEIGHT) - 1)`
pub fn purchase_target_amount(
    supply: Decimal,
    balance: Decimal,
    weight: u32,
    amount: Decimal,
) -> Option<Decimal> {
    if amount.is_zero() {
        return Some(Decimal::ZERO);
    }
    if weight == MAX_WEIGHT {
        return supply.checked_mul(amount)?.checked_div(balance);
    }
    let base = amount.checked_div(balance)?.checked_add(Decimal::ONE)?;
    let grown = pow(base, Decimal::from(weight) / max_weight())?;
    supply.checked_mul(grown - Decimal::ONE)
}

/// `balance * (1 - (1 - amount / supply)^(MAX_WEIGHT / weight))`
pub fn sale_target_amount(
    supply: Decimal,
    balance: Decimal,
    weight: u32,
    amount: Decimal,
) -> Option<Decimal> {
    if amount.is_zero() {
        return Some(Decimal::ZERO);
    }
    if amount == supply {
        return Some(balance);
    }
    if weight == MAX_WEIGHT {
        return balance.checked_mul(amount)?.checked_div(supply);
    }
    let base = Decimal::ONE - amount.checked_div(supply)?;
    let shrunk = pow(base, max_weight().checked_div(Decimal::from(weight))?)?;
    balance.checked_mul(Decimal::ONE - shrunk)
}

/// `target * (1 - (source / (source + amount))^(source_weight / target_weight))`
pub fn cross_reserve_target_amount(
    source_balance: Decimal,
    source_weight: u32,
    target_balance: Decimal,
    target_weight: u32,
    amount: Decimal,
) -> Option<Decimal> {
    if source_weight == target_weight {
        return target_balance
            .checked_mul(amount)?
            .checked_div(source_balance.checked_add(amount)?);
    }
    let base = source_balance.checked_div(source_balance.checked_add(amount)?)?;
    let exponent = Decimal::from(source_weight).checked_div(Decimal::from(target_weight))?;
    target_balance.checked_mul(Decimal::ONE - pow(base, exponent)?)
}

/// `balance * ((1 + amount / supply)^(MAX_WEIGHT / ratio) - 1)`
pub fn fund_cost(supply: Decimal, balance: Decimal, ratio: u32, amount: Decimal) -> Option<Decimal> {
    if amount.is_zero() {
        return Some(Decimal::ZERO);
    }
    if ratio == MAX_WEIGHT {
        return amount.checked_mul(balance)?.checked_div(supply);
    }
    let base = amount.checked_div(supply)?.checked_add(Decimal::ONE)?;
    let grown = pow(base, max_weight().checked_div(Decimal::from(ratio))?)?;
    balance.checked_mul(grown - Decimal::ONE)
}

/// `supply * ((1 + amount / balance)^(ratio / MAX_WEIGHT) - 1)`
pub fn fund_supply_amount(
    supply: Decimal,
    balance: Decimal,
    ratio: u32,
    amount: Decimal,
) -> Option<Decimal> {
    purchase_target_amount(supply, balance, ratio, amount)
}

/// `balance * (1 - (1 - amount / supply)^(MAX_WEIGHT / ratio))`
pub fn liquidate_reserve_amount(
    supply: Decimal,
    balance: Decimal,
    ratio: u32,
    amount: Decimal,
) -> Option<Decimal> {
    sale_target_amount(supply, balance, ratio, amount)
}

/// `(w1, MAX_WEIGHT - w1)` with `w1 = round(a * MAX_WEIGHT / (a + b))`
pub fn normalized_weights(a: Decimal, b: Decimal) -> Option<(Decimal, Decimal)> {
    let w1 = a
        .checked_mul(max_weight())?
        .checked_div(a.checked_add(b)?)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    Some((w1, max_weight() - w1))
}

/// Weights pricing the pool at `q / p`
///
/// `None` for the same reserve states and rates the engine rejects. Where the Lambert
/// argument has no real solution, `-1` stands in for `W`.
pub fn balanced_weights(
    t: Decimal,
    s: Decimal,
    r: Decimal,
    q: Decimal,
    p: Decimal,
) -> Option<(Decimal, Decimal)> {
    let zero = Decimal::ZERO;
    let reserve_state_valid = if t == s {
        t > zero || r > zero
    } else {
        t > zero && s > zero && r > zero
    };
    if !reserve_state_valid || q <= zero || p <= zero {
        return None;
    }

    let tq = t.checked_mul(q)?;
    let rp = r.checked_mul(p)?;
    if t == s {
        return normalized_weights(tq, rp);
    }

    let x = ln(s.checked_div(t)?)?;
    let arg = x.checked_mul(tq)?.checked_div(rp)?;
    let y = lambert_w(arg).unwrap_or(Decimal::NEGATIVE_ONE);
    normalized_weights(y, x)
}

/// `sqrt(remove_rate / add_rate) * pool_rate * pool_amount`
pub fn protected_amount_plus_fee(
    pool_amount: Decimal,
    pool_rate: Decimal,
    add_rate: Decimal,
    remove_rate: Decimal,
) -> Option<Decimal> {
    remove_rate
        .checked_div(add_rate)?
        .sqrt()?
        .checked_mul(pool_rate)?
        .checked_mul(pool_amount)
}

/// `1 - 2 * sqrt(r) / (r + 1)` with `r = new_rate / prev_rate`
pub fn imp_loss(prev_rate: Decimal, new_rate: Decimal) -> Option<Decimal> {
    let ratio = new_rate.checked_div(prev_rate)?;
    let scaled = ratio.sqrt()?.checked_mul(Decimal::TWO)?;
    Some(Decimal::ONE - scaled.checked_div(ratio.checked_add(Decimal::ONE)?)?)
}

/// Protection level for `elapsed` seconds, zero below `min_delay` and one from `max_delay`
pub fn protection_level(elapsed: u64, min_delay: u64, max_delay: u64) -> Option<Decimal> {
    if elapsed < min_delay {
        return Some(Decimal::ZERO);
    }
    Decimal::from(elapsed.min(max_delay)).checked_div(Decimal::from(max_delay))
}

/// Inputs of [`remove_liquidity_target_amount`], rates already divided out
#[derive(Debug, Clone, Copy)]
pub struct RemovalInputs {
    pub pool_token_rate: Decimal,
    pub pool_amount: Decimal,
    pub reserve_amount: Decimal,
    pub add_spot_rate: Decimal,
    pub remove_spot_rate: Decimal,
    pub remove_average_rate: Decimal,
    pub elapsed: u64,
}

/// `total * (1 - loss) + reserve_amount * loss * level`, `total` floored at `reserve_amount`
pub fn remove_liquidity_target_amount(
    inputs: &RemovalInputs,
    min_delay: u64,
    max_delay: u64,
) -> Option<Decimal> {
    let plus_fee = protected_amount_plus_fee(
        inputs.pool_amount,
        inputs.pool_token_rate,
        inputs.add_spot_rate,
        inputs.remove_spot_rate,
    )?;
    let total = plus_fee.max(inputs.reserve_amount);
    let loss = imp_loss(inputs.add_spot_rate, inputs.remove_average_rate)?;
    let level = protection_level(inputs.elapsed, min_delay, max_delay)?;

    let kept = total.checked_mul(Decimal::ONE - loss)?;
    let compensated = inputs
        .reserve_amount
        .checked_mul(loss)?
        .checked_mul(level)?;
    kept.checked_add(compensated)
}
