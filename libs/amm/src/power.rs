//! Fixed-point `(baseN / baseD)^(expN / expD)`
//!
//! Results are returned together with the precision `p` they are scaled by, so a caller
//! interprets `(result, p)` as `result / 2^p`. The precision is the highest one whose
//! exponential series still fits in 256 bits for the requested input.
//!
//! Two evaluation paths exist for each half of `exp(ln(base) * exponent)`:
//!
//! - `optimal_log` / `optimal_exp` cover the common ranges (`base < e`, scaled
//!   exponent `< 16`) with fast, one-sided accurate approximations at precision 127
//! - `general_log` / `general_exp` cover everything else, with
//!   [`PowerApproximation::find_position_in_max_exp_array`] picking the precision

use crate::integer_math::MAX_EXP;
use crate::tables::{
    EXP_COEFFICIENTS, EXP_HI_TERMS, EXP_LO_TERMS, FIXED_1, FIXED_2, LN2_DENOMINATOR,
    LN2_NUMERATOR, LOG_HI_TERMS, LOG_LO_TERMS, MAX_EXP_ARRAY, MAX_NUM, MAX_PRECISION,
    MAX_VAL_ARRAY, MIN_PRECISION, OPT_EXP_MAX_VAL, OPT_LOG_MAX_VAL,
};
use bancor_types::uint::{add, mul, sub, U256, U512};
use bancor_types::{MathError, Result};
use tracing::{debug, trace};

/// Table-driven logarithm and exponential approximations
pub struct PowerApproximation;

impl PowerApproximation {
    /// `(baseN / baseD)^(expN / expD)` as `(result, precision)`
    ///
    /// # Arguments
    /// * `base_n` - Base numerator, must be below `2^129`
    /// * `base_d` - Base denominator, must be positive
    /// * `exp_n` - Exponent numerator
    /// * `exp_d` - Exponent denominator, must be positive
    ///
    /// # Returns
    /// The power scaled by `2^precision`. Inputs whose result would need more than the
    /// lowest precision of the exponential tables fail with `DomainOverflow`.
    pub fn power(base_n: U256, base_d: U256, exp_n: u32, exp_d: u32) -> Result<(U256, usize)> {
        if base_n >= MAX_NUM {
            debug!(%base_n, "Base numerator above 2^129");
            return Err(MathError::DomainOverflow { operation: "power" });
        }
        if base_d.is_zero() || exp_d == 0 {
            return Err(MathError::DivisionByZero { operation: "power" });
        }
        if base_n.is_zero() {
            let result = if exp_n == 0 { FIXED_1 } else { U256::zero() };
            return Ok((result, MAX_PRECISION));
        }

        if base_n < base_d {
            trace!("Base below one, evaluating the reciprocal");
            let (inverse, precision) = Self::power(base_d, base_n, exp_n, exp_d)?;
            let result = (U256::one() << (2 * precision))
                .checked_div(inverse)
                .ok_or(MathError::DivisionByZero { operation: "power" })?;
            return Ok((result, precision));
        }

        if exp_n % exp_d == 0 && exp_n / exp_d <= MAX_EXP {
            if let Some((n, d)) = Self::exact_power(base_n, base_d, exp_n, exp_d) {
                if let Some(exact) = Self::rescale(n, d) {
                    trace!(exponent = exp_n / exp_d, "Integer exponent shortcut");
                    return Ok(exact);
                }
            }
            trace!(exponent = exp_n / exp_d, "Integer power out of exact range, using tables");
        }

        let base = mul(base_n, FIXED_1, "power")? / base_d;
        let base_log = if base < OPT_LOG_MAX_VAL {
            Self::optimal_log(base)?
        } else {
            trace!("Base beyond e, using general_log");
            Self::general_log(base)?
        };

        let base_log_times_exp = mul(base_log, U256::from(exp_n), "power")? / U256::from(exp_d);
        if base_log_times_exp < OPT_EXP_MAX_VAL {
            return Ok((Self::optimal_exp(base_log_times_exp)?, MAX_PRECISION));
        }

        let precision = Self::find_position_in_max_exp_array(base_log_times_exp)?;
        trace!(precision, "Scaled exponent beyond 16, using general_exp");
        let result = Self::general_exp(
            base_log_times_exp >> (MAX_PRECISION - precision),
            precision,
        )?;
        Ok((result, precision))
    }

    /// Exact `(baseN / baseD)^(expN / expD)` as an unreduced ratio
    ///
    /// Only for the inputs [`Self::power`] evaluates by exact multiplication: an integer
    /// exponent up to 15, `baseD <= baseN < 2^129`, both powers inside 256 bits and a
    /// result within the table bound of some precision. `None` otherwise.
    pub fn exact_power(base_n: U256, base_d: U256, exp_n: u32, exp_d: u32) -> Option<(U256, U256)> {
        if base_n >= MAX_NUM || base_n < base_d || exp_d == 0 || exp_n % exp_d != 0 {
            return None;
        }
        let exponent = exp_n / exp_d;
        if exponent > MAX_EXP {
            return None;
        }
        let k = U256::from(exponent);
        let n = base_n.checked_pow(k)?;
        let d = base_d.checked_pow(k)?;
        Self::rescale(n, d).map(|_| (n, d))
    }

    /// `n / d` at the highest precision `p` whose result does not exceed `MAX_VAL_ARRAY[p]`,
    /// rounded down
    fn rescale(n: U256, d: U256) -> Option<(U256, usize)> {
        if d.is_zero() {
            return None;
        }
        let d_wide = U512::from(d);
        for precision in (MIN_PRECISION..=MAX_PRECISION).rev() {
            let scaled = n.full_mul(U256::one() << precision) / d_wide;
            if let Ok(result) = U256::try_from(scaled) {
                if result <= MAX_VAL_ARRAY[precision] {
                    return Some((result, precision));
                }
            }
        }
        None
    }

    /// Position of the highest set bit; `floor_log2(0) == 0`
    pub fn floor_log2(n: U256) -> u32 {
        let mut n = n;
        let mut res = 0u32;

        if n < U256::from(256u32) {
            while n > U256::one() {
                n >>= 1;
                res += 1;
            }
        } else {
            let mut s = 128u32;
            while s > 0 {
                if n >= U256::one() << s {
                    n >>= s;
                    res |= s;
                }
                s >>= 1;
            }
        }

        res
    }

    /// Highest precision `p` with `x <= (MAX_EXP_ARRAY[p] + 1) * 2^(127 - p) - 1`
    ///
    /// The scaled bound shrinks as `p` grows, so a binary search finds the last
    /// precision whose bound still admits `x`.
    pub fn find_position_in_max_exp_array(x: U256) -> Result<usize> {
        let fits = |precision: usize| (x >> (MAX_PRECISION - precision)) <= MAX_EXP_ARRAY[precision];

        let mut lo = MIN_PRECISION;
        let mut hi = MAX_PRECISION;
        while lo + 1 < hi {
            let mid = (lo + hi) / 2;
            if fits(mid) {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        if fits(hi) {
            return Ok(hi);
        }
        if fits(lo) {
            return Ok(lo);
        }

        debug!(%x, "Exponent above the lowest precision bound");
        Err(MathError::DomainOverflow {
            operation: "find_position_in_max_exp_array",
        })
    }

    /// `e^(x / 2^p) * 2^p` by a 33-term Taylor series
    ///
    /// Exact at the table boundary: `general_exp(MAX_EXP_ARRAY[p], p) == MAX_VAL_ARRAY[p]`.
    /// One past the boundary the series leaves 256 bits, so `general_exp(MAX_EXP_ARRAY[p] + 1, p)`
    /// fails with `DomainOverflow` instead of returning a value below `MAX_VAL_ARRAY[p]`.
    pub fn general_exp(x: U256, precision: usize) -> Result<U256> {
        let mut xi = x;
        let mut res = U256::zero();

        for coefficient in &EXP_COEFFICIENTS[1..] {
            xi = mul(xi, x, "general_exp")? >> precision;
            res = add(res, mul(xi, *coefficient, "general_exp")?, "general_exp")?;
        }

        let res = add(res / EXP_COEFFICIENTS[0], x, "general_exp")?;
        add(res, U256::one() << precision, "general_exp")
    }

    /// `ln(x / 2^127) * 2^127` for `x >= FIXED_1`
    ///
    /// The integer part of `log2` comes from `floor_log2`, the fraction from 127
    /// successive squarings; the sum is converted with `ln(2)`.
    pub fn general_log(x: U256) -> Result<U256> {
        let mut x = x;
        let mut res = U256::zero();

        if x >= FIXED_2 {
            let count = Self::floor_log2(x / FIXED_1);
            x >>= count;
            res = U256::from(count) * FIXED_1;
        }

        if x > FIXED_1 {
            for i in (1..=MAX_PRECISION).rev() {
                x = mul(x, x, "general_log")? / FIXED_1;
                if x >= FIXED_2 {
                    x >>= 1;
                    res = add(res, U256::one() << (i - 1), "general_log")?;
                }
            }
        }

        Ok(mul(res, LN2_NUMERATOR, "general_log")? / LN2_DENOMINATOR)
    }

    /// `ln(x / 2^127) * 2^127` for `FIXED_1 <= x < OPT_LOG_MAX_VAL`
    ///
    /// Never above the true value, and within one part in 10^35 of it.
    pub fn optimal_log(x: U256) -> Result<U256> {
        let mut x = x;
        let mut res = U256::zero();

        for (val, exp) in LOG_HI_TERMS.iter() {
            if x >= *exp {
                res = add(res, *val, "optimal_log")?;
                x = mul(x, FIXED_1, "optimal_log")? / *exp;
            }
        }

        let y = sub(x, FIXED_1, "optimal_log")?;
        let w = mul(y, y, "optimal_log")? / FIXED_1;
        let mut z = y;
        let last = LOG_LO_TERMS.len() - 1;
        for (i, (num, den)) in LOG_LO_TERMS.iter().enumerate() {
            let term = mul(z, sub(*num, y, "optimal_log")?, "optimal_log")? / *den;
            res = add(res, term, "optimal_log")?;
            if i < last {
                z = mul(z, w, "optimal_log")? / FIXED_1;
            }
        }

        Ok(res)
    }

    /// `e^(x / 2^127) * 2^127` for `x < OPT_EXP_MAX_VAL`
    ///
    /// Never above the true value, and within 1.4 parts in 10^36 of it.
    pub fn optimal_exp(x: U256) -> Result<U256> {
        let y = x % EXP_HI_TERMS[0].0;
        let mut z = y;
        let mut res = U256::zero();

        for val in &EXP_LO_TERMS[1..] {
            z = mul(z, y, "optimal_exp")? / FIXED_1;
            res = add(res, mul(z, *val, "optimal_exp")?, "optimal_exp")?;
        }
        res = add(res / EXP_LO_TERMS[0], y, "optimal_exp")?;
        res = add(res, FIXED_1, "optimal_exp")?;

        for (bit, num, den) in EXP_HI_TERMS.iter() {
            if !(x & *bit).is_zero() {
                res = mul(res, *num, "optimal_exp")? / *den;
            }
        }

        Ok(res)
    }

    /// Logarithm on the faster path available for `x`
    pub(crate) fn log(x: U256) -> Result<U256> {
        if x < OPT_LOG_MAX_VAL {
            Self::optimal_log(x)
        } else {
            Self::general_log(x)
        }
    }
}
