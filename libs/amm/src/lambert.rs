//! Fixed-point Lambert W quotients
//!
//! The weight solver needs `W(x) / x` for positive and negative `x` in the fixed-point
//! domain. Each branch is evaluated by the cheapest method that is accurate for its
//! input range:
//!
//! | Branch     | Range                                  | Method                         |
//! |------------|----------------------------------------|--------------------------------|
//! | `pos1`     | `x <= 1/e`                             | 34-term series                 |
//! | `pos2`     | `1/e < x <= 1/e + 3`                   | linear interpolation, 128 samples |
//! | `pos3`     | `1/e + 3 < x <= LAMBERT_POS3_MAXVAL`   | asymptotic `ln x - ln ln x`    |
//! | `neg1`     | `x <= 1/e` (argument `-x`)             | 34-term series                 |

use crate::power::PowerApproximation;
use crate::tables::{
    FIXED_1, LAMBERT_ARRAY, LAMBERT_COEFFICIENTS, LAMBERT_CONV_RADIUS, LAMBERT_POS2_MAXVAL,
    LAMBERT_POS2_SAMPLE, LAMBERT_POS3_MAXVAL,
};
use bancor_types::uint::{add, mul, sub, U256};
use bancor_types::{MathError, Result};
use tracing::debug;

/// `W(x) / x` approximations, all scaled by `FIXED_1`
pub struct Lambert;

impl Lambert {
    /// `W(x) / x` for a positive fixed-point `x`
    pub fn lower_stake(x: U256) -> Result<U256> {
        if x <= LAMBERT_CONV_RADIUS {
            return Self::pos1(x);
        }
        if x <= LAMBERT_POS2_MAXVAL {
            return Self::pos2(x);
        }
        if x <= LAMBERT_POS3_MAXVAL {
            return Self::pos3(x);
        }
        debug!(%x, "Lambert argument beyond the asymptotic range");
        Err(MathError::DomainOverflow {
            operation: "lambert_lower_stake",
        })
    }

    /// `W(-x) / -x` for a positive fixed-point `x`
    ///
    /// Beyond the convergence radius the solver only needs `1 / x`.
    pub fn higher_stake(x: U256) -> Result<U256> {
        if x <= LAMBERT_CONV_RADIUS {
            return Self::neg1(x);
        }
        Ok(mul(FIXED_1, FIXED_1, "lambert_higher_stake")? / x)
    }

    /// Series for `x <= 1/e`
    pub fn pos1(x: U256) -> Result<U256> {
        let mut xi = x;
        let mut res = mul(
            sub(FIXED_1, x, "lambert_pos1")?,
            LAMBERT_COEFFICIENTS[0],
            "lambert_pos1",
        )?;

        for (i, coefficient) in LAMBERT_COEFFICIENTS.iter().enumerate().skip(2) {
            xi = mul(xi, x, "lambert_pos1")? / FIXED_1;
            let term = mul(xi, *coefficient, "lambert_pos1")?;
            res = if i % 2 == 0 {
                add(res, term, "lambert_pos1")?
            } else {
                sub(res, term, "lambert_pos1")?
            };
        }

        Ok(res / LAMBERT_COEFFICIENTS[0])
    }

    /// Interpolation between the two samples that bracket `x`
    pub fn pos2(x: U256) -> Result<U256> {
        let offset = sub(x, LAMBERT_CONV_RADIUS + U256::one(), "lambert_pos2")?;
        let index = offset / LAMBERT_POS2_SAMPLE;
        if index >= U256::from(LAMBERT_ARRAY.len() - 1) {
            return Err(MathError::DomainOverflow {
                operation: "lambert_pos2",
            });
        }
        let i = index.as_usize();
        let (c, d) = (LAMBERT_ARRAY[i], LAMBERT_ARRAY[i + 1]);

        let a = LAMBERT_POS2_SAMPLE * index;
        let b = a + LAMBERT_POS2_SAMPLE;
        let lower = mul(c, b - offset, "lambert_pos2")?;
        let upper = mul(d, offset - a, "lambert_pos2")?;
        Ok(add(lower, upper, "lambert_pos2")? / LAMBERT_POS2_SAMPLE)
    }

    /// `(ln x - ln ln x + ln ln x / ln x) / x`
    pub fn pos3(x: U256) -> Result<U256> {
        let l1 = PowerApproximation::log(x)?;
        let l2 = PowerApproximation::log(l1)?;
        let correction = mul(l2, FIXED_1, "lambert_pos3")? / l1;
        let numerator = add(sub(l1, l2, "lambert_pos3")?, correction, "lambert_pos3")?;
        Ok(mul(numerator, FIXED_1, "lambert_pos3")? / x)
    }

    /// Series for `W(-x) / -x` with `x <= 1/e`
    pub fn neg1(x: U256) -> Result<U256> {
        let mut xi = x;
        let mut res = U256::zero();

        for coefficient in LAMBERT_COEFFICIENTS.iter().skip(2) {
            xi = mul(xi, x, "lambert_neg1")? / FIXED_1;
            res = add(res, mul(xi, *coefficient, "lambert_neg1")?, "lambert_neg1")?;
        }

        let res = add(res / LAMBERT_COEFFICIENTS[0], x, "lambert_neg1")?;
        add(res, FIXED_1, "lambert_neg1")
    }
}
