//! Reserve weight rebalancing
//!
//! Given how much of the primary reserve is staked versus actually held, and an external
//! rate between the two reserves, [`WeightSolver::balanced_weights`] returns the pair of
//! weights under which the pool's internal rate matches the external one. Away from the
//! staked baseline this needs the Lambert W function, evaluated by [`crate::lambert`].

use crate::integer_math::IntegerMath;
use crate::lambert::Lambert;
use crate::power::PowerApproximation;
use crate::tables::{FIXED_1, FIXED_2, MAX_UNF_WEIGHT, MAX_WEIGHT};
use bancor_types::uint::{add, mul, U256};
use bancor_types::{MathError, Result};
use tracing::debug;

/// Weight pair solver for two-reserve pools
pub struct WeightSolver;

impl WeightSolver {
    /// Weights of the primary and secondary reserve that price the pool at `rate_n / rate_d`
    ///
    /// # Arguments
    /// * `staked` - Staked balance of the primary reserve
    /// * `primary` - Actual balance of the primary reserve
    /// * `secondary` - Actual balance of the secondary reserve
    /// * `rate_n` - Rate numerator (secondary per primary)
    /// * `rate_d` - Rate denominator
    ///
    /// # Returns
    /// `(primary_weight, secondary_weight)` summing to `MAX_WEIGHT`
    pub fn balanced_weights(
        staked: U256,
        primary: U256,
        secondary: U256,
        rate_n: U256,
        rate_d: U256,
    ) -> Result<(u32, u32)> {
        let reserve_state_valid = if staked == primary {
            !staked.is_zero() || !secondary.is_zero()
        } else {
            !staked.is_zero() && !primary.is_zero() && !secondary.is_zero()
        };
        if !reserve_state_valid {
            debug!(%staked, %primary, %secondary, "Rejecting reserve state");
            return Err(MathError::InvalidReserveState {
                staked,
                primary,
                secondary,
            });
        }
        if rate_n.is_zero() || rate_d.is_zero() {
            return Err(MathError::InvalidRatio {
                numerator: rate_n,
                denominator: rate_d,
            });
        }

        let tq = mul(staked, rate_n, "balanced_weights")?;
        let rp = mul(secondary, rate_d, "balanced_weights")?;

        match staked.cmp(&primary) {
            std::cmp::Ordering::Less => Self::weights_by_stake(primary, staked, tq, rp, true),
            std::cmp::Ordering::Greater => Self::weights_by_stake(staked, primary, tq, rp, false),
            std::cmp::Ordering::Equal => Self::normalized_weights(tq, rp),
        }
    }

    /// Solve with `hi / lo` the ratio between the larger and smaller of staked and actual
    /// balance; `lower` selects the branch where the actual balance exceeds the stake
    fn weights_by_stake(hi: U256, lo: U256, tq: U256, rp: U256, lower: bool) -> Result<(u32, u32)> {
        let (tq, rp) = Self::safe_factors(tq, rp)?;

        let f = mul(hi, FIXED_1, "balanced_weights")? / lo;
        let g = PowerApproximation::log(f)?;
        let x = mul(g, tq, "balanced_weights")? / rp;
        let y = if lower {
            Lambert::lower_stake(x)?
        } else {
            Lambert::higher_stake(x)?
        };

        Self::normalized_weights(
            mul(y, tq, "balanced_weights")?,
            mul(rp, FIXED_1, "balanced_weights")?,
        )
    }

    /// Scale `a : b` so neither term exceeds `FIXED_2`
    fn safe_factors(a: U256, b: U256) -> Result<(U256, U256)> {
        if a <= FIXED_2 && b <= FIXED_2 {
            return Ok((a, b));
        }
        if a < FIXED_2 {
            return Ok((mul(a, FIXED_2, "safe_factors")? / b, FIXED_2));
        }
        if b < FIXED_2 {
            return Ok((FIXED_2, mul(b, FIXED_2, "safe_factors")? / a));
        }
        let c = a.max(b);
        let n = PowerApproximation::floor_log2(c / FIXED_1);
        Ok((a >> n, b >> n))
    }

    /// `(w1, w2)` with `w1 = round(a * MAX_WEIGHT / (a + b))` and `w1 + w2 = MAX_WEIGHT`
    ///
    /// # Examples
    /// ```rust
    /// use bancor_amm::WeightSolver;
    /// use bancor_types::U256;
    ///
    /// let weights = WeightSolver::normalized_weights(U256::from(1u8), U256::from(3u8)).unwrap();
    /// assert_eq!(weights, (250_000, 750_000));
    /// ```
    pub fn normalized_weights(a: U256, b: U256) -> Result<(u32, u32)> {
        if a <= b {
            return Self::accurate_weights(a, b);
        }
        let (y, x) = Self::accurate_weights(b, a)?;
        Ok((x, y))
    }

    /// Same as [`Self::normalized_weights`], computed for `a <= b`
    pub fn accurate_weights(a: U256, b: U256) -> Result<(u32, u32)> {
        let (mut a, mut b) = (a, b);
        if a > MAX_UNF_WEIGHT {
            let c = a / (MAX_UNF_WEIGHT + U256::one()) + U256::one();
            a /= c;
            b /= c;
        }

        let sum = add(a, b, "accurate_weights")?;
        let x = IntegerMath::round_div(a * U256::from(MAX_WEIGHT), sum)?;
        // a <= a + b, so the rounded share never exceeds MAX_WEIGHT
        let x = x.low_u32();
        Ok((x, MAX_WEIGHT - x))
    }
}
