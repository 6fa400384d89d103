//! Impermanent loss protection
//!
//! Computes how much of a reserve a liquidity provider receives when removing liquidity
//! that was added at a different rate. The payout interpolates between the value of the
//! position as it stands in the pool and full compensation for impermanent loss, with
//! the protection level growing linearly with the time the liquidity stayed in the pool.
//!
//! Every rate is a [`Fraction`]; square roots of rates are taken on the separate terms when
//! their product would not fit in 256 bits.

use crate::integer_math::IntegerMath;
use bancor_types::uint::{add, div, mul, sub, U256, U512};
use bancor_types::{Fraction, MathError, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Protection delays and rate deviation bounds
pub mod defaults {
    pub const SECONDS_PER_DAY: u64 = 86_400;

    /// Liquidity removed earlier receives no compensation
    pub const MIN_PROTECTION_DELAY: u64 = 30 * SECONDS_PER_DAY;

    /// Liquidity removed at or after this delay is fully compensated
    pub const MAX_PROTECTION_DELAY: u64 = 100 * SECONDS_PER_DAY;

    /// 0.5%
    pub const AVERAGE_RATE_MAX_DEVIATION_PPM: u32 = 5_000;

    pub const PPM_RESOLUTION: u32 = 1_000_000;
}

use defaults::PPM_RESOLUTION;

/// Configuration for liquidity protection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtectionSettings {
    /// Seconds before any protection applies
    pub min_protection_delay: u64,
    /// Seconds until protection is complete
    pub max_protection_delay: u64,
    /// Largest accepted distance of the average rate from the spot rate, in PPM
    pub average_rate_max_deviation: u32,
}

impl Default for ProtectionSettings {
    fn default() -> Self {
        Self {
            min_protection_delay: defaults::MIN_PROTECTION_DELAY,
            max_protection_delay: defaults::MAX_PROTECTION_DELAY,
            average_rate_max_deviation: defaults::AVERAGE_RATE_MAX_DEVIATION_PPM,
        }
    }
}

/// Inconsistent protection settings
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Minimum protection delay {min}s exceeds maximum {max}s")]
    DelayOrder { min: u64, max: u64 },

    #[error("Maximum protection delay must be positive")]
    ZeroMaxDelay,

    #[error("Average rate deviation {deviation} ppm exceeds 1000000 ppm")]
    DeviationOutOfRange { deviation: u32 },
}

impl ProtectionSettings {
    pub fn validate(&self) -> std::result::Result<(), SettingsError> {
        if self.max_protection_delay == 0 {
            return Err(SettingsError::ZeroMaxDelay);
        }
        if self.min_protection_delay > self.max_protection_delay {
            return Err(SettingsError::DelayOrder {
                min: self.min_protection_delay,
                max: self.max_protection_delay,
            });
        }
        if self.average_rate_max_deviation > PPM_RESOLUTION {
            return Err(SettingsError::DeviationOutOfRange {
                deviation: self.average_rate_max_deviation,
            });
        }
        Ok(())
    }
}

/// Snapshot of a protected position at removal time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalParams {
    /// Reserve tokens per pool token at addition time
    pub pool_token_rate: Fraction,
    /// Pool tokens being removed
    pub pool_amount: U256,
    /// Reserve tokens originally added
    pub reserve_amount: U256,
    /// Spot rate between the reserves when the liquidity was added
    pub add_spot_rate: Fraction,
    /// Spot rate between the reserves now
    pub remove_spot_rate: Fraction,
    /// Average rate between the reserves now
    pub remove_average_rate: Fraction,
    pub add_timestamp: u64,
    pub remove_timestamp: u64,
}

/// Liquidity protection formulas
pub struct ProtectionMath;

impl ProtectionMath {
    /// Reserve tokens a position is worth now: `sqrt(remove_rate / add_rate) * pool_rate * pool_amount`
    ///
    /// When `n * pool_amount` overflows, the product is formed from a reduced ratio and
    /// the result is never lower than the truncated `(hi / d) * lo`.
    pub fn protected_amount_plus_fee(
        pool_amount: U256,
        pool_rate: Fraction,
        add_rate: Fraction,
        remove_rate: Fraction,
    ) -> Result<U256> {
        for rate in [pool_rate, add_rate, remove_rate] {
            validate_rate(rate)?;
        }

        let n = mul(
            IntegerMath::ceil_sqrt(mul(add_rate.d, remove_rate.n, "protected_amount")?),
            pool_rate.n,
            "protected_amount",
        )?;
        let d = mul(
            IntegerMath::floor_sqrt(mul(add_rate.n, remove_rate.d, "protected_amount")?),
            pool_rate.d,
            "protected_amount",
        )?;

        if let Some(x) = n.checked_mul(pool_amount) {
            return div(x, d, "protected_amount");
        }

        let (hi, lo) = if n > pool_amount {
            (n, pool_amount)
        } else {
            (pool_amount, n)
        };
        let (p, q) = IntegerMath::reduced_ratio(hi, d, U256::MAX / lo)?;
        let min = mul(div(hi, d, "protected_amount")?, lo, "protected_amount")?;

        if q.is_zero() {
            return Ok(min);
        }
        let estimate = mul(p, lo, "protected_amount")? / q;
        Ok(min.max(estimate))
    }

    /// Impermanent loss between two rates: `1 - 2 * sqrt(r) / (r + 1)`, `r = new / prev`
    ///
    /// # Examples
    /// ```rust
    /// use bancor_amm::ProtectionMath;
    /// use bancor_types::Fraction;
    ///
    /// // Rate quadrupled: 1 - 2 * 2 / 5 = 1/5
    /// let loss = ProtectionMath::imp_loss(Fraction::from_u128(1, 1), Fraction::from_u128(4, 1)).unwrap();
    /// assert_eq!(loss, Fraction::from_u128(1, 5));
    /// ```
    pub fn imp_loss(prev_rate: Fraction, new_rate: Fraction) -> Result<Fraction> {
        validate_rate(prev_rate)?;
        validate_rate(new_rate)?;

        let ratio_n = mul(new_rate.n, prev_rate.d, "imp_loss")?;
        let ratio_d = mul(new_rate.d, prev_rate.n, "imp_loss")?;

        let root = match ratio_n.checked_mul(ratio_d) {
            Some(product) => IntegerMath::floor_sqrt(product),
            None => IntegerMath::floor_sqrt(ratio_n) * IntegerMath::floor_sqrt(ratio_d),
        };
        let sum = add(ratio_n, ratio_d, "imp_loss")?;

        if (sum % U256::from(2u8)).is_zero() {
            let half = sum / U256::from(2u8);
            return Ok(Fraction::new(sub(half, root, "imp_loss")?, half));
        }
        let double_root = mul(root, U256::from(2u8), "imp_loss")?;
        Ok(Fraction::new(sub(sum, double_root, "imp_loss")?, sum))
    }

    /// Share of the loss that is compensated after holding from `add_timestamp` to
    /// `remove_timestamp`
    pub fn protection_level(
        settings: &ProtectionSettings,
        add_timestamp: u64,
        remove_timestamp: u64,
    ) -> Result<Fraction> {
        if remove_timestamp < add_timestamp {
            return Err(MathError::InvalidTimestamps {
                add: add_timestamp,
                remove: remove_timestamp,
            });
        }

        let elapsed = remove_timestamp - add_timestamp;
        if elapsed < settings.min_protection_delay {
            return Ok(Fraction::zero());
        }
        if elapsed >= settings.max_protection_delay {
            return Ok(Fraction::one());
        }
        Ok(Fraction::new(
            U256::from(elapsed),
            U256::from(settings.max_protection_delay),
        ))
    }

    /// `total * (1 - loss) + amount * loss * level`
    pub fn compensation_amount(
        amount: U256,
        total: U256,
        loss: Fraction,
        level: Fraction,
    ) -> Result<U256> {
        let level_n = mul(level.n, amount, "compensation_amount")?;
        let level_d = level.d;
        let max_val = level_n.max(level_d).max(total);
        if max_val.is_zero() {
            return Err(MathError::DivisionByZero {
                operation: "compensation_amount",
            });
        }

        let (loss_n, loss_d) = IntegerMath::reduced_ratio(loss.n, loss.d, U256::MAX / max_val)?;
        let kept = div(
            mul(total, sub(loss_d, loss_n, "compensation_amount")?, "compensation_amount")?,
            loss_d,
            "compensation_amount",
        )?;
        let compensated = div(
            mul(loss_n, level_n, "compensation_amount")?,
            mul(loss_d, level_d, "compensation_amount")?,
            "compensation_amount",
        )?;
        add(kept, compensated, "compensation_amount")
    }

    /// Reserve tokens owed for removing a protected position
    ///
    /// The position value is floored at the original deposit, the loss is measured
    /// against the average rate at removal and scaled by the protection level.
    pub fn remove_liquidity_target_amount(
        params: &RemovalParams,
        settings: &ProtectionSettings,
    ) -> Result<U256> {
        let total = Self::protected_amount_plus_fee(
            params.pool_amount,
            params.pool_token_rate,
            params.add_spot_rate,
            params.remove_spot_rate,
        )?;
        let loss = Self::imp_loss(params.add_spot_rate, params.remove_average_rate)?;
        let level =
            Self::protection_level(settings, params.add_timestamp, params.remove_timestamp)?;

        Self::compensation_amount(
            params.reserve_amount,
            params.reserve_amount.max(total),
            loss,
            level,
        )
    }

    /// Whether `average` lies within `max_deviation_ppm` of `spot`
    ///
    /// Checks `(1 - dev)^2 <= (average / spot) * (1 - dev) <= 1` on 512-bit cross products.
    pub fn average_rate_in_range(
        spot: Fraction,
        average: Fraction,
        max_deviation_ppm: u32,
    ) -> Result<bool> {
        let ppm = U512::from(PPM_RESOLUTION);
        let delta = U512::from(PPM_RESOLUTION - max_deviation_ppm.min(PPM_RESOLUTION));

        let spot_n_avg_d = spot.n.full_mul(average.d);
        let spot_d_avg_n = spot.d.full_mul(average.n);

        let scaled = |value: U512, a: U512, b: U512| {
            value
                .checked_mul(a)
                .and_then(|v| v.checked_mul(b))
                .ok_or(MathError::DomainOverflow {
                    operation: "average_rate_in_range",
                })
        };
        let min = scaled(spot_n_avg_d, delta, delta)?;
        let mid = scaled(spot_d_avg_n, delta, ppm)?;
        let max = scaled(spot_n_avg_d, ppm, ppm)?;

        Ok(min <= mid && mid <= max)
    }
}

/// Removal calculator bound to a set of protection settings
pub struct ProtectionCalculator {
    settings: ProtectionSettings,
}

impl ProtectionCalculator {
    pub fn new(settings: ProtectionSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ProtectionSettings {
        &self.settings
    }

    /// Reserve tokens owed for `params`, refusing to settle against an average rate that
    /// strayed too far from the spot rate
    pub fn target_amount(&self, params: &RemovalParams) -> Result<U256> {
        if !ProtectionMath::average_rate_in_range(
            params.remove_spot_rate,
            params.remove_average_rate,
            self.settings.average_rate_max_deviation,
        )? {
            debug!(
                spot = %params.remove_spot_rate,
                average = %params.remove_average_rate,
                "Average rate outside the accepted deviation"
            );
            return Err(MathError::RateDeviation {
                spot: params.remove_spot_rate,
                average: params.remove_average_rate,
                max_deviation_ppm: self.settings.average_rate_max_deviation,
            });
        }

        ProtectionMath::remove_liquidity_target_amount(params, &self.settings)
    }
}

impl Default for ProtectionCalculator {
    fn default() -> Self {
        Self::new(ProtectionSettings::default())
    }
}

fn validate_rate(rate: Fraction) -> Result<()> {
    if !rate.is_positive() {
        return Err(MathError::InvalidRatio {
            numerator: rate.n,
            denominator: rate.d,
        });
    }
    Ok(())
}
