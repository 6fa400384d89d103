//! Rational values as numerator/denominator pairs
//!
//! Rates between reserves, pool token rates, impermanent loss and protection levels
//! all travel through the engine as a [`Fraction`]. No normalization happens on
//! construction: the formulas decide when and how to reduce a pair.

use primitive_types::U256;
use std::fmt;

/// A rational value `n / d` of two 256-bit integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fraction {
    pub n: U256,
    pub d: U256,
}

impl Fraction {
    pub const fn new(n: U256, d: U256) -> Self {
        Self { n, d }
    }

    /// `0 / 1`
    pub fn zero() -> Self {
        Self::new(U256::zero(), U256::one())
    }

    /// `1 / 1`
    pub fn one() -> Self {
        Self::new(U256::one(), U256::one())
    }

    /// Build from native integers, mostly for tests and configuration
    pub fn from_u128(n: u128, d: u128) -> Self {
        Self::new(U256::from(n), U256::from(d))
    }

    /// A fraction is usable as a divisor-bearing value only with a positive denominator
    pub fn is_valid(&self) -> bool {
        !self.d.is_zero()
    }

    /// Both terms strictly positive, as required of exchange rates
    pub fn is_positive(&self) -> bool {
        !self.n.is_zero() && !self.d.is_zero()
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.n, self.d)
    }
}
