//! Error types for fixed-point formula evaluation
//!
//! Every failure is a rejection: the engine never clamps, wraps or substitutes a
//! default when an input leaves the domain a formula was built for.

use crate::common::fraction::Fraction;
use primitive_types::U256;
use thiserror::Error;

/// Errors that can occur while evaluating a formula
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MathError {
    /// An intermediate value would leave the 256-bit range, or an input lies above
    /// the bound of every precision level of the exponential tables
    #[error("Domain overflow in {operation}")]
    DomainOverflow { operation: &'static str },

    /// Division by a zero denominator
    #[error("Division by zero in {operation}")]
    DivisionByZero { operation: &'static str },

    /// A rate or ratio is zero where the formula requires a positive value
    #[error("Invalid ratio {numerator}/{denominator}: both terms must be positive")]
    InvalidRatio { numerator: U256, denominator: U256 },

    /// Staked and actual reserve balances violate the positivity requirements
    #[error(
        "Invalid reserve state: staked balance {staked}, primary balance {primary}, secondary balance {secondary}"
    )]
    InvalidReserveState {
        staked: U256,
        primary: U256,
        secondary: U256,
    },

    /// Pool token supply must be positive
    #[error("Invalid supply: {supply}")]
    InvalidSupply { supply: U256 },

    /// Reserve balance must be positive
    #[error("Invalid reserve balance: {balance}")]
    InvalidReserveBalance { balance: U256 },

    /// Reserve weight or reserve ratio outside its accepted range
    #[error("Invalid reserve weight {weight}: expected a value in ({min}, {max}]")]
    InvalidReserveWeight { weight: u32, min: u32, max: u32 },

    /// Amount exceeds the supply it is drawn from
    #[error("Invalid amount {amount}: exceeds supply {supply}")]
    InvalidAmount { amount: U256, supply: U256 },

    /// Integer exponent beyond what exact exponentiation supports
    #[error("Exponent {exponent} exceeds maximum {max}")]
    ExponentTooLarge { exponent: u32, max: u32 },

    /// Removal timestamp precedes the addition timestamp
    #[error("Invalid timestamps: removal at {remove} precedes addition at {add}")]
    InvalidTimestamps { add: u64, remove: u64 },

    /// Average rate too far from the spot rate to settle against
    #[error("Average rate {average} deviates more than {max_deviation_ppm} ppm from spot rate {spot}")]
    RateDeviation {
        spot: Fraction,
        average: Fraction,
        max_deviation_ppm: u32,
    },

    /// Operation needs at least one non-zero input
    #[error("{operation} requires at least one non-zero value")]
    EmptyInput { operation: &'static str },
}

pub type Result<T> = std::result::Result<T, MathError>;
