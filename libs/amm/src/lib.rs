//! # Bancor AMM Library - Deterministic Fixed-Point Formula Engine
//!
//! ## Purpose
//!
//! Bit-exact integer implementation of the bonding curve family used by weighted reserve
//! pools: token purchase and sale pricing, cross-reserve conversion, multi-reserve
//! funding and liquidation, rebalancing reserve weights to an external rate, and
//! impermanent-loss compensation for protected liquidity. Every result is a pure function
//! of its 256-bit integer inputs, so independent implementations agree to the last unit.
//!
//! ## Integration Points
//!
//! - **Input Sources**: Pool token supply, reserve balances, reserve weights in PPM, rates
//!   as integer fractions, deposit and removal timestamps
//! - **Output Destinations**: Converters quoting trades, weight rebalancers, liquidity
//!   protection settlement
//! - **Precision**: Fixed-point at up to 127 fractional bits, results rounded in the
//!   direction that never favours the caller
//! - **Validation**: Every overflow and domain violation surfaces as a
//!   [`bancor_types::MathError`] instead of wrapping
//!
//! ## Architecture Role
//!
//! [`IntegerMath`] supplies rounding and ratio primitives, [`PowerApproximation`] turns
//! `(a / b)^(c / d)` into a scaled integer, and the [`BancorFormula`], [`WeightSolver`]
//! and [`ProtectionMath`] front ends compose them. [`reference`] holds the `Decimal`
//! closed forms the tests measure the engine against.
//!
//! See [`architecture_diagram()`] for visual representation of the data flow.
//!
//! ## Performance Profile
//!
//! - **Allocation**: None; every formula works on stack-held `U256` values
//! - **Power**: One logarithm, one exponential and a binary search over 96 precisions
//! - **Weights**: Adds a Lambert W evaluation (series, table or asymptotic form)
//! - **Concurrency**: Stateless associated functions, safe to call from any thread

pub mod curve;
pub mod integer_math;
pub mod lambert;
pub mod power;
pub mod protection;
pub mod reference;
pub mod tables;
pub mod weights;

pub use curve::BancorFormula;
pub use integer_math::IntegerMath;
pub use lambert::Lambert;
pub use power::PowerApproximation;
pub use protection::{
    ProtectionCalculator, ProtectionMath, ProtectionSettings, RemovalParams, SettingsError,
};
pub use weights::WeightSolver;

/// Decimal types for the reference model
pub use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;

/// Architecture diagram showing how the formula layers depend on each other
#[cfg_attr(doc, aquamarine::aquamarine)]
/// ```mermaid
/// graph LR
///     subgraph Primitives["🔢 Integer Primitives"]
///         RD[Round Div]
///         SQ[Floor / Ceil Sqrt]
///         RR[Reduced Ratios]
///         TB[Precision Tables]
///     end
///
///     subgraph Core["🧮 Fixed-Point Core"]
///         LG[Optimal / General Log]
///         EX[Optimal / General Exp]
///         PW[Power]
///         LW[Lambert W]
///     end
///
///     subgraph Formulas["📐 Formulas"]
///         BC[Bonding Curve]
///         WS[Weight Solver]
///         PM[Protection Math]
///     end
///
///     subgraph Output["🎯 Consumers"]
///         CV[Converters]
///         RB[Rebalancers]
///         LP[Protected Removals]
///     end
///
///     RD --> WS
///     SQ --> PM
///     RR --> PW
///     RR --> PM
///     TB --> EX
///     TB --> LW
///
///     LG --> PW
///     EX --> PW
///     LG --> LW
///
///     PW --> BC
///     LW --> WS
///
///     BC --> CV
///     WS --> RB
///     PM --> LP
///
///     style Primitives fill:#e1f5fe
///     style Core fill:#fff3e0
///     style Formulas fill:#f3e5f5
///     style Output fill:#e8f5e9
/// ```
pub fn architecture_diagram() {
    // This function exists solely for documentation purposes
    // The diagram is rendered by aquamarine in rustdoc
}
