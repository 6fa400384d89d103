//! # Bancor Formula Shared Types
//!
//! Integer, ratio and error types shared by every crate of the formula engine.
//!
//! ## Design Philosophy
//!
//! - **Fixed Width**: Every quantity is an unsigned 256-bit integer; 512-bit values only
//!   appear as transient products
//! - **No Wraparound**: Arithmetic helpers in [`uint`] reject results that leave the
//!   256-bit range instead of truncating them
//! - **Typed Failures**: A single [`MathError`] taxonomy distinguishes domain overflows,
//!   invalid ratios and invalid reserve state
//! - **Baked Tables**: [`hex`] turns hexadecimal literals into `U256` constants at compile
//!   time so precomputed tables stay readable
//!
//! ## Quick Start
//!
//! ```rust
//! use bancor_types::{uint, Fraction, MathError, U256};
//!
//! let rate = Fraction::new(U256::from(3u8), U256::from(2u8));
//! assert!(rate.is_valid());
//!
//! let overflow = uint::mul(U256::MAX, U256::from(2u8), "doubling");
//! assert!(matches!(overflow, Err(MathError::DomainOverflow { .. })));
//! ```

pub mod common;
pub mod uint;

pub use common::errors::{MathError, Result};
pub use common::fraction::Fraction;
pub use uint::{hex, U256, U512};
