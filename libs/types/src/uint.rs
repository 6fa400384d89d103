//! 256-bit unsigned integers and checked arithmetic
//!
//! Formula code never uses the wrapping operators of [`U256`] on values derived from
//! caller input. The helpers here attach the name of the failing operation so an
//! overflow deep inside a series expansion still reports where it happened.

use crate::common::errors::{MathError, Result};

pub use primitive_types::{U256, U512};

/// Parse a hexadecimal literal into a `U256` at compile time
///
/// Accepts an optional `0x` prefix and `_` separators. Invalid digits or literals wider
/// than 256 bits abort compilation when used in a `const` context.
///
/// ```rust
/// use bancor_types::{hex, U256};
///
/// const FIXED_1: U256 = hex("0x8000_0000_0000_0000_0000_0000_0000_0000");
/// assert_eq!(FIXED_1, U256::one() << 127);
/// ```
pub const fn hex(literal: &str) -> U256 {
    let bytes = literal.as_bytes();
    let mut start = 0;
    if bytes.len() >= 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X') {
        start = 2;
    }

    let mut limbs = [0u64; 4];
    let mut shift = 0usize;
    let mut i = bytes.len();
    while i > start {
        i -= 1;
        let c = bytes[i];
        if c == b'_' {
            continue;
        }
        let digit = match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'f' => c - b'a' + 10,
            b'A'..=b'F' => c - b'A' + 10,
            _ => panic!("invalid hexadecimal digit"),
        };
        if shift >= 256 {
            if digit != 0 {
                panic!("hexadecimal literal exceeds 256 bits");
            }
        } else {
            limbs[shift / 64] |= (digit as u64) << (shift % 64);
        }
        shift += 4;
    }
    U256(limbs)
}

/// `a + b`, rejecting results above `U256::MAX`
#[inline]
pub fn add(a: U256, b: U256, operation: &'static str) -> Result<U256> {
    a.checked_add(b)
        .ok_or(MathError::DomainOverflow { operation })
}

/// `a - b`, rejecting negative results
#[inline]
pub fn sub(a: U256, b: U256, operation: &'static str) -> Result<U256> {
    a.checked_sub(b)
        .ok_or(MathError::DomainOverflow { operation })
}

/// `a * b`, rejecting results above `U256::MAX`
#[inline]
pub fn mul(a: U256, b: U256, operation: &'static str) -> Result<U256> {
    a.checked_mul(b)
        .ok_or(MathError::DomainOverflow { operation })
}

/// `a / b` rounded down, rejecting a zero divisor
#[inline]
pub fn div(a: U256, b: U256, operation: &'static str) -> Result<U256> {
    a.checked_div(b)
        .ok_or(MathError::DivisionByZero { operation })
}

/// `a << bits`, rejecting any loss of set bits
#[inline]
pub fn shl(a: U256, bits: usize, operation: &'static str) -> Result<U256> {
    if a.is_zero() {
        return Ok(a);
    }
    if bits >= 256 || a.leading_zeros() < bits as u32 {
        return Err(MathError::DomainOverflow { operation });
    }
    Ok(a << bits)
}

/// Narrow a 512-bit intermediate back to 256 bits
#[inline]
pub fn narrow(value: U512, operation: &'static str) -> Result<U256> {
    U256::try_from(value).map_err(|_| MathError::DomainOverflow { operation })
}

/// Lossless conversion into the 512-bit domain for cross products
#[inline]
pub fn widen(value: U256) -> U512 {
    U512::from(value)
}
