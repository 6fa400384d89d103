//! Integer helpers shared by every formula
//!
//! Square roots, round-half-up division and the ratio scaling used to keep products of
//! two reserve balances inside 256 bits. Nothing here depends on the fixed-point tables.

use bancor_types::uint::{self, narrow, U256, U512};
use bancor_types::{MathError, Result};
use std::cmp::Ordering;

/// `2^128 - 1`: bound applied to each term of a pair before it is squared
pub const MAX_U128: U256 = U256([u64::MAX, u64::MAX, 0, 0]);

pub const MAX_EXP_BIT_LEN: u32 = 4;
/// Largest integer exponent [`IntegerMath::powered_ratio`] accepts
pub const MAX_EXP: u32 = (1 << MAX_EXP_BIT_LEN) - 1;

/// Integer and ratio arithmetic on 256-bit values
pub struct IntegerMath;

impl IntegerMath {
    /// Largest integer whose square does not exceed `n`
    pub fn floor_sqrt(n: U256) -> U256 {
        if n.is_zero() {
            return n;
        }
        // Seed at or above the root so Newton steps decrease monotonically
        let mut x = U256::one() << ((n.bits() + 1) / 2);
        loop {
            let y = (x + n / x) >> 1;
            if y >= x {
                return x;
            }
            x = y;
        }
    }

    /// Smallest integer whose square is at least `n`
    pub fn ceil_sqrt(n: U256) -> U256 {
        let x = Self::floor_sqrt(n);
        if x * x == n {
            x
        } else {
            x + U256::one()
        }
    }

    /// `n / d` rounded half up, without ever computing `n + d / 2`
    pub fn round_div(n: U256, d: U256) -> Result<U256> {
        if d.is_zero() {
            return Err(MathError::DivisionByZero {
                operation: "round_div",
            });
        }
        Ok(n / d + (n % d) / (d - d / 2))
    }

    /// `(n + d / 2) / d`; fails instead of wrapping when the sum overflows
    pub fn round_div_unsafe(n: U256, d: U256) -> Result<U256> {
        let sum = uint::add(n, d / 2, "round_div_unsafe")?;
        uint::div(sum, d, "round_div_unsafe")
    }

    /// Scale `a : b` to a pair summing to `scale`, assuming `a <= b`
    ///
    /// When `a * scale` would overflow, both terms are first divided by a common factor.
    /// When `a + b` itself overflows the smaller term is negligible and the result is
    /// either `(0, scale)` or `(1, scale - 1)`.
    pub fn accurate_ratio(a: U256, b: U256, scale: U256) -> Result<(U256, U256)> {
        let max_val = uint::div(U256::MAX, scale, "accurate_ratio")?;
        let (mut a, mut b) = (a, b);
        if a > max_val {
            let c = a / (max_val + U256::one()) + U256::one();
            a /= c;
            b /= c;
        }

        if a == b {
            let half = scale / 2;
            return Ok((half, half));
        }

        let n = a * scale;
        match a.checked_add(b) {
            Some(d) => {
                let x = Self::round_div(n, d)?;
                Ok((x, uint::sub(scale, x, "accurate_ratio")?))
            }
            None => {
                let gap = uint::sub(b, a, "accurate_ratio")?;
                if n < b - gap / 2 {
                    Ok((U256::zero(), scale))
                } else {
                    Ok((U256::one(), scale - U256::one()))
                }
            }
        }
    }

    /// Scale `a : b` to a pair summing to `scale`, in either order
    ///
    /// # Examples
    /// ```rust
    /// use bancor_amm::IntegerMath;
    /// use bancor_types::U256;
    ///
    /// let (x, y) = IntegerMath::normalized_ratio(U256::from(3u8), U256::from(1u8), U256::from(100u8)).unwrap();
    /// assert_eq!((x.as_u32(), y.as_u32()), (75, 25));
    /// ```
    pub fn normalized_ratio(a: U256, b: U256, scale: U256) -> Result<(U256, U256)> {
        if a <= b {
            return Self::accurate_ratio(a, b, scale);
        }
        let (y, x) = Self::accurate_ratio(b, a, scale)?;
        Ok((x, y))
    }

    /// Return `n : d` unchanged when both fit under `max`, otherwise normalized to `max`
    pub fn reduced_ratio(n: U256, d: U256, max: U256) -> Result<(U256, U256)> {
        if n > max || d > max {
            return Self::normalized_ratio(n, d, max);
        }
        Ok((n, d))
    }

    /// `(n / d)^exp` as a ratio, by binary exponentiation
    ///
    /// Every intermediate pair is reduced below `2^128` so squaring it never overflows.
    /// The result is exact while all terms stay under that bound.
    pub fn powered_ratio(n: U256, d: U256, exp: u32) -> Result<(U256, U256)> {
        if exp > MAX_EXP {
            return Err(MathError::ExponentTooLarge {
                exponent: exp,
                max: MAX_EXP,
            });
        }

        let mut ns = [U256::zero(); MAX_EXP_BIT_LEN as usize];
        let mut ds = [U256::zero(); MAX_EXP_BIT_LEN as usize];
        (ns[0], ds[0]) = Self::reduced_ratio(n, d, MAX_U128)?;

        let mut i = 0;
        while (exp >> i) > 1 {
            (ns[i + 1], ds[i + 1]) =
                Self::reduced_ratio(ns[i] * ns[i], ds[i] * ds[i], MAX_U128)?;
            i += 1;
        }

        let (mut n, mut d) = (U256::one(), U256::one());
        for i in 0..MAX_EXP_BIT_LEN as usize {
            if (exp >> i) & 1 == 1 {
                (n, d) = Self::reduced_ratio(n * ns[i], d * ds[i], MAX_U128)?;
            }
        }
        Ok((n, d))
    }

    /// Number of decimal digits in `x`; zero has none
    pub fn decimal_length(x: U256) -> u32 {
        let ten = U256::from(10u8);
        let mut x = x;
        let mut length = 0;
        while !x.is_zero() {
            x /= ten;
            length += 1;
        }
        length
    }

    /// `10^(k - 1)` where `k` is the rounded average digit count of `values`
    ///
    /// A magnitude estimate rather than a multiplicative mean.
    pub fn geometric_mean(values: &[U256]) -> Result<U256> {
        if values.is_empty() {
            return Err(MathError::EmptyInput {
                operation: "geometric_mean",
            });
        }
        let digits: u32 = values.iter().map(|v| Self::decimal_length(*v)).sum();
        let average =
            Self::round_div_unsafe(U256::from(digits), U256::from(values.len()))?.as_usize();
        if average == 0 {
            return Err(MathError::EmptyInput {
                operation: "geometric_mean",
            });
        }
        Ok(U256::exp10(average - 1))
    }

    /// `x * y / z` rounded down, with a 512-bit product
    pub fn mul_div_floor(x: U256, y: U256, z: U256) -> Result<U256> {
        if z.is_zero() {
            return Err(MathError::DivisionByZero {
                operation: "mul_div_floor",
            });
        }
        narrow(x.full_mul(y) / U512::from(z), "mul_div_floor")
    }

    /// `x * y / z` rounded up, with a 512-bit product
    pub fn mul_div_ceil(x: U256, y: U256, z: U256) -> Result<U256> {
        if z.is_zero() {
            return Err(MathError::DivisionByZero {
                operation: "mul_div_ceil",
            });
        }
        let product = x.full_mul(y);
        let divisor = U512::from(z);
        let mut quotient = product / divisor;
        if !(product % divisor).is_zero() {
            quotient += U512::one();
        }
        narrow(quotient, "mul_div_ceil")
    }

    /// Order of `a / b` relative to `c / d`, compared through exact cross products
    pub fn compare_ratios(a: U256, b: U256, c: U256, d: U256) -> Ordering {
        a.full_mul(d).cmp(&c.full_mul(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(v: u128) -> U256 {
        U256::from(v)
    }

    const SCALES: [u128; 4] = [
        1_000_000,
        1_000_000_000_000_000_000,
        1_000_000_000_000_000_000_000_000_000_000,
        u128::MAX,
    ];

    /// `1, 10, 100, ...` up to `scale`
    fn decades(scale: U256) -> Vec<U256> {
        let mut out = Vec::new();
        let mut i = U256::one();
        while i <= scale {
            out.push(i);
            i = i * U256::from(10u8);
        }
        out
    }

    /// Whether `actual` matches `a : b` within `num / den`, through exact cross products
    fn ratio_within(a: U256, b: U256, actual: (U256, U256), num: u64, den: u64) -> bool {
        let x = a.full_mul(actual.1);
        let y = b.full_mul(actual.0);
        if x == y {
            return true;
        }
        if y.is_zero() {
            return false;
        }
        let diff = if x > y { x - y } else { y - x };
        diff * U512::from(den) <= y * U512::from(num)
    }

    #[test]
    fn test_sqrt_bounds() {
        for n in 0u128..2_000 {
            let floor = IntegerMath::floor_sqrt(u(n));
            let ceil = IntegerMath::ceil_sqrt(u(n));
            assert!(floor * floor <= u(n));
            assert!((floor + U256::one()) * (floor + U256::one()) > u(n));
            assert!(ceil * ceil >= u(n));
            assert!(ceil.is_zero() || (ceil - U256::one()) * (ceil - U256::one()) < u(n));
        }
    }

    #[test]
    fn test_sqrt_at_word_width() {
        assert_eq!(IntegerMath::floor_sqrt(U256::MAX), MAX_U128);
        assert_eq!(IntegerMath::ceil_sqrt(U256::MAX), U256::one() << 128);
        assert_eq!(IntegerMath::floor_sqrt(U256::one() << 254), U256::one() << 127);
        assert_eq!(
            IntegerMath::ceil_sqrt((U256::one() << 254) + U256::one()),
            (U256::one() << 127) + U256::one()
        );
    }

    #[test]
    fn test_sqrt_around_powers_of_two() {
        for n in 1..=256usize {
            let candidates = if n < 256 {
                let power = U256::one() << n;
                vec![power - U256::one(), power, power + U256::one()]
            } else {
                vec![U256::MAX]
            };
            for value in candidates {
                let wide = U512::from(value);
                let floor = IntegerMath::floor_sqrt(value);
                let next = floor + U256::one();
                assert!(floor.full_mul(floor) <= wide, "floor_sqrt(2^{n} ~ {value})");
                assert!(next.full_mul(next) > wide, "floor_sqrt(2^{n} ~ {value})");

                let ceil = IntegerMath::ceil_sqrt(value);
                let prev = ceil - U256::one();
                assert!(ceil.full_mul(ceil) >= wide, "ceil_sqrt(2^{n} ~ {value})");
                assert!(prev.full_mul(prev) < wide, "ceil_sqrt(2^{n} ~ {value})");
            }
        }
    }

    #[test]
    fn test_round_div_half_up() {
        for n in 0u128..10 {
            for d in 1u128..=10 {
                let expected = (2 * n + d) / (2 * d);
                assert_eq!(IntegerMath::round_div(u(n), u(d)).unwrap(), u(expected));
            }
        }
    }

    #[test]
    fn test_round_div_at_word_width() {
        let max = U256::MAX;
        assert_eq!(IntegerMath::round_div(max, max).unwrap(), u(1));
        assert_eq!(IntegerMath::round_div(max - U256::one(), max).unwrap(), u(1));
        assert_eq!(IntegerMath::round_div(max / 2, max).unwrap(), u(0));
        assert_eq!(IntegerMath::round_div(max / 2 + U256::one(), max).unwrap(), u(1));
        assert_eq!(IntegerMath::round_div(max, u(2)).unwrap(), U256::one() << 255);
        assert!(IntegerMath::round_div(max, U256::zero()).is_err());
    }

    #[test]
    fn test_round_div_unsafe_rejects_overflow() {
        assert_eq!(IntegerMath::round_div_unsafe(u(7), u(2)).unwrap(), u(4));
        assert!(IntegerMath::round_div_unsafe(U256::MAX, u(4)).is_err());
    }

    #[test]
    fn test_accurate_ratio() {
        assert_eq!(
            IntegerMath::accurate_ratio(u(1), u(3), u(100)).unwrap(),
            (u(25), u(75))
        );
        assert_eq!(
            IntegerMath::accurate_ratio(U256::MAX, U256::MAX, u(1000)).unwrap(),
            (u(500), u(500))
        );
        assert_eq!(
            IntegerMath::normalized_ratio(U256::MAX, U256::MAX - U256::one(), u(1_000_000)).unwrap(),
            (u(500_000), u(500_000))
        );
        assert_eq!(
            IntegerMath::normalized_ratio(U256::MAX - U256::one(), u(2), u(1_000_000)).unwrap(),
            (u(1_000_000), u(0))
        );
        assert_eq!(
            IntegerMath::normalized_ratio(
                u(12345678901234567890),
                u(98765432109876543210),
                u(1_000_000_000)
            )
            .unwrap(),
            (u(111111110), u(888888890))
        );
    }

    #[test]
    fn test_ratios_of_small_operands() {
        for scale in SCALES.map(u) {
            for a in 0u128..10 {
                for b in 1u128..=10 {
                    let (a, b) = (u(a), u(b));
                    assert_eq!(IntegerMath::reduced_ratio(a, b, scale).unwrap(), (a, b));

                    let normalized = IntegerMath::normalized_ratio(a, b, scale).unwrap();
                    assert!(
                        ratio_within(a, b, normalized, 241, 100_000_000),
                        "normalized_ratio({a}, {b}, {scale}) = {normalized:?}"
                    );

                    if b >= a {
                        let accurate = IntegerMath::accurate_ratio(a, b, scale).unwrap();
                        assert!(
                            ratio_within(a, b, accurate, 24, 10_000_000),
                            "accurate_ratio({a}, {b}, {scale}) = {accurate:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_ratios_of_word_width_operands() {
        for scale in SCALES.map(u) {
            let step = U256::MAX / scale;
            for i in decades(scale) {
                let a = step * i + U256::one();
                for j in decades(scale) {
                    let b = step * j + U256::one();

                    let reduced = IntegerMath::reduced_ratio(a, b, scale).unwrap();
                    assert!(
                        ratio_within(a, b, reduced, 135, 1_000),
                        "reduced_ratio at scale {scale}, i = {i}, j = {j}: {reduced:?}"
                    );

                    let normalized = IntegerMath::normalized_ratio(a, b, scale).unwrap();
                    assert!(
                        ratio_within(a, b, normalized, 135, 1_000),
                        "normalized_ratio at scale {scale}, i = {i}, j = {j}: {normalized:?}"
                    );

                    if j >= i {
                        let accurate = IntegerMath::accurate_ratio(a, b, scale).unwrap();
                        assert!(
                            ratio_within(a, b, accurate, 135, 1_000),
                            "accurate_ratio at scale {scale}, i = {i}, j = {j}: {accurate:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_reduced_ratio() {
        assert_eq!(
            IntegerMath::reduced_ratio(u(10), u(3), MAX_U128).unwrap(),
            (u(10), u(3))
        );
        let (n, d) =
            IntegerMath::reduced_ratio(U256::from(3u8) << 200, U256::one() << 200, MAX_U128)
                .unwrap();
        assert_eq!(
            n,
            U256::from_dec_str("255211775190703847597530955573826158591").unwrap()
        );
        assert_eq!(
            d,
            U256::from_dec_str("85070591730234615865843651857942052864").unwrap()
        );
    }

    #[test]
    fn test_powered_ratio() {
        assert_eq!(
            IntegerMath::powered_ratio(u(3), u(2), 15).unwrap(),
            (u(14348907), u(32768))
        );
        assert_eq!(
            IntegerMath::powered_ratio(u(7), u(5), 6).unwrap(),
            (u(117649), u(15625))
        );
        assert_eq!(
            IntegerMath::powered_ratio(u(9), u(4), 0).unwrap(),
            (u(1), u(1))
        );
        assert_eq!(
            IntegerMath::powered_ratio(u(3), u(2), 16),
            Err(MathError::ExponentTooLarge {
                exponent: 16,
                max: 15
            })
        );
    }

    #[test]
    fn test_powered_ratio_is_exact_for_small_terms() {
        for a in 0u128..10 {
            for b in 1u128..=10 {
                for exp in 0..=MAX_EXP {
                    assert_eq!(
                        IntegerMath::powered_ratio(u(a), u(b), exp).unwrap(),
                        (u(a.pow(exp)), u(b.pow(exp))),
                        "({a} / {b})^{exp}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_decimal_length_and_geometric_mean() {
        assert_eq!(IntegerMath::decimal_length(U256::zero()), 0);
        assert_eq!(IntegerMath::decimal_length(u(9)), 1);
        assert_eq!(IntegerMath::decimal_length(u(10)), 2);
        assert_eq!(IntegerMath::decimal_length(U256::MAX), 78);

        let values = [u(1_000), u(100_000), u(10_000_000)];
        assert_eq!(IntegerMath::geometric_mean(&values).unwrap(), u(100_000));
        let values = [u(12), u(3_456)];
        assert_eq!(IntegerMath::geometric_mean(&values).unwrap(), u(100));

        assert!(IntegerMath::geometric_mean(&[]).is_err());
        assert!(IntegerMath::geometric_mean(&[U256::zero(), U256::zero()]).is_err());
    }

    #[test]
    fn test_mul_div() {
        let max = U256::MAX;
        assert_eq!(IntegerMath::mul_div_floor(max, max, max).unwrap(), max);
        assert_eq!(IntegerMath::mul_div_floor(u(7), u(3), u(2)).unwrap(), u(10));
        assert_eq!(IntegerMath::mul_div_ceil(u(7), u(3), u(2)).unwrap(), u(11));
        assert_eq!(IntegerMath::mul_div_ceil(u(8), u(3), u(2)).unwrap(), u(12));
        assert!(IntegerMath::mul_div_floor(max, u(2), u(1)).is_err());
        assert!(IntegerMath::mul_div_ceil(u(1), u(1), U256::zero()).is_err());
    }

    #[test]
    fn test_compare_ratios() {
        let max = U256::MAX;
        assert_eq!(
            IntegerMath::compare_ratios(u(1), u(3), u(2), u(6)),
            Ordering::Equal
        );
        assert_eq!(
            IntegerMath::compare_ratios(max, max - u(1), max - u(1), max - u(2)),
            Ordering::Less
        );
    }
}
