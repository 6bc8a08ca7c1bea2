//! # Fixed64
//! A 64-bit two's-complement integer kept as two 32-bit words. Arithmetic wraps on overflow,
//! including the cases where native `i64` operators would panic (`MIN / -1`, `-MIN`).
//! # Example
//! ```
//! use exact_int::Fixed64;
//!
//! let a = Fixed64::from_i64(i64::MAX);
//! assert_eq!(a + Fixed64::ONE, Fixed64::MIN_VALUE);
//! assert_eq!(Fixed64::MIN_VALUE * Fixed64::from_int(-1), Fixed64::MIN_VALUE);
//! assert_eq!((Fixed64::from_int(-7) / Fixed64::from_int(2)).to_string(), "-3");
//! ```

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::fmt::{self, Display};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    Neg, Not,
};
use std::str::FromStr;

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::big_num_error::*;
use crate::division::{approximate_quotient, ApproximateDivision};
use crate::BigInt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fixed64 {
    low: u32,
    high: u32,
}

impl Fixed64 {
    pub const ZERO: Fixed64 = Fixed64::from_bits(0, 0);
    pub const ONE: Fixed64 = Fixed64::from_bits(1, 0);
    pub const NEG_ONE: Fixed64 = Fixed64::from_bits(u32::MAX, u32::MAX);
    pub const MAX_VALUE: Fixed64 = Fixed64::from_bits(u32::MAX, 0x7FFF_FFFF);
    pub const MIN_VALUE: Fixed64 = Fixed64::from_bits(0, 0x8000_0000);
    const TWO_PWR_24: Fixed64 = Fixed64::from_bits(1 << 24, 0);
}

// 构造
impl Fixed64 {
    pub const fn from_bits(low: u32, high: u32) -> Fixed64 {
        Fixed64 { low, high }
    }

    pub fn from_int(value: i32) -> Fixed64 {
        Fixed64::from_int_in(&FIXED64_CACHE, value)
    }

    pub fn from_int_in(cache: &SmallValueCache<Fixed64>, value: i32) -> Fixed64 {
        cache.get_or_insert_with(value, || {
            Fixed64::from_bits(value as u32, if value < 0 { u32::MAX } else { 0 })
        })
    }

    pub const fn from_i64(value: i64) -> Fixed64 {
        Fixed64::from_bits(value as u32, (value >> 32) as u32)
    }

    /// Reinterprets an unsigned 64-bit pattern; values past `i64::MAX` come out negative.
    pub const fn from_u64_wrapping(value: u64) -> Fixed64 {
        Fixed64::from_bits(value as u32, (value >> 32) as u32)
    }

    /// Truncates toward zero and saturates at the ends of the range. NaN and infinities
    /// become zero.
    pub fn from_f64(value: f64) -> Fixed64 {
        if !value.is_finite() {
            Fixed64::ZERO
        } else if value <= -TWO_PWR_63_DBL {
            Fixed64::MIN_VALUE
        } else if value + 1.0 >= TWO_PWR_63_DBL {
            Fixed64::MAX_VALUE
        } else if value < 0.0 {
            Fixed64::from_f64(-value).negate()
        } else {
            Fixed64::from_bits(
                (value % TWO_PWR_32_DBL) as u32,
                (value / TWO_PWR_32_DBL) as u32,
            )
        }
    }
}

impl From<i32> for Fixed64 {
    fn from(value: i32) -> Self {
        Fixed64::from_int(value)
    }
}

impl From<i64> for Fixed64 {
    fn from(value: i64) -> Self {
        Fixed64::from_i64(value)
    }
}

// 访问
impl Fixed64 {
    pub const fn low_bits(self) -> u32 {
        self.low
    }

    pub const fn high_bits(self) -> u32 {
        self.high
    }

    pub const fn to_i64(self) -> i64 {
        ((self.high as u64) << 32 | self.low as u64) as i64
    }

    pub const fn to_u64_wrapping(self) -> u64 {
        (self.high as u64) << 32 | self.low as u64
    }

    pub const fn to_i32_wrapping(self) -> i32 {
        self.low as i32
    }

    pub fn to_f64(self) -> f64 {
        (self.high as i32) as f64 * TWO_PWR_32_DBL + self.low as f64
    }

    pub fn is_zero(self) -> bool {
        self.high == 0 && self.low == 0
    }

    pub fn is_negative(self) -> bool {
        (self.high as i32) < 0
    }

    pub fn is_odd(self) -> bool {
        self.low & 1 == 1
    }

    pub fn count_ones(self) -> u32 {
        self.low.count_ones() + self.high.count_ones()
    }

    pub fn leading_zeros(self) -> u32 {
        if self.high != 0 {
            self.high.leading_zeros()
        } else {
            u32::BITS + self.low.leading_zeros()
        }
    }

    pub fn trailing_zeros(self) -> u32 {
        if self.low != 0 {
            self.low.trailing_zeros()
        } else {
            u32::BITS + self.high.trailing_zeros()
        }
    }

    /// `[bits 0..16, 16..32, 32..48, 48..64]`
    fn limbs(self) -> [u64; 4] {
        [
            (self.low & 0xFFFF) as u64,
            (self.low >> 16) as u64,
            (self.high & 0xFFFF) as u64,
            (self.high >> 16) as u64,
        ]
    }

    fn from_limbs(c00: u64, c16: u64, c32: u64, c48: u64) -> Fixed64 {
        Fixed64::from_bits(((c16 << 16) | c00) as u32, ((c48 << 16) | c32) as u32)
    }
}

// 比较
impl Fixed64 {
    pub fn compare(self, other: Fixed64) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ if self.subtract(other).is_negative() => Ordering::Less,
            _ => Ordering::Greater,
        }
    }
}

impl PartialOrd for Fixed64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fixed64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(*other)
    }
}

// 加减法
impl Fixed64 {
    fn add_limbs(self, other: Fixed64) -> Fixed64 {
        let [a00, a16, a32, a48] = self.limbs();
        let [b00, b16, b32, b48] = other.limbs();

        let mut c00 = a00 + b00;
        let mut c16 = c00 >> 16;
        c00 &= 0xFFFF;
        c16 += a16 + b16;
        let mut c32 = c16 >> 16;
        c16 &= 0xFFFF;
        c32 += a32 + b32;
        let mut c48 = c32 >> 16;
        c32 &= 0xFFFF;
        c48 += a48 + b48;
        c48 &= 0xFFFF;
        Fixed64::from_limbs(c00, c16, c32, c48)
    }

    pub fn subtract(self, other: Fixed64) -> Fixed64 {
        self.add_limbs(other.negate())
    }

    /// `MIN_VALUE` is its own negation.
    pub fn negate(self) -> Fixed64 {
        if self == Fixed64::MIN_VALUE {
            Fixed64::MIN_VALUE
        } else {
            self.not_bits().add_limbs(Fixed64::ONE)
        }
    }

    pub fn abs(self) -> Fixed64 {
        if self.is_negative() {
            self.negate()
        } else {
            self
        }
    }

    pub fn signum(self) -> Fixed64 {
        match self.compare(Fixed64::ZERO) {
            Ordering::Greater => Fixed64::ONE,
            Ordering::Less => Fixed64::NEG_ONE,
            Ordering::Equal => Fixed64::ZERO,
        }
    }
}

// 乘法
impl Fixed64 {
    pub fn multiply(self, other: Fixed64) -> Fixed64 {
        if self.is_zero() || other.is_zero() {
            return Fixed64::ZERO;
        }

        if self == Fixed64::MIN_VALUE {
            return if other.is_odd() { Fixed64::MIN_VALUE } else { Fixed64::ZERO };
        } else if other == Fixed64::MIN_VALUE {
            return if self.is_odd() { Fixed64::MIN_VALUE } else { Fixed64::ZERO };
        }

        match (self.is_negative(), other.is_negative()) {
            (true, true) => return self.negate().multiply(other.negate()),
            (true, false) => return self.negate().multiply(other).negate(),
            (false, true) => return self.multiply(other.negate()).negate(),
            (false, false) => {}
        }

        if self < Fixed64::TWO_PWR_24 && other < Fixed64::TWO_PWR_24 {
            return Fixed64::from_f64(self.to_f64() * other.to_f64());
        }

        let [a00, a16, a32, a48] = self.limbs();
        let [b00, b16, b32, b48] = other.limbs();

        let mut c00 = a00 * b00;
        let mut c16 = c00 >> 16;
        c00 &= 0xFFFF;
        c16 += a16 * b00;
        let mut c32 = c16 >> 16;
        c16 &= 0xFFFF;
        c16 += a00 * b16;
        c32 += c16 >> 16;
        c16 &= 0xFFFF;
        c32 += a32 * b00;
        let mut c48 = c32 >> 16;
        c32 &= 0xFFFF;
        c32 += a16 * b16;
        c48 += c32 >> 16;
        c32 &= 0xFFFF;
        c32 += a00 * b32;
        c48 += c32 >> 16;
        c32 &= 0xFFFF;
        c48 += a48 * b00 + a32 * b16 + a16 * b32 + a00 * b48;
        c48 &= 0xFFFF;
        Fixed64::from_limbs(c00, c16, c32, c48)
    }
}

// 除法
impl Fixed64 {
    /// Quotient rounded toward zero. `MIN_VALUE / -1` wraps to `MIN_VALUE`.
    pub fn checked_quot(self, other: Fixed64) -> BigNumResult<Fixed64> {
        if other.is_zero() {
            return Err(BigNumError::DivisionByZero);
        }
        Ok(self.quot_nonzero(other))
    }

    fn quot_nonzero(self, other: Fixed64) -> Fixed64 {
        if self.is_zero() {
            return Fixed64::ZERO;
        }

        if self == Fixed64::MIN_VALUE {
            if other == Fixed64::ONE || other == Fixed64::NEG_ONE {
                return Fixed64::MIN_VALUE;
            } else if other == Fixed64::MIN_VALUE {
                return Fixed64::ONE;
            }
            // |MIN_VALUE| has no positive counterpart: divide half of it, then fix up
            let approx = self.shift_right(1).quot_nonzero(other).shift_left(1);
            if approx.is_zero() {
                return if other.is_negative() { Fixed64::ONE } else { Fixed64::NEG_ONE };
            }
            let rem = self.subtract(other.multiply(approx));
            return approx.add_limbs(rem.quot_nonzero(other));
        } else if other == Fixed64::MIN_VALUE {
            return Fixed64::ZERO;
        }

        match (self.is_negative(), other.is_negative()) {
            (true, true) => self.negate().quot_nonzero(other.negate()),
            (true, false) => self.negate().quot_nonzero(other).negate(),
            (false, true) => self.quot_nonzero(other.negate()).negate(),
            (false, false) => approximate_quotient(&self, &other),
        }
    }

    /// Remainder of [`Fixed64::checked_quot`]; carries the sign of `self`.
    pub fn checked_rem(self, other: Fixed64) -> BigNumResult<Fixed64> {
        let q = self.checked_quot(other)?;
        Ok(self.subtract(q.multiply(other)))
    }

    /// Quotient rounded toward negative infinity.
    pub fn checked_div_floor(self, other: Fixed64) -> BigNumResult<Fixed64> {
        let q = self.checked_quot(other)?;
        let r = self.subtract(q.multiply(other));
        let self_positive = self > Fixed64::ZERO;
        let other_positive = other > Fixed64::ZERO;
        if self_positive != other_positive && !r.is_zero() {
            Ok(q.subtract(Fixed64::ONE))
        } else {
            Ok(q)
        }
    }

    /// Remainder of [`Fixed64::checked_div_floor`]; carries the sign of `other`.
    pub fn checked_mod_floor(self, other: Fixed64) -> BigNumResult<Fixed64> {
        let r = self.checked_rem(other)?;
        // opposite signs, so the sum stays in range
        if !r.is_zero() && r.is_negative() != other.is_negative() {
            Ok(r.add_limbs(other))
        } else {
            Ok(r)
        }
    }

    fn quot_or_panic(self, other: Fixed64) -> Fixed64 {
        match self.checked_quot(other) {
            Ok(q) => q,
            Err(e) => panic!("{}", e),
        }
    }

    fn rem_or_panic(self, other: Fixed64) -> Fixed64 {
        match self.checked_rem(other) {
            Ok(r) => r,
            Err(e) => panic!("{}", e),
        }
    }
}

impl ApproximateDivision for Fixed64 {
    fn zero() -> Self {
        Fixed64::ZERO
    }

    fn one() -> Self {
        Fixed64::ONE
    }

    fn is_zero(&self) -> bool {
        Fixed64::is_zero(*self)
    }

    fn is_negative(&self) -> bool {
        Fixed64::is_negative(*self)
    }

    fn estimate_ratio(&self, divisor: &Self) -> (f64, u32) {
        (self.to_f64() / divisor.to_f64(), 0)
    }

    fn from_estimate(approx: f64, _scale: u32) -> Self {
        Fixed64::from_f64(approx)
    }

    fn plus(&self, other: &Self) -> Self {
        self.add_limbs(*other)
    }

    fn minus(&self, other: &Self) -> Self {
        self.subtract(*other)
    }

    fn times(&self, other: &Self) -> Self {
        self.multiply(*other)
    }
}

// 位运算
impl Fixed64 {
    fn not_bits(self) -> Fixed64 {
        Fixed64::from_bits(!self.low, !self.high)
    }

    fn and_bits(self, other: Fixed64) -> Fixed64 {
        Fixed64::from_bits(self.low & other.low, self.high & other.high)
    }

    fn or_bits(self, other: Fixed64) -> Fixed64 {
        Fixed64::from_bits(self.low | other.low, self.high | other.high)
    }

    fn xor_bits(self, other: Fixed64) -> Fixed64 {
        Fixed64::from_bits(self.low ^ other.low, self.high ^ other.high)
    }
}

// 移位
impl Fixed64 {
    /// Only the low six bits of `n` are used.
    pub fn shift_left(self, n: u32) -> Fixed64 {
        let n = n & 63;
        if n == 0 {
            self
        } else if n < 32 {
            Fixed64::from_bits(
                self.low << n,
                (self.high << n) | (self.low >> (32 - n)),
            )
        } else {
            Fixed64::from_bits(0, self.low << (n - 32))
        }
    }

    /// Arithmetic shift. Only the low six bits of `n` are used.
    pub fn shift_right(self, n: u32) -> Fixed64 {
        let n = n & 63;
        let high = self.high as i32;
        if n == 0 {
            self
        } else if n < 32 {
            Fixed64::from_bits(
                (self.low >> n) | (self.high << (32 - n)),
                (high >> n) as u32,
            )
        } else {
            Fixed64::from_bits(
                (high >> (n - 32)) as u32,
                if high >= 0 { 0 } else { u32::MAX },
            )
        }
    }

    /// Logical shift. Only the low six bits of `n` are used.
    pub fn shift_right_unsigned(self, n: u32) -> Fixed64 {
        let n = n & 63;
        if n == 0 {
            self
        } else if n < 32 {
            Fixed64::from_bits(
                (self.low >> n) | (self.high << (32 - n)),
                self.high >> n,
            )
        } else if n == 32 {
            Fixed64::from_bits(self.high, 0)
        } else {
            Fixed64::from_bits(self.high >> (n - 32), 0)
        }
    }
}

// 文本
impl Display for Fixed64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&BigInt::from(*self), f)
    }
}

/// Literals outside the 64-bit range keep their low 64 bits.
impl FromStr for Fixed64 {
    type Err = BigNumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(BigInt::from_decimal_str(s)?.to_fixed64())
    }
}

macro_rules! impl_bin_op {
    ($($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident, $inner: ident;)*) => {
    $(
    impl $imp for Fixed64 {
        type Output = Fixed64;

        fn $method(self, rhs: Fixed64) -> Self::Output {
            self.$inner(rhs)
        }
    }

    impl $assign_imp for Fixed64 {
        fn $assign_method(&mut self, rhs: Fixed64) {
            *self = self.$inner(rhs);
        }
    }
    )*
    };
}

impl_bin_op! {
    Add, add, AddAssign, add_assign, add_limbs;
    Sub, sub, SubAssign, sub_assign, subtract;
    Mul, mul, MulAssign, mul_assign, multiply;
    Div, div, DivAssign, div_assign, quot_or_panic;
    Rem, rem, RemAssign, rem_assign, rem_or_panic;
    BitAnd, bitand, BitAndAssign, bitand_assign, and_bits;
    BitOr, bitor, BitOrAssign, bitor_assign, or_bits;
    BitXor, bitxor, BitXorAssign, bitxor_assign, xor_bits;
}

impl Shl<u32> for Fixed64 {
    type Output = Fixed64;

    fn shl(self, n: u32) -> Self::Output {
        self.shift_left(n)
    }
}

impl ShlAssign<u32> for Fixed64 {
    fn shl_assign(&mut self, n: u32) {
        *self = self.shift_left(n);
    }
}

impl Shr<u32> for Fixed64 {
    type Output = Fixed64;

    fn shr(self, n: u32) -> Self::Output {
        self.shift_right(n)
    }
}

impl ShrAssign<u32> for Fixed64 {
    fn shr_assign(&mut self, n: u32) {
        *self = self.shift_right(n);
    }
}

impl Neg for Fixed64 {
    type Output = Fixed64;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Not for Fixed64 {
    type Output = Fixed64;

    fn not(self) -> Self::Output {
        self.not_bits()
    }
}

#[cfg(test)]
fn fx(value: i64) -> Fixed64 {
    Fixed64::from_i64(value)
}

#[test]
fn test_constants() {
    assert_eq!(Fixed64::MAX_VALUE.to_i64(), i64::MAX);
    assert_eq!(Fixed64::MIN_VALUE.to_i64(), i64::MIN);
    assert_eq!(Fixed64::NEG_ONE.to_i64(), -1);
    assert_eq!(Fixed64::from_int(-1), Fixed64::NEG_ONE);
    assert_eq!(Fixed64::from(-5).to_i64(), -5);
    assert_eq!(Fixed64::from(1i64 << 40).high_bits(), 1 << 8);
}

#[test]
fn test_unsigned_view() {
    assert_eq!(Fixed64::from_u64_wrapping(u64::MAX), Fixed64::NEG_ONE);
    assert_eq!(Fixed64::from_u64_wrapping(1 << 63), Fixed64::MIN_VALUE);
    assert_eq!(Fixed64::NEG_ONE.to_u64_wrapping(), u64::MAX);
    // shifting past bit 63 drops the high bits
    let shifted = Fixed64::from_u64_wrapping(0xF000_0000_0000_0001) << 4;
    assert_eq!(shifted.to_u64_wrapping(), 0x10);
    assert_eq!(BigInt::from(u64::MAX).to_fixed64(), Fixed64::NEG_ONE);
}

#[test]
fn test_small_int_cache() {
    let cache = SmallValueCache::new();
    assert_eq!(Fixed64::from_int_in(&cache, 100), fx(100));
    assert_eq!(Fixed64::from_int_in(&cache, -100), fx(-100));
    assert_eq!(Fixed64::from_int_in(&cache, 100_000), fx(100_000));
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_from_f64() {
    assert_eq!(Fixed64::from_f64(f64::NAN), Fixed64::ZERO);
    assert_eq!(Fixed64::from_f64(f64::INFINITY), Fixed64::ZERO);
    assert_eq!(Fixed64::from_f64(1e19), Fixed64::MAX_VALUE);
    assert_eq!(Fixed64::from_f64(-1e19), Fixed64::MIN_VALUE);
    assert_eq!(Fixed64::from_f64(-2.9), fx(-2));
    assert_eq!(Fixed64::from_f64(4294967296.5), fx(4294967296));
    assert_eq!(Fixed64::from_f64(-9007199254740992.0), fx(-9007199254740992));
}

#[test]
fn test_to_f64() {
    assert_eq!(fx(-1).to_f64(), -1.0);
    assert_eq!(fx(-4294967296).to_f64(), -4294967296.0);
    assert_eq!(Fixed64::MIN_VALUE.to_f64(), -9223372036854775808.0);
    assert_eq!(fx(123456789012).to_f64(), 123456789012.0);
}

#[test]
fn test_add_sub() {
    assert_eq!(fx(0xFFFF_FFFF) + fx(1), fx(0x1_0000_0000));
    assert_eq!(fx(-1) + fx(1), Fixed64::ZERO);
    assert_eq!(Fixed64::MAX_VALUE + Fixed64::ONE, Fixed64::MIN_VALUE);
    assert_eq!(Fixed64::MIN_VALUE - Fixed64::ONE, Fixed64::MAX_VALUE);
    assert_eq!(fx(1000) - fx(-24), fx(1024));

    let mut x = fx(10);
    x += fx(5);
    x -= fx(20);
    assert_eq!(x, fx(-5));
}

#[test]
fn test_negate() {
    assert_eq!(-Fixed64::MIN_VALUE, Fixed64::MIN_VALUE);
    assert_eq!(-fx(5), fx(-5));
    assert_eq!(fx(-5).abs(), fx(5));
    assert_eq!(Fixed64::MIN_VALUE.abs(), Fixed64::MIN_VALUE);
    assert_eq!(fx(-123).signum(), Fixed64::NEG_ONE);
    assert_eq!(fx(123).signum(), Fixed64::ONE);
    assert_eq!(Fixed64::ZERO.signum(), Fixed64::ZERO);
}

#[test]
fn test_mul() {
    assert_eq!(Fixed64::MIN_VALUE * Fixed64::from_int(-1), Fixed64::MIN_VALUE);
    assert_eq!(Fixed64::MIN_VALUE * fx(3), Fixed64::MIN_VALUE);
    assert_eq!(fx(2) * Fixed64::MIN_VALUE, Fixed64::ZERO);
    assert_eq!(fx(-3) * fx(7), fx(-21));
    assert_eq!(fx(-3) * fx(-7), fx(21));
    assert_eq!(fx(0xFFFFFF) * fx(0xFFFFFF), fx(0xFFFFFF * 0xFFFFFF));
    assert_eq!(fx(123456789) * fx(987654321), fx(121932631112635269));
    assert_eq!(fx(i64::MAX) * fx(i64::MAX), fx(1));
    assert_eq!(fx(0x1_0000_0001) * fx(0x1_0000_0001), fx(0x2_0000_0001));
}

#[test]
fn test_div() {
    assert_eq!(fx(-7) / fx(2), fx(-3));
    assert_eq!(fx(-7) % fx(2), fx(-1));
    assert_eq!(fx(7) / fx(-2), fx(-3));
    assert_eq!(fx(7) % fx(-2), fx(1));
    assert_eq!(fx(i64::MAX) / fx(1_000_000), fx(i64::MAX / 1_000_000));
    assert_eq!(fx(i64::MAX) / fx(i64::MAX), Fixed64::ONE);
    assert_eq!(fx(5) / fx(i64::MAX), Fixed64::ZERO);

    assert_eq!(Fixed64::MIN_VALUE / Fixed64::NEG_ONE, Fixed64::MIN_VALUE);
    assert_eq!(Fixed64::MIN_VALUE / Fixed64::ONE, Fixed64::MIN_VALUE);
    assert_eq!(Fixed64::MIN_VALUE / Fixed64::MIN_VALUE, Fixed64::ONE);
    assert_eq!(Fixed64::MIN_VALUE / fx(2), fx(i64::MIN / 2));
    assert_eq!(Fixed64::MIN_VALUE / fx(3), fx(i64::MIN / 3));
    assert_eq!(Fixed64::MIN_VALUE / fx(-3), fx(i64::MIN / -3));
    assert_eq!(Fixed64::MIN_VALUE / fx(i64::MAX), Fixed64::NEG_ONE);
    assert_eq!(Fixed64::MIN_VALUE % fx(i64::MAX), Fixed64::NEG_ONE);
    assert_eq!(Fixed64::MIN_VALUE % Fixed64::NEG_ONE, Fixed64::ZERO);
    assert_eq!(fx(-1) / Fixed64::MIN_VALUE, Fixed64::ZERO);
}

#[test]
fn test_div_floor() {
    assert_eq!(fx(-7).checked_div_floor(fx(2)), Ok(fx(-4)));
    assert_eq!(fx(-7).checked_mod_floor(fx(2)), Ok(fx(1)));
    assert_eq!(fx(7).checked_div_floor(fx(-2)), Ok(fx(-4)));
    assert_eq!(fx(7).checked_mod_floor(fx(-2)), Ok(fx(-1)));
    assert_eq!(fx(-8).checked_div_floor(fx(2)), Ok(fx(-4)));
    assert_eq!(fx(7).checked_div_floor(fx(2)), Ok(fx(3)));
}

#[test]
fn test_mod_floor_large_divisor() {
    assert_eq!(fx(5).checked_mod_floor(Fixed64::MAX_VALUE), Ok(fx(5)));
    assert_eq!(fx(-5).checked_mod_floor(Fixed64::MIN_VALUE), Ok(fx(-5)));
    assert_eq!(fx(5).checked_mod_floor(Fixed64::MIN_VALUE), Ok(fx(i64::MIN + 5)));
    assert_eq!(fx(-5).checked_mod_floor(Fixed64::MAX_VALUE), Ok(fx(i64::MAX - 5)));
    assert_eq!(
        fx(749967037774904172).checked_mod_floor(fx(8473404999079871636)),
        Ok(fx(749967037774904172))
    );
    assert_eq!(Fixed64::MIN_VALUE.checked_mod_floor(Fixed64::MAX_VALUE), Ok(fx(i64::MAX - 1)));
    assert_eq!(Fixed64::MIN_VALUE.checked_div_floor(Fixed64::MAX_VALUE), Ok(fx(-2)));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(fx(1).checked_quot(Fixed64::ZERO), Err(BigNumError::DivisionByZero));
    assert_eq!(fx(1).checked_rem(Fixed64::ZERO), Err(BigNumError::DivisionByZero));
    assert_eq!(fx(1).checked_div_floor(Fixed64::ZERO), Err(BigNumError::DivisionByZero));
    assert_eq!(fx(1).checked_mod_floor(Fixed64::ZERO), Err(BigNumError::DivisionByZero));
    assert_eq!(Fixed64::ZERO.checked_quot(fx(3)), Ok(Fixed64::ZERO));
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_rem_operator_panics_on_zero() {
    let _ = fx(1) % Fixed64::ZERO;
}

#[test]
fn test_compare() {
    assert!(Fixed64::MIN_VALUE < Fixed64::MAX_VALUE);
    assert!(fx(-1) < fx(0));
    assert!(fx(1 << 40) > fx(1 << 39));
    assert!(fx(-(1 << 40)) < fx(-(1 << 39)));
    assert_eq!(fx(42).compare(fx(42)), Ordering::Equal);
}

#[test]
fn test_bitwise() {
    assert_eq!(fx(-6) & fx(12), fx(8));
    assert_eq!(fx(-6) | fx(12), fx(-2));
    assert_eq!(fx(-6) ^ fx(12), fx(-10));
    assert_eq!(!fx(-6), fx(5));
    assert_eq!(!Fixed64::ZERO, Fixed64::NEG_ONE);
}

#[test]
fn test_shift() {
    assert_eq!(fx(1) << 63, Fixed64::MIN_VALUE);
    assert_eq!(fx(1) << 64, fx(1));
    assert_eq!(fx(3) << 32, fx(3 << 32));
    assert_eq!(fx(0x8000_0001) << 1, fx(0x1_0000_0002));
    assert_eq!(Fixed64::MIN_VALUE >> 63, Fixed64::NEG_ONE);
    assert_eq!(fx(-7) >> 1, fx(-4));
    assert_eq!(fx(-(1 << 40)) >> 36, fx(-16));
    assert_eq!(Fixed64::MIN_VALUE.shift_right_unsigned(63), fx(1));
    assert_eq!(fx(-1).shift_right_unsigned(32), fx(0xFFFF_FFFF));
    assert_eq!(fx(-1).shift_right_unsigned(40), fx(0xFF_FFFF));
    assert_eq!(fx(-1).shift_right_unsigned(4), fx(0x0FFF_FFFF_FFFF_FFFF));
}

#[test]
fn test_bit_counts() {
    assert_eq!(fx(-1).count_ones(), 64);
    assert_eq!(fx(0x1_0000_0001).count_ones(), 2);
    assert_eq!(fx(1).leading_zeros(), 63);
    assert_eq!(Fixed64::ZERO.leading_zeros(), 64);
    assert_eq!(fx(1 << 40).trailing_zeros(), 40);
    assert_eq!(Fixed64::ZERO.trailing_zeros(), 64);
}

#[test]
fn test_text() {
    assert_eq!(Fixed64::MIN_VALUE.to_string(), "-9223372036854775808");
    assert_eq!(Fixed64::MAX_VALUE.to_string(), "9223372036854775807");
    assert_eq!("-42".parse::<Fixed64>(), Ok(fx(-42)));
    assert_eq!("18446744073709551617".parse::<Fixed64>(), Ok(fx(1)));
    assert!("4-2".parse::<Fixed64>().is_err());
}
