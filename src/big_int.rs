//! # BigInt
//! Immutable arbitrary-precision integers stored in two's-complement notation: a little-endian
//! array of 32-bit words followed by an implicit sign word (`0` or `-1`) repeated forever.
//! # Example
//! ```
//! use exact_int::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "-900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a << 10 = {}", &a << 10);
//! println!("b >> 10 = {}", &b >> 10);
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
use crate::ieee754::{decode_double, encode_double};
use crate::Fixed64;

pub const ZERO: BigInt = BigInt { words: Vec::new(), sign: 0 };

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    words: Vec<u32>,
    sign: i32,
}

// 构造
impl BigInt {
    /// Drops every most-significant word that only repeats the sign word.
    fn new(mut words: Vec<u32>, sign: i32) -> BigInt {
        debug_assert!(sign == 0 || sign == -1, "sign word must be 0 or -1, got {}", sign);
        let sign_word = sign as u32;
        while words.last() == Some(&sign_word) {
            words.pop();
        }
        BigInt { words, sign }
    }

    fn from_word_vec(words: Vec<u32>) -> BigInt {
        let sign = match words.last() {
            Some(high) if high >> 31 == 1 => -1,
            _ => 0,
        };
        BigInt::new(words, sign)
    }

    /// Builds a value from words already in two's-complement layout, least significant
    /// first. The top bit of the last word decides the sign.
    pub fn from_words(words: &[u32]) -> BigInt {
        BigInt::from_word_vec(words.to_vec())
    }

    pub fn from_small_int(value: i32) -> BigInt {
        BigInt::from_small_int_in(&BIG_INT_CACHE, value)
    }

    /// Same as [`BigInt::from_small_int`], memoizing into the given table.
    pub fn from_small_int_in(cache: &SmallValueCache<BigInt>, value: i32) -> BigInt {
        cache.get_or_insert_with(value, || {
            BigInt::new(vec![value as u32], if value < 0 { -1 } else { 0 })
        })
    }

    fn unit() -> BigInt {
        BigInt { words: vec![1], sign: 0 }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        ZERO
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        BigInt::from_small_int(value)
    }
}

impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        BigInt::new(vec![value], 0)
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        BigInt::from_word_vec(vec![value as u32, (value >> 32) as u32])
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        BigInt::new(vec![value as u32, (value >> 32) as u32], 0)
    }
}

impl From<i128> for BigInt {
    fn from(value: i128) -> Self {
        BigInt::from_word_vec(vec![
            value as u32,
            (value >> 32) as u32,
            (value >> 64) as u32,
            (value >> 96) as u32,
        ])
    }
}

impl From<Fixed64> for BigInt {
    fn from(value: Fixed64) -> Self {
        BigInt::from_word_vec(vec![value.low_bits(), value.high_bits()])
    }
}

// 字访问
impl BigInt {
    /// Word at `index`, reading the sign word past the stored words and `0` below index 0.
    pub fn word_at(&self, index: isize) -> u32 {
        if index < 0 {
            0
        } else if (index as usize) < self.words.len() {
            self.words[index as usize]
        } else {
            self.sign as u32
        }
    }

    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// The sign word: `0` for non-negative values, `-1` for negative ones.
    pub fn sign(&self) -> i32 {
        self.sign
    }

    pub fn is_zero(&self) -> bool {
        self.sign == 0 && self.words.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.sign == -1
    }

    pub fn is_odd(&self) -> bool {
        match self.words.first() {
            Some(low) => low & 1 == 1,
            None => self.sign == -1,
        }
    }

    fn is_positive(&self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    /// Bits needed for a non-negative value.
    fn bit_length(&self) -> u64 {
        match self.words.last() {
            None => 0,
            Some(high) => {
                ((self.words.len() as u64 - 1) << 5) + (u32::BITS - high.leading_zeros()) as u64
            }
        }
    }

    fn below_two_pwr_24(&self) -> bool {
        !self.is_negative() && self.words.len() <= 1 && self.word_at(0) < 1 << 24
    }
}

// 加减法
impl BigInt {
    // Whole 32-bit words summed in a u64, so the carry is the upper half.
    fn add_words(&self, other: &BigInt) -> BigInt {
        let len = self.words.len().max(other.words.len());
        let mut words = Vec::with_capacity(len + 1);
        let mut carry: u64 = 0;
        for i in 0..=len as isize {
            let sum = self.word_at(i) as u64 + other.word_at(i) as u64 + carry;
            words.push(sum as u32);
            carry = sum >> u32::BITS;
        }
        BigInt::from_word_vec(words)
    }

    fn sub_words(&self, other: &BigInt) -> BigInt {
        self.add_words(&other.negate())
    }

    pub fn negate(&self) -> BigInt {
        self.not_words().add_words(&BigInt::unit())
    }

    pub fn abs(&self) -> BigInt {
        if self.is_negative() {
            self.negate()
        } else {
            self.clone()
        }
    }

    pub fn signum(&self) -> BigInt {
        match self.compare(&ZERO) {
            Ordering::Greater => BigInt::from_small_int(1),
            Ordering::Less => BigInt::from_small_int(-1),
            Ordering::Equal => ZERO,
        }
    }
}

// 比较
impl BigInt {
    /// Three-way comparison by the sign of `self - other`.
    pub fn compare(&self, other: &BigInt) -> Ordering {
        let diff = self.sub_words(other);
        if diff.is_negative() {
            Ordering::Less
        } else if diff.is_zero() {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

// 乘法
impl BigInt {
    fn mul_words(&self, other: &BigInt) -> BigInt {
        if self.is_zero() || other.is_zero() {
            return ZERO;
        }

        match (self.is_negative(), other.is_negative()) {
            (true, true) => return self.negate().mul_words(&other.negate()),
            (true, false) => return self.negate().mul_words(other).negate(),
            (false, true) => return self.mul_words(&other.negate()).negate(),
            (false, false) => {}
        }

        // both below 2^24: the product has at most 48 bits, exact in a double
        if self.below_two_pwr_24() && other.below_two_pwr_24() {
            return BigInt::from_f64(self.to_f64() * other.to_f64());
        }

        let x = &self.words;
        let y = &other.words;
        let mut z = vec![0u32; x.len() + y.len()];
        for (x_index, &x_word) in x.iter().enumerate() {
            let mut carry: u64 = 0;
            for (y_index, &y_word) in y.iter().enumerate() {
                let product = (x_word as u64) * (y_word as u64) +
                              (z[x_index + y_index] as u64) +
                              carry;
                z[x_index + y_index] = product as u32;
                carry = product >> u32::BITS;
            }
            z[x_index + y.len()] = carry as u32;
        }
        BigInt::new(z, 0)
    }
}

// 除法
impl BigInt {
    /// Quotient rounded toward zero.
    pub fn checked_quot(&self, other: &BigInt) -> BigNumResult<BigInt> {
        if other.is_zero() {
            return Err(BigNumError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(ZERO);
        }
        Ok(self.quot_nonzero(other))
    }

    fn quot_nonzero(&self, other: &BigInt) -> BigInt {
        match (self.is_negative(), other.is_negative()) {
            (true, true) => self.negate().quot_nonzero(&other.negate()),
            (true, false) => self.negate().quot_nonzero(other).negate(),
            (false, true) => self.quot_nonzero(&other.negate()).negate(),
            (false, false) => approximate_quotient(self, other),
        }
    }

    /// Remainder of [`BigInt::checked_quot`]; carries the sign of `self`.
    pub fn checked_rem(&self, other: &BigInt) -> BigNumResult<BigInt> {
        self.quot_rem(other).map(|(_, r)| r)
    }

    pub fn quot_rem(&self, other: &BigInt) -> BigNumResult<(BigInt, BigInt)> {
        let q = self.checked_quot(other)?;
        let r = self.sub_words(&q.mul_words(other));
        Ok((q, r))
    }

    /// Quotient rounded toward negative infinity.
    pub fn checked_div_floor(&self, other: &BigInt) -> BigNumResult<BigInt> {
        let (q, r) = self.quot_rem(other)?;
        if self.is_positive() != other.is_positive() && !r.is_zero() {
            Ok(q.sub_words(&BigInt::unit()))
        } else {
            Ok(q)
        }
    }

    /// Remainder of [`BigInt::checked_div_floor`]; carries the sign of `other`.
    pub fn checked_mod_floor(&self, other: &BigInt) -> BigNumResult<BigInt> {
        let r = self.checked_rem(other)?;
        other.add_words(&r).checked_rem(other)
    }

    pub fn div_mod(&self, other: &BigInt) -> BigNumResult<(BigInt, BigInt)> {
        Ok((self.checked_div_floor(other)?, self.checked_mod_floor(other)?))
    }

    fn quot_or_panic(&self, other: &BigInt) -> BigInt {
        match self.checked_quot(other) {
            Ok(q) => q,
            Err(e) => panic!("{}", e),
        }
    }

    fn rem_or_panic(&self, other: &BigInt) -> BigInt {
        match self.checked_rem(other) {
            Ok(r) => r,
            Err(e) => panic!("{}", e),
        }
    }
}

impl ApproximateDivision for BigInt {
    fn zero() -> Self {
        ZERO
    }

    fn one() -> Self {
        BigInt::unit()
    }

    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }

    fn is_negative(&self) -> bool {
        BigInt::is_negative(self)
    }

    // Past ~1000 bits a word sum no longer fits a double, so both operands are cut down to
    // their top ESTIMATE_BITS bits and the dropped bits come back as a power of two.
    fn estimate_ratio(&self, divisor: &Self) -> (f64, u32) {
        let dropped = self.bit_length().saturating_sub(ESTIMATE_BITS);
        let divisor_dropped = divisor.bit_length().saturating_sub(ESTIMATE_BITS);
        let mut ratio = self.shift_right(dropped as u32).to_f64() /
                        divisor.shift_right(divisor_dropped as u32).to_f64();
        let mut scale = dropped.saturating_sub(divisor_dropped) as u32;
        while scale > 0 && ratio < TWO_PWR_53_DBL {
            ratio *= 2.0;
            scale -= 1;
        }
        (ratio, scale)
    }

    fn from_estimate(approx: f64, scale: u32) -> Self {
        BigInt::from_f64(approx).shift_left(scale)
    }

    fn plus(&self, other: &Self) -> Self {
        self.add_words(other)
    }

    fn minus(&self, other: &Self) -> Self {
        self.sub_words(other)
    }

    fn times(&self, other: &Self) -> Self {
        self.mul_words(other)
    }
}

// 位运算
impl BigInt {
    fn not_words(&self) -> BigInt {
        let words = self.words.iter().map(|w| !w).collect();
        BigInt::new(words, !self.sign)
    }

    fn zip_words<F>(&self, other: &BigInt, sign: i32, op: F) -> BigInt
    where
        F: Fn(u32, u32) -> u32,
    {
        let len = self.words.len().max(other.words.len()) as isize;
        let words = (0..len)
            .map(|i| op(self.word_at(i), other.word_at(i)))
            .collect();
        BigInt::new(words, sign)
    }

    fn and_words(&self, other: &BigInt) -> BigInt {
        self.zip_words(other, self.sign & other.sign, |a, b| a & b)
    }

    fn or_words(&self, other: &BigInt) -> BigInt {
        self.zip_words(other, self.sign | other.sign, |a, b| a | b)
    }

    fn xor_words(&self, other: &BigInt) -> BigInt {
        self.zip_words(other, self.sign ^ other.sign, |a, b| a ^ b)
    }

    /// Keeps the low `bits` bits and sign-extends from bit `bits - 1`.
    pub fn sign_truncate(&self, bits: u32) -> BigInt {
        if bits == 0 {
            return ZERO;
        }
        let word_index = ((bits - 1) >> 5) as isize;
        let bit_index = (bits - 1) & 0x1f;
        let mut words: Vec<u32> = (0..word_index).map(|i| self.word_at(i)).collect();
        let significant = if bit_index == 31 {
            u32::MAX
        } else {
            (1 << (bit_index + 1)) - 1
        };
        let top = self.word_at(word_index) & significant;
        if top & (1 << bit_index) != 0 {
            words.push(top | !significant);
            BigInt::new(words, -1)
        } else {
            words.push(top);
            BigInt::new(words, 0)
        }
    }
}

// 移位
impl BigInt {
    pub fn shift_left(&self, n: u32) -> BigInt {
        let n_words = (n >> 5) as isize;
        let n_bits = n & 0x1f; // n % 32
        let len = self.words.len() as isize + n_words + if n_bits > 0 { 1 } else { 0 };
        let words = (0..len)
            .map(|i| {
                if n_bits > 0 {
                    (self.word_at(i - n_words) << n_bits) |
                    (self.word_at(i - n_words - 1) >> (u32::BITS - n_bits))
                } else {
                    self.word_at(i - n_words)
                }
            })
            .collect();
        BigInt::new(words, self.sign)
    }

    /// Arithmetic shift: negative values round toward negative infinity.
    pub fn shift_right(&self, n: u32) -> BigInt {
        let n_words = (n >> 5) as usize;
        let n_bits = n & 0x1f; // n % 32
        let len = self.words.len().saturating_sub(n_words);
        let words = (0..len)
            .map(|i| {
                let i = (i + n_words) as isize;
                if n_bits > 0 {
                    (self.word_at(i) >> n_bits) |
                    (self.word_at(i + 1) << (u32::BITS - n_bits))
                } else {
                    self.word_at(i)
                }
            })
            .collect();
        BigInt::new(words, self.sign)
    }
}

// 解析
impl BigInt {
    pub fn from_decimal_str(literal: &str) -> BigNumResult<BigInt> {
        BigInt::from_str_radix(literal, 10)
    }

    /// Parses an optional leading `-` followed by digits of `radix`.
    pub fn from_str_radix(literal: &str, radix: u32) -> BigNumResult<BigInt> {
        let parsed = BigInt::parse_literal(literal, radix);
        if let Err(e) = &parsed {
            tracing::debug!(literal, radix, error = %e, "rejected integer literal");
        }
        parsed
    }

    fn parse_literal(literal: &str, radix: u32) -> BigNumResult<BigInt> {
        if literal.is_empty() {
            return Err(LiteralError::Empty.into());
        }
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            return Err(LiteralError::RadixOutOfRange(radix).into());
        }
        match literal.strip_prefix('-') {
            Some(magnitude) => Ok(BigInt::parse_digits(magnitude, radix)?.negate()),
            None => BigInt::parse_digits(literal, radix),
        }
    }

    fn parse_digits(digits: &str, radix: u32) -> BigNumResult<BigInt> {
        if digits.is_empty() {
            return Err(LiteralError::Empty.into());
        }
        let values = digits
            .chars()
            .map(|c| match c.to_digit(radix) {
                Some(d) => Ok(d as u64),
                None if c == '-' => Err(LiteralError::InteriorSign),
                None => Err(LiteralError::InvalidDigit { digit: c, radix }),
            })
            .collect::<Result<Vec<u64>, LiteralError>>()?;

        let radix = radix as u64;
        let radix_to_power = BigInt::from(radix.pow(DIGITS_PER_CHUNK as u32));
        let mut result = ZERO;
        for chunk in values.chunks(DIGITS_PER_CHUNK) {
            let value = BigInt::from(chunk.iter().fold(0, |acc, d| acc * radix + d));
            let power = if chunk.len() < DIGITS_PER_CHUNK {
                BigInt::from(radix.pow(chunk.len() as u32))
            } else {
                radix_to_power.clone()
            };
            result = result.mul_words(&power).add_words(&value);
        }
        Ok(result)
    }
}

impl FromStr for BigInt {
    type Err = BigNumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::from_decimal_str(s)
    }
}

// 打印
impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        if self.is_negative() {
            return write!(f, "-{}", self.negate());
        }

        let divisor = BigInt::from(GROUP_DIVISOR);
        let mut groups = Vec::new();
        let mut remaining = self.clone();
        loop {
            let quotient = approximate_quotient(&remaining, &divisor);
            let group = remaining.sub_words(&quotient.mul_words(&divisor)).to_i32_wrapping();
            remaining = quotient;
            if remaining.is_zero() {
                write!(f, "{}", group)?;
                break;
            }
            groups.push(group);
        }
        for group in groups.iter().rev() {
            write!(f, "{:0width$}", group, width = DIGITS_PER_GROUP)?;
        }
        Ok(())
    }
}

// 浮点转换
impl BigInt {
    /// Truncates toward zero. NaN and infinities become zero.
    pub fn from_f64(value: f64) -> BigInt {
        if !value.is_finite() {
            return ZERO;
        }
        if value < 0.0 {
            return BigInt::from_f64(-value).negate();
        }
        let mut words = Vec::new();
        let mut pow = 1.0;
        while value >= pow {
            words.push(((value / pow).floor() % TWO_PWR_32_DBL) as u32);
            pow *= TWO_PWR_32_DBL;
        }
        BigInt::new(words, 0)
    }

    /// Nearest double. Exact up to 53 significant bits, rounded beyond.
    pub fn to_f64(&self) -> f64 {
        if self.is_negative() {
            return -self.negate().to_f64();
        }
        let mut val = 0.0;
        let mut pow = 1.0;
        for &word in &self.words {
            if word != 0 {
                val += word as f64 * pow;
            }
            pow *= TWO_PWR_32_DBL;
        }
        val
    }

    /// Splits a double into `(exponent, mantissa)` with `value == mantissa * 2^exponent`.
    pub fn decode_f64(value: f64) -> (i32, BigInt) {
        let decoded = decode_double(value);
        let mantissa = BigInt::from_word_vec(vec![decoded.mantissa_low, decoded.mantissa_high]);
        if decoded.sign < 0 {
            (decoded.exponent, mantissa.negate())
        } else {
            (decoded.exponent, mantissa)
        }
    }

    /// `self * 2^exponent` as a double.
    pub fn encode_f64(&self, exponent: i32) -> f64 {
        encode_double(self.to_f64(), exponent)
    }

    pub fn ratio_to_f64(numerator: &BigInt, denominator: &BigInt) -> f64 {
        numerator.to_f64() / denominator.to_f64()
    }

    pub fn to_i32_wrapping(&self) -> i32 {
        self.word_at(0) as i32
    }

    pub fn to_u32_wrapping(&self) -> u32 {
        self.word_at(0)
    }

    pub fn to_u64_wrapping(&self) -> u64 {
        ((self.word_at(1) as u64) << 32) | self.word_at(0) as u64
    }

    /// The low 64 bits as a [`Fixed64`].
    pub fn to_fixed64(&self) -> Fixed64 {
        Fixed64::from_bits(self.word_at(0), self.word_at(1))
    }
}

macro_rules! impl_bin_op {
    ($($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident, $inner: ident;)*) => {
    $(
    impl $imp<&BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: &BigInt) -> Self::Output {
            self.$inner(rhs)
        }
    }

    impl $imp<&BigInt> for BigInt {
        type Output = BigInt;

        fn $method(self, rhs: &BigInt) -> Self::Output {
            self.$inner(rhs)
        }
    }

    impl $imp for BigInt {
        type Output = BigInt;

        fn $method(self, rhs: BigInt) -> Self::Output {
            self.$inner(&rhs)
        }
    }

    impl $assign_imp<&BigInt> for BigInt {
        fn $assign_method(&mut self, rhs: &BigInt) {
            *self = self.$inner(rhs);
        }
    }

    impl $assign_imp for BigInt {
        fn $assign_method(&mut self, rhs: BigInt) {
            *self = self.$inner(&rhs);
        }
    }
    )*
    };
}

impl_bin_op! {
    Add, add, AddAssign, add_assign, add_words;
    Sub, sub, SubAssign, sub_assign, sub_words;
    Mul, mul, MulAssign, mul_assign, mul_words;
    Div, div, DivAssign, div_assign, quot_or_panic;
    Rem, rem, RemAssign, rem_assign, rem_or_panic;
    BitAnd, bitand, BitAndAssign, bitand_assign, and_words;
    BitOr, bitor, BitOrAssign, bitor_assign, or_words;
    BitXor, bitxor, BitXorAssign, bitxor_assign, xor_words;
}

macro_rules! impl_shift_op {
    ($($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident, $inner: ident;)*) => {
    $(
    impl $imp<u32> for &BigInt {
        type Output = BigInt;

        fn $method(self, n: u32) -> Self::Output {
            self.$inner(n)
        }
    }

    impl $imp<u32> for BigInt {
        type Output = BigInt;

        fn $method(self, n: u32) -> Self::Output {
            self.$inner(n)
        }
    }

    impl $assign_imp<u32> for BigInt {
        fn $assign_method(&mut self, n: u32) {
            *self = self.$inner(n);
        }
    }
    )*
    };
}

impl_shift_op! {
    Shl, shl, ShlAssign, shl_assign, shift_left;
    Shr, shr, ShrAssign, shr_assign, shift_right;
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Not for BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        self.not_words()
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        self.not_words()
    }
}

#[cfg(test)]
fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn test_word_at() {
    let minus_two = BigInt::from(-2i64);
    assert_eq!(minus_two.words(), &[0xFFFF_FFFE]);
    assert_eq!(minus_two.word_at(0), 0xFFFF_FFFE);
    assert_eq!(minus_two.word_at(7), 0xFFFF_FFFF);
    assert_eq!(minus_two.word_at(-1), 0);

    let two_pwr_40 = BigInt::from(1u64 << 40);
    assert_eq!(two_pwr_40.word_at(0), 0);
    assert_eq!(two_pwr_40.word_at(1), 1 << 8);
    assert_eq!(two_pwr_40.word_at(2), 0);
}

#[test]
fn test_canonical_form() {
    assert_eq!(BigInt::from_words(&[5, 0, 0]), BigInt::from_small_int(5));
    assert_eq!(BigInt::from_words(&[5, 0, 0]).words(), &[5]);

    let minus_one = BigInt::from_words(&[0xFFFF_FFFF, 0xFFFF_FFFF]);
    assert!(minus_one.words().is_empty());
    assert_eq!(minus_one.sign(), -1);
    assert_eq!(minus_one, BigInt::from_small_int(-1));

    // the top bit of the last supplied word is the sign
    assert_eq!(BigInt::from_words(&[0x8000_0000]), BigInt::from(-(1i64 << 31)));
    let two_pwr_31 = BigInt::from_words(&[0x8000_0000, 0]);
    assert_eq!(two_pwr_31.words(), &[0x8000_0000]);
    assert_eq!(two_pwr_31.sign(), 0);
    assert_eq!(two_pwr_31.to_string(), "2147483648");

    assert_eq!(BigInt::from_words(&[]), ZERO);
    assert_eq!(BigInt::default(), ZERO);
}

#[test]
fn test_from_native() {
    assert_eq!(BigInt::from(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(BigInt::from(u64::MAX).to_string(), "18446744073709551615");
    assert_eq!(BigInt::from(u32::MAX).to_string(), "4294967295");
    assert_eq!(
        BigInt::from(i128::MIN).to_string(),
        "-170141183460469231731687303715884105728"
    );
    assert_eq!(BigInt::from(-100), big("-100"));
}

#[test]
fn test_small_int_cache() {
    let cache = SmallValueCache::new();
    let a = BigInt::from_small_int_in(&cache, -128);
    let b = BigInt::from_small_int_in(&cache, 127);
    let c = BigInt::from_small_int_in(&cache, 1000);
    assert_eq!(cache.len(), 2);
    assert_eq!(a, big("-128"));
    assert_eq!(b, big("127"));
    assert_eq!(c, big("1000"));
    assert_eq!(BigInt::from_small_int_in(&cache, -128), a);
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_add_sub() {
    let a = big("4294967295");
    let b = big("1");
    assert_eq!(&a + &b, big("4294967296"));
    assert_eq!(&b - &a, big("-4294967294"));

    let a = big("-18446744073709551616");
    let b = big("18446744073709551615");
    assert_eq!(&a + &b, big("-1"));
    assert_eq!(&a - &b, big("-36893488147419103231"));

    let a = big("123456789012345678901234567890");
    assert_eq!(&a + &a.negate(), ZERO);
    assert_eq!(&a - &a, ZERO);

    let mut acc = ZERO;
    acc += &a;
    acc -= big("1");
    assert_eq!(acc, big("123456789012345678901234567889"));
}

#[test]
fn test_negate() {
    assert_eq!(ZERO.negate(), ZERO);
    assert_eq!(-big("-1"), big("1"));
    assert_eq!(-big("2147483648"), BigInt::from_words(&[0x8000_0000]));
    assert_eq!(-BigInt::from_words(&[0x8000_0000]), big("2147483648"));
    assert_eq!(big("-5").abs(), big("5"));
    assert_eq!(big("5").abs(), big("5"));
    assert_eq!(big("-99999999999999999999").signum(), big("-1"));
    assert_eq!(big("99999999999999999999").signum(), big("1"));
    assert_eq!(ZERO.signum(), ZERO);
}

#[test]
fn test_compare() {
    let a = big("-36893488147419103232");
    let b = big("-1");
    let c = big("36893488147419103232");
    assert!(a < b);
    assert!(b < c);
    assert!(c > a);
    assert!(a <= a.clone());
    assert_eq!(a.compare(&a), Ordering::Equal);
    assert_eq!(c.compare(&b), Ordering::Greater);
    assert_eq!(b.compare(&c), Ordering::Less);
}

#[test]
fn test_mul() {
    let a = big("340282366920938463463374607431768211456");
    let b = BigInt::from_small_int(2);
    assert_eq!(&a * &b, big("680564733841876926926749214863536422912"));

    // fast path
    assert_eq!(big("16777215") * big("16777215"), big("281474943156225"));
    assert_eq!(big("-3") * big("7"), big("-21"));
    assert_eq!(big("-3") * big("-7"), big("21"));

    let a = big("10000000000000000");
    let b = big("30000000000000000");
    assert_eq!(&a * &b, big("300000000000000000000000000000000"));
    assert_eq!(a.negate() * b, big("-300000000000000000000000000000000"));
    assert_eq!(big("123456789123456789") * ZERO, ZERO);

    let f = big("18446744073709551615");
    assert_eq!(&f * &f, big("340282366920938463426481119284349108225"));
}

#[test]
fn test_div() {
    let a = big("120");
    let b = big("13");
    assert_eq!(&a / &b, big("9"));

    let a = big("10000000000000000000000000000000000");
    let b = big("1000");
    assert_eq!(&a / &b, big("10000000000000000000000000000000"));

    let a = big("124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789");
    let b = big("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376");
    let c = big("21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215");
    assert_eq!(&a / &b, c);
    assert_eq!(&-&a / &b, -&c);
    assert_eq!(&a / &-&b, -&c);
    assert_eq!(&-&a / &-&b, c);
    assert_eq!((-&a).checked_div_floor(&b).unwrap(), -&c - BigInt::from(1));
}

#[test]
fn test_quot_rem_signs() {
    let seven = BigInt::from_small_int(7);
    let two = BigInt::from_small_int(2);
    let minus_seven = BigInt::from_small_int(-7);
    let minus_two = BigInt::from_small_int(-2);

    assert_eq!(minus_seven.checked_quot(&two).unwrap(), big("-3"));
    assert_eq!(minus_seven.checked_rem(&two).unwrap(), big("-1"));
    assert_eq!(minus_seven.checked_div_floor(&two).unwrap(), big("-4"));
    assert_eq!(minus_seven.checked_mod_floor(&two).unwrap(), big("1"));

    assert_eq!(seven.checked_quot(&minus_two).unwrap(), big("-3"));
    assert_eq!(seven.checked_rem(&minus_two).unwrap(), big("1"));
    assert_eq!(seven.checked_div_floor(&minus_two).unwrap(), big("-4"));
    assert_eq!(seven.checked_mod_floor(&minus_two).unwrap(), big("-1"));

    assert_eq!(minus_seven.div_mod(&minus_two).unwrap(), (big("3"), big("-1")));
    assert_eq!(seven.div_mod(&two).unwrap(), (big("3"), big("1")));

    // exact division needs no floor adjustment
    let minus_eight = BigInt::from_small_int(-8);
    assert_eq!(minus_eight.checked_div_floor(&two).unwrap(), big("-4"));
    assert_eq!(minus_eight.checked_mod_floor(&two).unwrap(), ZERO);
}

#[test]
fn test_division_by_zero() {
    let a = big("12345678901234567890");
    assert_eq!(a.checked_quot(&ZERO), Err(BigNumError::DivisionByZero));
    assert_eq!(a.checked_rem(&ZERO), Err(BigNumError::DivisionByZero));
    assert_eq!(a.checked_div_floor(&ZERO), Err(BigNumError::DivisionByZero));
    assert_eq!(a.checked_mod_floor(&ZERO), Err(BigNumError::DivisionByZero));
    assert_eq!(ZERO.checked_quot(&a), Ok(ZERO));
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_div_operator_panics_on_zero() {
    let _ = big("1") / ZERO;
}

#[test]
fn test_mod() {
    let a = big("12");
    let b = big("8");
    assert_eq!(a % b, big("4"));

    let a = big("10000000000000000");
    let b = big("10");
    assert_eq!(a % b, ZERO);

    let a = big("23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245");
    let b = big("526738495607659438721653478560954837265378495607");
    let r = big("393707270751296419349581795408095683999332705291");
    assert_eq!(&a % &b, r);
    assert_eq!(&-&a % &b, -&r);
    assert_eq!(&a % &-&b, r);
    assert_eq!((-&a).checked_mod_floor(&b).unwrap(), &b - &r);
    assert_eq!(a.checked_mod_floor(&-&b).unwrap(), &r - &b);
}

#[test]
fn test_divide_huge_by_small() {
    // 2^4000 / 3 takes the scaled estimate path
    let a = BigInt::from_small_int(1).shift_left(4000);
    let three = BigInt::from_small_int(3);
    let (q, r) = a.quot_rem(&three).unwrap();
    assert_eq!(r, BigInt::from_small_int(1));
    assert_eq!(&q * &three + r, a);

    let b = BigInt::from_small_int(-1).shift_left(2500) + big("987654321987654321");
    let (q, r) = a.quot_rem(&b).unwrap();
    assert_eq!(&q * &b + &r, a);
    assert!(r.abs() < b.abs());
}

#[test]
fn test_bitwise() {
    let a = big("-6"); // ...11010
    let b = big("12"); // ...01100
    assert_eq!(&a & &b, big("8"));
    assert_eq!(&a | &b, big("-2"));
    assert_eq!(&a ^ &b, big("-10"));
    assert_eq!(!&a, big("5"));
    assert_eq!(!ZERO, big("-1"));

    let wide = big("-18446744073709551616"); // -2^64
    assert_eq!(&wide & &big("-1"), wide);
    assert_eq!(&wide | &big("4294967295"), big("-18446744069414584321"));
}

#[test]
fn test_shift() {
    let one = BigInt::from_small_int(1);
    assert_eq!(&one << 65, big("36893488147419103232"));
    assert_eq!(&one << 32, big("4294967296"));
    assert_eq!(big("36893488147419103232") >> 65, one);
    assert_eq!(big("-1") << 3, big("-8"));
    assert_eq!(big("-8") >> 2, big("-2"));
    assert_eq!(big("-7") >> 1, big("-4"));
    assert_eq!(big("-7") >> 100, big("-1"));
    assert_eq!(big("7") >> 100, ZERO);
    assert_eq!(big("-36893488147419103232") >> 33, big("-4294967296"));
    assert_eq!(big("123456789") << 0, big("123456789"));

    let mut x = big("3");
    x <<= 40;
    assert_eq!(x, big("3298534883328"));
    x >>= 39;
    assert_eq!(x, big("6"));
}

#[test]
fn test_sign_truncate() {
    let x = big("255");
    assert_eq!(x.sign_truncate(8), big("-1"));
    assert_eq!(x.sign_truncate(9), big("255"));
    assert_eq!(big("4294967295").sign_truncate(32), big("-1"));
    assert_eq!(big("-4294967296").sign_truncate(32), ZERO);
    assert_eq!(big("18446744073709551615").sign_truncate(64), big("-1"));
    assert_eq!(big("9223372036854775808").sign_truncate(64), BigInt::from(i64::MIN));
    assert_eq!(big("12345").sign_truncate(0), ZERO);
}

#[test]
fn test_parse() {
    assert_eq!(big("0"), ZERO);
    assert_eq!(big("-0"), ZERO);
    assert_eq!(big("000000000000000042"), big("42"));
    assert_eq!(BigInt::from_str_radix("ff", 16).unwrap(), big("255"));
    assert_eq!(BigInt::from_str_radix("-zz", 36).unwrap(), big("-1295"));
    assert_eq!(
        BigInt::from_str_radix("fafcfbffaffaffbffbffbffbffbff", 16).unwrap(),
        big("81450334203377690042383467951422463")
    );
    assert_eq!(
        BigInt::from_str_radix("11111111111111111111111111111111111111111111111111111111111111111", 2).unwrap(),
        big("36893488147419103231")
    );
}

#[test]
fn test_parse_errors() {
    assert_eq!(BigInt::from_decimal_str(""), Err(LiteralError::Empty.into()));
    assert_eq!(BigInt::from_decimal_str("-"), Err(LiteralError::Empty.into()));
    assert_eq!(BigInt::from_decimal_str("12-3"), Err(LiteralError::InteriorSign.into()));
    assert_eq!(BigInt::from_decimal_str("--3"), Err(LiteralError::InteriorSign.into()));
    assert_eq!(
        BigInt::from_decimal_str("12a"),
        Err(LiteralError::InvalidDigit { digit: 'a', radix: 10 }.into())
    );
    assert_eq!(
        BigInt::from_decimal_str("+12"),
        Err(LiteralError::InvalidDigit { digit: '+', radix: 10 }.into())
    );
    assert_eq!(BigInt::from_str_radix("1", 1), Err(LiteralError::RadixOutOfRange(1).into()));
    assert_eq!(BigInt::from_str_radix("1", 37), Err(LiteralError::RadixOutOfRange(37).into()));
}

#[test]
fn test_to_string() {
    let s = "12345678909876523784950683472613487560983287654321";
    assert_eq!(big(s).to_string(), s);
    assert_eq!(big("-1000000").to_string(), "-1000000");
    assert_eq!(big("1000001").to_string(), "1000001");
    assert_eq!(big("999999").to_string(), "999999");
    assert_eq!(big("100000000000000000000000000000000001").to_string(), "100000000000000000000000000000000001");
    assert_eq!(ZERO.to_string(), "0");

    let s = "-12345678909876543213456789098574635425364758697096854736526458798765444375328977748874784874784874874587458742745748748745878389234734803142908342342983429834298324983429834219834983421983241983429834983429834219803249842198342983249328409832043892403429832948034289324890432890480943980342198493898342198429830423942834289342890";
    assert_eq!(big(s).to_string(), s);
}

#[test]
fn test_from_f64() {
    assert_eq!(BigInt::from_f64(f64::NAN), ZERO);
    assert_eq!(BigInt::from_f64(f64::INFINITY), ZERO);
    assert_eq!(BigInt::from_f64(f64::NEG_INFINITY), ZERO);
    assert_eq!(BigInt::from_f64(0.75), ZERO);
    assert_eq!(BigInt::from_f64(-2.5), big("-2"));
    assert_eq!(BigInt::from_f64(4294967296.0), big("4294967296"));
    assert_eq!(BigInt::from_f64(1e20), big("100000000000000000000"));
    assert_eq!(BigInt::from_f64(-9007199254740993.0), big("-9007199254740992"));
    assert_eq!(BigInt::from_f64(2f64.powi(100)), BigInt::from_small_int(1) << 100);
}

#[test]
fn test_to_f64() {
    assert_eq!(ZERO.to_f64(), 0.0);
    assert_eq!(big("-4294967296").to_f64(), -4294967296.0);
    assert_eq!(big("9007199254740993").to_f64(), 9007199254740992.0);
    assert_eq!((BigInt::from_small_int(1) << 1023).to_f64(), 2f64.powi(1023));
    assert_eq!(BigInt::ratio_to_f64(&big("1"), &big("4")), 0.25);
}

#[test]
fn test_decode_f64() {
    assert_eq!(BigInt::decode_f64(0.0), (0, ZERO));
    assert_eq!(BigInt::decode_f64(1.0), (-52, BigInt::from(1u64 << 52)));
    assert_eq!(BigInt::decode_f64(-1.5), (-52, BigInt::from(-(3i64 << 51))));

    let (e, m) = BigInt::decode_f64(123456.789);
    assert_eq!(m.encode_f64(e), 123456.789);
    let (e, m) = BigInt::decode_f64(-1e-310);
    assert_eq!(m.encode_f64(e), -1e-310);
}

#[test]
fn test_truncating_views() {
    let x = big("-4294967297"); // -(2^32 + 1)
    assert_eq!(x.to_i32_wrapping(), -1);
    assert_eq!(x.to_u32_wrapping(), u32::MAX);
    assert_eq!(x.to_u64_wrapping(), (-4294967297i64) as u64);
    assert_eq!(x.to_fixed64().to_i64(), -4294967297);
    assert_eq!(BigInt::from(x.to_fixed64()), x);

    let wide = (BigInt::from_small_int(1) << 64) + big("5");
    assert_eq!(wide.to_u64_wrapping(), 5);
    assert_eq!(wide.to_fixed64().to_i64(), 5);
}
