//! Bit-level decomposition of IEEE-754 floating point values.

/// Exponent bias of a double, counting the 52 fraction bits.
const DOUBLE_EXPONENT_BIAS: i32 = 1075;
const FLOAT_EXPONENT_BIAS: i32 = 150;

/// A double split as `sign * (mantissa_high * 2^32 + mantissa_low) * 2^exponent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedDouble {
    /// `1` or `-1`
    pub sign: i32,
    /// Top 20 fraction bits, with the implicit leading one at bit 20 for normal values.
    pub mantissa_high: u32,
    pub mantissa_low: u32,
    pub exponent: i32,
}

impl DecodedDouble {
    pub fn signed_mantissa(&self) -> i64 {
        let magnitude = ((self.mantissa_high as i64) << 32) | self.mantissa_low as i64;
        self.sign as i64 * magnitude
    }
}

/// Both zeroes decompose to all-zero words.
pub fn decode_double(value: f64) -> DecodedDouble {
    if value == 0.0 {
        return DecodedDouble { sign: 1, mantissa_high: 0, mantissa_low: 0, exponent: 0 };
    }
    let bits = value.to_bits();
    let high = (bits >> 32) as u32;
    let biased = ((high >> 20) & 0x7ff) as i32;
    let mut mantissa_high = high & 0xfffff;
    let exponent = if biased == 0 {
        // subnormal
        1 - DOUBLE_EXPONENT_BIAS
    } else {
        mantissa_high |= 1 << 20;
        biased - DOUBLE_EXPONENT_BIAS
    };
    DecodedDouble {
        sign: if high >> 31 == 1 { -1 } else { 1 },
        mantissa_high,
        mantissa_low: bits as u32,
        exponent,
    }
}

/// Splits a float into `(mantissa, exponent)` with `value == mantissa * 2^exponent`.
pub fn decode_float(value: f32) -> (i32, i32) {
    if value == 0.0 {
        return (0, 0);
    }
    let bits = value.to_bits();
    let biased = ((bits >> 23) & 0xff) as i32;
    let mut mantissa = (bits & 0x7fffff) as i32;
    let exponent = if biased == 0 {
        1 - FLOAT_EXPONENT_BIAS
    } else {
        mantissa |= 1 << 23;
        biased - FLOAT_EXPONENT_BIAS
    };
    if bits >> 31 == 1 {
        (-mantissa, exponent)
    } else {
        (mantissa, exponent)
    }
}

/// `mantissa * 2^exponent`, scaling in two steps so the factor itself never leaves the
/// normal range.
pub fn encode_double(mantissa: f64, exponent: i32) -> f64 {
    let half = exponent / 2;
    mantissa * 2f64.powi(half) * 2f64.powi(exponent - half)
}

#[test]
fn test_decode_double() {
    let one = decode_double(1.0);
    assert_eq!(one, DecodedDouble { sign: 1, mantissa_high: 1 << 20, mantissa_low: 0, exponent: -52 });
    assert_eq!(one.signed_mantissa(), 1 << 52);

    let minus_three = decode_double(-3.0);
    assert_eq!(minus_three.sign, -1);
    assert_eq!(minus_three.signed_mantissa(), -(3 << 51));
    assert_eq!(minus_three.exponent, -51);

    let big = decode_double(2f64.powi(80) + 2f64.powi(30));
    assert_eq!(big.signed_mantissa(), (1 << 52) + (1 << 2));
    assert_eq!(big.exponent, 28);
}

#[test]
fn test_decode_double_zero_and_subnormal() {
    let zero = DecodedDouble { sign: 1, mantissa_high: 0, mantissa_low: 0, exponent: 0 };
    assert_eq!(decode_double(0.0), zero);
    assert_eq!(decode_double(-0.0), zero);

    let tiny = decode_double(f64::from_bits(1));
    assert_eq!(tiny.signed_mantissa(), 1);
    assert_eq!(tiny.exponent, -1074);

    let largest_subnormal = decode_double(f64::from_bits(0x000f_ffff_ffff_ffff));
    assert_eq!(largest_subnormal.mantissa_high, 0xfffff);
    assert_eq!(largest_subnormal.mantissa_low, u32::MAX);
    assert_eq!(largest_subnormal.exponent, -1074);

    let smallest_normal = decode_double(f64::MIN_POSITIVE);
    assert_eq!(smallest_normal.signed_mantissa(), 1 << 52);
    assert_eq!(smallest_normal.exponent, -1074);
}

#[test]
fn test_decode_float() {
    assert_eq!(decode_float(0.0), (0, 0));
    assert_eq!(decode_float(1.0), (1 << 23, -23));
    assert_eq!(decode_float(-0.5), (-(1 << 23), -24));
    assert_eq!(decode_float(f32::from_bits(1)), (1, -149));
}

#[test]
fn test_encode_double() {
    for value in [1.0, -3.0, 0.1, 123456.789, 1e300, -1e-300, 5e-324, f64::MAX] {
        let decoded = decode_double(value);
        assert_eq!(encode_double(decoded.signed_mantissa() as f64, decoded.exponent), value);
    }
    assert_eq!(encode_double(0.0, 0), 0.0);
}
