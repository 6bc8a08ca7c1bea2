/// 2^16 as a double.
pub const TWO_PWR_16_DBL: f64 = (1u64 << 16) as f64;

/// 2^24 as a double. Products of two magnitudes below this fit in a double exactly.
pub const TWO_PWR_24_DBL: f64 = (1u64 << 24) as f64;

pub const TWO_PWR_32_DBL: f64 = TWO_PWR_16_DBL * TWO_PWR_16_DBL;

pub const TWO_PWR_63_DBL: f64 = TWO_PWR_32_DBL * TWO_PWR_32_DBL / 2.0;

/// 2^53, the first integer a double cannot step past by one.
pub const TWO_PWR_53_DBL: f64 = (1u64 << 53) as f64;

/// Values in `SMALL_CACHE_MIN..SMALL_CACHE_MAX` are memoized.
pub const SMALL_CACHE_MIN: i32 = -128;
pub const SMALL_CACHE_MAX: i32 = 128;

pub const MIN_RADIX: u32 = 2;
pub const MAX_RADIX: u32 = 36;

/// Number of digits parsed per chunk when reading a literal.
pub const DIGITS_PER_CHUNK: usize = 8;

/// Decimal digits emitted per division when formatting.
pub const DIGITS_PER_GROUP: usize = 6;
pub const GROUP_DIVISOR: i32 = 1_000_000;

/// Below this bit length of the approximate quotient digit the correction step is one.
pub const EXACT_STEP_BITS: f64 = 48.0;

/// Bits of each operand kept when estimating a quotient through doubles.
/// Must stay well below 1024 so the truncated operands remain finite.
pub const ESTIMATE_BITS: u64 = 960;
