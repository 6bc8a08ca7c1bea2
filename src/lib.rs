//! Exact Int \
//! This crate provides:
//! - [`BigInt`]: Immutable arbitrary-precision integers. All operations behave as if BigInt were represented in two's-complement notation.
//! - [`Fixed64`]: 64-bit two's-complement integers built from two 32-bit words, with wrapping arithmetic.
//! - [`decode_double`], [`decode_float`], [`encode_double`]: exact decomposition of IEEE-754 values into mantissa and binary exponent.
//!
//! Small values of both integer types are shared through a process-wide [`SmallValueCache`].

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod big_num_error;
mod division;
mod fixed64;
mod ieee754;

pub use big_int::BigInt;
pub use big_num_cache::SmallValueCache;
pub use big_num_error::{BigNumError, BigNumResult, LiteralError};
pub use fixed64::Fixed64;
pub use ieee754::{decode_double, decode_float, encode_double, DecodedDouble};

#[cfg(test)]
mod tests {
    use crate::{BigInt, Fixed64};

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
        assert_eq!((&a << 10).to_string(), "10240000000000000");
        assert_eq!((&a >> 10).to_string(), "9765625000");

        let x: Fixed64 = "10000000000000".parse().unwrap();
        assert_eq!(BigInt::from(x), a);
        assert_eq!(a.to_fixed64(), x);
    }
}
