use exact_int::{BigInt, BigNumError, Fixed64, LiteralError};

#[test]
fn multiply_two_pwr_128_by_two() {
    let a = BigInt::from_decimal_str("340282366920938463463374607431768211456").unwrap();
    let product = &a * &BigInt::from_small_int(2);
    assert_eq!(product.to_string(), "680564733841876926926749214863536422912");
}

#[test]
fn truncating_and_floored_division() {
    let a = BigInt::from_small_int(-7);
    let b = BigInt::from_small_int(2);
    assert_eq!(a.checked_quot(&b), Ok(BigInt::from(-3)));
    assert_eq!(a.checked_rem(&b), Ok(BigInt::from(-1)));
    assert_eq!(a.checked_div_floor(&b), Ok(BigInt::from(-4)));
    assert_eq!(a.checked_mod_floor(&b), Ok(BigInt::from(1)));
}

#[test]
fn shift_one_past_two_words() {
    let shifted = BigInt::from_small_int(1).shift_left(65);
    assert_eq!(shifted, BigInt::from_decimal_str("36893488147419103232").unwrap());
    assert_eq!(shifted.words(), &[0, 0, 2]);
}

#[test]
fn fixed64_min_times_minus_one_wraps() {
    let product = Fixed64::MIN_VALUE * Fixed64::from_int(-1);
    assert_eq!(product, Fixed64::MIN_VALUE);
}

#[test]
fn division_by_zero_is_reported() {
    let a = BigInt::from(10);
    assert_eq!(a.checked_quot(&BigInt::default()), Err(BigNumError::DivisionByZero));
    assert_eq!(
        Fixed64::ONE.checked_mod_floor(Fixed64::ZERO),
        Err(BigNumError::DivisionByZero)
    );
}

#[test]
fn malformed_literals_are_reported() {
    assert_eq!(
        BigInt::from_decimal_str(""),
        Err(BigNumError::MalformedLiteral(LiteralError::Empty))
    );
    assert_eq!(
        BigInt::from_str_radix("10", 37),
        Err(BigNumError::MalformedLiteral(LiteralError::RadixOutOfRange(37)))
    );
    assert_eq!(
        BigInt::from_decimal_str("12-3"),
        Err(BigNumError::MalformedLiteral(LiteralError::InteriorSign))
    );
    assert_eq!(
        BigInt::from_decimal_str("12a"),
        Err(BigNumError::MalformedLiteral(LiteralError::InvalidDigit { digit: 'a', radix: 10 }))
    );
}

#[test]
fn words_round_trip_through_conversions() {
    let value = BigInt::from_words(&[0xFFFF_FFFF, 0x7FFF_FFFF]);
    assert_eq!(value, BigInt::from(i64::MAX));
    assert_eq!(value.to_fixed64(), Fixed64::MAX_VALUE);
    assert_eq!(BigInt::from(Fixed64::MIN_VALUE), BigInt::from(i64::MIN));
    assert_eq!(BigInt::from_words(&[0xFFFF_FFFF]), BigInt::from(-1));
}

#[test]
fn huge_quotients_terminate() {
    let a = BigInt::from_small_int(1).shift_left(4000) - BigInt::from(1);
    let b = BigInt::from_small_int(3).shift_left(1000) + BigInt::from(7);
    let (q, r) = a.quot_rem(&b).unwrap();
    assert_eq!(&(&q * &b) + &r, a);
    assert!(r >= BigInt::default() && r < b);
}
