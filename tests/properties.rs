use exact_int::{BigInt, Fixed64};
use proptest::prelude::*;

/// Values from one to five words, either sign.
fn any_big_int() -> impl Strategy<Value = BigInt> {
    prop::collection::vec(any::<u32>(), 1..=5).prop_map(|words| BigInt::from_words(&words))
}

fn non_zero_big_int() -> impl Strategy<Value = BigInt> {
    any_big_int().prop_filter("divisor must be non-zero", |b| !b.is_zero())
}

proptest! {
    #[test]
    fn big_int_matches_i128(a in any::<i64>(), b in any::<i64>()) {
        let (x, y) = (BigInt::from(a), BigInt::from(b));
        let (wa, wb) = (a as i128, b as i128);
        prop_assert_eq!(&x + &y, BigInt::from(wa + wb));
        prop_assert_eq!(&x - &y, BigInt::from(wa - wb));
        prop_assert_eq!(&x * &y, BigInt::from(wa * wb));
        prop_assert_eq!(&x & &y, BigInt::from(wa & wb));
        prop_assert_eq!(&x | &y, BigInt::from(wa | wb));
        prop_assert_eq!(&x ^ &y, BigInt::from(wa ^ wb));
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        if b != 0 {
            prop_assert_eq!(&x / &y, BigInt::from(wa / wb));
            prop_assert_eq!(&x % &y, BigInt::from(wa % wb));
            let floor = if wa % wb != 0 && (wa < 0) != (wb < 0) { wa / wb - 1 } else { wa / wb };
            prop_assert_eq!(x.checked_div_floor(&y).unwrap(), BigInt::from(floor));
        }
    }

    #[test]
    fn add_and_multiply_commute(a in any_big_int(), b in any_big_int()) {
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!(&a * &b, &b * &a);
        prop_assert_eq!(&a + &(-&a), BigInt::default());
        prop_assert_eq!(&a * &BigInt::default(), BigInt::default());
    }

    #[test]
    fn quotient_and_remainder_rebuild_dividend(a in any_big_int(), b in non_zero_big_int()) {
        let (q, r) = a.quot_rem(&b).unwrap();
        prop_assert_eq!(&(&q * &b) + &r, a.clone());
        prop_assert!(r.abs() < b.abs());
        prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());

        let (d, m) = a.div_mod(&b).unwrap();
        prop_assert_eq!(&(&d * &b) + &m, a);
        prop_assert!(m.is_zero() || m.is_negative() == b.is_negative());
    }

    #[test]
    fn decimal_round_trip(a in any_big_int()) {
        prop_assert_eq!(a.to_string().parse::<BigInt>().unwrap(), a);
    }

    #[test]
    fn shift_left_multiplies(a in any_big_int(), n in 0u32..200) {
        let power = BigInt::from_small_int(1).shift_left(n);
        prop_assert_eq!(a.shift_left(n), &a * &power);
        prop_assert_eq!(a.shift_left(n).shift_right(n), a);
    }

    #[test]
    fn doubles_round_trip_within_53_bits(a in -(1i64 << 53)..=(1i64 << 53), shift in 0u32..64) {
        let x = BigInt::from(a).shift_left(shift);
        prop_assert_eq!(BigInt::from_f64(x.to_f64()), x);
    }

    #[test]
    fn fixed64_matches_wrapping_i64(a in any::<i64>(), b in any::<i64>(), n in any::<u32>()) {
        let (x, y) = (Fixed64::from_i64(a), Fixed64::from_i64(b));
        prop_assert_eq!((x + y).to_i64(), a.wrapping_add(b));
        prop_assert_eq!((x - y).to_i64(), a.wrapping_sub(b));
        prop_assert_eq!((x * y).to_i64(), a.wrapping_mul(b));
        prop_assert_eq!((x & y).to_i64(), a & b);
        prop_assert_eq!((x | y).to_i64(), a | b);
        prop_assert_eq!((x ^ y).to_i64(), a ^ b);
        prop_assert_eq!((-x).to_i64(), a.wrapping_neg());
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        prop_assert_eq!((x << n).to_i64(), a.wrapping_shl(n));
        prop_assert_eq!((x >> n).to_i64(), a.wrapping_shr(n));
        prop_assert_eq!(x.shift_right_unsigned(n).to_i64(), (a as u64).wrapping_shr(n) as i64);
        prop_assert_eq!(x.to_string(), a.to_string());
        if b != 0 {
            prop_assert_eq!((x / y).to_i64(), a.wrapping_div(b));
            prop_assert_eq!((x % y).to_i64(), a.wrapping_rem(b));
        }
    }

    #[test]
    fn fixed64_floored_division(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(b != 0 && !(a == i64::MIN && b == -1));
        let (x, y) = (Fixed64::from_i64(a), Fixed64::from_i64(b));
        let (wa, wb) = (a as i128, b as i128);
        let floor = if wa % wb != 0 && (wa < 0) != (wb < 0) { wa / wb - 1 } else { wa / wb };
        let modulo = ((wa % wb) + wb) % wb;

        let d = x.checked_div_floor(y).unwrap();
        let m = x.checked_mod_floor(y).unwrap();
        prop_assert_eq!(d.to_i64() as i128, floor);
        prop_assert_eq!(m.to_i64() as i128, modulo);
        prop_assert_eq!(d * y + m, x);
        prop_assert!(m.is_zero() || m.is_negative() == y.is_negative());
    }

    #[test]
    fn fixed64_agrees_with_big_int(a in any::<i64>(), b in any::<i64>()) {
        let (x, y) = (Fixed64::from_i64(a), Fixed64::from_i64(b));
        let product = &BigInt::from(x) * &BigInt::from(y);
        prop_assert_eq!(product.to_fixed64(), x * y);
    }
}
