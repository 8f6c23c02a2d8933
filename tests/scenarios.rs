use big_integer::{BigInt, BigIntError};

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn test_add_carries_across_chunks() {
    assert_eq!(big("123456789123456789") + big("1"), big("123456789123456790"));
}

#[test]
fn test_div_rem_negative_dividend() {
    assert_eq!(big("-5") / big("2"), big("-2"));
    assert_eq!(big("-5") % big("2"), big("-1"));
    assert_eq!(big("-5").div_rem(&big("2")), Ok((big("-2"), big("-1"))));
}

#[test]
fn test_mul_by_zero() {
    let product = big("1000000000000000000000") * big("0");
    assert_eq!(product, big("0"));
    assert!(product.is_zero());
    assert!(!product.is_negative());
}

#[test]
fn test_shifts() {
    assert_eq!(big("4") << 2, big("16"));
    assert_eq!(big("-4") >> 1, big("-2"));
}

#[test]
fn test_invalid_literals() {
    assert_eq!("".parse::<BigInt>(), Err(BigIntError::InvalidFormat(String::new())));
    assert_eq!("-".parse::<BigInt>(), Err(BigIntError::InvalidFormat("-".to_string())));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(big("42").checked_div(&big("0")), Err(BigIntError::DivisionByZero));
    assert_eq!(big("-42").checked_rem(&big("0")), Err(BigIntError::DivisionByZero));
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_rem_operator_by_zero() {
    let mut a = big("42");
    a %= big("0");
}

#[test]
fn test_compound_assignment() {
    let mut a = big("100000000000000000000");
    a += big("1");
    a -= &big("2");
    a *= big("-3");
    assert_eq!(a, big("-299999999999999999997"));
    a /= &big("7");
    assert_eq!(a, big("-42857142857142857142"));
    a %= big("1000");
    assert_eq!(a, big("-142"));
    a &= big("255");
    assert_eq!(a, big("114"));
    a |= big("1");
    a ^= &big("3");
    assert_eq!(a, big("112"));
    a <<= 100;
    a >>= 99;
    assert_eq!(a, big("224"));
}

#[test]
fn test_increment_decrement() {
    let mut a = big("-1");
    assert_eq!(a.post_inc(), big("-1"));
    assert!(a.is_zero());
    assert_eq!(*a.inc(), big("1"));
    assert_eq!(a.post_dec(), big("1"));
    a.dec();
    assert_eq!(a, big("-1"));
}

#[test]
fn test_factorial() {
    let mut acc = BigInt::one();
    for i in 1..=30_u32 {
        acc *= BigInt::from(i);
    }
    assert_eq!(acc.to_string(), "265252859812191058636308480000000");
    for i in (1..=30_u32).rev() {
        assert_eq!(&acc % &BigInt::from(i), BigInt::zero());
        acc /= BigInt::from(i);
    }
    assert_eq!(acc, BigInt::one());
}

#[test]
fn test_machine_int_conversions() {
    assert_eq!(big("-9223372036854775808").to_i64(), Some(i64::MIN));
    assert_eq!(big("-9223372036854775809").to_i64(), None);
    assert_eq!(big("18446744073709551615").to_u64(), Some(u64::MAX));
    assert_eq!(big("18446744073709551616").to_u64(), None);
    assert_eq!(BigInt::from(7_u8).signum(), 1);
    assert_eq!(BigInt::from(-7_i16).signum(), -1);
    assert_eq!(BigInt::default().signum(), 0);
}

#[test]
fn test_hash_matches_eq() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    set.insert(big("4294967296"));
    set.insert(BigInt::one() << 32);
    set.insert(big("-0"));
    set.insert(BigInt::zero());
    assert_eq!(set.len(), 2);
}
