//! Property-based tests for `BigInt` arithmetic.
//!
//! Small operands are checked against `i128` reference arithmetic; large
//! operands against algebraic identities (round-trips, inverses,
//! division/remainder consistency, shift/multiply equivalence).

use std::cmp::Ordering;

use big_integer::BigInt;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Decimal literals of up to 80 digits, leading zeros and `-0` included.
fn decimal_literal() -> impl Strategy<Value = String> {
    "[+-]?[0-9]{1,80}"
}

/// Values close to a power of two, where limb trimming goes wrong first.
fn near_power_of_two() -> impl Strategy<Value = BigInt> {
    (0u32..200, -3i64..=3, any::<bool>()).prop_map(|(k, delta, negative)| {
        let v = (BigInt::one() << k) + BigInt::from(delta);
        if negative {
            -v
        } else {
            v
        }
    })
}

fn big_int() -> impl Strategy<Value = BigInt> {
    prop_oneof![
        decimal_literal().prop_map(|s| s.parse::<BigInt>().unwrap()),
        near_power_of_two(),
        any::<i64>().prop_map(BigInt::from),
    ]
}

fn pow2(n: u32) -> BigInt {
    let two = BigInt::from(2);
    (0..n).fold(BigInt::one(), |acc, _| acc * &two)
}

/// Expected rendering of a literal: no `+`, no leading zeros, `-0` is `0`.
fn normalize_literal(s: &str) -> String {
    let (negative, digits) = match s.as_bytes()[0] {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        "0".to_string()
    } else if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    }
}

// ============================================================================
// Reference arithmetic
// ============================================================================

proptest! {
    #[test]
    fn matches_i128_arithmetic(a in any::<i64>(), b in any::<i64>()) {
        let (x, y) = (BigInt::from(a), BigInt::from(b));
        let (a, b) = (a as i128, b as i128);

        prop_assert_eq!((&x + &y).to_string(), (a + b).to_string());
        prop_assert_eq!((&x - &y).to_string(), (a - b).to_string());
        prop_assert_eq!((&x * &y).to_string(), (a * b).to_string());
        prop_assert_eq!((&x & &y).to_string(), (a & b).to_string());
        prop_assert_eq!((&x | &y).to_string(), (a | b).to_string());
        prop_assert_eq!((&x ^ &y).to_string(), (a ^ b).to_string());
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        if b != 0 {
            prop_assert_eq!((&x / &y).to_string(), (a / b).to_string());
            prop_assert_eq!((&x % &y).to_string(), (a % b).to_string());
        }
    }

    #[test]
    fn matches_i128_shifts(a in any::<i64>(), n in 0u32..64) {
        let x = BigInt::from(a);
        let a = a as i128;
        prop_assert_eq!((&x << n).to_string(), (a << n).to_string());
        prop_assert_eq!((&x >> n).to_string(), (a >> n).to_string());
    }

    #[test]
    fn machine_int_round_trip(a in any::<i64>(), u in any::<u64>()) {
        prop_assert_eq!(BigInt::from(a).to_i64(), Some(a));
        prop_assert_eq!(BigInt::from(u).to_u64(), Some(u));
        prop_assert_eq!(BigInt::from(a).to_string(), a.to_string());
        prop_assert_eq!(BigInt::from(u).to_string(), u.to_string());
    }
}

// ============================================================================
// Identities over large values
// ============================================================================

proptest! {
    #[test]
    fn decimal_round_trip(s in decimal_literal()) {
        let value: BigInt = s.parse().unwrap();
        prop_assert_eq!(value.to_string(), normalize_literal(&s));
    }

    #[test]
    fn additive_identity_and_inverse(a in big_int()) {
        prop_assert_eq!(&a + &BigInt::zero(), a.clone());
        prop_assert!((&a + &(-&a)).is_zero());
        prop_assert_eq!(-(-&a), a.clone());
        prop_assert_eq!(&a - &a, BigInt::zero());
    }

    #[test]
    fn addition_commutes_and_associates(a in big_int(), b in big_int(), c in big_int()) {
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        prop_assert_eq!(&(&a - &b) + &b, a);
    }

    #[test]
    fn multiplication_identity_and_sign(a in big_int(), b in big_int()) {
        prop_assert_eq!(&a * &BigInt::one(), a.clone());
        prop_assert_eq!(&a * &b, &b * &a);
        if !a.is_zero() && !b.is_zero() {
            prop_assert_eq!((&a * &b).is_negative(), a.is_negative() ^ b.is_negative());
        }
    }

    #[test]
    fn multiplication_distributes(a in big_int(), b in big_int(), c in big_int()) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn division_remainder_consistency(a in big_int(), b in big_int()) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert_eq!(&(&q * &b) + &r, a.clone());
        prop_assert!(r.abs() < b.abs());
        prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
        prop_assert_eq!(&a / &b, q);
        prop_assert_eq!(&a % &b, r);
    }

    #[test]
    fn exact_division_recovers_factor(a in big_int(), b in big_int()) {
        prop_assume!(!b.is_zero());
        let product = &a * &b;
        prop_assert_eq!(&product / &b, a);
        prop_assert!((&product % &b).is_zero());
    }

    #[test]
    fn shifts_match_powers_of_two(a in big_int(), n in 0u32..160) {
        let p = pow2(n);
        prop_assert_eq!(&a << n, &a * &p);

        let (q, r) = a.div_rem(&p).unwrap();
        let floor = if r.is_negative() { &q - &BigInt::one() } else { q };
        prop_assert_eq!(&a >> n, floor);
        prop_assert_eq!(&(&a << n) >> n, a);
    }

    #[test]
    fn not_is_negate_minus_one(a in big_int()) {
        prop_assert_eq!(!&a, &(-&a) - &BigInt::one());
        prop_assert_eq!(!!a.clone(), a);
    }

    #[test]
    fn bitwise_identities(a in big_int(), b in big_int()) {
        // a + b == (a ^ b) + 2 * (a & b)
        prop_assert_eq!(&a + &b, &(&a ^ &b) + &(&(&a & &b) << 1));
        // a | b == (a ^ b) + (a & b)
        prop_assert_eq!(&a | &b, &(&a ^ &b) + &(&a & &b));
        prop_assert_eq!(!&(&a & &b), &!&a | &!&b);
        prop_assert!((&a ^ &a).is_zero());
    }

    #[test]
    fn ordering_is_total(a in big_int(), b in big_int()) {
        let lt = a < b;
        let eq = a == b;
        let gt = a > b;
        prop_assert_eq!(lt as u8 + eq as u8 + gt as u8, 1);
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        let diff = &a - &b;
        let expected = if diff.is_zero() {
            Ordering::Equal
        } else if diff.is_negative() {
            Ordering::Less
        } else {
            Ordering::Greater
        };
        prop_assert_eq!(a.cmp(&b), expected);
    }

    #[test]
    fn increment_then_decrement(a in big_int()) {
        let mut b = a.clone();
        b.inc();
        prop_assert_eq!(&b, &(&a + &BigInt::one()));
        b.dec();
        prop_assert_eq!(b, a);
    }
}
