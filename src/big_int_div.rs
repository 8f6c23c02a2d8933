//! Division and remainder. Quotients truncate toward zero and the remainder
//! takes the sign of the dividend, so `(a / b) * b + a % b == a`.

use std::cmp::Ordering;

use log::trace;

use crate::BigInt;
use crate::big_num_constants::*;
use crate::error::{BigIntError, Result};

// 实现除法
impl BigInt {
    pub fn checked_div(&self, divisor: &BigInt) -> Result<BigInt> {
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        let negative = self.sign ^ divisor.sign;
        let u = self.magnitude();
        let v = divisor.magnitude();

        if BigInt::compare_mag(&u, &v) == Ordering::Less {
            return Ok(BigInt::zero());
        }

        let q = if v.len() == 1 {
            let mut q = u;
            BigInt::div_long_short(&mut q, v[0]);
            q
        } else {
            BigInt::divide_knuth(&u, &v)
        };
        Ok(BigInt::from_magnitude(q, negative))
    }

    /// Remainder derived from the quotient: `self - (self / divisor) * divisor`.
    pub fn checked_rem(&self, divisor: &BigInt) -> Result<BigInt> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        let quotient = self.checked_div(divisor)?;
        let remainder = self - &(&quotient * divisor);
        Ok((quotient, remainder))
    }

    pub(crate) fn div_or_panic(&self, divisor: &BigInt) -> BigInt {
        match self.checked_div(divisor) {
            Ok(q) => q,
            Err(e) => panic!("{}", e),
        }
    }

    pub(crate) fn rem_or_panic(&self, divisor: &BigInt) -> BigInt {
        match self.checked_rem(divisor) {
            Ok(r) => r,
            Err(e) => panic!("{}", e),
        }
    }

    /// Divides the magnitude `mag` in place by a single limb and returns the
    /// remainder. Leading zero limbs are left for the caller to trim.
    pub(crate) fn div_long_short(mag: &mut [u32], divisor: u32) -> u32 {
        let divisor = divisor as u64;
        let mut rem: u64 = 0;
        for limb in mag.iter_mut().rev() {
            let cur = (rem << LIMB_BITS) | *limb as u64;
            *limb = (cur / divisor) as u32;
            rem = cur % divisor;
        }
        rem as u32
    }

    /// Long division of magnitudes with `v.len() >= 2` and `u >= v`.
    ///
    /// Both operands are scaled by `f = floor(2^32 / (v_top + 1))` so the
    /// divisor's top limb is at least `2^31`. Each quotient limb is then
    /// estimated from the top two limbs of the running remainder and is at
    /// most two too large (Knuth, TAOCP Vol. 2, 4.3.1, Theorem B).
    fn divide_knuth(u: &[u32], v: &[u32]) -> Vec<u32> {
        let top = v[v.len() - 1] as u64;
        let f = ((1u64 << LIMB_BITS) / (top + 1)) as u32;

        let mut u = BigInt::mul_by_limb(u, f);
        let mut v = BigInt::mul_by_limb(v, f);
        BigInt::trim_mag(&mut v);

        let n = v.len();
        let m = u.len() - n;
        let v_top = v[n - 1] as u64;
        let mut q = vec![0u32; m];

        for j in (0..m).rev() {
            let num = ((u[j + n] as u64) << LIMB_BITS) | u[j + n - 1] as u64;
            let mut qhat = (num / v_top).min(u32::MAX as u64) as u32;

            let window = &mut u[j..=j + n];
            let mut negative = BigInt::mul_sub(window, &v, qhat);
            let mut corrections = 0;
            while negative {
                assert!(
                    corrections < MAX_QUOTIENT_CORRECTIONS,
                    "quotient limb estimate off by more than {}", MAX_QUOTIENT_CORRECTIONS
                );
                qhat -= 1;
                negative = !BigInt::add_back(window, &v);
                corrections += 1;
            }
            if corrections > 0 {
                trace!("quotient limb {} corrected {} time(s) to {:#x}", j, corrections, qhat);
            }
            q[j] = qhat;
        }
        q
    }

    /// `window -= qhat * v`; returns true when the result went negative.
    fn mul_sub(window: &mut [u32], v: &[u32], qhat: u32) -> bool {
        let mut mul_carry: u64 = 0;
        let mut borrow = false;
        for (i, limb) in window.iter_mut().enumerate() {
            let product = v.get(i).map_or(0, |&d| d as u64 * qhat as u64) + mul_carry;
            mul_carry = product >> LIMB_BITS;
            let (diff, b1) = limb.overflowing_sub(product as u32);
            let (diff, b2) = diff.overflowing_sub(borrow as u32);
            *limb = diff;
            borrow = b1 || b2;
        }
        borrow
    }

    /// `window += v`; returns the carry out of the top limb.
    fn add_back(window: &mut [u32], v: &[u32]) -> bool {
        let mut carry = false;
        for (i, limb) in window.iter_mut().enumerate() {
            let (sum, c1) = limb.overflowing_add(v.get(i).copied().unwrap_or(0));
            let (sum, c2) = sum.overflowing_add(carry as u32);
            *limb = sum;
            carry = c1 || c2;
        }
        carry
    }
}

#[cfg(test)]
fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn test_div() {
    assert_eq!(big("120") / big("13"), big("9"));
    assert_eq!(big("12") / big("13"), big("0"));
    assert_eq!(big("-5") / big("2"), big("-2"));
    assert_eq!(big("5") / big("-2"), big("-2"));
    assert_eq!(big("-5") / big("-2"), big("2"));
    // divide one word
    let a = big("10000000000000000000000000000000000");
    let b = big("1000");
    assert_eq!(a / b, big("10000000000000000000000000000000"));
    // divide Knuth
    let a = big("124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789");
    let b = big("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376");
    let c = big("21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215");
    assert_eq!(&a / &b, c);
    assert_eq!(-&a / &b, -&c);
}

#[test]
fn test_div_small_top_limb() {
    // divisor top limb is 1, forcing the largest normalization factor
    let v = big("4294967297");
    let u = big("340282366920938463463374607431768211450");
    let (q, r) = u.div_rem(&v).unwrap();
    assert_eq!(q, big("79228162495817593524129366014"));
    assert_eq!(r, big("4294967292"));
    assert_eq!(&q * &v + &r, u);

    // top remainder limb equals the divisor's top limb
    let v = big("18446744073709551615");
    let u = big("340282366920938463444927863358058659839");
    let (q, r) = u.div_rem(&v).unwrap();
    assert_eq!(q, big("18446744073709551615"));
    assert_eq!(r, big("18446744073709551614"));
}

#[test]
fn test_mod() {
    assert_eq!(big("12") % big("8"), big("4"));
    assert_eq!(big("-5") % big("2"), big("-1"));
    assert_eq!(big("5") % big("-2"), big("1"));
    assert_eq!(big("10000000000000000") % big("10"), BigInt::zero());
    let a = big("23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245");
    let b = big("526738495607659438721653478560954837265378495607");
    let r = big("393707270751296419349581795408095683999332705291");
    assert_eq!(&a % &b, r);
    assert_eq!(-a % b, -r);
}

#[test]
fn test_div_by_zero() {
    assert_eq!(big("7").checked_div(&BigInt::zero()), Err(BigIntError::DivisionByZero));
    assert_eq!(big("7").checked_rem(&BigInt::zero()), Err(BigIntError::DivisionByZero));
    assert!(BigInt::zero().div_rem(&BigInt::zero()).is_err());
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_div_operator_by_zero() {
    let _ = big("7") / BigInt::zero();
}

#[test]
fn test_div_long_short() {
    let mut mag = vec![0, 0, 1];
    let rem = BigInt::div_long_short(&mut mag, 1_000_000_000);
    // 2^64 = 18446744073 * 10^9 + 709551616
    assert_eq!(rem, 709_551_616);
    assert_eq!(BigInt::from_magnitude(mag, false), big("18446744073"));
}
