//! # BigInt
//! Arbitrary-precision signed integers stored in two's-complement notation
//! as 32-bit limbs, least-significant limb first.
//! # Example
//! ```
//! use big_integer::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "-900000000000".parse().unwrap();
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a & b = {}", &a & &b);
//! println!("a << 10 = {}", &a << 10);
//! println!("b >> 10 = {}", &b >> 10);
//! ```

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
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

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::error::{BigIntError, Result};

/// Limb used to sign-extend a value with the given sign.
macro_rules! ext_limb {
    ($sign: expr) => {
        if $sign { NEG_LIMB } else { 0u32 }
    };
}

macro_rules! high_bit {
    ($limb: expr) => {
        ($limb >> (LIMB_BITS - 1)) == 1
    };
}

/// The value is `limbs` sign-extended to infinity with the bits of `sign`.
/// Every public constructor and operator returns the canonical form
/// produced by [`BigInt::fit`].
#[derive(Debug, Clone)]
pub struct BigInt {
    pub(crate) limbs: Vec<u32>,
    pub(crate) sign: bool,
}

// 规范化
impl BigInt {
    /// Drops redundant sign-extension limbs and re-appends one when the new
    /// top limb's high bit disagrees with `sign`.
    pub(crate) fn fit(&mut self) {
        let ext = ext_limb!(self.sign);
        while self.limbs.len() > 1 && self.limbs[self.limbs.len() - 1] == ext {
            self.limbs.pop();
        }
        match self.limbs.last() {
            Some(&top) if high_bit!(top) == self.sign => {}
            _ => self.limbs.push(ext),
        }
    }

    pub(crate) fn from_raw(limbs: Vec<u32>, sign: bool) -> BigInt {
        let mut val = BigInt { limbs, sign };
        val.fit();
        val
    }

    /// Limb `i` of the infinite sign extension.
    #[inline(always)]
    fn limb_at(&self, i: usize) -> u32 {
        self.limbs.get(i).copied().unwrap_or(ext_limb!(self.sign))
    }

    fn extended(&self, len: usize) -> Vec<u32> {
        let mut limbs = self.limbs.clone();
        if limbs.len() < len {
            limbs.resize(len, ext_limb!(self.sign));
        }
        limbs
    }
}

// 实现构造
impl BigInt {
    pub fn zero() -> BigInt {
        POS_CACHE[0].clone()
    }

    pub fn one() -> BigInt {
        POS_CACHE[1].clone()
    }

    fn value_of_u64(val: u64) -> BigInt {
        if val <= MAX_CONSTANT as u64 {
            return POS_CACHE[val as usize].clone();
        }
        BigInt::from_raw(vec![val as u32, (val >> LIMB_BITS) as u32], false)
    }

    fn value_of_i64(val: i64) -> BigInt {
        let abs = val.unsigned_abs();
        if abs <= MAX_CONSTANT as u64 {
            return if val < 0 {
                NEG_CACHE[abs as usize].clone()
            } else {
                POS_CACHE[abs as usize].clone()
            };
        }
        let bits = val as u64;
        BigInt::from_raw(vec![bits as u32, (bits >> LIMB_BITS) as u32], val < 0)
    }

    /// Rebuilds a value from an unsigned magnitude.
    pub(crate) fn from_magnitude(mag: Vec<u32>, negative: bool) -> BigInt {
        let mut val = BigInt::from_raw(mag, false);
        if negative {
            val.negate();
        }
        val
    }

    /// Unsigned magnitude limbs without leading zero limbs; zero is `[0]`.
    pub(crate) fn magnitude(&self) -> Vec<u32> {
        let mut mag = if self.sign {
            (-self).limbs
        } else {
            self.limbs.clone()
        };
        BigInt::trim_mag(&mut mag);
        mag
    }

    pub(crate) fn trim_mag(mag: &mut Vec<u32>) {
        while mag.len() > 1 && mag[mag.len() - 1] == 0 {
            mag.pop();
        }
        if mag.is_empty() {
            mag.push(0);
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of_u64(val as u64)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of_i64(val as i64)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);
impl_signed_to_big_int!(i8, i16, i32, isize, i64);

// 实现到机器整数的转换
impl BigInt {
    pub fn to_i64(&self) -> Option<i64> {
        if self.limbs.len() > 2 {
            return None;
        }
        let low = self.limb_at(0) as u64;
        let high = self.limb_at(1) as u64;
        Some(((high << LIMB_BITS) | low) as i64)
    }

    pub fn to_u64(&self) -> Option<u64> {
        if self.sign {
            return None;
        }
        match self.limbs.len() {
            1 | 2 => {}
            3 if self.limbs[2] == 0 => {}
            _ => return None,
        }
        let low = self.limbs[0] as u64;
        let high = self.limb_at(1) as u64;
        Some((high << LIMB_BITS) | low)
    }
}

// 查询
impl BigInt {
    /// Canonical two's-complement limbs, least-significant first.
    pub fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    pub fn is_negative(&self) -> bool {
        self.sign
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    pub fn signum(&self) -> i8 {
        if self.sign {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }
}

// 实现大小比较
impl BigInt {
    /// Compares two trimmed magnitudes.
    pub(crate) fn compare_mag(x: &[u32], y: &[u32]) -> Ordering {
        x.len()
            .cmp(&y.len())
            .then_with(|| x.iter().rev().cmp(y.iter().rev()))
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.limbs == other.limbs
    }
}
impl Eq for BigInt {}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.limbs.hash(state);
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.sign != other.sign {
            return if self.sign { Ordering::Less } else { Ordering::Greater };
        }
        let self_len = self.limbs.len();
        let other_len = other.limbs.len();
        if self_len != other_len {
            // a longer negative value is further from zero
            let ord = self_len.cmp(&other_len);
            return if self.sign { ord.reverse() } else { ord };
        }
        for (a, b) in self.limbs.iter().rev().zip(other.limbs.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }
        Ordering::Equal
    }
}

// 实现取反
impl BigInt {
    /// Two's-complement negation in place.
    pub fn negate(&mut self) {
        let mut carry = true;
        for limb in self.limbs.iter_mut() {
            *limb = !*limb;
            if carry {
                let (sum, overflow) = limb.overflowing_add(1);
                *limb = sum;
                carry = overflow;
            }
        }
        self.sign = !self.sign;
        if carry {
            // the carry ran into the complemented sign extension
            if self.sign {
                self.sign = false;
            } else {
                self.limbs.push(1);
            }
        }
        self.fit();
    }

    pub fn abs(&self) -> BigInt {
        if self.sign {
            -self
        } else {
            self.clone()
        }
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

impl Not for BigInt {
    type Output = BigInt;

    fn not(mut self) -> Self::Output {
        self.limbs.iter_mut().for_each(|limb| *limb = !*limb);
        self.sign = !self.sign;
        self.fit();
        self
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        !self.clone()
    }
}

// 实现加法
impl BigInt {
    #[inline(always)]
    fn add_with_carry(a: u32, b: u32, carry: bool) -> (u32, bool) {
        let (sum, c1) = a.overflowing_add(b);
        let (sum, c2) = sum.overflowing_add(carry as u32);
        (sum, c1 || c2)
    }

    fn add_ref(&self, rhs: &BigInt) -> BigInt {
        let len = self.limbs.len().max(rhs.limbs.len()) + 1;
        let mut limbs = self.extended(len);
        let mut carry = false;
        for (i, limb) in limbs.iter_mut().enumerate() {
            let (sum, c) = BigInt::add_with_carry(*limb, rhs.limb_at(i), carry);
            *limb = sum;
            carry = c;
        }
        let sign = high_bit!(limbs[len - 1]);
        BigInt::from_raw(limbs, sign)
    }

    fn sub_ref(&self, rhs: &BigInt) -> BigInt {
        self.add_ref(&-rhs)
    }

    /// Adds `addend` to the unsigned magnitude `acc` in place.
    fn add_mag_assign(acc: &mut Vec<u32>, addend: &[u32]) {
        if acc.len() < addend.len() {
            acc.resize(addend.len(), 0);
        }
        let mut carry = false;
        for (i, limb) in acc.iter_mut().enumerate() {
            if i >= addend.len() && !carry {
                break;
            }
            let (sum, c) = BigInt::add_with_carry(*limb, addend.get(i).copied().unwrap_or(0), carry);
            *limb = sum;
            carry = c;
        }
        if carry {
            acc.push(1);
        }
    }
}

// 实现自增自减
impl BigInt {
    pub fn inc(&mut self) -> &mut Self {
        *self = self.add_ref(&POS_CACHE[1]);
        self
    }

    pub fn dec(&mut self) -> &mut Self {
        *self = self.add_ref(&NEG_CACHE[1]);
        self
    }

    /// Increments in place and returns the previous value.
    pub fn post_inc(&mut self) -> BigInt {
        let old = self.clone();
        self.inc();
        old
    }

    /// Decrements in place and returns the previous value.
    pub fn post_dec(&mut self) -> BigInt {
        let old = self.clone();
        self.dec();
        old
    }
}

// 实现乘法
impl BigInt {
    fn mul_ref(&self, rhs: &BigInt) -> BigInt {
        if self.is_zero() || rhs.is_zero() {
            return BigInt::zero();
        }
        let negative = self.sign ^ rhs.sign;
        let product = BigInt::mul_mag(&self.magnitude(), &rhs.magnitude());
        BigInt::from_magnitude(product, negative)
    }

    /// `x * y` for a single limb `y`; the result has one extra limb.
    pub(crate) fn mul_by_limb(x: &[u32], y: u32) -> Vec<u32> {
        let mut result = Vec::with_capacity(x.len() + 1);
        let mut carry: u64 = 0;
        for &limb in x {
            let product = (limb as u64) * (y as u64) + carry;
            result.push(product as u32);
            carry = product >> LIMB_BITS;
        }
        result.push(carry as u32);
        result
    }

    /// Schoolbook product: walk `y` from its top limb, shifting the
    /// accumulator one limb left before adding each partial product.
    fn mul_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
        let mut acc: Vec<u32> = Vec::with_capacity(x.len() + y.len() + 1);
        for &limb in y.iter().rev() {
            acc.insert(0, 0);
            if limb != 0 {
                BigInt::add_mag_assign(&mut acc, &BigInt::mul_by_limb(x, limb));
            }
        }
        acc
    }
}

// 实现位运算
impl BigInt {
    /// Applies `op` limb-wise over equal-length sign extensions; the sign is
    /// `op` applied to the extension limbs.
    fn bit_op(&self, rhs: &BigInt, op: fn(u32, u32) -> u32) -> BigInt {
        let len = self.limbs.len().max(rhs.limbs.len());
        let limbs = (0..len)
            .map(|i| op(self.limb_at(i), rhs.limb_at(i)))
            .collect();
        let sign = op(ext_limb!(self.sign), ext_limb!(rhs.sign)) != 0;
        BigInt::from_raw(limbs, sign)
    }

    fn bitand_ref(&self, rhs: &BigInt) -> BigInt {
        self.bit_op(rhs, |a, b| a & b)
    }

    fn bitor_ref(&self, rhs: &BigInt) -> BigInt {
        self.bit_op(rhs, |a, b| a | b)
    }

    fn bitxor_ref(&self, rhs: &BigInt) -> BigInt {
        self.bit_op(rhs, |a, b| a ^ b)
    }
}

// 实现移位
impl BigInt {
    fn shl_impl(&self, n: u32) -> BigInt {
        if self.is_zero() || n == 0 {
            return self.clone();
        }
        let n_limbs = (n / LIMB_BITS) as usize;
        let n_bits = n % LIMB_BITS;
        let mut limbs = Vec::with_capacity(n_limbs + self.limbs.len() + 1);
        limbs.resize(n_limbs, 0);
        if n_bits == 0 {
            limbs.extend_from_slice(&self.limbs);
        } else {
            let mut carry = 0u32;
            for &limb in &self.limbs {
                limbs.push((limb << n_bits) | carry);
                carry = limb >> (LIMB_BITS - n_bits);
            }
            limbs.push((ext_limb!(self.sign) << n_bits) | carry);
        }
        BigInt::from_raw(limbs, self.sign)
    }

    /// Arithmetic right shift: rounds toward negative infinity.
    fn shr_impl(&self, n: u32) -> BigInt {
        let n_limbs = (n / LIMB_BITS) as usize;
        if n_limbs >= self.limbs.len() {
            return if self.sign { NEG_CACHE[1].clone() } else { BigInt::zero() };
        }
        let mut limbs = self.limbs[n_limbs..].to_vec();
        let n_bits = n % LIMB_BITS;
        if n_bits != 0 {
            let mut high = ext_limb!(self.sign);
            for limb in limbs.iter_mut().rev() {
                let cur = *limb;
                *limb = (cur >> n_bits) | (high << (LIMB_BITS - n_bits));
                high = cur;
            }
        }
        BigInt::from_raw(limbs, self.sign)
    }

    fn check_shift(n: i64) -> Result<u32> {
        if n < 0 || n > MAX_SHIFT_BITS {
            return Err(BigIntError::InvalidShiftAmount(n));
        }
        Ok(n as u32)
    }

    /// Left shift by a signed amount; negative or oversized amounts are
    /// rejected.
    pub fn checked_shl(&self, n: i64) -> Result<BigInt> {
        Ok(self.shl_impl(BigInt::check_shift(n)?))
    }

    pub fn checked_shr(&self, n: i64) -> Result<BigInt> {
        Ok(self.shr_impl(BigInt::check_shift(n)?))
    }
}

impl Shl<u32> for BigInt {
    type Output = BigInt;

    fn shl(self, n: u32) -> Self::Output {
        self.shl_impl(n)
    }
}

impl Shl<u32> for &BigInt {
    type Output = BigInt;

    fn shl(self, n: u32) -> Self::Output {
        self.shl_impl(n)
    }
}

impl ShlAssign<u32> for BigInt {
    fn shl_assign(&mut self, n: u32) {
        *self = self.shl_impl(n);
    }
}

impl Shr<u32> for BigInt {
    type Output = BigInt;

    fn shr(self, n: u32) -> Self::Output {
        self.shr_impl(n)
    }
}

impl Shr<u32> for &BigInt {
    type Output = BigInt;

    fn shr(self, n: u32) -> Self::Output {
        self.shr_impl(n)
    }
}

impl ShrAssign<u32> for BigInt {
    fn shr_assign(&mut self, n: u32) {
        *self = self.shr_impl(n);
    }
}

// 运算符转发: 所有权与引用的四种组合以及复合赋值
macro_rules! forward_binop {
    ($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident, $func: ident) => {
        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                BigInt::$func(self, rhs)
            }
        }

        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                BigInt::$func(&self, &rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                BigInt::$func(&self, rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                BigInt::$func(self, &rhs)
            }
        }

        impl $assign_imp<&BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: &BigInt) {
                *self = BigInt::$func(self, rhs);
            }
        }

        impl $assign_imp<BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: BigInt) {
                *self = BigInt::$func(self, &rhs);
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign, add_ref);
forward_binop!(Sub, sub, SubAssign, sub_assign, sub_ref);
forward_binop!(Mul, mul, MulAssign, mul_assign, mul_ref);
forward_binop!(Div, div, DivAssign, div_assign, div_or_panic);
forward_binop!(Rem, rem, RemAssign, rem_assign, rem_or_panic);
forward_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, bitand_ref);
forward_binop!(BitOr, bitor, BitOrAssign, bitor_assign, bitor_ref);
forward_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, bitxor_ref);

#[cfg(test)]
fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn test_fit() {
    let a = BigInt::from_raw(vec![5, 0, 0], false);
    assert_eq!(a.limbs, vec![5]);

    let a = BigInt::from_raw(vec![0xFFFF_FFFB, NEG_LIMB, NEG_LIMB], true);
    assert_eq!(a.limbs, vec![0xFFFF_FFFB]);

    // high bit set on a positive value keeps a zero limb
    let a = BigInt::from_raw(vec![0x8000_0000, 0], false);
    assert_eq!(a.limbs, vec![0x8000_0000, 0]);
    let a = BigInt::from_raw(vec![0x8000_0000], false);
    assert_eq!(a.limbs, vec![0x8000_0000, 0]);

    // clear high bit on a negative value keeps an extension limb
    let a = BigInt::from_raw(vec![0x7FFF_FFFF], true);
    assert_eq!(a.limbs, vec![0x7FFF_FFFF, NEG_LIMB]);

    let zero = BigInt::from_raw(vec![0, 0, 0], false);
    assert_eq!(zero.limbs, vec![0]);
    assert!(!zero.sign);

    let mut twice = BigInt::from_raw(vec![1, 2, 0x8000_0000, 0, 0], false);
    let once = twice.limbs.clone();
    twice.fit();
    assert_eq!(twice.limbs, once);
}

#[test]
fn test_from() {
    assert_eq!(BigInt::from(0_u8).limbs, vec![0]);
    assert_eq!(BigInt::from(-1_i32).limbs, vec![NEG_LIMB]);
    assert!(BigInt::from(-1_i8).sign);
    assert_eq!(BigInt::from(u32::MAX).limbs, vec![u32::MAX, 0]);
    assert_eq!(BigInt::from(u64::MAX).limbs, vec![u32::MAX, u32::MAX, 0]);
    assert_eq!(BigInt::from(i64::MIN).limbs, vec![0, 0x8000_0000]);
    assert_eq!(BigInt::from(i64::MAX).limbs, vec![u32::MAX, 0x7FFF_FFFF]);
    assert_eq!(BigInt::from(-17_i64).limbs, vec![(-17_i32) as u32]);
    assert_eq!(BigInt::from(-16_isize), NEG_CACHE[16]);
    assert_eq!(BigInt::from(12_usize), POS_CACHE[12]);
}

#[test]
fn test_to_machine_int() {
    for v in [0_i64, 1, -1, 16, -17, i32::MIN as i64, i64::MAX, i64::MIN, 1 << 40] {
        assert_eq!(BigInt::from(v).to_i64(), Some(v));
    }
    assert_eq!(BigInt::from(u64::MAX).to_u64(), Some(u64::MAX));
    assert_eq!(BigInt::from(u64::MAX).to_i64(), None);
    assert_eq!(BigInt::from(-3).to_u64(), None);
    assert_eq!(big("18446744073709551616").to_u64(), None);
}

#[test]
fn test_cmp() {
    let values = [
        big("-100000000000000000000"),
        big("-4294967296"),
        big("-4294967295"),
        big("-2147483648"),
        big("-1"),
        big("0"),
        big("1"),
        big("2147483648"),
        big("4294967295"),
        big("4294967296"),
        big("100000000000000000000"),
    ];
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(a.cmp(b), i.cmp(&j), "{} vs {}", a, b);
        }
    }
}

#[test]
fn test_add() {
    assert_eq!(big("4294967295") + big("1"), big("4294967296"));
    assert_eq!(big("-4294967296") + big("1"), big("-4294967295"));
    assert_eq!(big("2147483647") + big("1"), big("2147483648"));
    assert_eq!(big("-2147483648") + big("-1"), big("-2147483649"));
    assert_eq!(big("123456789123456789") + big("-123456789123456789"), BigInt::zero());
    assert_eq!(big("-18446744073709551615") - big("1"), big("-18446744073709551616"));
}

#[test]
fn test_neg() {
    let min32 = big("-2147483648");
    assert_eq!(min32.limbs, vec![0x8000_0000]);
    let pos = -&min32;
    assert_eq!(pos.limbs, vec![0x8000_0000, 0]);
    assert_eq!(-pos, min32);
    assert_eq!(-BigInt::zero(), BigInt::zero());
    assert_eq!(big("-5").abs(), big("5"));
    assert_eq!(big("5").abs(), big("5"));

    // non-canonical -2^32 written as a bare zero limb
    let mut a = BigInt { limbs: vec![0], sign: true };
    a.negate();
    assert_eq!(a, big("4294967296"));
}

#[test]
fn test_inc_dec() {
    let mut a = big("4294967295");
    assert_eq!(a.post_inc(), big("4294967295"));
    assert_eq!(a, big("4294967296"));
    a.dec().dec();
    assert_eq!(a, big("4294967294"));

    let mut b = BigInt::zero();
    assert_eq!(b.post_dec(), BigInt::zero());
    assert_eq!(b, big("-1"));
    b.inc();
    assert!(b.is_zero());
}

#[test]
fn test_mul() {
    let a = big("10000000000000000");
    let b = big("3001");
    assert_eq!(&a * &b, big("30010000000000000000"));
    assert_eq!(&b * &a, big("30010000000000000000"));
    assert_eq!(big("-10000000000000000") * big("30000000000000000"), big("-300000000000000000000000000000000"));
    assert_eq!(big("-4294967296") * big("-4294967296"), big("18446744073709551616"));
    assert_eq!(big("1000000000000000000000") * BigInt::zero(), BigInt::zero());
    assert_eq!(big("-2147483648") * big("-1"), big("2147483648"));
}

#[test]
fn test_bitwise() {
    assert_eq!(big("12") & big("10"), big("8"));
    assert_eq!(big("12") | big("10"), big("14"));
    assert_eq!(big("12") ^ big("10"), big("6"));
    assert_eq!(big("-1") & big("18446744073709551616"), big("18446744073709551616"));
    assert_eq!(big("-12") & big("10"), big("0"));
    assert_eq!(big("-12") | big("10"), big("-2"));
    assert_eq!(big("-12") ^ big("-10"), big("2"));
    assert_eq!(!big("0"), big("-1"));
    assert_eq!(!big("-4294967296"), big("4294967295"));
}

#[test]
fn test_shl() {
    assert_eq!(big("4") << 2, big("16"));
    assert_eq!(big("1") << 32, big("4294967296"));
    assert_eq!(big("-1") << 31, big("-2147483648"));
    assert_eq!(big("-3") << 33, big("-25769803776"));
    assert_eq!(big("0") << 100, big("0"));
    let mut a = big("1");
    a <<= 64;
    assert_eq!(a, big("18446744073709551616"));
}

#[test]
fn test_shr() {
    assert_eq!(big("-4") >> 1, big("-2"));
    assert_eq!(big("-5") >> 1, big("-3"));
    assert_eq!(big("-1") >> 200, big("-1"));
    assert_eq!(big("18446744073709551616") >> 64, big("1"));
    assert_eq!(big("18446744073709551615") >> 200, big("0"));
    assert_eq!(big("-18446744073709551617") >> 32, big("-4294967297"));
    let mut a = big("4294967296");
    a >>= 1;
    assert_eq!(a, big("2147483648"));
}

#[test]
fn test_checked_shift() {
    assert_eq!(big("4").checked_shl(2), Ok(big("16")));
    assert_eq!(big("-4").checked_shr(1), Ok(big("-2")));
    assert_eq!(big("4").checked_shl(-1), Err(BigIntError::InvalidShiftAmount(-1)));
    assert_eq!(big("4").checked_shr(-7), Err(BigIntError::InvalidShiftAmount(-7)));
    assert_eq!(
        big("4").checked_shl(MAX_SHIFT_BITS + 1),
        Err(BigIntError::InvalidShiftAmount(MAX_SHIFT_BITS + 1))
    );
}
