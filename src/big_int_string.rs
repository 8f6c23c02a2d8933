use std::fmt::{self, Display, Write};
use std::str::FromStr;

use log::debug;

use crate::BigInt;
use crate::big_num_constants::*;
use crate::error::{BigIntError, Result};

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.sign, "", &self.magnitude_to_decimal())
    }
}

impl BigInt {
    /// Decimal digits of `|self|`, produced one 9-digit chunk at a time.
    fn magnitude_to_decimal(&self) -> String {
        let mut mag = self.magnitude();
        if mag == [0u32] {
            return String::from("0");
        }

        let mut digit_groups: Vec<u32> = Vec::with_capacity(mag.len() * 32 / 29 + 1);
        while mag != [0u32] {
            digit_groups.push(BigInt::div_long_short(&mut mag, DECIMAL_CHUNK_RADIX));
            BigInt::trim_mag(&mut mag);
        }

        let mut result = String::with_capacity(digit_groups.len() * DECIMAL_CHUNK_DIGITS);
        let mut groups = digit_groups.iter().rev();
        if let Some(first) = groups.next() {
            // Writing into a String cannot fail.
            let _ = write!(result, "{}", first);
        }
        for group in groups {
            let _ = write!(result, "{:0width$}", group, width = DECIMAL_CHUNK_DIGITS);
        }
        result
    }
}

// 实现解析
impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(val: &str) -> Result<BigInt> {
        BigInt::parse_decimal(val)
    }
}

impl TryFrom<&str> for BigInt {
    type Error = BigIntError;

    fn try_from(val: &str) -> Result<BigInt> {
        BigInt::parse_decimal(val)
    }
}

impl TryFrom<String> for BigInt {
    type Error = BigIntError;

    fn try_from(val: String) -> Result<BigInt> {
        BigInt::parse_decimal(&val)
    }
}

impl BigInt {
    fn parse_decimal(val: &str) -> Result<BigInt> {
        let (negative, digits) = match val.as_bytes().first() {
            Some(b'-') => (true, &val[1..]),
            Some(b'+') => (false, &val[1..]),
            _ => (false, val),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            debug!("rejected decimal literal {:?}", val);
            return Err(BigIntError::InvalidFormat(val.to_string()));
        }

        let digits = digits.as_bytes();
        let mut first_group_len = digits.len() % DECIMAL_CHUNK_DIGITS;
        if first_group_len == 0 {
            first_group_len = DECIMAL_CHUNK_DIGITS;
        }

        let mut magnitude: Vec<u32> = vec![0];
        let mut cursor = 0;
        let mut group_len = first_group_len;
        while cursor < digits.len() {
            let group = &digits[cursor..cursor + group_len];
            let group_val = group
                .iter()
                .fold(0u32, |acc, &d| acc * 10 + (d - b'0') as u32);
            BigInt::destructive_mul_add(&mut magnitude, POW10[group_len], group_val);
            cursor += group_len;
            group_len = DECIMAL_CHUNK_DIGITS;
        }

        Ok(BigInt::from_magnitude(magnitude, negative))
    }

    /// `magnitude = magnitude * mul + add` in place.
    #[inline(always)]
    fn destructive_mul_add(magnitude: &mut Vec<u32>, mul: u32, add: u32) {
        let mut carry = add as u64;
        for x in magnitude.iter_mut() {
            let product = (mul as u64) * (*x as u64) + carry;
            *x = product as u32;
            carry = product >> LIMB_BITS;
        }
        if carry != 0 {
            magnitude.push(carry as u32);
        }
    }
}

#[test]
fn test_parse() {
    let a: BigInt = "123456789123456789".parse().unwrap();
    assert_eq!(a.limbs(), &[0xACD0_5F15_u32, 0x01B6_9B4B]);
    assert_eq!("+42".parse::<BigInt>(), Ok(BigInt::from(42)));
    assert_eq!("-0".parse::<BigInt>(), Ok(BigInt::zero()));
    assert_eq!("000000000000000000000017".parse::<BigInt>(), Ok(BigInt::from(17)));
    assert_eq!("-2147483648".parse::<BigInt>(), Ok(BigInt::from(i32::MIN)));
    assert_eq!(BigInt::try_from("-9223372036854775808"), Ok(BigInt::from(i64::MIN)));
    assert_eq!(BigInt::try_from(String::from("18446744073709551615")), Ok(BigInt::from(u64::MAX)));
}

#[test]
fn test_parse_invalid() {
    for s in ["", "-", "+", "12a", " 1", "1 ", "--1", "1-2", "+-3", "0x10", "١٢"] {
        assert_eq!(
            s.parse::<BigInt>(),
            Err(BigIntError::InvalidFormat(s.to_string())),
            "input {:?}", s
        );
    }
}

#[test]
fn test_to_string() {
    let s = "12345678909876523784950683472613487560983287654321";
    assert_eq!(s.parse::<BigInt>().unwrap().to_string(), s);

    let s = "-1000000000000000000000000000000000001";
    assert_eq!(s.parse::<BigInt>().unwrap().to_string(), s);

    assert_eq!(BigInt::zero().to_string(), "0");
    assert_eq!(BigInt::from(-1).to_string(), "-1");
    assert_eq!(BigInt::from(1_000_000_000).to_string(), "1000000000");
    assert_eq!(BigInt::from(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(BigInt::from(u64::MAX).to_string(), "18446744073709551615");
}

#[test]
fn test_format_flags() {
    let a = BigInt::from(-42);
    assert_eq!(format!("{:>6}", a), "   -42");
    assert_eq!(format!("{:06}", a), "-00042");
    assert_eq!(format!("{:+}", BigInt::from(42)), "+42");
    assert_eq!(format!("{:<4}|", BigInt::zero()), "0   |");
}
