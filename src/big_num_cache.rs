use lazy_static::*;

use crate::BigInt;
use crate::big_num_constants::*;

lazy_static! {
    /// `POS_CACHE[i] == i` for `0 <= i <= MAX_CONSTANT`.
    pub static ref POS_CACHE: Vec<BigInt> = (0..=MAX_CONSTANT as u32)
        .map(|val| BigInt::from_raw(vec![val], false))
        .collect();
    /// `NEG_CACHE[i] == -i` for `0 <= i <= MAX_CONSTANT`.
    pub static ref NEG_CACHE: Vec<BigInt> = (0..=MAX_CONSTANT as u32)
        .map(|val| BigInt::from_raw(vec![val.wrapping_neg()], val != 0))
        .collect();
}

#[test]
fn test_cache() {
    assert_eq!(POS_CACHE.len(), MAX_CONSTANT + 1);
    assert_eq!(NEG_CACHE[0], POS_CACHE[0]);
    for i in 1..=MAX_CONSTANT {
        assert_eq!(POS_CACHE[i].limbs(), &[i as u32]);
        assert_eq!(NEG_CACHE[i].limbs(), &[(i as u32).wrapping_neg()]);
        assert!(NEG_CACHE[i].is_negative());
        assert_eq!(-&POS_CACHE[i], NEG_CACHE[i]);
    }
}
