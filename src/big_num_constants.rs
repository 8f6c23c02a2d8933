pub const LIMB_BITS: u32 = u32::BITS;

/// Sign-extension limb of a negative value.
pub const NEG_LIMB: u32 = u32::MAX;

pub const DECIMAL_CHUNK_DIGITS: usize = 9;

pub const DECIMAL_CHUNK_RADIX: u32 = 1_000_000_000;

pub const POW10: [u32; DECIMAL_CHUNK_DIGITS + 1] = [
    1, 10, 100, 1_000, 10_000, 100_000,
    1_000_000, 10_000_000, 100_000_000, 1_000_000_000
];

/// Largest absolute value kept in the small constant cache.
pub const MAX_CONSTANT: usize = 16;

/// Upper bound on add-back steps per quotient limb in long division.
pub const MAX_QUOTIENT_CORRECTIONS: usize = 2;

pub const MAX_SHIFT_BITS: i64 = u32::MAX as i64;
