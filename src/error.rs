/// Errors reported by fallible [`BigInt`](crate::BigInt) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BigIntError {
    #[error("invalid decimal integer literal: {0:?}")]
    InvalidFormat(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("invalid shift amount: {0}")]
    InvalidShiftAmount(i64),
}

pub type Result<T> = std::result::Result<T, BigIntError>;

#[test]
fn test_error_display() {
    assert_eq!(BigIntError::DivisionByZero.to_string(), "division by zero");
    assert_eq!(
        BigIntError::InvalidFormat("1a".to_string()).to_string(),
        "invalid decimal integer literal: \"1a\""
    );
    assert_eq!(BigIntError::InvalidShiftAmount(-3).to_string(), "invalid shift amount: -3");
}
