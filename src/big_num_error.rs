use thiserror::Error;

/// Why a textual literal was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LiteralError {
    #[error("empty string")]
    Empty,
    #[error("radix out of range: {0}")]
    RadixOutOfRange(u32),
    #[error("interior \"-\" character")]
    InteriorSign,
    #[error("invalid digit {digit:?} for radix {radix}")]
    InvalidDigit { digit: char, radix: u32 },
}

/// Errors raised by the integer types. Both are fatal to the computation that hit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum BigNumError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("number format error: {0}")]
    MalformedLiteral(#[from] LiteralError),
}

pub type BigNumResult<T> = Result<T, BigNumError>;

#[test]
fn test_error_display() {
    assert_eq!(BigNumError::DivisionByZero.to_string(), "division by zero");
    assert_eq!(
        BigNumError::from(LiteralError::Empty).to_string(),
        "number format error: empty string"
    );
    assert_eq!(
        BigNumError::from(LiteralError::RadixOutOfRange(40)).to_string(),
        "number format error: radix out of range: 40"
    );
    assert_eq!(
        BigNumError::from(LiteralError::InvalidDigit { digit: 'z', radix: 10 }).to_string(),
        "number format error: invalid digit 'z' for radix 10"
    );
}
