use thiserror::Error;

use std::convert::TryFrom;

/// An arithmetic failure raised by the rational library.
///
/// Every variant carries a stable numeric code (see
/// [`MathError::code`]). The code is the only payload; the
/// user-facing text is resolved at the display boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum MathError {
  #[error("Division by zero")]
  DivideByZero,
  #[error("Argument outside of the function's domain")]
  Domain,
  #[error("Result is indeterminate")]
  Indefinite,
  #[error("Result is positive infinity")]
  PositiveInfinity,
  #[error("Result is negative infinity")]
  NegativeInfinity,
  #[error("Argument out of the valid range")]
  InvalidRange,
  #[error("Out of memory")]
  OutOfMemory,
  #[error("Result exceeds representable magnitude")]
  Overflow,
  #[error("No result")]
  NoResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown error code {code}")]
pub struct UnknownErrorCode {
  pub code: u32,
}

impl MathError {
  /// The numeric error code. Code 5 is reserved and has no variant.
  pub fn code(self) -> u32 {
    match self {
      MathError::DivideByZero => 0,
      MathError::Domain => 1,
      MathError::Indefinite => 2,
      MathError::PositiveInfinity => 3,
      MathError::NegativeInfinity => 4,
      MathError::InvalidRange => 6,
      MathError::OutOfMemory => 7,
      MathError::Overflow => 8,
      MathError::NoResult => 9,
    }
  }
}

impl TryFrom<u32> for MathError {
  type Error = UnknownErrorCode;

  fn try_from(code: u32) -> Result<Self, Self::Error> {
    match code {
      0 => Ok(MathError::DivideByZero),
      1 => Ok(MathError::Domain),
      2 => Ok(MathError::Indefinite),
      3 => Ok(MathError::PositiveInfinity),
      4 => Ok(MathError::NegativeInfinity),
      6 => Ok(MathError::InvalidRange),
      7 => Ok(MathError::OutOfMemory),
      8 => Ok(MathError::Overflow),
      9 => Ok(MathError::NoResult),
      _ => Err(UnknownErrorCode { code }),
    }
  }
}
