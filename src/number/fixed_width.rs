//! Conversion between [`Rational`] and fixed-width unsigned integers,
//! for integer-mode bitwise operations.

use super::rational::Rational;
use super::error::MathError;

use num::{BigInt, One, Signed, ToPrimitive};
use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// All-ones masks, indexed by [`WordWidth::index`].
const CHOP_MASKS: [u64; 4] = [0xFF, 0xFFFF, 0xFFFF_FFFF, u64::MAX];

/// The number of bits considered significant in integer mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum WordWidth {
  Byte,
  Word,
  DWord,
  #[default]
  QWord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid word width {bits}, expected 8, 16, 32, or 64")]
pub struct InvalidWordWidthError {
  pub bits: u32,
}

impl WordWidth {
  pub const ALL: [WordWidth; 4] = [WordWidth::Byte, WordWidth::Word, WordWidth::DWord, WordWidth::QWord];

  pub fn bits(self) -> u32 {
    match self {
      WordWidth::Byte => 8,
      WordWidth::Word => 16,
      WordWidth::DWord => 32,
      WordWidth::QWord => 64,
    }
  }

  /// Position of this width in the mask table.
  pub fn index(self) -> usize {
    match self {
      WordWidth::Byte => 0,
      WordWidth::Word => 1,
      WordWidth::DWord => 2,
      WordWidth::QWord => 3,
    }
  }

  /// The all-ones mask for this width.
  pub fn mask(self) -> u64 {
    CHOP_MASKS[self.index()]
  }
}

impl TryFrom<u32> for WordWidth {
  type Error = InvalidWordWidthError;

  fn try_from(bits: u32) -> Result<Self, Self::Error> {
    match bits {
      8 => Ok(WordWidth::Byte),
      16 => Ok(WordWidth::Word),
      32 => Ok(WordWidth::DWord),
      64 => Ok(WordWidth::QWord),
      _ => Err(InvalidWordWidthError { bits }),
    }
  }
}

impl From<WordWidth> for u32 {
  fn from(width: WordWidth) -> u32 {
    width.bits()
  }
}

impl Display for WordWidth {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}-bit", self.bits())
  }
}

impl Rational {
  /// Converts the integer part of `self` into an unsigned value of
  /// the given width.
  ///
  /// Negative values wrap as two's complement and the result is
  /// masked to `width`. Values whose integer part has magnitude of
  /// `2^64` or more are an overflow.
  pub fn to_fixed_width(&self, width: WordWidth) -> Result<u64, MathError> {
    let integer = self.to_integer();
    let modulus = BigInt::one() << 64;
    if integer.abs() >= modulus {
      return Err(MathError::Overflow);
    }
    let wrapped = if integer.is_negative() { integer + modulus } else { integer };
    let bits = wrapped.to_u64().ok_or(MathError::Overflow)?;
    Ok(bits & width.mask())
  }

  /// Bitwise XOR of the fixed-width value with the all-ones mask,
  /// i.e. the complement within `width`.
  pub fn complement_within(&self, width: WordWidth) -> Result<Rational, MathError> {
    let bits = self.to_fixed_width(width)?;
    Ok(Rational::from(bits ^ width.mask()))
  }
}
