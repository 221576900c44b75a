//! Single-bit rotations within the current word width.

use crate::number::{Rational, WordWidth, MathError};

/// Rotates the fixed-width value of `x` one bit to the left. The bit
/// shifted out of the top of the word reappears as the lowest bit.
pub fn rotate_left(x: &Rational, width: WordWidth) -> Result<Rational, MathError> {
  let bits = x.to_fixed_width(width)?;
  let msb = (bits >> (width.bits() - 1)) & 1;
  let rotated = ((bits << 1) | msb) & width.mask();
  Ok(Rational::from(rotated))
}

/// Rotates the fixed-width value of `x` one bit to the right. The
/// lowest bit reappears as the top bit of the word.
pub fn rotate_right(x: &Rational, width: WordWidth) -> Result<Rational, MathError> {
  let bits = x.to_fixed_width(width)?;
  let lsb = bits & 1;
  let rotated = ((bits >> 1) | (lsb << (width.bits() - 1))) & width.mask();
  Ok(Rational::from(rotated))
}
