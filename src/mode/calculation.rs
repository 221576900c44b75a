use bitflags::bitflags;
use serde::{Serialize, Deserialize};

/// The calculator's current calculation mode includes several bitwise
/// flags indicating how to evaluate scientific functions.
///
/// This structure is designed to be cheap to clone, but its exact
/// implementation is private.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationMode {
  inner: CalculationModeBits,
}

bitflags! {
  #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
  #[serde(transparent)]
  struct CalculationModeBits: u8 {
    const INTEGER = 0b0001;
    const INVERSE = 0b0010;
    const ERROR = 0b0100;
  }
}

impl CalculationMode {
  pub fn new() -> Self {
    Self::default()
  }

  /// The integer flag is off by default. In integer mode, values are
  /// constrained to the current word width, the bit rotations are
  /// available, and the real-valued functions (circular, hyperbolic,
  /// degree-minute-second) leave their operand untouched.
  pub fn has_integer_flag(&self) -> bool {
    self.inner.contains(CalculationModeBits::INTEGER)
  }

  /// Sets the integer flag. See [`CalculationMode::has_integer_flag`].
  pub fn set_integer_flag(&mut self, mode: bool) {
    self.inner.set(CalculationModeBits::INTEGER, mode);
  }

  /// The inverse flag selects the inverse variant of the next
  /// function (arcsine instead of sine, and so on).
  pub fn has_inverse_flag(&self) -> bool {
    self.inner.contains(CalculationModeBits::INVERSE)
  }

  pub fn set_inverse_flag(&mut self, mode: bool) {
    self.inner.set(CalculationModeBits::INVERSE, mode);
  }

  pub fn toggle_inverse_flag(&mut self) {
    self.inner.toggle(CalculationModeBits::INVERSE);
  }

  /// The error flag is raised whenever an error has been displayed,
  /// and stays raised until explicitly cleared.
  pub fn has_error_flag(&self) -> bool {
    self.inner.contains(CalculationModeBits::ERROR)
  }

  pub fn set_error_flag(&mut self, mode: bool) {
    self.inner.set(CalculationModeBits::ERROR, mode);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_flags_default_off() {
    let mode = CalculationMode::new();
    assert!(!mode.has_integer_flag());
    assert!(!mode.has_inverse_flag());
    assert!(!mode.has_error_flag());
  }

  #[test]
  fn test_flags_are_independent() {
    let mut mode = CalculationMode::new();
    mode.set_integer_flag(true);
    mode.toggle_inverse_flag();
    assert!(mode.has_integer_flag());
    assert!(mode.has_inverse_flag());
    assert!(!mode.has_error_flag());
    mode.toggle_inverse_flag();
    assert!(!mode.has_inverse_flag());
    assert!(mode.has_integer_flag());
  }
}
