//! Factorial, extended to non-integers through the gamma function.

use super::rational::Rational;
use super::error::MathError;

use num::{BigInt, One, ToPrimitive};

use std::f64::consts::PI;

/// Largest integer whose factorial is computed exactly. Larger
/// arguments are reported as an overflow.
pub const MAX_FACTORIAL_ARG: u32 = 3248;

// Lanczos approximation, g = 7, n = 9.
const LANCZOS_G: f64 = 7.0;
const LANCZOS_COEFFICIENTS: [f64; 9] = [
  0.999_999_999_999_809_93,
  676.520_368_121_885_1,
  -1_259.139_216_722_402_8,
  771.323_428_777_653_13,
  -176.615_029_162_140_59,
  12.507_343_278_686_905,
  -0.138_571_095_265_720_12,
  9.984_369_578_019_571_6e-6,
  1.505_632_735_149_311_6e-7,
];

/// `x!`, i.e. `Γ(x + 1)`.
///
/// Exact for non-negative integers up to [`MAX_FACTORIAL_ARG`].
/// Negative integers are poles of Γ and hence domain errors.
pub fn factorial(x: &Rational) -> Result<Rational, MathError> {
  if x.is_integer() {
    if x.is_negative() {
      return Err(MathError::Domain);
    }
    let n = x.numer().to_u32().filter(|n| *n <= MAX_FACTORIAL_ARG).ok_or(MathError::Overflow)?;
    let product = (2..=n).fold(BigInt::one(), |acc, i| acc * i);
    return Ok(Rational::from(product));
  }
  let value = x.to_f64().ok_or(MathError::Overflow)?;
  if !value.is_finite() || value.abs() > f64::from(MAX_FACTORIAL_ARG) {
    return Err(MathError::Overflow);
  }
  let result = gamma(value + 1.0);
  if !result.is_finite() {
    return Err(MathError::Overflow);
  }
  Rational::from_inexact(result)
}

fn gamma(x: f64) -> f64 {
  if x < 0.5 {
    // Reflection formula.
    PI / ((PI * x).sin() * gamma(1.0 - x))
  } else {
    let x = x - 1.0;
    let mut sum = LANCZOS_COEFFICIENTS[0];
    for (i, coefficient) in LANCZOS_COEFFICIENTS.iter().enumerate().skip(1) {
      sum += coefficient / (x + i as f64);
    }
    let t = x + LANCZOS_G + 0.5;
    (2.0 * PI).sqrt() * t.powf(x + 0.5) * (-t).exp() * sum
  }
}
