//! Powers and roots of rational numbers.
//!
//! Results stay exact whenever the mathematical result is itself
//! rational (integer exponents, perfect powers). Everything else falls
//! back to an inexact computation rounded to
//! [`INEXACT_DIGITS`](super::rational::INEXACT_DIGITS).

use super::rational::Rational;
use super::error::MathError;

use num::{BigInt, BigRational, Integer, Zero, One, Signed, ToPrimitive};
use num::integer::Roots;

use std::cmp::Ordering;

/// Largest exponent magnitude for which [`powi`] computes an exact
/// result. Anything larger is an overflow rather than an unbounded
/// big-integer computation.
pub const MAX_EXACT_EXPONENT: u32 = 10_000;

/// Raises a rational to an integer power, exactly.
///
/// The indeterminate form `0^0` is treated as 1.
pub fn powi(base: &Rational, exp: &BigInt) -> Result<Rational, MathError> {
  let magnitude = exp.abs().to_u32().filter(|m| *m <= MAX_EXACT_EXPONENT).ok_or(MathError::Overflow)?;
  match exp.cmp(&BigInt::zero()) {
    Ordering::Equal => Ok(Rational::one()),
    Ordering::Less => base.invert().map(|r| Rational::from(powi_by_repeated_square(r.into(), magnitude))),
    Ordering::Greater => Ok(Rational::from(powi_by_repeated_square(base.clone().into(), magnitude))),
  }
}

// Precondition: exp > 0.
fn powi_by_repeated_square(mut input: BigRational, mut exp: u32) -> BigRational {
  assert!(exp > 0);
  let mut result = BigRational::one();
  while exp > 1 {
    if exp % 2 == 0 {
      input = &input * &input;
      exp /= 2;
    } else {
      result *= &input;
      exp -= 1;
    }
  }
  result *= input;
  result
}

/// Principal real `n`th root of `x`.
///
/// Odd roots of negative numbers are real and negative. Even roots of
/// negative numbers, and the zeroth root, are domain errors.
pub fn root(x: &Rational, n: u32) -> Result<Rational, MathError> {
  if n == 0 {
    return Err(MathError::Domain);
  }
  if x.is_negative() && n % 2 == 0 {
    return Err(MathError::Domain);
  }
  if x.is_zero() || n == 1 {
    return Ok(x.clone());
  }
  if let Some(exact) = exact_root(x, n) {
    return Ok(exact);
  }
  let magnitude = root_inexact(&x.abs(), n);
  let value = if x.is_negative() { - magnitude } else { magnitude };
  Rational::from_inexact(value)
}

/// The root, if numerator and denominator are both perfect `n`th
/// powers.
fn exact_root(x: &Rational, n: u32) -> Option<Rational> {
  let numer = x.numer().abs();
  let denom = x.denom();
  let numer_root = numer.nth_root(n);
  let denom_root = denom.nth_root(n);
  if numer_root.pow(n) != numer || &denom_root.pow(n) != denom {
    return None;
  }
  let numer_root = if x.is_negative() { - numer_root } else { numer_root };
  Some(Rational::ratio(numer_root, denom_root))
}

/// `x^(1/n)` for positive `x`. Inputs beyond `f64` range go through
/// log space, so they still produce a finite answer when the root
/// itself is representable.
fn root_inexact(x: &Rational, n: u32) -> f64 {
  match x.to_f64() {
    Some(value) if value.is_normal() => match n {
      2 => value.sqrt(),
      3 => value.cbrt(),
      _ => value.powf((n as f64).recip()),
    },
    _ => (ln_positive(x) / n as f64).exp(),
  }
}

/// Natural logarithm of a positive rational, robust against
/// numerators and denominators that do not fit in an `f64`.
pub(super) fn ln_positive(x: &Rational) -> f64 {
  ln_big(x.numer()) - ln_big(x.denom())
}

fn ln_big(n: &BigInt) -> f64 {
  // Keep 64 significant bits and account for the rest with ln 2.
  let bits = n.bits();
  if bits <= 64 {
    return n.to_f64().unwrap_or(f64::NAN).ln();
  }
  let shift = bits - 64;
  let mantissa = (n >> shift).to_f64().unwrap_or(f64::NAN);
  mantissa.ln() + (shift as f64) * std::f64::consts::LN_2
}

/// Raises `base` to a rational power, producing the principal real
/// value.
pub fn pow(base: &Rational, exp: &Rational) -> Result<Rational, MathError> {
  if exp.is_integer() {
    return powi(base, exp.numer());
  }
  // exp = p / q with q > 1
  let p = exp.numer();
  if base.is_zero() {
    return if exp.is_positive() { Ok(Rational::zero()) } else { Err(MathError::DivideByZero) };
  }
  if base.is_negative() && exp.denom().is_even() {
    return Err(MathError::Domain);
  }
  if let Some(q) = exp.denom().to_u32() {
    if p.abs() <= BigInt::from(MAX_EXACT_EXPONENT) {
      if let Some(exact) = exact_root(base, q) {
        return powi(&exact, p);
      }
    }
  }
  let exponent = exp.to_f64().ok_or(MathError::Overflow)?;
  let magnitude = (ln_positive(&base.abs()) * exponent).exp();
  // A negative base only reaches here with an odd denominator, so
  // the sign follows the parity of the numerator.
  let negate = base.is_negative() && p.is_odd();
  Rational::from_inexact(if negate { - magnitude } else { magnitude })
}
