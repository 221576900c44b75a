//! Circular, hyperbolic, logarithmic and exponential functions on
//! rationals.
//!
//! Circular functions in degrees and gradians reduce their argument
//! exactly modulo a full turn first, so the values at quarter turns
//! (and the 30-degree family for sine and cosine) come out exact,
//! and `tan` at an odd quarter turn is a domain error rather than a
//! huge number. Everything else is computed in `f64` and converted
//! back with [`Rational::from_inexact`].

use super::rational::Rational;
use super::error::MathError;
use super::power::{pow, ln_positive};
use crate::util::angles::AngleUnit;

use num::{BigInt, Zero, One, Integer, Signed};

use std::f64::consts::{LN_2, LN_10};

/// Exact sine at `k` twelfths of a turn, when rational.
fn sin_twelfths(k: &BigInt) -> Option<Rational> {
  let k = k.mod_floor(&BigInt::from(12));
  let k = u32::try_from(k).ok()?;
  match k {
    0 | 6 => Some(Rational::zero()),
    1 | 5 => Some(Rational::ratio(1, 2)),
    3 => Some(Rational::one()),
    7 | 11 => Some(Rational::ratio(-1, 2)),
    9 => Some(Rational::from(-1)),
    _ => None,
  }
}

/// How many whole `parts` of a turn the angle is, if it is a whole
/// number of them.
fn turns_in_parts(turns: &Rational, parts: i64) -> Option<BigInt> {
  let scaled = turns * &Rational::from(parts);
  if scaled.is_integer() { Some(scaled.to_integer()) } else { None }
}

pub fn sin(x: &Rational, unit: AngleUnit) -> Result<Rational, MathError> {
  match unit.to_turns(x) {
    Some(turns) => {
      if let Some(exact) = turns_in_parts(&turns.0, 12).and_then(|k| sin_twelfths(&k)) {
        return Ok(exact);
      }
      Rational::from_inexact(turns.to_radians().sin())
    }
    None => Rational::from_inexact(finite_f64(x)?.sin()),
  }
}

pub fn cos(x: &Rational, unit: AngleUnit) -> Result<Rational, MathError> {
  match unit.to_turns(x) {
    Some(turns) => {
      if let Some(exact) = turns_in_parts(&turns.0, 12).and_then(|k| sin_twelfths(&(k + 3))) {
        return Ok(exact);
      }
      Rational::from_inexact(turns.to_radians().cos())
    }
    None => Rational::from_inexact(finite_f64(x)?.cos()),
  }
}

pub fn tan(x: &Rational, unit: AngleUnit) -> Result<Rational, MathError> {
  match unit.to_turns(x) {
    Some(turns) => {
      if let Some(m) = turns_in_parts(&turns.0, 8) {
        return match u32::try_from(m.mod_floor(&BigInt::from(4))) {
          Ok(0) => Ok(Rational::zero()),
          Ok(1) => Ok(Rational::one()),
          Ok(3) => Ok(Rational::from(-1)),
          _ => Err(MathError::Domain),
        };
      }
      Rational::from_inexact(turns.to_radians().tan())
    }
    None => Rational::from_inexact(finite_f64(x)?.tan()),
  }
}

fn finite_f64(x: &Rational) -> Result<f64, MathError> {
  let value = x.to_f64().ok_or(MathError::Overflow)?;
  if value.is_finite() { Ok(value) } else { Err(MathError::Overflow) }
}

/// Converts an exact inverse-function result, given in turns, into
/// the requested unit. Falls back to `inexact` when the unit has no
/// rational full turn.
fn angle_result(unit: AngleUnit, turns: Option<Rational>, inexact: f64) -> Result<Rational, MathError> {
  match turns.and_then(|t| unit.from_turns(&t)) {
    Some(exact) => Ok(exact),
    None => Rational::from_inexact(unit.from_radians(inexact)),
  }
}

fn check_unit_interval(x: &Rational) -> Result<f64, MathError> {
  if x.abs() > 1 {
    return Err(MathError::Domain);
  }
  x.to_f64().ok_or(MathError::Domain)
}

pub fn asin(x: &Rational, unit: AngleUnit) -> Result<Rational, MathError> {
  let value = check_unit_interval(x)?;
  let turns = if x.is_zero() {
    Some(Rational::zero())
  } else if x.abs() == Rational::ratio(1, 2) {
    Some(Rational::ratio(x.numer().signum(), 12))
  } else if x.abs().is_one() {
    Some(Rational::ratio(x.numer().signum(), 4))
  } else {
    None
  };
  angle_result(unit, turns, value.asin())
}

pub fn acos(x: &Rational, unit: AngleUnit) -> Result<Rational, MathError> {
  let value = check_unit_interval(x)?;
  // acos x = 1/4 turn - asin x
  let turns = if x.is_one() {
    Some(Rational::zero())
  } else if x.is_zero() {
    Some(Rational::ratio(1, 4))
  } else if x.abs() == Rational::ratio(1, 2) {
    Some(Rational::ratio(1, 4) - Rational::ratio(x.numer().signum(), 12))
  } else if *x == -1 {
    Some(Rational::ratio(1, 2))
  } else {
    None
  };
  angle_result(unit, turns, value.acos())
}

pub fn atan(x: &Rational, unit: AngleUnit) -> Result<Rational, MathError> {
  let value = x.to_f64().ok_or(MathError::Overflow)?;
  let turns = if x.is_zero() {
    Some(Rational::zero())
  } else if x.abs().is_one() {
    Some(Rational::ratio(x.numer().signum(), 8))
  } else {
    None
  };
  angle_result(unit, turns, value.atan())
}

pub fn sinh(x: &Rational) -> Result<Rational, MathError> {
  if x.is_zero() {
    return Ok(Rational::zero());
  }
  Rational::from_inexact(finite_f64(x)?.sinh())
}

pub fn cosh(x: &Rational) -> Result<Rational, MathError> {
  if x.is_zero() {
    return Ok(Rational::one());
  }
  Rational::from_inexact(finite_f64(x)?.cosh())
}

pub fn tanh(x: &Rational) -> Result<Rational, MathError> {
  if x.is_zero() {
    return Ok(Rational::zero());
  }
  let value = x.to_f64().ok_or(MathError::Overflow)?;
  Rational::from_inexact(value.clamp(-1e3, 1e3).tanh())
}

pub fn asinh(x: &Rational) -> Result<Rational, MathError> {
  if x.is_zero() {
    return Ok(Rational::zero());
  }
  match x.to_f64().filter(|value| value.is_finite()) {
    Some(value) => Rational::from_inexact(value.asinh()),
    None => {
      // |x| beyond f64 range, where asinh |x| = ln 2|x| to within
      // rounding.
      let magnitude = ln_positive(&x.abs()) + LN_2;
      Rational::from_inexact(if x.is_negative() { - magnitude } else { magnitude })
    }
  }
}

pub fn acosh(x: &Rational) -> Result<Rational, MathError> {
  if *x < 1 {
    return Err(MathError::Domain);
  }
  if x.is_one() {
    return Ok(Rational::zero());
  }
  match x.to_f64().filter(|value| value.is_finite()) {
    Some(value) => Rational::from_inexact(value.acosh()),
    None => Rational::from_inexact(ln_positive(x) + LN_2),
  }
}

pub fn atanh(x: &Rational) -> Result<Rational, MathError> {
  if x.abs() >= 1 {
    return Err(MathError::Domain);
  }
  if x.is_zero() {
    return Ok(Rational::zero());
  }
  Rational::from_inexact(finite_f64(x)?.atanh())
}

/// Natural logarithm.
pub fn ln(x: &Rational) -> Result<Rational, MathError> {
  if !x.is_positive() {
    return Err(MathError::Domain);
  }
  if x.is_one() {
    return Ok(Rational::zero());
  }
  Rational::from_inexact(ln_positive(x))
}

/// Common (base 10) logarithm. Exact on integral powers of ten.
pub fn log10(x: &Rational) -> Result<Rational, MathError> {
  if !x.is_positive() {
    return Err(MathError::Domain);
  }
  if x.denom().is_one() {
    if let Some(k) = power_of_ten(x.numer()) {
      return Ok(Rational::from(k as i64));
    }
  }
  if x.numer().is_one() {
    if let Some(k) = power_of_ten(x.denom()) {
      return Ok(Rational::from(- (k as i64)));
    }
  }
  Rational::from_inexact(ln_positive(x) / LN_10)
}

/// If `n == 10^k` for some `k`, returns `k`.
fn power_of_ten(n: &BigInt) -> Option<u64> {
  let ten = BigInt::from(10);
  let mut n = n.clone();
  let mut k = 0;
  if !n.is_positive() {
    return None;
  }
  while (&n % &ten).is_zero() {
    n /= &ten;
    k += 1;
  }
  if n.is_one() { Some(k) } else { None }
}

/// `e^x`.
pub fn exp(x: &Rational) -> Result<Rational, MathError> {
  if x.is_zero() {
    return Ok(Rational::one());
  }
  let value = x.to_f64().ok_or(MathError::Overflow)?;
  if value == f64::NEG_INFINITY {
    return Ok(Rational::zero());
  }
  Rational::from_inexact(value.exp())
}

/// `10^x`. Exact for integer `x`.
pub fn pow10(x: &Rational) -> Result<Rational, MathError> {
  pow(&Rational::from(10), x)
}
