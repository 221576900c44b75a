use super::error::MathError;

use num::{BigInt, BigRational, Zero, One, Signed};
use num::traits::ToPrimitive;
use thiserror::Error;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Deserialize};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::ops;
use std::cmp::Ordering;

/// Number of significant decimal digits kept when an inexact
/// (floating-point) intermediate is converted back into a
/// [`Rational`]. This is the precision ceiling of every
/// transcendental function in this crate.
pub const INEXACT_DIGITS: u32 = 15;

/// Largest decimal exponent accepted by [`Rational::from_str`].
pub const MAX_PARSE_EXPONENT: i64 = 10_000;

/// An exact rational number of arbitrary precision.
///
/// `Rational` is an immutable value type: every operation produces a
/// fresh value. Values are always stored in lowest terms with a
/// positive denominator.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rational {
  inner: BigRational,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to parse rational number")]
#[non_exhaustive]
pub struct ParseRationalError {}

impl Rational {
  /// Produces the rational number `numer / denom`, in lowest terms.
  ///
  /// Panics if `denom == 0`.
  pub fn ratio(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Rational {
    Rational::from(BigRational::new(numer.into(), denom.into()))
  }

  pub fn numer(&self) -> &BigInt {
    self.inner.numer()
  }

  pub fn denom(&self) -> &BigInt {
    self.inner.denom()
  }

  pub fn is_integer(&self) -> bool {
    self.inner.is_integer()
  }

  pub fn as_big_rational(&self) -> &BigRational {
    &self.inner
  }

  pub fn into_big_rational(self) -> BigRational {
    self.inner
  }

  /// The integer part of `self`, truncated toward zero.
  pub fn integer_part(&self) -> Rational {
    Rational::from(self.inner.trunc())
  }

  /// `self - self.integer_part()`. Has the same sign as `self`.
  pub fn fractional_part(&self) -> Rational {
    Rational::from(self.inner.fract())
  }

  /// Largest integer less than or equal to `self`.
  pub fn floor(&self) -> Rational {
    Rational::from(self.inner.floor())
  }

  /// Integer part as a `BigInt`, truncated toward zero.
  pub fn to_integer(&self) -> BigInt {
    self.inner.to_integer()
  }

  pub fn abs(&self) -> Rational {
    Rational::from(self.inner.abs())
  }

  pub fn is_negative(&self) -> bool {
    self.inner.is_negative()
  }

  pub fn is_positive(&self) -> bool {
    self.inner.is_positive()
  }

  /// Division that reports a zero divisor instead of panicking.
  pub fn checked_div(&self, other: &Rational) -> Result<Rational, MathError> {
    if other.is_zero() {
      return Err(MathError::DivideByZero);
    }
    Ok(Rational::from(&self.inner / &other.inner))
  }

  /// `1 / self`.
  pub fn invert(&self) -> Result<Rational, MathError> {
    if self.is_zero() {
      return Err(MathError::DivideByZero);
    }
    Ok(Rational::from(self.inner.recip()))
  }

  /// Converts `self` to an `f64` on a best-effort basis. Values too
  /// large for `f64` come back as an infinity.
  pub fn to_f64(&self) -> Option<f64> {
    self.inner.to_f64()
  }

  /// Converts an inexact floating-point result into an exact
  /// rational, keeping [`INEXACT_DIGITS`] significant decimal
  /// digits. The rounding happens in decimal, so an intermediate
  /// such as `0.49999999999999994` reads back as exactly `1/2`.
  ///
  /// NaN is a domain error and infinities are overflows.
  pub fn from_inexact(value: f64) -> Result<Rational, MathError> {
    Rational::from_f64_digits(value, INEXACT_DIGITS)
  }

  /// As [`Rational::from_inexact`], with an explicit number of
  /// significant digits (at least one).
  pub fn from_f64_digits(value: f64, digits: u32) -> Result<Rational, MathError> {
    if value.is_nan() {
      return Err(MathError::Domain);
    }
    if value.is_infinite() {
      return Err(MathError::Overflow);
    }
    if value == 0.0 {
      return Ok(Rational::zero());
    }
    let precision = digits.max(1) as usize - 1;
    let text = format!("{:.*e}", precision, value);
    // The scientific formatter always produces something
    // parse_decimal understands.
    parse_decimal(&text).ok_or(MathError::NoResult)
  }
}

/// Constructs an integer rational from an `i32`.
impl From<i32> for Rational {
  fn from(i: i32) -> Rational {
    Rational::from(BigInt::from(i))
  }
}

/// Constructs an integer rational from an `i64`.
impl From<i64> for Rational {
  fn from(i: i64) -> Rational {
    Rational::from(BigInt::from(i))
  }
}

/// Constructs an integer rational from a fixed-width unsigned value.
/// This conversion is exact for every `u64`.
impl From<u64> for Rational {
  fn from(i: u64) -> Rational {
    Rational::from(BigInt::from(i))
  }
}

impl From<BigInt> for Rational {
  fn from(i: BigInt) -> Rational {
    Rational { inner: BigRational::from_integer(i) }
  }
}

impl From<BigRational> for Rational {
  fn from(r: BigRational) -> Rational {
    Rational { inner: r }
  }
}

impl From<Rational> for BigRational {
  fn from(r: Rational) -> BigRational {
    r.inner
  }
}

impl Default for Rational {
  fn default() -> Rational {
    Rational::zero()
  }
}

impl Display for Rational {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    if self.is_integer() {
      write!(f, "{}", self.numer())
    } else {
      write!(f, "{}:{}", self.numer(), self.denom())
    }
  }
}

impl AbsDiffEq for Rational {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    <f64 as AbsDiffEq>::default_epsilon()
  }

  fn abs_diff_eq(&self, other: &Rational, epsilon: f64) -> bool {
    let left = self.to_f64().unwrap_or(f64::NAN);
    let right = other.to_f64().unwrap_or(f64::NAN);
    left.abs_diff_eq(&right, epsilon)
  }
}

impl RelativeEq for Rational {
  fn default_max_relative() -> f64 {
    <f64 as RelativeEq>::default_max_relative()
  }

  fn relative_eq(&self, other: &Rational, epsilon: f64, max_relative: f64) -> bool {
    let left = self.to_f64().unwrap_or(f64::NAN);
    let right = other.to_f64().unwrap_or(f64::NAN);
    left.relative_eq(&right, epsilon, max_relative)
  }
}

impl UlpsEq for Rational {
  fn default_max_ulps() -> u32 {
    <f64 as UlpsEq>::default_max_ulps()
  }

  fn ulps_eq(&self, other: &Rational, epsilon: f64, max_ulps: u32) -> bool {
    let left = self.to_f64().unwrap_or(f64::NAN);
    let right = other.to_f64().unwrap_or(f64::NAN);
    left.ulps_eq(&right, epsilon, max_ulps)
  }
}

impl ops::Add for Rational {
  type Output = Rational;

  fn add(self, other: Rational) -> Rational {
    Rational::from(self.inner + other.inner)
  }
}

impl ops::Add for &Rational {
  type Output = Rational;

  fn add(self, other: &Rational) -> Rational {
    Rational::from(&self.inner + &other.inner)
  }
}

impl ops::Sub for Rational {
  type Output = Rational;

  fn sub(self, other: Rational) -> Rational {
    Rational::from(self.inner - other.inner)
  }
}

impl ops::Sub for &Rational {
  type Output = Rational;

  fn sub(self, other: &Rational) -> Rational {
    Rational::from(&self.inner - &other.inner)
  }
}

impl ops::Mul for Rational {
  type Output = Rational;

  fn mul(self, other: Rational) -> Rational {
    Rational::from(self.inner * other.inner)
  }
}

impl ops::Mul for &Rational {
  type Output = Rational;

  fn mul(self, other: &Rational) -> Rational {
    Rational::from(&self.inner * &other.inner)
  }
}

/// Exact division. Panics if `other` is zero; fallible callers
/// should use [`Rational::checked_div`].
impl ops::Div for Rational {
  type Output = Rational;

  fn div(self, other: Rational) -> Rational {
    Rational::from(self.inner / other.inner)
  }
}

impl ops::Div for &Rational {
  type Output = Rational;

  fn div(self, other: &Rational) -> Rational {
    Rational::from(&self.inner / &other.inner)
  }
}

impl ops::Neg for Rational {
  type Output = Rational;

  fn neg(self) -> Rational {
    Rational::from(- self.inner)
  }
}

impl ops::Neg for &Rational {
  type Output = Rational;

  fn neg(self) -> Rational {
    Rational::from(- &self.inner)
  }
}

impl ops::Add<&Rational> for Rational {
  type Output = Rational;

  fn add(self, other: &Rational) -> Rational {
    Rational::from(self.inner + &other.inner)
  }
}

impl ops::Sub<&Rational> for Rational {
  type Output = Rational;

  fn sub(self, other: &Rational) -> Rational {
    Rational::from(self.inner - &other.inner)
  }
}

impl ops::Mul<&Rational> for Rational {
  type Output = Rational;

  fn mul(self, other: &Rational) -> Rational {
    Rational::from(self.inner * &other.inner)
  }
}

impl ops::Div<&Rational> for Rational {
  type Output = Rational;

  fn div(self, other: &Rational) -> Rational {
    Rational::from(self.inner / &other.inner)
  }
}

impl Zero for Rational {
  fn zero() -> Rational {
    Rational::from(BigRational::zero())
  }
  fn is_zero(&self) -> bool {
    self.inner.is_zero()
  }
}

impl One for Rational {
  fn one() -> Rational {
    Rational::from(BigRational::one())
  }
  fn is_one(&self) -> bool {
    self.inner.is_one()
  }
}

impl PartialEq<i64> for Rational {
  fn eq(&self, other: &i64) -> bool {
    self.is_integer() && self.numer() == &BigInt::from(*other)
  }
}

impl PartialOrd<i64> for Rational {
  fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
    Some(self.inner.cmp(&BigRational::from_integer(BigInt::from(*other))))
  }
}

impl FromStr for Rational {
  type Err = ParseRationalError;

  fn from_str(s: &str) -> Result<Rational, ParseRationalError> {
    parse_ratio(s).or_else(|| {
      parse_decimal(s)
    }).ok_or(ParseRationalError {})
  }
}

fn parse_ratio(s: &str) -> Option<Rational> {
  static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([+-]?\d+):([+-]?\d+)$").unwrap());
  let caps = RE.captures(s)?;
  // The regex guarantees both groups are well-formed integers.
  let numerator = BigInt::from_str(caps.get(1).unwrap().as_str()).unwrap();
  let denominator = BigInt::from_str(caps.get(2).unwrap().as_str()).unwrap();
  if denominator.is_zero() {
    return None;
  }
  Some(Rational::ratio(numerator, denominator))
}

/// Parses integers, decimals and scientific notation exactly.
fn parse_decimal(s: &str) -> Option<Rational> {
  static RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([+-]?)(\d*)(?:\.(\d*))?(?:[eE]([+-]?\d+))?$").unwrap());
  let caps = RE.captures(s)?;
  let negative = caps.get(1).map_or(false, |m| m.as_str() == "-");
  let whole = caps.get(2).map_or("", |m| m.as_str());
  let fraction = caps.get(3).map_or("", |m| m.as_str());
  if whole.is_empty() && fraction.is_empty() {
    return None;
  }
  let exponent = match caps.get(4) {
    None => 0,
    Some(m) => i64::from_str(m.as_str()).ok()?,
  };
  if exponent.abs() > MAX_PARSE_EXPONENT {
    return None;
  }

  let digits = BigInt::from_str(&format!("{}{}", whole, fraction)).ok()?;
  let digits = if negative { - digits } else { digits };
  let scale = exponent - fraction.len() as i64;
  let ten = BigInt::from(10);
  let value = if scale >= 0 {
    BigRational::from_integer(digits * ten.pow(scale as u32))
  } else {
    BigRational::new(digits, ten.pow((- scale) as u32))
  };
  Some(Rational::from(value))
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_abs_diff_eq;

  fn rat(s: &str) -> Rational {
    Rational::from_str(s).unwrap()
  }

  #[test]
  fn test_parse_integer() {
    assert_eq!(rat("7"), Rational::from(7));
    assert_eq!(rat("-99"), Rational::from(-99));
    assert_eq!(
      rat("888888888888888888888888888888888"),
      Rational::from(BigInt::from_str("888888888888888888888888888888888").unwrap()),
    );
  }

  #[test]
  fn test_parse_ratio() {
    assert_eq!(rat("1:2"), Rational::ratio(1, 2));
    assert_eq!(rat("-7:9"), Rational::ratio(-7, 9));
    assert_eq!(rat("7:-9"), Rational::ratio(-7, 9));
    assert_eq!(Rational::from_str("1:0"), Err(ParseRationalError {}));
  }

  #[test]
  fn test_parse_decimal_is_exact() {
    assert_eq!(rat("30.5025"), Rational::ratio(305025, 10000));
    assert_eq!(rat("-0.25"), Rational::ratio(-1, 4));
    assert_eq!(rat(".5"), Rational::ratio(1, 2));
    assert_eq!(rat("3."), Rational::from(3));
    assert_eq!(rat("1.5e-3"), Rational::ratio(3, 2000));
    assert_eq!(rat("2E3"), Rational::from(2000));
  }

  #[test]
  fn test_parse_failures() {
    assert!(Rational::from_str("").is_err());
    assert!(Rational::from_str(".").is_err());
    assert!(Rational::from_str("abc").is_err());
    assert!(Rational::from_str("1.2.3").is_err());
    assert!(Rational::from_str("1e999999").is_err());
  }

  #[test]
  fn test_display() {
    assert_eq!(Rational::from(-12).to_string(), "-12");
    assert_eq!(Rational::ratio(6, 4).to_string(), "3:2");
    assert_eq!(Rational::ratio(1, -3).to_string(), "-1:3");
  }

  #[test]
  fn test_display_roundtrip() {
    for value in [Rational::from(0), Rational::ratio(-100, 3), Rational::ratio(38324, 288)] {
      assert_eq!(rat(&value.to_string()), value);
    }
  }

  #[test]
  fn test_integer_and_fractional_parts() {
    assert_eq!(rat("7.25").integer_part(), Rational::from(7));
    assert_eq!(rat("7.25").fractional_part(), Rational::ratio(1, 4));
    assert_eq!(rat("-7.25").integer_part(), Rational::from(-7));
    assert_eq!(rat("-7.25").fractional_part(), Rational::ratio(-1, 4));
    assert_eq!(rat("-7.25").floor(), Rational::from(-8));
  }

  #[test]
  fn test_arithmetic() {
    assert_eq!(Rational::from(3) + Rational::ratio(1, 2), Rational::ratio(7, 2));
    assert_eq!(&Rational::ratio(1, 3) - &Rational::ratio(2, 3), Rational::ratio(-1, 3));
    assert_eq!(Rational::ratio(1, 3) * Rational::ratio(2, 3), Rational::ratio(2, 9));
    assert_eq!(Rational::from(3) / Rational::from(2), Rational::ratio(3, 2));
    assert_eq!(- Rational::ratio(-1, 2), Rational::ratio(1, 2));
  }

  #[test]
  fn test_checked_div() {
    assert_eq!(Rational::from(1).checked_div(&Rational::from(4)), Ok(Rational::ratio(1, 4)));
    assert_eq!(Rational::from(1).checked_div(&Rational::zero()), Err(MathError::DivideByZero));
    assert_eq!(Rational::zero().invert(), Err(MathError::DivideByZero));
    assert_eq!(Rational::ratio(-2, 3).invert(), Ok(Rational::ratio(-3, 2)));
  }

  #[test]
  fn test_from_inexact_rounds_in_decimal() {
    assert_eq!(Rational::from_inexact(0.49999999999999994), Ok(Rational::ratio(1, 2)));
    assert_eq!(Rational::from_inexact(0.1), Ok(Rational::ratio(1, 10)));
    assert_eq!(Rational::from_inexact(-2.0), Ok(Rational::from(-2)));
    assert_eq!(Rational::from_inexact(0.0), Ok(Rational::zero()));
    assert_eq!(Rational::from_f64_digits(3.14159, 3), Ok(Rational::ratio(314, 100)));
  }

  #[test]
  fn test_from_inexact_non_finite() {
    assert_eq!(Rational::from_inexact(f64::NAN), Err(MathError::Domain));
    assert_eq!(Rational::from_inexact(f64::INFINITY), Err(MathError::Overflow));
    assert_eq!(Rational::from_inexact(f64::NEG_INFINITY), Err(MathError::Overflow));
  }

  #[test]
  fn test_compare_with_i64() {
    assert!(Rational::ratio(3, 2) > 1);
    assert!(Rational::ratio(-3, 2) < -1);
    assert_eq!(Rational::from(5), 5);
    assert_ne!(Rational::ratio(1, 2), 0);
  }

  #[test]
  fn test_to_f64() {
    assert_abs_diff_eq!(Rational::ratio(1, 3).to_f64().unwrap(), 0.333333333333, epsilon = 1e-9);
  }
}
