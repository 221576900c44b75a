//! Dispatch of the unary scientific functions.

use super::context::EvaluationContext;
use super::dms::dms;
use super::operator::ScientificOp;
use super::rotate::{rotate_left, rotate_right};
use crate::number::{self, Rational, MathError};
use crate::number::transcendental as trans;

use num::BigInt;

/// Applies `op` to `rat` under the settings of `ctx`.
///
/// The only mutation this performs on `ctx` is the inverse toggle
/// done by [`ScientificOp::Degrees`]. Functions which do not apply in
/// the current mode return `rat` unchanged.
pub fn evaluate(
  rat: &Rational,
  op: ScientificOp,
  ctx: &mut EvaluationContext,
) -> Result<Rational, MathError> {
  if op == ScientificOp::Degrees {
    ctx.toggle_inverse();
  }
  if ctx.is_integer_mode() && op.is_real_only() {
    return Ok(rat.clone());
  }
  if !ctx.is_integer_mode() && op.is_integer_only() {
    return Ok(rat.clone());
  }

  let inverse = ctx.is_inverse();
  let unit = ctx.angle_unit;
  match op {
    ScientificOp::Chop => {
      if inverse {
        Ok(rat.fractional_part())
      } else {
        Ok(rat.integer_part())
      }
    }
    ScientificOp::Complement => {
      if ctx.radix.is_decimal() && !ctx.is_integer_mode() {
        Ok(-(rat.integer_part() + Rational::from(1)))
      } else {
        rat.complement_within(ctx.word_width)
      }
    }
    ScientificOp::RotateLeft => rotate_left(rat, ctx.word_width),
    ScientificOp::RotateRight => rotate_right(rat, ctx.word_width),
    ScientificOp::Percent => percent(rat, ctx),
    ScientificOp::Sin => if inverse { trans::asin(rat, unit) } else { trans::sin(rat, unit) },
    ScientificOp::Cos => if inverse { trans::acos(rat, unit) } else { trans::cos(rat, unit) },
    ScientificOp::Tan => if inverse { trans::atan(rat, unit) } else { trans::tan(rat, unit) },
    ScientificOp::Sinh => if inverse { trans::asinh(rat) } else { trans::sinh(rat) },
    ScientificOp::Cosh => if inverse { trans::acosh(rat) } else { trans::cosh(rat) },
    ScientificOp::Tanh => if inverse { trans::atanh(rat) } else { trans::tanh(rat) },
    ScientificOp::Reciprocal => rat.invert(),
    ScientificOp::Square => number::powi(rat, &BigInt::from(2)),
    ScientificOp::Cube => number::powi(rat, &BigInt::from(3)),
    ScientificOp::SquareRoot => number::root(rat, 2),
    ScientificOp::CubeRoot => number::root(rat, 3),
    ScientificOp::Log => trans::log10(rat),
    ScientificOp::PowerOfTen => trans::pow10(rat),
    ScientificOp::Ln => if inverse { trans::exp(rat) } else { trans::ln(rat) },
    ScientificOp::Factorial => number::factorial(rat),
    ScientificOp::Degrees | ScientificOp::Dms => Ok(dms(rat, inverse)),
  }
}

// Under multiplication and division, "x op y%" means "x op (y/100)".
// Otherwise it means "x op (x * y/100)".
fn percent(rat: &Rational, ctx: &EvaluationContext) -> Result<Rational, MathError> {
  let hundred = Rational::from(100);
  match ctx.pending_operator {
    Some(op) if op.is_multiplicative() => rat.checked_div(&hundred),
    _ => Ok(rat * &ctx.last_operand.checked_div(&hundred)?),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::engine::operator::BinaryOp;
  use crate::number::WordWidth;
  use crate::util::angles::AngleUnit;
  use crate::util::radix::Radix;

  use approx::assert_abs_diff_eq;

  use std::str::FromStr;

  fn dec(s: &str) -> Rational {
    Rational::from_str(s).unwrap()
  }

  fn eval(rat: &Rational, op: ScientificOp, mut ctx: EvaluationContext) -> Result<Rational, MathError> {
    evaluate(rat, op, &mut ctx)
  }

  fn integer_ctx(width: WordWidth) -> EvaluationContext {
    EvaluationContext::new()
      .with_integer_mode(true)
      .with_radix(Radix::HEXADECIMAL)
      .with_word_width(width)
  }

  #[test]
  fn test_chop() {
    let ctx = EvaluationContext::new();
    assert_eq!(eval(&dec("12.75"), ScientificOp::Chop, ctx.clone()), Ok(Rational::from(12)));
    assert_eq!(eval(&dec("12.75"), ScientificOp::Chop, ctx.with_inverse(true)), Ok(dec("0.75")));
    let ctx = EvaluationContext::new();
    assert_eq!(eval(&dec("-12.75"), ScientificOp::Chop, ctx.clone()), Ok(Rational::from(-12)));
    assert_eq!(eval(&dec("-12.75"), ScientificOp::Chop, ctx.with_inverse(true)), Ok(dec("-0.75")));
  }

  #[test]
  fn test_decimal_complement() {
    let ctx = EvaluationContext::new();
    assert_eq!(eval(&Rational::from(5), ScientificOp::Complement, ctx.clone()), Ok(Rational::from(-6)));
    assert_eq!(eval(&dec("5.5"), ScientificOp::Complement, ctx.clone()), Ok(Rational::from(-6)));
    assert_eq!(eval(&Rational::from(-6), ScientificOp::Complement, ctx.clone()), Ok(Rational::from(5)));
    assert_eq!(eval(&Rational::from(0), ScientificOp::Complement, ctx), Ok(Rational::from(-1)));
  }

  #[test]
  fn test_integer_complement_is_self_inverse() {
    for width in WordWidth::ALL {
      for value in [0u64, 1, 0x7F, 0xAA, 0x1234, 0xFFFF_FFFF, u64::MAX] {
        let x = Rational::from(value & width.mask());
        let once = eval(&x, ScientificOp::Complement, integer_ctx(width)).unwrap();
        assert_eq!(once.to_fixed_width(width), Ok(!(value & width.mask()) & width.mask()));
        let twice = eval(&once, ScientificOp::Complement, integer_ctx(width)).unwrap();
        assert_eq!(twice, x);
      }
    }
  }

  #[test]
  fn test_non_decimal_radix_complement() {
    let ctx = EvaluationContext::new().with_radix(Radix::BINARY).with_word_width(WordWidth::Byte);
    assert_eq!(eval(&Rational::from(0b0000_1111), ScientificOp::Complement, ctx), Ok(Rational::from(0b1111_0000)));
  }

  #[test]
  fn test_rotations() {
    let x = Rational::from(0b1000_0001);
    assert_eq!(eval(&x, ScientificOp::RotateLeft, integer_ctx(WordWidth::Byte)), Ok(Rational::from(0b11)));
    assert_eq!(eval(&x, ScientificOp::RotateRight, integer_ctx(WordWidth::Byte)), Ok(Rational::from(0b1100_0000)));
  }

  #[test]
  fn test_rotations_ignored_outside_integer_mode() {
    let x = Rational::from(0b1000_0001);
    assert_eq!(eval(&x, ScientificOp::RotateLeft, EvaluationContext::new()), Ok(x.clone()));
    assert_eq!(eval(&x, ScientificOp::RotateRight, EvaluationContext::new()), Ok(x));
  }

  #[test]
  fn test_percent_under_multiply() {
    let ctx = EvaluationContext::new().with_pending(BinaryOp::Multiply, Rational::from(200));
    assert_eq!(eval(&Rational::from(50), ScientificOp::Percent, ctx), Ok(dec("0.5")));
    let ctx = EvaluationContext::new().with_pending(BinaryOp::Divide, Rational::from(200));
    assert_eq!(eval(&Rational::from(25), ScientificOp::Percent, ctx), Ok(dec("0.25")));
  }

  #[test]
  fn test_percent_under_add() {
    let ctx = EvaluationContext::new().with_pending(BinaryOp::Add, Rational::from(200));
    assert_eq!(eval(&Rational::from(50), ScientificOp::Percent, ctx), Ok(Rational::from(100)));
    let ctx = EvaluationContext::new().with_pending(BinaryOp::Subtract, Rational::from(80));
    assert_eq!(eval(&Rational::from(25), ScientificOp::Percent, ctx), Ok(Rational::from(20)));
  }

  #[test]
  fn test_percent_without_pending_operator() {
    assert_eq!(eval(&Rational::from(50), ScientificOp::Percent, EvaluationContext::new()), Ok(Rational::from(0)));
  }

  #[test]
  fn test_trig_exact_in_degrees() {
    let ctx = EvaluationContext::new();
    assert_eq!(eval(&Rational::from(30), ScientificOp::Sin, ctx.clone()), Ok(dec("0.5")));
    assert_eq!(eval(&Rational::from(60), ScientificOp::Cos, ctx.clone()), Ok(dec("0.5")));
    assert_eq!(eval(&Rational::from(45), ScientificOp::Tan, ctx.clone()), Ok(Rational::from(1)));
    assert_eq!(eval(&dec("0.5"), ScientificOp::Sin, ctx.with_inverse(true)), Ok(Rational::from(30)));
  }

  #[test]
  fn test_trig_in_radians() {
    let ctx = EvaluationContext::new().with_angle_unit(AngleUnit::Radians);
    let result = eval(&Rational::from(1), ScientificOp::Sin, ctx.clone()).unwrap();
    assert_abs_diff_eq!(result.to_f64().unwrap(), 1f64.sin(), epsilon = 1e-14);
    let result = eval(&Rational::from(1), ScientificOp::Tan, ctx.with_inverse(true)).unwrap();
    assert_abs_diff_eq!(result.to_f64().unwrap(), std::f64::consts::FRAC_PI_4, epsilon = 1e-14);
  }

  #[test]
  fn test_tan_at_right_angle() {
    assert_eq!(eval(&Rational::from(90), ScientificOp::Tan, EvaluationContext::new()), Err(MathError::Domain));
  }

  #[test]
  fn test_hyperbolic() {
    let ctx = EvaluationContext::new();
    assert_eq!(eval(&Rational::from(0), ScientificOp::Sinh, ctx.clone()), Ok(Rational::from(0)));
    assert_eq!(eval(&Rational::from(0), ScientificOp::Cosh, ctx.clone()), Ok(Rational::from(1)));
    let result = eval(&Rational::from(1), ScientificOp::Tanh, ctx.clone()).unwrap();
    assert_abs_diff_eq!(result.to_f64().unwrap(), 1f64.tanh(), epsilon = 1e-14);
    assert_eq!(eval(&Rational::from(0), ScientificOp::Cosh, ctx.with_inverse(true)), Err(MathError::Domain));
  }

  #[test]
  fn test_integer_mode_ignores_real_functions() {
    for op in [ScientificOp::Sin, ScientificOp::Cosh, ScientificOp::Tan, ScientificOp::Dms] {
      let x = Rational::from(30);
      assert_eq!(eval(&x, op, integer_ctx(WordWidth::QWord)), Ok(x.clone()), "{}", op);
    }
  }

  #[test]
  fn test_powers_and_roots() {
    let ctx = EvaluationContext::new();
    assert_eq!(eval(&Rational::from(9), ScientificOp::SquareRoot, ctx.clone()), Ok(Rational::from(3)));
    assert_eq!(eval(&Rational::from(-27), ScientificOp::CubeRoot, ctx.clone()), Ok(Rational::from(-3)));
    assert_eq!(eval(&Rational::ratio(2, 3), ScientificOp::Square, ctx.clone()), Ok(Rational::ratio(4, 9)));
    assert_eq!(eval(&Rational::from(-2), ScientificOp::Cube, ctx.clone()), Ok(Rational::from(-8)));
    assert_eq!(eval(&Rational::from(4), ScientificOp::Reciprocal, ctx.clone()), Ok(dec("0.25")));
    assert_eq!(eval(&Rational::from(-1), ScientificOp::SquareRoot, ctx), Err(MathError::Domain));
  }

  #[test]
  fn test_logarithms() {
    let ctx = EvaluationContext::new();
    assert_eq!(eval(&Rational::from(1000), ScientificOp::Log, ctx.clone()), Ok(Rational::from(3)));
    assert_eq!(eval(&Rational::from(-2), ScientificOp::PowerOfTen, ctx.clone()), Ok(dec("0.01")));
    assert_eq!(eval(&Rational::from(1), ScientificOp::Ln, ctx.clone()), Ok(Rational::from(0)));
    assert_eq!(eval(&Rational::from(0), ScientificOp::Ln, ctx.clone().with_inverse(true)), Ok(Rational::from(1)));
    assert_eq!(eval(&Rational::from(0), ScientificOp::Ln, ctx), Err(MathError::Domain));
  }

  #[test]
  fn test_factorial_ignores_inverse() {
    let ctx = EvaluationContext::new();
    assert_eq!(eval(&Rational::from(5), ScientificOp::Factorial, ctx.clone()), Ok(Rational::from(120)));
    assert_eq!(eval(&Rational::from(5), ScientificOp::Factorial, ctx.with_inverse(true)), Ok(Rational::from(120)));
  }

  #[test]
  fn test_dms() {
    let ctx = EvaluationContext::new();
    assert_eq!(eval(&dec("30.5"), ScientificOp::Dms, ctx.clone()), Ok(dec("30.3")));
    let expected = Rational::from(30) + Rational::ratio(30, 60) + Rational::ratio(25, 3600);
    assert_eq!(eval(&dec("30.3025"), ScientificOp::Dms, ctx.with_inverse(true)), Ok(expected));
  }

  #[test]
  fn test_degrees_toggles_inverse() {
    let mut ctx = EvaluationContext::new();
    // Inverse off, so Degrees unpacks D.MMSS.
    assert_eq!(evaluate(&dec("30.3"), ScientificOp::Degrees, &mut ctx), Ok(dec("30.5")));
    assert!(ctx.is_inverse());
    assert_eq!(evaluate(&dec("30.5"), ScientificOp::Degrees, &mut ctx), Ok(dec("30.3")));
    assert!(!ctx.is_inverse());
  }

  #[test]
  fn test_degrees_toggles_inverse_in_integer_mode() {
    let mut ctx = integer_ctx(WordWidth::QWord);
    assert_eq!(evaluate(&Rational::from(30), ScientificOp::Degrees, &mut ctx), Ok(Rational::from(30)));
    assert!(ctx.is_inverse());
  }

  #[test]
  fn test_only_degrees_mutates_context() {
    for op in ScientificOp::ALL {
      if op == ScientificOp::Degrees {
        continue;
      }
      let before = EvaluationContext::new().with_pending(BinaryOp::Add, Rational::from(3));
      let mut ctx = before.clone();
      let _ = evaluate(&Rational::from(2), op, &mut ctx);
      assert_eq!(ctx, before, "{}", op);
    }
  }
}
