use super::operator::BinaryOp;
use crate::mode::CalculationMode;
use crate::number::{Rational, WordWidth};
use crate::util::angles::AngleUnit;
use crate::util::radix::Radix;

use serde::{Serialize, Deserialize};

/// The calculator state a scientific function consults (and, for the
/// inverse and error flags, mutates) while evaluating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationContext {
  pub angle_unit: AngleUnit,
  pub mode: CalculationMode,
  pub radix: Radix,
  pub word_width: WordWidth,
  /// The binary operator currently awaiting its right operand, if
  /// any.
  pub pending_operator: Option<BinaryOp>,
  /// The left operand of the pending binary operator.
  pub last_operand: Rational,
}

impl EvaluationContext {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_angle_unit(mut self, angle_unit: AngleUnit) -> Self {
    self.angle_unit = angle_unit;
    self
  }

  pub fn with_radix(mut self, radix: Radix) -> Self {
    self.radix = radix;
    self
  }

  pub fn with_word_width(mut self, word_width: WordWidth) -> Self {
    self.word_width = word_width;
    self
  }

  pub fn with_integer_mode(mut self, integer_mode: bool) -> Self {
    self.mode.set_integer_flag(integer_mode);
    self
  }

  pub fn with_inverse(mut self, inverse: bool) -> Self {
    self.mode.set_inverse_flag(inverse);
    self
  }

  /// Sets the pending binary operator together with its left operand.
  pub fn with_pending(mut self, operator: BinaryOp, last_operand: Rational) -> Self {
    self.pending_operator = Some(operator);
    self.last_operand = last_operand;
    self
  }

  pub fn is_inverse(&self) -> bool {
    self.mode.has_inverse_flag()
  }

  pub fn toggle_inverse(&mut self) {
    self.mode.toggle_inverse_flag();
  }

  pub fn is_integer_mode(&self) -> bool {
    self.mode.has_integer_flag()
  }

  pub fn has_error(&self) -> bool {
    self.mode.has_error_flag()
  }

  pub fn set_error(&mut self, error: bool) {
    self.mode.set_error_flag(error);
  }
}
