//! The calculator engine: evaluation context, scientific functions,
//! and the boundary which turns arithmetic failures into displayed
//! errors.

pub mod context;
pub mod dms;
pub mod operator;
pub mod rotate;
pub mod scientific;

pub use context::EvaluationContext;
pub use operator::{ScientificOp, BinaryOp, ParseOperatorError};

use crate::display::CalcDisplay;
use crate::history::HistoryCollector;
use crate::number::{Rational, MathError, WordWidth};
use crate::resources::{ResourceProvider, EnglishResources, IDS_ERRORS_FIRST};
use crate::util::angles::AngleUnit;
use crate::util::radix::Radix;

use log::{debug, warn};

/// A calculator session. The engine exclusively owns its evaluation
/// context and talks to the outside world through a primary display,
/// a string resource table, and a history collector.
#[derive(Debug)]
pub struct CalcEngine<D, R = EnglishResources> {
  context: EvaluationContext,
  display: D,
  resources: R,
  history: HistoryCollector,
}

impl<D: CalcDisplay> CalcEngine<D, EnglishResources> {
  /// A new engine with default settings and the built-in English
  /// strings.
  pub fn new(display: D) -> Self {
    Self::with_resources(display, EnglishResources)
  }
}

impl<D: CalcDisplay, R: ResourceProvider> CalcEngine<D, R> {
  pub fn with_resources(display: D, resources: R) -> Self {
    CalcEngine {
      context: EvaluationContext::default(),
      display,
      resources,
      history: HistoryCollector::new(),
    }
  }

  /// Replaces the evaluation context wholesale, e.g. when restoring a
  /// saved session.
  pub fn with_context(mut self, context: EvaluationContext) -> Self {
    self.context = context;
    self
  }

  /// Applies the scientific function `op` to `rat`.
  ///
  /// This never fails. If the arithmetic fails, the error is shown on
  /// the primary display (see [`CalcEngine::display_error`]) and `rat`
  /// itself is returned.
  pub fn sci_calc_functions(&mut self, rat: &Rational, op: ScientificOp) -> Rational {
    let was_inverse = self.context.is_inverse();
    let result = scientific::evaluate(rat, op, &mut self.context);
    if self.context.is_inverse() != was_inverse {
      self.display.set_inverse_indicator(self.context.is_inverse());
    }
    match result {
      Ok(value) => {
        debug!("{}({}) = {}", op, rat, value);
        value
      }
      Err(err) => {
        debug!("{}({}) failed: {}", op, rat, err);
        self.display_error(err);
        rat.clone()
      }
    }
  }

  /// Shows the message for `err` on the primary display, raises the
  /// error flag, and abandons the history line in progress.
  pub fn display_error(&mut self, err: MathError) {
    let code = err.code();
    let text = self.resources.get_string(IDS_ERRORS_FIRST + code).unwrap_or_else(|| {
      warn!("No string resource for error code {}", code);
      format!("Error {}", code)
    });
    warn!("Displaying error {}: {}", code, text);
    self.display.set_primary_display(&text, true);
    self.context.set_error(true);
    self.history.clear_history_line(&text);
  }

  pub fn toggle_inverse(&mut self) {
    self.context.toggle_inverse();
    self.display.set_inverse_indicator(self.context.is_inverse());
  }

  pub fn set_integer_mode(&mut self, integer_mode: bool) {
    self.context.mode.set_integer_flag(integer_mode);
  }

  pub fn set_angle_unit(&mut self, angle_unit: AngleUnit) {
    self.context.angle_unit = angle_unit;
  }

  pub fn set_radix(&mut self, radix: Radix) {
    self.context.radix = radix;
  }

  pub fn set_word_width(&mut self, word_width: WordWidth) {
    self.context.word_width = word_width;
  }

  pub fn set_pending_operator(&mut self, operator: Option<BinaryOp>) {
    self.context.pending_operator = operator;
  }

  pub fn set_last_operand(&mut self, last_operand: Rational) {
    self.context.last_operand = last_operand;
  }

  /// Lowers the error flag. The primary display is left alone.
  pub fn clear_error(&mut self) {
    self.context.set_error(false);
  }

  pub fn context(&self) -> &EvaluationContext {
    &self.context
  }

  pub fn has_error(&self) -> bool {
    self.context.has_error()
  }

  pub fn display(&self) -> &D {
    &self.display
  }

  pub fn display_mut(&mut self) -> &mut D {
    &mut self.display
  }

  pub fn history(&self) -> &HistoryCollector {
    &self.history
  }

  pub fn history_mut(&mut self) -> &mut HistoryCollector {
    &mut self.history
  }

  pub fn into_display(self) -> D {
    self.display
  }
}

#[cfg(test)]
pub(crate) mod test_utils {
  use super::*;
  use crate::display::DisplayLog;

  /// A fresh engine which records everything it displays.
  pub fn logging_engine() -> CalcEngine<DisplayLog> {
    CalcEngine::new(DisplayLog::new())
  }

  /// Resources with no strings at all.
  pub struct NoResources;

  impl ResourceProvider for NoResources {
    fn get_string(&self, _id: u32) -> Option<String> {
      None
    }
  }
}
