//! The primary display sink the engine writes results and errors to.

use crate::events::{SetPrimaryDisplayPayload, InverseIndicatorPayload};

/// A primary display, as seen by the engine.
pub trait CalcDisplay {
  /// Replaces the text of the primary display. `is_error` is true if
  /// the text is an error message rather than a number.
  fn set_primary_display(&mut self, text: &str, is_error: bool);

  /// Updates the "Inverse" indicator. Displays without such an
  /// indicator can ignore this.
  fn set_inverse_indicator(&mut self, _is_inverse: bool) {}
}

/// One call made against a [`DisplayLog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
  PrimaryDisplay(SetPrimaryDisplayPayload),
  InverseIndicator(InverseIndicatorPayload),
}

/// A display which keeps every call made against it, in order. The
/// recorded events are the serializable payloads a host frontend
/// would receive.
#[derive(Debug, Clone, Default)]
pub struct DisplayLog {
  events: Vec<DisplayEvent>,
}

impl DisplayEvent {
  pub fn event_name(&self) -> &'static str {
    match self {
      DisplayEvent::PrimaryDisplay(_) => SetPrimaryDisplayPayload::EVENT_NAME,
      DisplayEvent::InverseIndicator(_) => InverseIndicatorPayload::EVENT_NAME,
    }
  }
}

impl DisplayLog {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn events(&self) -> &[DisplayEvent] {
    &self.events
  }

  pub fn clear(&mut self) {
    self.events.clear();
  }

  /// The most recent primary display payload, if any.
  pub fn primary(&self) -> Option<&SetPrimaryDisplayPayload> {
    self.events.iter().rev().find_map(|event| match event {
      DisplayEvent::PrimaryDisplay(payload) => Some(payload),
      _ => None,
    })
  }

  /// The text currently on the primary display. Empty if nothing has
  /// been displayed.
  pub fn primary_text(&self) -> &str {
    self.primary().map_or("", |payload| payload.text.as_str())
  }

  /// Whether the primary display currently shows an error.
  pub fn is_error(&self) -> bool {
    self.primary().map_or(false, |payload| payload.is_error)
  }

  /// The number of error messages sent to the primary display.
  pub fn error_count(&self) -> usize {
    self.events.iter()
      .filter(|event| matches!(event, DisplayEvent::PrimaryDisplay(payload) if payload.is_error))
      .count()
  }

  /// The most recent state of the inverse indicator, if it has ever
  /// been set.
  pub fn inverse_indicator(&self) -> Option<bool> {
    self.events.iter().rev().find_map(|event| match event {
      DisplayEvent::InverseIndicator(payload) => Some(payload.is_inverse),
      _ => None,
    })
  }
}

impl CalcDisplay for DisplayLog {
  fn set_primary_display(&mut self, text: &str, is_error: bool) {
    self.events.push(DisplayEvent::PrimaryDisplay(SetPrimaryDisplayPayload {
      text: text.to_owned(),
      is_error,
    }));
  }

  fn set_inverse_indicator(&mut self, is_inverse: bool) {
    self.events.push(DisplayEvent::InverseIndicator(InverseIndicatorPayload { is_inverse }));
  }
}

impl<D: CalcDisplay + ?Sized> CalcDisplay for &mut D {
  fn set_primary_display(&mut self, text: &str, is_error: bool) {
    (**self).set_primary_display(text, is_error)
  }

  fn set_inverse_indicator(&mut self, is_inverse: bool) {
    (**self).set_inverse_indicator(is_inverse)
  }
}
