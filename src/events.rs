//! Serializable events that the engine can send to a host frontend.

use serde::Serialize;

/// Instructs the frontend to replace the primary display's text.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SetPrimaryDisplayPayload {
  pub text: String,
  /// Whether the text is an error message rather than a number.
  pub is_error: bool,
}

/// Instructs the frontend to update the "Inverse" indicator.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InverseIndicatorPayload {
  pub is_inverse: bool,
}

impl SetPrimaryDisplayPayload {
  pub const EVENT_NAME: &'static str = "set-primary-display";
}

impl InverseIndicatorPayload {
  pub const EVENT_NAME: &'static str = "refresh-inverse-indicator";
}
