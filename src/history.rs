//! The history line, built up token by token as the user enters an
//! expression.

/// Collects the tokens of the expression currently being entered.
///
/// When an error is displayed, the line in progress is abandoned and
/// the error text is kept as an annotation until the next token
/// arrives.
#[derive(Debug, Clone, Default)]
pub struct HistoryCollector {
  tokens: Vec<String>,
  annotation: Option<String>,
}

impl HistoryCollector {
  /// A new collector, with an empty line.
  pub fn new() -> Self {
    Self::default()
  }

  /// Appends a token to the line in progress. This also discards any
  /// error annotation.
  pub fn add_token(&mut self, token: impl Into<String>) {
    self.annotation = None;
    self.tokens.push(token.into());
  }

  /// The line in progress, with tokens separated by single spaces.
  pub fn current_expression(&self) -> String {
    self.tokens.join(" ")
  }

  /// Abandons the line in progress. `error_text` is remembered as the
  /// reason, until the next token is added.
  pub fn clear_history_line(&mut self, error_text: &str) {
    self.tokens.clear();
    self.annotation = Some(error_text.to_owned());
  }

  /// The error text passed to the most recent
  /// [`HistoryCollector::clear_history_line`], if no tokens have been
  /// added since.
  pub fn annotation(&self) -> Option<&str> {
    self.annotation.as_deref()
  }
}
