//! Numerical radix used by the calculator's input and display.

use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A numerical radix. Supported radixes are from 2 up to 36 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Radix {
  value: u8,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid radix '{input}', expected an integer from 2 to 36")]
pub struct ParseRadixError {
  pub input: String,
}

impl Radix {
  pub const BINARY: Radix = Radix { value: 2 };
  pub const OCTAL: Radix = Radix { value: 8 };
  pub const DECIMAL: Radix = Radix { value: 10 };
  pub const HEXADECIMAL: Radix = Radix { value: 16 };

  /// Constructs a new radix, performing a bounds check first.
  pub fn try_new(value: u8) -> Option<Self> {
    if (2..=36).contains(&value) {
      Some(Radix { value })
    } else {
      None
    }
  }

  pub fn is_decimal(self) -> bool {
    self == Radix::DECIMAL
  }
}

impl Default for Radix {
  fn default() -> Self {
    Radix::DECIMAL
  }
}

impl From<Radix> for u8 {
  fn from(radix: Radix) -> Self {
    radix.value
  }
}

impl TryFrom<u8> for Radix {
  type Error = ParseRadixError;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Radix::try_new(value).ok_or_else(|| ParseRadixError { input: value.to_string() })
  }
}

impl FromStr for Radix {
  type Err = ParseRadixError;

  fn from_str(input: &str) -> Result<Self, Self::Err> {
    u8::from_str(input).ok()
      .and_then(Radix::try_new)
      .ok_or_else(|| ParseRadixError { input: input.to_owned() })
  }
}

impl Display for Radix {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.value)
  }
}
