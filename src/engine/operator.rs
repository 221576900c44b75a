//! Operator codes understood by the scientific function evaluator.

use phf::phf_map;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A unary scientific operator. This is a fixed, closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScientificOp {
  /// Integer part, or fractional part under the inverse flag.
  Chop,
  Complement,
  RotateLeft,
  RotateRight,
  Percent,
  Sin,
  Sinh,
  Cos,
  Cosh,
  Tan,
  Tanh,
  Reciprocal,
  Square,
  SquareRoot,
  Cube,
  CubeRoot,
  /// Common (base 10) logarithm.
  Log,
  PowerOfTen,
  /// Natural logarithm, or `e^x` under the inverse flag.
  Ln,
  Factorial,
  /// Degree-minute-second conversion with the inverse flag toggled
  /// first.
  Degrees,
  Dms,
}

/// The binary operator waiting for its right-hand operand. Only
/// [`ScientificOp::Percent`] looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BinaryOp {
  Add,
  Subtract,
  Multiply,
  Divide,
  Modulo,
  Power,
  Root,
  And,
  Or,
  Xor,
  LeftShift,
  RightShift,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("No such operator {name}")]
pub struct ParseOperatorError {
  pub name: String,
}

static SCIENTIFIC_OPS: phf::Map<&'static str, ScientificOp> = phf_map! {
  "chop" => ScientificOp::Chop,
  "com" => ScientificOp::Complement,
  "rol" => ScientificOp::RotateLeft,
  "ror" => ScientificOp::RotateRight,
  "percent" => ScientificOp::Percent,
  "sin" => ScientificOp::Sin,
  "sinh" => ScientificOp::Sinh,
  "cos" => ScientificOp::Cos,
  "cosh" => ScientificOp::Cosh,
  "tan" => ScientificOp::Tan,
  "tanh" => ScientificOp::Tanh,
  "rec" => ScientificOp::Reciprocal,
  "sqr" => ScientificOp::Square,
  "sqrt" => ScientificOp::SquareRoot,
  "cub" => ScientificOp::Cube,
  "cuberoot" => ScientificOp::CubeRoot,
  "log" => ScientificOp::Log,
  "pow10" => ScientificOp::PowerOfTen,
  "ln" => ScientificOp::Ln,
  "fac" => ScientificOp::Factorial,
  "degrees" => ScientificOp::Degrees,
  "dms" => ScientificOp::Dms,
};

impl ScientificOp {
  pub const ALL: [ScientificOp; 22] = [
    ScientificOp::Chop,
    ScientificOp::Complement,
    ScientificOp::RotateLeft,
    ScientificOp::RotateRight,
    ScientificOp::Percent,
    ScientificOp::Sin,
    ScientificOp::Sinh,
    ScientificOp::Cos,
    ScientificOp::Cosh,
    ScientificOp::Tan,
    ScientificOp::Tanh,
    ScientificOp::Reciprocal,
    ScientificOp::Square,
    ScientificOp::SquareRoot,
    ScientificOp::Cube,
    ScientificOp::CubeRoot,
    ScientificOp::Log,
    ScientificOp::PowerOfTen,
    ScientificOp::Ln,
    ScientificOp::Factorial,
    ScientificOp::Degrees,
    ScientificOp::Dms,
  ];

  /// The command name of this operator, as accepted by
  /// [`ScientificOp::from_str`].
  pub fn name(self) -> &'static str {
    match self {
      ScientificOp::Chop => "chop",
      ScientificOp::Complement => "com",
      ScientificOp::RotateLeft => "rol",
      ScientificOp::RotateRight => "ror",
      ScientificOp::Percent => "percent",
      ScientificOp::Sin => "sin",
      ScientificOp::Sinh => "sinh",
      ScientificOp::Cos => "cos",
      ScientificOp::Cosh => "cosh",
      ScientificOp::Tan => "tan",
      ScientificOp::Tanh => "tanh",
      ScientificOp::Reciprocal => "rec",
      ScientificOp::Square => "sqr",
      ScientificOp::SquareRoot => "sqrt",
      ScientificOp::Cube => "cub",
      ScientificOp::CubeRoot => "cuberoot",
      ScientificOp::Log => "log",
      ScientificOp::PowerOfTen => "pow10",
      ScientificOp::Ln => "ln",
      ScientificOp::Factorial => "fac",
      ScientificOp::Degrees => "degrees",
      ScientificOp::Dms => "dms",
    }
  }

  /// Whether the operator leaves its operand untouched in integer
  /// mode. [`ScientificOp::Degrees`] still toggles the inverse flag
  /// before doing nothing.
  pub fn is_real_only(self) -> bool {
    matches!(
      self,
      ScientificOp::Sin | ScientificOp::Sinh | ScientificOp::Cos | ScientificOp::Cosh |
      ScientificOp::Tan | ScientificOp::Tanh | ScientificOp::Degrees | ScientificOp::Dms
    )
  }

  /// Whether the operator only does something in integer mode.
  pub fn is_integer_only(self) -> bool {
    matches!(self, ScientificOp::RotateLeft | ScientificOp::RotateRight)
  }
}

impl FromStr for ScientificOp {
  type Err = ParseOperatorError;

  fn from_str(name: &str) -> Result<Self, Self::Err> {
    SCIENTIFIC_OPS.get(name).copied().ok_or_else(|| ParseOperatorError { name: name.to_owned() })
  }
}

impl Display for ScientificOp {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl BinaryOp {
  /// Multiplicative operators take a percentage of the operand
  /// itself rather than of the left-hand side.
  pub fn is_multiplicative(self) -> bool {
    matches!(self, BinaryOp::Multiply | BinaryOp::Divide)
  }
}
