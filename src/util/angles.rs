//! Helpers for keeping track of which angle unit is currently in
//! use.

use crate::number::Rational;

use num::Zero;
use serde::{Serialize, Deserialize};

use std::f64::consts::TAU;
use std::fmt::{self, Display, Formatter};

/// The unit in which circular trigonometric functions read their
/// input (and inverse functions report their output).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
  #[default]
  Degrees,
  Radians,
  Gradians,
}

/// An angle expressed as an exact fraction of a full turn, in the
/// half-open range `[0, 1)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turns(pub Rational);

impl AngleUnit {
  /// The size of one full turn in this unit, if it is rational.
  /// Radians have no exact full turn.
  pub fn full_turn(self) -> Option<Rational> {
    match self {
      AngleUnit::Degrees => Some(Rational::from(360)),
      AngleUnit::Gradians => Some(Rational::from(400)),
      AngleUnit::Radians => None,
    }
  }

  /// Reduces an angle in this unit exactly into a fraction of a full
  /// turn. Returns `None` for radians, other than the angle zero.
  pub fn to_turns(self, angle: &Rational) -> Option<Turns> {
    if angle.is_zero() {
      return Some(Turns(Rational::zero()));
    }
    let turn = self.full_turn()?;
    let turns = angle / &turn;
    Some(Turns(&turns - &turns.floor()))
  }

  /// Converts an exact fraction of a full turn into this unit. Only
  /// rational for degrees and gradians, and for radians at zero.
  pub fn from_turns(self, turns: &Rational) -> Option<Rational> {
    if turns.is_zero() {
      return Some(Rational::zero());
    }
    self.full_turn().map(|turn| turns * &turn)
  }

  pub fn to_radians(self, angle: f64) -> f64 {
    match self {
      AngleUnit::Degrees => angle.to_radians(),
      AngleUnit::Radians => angle,
      AngleUnit::Gradians => angle * TAU / 400.0,
    }
  }

  pub fn from_radians(self, angle: f64) -> f64 {
    match self {
      AngleUnit::Degrees => angle.to_degrees(),
      AngleUnit::Radians => angle,
      AngleUnit::Gradians => angle * 400.0 / TAU,
    }
  }
}

impl Turns {
  /// The angle in radians, for the inexact fallback.
  pub fn to_radians(&self) -> f64 {
    self.0.to_f64().unwrap_or(f64::NAN) * TAU
  }
}

impl Display for AngleUnit {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      AngleUnit::Degrees => write!(f, "deg"),
      AngleUnit::Radians => write!(f, "rad"),
      AngleUnit::Gradians => write!(f, "grad"),
    }
  }
}
