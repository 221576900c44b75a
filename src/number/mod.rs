//! Exact rational arithmetic, the numeric foundation of the
//! calculator core.
//!
//! [`Rational`] is the value type. The free functions in the
//! submodules implement the scientific function family on top of it;
//! every one of them reports failure as a [`MathError`].

mod error;
mod factorial;
mod fixed_width;
mod power;
mod rational;
pub mod transcendental;

pub use error::{MathError, UnknownErrorCode};
pub use factorial::{factorial, MAX_FACTORIAL_ARG};
pub use fixed_width::{WordWidth, InvalidWordWidthError};
pub use power::{powi, pow, root, MAX_EXACT_EXPONENT};
pub use rational::{Rational, ParseRationalError, INEXACT_DIGITS, MAX_PARSE_EXPONENT};
