//! Conversion between decimal degrees and the packed
//! degree-minute-second notation `D.MMSS`.

use crate::number::Rational;

/// Converts `x` between decimal degrees and `D.MMSS` notation.
///
/// Without `inverse`, `x` is read as decimal degrees and packed as
/// `D.MMSS`, so `30.5` becomes `30.30`. With `inverse`, `x` is read
/// as `D.MMSS` and unpacked into decimal degrees. The arithmetic is
/// exact and no carrying is done, so minute or second fields of 60 or
/// more are taken as given.
pub fn dms(x: &Rational, inverse: bool) -> Rational {
  let (split, join) = if inverse { (100, 60) } else { (60, 100) };
  let split = Rational::from(split);
  let join = Rational::from(join);

  let degrees = x.integer_part();
  let minutes_exact = (x - &degrees) * &split;
  let minutes = minutes_exact.integer_part();
  let seconds = (&minutes_exact - &minutes) * &split;

  let minutes = (minutes + seconds / &join) / &join;
  degrees + minutes
}

#[cfg(test)]
mod tests {
  use super::*;

  use std::str::FromStr;

  fn dec(s: &str) -> Rational {
    Rational::from_str(s).unwrap()
  }

  #[test]
  fn test_pack_decimal_degrees() {
    assert_eq!(dms(&dec("30.5"), false), dec("30.3"));
    assert_eq!(dms(&dec("30.2625"), false), dec("30.1545"));
    assert_eq!(dms(&dec("12"), false), dec("12"));
  }

  #[test]
  fn test_unpack_dms() {
    // 30 degrees, 30 minutes, 25 seconds
    let expected = Rational::from(30) + Rational::ratio(30, 60) + Rational::ratio(25, 3600);
    assert_eq!(dms(&dec("30.3025"), true), expected);
    // 30 degrees, 50 minutes, 25 seconds
    let expected = Rational::from(30) + Rational::ratio(50, 60) + Rational::ratio(25, 3600);
    assert_eq!(dms(&dec("30.5025"), true), expected);
  }

  #[test]
  fn test_negative_angles() {
    assert_eq!(dms(&dec("-30.5"), false), dec("-30.3"));
    assert_eq!(dms(&dec("-30.3"), true), dec("-30.5"));
  }

  #[test]
  fn test_roundtrip() {
    for s in ["0", "1.25", "45.7625", "359.999", "-12.345"] {
      let x = dec(s);
      assert_eq!(dms(&dms(&x, false), true), x, "{}", s);
    }
  }
}
