//! Localizable string resources.

use phf::phf_map;

/// Resource identifier of the message for error code 0. The message
/// for error code `n` lives at `IDS_ERRORS_FIRST + n`.
pub const IDS_ERRORS_FIRST: u32 = 99;

/// A source of localized strings, keyed by numeric resource
/// identifier.
pub trait ResourceProvider {
  fn get_string(&self, id: u32) -> Option<String>;
}

/// The built-in English strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnglishResources;

static ENGLISH_STRINGS: phf::Map<u32, &'static str> = phf_map! {
  99u32 => "Cannot divide by zero",
  100u32 => "Invalid input",
  101u32 => "Result is undefined",
  102u32 => "Positive infinity",
  103u32 => "Negative infinity",
  105u32 => "Value out of range",
  106u32 => "Not enough memory",
  107u32 => "Overflow",
  108u32 => "Result not defined",
};

impl ResourceProvider for EnglishResources {
  fn get_string(&self, id: u32) -> Option<String> {
    ENGLISH_STRINGS.get(&id).map(|s| (*s).to_owned())
  }
}

impl<R: ResourceProvider + ?Sized> ResourceProvider for &R {
  fn get_string(&self, id: u32) -> Option<String> {
    (**self).get_string(id)
  }
}
