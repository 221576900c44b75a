//! Various utility types shared across the crate.

pub mod angles;
pub mod radix;
