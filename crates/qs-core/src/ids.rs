//! Strongly typed customer identifier.
//!
//! Identifiers are handed out by the arrival generator in strictly increasing
//! order starting at 1, so `Ord` on `CustomerId` is also arrival order.

use std::fmt;

/// Identifier of one customer process.  `Copy + Ord + Hash` so it can key
/// maps and be compared without ceremony.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomerId(pub u64);

impl CustomerId {
    /// The first identifier a generator assigns.
    pub const FIRST: CustomerId = CustomerId(1);

    /// The identifier following `self`.
    #[inline]
    pub fn next(self) -> CustomerId {
        CustomerId(self.0 + 1)
    }
}

impl Default for CustomerId {
    #[inline]
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer {}", self.0)
    }
}

impl From<CustomerId> for u64 {
    #[inline]
    fn from(id: CustomerId) -> u64 {
        id.0
    }
}
