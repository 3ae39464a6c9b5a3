//! Non-negative monetary amounts.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Price in the smallest currency unit (cents).
///
/// Storing cents keeps the catalog free of NaN and rounding surprises while
/// still ordering the same way the decimal amount would.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Decimal amount, e.g. `89.99` for 8999 cents.
    pub fn as_decimal(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}
