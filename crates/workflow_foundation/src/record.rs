//! Immutable single-value records.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable record holding a single integer value.
///
/// The value is fixed at construction; construction succeeds for every
/// representable integer. Records compare by value and are cheap to copy.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SomeRecord {
    value: i64,
}

impl SomeRecord {
    /// Creates a new record holding the given value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self { value }
    }

    /// Returns the value this record was constructed with.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.value
    }
}

impl fmt::Debug for SomeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SomeRecord({})", self.value)
    }
}

impl fmt::Display for SomeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record({})", self.value)
    }
}
