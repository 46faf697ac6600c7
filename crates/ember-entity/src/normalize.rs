//! Attribute normalization helpers.
//!
//! Construction parameters are never rejected. A value outside its domain is
//! replaced by a per-field fallback (not snapped to the nearest bound), and
//! min/max pairs are put in ascending order after clamping.

use serde::{Deserialize, Serialize};

/// Return `value` if `min <= value <= max`, otherwise `fallback`.
#[inline]
pub fn clamp_or_fallback<T: PartialOrd>(value: T, min: T, max: T, fallback: T) -> T {
    if value >= min && value <= max {
        value
    } else {
        fallback
    }
}

/// Return the pair with the smaller value first.
#[inline]
pub fn order_ascending<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}

// ---------------------------------------------------------------------------
// AttributeRange
// ---------------------------------------------------------------------------

/// An inclusive domain plus the value substituted for anything outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRange {
    pub min: i32,
    pub max: i32,
    pub fallback: i32,
}

impl AttributeRange {
    /// A range `[min, max]` with `fallback` for out-of-domain values.
    pub const fn new(min: i32, max: i32, fallback: i32) -> Self {
        Self { min, max, fallback }
    }

    /// Normalize `value` into this range.
    #[inline]
    pub fn apply(&self, value: i32) -> i32 {
        clamp_or_fallback(value, self.min, self.max, self.fallback)
    }

    /// Whether `value` lies inside `[min, max]`.
    #[inline]
    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    /// A range is usable when it is non-empty and its fallback lies inside it.
    pub fn is_well_formed(&self) -> bool {
        self.min <= self.max && self.contains(self.fallback)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
