//! Entity identifiers and runtime ID allocation.
//!
//! An [`EntityId`] is a plain 64-bit number drawn from two disjoint ranges:
//!
//! - `[1, reserved_max]` -- pregenerated IDs authored at design time. These are
//!   supplied by the caller and carry meaning (a designer placed that chest).
//! - `(reserved_max, u64::MAX]` -- runtime IDs handed out by the
//!   [`IdAllocator`], strictly increasing and never reused.
//!
//! `0` is never a valid ID.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound (inclusive) of the pregenerated ID range.
pub const RESERVED_MAX: u64 = 1_000_000;

// ---------------------------------------------------------------------------
// EntityId
// ---------------------------------------------------------------------------

/// A unique entity identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(u64);

impl EntityId {
    /// Wrap a raw value. No range check is made here; validity depends on
    /// which [`World`](crate::world::World) the ID is used with.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw `u64` representation.
    #[inline]
    pub fn to_raw(self) -> u64 {
        self.0
    }

    /// Classify this ID against a reserved upper bound.
    pub fn origin(self, reserved_max: u64) -> IdOrigin {
        if self.0 <= reserved_max {
            IdOrigin::Pregenerated
        } else {
            IdOrigin::Runtime
        }
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// IdOrigin
// ---------------------------------------------------------------------------

/// Which half of the identifier space an [`EntityId`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdOrigin {
    /// Authored at design time, inside the reserved range.
    Pregenerated,
    /// Handed out by the allocator at runtime.
    Runtime,
}

/// Interpret a caller-supplied ID request.
///
/// Returns the requested ID only if it lies in `(0, reserved_max]`; anything
/// else (absent, zero, negative, or past the reserved range) means "no
/// preference".
pub fn requested_in_range(requested: Option<i64>, reserved_max: u64) -> Option<EntityId> {
    let raw = u64::try_from(requested?).ok()?;
    (raw > 0 && raw <= reserved_max).then_some(EntityId(raw))
}

// ---------------------------------------------------------------------------
// IdAllocator
// ---------------------------------------------------------------------------

/// Hands out runtime [`EntityId`]s above the reserved range.
///
/// The counter only ever moves forward. [`peek`](Self::peek) and
/// [`advance`](Self::advance) are split so the construction protocol can use
/// the current value as a candidate and consume it afterwards regardless of
/// which branch it took.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    /// The next runtime ID to hand out.
    next: u64,
}

impl IdAllocator {
    /// Create an allocator whose first runtime ID is `reserved_max + 1`.
    ///
    /// `reserved_max` must leave room for runtime IDs;
    /// [`WorldConfig::validate`](crate::config::WorldConfig::validate)
    /// guarantees this for worlds.
    pub fn new(reserved_max: u64) -> Self {
        Self {
            next: reserved_max.saturating_add(1),
        }
    }

    /// The value the next [`allocate`](Self::allocate) call would return.
    #[inline]
    pub fn peek(&self) -> EntityId {
        EntityId(self.next)
    }

    /// Consume the current value without returning it.
    ///
    /// # Panics
    ///
    /// Panics if the runtime ID space is exhausted.
    #[inline]
    pub fn advance(&mut self) {
        self.next = match self.next.checked_add(1) {
            Some(next) => next,
            None => panic!("runtime entity id space exhausted at {}", self.next),
        };
    }

    /// Return the current value and move past it.
    pub fn allocate(&mut self) -> EntityId {
        let id = self.peek();
        self.advance();
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new(RESERVED_MAX)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
