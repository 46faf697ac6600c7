//! Ember Entity -- stable identifiers, a lookup registry, and validated typed
//! entities for the game object model.
//!
//! Entities are created through a [`World`](world::World), which negotiates a
//! collision-free [`EntityId`](id::EntityId) for each one. Designer-authored
//! IDs in `[1, reserved_max]` are kept as given; anything else, including a
//! pregenerated ID that is already taken, receives a fresh runtime ID above
//! the reserved range. Weapon stats are normalized at construction: values
//! outside their domain fall back to a safe default and min/max pairs are
//! reordered.
//!
//! # Quick Start
//!
//! ```
//! use ember_entity::prelude::*;
//!
//! let mut world = World::new();
//!
//! let chest = world.create_entity(EntityKind::InteractableObject, Some(1_204));
//! assert_eq!(chest.id(), EntityId::from_raw(1_204));
//!
//! let params = WeaponParams { min_damage: 40, max_damage: 12, ..WeaponParams::default() };
//! let sword = world.create_weapon(WeaponKind::SwordCurved, None, &params);
//! assert_eq!(sword.as_weapon().unwrap().damage(), (12, 40));
//!
//! assert!(world.lookup(sword.id()).is_some());
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod entity;
pub mod id;
pub mod kind;
pub mod normalize;
pub mod registry;
pub mod weapon;
pub mod world;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced while setting up a world.
///
/// Entity construction itself never fails: bad input is normalized.
#[derive(Debug, thiserror::Error)]
pub enum EntityError {
    /// The reserved ID range is empty or leaves no room for runtime IDs.
    #[error("reserved_max must be between 1 and i64::MAX, got {reserved_max}")]
    InvalidReservedMax { reserved_max: u64 },

    /// A weapon attribute range is inverted or its fallback lies outside it.
    #[error("attribute range for '{field}' is invalid: [{min}, {max}] with fallback {fallback}")]
    InvalidAttributeRange {
        field: &'static str,
        min: i32,
        max: i32,
        fallback: i32,
    },

    /// The configuration document could not be parsed.
    #[error("failed to parse world config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::config::WorldConfig;
    pub use crate::entity::{Entity, EntityBody, EntityHandle, Item};
    pub use crate::id::{EntityId, IdAllocator, IdOrigin, RESERVED_MAX};
    pub use crate::kind::{EntityKind, ItemKind, WeaponKind};
    pub use crate::normalize::{clamp_or_fallback, order_ascending, AttributeRange};
    pub use crate::registry::Registry;
    pub use crate::weapon::{NormalizationReport, Weapon, WeaponLimits, WeaponParams};
    pub use crate::world::World;
    pub use crate::EntityError;
}

// ---------------------------------------------------------------------------
// Integration Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn mixed_construction_keeps_registry_consistent() {
        let mut world = World::new();
        let player = world.create_entity(EntityKind::Player, Some(1));
        let potion = world.create_item(ItemKind::Potion, Some(2));
        let bow = world.create_weapon(
            WeaponKind::BowShort,
            Some(2),
            &WeaponParams {
                min_range: 3,
                max_range: 12,
                ..WeaponParams::default()
            },
        );

        assert_eq!(world.entity_count(), 3);
        assert_eq!(player.id().to_raw(), 1);
        assert_eq!(potion.id().to_raw(), 2);
        assert!(bow.id().to_raw() > RESERVED_MAX);

        for handle in [&player, &potion, &bow] {
            let found = world.lookup(handle.id()).unwrap();
            assert_eq!(found.kind(), handle.kind());
        }
        assert_eq!(bow.as_weapon().unwrap().range(), (3, 12));
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = EntityError::InvalidAttributeRange {
            field: "min_range",
            min: 5,
            max: 1,
            fallback: 0,
        };
        assert_eq!(
            err.to_string(),
            "attribute range for 'min_range' is invalid: [5, 1] with fallback 0"
        );
    }
}
