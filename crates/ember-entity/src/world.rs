//! The [`World`] is the top-level container. It owns the runtime ID allocator,
//! the entity registry, and the configuration both are built from.
//!
//! All entity construction goes through a `World`, which runs the ID
//! negotiation protocol:
//!
//! 1. A requested ID is honoured only if it lies in `(0, reserved_max]`;
//!    otherwise the candidate is the allocator's current value (not consumed).
//! 2. If the candidate is already registered, the entity gets the allocator's
//!    current value instead.
//! 3. The entity is registered and the allocator advances by exactly one,
//!    whichever branch was taken.
//!
//! Because construction takes `&mut self`, steps 1-3 form one exclusive unit.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::WorldConfig;
use crate::entity::{Entity, EntityBody, EntityHandle, Item};
use crate::id::{requested_in_range, EntityId, IdAllocator, IdOrigin};
use crate::kind::{EntityKind, ItemKind, WeaponKind};
use crate::registry::Registry;
use crate::weapon::{Weapon, WeaponParams};
use crate::EntityError;

// ---------------------------------------------------------------------------
// World
// ---------------------------------------------------------------------------

/// Owns every entity created in one game session.
#[derive(Debug)]
pub struct World {
    config: WorldConfig,
    allocator: IdAllocator,
    registry: Registry,
}

impl World {
    /// Create a world with the default [`WorldConfig`].
    pub fn new() -> Self {
        let config = WorldConfig::default();
        Self {
            allocator: IdAllocator::new(config.reserved_max),
            registry: Registry::new(),
            config,
        }
    }

    /// Create a world from a validated config.
    pub fn with_config(config: WorldConfig) -> Result<Self, EntityError> {
        config.validate()?;
        Ok(Self {
            allocator: IdAllocator::new(config.reserved_max),
            registry: Registry::new(),
            config,
        })
    }

    /// The configuration this world was built from.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Read-only access to the registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    // -- construction -------------------------------------------------------

    /// Create a bare entity of `kind`.
    ///
    /// `requested` is a designer-authored ID. `None`, non-positive values and
    /// values past the reserved range all mean "assign a runtime ID".
    pub fn create_entity(&mut self, kind: EntityKind, requested: Option<i64>) -> EntityHandle {
        self.spawn(requested, EntityBody::Basic(kind))
    }

    /// Create an item of `item_kind`. The entity kind is [`EntityKind::Item`].
    ///
    /// Passing [`ItemKind::Weapon`] here yields a weapon-tagged item with no
    /// stats; use [`create_weapon`](Self::create_weapon) for a real weapon.
    pub fn create_item(&mut self, item_kind: ItemKind, requested: Option<i64>) -> EntityHandle {
        self.spawn(requested, Item::Plain(item_kind).into())
    }

    /// Create a weapon, normalizing `params` against the configured limits.
    pub fn create_weapon(
        &mut self,
        weapon_kind: WeaponKind,
        requested: Option<i64>,
        params: &WeaponParams,
    ) -> EntityHandle {
        let (weapon, report) =
            Weapon::normalize(weapon_kind, params, &self.config.weapon_limits);
        let handle = self.spawn(requested, weapon.into());
        if !report.is_clean() {
            debug!(
                entity = %handle.id(),
                weapon_kind = ?weapon_kind,
                fallbacks = ?report.fallbacks,
                "weapon built from normalized params"
            );
        }
        handle
    }

    fn spawn(&mut self, requested: Option<i64>, body: EntityBody) -> EntityHandle {
        let reserved_max = self.config.reserved_max;
        let requested_id = requested_in_range(requested, reserved_max);
        if let (Some(raw), None) = (requested, requested_id) {
            debug!(
                requested = raw,
                reserved_max, "requested id outside pregenerated range, ignoring"
            );
        }

        let candidate = requested_id.unwrap_or_else(|| self.allocator.peek());
        let id = if self.registry.contains(candidate) {
            let fresh = self.allocator.peek();
            warn!(
                requested = %candidate,
                assigned = %fresh,
                "entity id already registered, assigning runtime id"
            );
            fresh
        } else {
            candidate
        };
        self.allocator.advance();

        let handle = Arc::new(Entity::new(id, body));
        self.registry.insert(id, Arc::clone(&handle));
        debug!(entity = %id, kind = ?handle.kind(), requested = ?requested, "entity created");
        handle
    }

    // -- lookup -------------------------------------------------------------

    /// Resolve an ID to its entity. Unknown IDs return `None`.
    pub fn lookup(&self, id: EntityId) -> Option<EntityHandle> {
        self.registry.get(id).cloned()
    }

    /// Whether an entity is registered under `id`.
    pub fn contains(&self, id: EntityId) -> bool {
        self.registry.contains(id)
    }

    /// Number of registered entities.
    pub fn entity_count(&self) -> usize {
        self.registry.len()
    }

    /// The ID the allocator will hand out next. Advances by one per
    /// construction.
    pub fn next_runtime_id(&self) -> EntityId {
        self.allocator.peek()
    }

    /// Whether `id` is in this world's pregenerated or runtime range.
    pub fn origin_of(&self, id: EntityId) -> IdOrigin {
        id.origin(self.config.reserved_max)
    }

    /// All entities of `kind`, ascending by ID.
    pub fn entities_of_kind(&self, kind: EntityKind) -> Vec<EntityHandle> {
        self.collect_sorted(|e| e.kind() == kind)
    }

    /// All items of `item_kind`, ascending by ID. Weapons match
    /// [`ItemKind::Weapon`].
    pub fn items_of_kind(&self, item_kind: ItemKind) -> Vec<EntityHandle> {
        self.collect_sorted(|e| e.item_kind() == Some(item_kind))
    }

    fn collect_sorted(&self, pred: impl Fn(&Entity) -> bool) -> Vec<EntityHandle> {
        let mut out: Vec<EntityHandle> = self
            .registry
            .iter()
            .filter_map(|(_, handle)| pred(handle).then(|| Arc::clone(handle)))
            .collect();
        out.sort_unstable_by_key(|handle| handle.id());
        out
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
