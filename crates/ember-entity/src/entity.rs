//! The entity record and its typed variants.
//!
//! Every entity is an [`Entity`]: an [`EntityId`] plus an [`EntityBody`]. The
//! body is a closed tagged variant instead of a type hierarchy:
//!
//! ```text
//! EntityBody::Basic(kind)                      -> any non-item entity
//! EntityBody::Item(Item::Plain(item_kind))     -> kind == Item
//! EntityBody::Item(Item::Weapon(weapon))       -> kind == Item, item_kind == Weapon
//! ```
//!
//! Entities are immutable once built and shared through [`EntityHandle`]s.

use std::sync::Arc;

use serde::Serialize;

use crate::id::EntityId;
use crate::kind::{EntityKind, ItemKind};
use crate::weapon::Weapon;

/// Shared, read-only handle to a registered entity.
///
/// The [`Registry`](crate::registry::Registry) keeps one clone; scene code that
/// spawned the entity keeps its own. Neither side owns it exclusively.
pub type EntityHandle = Arc<Entity>;

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

/// The item-specific part of an [`EntityKind::Item`] entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Item {
    /// An item with no extra attributes.
    Plain(ItemKind),
    /// An item of kind [`ItemKind::Weapon`] with normalized stats.
    Weapon(Weapon),
}

impl Item {
    /// The item kind; always [`ItemKind::Weapon`] for weapons.
    pub fn item_kind(&self) -> ItemKind {
        match self {
            Item::Plain(kind) => *kind,
            Item::Weapon(_) => ItemKind::Weapon,
        }
    }

    /// The weapon stats, if this is a weapon.
    pub fn as_weapon(&self) -> Option<&Weapon> {
        match self {
            Item::Weapon(weapon) => Some(weapon),
            Item::Plain(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// EntityBody
// ---------------------------------------------------------------------------

/// Kind-specific data carried by an [`Entity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EntityBody {
    /// A bare entity tagged with its kind.
    Basic(EntityKind),
    /// An item; the entity kind is always [`EntityKind::Item`].
    Item(Item),
}

impl EntityBody {
    /// The entity kind this body implies.
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityBody::Basic(kind) => *kind,
            EntityBody::Item(_) => EntityKind::Item,
        }
    }
}

impl From<Item> for EntityBody {
    fn from(item: Item) -> Self {
        EntityBody::Item(item)
    }
}

impl From<Weapon> for EntityBody {
    fn from(weapon: Weapon) -> Self {
        EntityBody::Item(Item::Weapon(weapon))
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A registered game entity.
///
/// Only [`World`](crate::world::World) constructs these, so every `Entity` in
/// existence has a registry entry under [`id`](Self::id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    id: EntityId,
    body: EntityBody,
}

impl Entity {
    pub(crate) fn new(id: EntityId, body: EntityBody) -> Self {
        Self { id, body }
    }

    /// The ID negotiated at construction.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Top-level kind of this entity.
    pub fn kind(&self) -> EntityKind {
        self.body.kind()
    }

    /// Kind-specific data.
    pub fn body(&self) -> &EntityBody {
        &self.body
    }

    /// The item part, if this entity was built as an item.
    pub fn as_item(&self) -> Option<&Item> {
        match &self.body {
            EntityBody::Item(item) => Some(item),
            EntityBody::Basic(_) => None,
        }
    }

    /// The item kind, if this entity was built as an item.
    ///
    /// An entity created with [`EntityKind::Item`] through the generic path
    /// has no item kind and returns `None`.
    pub fn item_kind(&self) -> Option<ItemKind> {
        self.as_item().map(Item::item_kind)
    }

    /// The weapon stats, if this entity was built as a weapon.
    pub fn as_weapon(&self) -> Option<&Weapon> {
        self.as_item().and_then(Item::as_weapon)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
