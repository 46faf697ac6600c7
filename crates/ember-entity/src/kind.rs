//! Closed sets of entity, item and weapon kinds.
//!
//! Kinds are plain tags. They serialize in `SCREAMING_SNAKE_CASE` so authoring
//! data can name them the way designers write them (`"SWORD_CURVED"`).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// Top-level category of every entity in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    Player,
    Npc,
    Monster,
    /// Anything that can sit in an inventory. Entities built through
    /// [`World::create_item`](crate::world::World::create_item) always carry
    /// this kind.
    Item,
    InteractableObject,
    StaticObject,
    Quest,
}

impl EntityKind {
    /// Every variant, in declaration order.
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Player,
        EntityKind::Npc,
        EntityKind::Monster,
        EntityKind::Item,
        EntityKind::InteractableObject,
        EntityKind::StaticObject,
        EntityKind::Quest,
    ];
}

// ---------------------------------------------------------------------------
// ItemKind
// ---------------------------------------------------------------------------

/// What sort of item an [`EntityKind::Item`] entity is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    Weapon,
    Shield,
    ArmorHead,
    ArmorBody,
    ArmorLegs,
    ArmorHands,
    Ring,
    Bracelet,
    Amulet,
    QuestObject,
    QuestWeapon,
    Potion,
    MagicConsumable,
    Scroll,
    Gold,
    ResourceMetal,
    ResourceHerb,
    ResourceStone,
}

impl ItemKind {
    /// Armor pieces, regardless of slot.
    pub fn is_armor(self) -> bool {
        matches!(
            self,
            ItemKind::ArmorHead | ItemKind::ArmorBody | ItemKind::ArmorLegs | ItemKind::ArmorHands
        )
    }

    /// Raw crafting materials.
    pub fn is_resource(self) -> bool {
        matches!(
            self,
            ItemKind::ResourceMetal | ItemKind::ResourceHerb | ItemKind::ResourceStone
        )
    }
}

// ---------------------------------------------------------------------------
// WeaponKind
// ---------------------------------------------------------------------------

/// Weapon family. Drives which stat ranges a generator picks from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeaponKind {
    SwordStraightLong,
    SwordStraightShort,
    SwordCurved,
    BowLong,
    BowShort,
    CrossbowLight,
    CrossbowHeavy,
    Axe,
    BareHands,
}

impl WeaponKind {
    /// Bows and crossbows.
    pub fn is_ranged(self) -> bool {
        matches!(
            self,
            WeaponKind::BowLong
                | WeaponKind::BowShort
                | WeaponKind::CrossbowLight
                | WeaponKind::CrossbowHeavy
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
