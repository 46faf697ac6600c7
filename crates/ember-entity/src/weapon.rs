//! Weapon stats and their construction-time normalization.
//!
//! A [`Weapon`] is built from raw [`WeaponParams`] exactly once. Each field is
//! run through its [`AttributeRange`] from [`WeaponLimits`] (out-of-domain
//! values become the field's fallback), and only then are the range and
//! damage pairs put in ascending order. The resulting stats are immutable.
//!
//! ```
//! use ember_entity::kind::WeaponKind;
//! use ember_entity::weapon::{Weapon, WeaponParams};
//!
//! let params = WeaponParams { min_range: 30, max_range: 10, ..WeaponParams::default() };
//! let bow = Weapon::new(WeaponKind::BowLong, &params);
//! assert_eq!(bow.range(), (10, 30));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::kind::WeaponKind;
use crate::normalize::{order_ascending, AttributeRange};

// ---------------------------------------------------------------------------
// WeaponLimits
// ---------------------------------------------------------------------------

/// Per-field domains and fallbacks applied when a weapon is built.
///
/// The defaults are the shipped balance values: range caps at 50 tiles with a
/// bare-fist fallback of 2, damage caps at one million with a bare-fist
/// fallback of 1, and a neutral crit multiplier of 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponLimits {
    pub min_range: AttributeRange,
    pub max_range: AttributeRange,
    pub min_damage: AttributeRange,
    pub max_damage: AttributeRange,
    pub crit_chance_percent: AttributeRange,
    pub crit_multiplier_percent: AttributeRange,
    pub level_required: AttributeRange,
    pub skill_required: AttributeRange,
}

impl Default for WeaponLimits {
    fn default() -> Self {
        Self {
            min_range: AttributeRange::new(0, 50, 0),
            max_range: AttributeRange::new(0, 50, 2),
            min_damage: AttributeRange::new(0, 1_000_000, 0),
            max_damage: AttributeRange::new(0, 1_000_000, 1),
            crit_chance_percent: AttributeRange::new(0, 100, 0),
            crit_multiplier_percent: AttributeRange::new(0, 1_000_000, 100),
            level_required: AttributeRange::new(0, 200, 0),
            skill_required: AttributeRange::new(0, 1_000, 0),
        }
    }
}

impl WeaponLimits {
    /// Every range paired with its field name, in stat order.
    pub fn named_ranges(&self) -> [(&'static str, AttributeRange); 8] {
        [
            ("min_range", self.min_range),
            ("max_range", self.max_range),
            ("min_damage", self.min_damage),
            ("max_damage", self.max_damage),
            ("crit_chance_percent", self.crit_chance_percent),
            ("crit_multiplier_percent", self.crit_multiplier_percent),
            ("level_required", self.level_required),
            ("skill_required", self.skill_required),
        ]
    }
}

// ---------------------------------------------------------------------------
// WeaponParams
// ---------------------------------------------------------------------------

/// Raw, unvalidated weapon stats as supplied by a generator or authoring data.
///
/// Missing fields in deserialized input take the bare-hands values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponParams {
    pub min_range: i32,
    pub max_range: i32,
    pub min_damage: i32,
    pub max_damage: i32,
    pub crit_chance_percent: i32,
    pub crit_multiplier_percent: i32,
    pub level_required: i32,
    pub skill_required: i32,
}

impl Default for WeaponParams {
    fn default() -> Self {
        Self {
            min_range: 0,
            max_range: 2,
            min_damage: 0,
            max_damage: 1,
            crit_chance_percent: 0,
            crit_multiplier_percent: 100,
            level_required: 0,
            skill_required: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// NormalizationReport
// ---------------------------------------------------------------------------

/// What [`Weapon::normalize`] had to change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizationReport {
    /// Names of fields whose input was out of domain and replaced by the
    /// fallback, in stat order.
    pub fallbacks: Vec<&'static str>,
    /// `min_range` and `max_range` were swapped after clamping.
    pub range_reordered: bool,
    /// `min_damage` and `max_damage` were swapped after clamping.
    pub damage_reordered: bool,
}

impl NormalizationReport {
    /// `true` if the input was stored exactly as given.
    pub fn is_clean(&self) -> bool {
        self.fallbacks.is_empty() && !self.range_reordered && !self.damage_reordered
    }
}

// ---------------------------------------------------------------------------
// Weapon
// ---------------------------------------------------------------------------

/// Normalized, immutable weapon stats.
///
/// Invariants: `min_range <= max_range`, `min_damage <= max_damage`, and every
/// field lies inside the [`WeaponLimits`] it was built with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Weapon {
    weapon_kind: WeaponKind,
    min_range: i32,
    max_range: i32,
    min_damage: i32,
    max_damage: i32,
    crit_chance_percent: i32,
    crit_multiplier_percent: i32,
    level_required: i32,
    skill_required: i32,
}

impl Weapon {
    /// Build a weapon with the default [`WeaponLimits`].
    pub fn new(weapon_kind: WeaponKind, params: &WeaponParams) -> Self {
        Self::normalize(weapon_kind, params, &WeaponLimits::default()).0
    }

    /// Build a weapon against `limits`, reporting every adjustment made.
    ///
    /// Clamping happens before reordering, so a pair that only becomes
    /// inverted after a fallback is still stored ascending.
    pub fn normalize(
        weapon_kind: WeaponKind,
        params: &WeaponParams,
        limits: &WeaponLimits,
    ) -> (Self, NormalizationReport) {
        let mut report = NormalizationReport::default();
        let mut clamp = |name: &'static str, value: i32, range: AttributeRange| {
            let normalized = range.apply(value);
            if !range.contains(value) {
                debug!(
                    field = name,
                    input = value,
                    fallback = normalized,
                    "weapon attribute out of domain, using fallback"
                );
                report.fallbacks.push(name);
            }
            normalized
        };

        let min_range = clamp("min_range", params.min_range, limits.min_range);
        let max_range = clamp("max_range", params.max_range, limits.max_range);
        let min_damage = clamp("min_damage", params.min_damage, limits.min_damage);
        let max_damage = clamp("max_damage", params.max_damage, limits.max_damage);
        let crit_chance_percent = clamp(
            "crit_chance_percent",
            params.crit_chance_percent,
            limits.crit_chance_percent,
        );
        let crit_multiplier_percent = clamp(
            "crit_multiplier_percent",
            params.crit_multiplier_percent,
            limits.crit_multiplier_percent,
        );
        let level_required = clamp("level_required", params.level_required, limits.level_required);
        let skill_required = clamp("skill_required", params.skill_required, limits.skill_required);

        report.range_reordered = min_range > max_range;
        let (min_range, max_range) = order_ascending(min_range, max_range);
        report.damage_reordered = min_damage > max_damage;
        let (min_damage, max_damage) = order_ascending(min_damage, max_damage);

        if report.range_reordered || report.damage_reordered {
            debug!(
                range = report.range_reordered,
                damage = report.damage_reordered,
                "weapon min/max pair inverted, reordered"
            );
        }

        let weapon = Self {
            weapon_kind,
            min_range,
            max_range,
            min_damage,
            max_damage,
            crit_chance_percent,
            crit_multiplier_percent,
            level_required,
            skill_required,
        };
        (weapon, report)
    }

    /// Weapon family.
    pub fn weapon_kind(&self) -> WeaponKind {
        self.weapon_kind
    }

    /// `(min_range, max_range)`, ascending.
    pub fn range(&self) -> (i32, i32) {
        (self.min_range, self.max_range)
    }

    /// `(min_damage, max_damage)`, ascending.
    pub fn damage(&self) -> (i32, i32) {
        (self.min_damage, self.max_damage)
    }

    /// Shortest distance, in tiles, the weapon can hit at.
    pub fn min_range(&self) -> i32 {
        self.min_range
    }

    /// Longest distance, in tiles, the weapon can hit at.
    pub fn max_range(&self) -> i32 {
        self.max_range
    }

    /// Lowest damage per hit.
    pub fn min_damage(&self) -> i32 {
        self.min_damage
    }

    /// Highest damage per hit.
    pub fn max_damage(&self) -> i32 {
        self.max_damage
    }

    /// Crit chance in percent, `0..=100` by default.
    pub fn crit_chance_percent(&self) -> i32 {
        self.crit_chance_percent
    }

    /// Crit damage factor in percent; `100` means normal damage.
    pub fn crit_multiplier_percent(&self) -> i32 {
        self.crit_multiplier_percent
    }

    /// Character level needed to wield the weapon.
    pub fn level_required(&self) -> i32 {
        self.level_required
    }

    /// Weapon skill needed to wield the weapon.
    pub fn skill_required(&self) -> i32 {
        self.skill_required
    }

    /// Crit probability as a fraction: `0.0` never crits, `1.0` always does.
    pub fn crit_chance(&self) -> f64 {
        f64::from(self.crit_chance_percent) / 100.0
    }

    /// Damage factor applied on a crit. `1.0` means a crit deals normal damage.
    pub fn crit_multiplier(&self) -> f64 {
        f64::from(self.crit_multiplier_percent) / 100.0
    }

    /// Whether a target `distance` tiles away can be hit.
    pub fn in_range(&self, distance: i32) -> bool {
        distance >= self.min_range && distance <= self.max_range
    }

    /// Check the construction invariants against `limits`.
    pub fn satisfies(&self, limits: &WeaponLimits) -> bool {
        self.min_range <= self.max_range
            && self.min_damage <= self.max_damage
            && limits.min_range.contains(self.min_range)
            && limits.max_range.contains(self.max_range)
            && limits.min_damage.contains(self.min_damage)
            && limits.max_damage.contains(self.max_damage)
            && limits.crit_chance_percent.contains(self.crit_chance_percent)
            && limits.crit_multiplier_percent.contains(self.crit_multiplier_percent)
            && limits.level_required.contains(self.level_required)
            && limits.skill_required.contains(self.skill_required)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
