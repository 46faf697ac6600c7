//! Property tests for ID negotiation and weapon normalization.
//!
//! Random sequences of construction calls are run against a [`World`] while a
//! shadow model tracks what the registry must contain.

use std::collections::HashSet;
use std::sync::Arc;

use ember_entity::prelude::*;
use proptest::prelude::*;

/// Construction calls we can make against the world.
#[derive(Debug, Clone)]
enum CreateOp {
    Entity(usize, Option<i64>),
    Item(usize, Option<i64>),
    Weapon(Option<i64>, WeaponParams),
}

const ITEM_KINDS: [ItemKind; 4] = [
    ItemKind::Shield,
    ItemKind::Potion,
    ItemKind::Gold,
    ItemKind::ResourceStone,
];

/// Requested IDs biased toward collisions, boundaries and junk.
fn requested_id() -> impl Strategy<Value = Option<i64>> {
    prop_oneof![
        Just(None),
        (1i64..8).prop_map(Some),
        Just(Some(0)),
        Just(Some(-1)),
        Just(Some(RESERVED_MAX as i64)),
        Just(Some(RESERVED_MAX as i64 + 1)),
        any::<i64>().prop_map(Some),
    ]
}

fn weapon_params() -> impl Strategy<Value = WeaponParams> {
    (
        any::<i32>(),
        any::<i32>(),
        -10i32..2_000_000,
        -10i32..2_000_000,
        -10i32..200,
        any::<i32>(),
        -10i32..300,
        -10i32..1_200,
    )
        .prop_map(
            |(min_range, max_range, min_damage, max_damage, chance, mult, level, skill)| {
                WeaponParams {
                    min_range,
                    max_range,
                    min_damage,
                    max_damage,
                    crit_chance_percent: chance,
                    crit_multiplier_percent: mult,
                    level_required: level,
                    skill_required: skill,
                }
            },
        )
}

fn create_op_strategy() -> impl Strategy<Value = CreateOp> {
    prop_oneof![
        (0..EntityKind::ALL.len(), requested_id()).prop_map(|(k, r)| CreateOp::Entity(k, r)),
        (0..ITEM_KINDS.len(), requested_id()).prop_map(|(k, r)| CreateOp::Item(k, r)),
        (requested_id(), weapon_params()).prop_map(|(r, p)| CreateOp::Weapon(r, p)),
    ]
}

fn requested_of(op: &CreateOp) -> Option<i64> {
    match op {
        CreateOp::Entity(_, r) | CreateOp::Item(_, r) | CreateOp::Weapon(r, _) => *r,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2_000))]

    #[test]
    fn random_construction_preserves_invariants(
        ops in prop::collection::vec(create_op_strategy(), 1..60)
    ) {
        let mut world = World::new();
        let mut seen: HashSet<EntityId> = HashSet::new();
        let mut handles: Vec<EntityHandle> = Vec::new();

        for op in ops {
            let counter_before = world.next_runtime_id().to_raw();
            let requested = requested_of(&op);

            let handle = match op {
                CreateOp::Entity(k, r) => world.create_entity(EntityKind::ALL[k], r),
                CreateOp::Item(k, r) => world.create_item(ITEM_KINDS[k], r),
                CreateOp::Weapon(r, p) => world.create_weapon(WeaponKind::Axe, r, &p),
            };
            let id = handle.id();

            // Counter moves by exactly one whichever branch was taken.
            prop_assert_eq!(world.next_runtime_id().to_raw(), counter_before + 1);

            // Fresh requests in range are honoured; everything else gets the
            // counter value that was current before the call.
            let honoured = requested
                .filter(|&r| r > 0 && r as u64 <= RESERVED_MAX)
                .map(|r| EntityId::from_raw(r as u64))
                .filter(|r| !seen.contains(r));
            match honoured {
                Some(r) => {
                    prop_assert_eq!(id, r);
                }
                None => {
                    prop_assert_eq!(id.to_raw(), counter_before);
                }
            }

            prop_assert!(seen.insert(id), "id {} handed out twice", id);
            handles.push(handle);
            prop_assert_eq!(world.entity_count(), seen.len());
        }

        for handle in &handles {
            let found = world.lookup(handle.id());
            prop_assert!(found.is_some());
            prop_assert!(Arc::ptr_eq(&found.unwrap(), handle));
            if let Some(weapon) = handle.as_weapon() {
                prop_assert!(weapon.satisfies(&WeaponLimits::default()));
            }
        }
    }

    #[test]
    fn unused_ids_are_not_found(raw in 1u64..u64::MAX, count in 0usize..20) {
        let mut world = World::new();
        let ids: HashSet<EntityId> = (0..count)
            .map(|_| world.create_entity(EntityKind::Npc, None).id())
            .collect();
        let target = EntityId::from_raw(raw);
        prop_assert_eq!(world.lookup(target).is_some(), ids.contains(&target));
    }

    #[test]
    fn clamp_matches_definition(
        value in any::<i32>(),
        a in any::<i32>(),
        b in any::<i32>(),
        fallback in any::<i32>(),
    ) {
        let (min, max) = order_ascending(a, b);
        prop_assert!(min <= max);
        let out = clamp_or_fallback(value, min, max, fallback);
        if value >= min && value <= max {
            prop_assert_eq!(out, value);
        } else {
            prop_assert_eq!(out, fallback);
        }
    }

    #[test]
    fn normalized_weapon_always_valid(params in weapon_params()) {
        let limits = WeaponLimits::default();
        let (weapon, report) = Weapon::normalize(WeaponKind::BowLong, &params, &limits);
        prop_assert!(weapon.satisfies(&limits));
        if report.is_clean() {
            prop_assert_eq!(weapon.min_range(), params.min_range);
            prop_assert_eq!(weapon.max_damage(), params.max_damage);
        }
    }
}
