//! World configuration.

use serde::{Deserialize, Serialize};

use crate::id::RESERVED_MAX;
use crate::weapon::WeaponLimits;
use crate::EntityError;

// ---------------------------------------------------------------------------
// WorldConfig
// ---------------------------------------------------------------------------

/// Configuration for a [`World`](crate::world::World).
///
/// Every field is optional in JSON input; missing fields take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Highest ID reserved for pregenerated entities. Runtime IDs start at
    /// `reserved_max + 1`. Must be between 1 and `i64::MAX`, the largest ID a
    /// caller can request.
    pub reserved_max: u64,
    /// Domains and fallbacks for weapon stats.
    pub weapon_limits: WeaponLimits,
}

impl Default for WorldConfig {
    /// Defaults to one million reserved IDs and the shipped weapon limits.
    fn default() -> Self {
        Self {
            reserved_max: RESERVED_MAX,
            weapon_limits: WeaponLimits::default(),
        }
    }
}

impl WorldConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, EntityError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the config describes a usable world.
    pub fn validate(&self) -> Result<(), EntityError> {
        if self.reserved_max == 0 || self.reserved_max > i64::MAX as u64 {
            return Err(EntityError::InvalidReservedMax {
                reserved_max: self.reserved_max,
            });
        }
        for (field, range) in self.weapon_limits.named_ranges() {
            if !range.is_well_formed() {
                return Err(EntityError::InvalidAttributeRange {
                    field,
                    min: range.min,
                    max: range.max,
                    fallback: range.fallback,
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::AttributeRange;

    #[test]
    fn default_config_is_valid() {
        let config = WorldConfig::default();
        assert_eq!(config.reserved_max, 1_000_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_reserved_max_rejected() {
        let config = WorldConfig {
            reserved_max: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EntityError::InvalidReservedMax { reserved_max: 0 })
        ));
    }

    #[test]
    fn reserved_max_leaving_no_runtime_ids_rejected() {
        let config = WorldConfig {
            reserved_max: u64::MAX,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn reserved_max_past_requestable_ids_rejected() {
        let at_bound = WorldConfig {
            reserved_max: i64::MAX as u64,
            ..Default::default()
        };
        assert!(at_bound.validate().is_ok());

        for reserved_max in [i64::MAX as u64 + 1, u64::MAX - 1] {
            let config = WorldConfig {
                reserved_max,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(EntityError::InvalidReservedMax { .. })
            ));
        }
    }

    #[test]
    fn fallback_outside_range_rejected() {
        let mut config = WorldConfig::default();
        config.weapon_limits.max_range = AttributeRange::new(0, 50, 60);
        match config.validate() {
            Err(EntityError::InvalidAttributeRange { field, .. }) => {
                assert_eq!(field, "max_range")
            }
            other => panic!("expected InvalidAttributeRange, got {other:?}"),
        }
    }

    #[test]
    fn json_with_partial_fields_uses_defaults() {
        let config = WorldConfig::from_json_str(
            r#"{"weapon_limits": {"max_range": {"min": 0, "max": 80, "fallback": 2}}}"#,
        )
        .unwrap();
        assert_eq!(config.reserved_max, 1_000_000);
        assert_eq!(config.weapon_limits.max_range.max, 80);
        assert_eq!(config.weapon_limits.min_range.max, 50);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            WorldConfig::from_json_str("{ not json"),
            Err(EntityError::ConfigParse(_))
        ));
    }

    #[test]
    fn json_roundtrip() {
        let config = WorldConfig {
            reserved_max: 500,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(WorldConfig::from_json_str(&json).unwrap(), config);
    }
}
