// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use serde::{Deserialize, Serialize};

use crate::error::PhysicsError;

/// Tunables for a [`crate::PhysicsWorld`].
///
/// Serialized as JSON under [`PhysicsConfig::STORE_KEY`]. Missing fields fall
/// back to [`PhysicsConfig::default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Vertical acceleration applied to bodies with gravity enabled (m/s²).
    pub gravity: f32,
    /// Timestep used by callers that drive the world at a fixed rate.
    pub fixed_dt: f32,
    /// Bounciness given to dynamic bodies that do not set their own.
    pub default_bounciness: f32,
    /// Rest speed given to dynamic bodies that do not set their own.
    pub default_restitution_threshold: f32,
    /// Gap left above the ground after a bounce that is still moving.
    pub ground_clearance: f32,
    /// Share of the reflected relative velocity exchanged between two crates.
    pub crate_impulse_fraction: f32,
    /// Bodies whose position drops below this height are removed.
    pub world_floor: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: -9.81,
            fixed_dt: 1.0 / 60.0,
            default_bounciness: 0.5,
            default_restitution_threshold: 0.5,
            ground_clearance: 0.01,
            crate_impulse_fraction: 0.1,
            world_floor: -50.0,
        }
    }
}

impl PhysicsConfig {
    /// Key used when persisting through a config store.
    pub const STORE_KEY: &'static str = "physics";

    /// Checks every field is finite and in range.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        let finite = [
            self.gravity,
            self.fixed_dt,
            self.default_bounciness,
            self.default_restitution_threshold,
            self.ground_clearance,
            self.crate_impulse_fraction,
            self.world_floor,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(PhysicsError::InvalidConfig("all fields must be finite"));
        }
        if self.fixed_dt <= 0.0 {
            return Err(PhysicsError::InvalidConfig("fixed_dt must be positive"));
        }
        if self.default_bounciness < 0.0 {
            return Err(PhysicsError::InvalidConfig(
                "default_bounciness must be non-negative",
            ));
        }
        if self.default_restitution_threshold < 0.0 {
            return Err(PhysicsError::InvalidConfig(
                "default_restitution_threshold must be non-negative",
            ));
        }
        if self.ground_clearance < 0.0 {
            return Err(PhysicsError::InvalidConfig(
                "ground_clearance must be non-negative",
            ));
        }
        if !(0.0..=1.0).contains(&self.crate_impulse_fraction) {
            return Err(PhysicsError::InvalidConfig(
                "crate_impulse_fraction must lie in [0, 1]",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(PhysicsConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_timestep() {
        let cfg = PhysicsConfig {
            fixed_dt: 0.0,
            ..PhysicsConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(PhysicsError::InvalidConfig(_))));
        let cfg = PhysicsConfig {
            fixed_dt: f32::NAN,
            ..PhysicsConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: PhysicsConfig = serde_json::from_str(r#"{ "gravity": -3.7 }"#).unwrap();
        assert_eq!(cfg.gravity, -3.7);
        assert_eq!(cfg.world_floor, -50.0);
    }
}
