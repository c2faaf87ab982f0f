// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use std::f32::consts::TAU;

use crate::math::{deg_to_rad, rad_to_deg};

/// Angle measured in degrees.
///
/// Quaternion axis-angle construction takes degrees; keeping the unit in the
/// type means a radian value cannot be passed there by accident.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Degrees(pub f32);

/// Angle measured in radians.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Radians(pub f32);

/// Rotation direction for the axis rotation builders.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Winding {
    /// Right-handed rotation (the default).
    #[default]
    CounterClockwise,
    /// Clockwise rotation, implemented as `angle -> 2π - angle`.
    Clockwise,
}

impl Degrees {
    /// Raw value in degrees.
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Converts to radians.
    pub fn to_radians(self) -> Radians {
        Radians(deg_to_rad(self.0))
    }
}

impl Radians {
    /// Raw value in radians.
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Converts to degrees.
    pub fn to_degrees(self) -> Degrees {
        Degrees(rad_to_deg(self.0))
    }

    /// Mirrors the angle for clockwise winding (`2π - angle`).
    pub fn clockwise(self) -> Self {
        Self(TAU - self.0)
    }

    /// Applies `winding` to this angle.
    pub fn wound(self, winding: Winding) -> Self {
        match winding {
            Winding::CounterClockwise => self,
            Winding::Clockwise => self.clockwise(),
        }
    }
}

impl From<Degrees> for Radians {
    fn from(value: Degrees) -> Self {
        value.to_radians()
    }
}

impl From<Radians> for Degrees {
    fn from(value: Radians) -> Self {
        value.to_degrees()
    }
}
