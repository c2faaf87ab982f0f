// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! tread-core: the linear-algebra kernel behind Tread's physics.
//!
//! Every transform in the engine flows through the types exported here:
//! [`math::Vec3`] for positions and directions, [`math::Matrix`] for
//! composing translations, scales and rotations, and [`math::Quat`] for
//! orientation. Angle units are carried in the type system via
//! [`math::Degrees`] and [`math::Radians`].
#![forbid(unsafe_code)]

pub mod error;
pub mod math;

pub use error::MathError;
