// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Geometry primitives for Tread.

This crate provides:
- Axis-aligned bounding volumes described by center and size (`Bounds`).
- Transforms with non-uniform scale (`Transform`).
- Rays and bounded segments with analytic sphere and slab-method box tests.

Design notes:
- Containment and overlap are inclusive on faces so resting contacts do not
  flicker between steps.
- Float32 throughout; every composed transform goes through `tread_core`'s
  matrix pipeline.
"]
#![forbid(unsafe_code)]

/// Rays and segments.
pub mod ray;
/// Foundational geometric types.
pub mod types;

pub use ray::{Ray, Segment};
pub use types::bounds::Bounds;
pub use types::transform::Transform;
