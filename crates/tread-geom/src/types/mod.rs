// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types used by the physics layer (bounds, transform).
//!
//! Bounds are a transient cache: colliders recompute them from their owner's
//! transform every step and never edit them by hand.

#[doc = "Axis-aligned bounding volumes (world space)."]
pub mod bounds;
#[doc = "Transforms with non-uniform scale."]
pub mod transform;
