// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Integration tests for tread-geom bounds, transforms and ray queries.

use proptest::prelude::*;
use tread_core::math::{Degrees, Quat, Vec3};
use tread_geom::{Bounds, Ray, Segment, Transform};

fn unit_box() -> Bounds {
    Bounds::new(Vec3::ZERO, Vec3::splat(2.0))
}

#[test]
fn contains_is_inclusive_on_faces() {
    let b = unit_box();
    assert!(b.contains(Vec3::new(1.0, 0.0, 0.0)));
    assert!(b.contains(Vec3::new(1.0, 1.0, 1.0)));
    assert!(!b.contains(Vec3::new(1.0001, 0.0, 0.0)));
}

#[test]
fn touching_boxes_intersect() {
    let a = unit_box();
    let touching = Bounds::new(Vec3::new(2.0, 0.0, 0.0), Vec3::splat(2.0));
    let apart = Bounds::new(Vec3::new(2.5, 0.0, 0.0), Vec3::splat(2.0));
    assert!(a.intersects(&touching));
    assert!(touching.intersects(&a));
    assert!(!a.intersects(&apart));
}

#[test]
fn closest_point_clamps_per_axis() {
    let p = unit_box().closest_point(Vec3::new(5.0, 0.5, -3.0));
    assert_eq!(p.to_array(), [1.0, 0.5, -1.0]);
}

#[test]
fn union_and_expanded_grow_bounds() {
    let a = unit_box();
    let b = Bounds::new(Vec3::new(4.0, 0.0, 0.0), Vec3::splat(2.0));
    let u = a.union(&b);
    assert_eq!(u.min().to_array(), [-1.0, -1.0, -1.0]);
    assert_eq!(u.max().to_array(), [5.0, 1.0, 1.0]);
    assert_eq!(a.expanded(0.5).size(), Vec3::splat(3.0));
}

#[test]
fn from_min_max_accepts_either_order() {
    let a = Bounds::from_min_max(Vec3::new(2.0, 2.0, 2.0), Vec3::ZERO);
    assert_eq!(a.center(), Vec3::ONE);
    assert_eq!(a.size(), Vec3::splat(2.0));
}

#[test]
fn transform_matrix_round_trips_position_and_scale() {
    let t = Transform::new(
        Vec3::new(3.0, -2.0, 7.0),
        Quat::from_yaw(Degrees(35.0)),
        Vec3::new(2.0, 1.0, 0.5),
    );
    let m = t.to_matrix().unwrap();
    let pos = m.extract_position().unwrap();
    let scale = m.extract_scale().unwrap();
    assert!(pos.distance(&t.translation()) < 1e-5);
    assert!(scale.distance(&t.scale()) < 1e-5);
}

#[test]
fn forward_follows_yaw() {
    let t = Transform::identity().with_rotation(Quat::from_yaw(Degrees(90.0)));
    assert!(t.forward().distance(&Vec3::UNIT_X) < 1e-5);
}

#[test]
fn ray_hits_sphere_near_side() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::UNIT_Z);
    let t = ray.intersect_sphere(Vec3::ZERO, 1.0, 100.0).unwrap();
    assert!((t - 4.0).abs() < 1e-5);
    assert!(ray.intersect_sphere(Vec3::ZERO, 1.0, 3.5).is_none());
}

#[test]
fn ray_inside_sphere_reports_exit() {
    let ray = Ray::new(Vec3::ZERO, Vec3::UNIT_X);
    let t = ray.intersect_sphere(Vec3::ZERO, 2.0, 100.0).unwrap();
    assert!((t - 2.0).abs() < 1e-5);
}

#[test]
fn ray_pointing_away_misses() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), -Vec3::UNIT_Z);
    assert!(ray.intersect_sphere(Vec3::ZERO, 1.0, 100.0).is_none());
    assert!(ray.intersect_bounds(&unit_box(), 100.0).is_none());
}

#[test]
fn slab_method_hits_box_face() {
    let ray = Ray::new(Vec3::new(-5.0, 0.5, 0.0), Vec3::UNIT_X);
    let t = ray.intersect_bounds(&unit_box(), 100.0).unwrap();
    assert!((t - 4.0).abs() < 1e-5);
}

#[test]
fn slab_method_rejects_parallel_ray_outside_slab() {
    let ray = Ray::new(Vec3::new(-5.0, 3.0, 0.0), Vec3::UNIT_X);
    assert!(ray.intersect_bounds(&unit_box(), 100.0).is_none());
}

#[test]
fn degenerate_direction_never_hits() {
    assert!(Ray::try_new(Vec3::ZERO, Vec3::ZERO).is_none());
    let ray = Ray::new(Vec3::ZERO, Vec3::ZERO);
    assert!(ray.intersect_sphere(Vec3::ZERO, 1.0, 10.0).is_none());
    assert!(ray.intersect_bounds(&unit_box(), 10.0).is_none());
}

#[test]
fn segment_reports_parameter_in_unit_range() {
    let seg = Segment::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -5.0, 0.0));
    let ground = Bounds::new(Vec3::new(0.0, -0.5, 0.0), Vec3::new(10.0, 1.0, 10.0));
    let t = seg.intersect_bounds(&ground).unwrap();
    assert!((t - 0.5).abs() < 1e-5);
    assert!(seg.point_at(t).distance(&Vec3::ZERO) < 1e-4);
}

#[test]
fn segment_stops_at_its_end() {
    let seg = Segment::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, -3.0));
    assert!(seg.intersect_sphere(Vec3::ZERO, 1.0).is_none());
}

#[test]
fn coincident_segment_never_hits() {
    let seg = Segment::new(Vec3::ZERO, Vec3::ZERO);
    assert!(seg.intersect_sphere(Vec3::ZERO, 1.0).is_none());
    assert!(seg.intersect_bounds(&unit_box()).is_none());
}

proptest! {
    #[test]
    fn closest_point_is_contained(x in -50.0f32..50.0, y in -50.0f32..50.0, z in -50.0f32..50.0) {
        let b = Bounds::new(Vec3::new(1.0, -2.0, 0.5), Vec3::new(3.0, 1.0, 4.0));
        prop_assert!(b.contains(b.closest_point(Vec3::new(x, y, z))));
    }

    #[test]
    fn ray_hit_lies_on_sphere(z0 in -20.0f32..-2.0, off in -0.9f32..0.9) {
        let ray = Ray::new(Vec3::new(off, 0.0, z0), Vec3::UNIT_Z);
        let t = ray.intersect_sphere(Vec3::ZERO, 1.0, 100.0).unwrap();
        prop_assert!((ray.at(t).length() - 1.0).abs() < 1e-3);
    }
}
