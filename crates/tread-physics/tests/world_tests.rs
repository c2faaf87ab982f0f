// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]
use tread_app_core::config::ConfigService;
use tread_core::math::{Degrees, Quat, Vec3};
use tread_dry_tests::InMemoryConfigStore;
use tread_physics::{BodyDesc, PhysicsConfig, PhysicsError, PhysicsWorld, ShapeKind};

#[test]
fn registration_is_idempotent_and_ordered() {
    let mut world = PhysicsWorld::default();
    let a = world.spawn(BodyDesc::sphere(1.0)).unwrap();
    let b = world.spawn(BodyDesc::sphere(1.0).disabled()).unwrap();
    assert_eq!(world.registry().len(), 1);

    assert!(world.set_enabled(b, true).unwrap());
    assert!(!world.set_enabled(b, true).unwrap(), "second register is a no-op");
    assert_eq!(world.registry().iter().collect::<Vec<_>>(), vec![a, b]);

    assert!(world.set_enabled(a, false).unwrap());
    assert!(!world.set_enabled(a, false).unwrap());
    assert!(world.set_enabled(a, true).unwrap());
    // Re-registering appends.
    assert_eq!(world.registry().iter().collect::<Vec<_>>(), vec![b, a]);
    assert_eq!(world.len(), 2);
}

#[test]
fn despawned_ids_go_stale() {
    let mut world = PhysicsWorld::default();
    let old = world.spawn(BodyDesc::sphere(1.0).labeled("old")).unwrap();
    let body = world.despawn(old).unwrap();
    assert_eq!(body.label(), "old");

    let fresh = world.spawn(BodyDesc::sphere(1.0)).unwrap();
    assert_eq!(fresh.index(), old.index(), "slot is reused");
    assert_ne!(fresh, old);
    assert!(world.body(old).is_none());
    assert_eq!(world.position(old), Err(PhysicsError::UnknownBody(old)));
    assert!(matches!(world.despawn(old), Err(PhysicsError::UnknownBody(_))));
    assert!(matches!(
        world.set_enabled(old, true),
        Err(PhysicsError::UnknownBody(_))
    ));
}

#[test]
fn static_bodies_reject_velocity_control() {
    let mut world = PhysicsWorld::default();
    let rock = world.spawn(BodyDesc::sphere(1.0)).unwrap();
    assert_eq!(world.velocity(rock).unwrap(), Vec3::ZERO);
    assert_eq!(
        world.apply_impulse(rock, Vec3::UNIT_X),
        Err(PhysicsError::NotDynamic(rock))
    );
    assert_eq!(
        world.set_velocity(rock, Vec3::UNIT_X),
        Err(PhysicsError::NotDynamic(rock))
    );
    // Teleporting works for either kind.
    world.set_position(rock, Vec3::new(1.0, 2.0, 3.0)).unwrap();
    assert_eq!(world.bounds(rock).unwrap().center(), Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn invalid_shapes_are_rejected_at_spawn() {
    let mut world = PhysicsWorld::default();
    assert!(matches!(
        world.spawn(BodyDesc::sphere(-1.0)),
        Err(PhysicsError::InvalidShape(_))
    ));
    assert!(matches!(
        world.spawn(BodyDesc::cuboid(Vec3::new(1.0, f32::NAN, 1.0))),
        Err(PhysicsError::InvalidShape(_))
    ));
    assert!(matches!(
        world.spawn(BodyDesc::sphere(1.0).at(Vec3::splat(f32::INFINITY))),
        Err(PhysicsError::InvalidShape(_))
    ));
    assert!(world.is_empty());
}

#[test]
fn transform_projects_physics_state() {
    let mut world = PhysicsWorld::default();
    let turn = Quat::from_yaw(Degrees(90.0));
    let tank = world
        .spawn(
            BodyDesc::player(1.0)
                .at(Vec3::new(3.0, 0.0, -2.0))
                .rotated(turn)
                .scaled(Vec3::splat(2.0)),
        )
        .unwrap();
    let t = world.transform(tank).unwrap();
    assert_eq!(t.translation(), Vec3::new(3.0, 0.0, -2.0));
    assert_eq!(t.scale(), Vec3::splat(2.0));
    // Radius scales with the largest scale component; rotation leaves it alone.
    let body = world.body(tank).unwrap();
    assert!((body.collider().radius() - 2.0).abs() < 1e-5);

    world.set_rotation(tank, Quat::identity()).unwrap();
    assert_eq!(world.transform(tank).unwrap().rotation(), Quat::identity());
}

#[test]
fn scaled_box_bounds_follow_scale() {
    let mut world = PhysicsWorld::default();
    let slab = world
        .spawn(
            BodyDesc::new(ShapeKind::Box {
                size: Vec3::new(1.0, 2.0, 3.0),
            })
            .scaled(Vec3::new(2.0, 1.0, 0.5)),
        )
        .unwrap();
    let size = world.bounds(slab).unwrap().size();
    assert!((size - Vec3::new(2.0, 2.0, 1.5)).length() < 1e-5);
}

#[test]
fn worlds_are_independent() {
    let mut a = PhysicsWorld::default();
    let b = PhysicsWorld::default();
    a.spawn(BodyDesc::sphere(1.0)).unwrap();
    assert_eq!(a.len(), 1);
    assert!(b.is_empty());
}

#[test]
fn config_round_trips_through_a_store() {
    let store = InMemoryConfigStore::new();
    let service = ConfigService::new(store.clone());
    let moon = PhysicsConfig {
        gravity: -1.62,
        ..PhysicsConfig::default()
    };
    service.save(PhysicsConfig::STORE_KEY, &moon).unwrap();

    let loaded: PhysicsConfig = service
        .load_or_default(PhysicsConfig::STORE_KEY)
        .unwrap();
    loaded.validate().unwrap();
    assert_eq!(loaded, moon);
    assert_eq!(store.save_count(), 1);
    assert_eq!(store.load_count(), 1);

    let world = PhysicsWorld::new(loaded);
    assert_eq!(world.config().gravity, -1.62);
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let service = ConfigService::new(InMemoryConfigStore::new());
    let cfg: PhysicsConfig = service.load_or_default(PhysicsConfig::STORE_KEY).unwrap();
    assert_eq!(cfg, PhysicsConfig::default());
}

#[test]
fn stored_config_is_validated_after_loading() {
    let store = InMemoryConfigStore::with_entry(PhysicsConfig::STORE_KEY, r#"{"fixed_dt": 0.0}"#);
    let service = ConfigService::new(store);
    let cfg: PhysicsConfig = service.load_or_default(PhysicsConfig::STORE_KEY).unwrap();
    assert_eq!(cfg.gravity, -9.81, "unset fields take defaults");
    assert!(matches!(cfg.validate(), Err(PhysicsError::InvalidConfig(_))));
}

#[test]
fn scene_description_deserializes_from_json() {
    let json = r#"[
        {"label": "floor", "shape": {"kind": "box", "size": [10.0, 1.0, 10.0]},
         "roles": {"ground": true, "wall": false, "trigger": false}},
        {"label": "ball", "shape": {"kind": "sphere", "radius": 0.25},
         "position": [0.0, 3.0, 0.0], "dynamic": true}
    ]"#;
    let descs: Vec<BodyDesc> = serde_json::from_str(json).unwrap();
    let mut world = PhysicsWorld::default();
    for desc in descs {
        world.spawn(desc).unwrap();
    }
    let ball = world.bodies().find(|b| b.label() == "ball").unwrap();
    assert!(ball.is_dynamic());
    assert_eq!(ball.position().y(), 3.0);
}
