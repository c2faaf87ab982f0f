// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Linear motion state and collision responses for dynamic bodies.

use tread_core::math::{Axis, Matrix, Vec3};
use tread_core::MathError;

/// Position, velocity and acceleration of a dynamic body, plus its response
/// parameters.
///
/// Integration is semi-implicit Euler: velocity is advanced from acceleration
/// first, then position from the updated velocity. The response methods are
/// the only other writers of position and velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidBody {
    position: Vec3,
    velocity: Vec3,
    acceleration: Vec3,
    bounciness: f32,
    restitution_threshold: f32,
    use_gravity: bool,
}

impl RigidBody {
    /// Body at rest at `position`, with gravity enabled, bounciness 0.5 and
    /// restitution threshold 0.5.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            bounciness: 0.5,
            restitution_threshold: 0.5,
            use_gravity: true,
        }
    }

    /// Sets the restitution coefficient applied to reflected velocity.
    pub fn with_bounciness(mut self, bounciness: f32) -> Self {
        self.bounciness = bounciness;
        self
    }

    /// Sets the speed below which a bounce settles to rest.
    pub fn with_restitution_threshold(mut self, threshold: f32) -> Self {
        self.restitution_threshold = threshold;
        self
    }

    /// Enables or disables gravity.
    pub fn with_gravity(mut self, enabled: bool) -> Self {
        self.use_gravity = enabled;
        self
    }

    /// Sets the initial velocity.
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Current position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current velocity.
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Acceleration applied during the last integration.
    pub fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    /// Restitution coefficient.
    pub fn bounciness(&self) -> f32 {
        self.bounciness
    }

    /// Rest speed.
    pub fn restitution_threshold(&self) -> f32 {
        self.restitution_threshold
    }

    /// Whether gravity applies.
    pub fn uses_gravity(&self) -> bool {
        self.use_gravity
    }

    /// Replaces the velocity.
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Moves the body without touching its velocity.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Adds `impulse` to the velocity.
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        self.velocity += impulse;
    }

    /// Advances the body by `dt` seconds.
    ///
    /// Acceleration is reset each step and receives `gravity` on Y when
    /// enabled. Position is composed as
    /// `extract_position(translate(v·dt) · translate(position))`.
    pub fn integrate(&mut self, dt: f32, gravity: f32) -> Result<(), MathError> {
        self.acceleration = Vec3::ZERO;
        if self.use_gravity {
            self.acceleration += Vec3::new(0.0, gravity, 0.0);
        }
        self.velocity += self.acceleration * dt;
        let step = Matrix::translation(self.velocity * dt);
        let here = Matrix::translation(self.position);
        self.position = step.multiply(&here)?.extract_position()?;
        Ok(())
    }

    /// Pushes the body out of a surface along `normal` by `penetration`.
    ///
    /// When the velocity relative to `other_velocity` (zero if `None`) points
    /// into the surface, it is reflected and scaled by bounciness, or, with
    /// zero bounciness, loses only its normal component so the body slides.
    pub fn resolve_sphere_collision(
        &mut self,
        normal: Vec3,
        penetration: f32,
        other_velocity: Option<Vec3>,
    ) {
        self.position += normal * penetration;
        let other = other_velocity.unwrap_or(Vec3::ZERO);
        let relative = self.velocity - other;
        let approach = relative.dot(&normal);
        if approach >= 0.0 {
            return;
        }
        self.velocity = if self.bounciness > 0.0 {
            other + relative.reflect(&normal) * self.bounciness
        } else {
            self.velocity - normal * approach
        };
    }

    /// Bounces off a horizontal surface at `ground_height`.
    ///
    /// The rest height is `ground_height + normal.y * half_height`. Below the
    /// restitution threshold the body stops dead at that height; otherwise it
    /// keeps the reflected velocity and is lifted `clearance` past the rest
    /// height.
    pub fn stop_on_ground(
        &mut self,
        normal: Vec3,
        ground_height: f32,
        half_height: f32,
        clearance: f32,
    ) {
        self.velocity = self.velocity.reflect(&normal) * self.bounciness;
        let rest = ground_height + normal.y() * half_height;
        if self.velocity.length() < self.restitution_threshold {
            self.velocity = Vec3::ZERO;
            self.acceleration = Vec3::ZERO;
            self.position = self.position.with_y(rest);
        } else {
            self.position = self.position.with_y(rest + normal.y() * clearance);
        }
    }

    /// Bounces off a wall whose face lies at `boundary` on `axis`, then places
    /// the body flush against it: `boundary + normal[axis] * half_extent`.
    pub fn stop_on_wall(&mut self, normal: Vec3, boundary: f32, axis: Axis, half_extent: f32) {
        self.velocity = self.velocity.reflect(&normal) * self.bounciness;
        if self.velocity.length() < self.restitution_threshold {
            self.velocity = Vec3::ZERO;
            self.acceleration = Vec3::ZERO;
        }
        let flush = boundary + normal.component(axis) * half_extent;
        self.position = self.position.with_component(axis, flush);
    }

    /// Places the body at height `rest_y` and drops any downward velocity.
    /// Horizontal velocity is kept.
    pub fn settle_at(&mut self, rest_y: f32) {
        self.position = self.position.with_y(rest_y);
        if self.velocity.y() < 0.0 {
            self.velocity = self.velocity.with_y(0.0);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn integration_is_semi_implicit() {
        let mut b = RigidBody::new(Vec3::new(0.0, 10.0, 0.0));
        b.integrate(DT, -9.81).unwrap();
        let v = -9.81 * DT;
        assert!((b.velocity().y() - v).abs() < 1e-6);
        // Position uses the updated velocity.
        assert!((b.position().y() - (10.0 + v * DT)).abs() < 1e-6);
        assert_eq!(b.acceleration().y(), -9.81);
    }

    #[test]
    fn gravity_can_be_disabled() {
        let mut b = RigidBody::new(Vec3::ZERO)
            .with_gravity(false)
            .with_velocity(Vec3::new(6.0, 0.0, 0.0));
        b.integrate(0.5, -9.81).unwrap();
        assert_eq!(b.position().to_array(), [3.0, 0.0, 0.0]);
        assert_eq!(b.acceleration(), Vec3::ZERO);
    }

    #[test]
    fn sphere_collision_reflects_with_restitution() {
        let mut b = RigidBody::new(Vec3::ZERO)
            .with_bounciness(0.5)
            .with_velocity(Vec3::new(-4.0, 0.0, 0.0));
        b.resolve_sphere_collision(Vec3::UNIT_X, 0.25, None);
        assert_eq!(b.position().x(), 0.25);
        assert_eq!(b.velocity().to_array(), [2.0, 0.0, 0.0]);
    }

    #[test]
    fn zero_bounciness_slides() {
        let mut b = RigidBody::new(Vec3::ZERO)
            .with_bounciness(0.0)
            .with_velocity(Vec3::new(-4.0, 0.0, 3.0));
        b.resolve_sphere_collision(Vec3::UNIT_X, 0.0, None);
        assert_eq!(b.velocity().to_array(), [0.0, 0.0, 3.0]);
    }

    #[test]
    fn separating_velocity_is_kept() {
        let mut b = RigidBody::new(Vec3::ZERO).with_velocity(Vec3::new(1.0, 0.0, 0.0));
        b.resolve_sphere_collision(Vec3::UNIT_X, 0.1, None);
        assert_eq!(b.velocity().x(), 1.0);
    }

    #[test]
    fn relative_velocity_decides_approach() {
        // Both moving +X, but the other body is faster: relative motion is into us.
        let mut b = RigidBody::new(Vec3::ZERO)
            .with_bounciness(1.0)
            .with_velocity(Vec3::new(1.0, 0.0, 0.0));
        b.resolve_sphere_collision(Vec3::UNIT_X, 0.0, Some(Vec3::new(3.0, 0.0, 0.0)));
        assert_eq!(b.velocity().x(), 5.0);
    }

    #[test]
    fn slow_ground_contact_settles_exactly() {
        let mut b = RigidBody::new(Vec3::new(0.0, 0.4, 0.0)).with_velocity(Vec3::new(0.0, -0.6, 0.0));
        b.stop_on_ground(Vec3::UNIT_Y, 0.0, 0.5, 0.01);
        assert_eq!(b.velocity(), Vec3::ZERO);
        assert_eq!(b.position().y(), 0.5);
    }

    #[test]
    fn fast_ground_contact_bounces_with_clearance() {
        let mut b = RigidBody::new(Vec3::new(0.0, 0.4, 0.0)).with_velocity(Vec3::new(0.0, -4.0, 0.0));
        b.stop_on_ground(Vec3::UNIT_Y, 0.0, 0.5, 0.01);
        assert_eq!(b.velocity().y(), 2.0);
        assert!((b.position().y() - 0.51).abs() < 1e-6);
    }

    #[test]
    fn wall_contact_places_body_flush() {
        let mut b = RigidBody::new(Vec3::new(4.8, 1.0, 0.0)).with_velocity(Vec3::new(3.0, 0.0, 1.0));
        b.stop_on_wall(-Vec3::UNIT_X, 5.0, Axis::X, 0.5);
        assert_eq!(b.position().x(), 4.5);
        assert_eq!(b.velocity().to_array(), [-1.5, 0.0, 0.5]);
    }

    #[test]
    fn settling_keeps_sideways_motion() {
        let mut b = RigidBody::new(Vec3::new(2.0, 0.3, 0.0)).with_velocity(Vec3::new(4.0, -1.0, -2.0));
        b.settle_at(0.5);
        assert_eq!(b.position().to_array(), [2.0, 0.5, 0.0]);
        assert_eq!(b.velocity().to_array(), [4.0, 0.0, -2.0]);

        let mut rising = RigidBody::new(Vec3::ZERO).with_velocity(Vec3::new(0.0, 3.0, 0.0));
        rising.settle_at(0.5);
        assert_eq!(rising.velocity().y(), 3.0);
    }
}
