// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Player/sphere handler. The physical response is chosen by the hooks.

use tread_core::math::Vec3;

use super::{ContactEvent, ContactHooks, PairRule, PlayerResponse, StepState};
use crate::world::Body;

/// Player first, sphere second. Always reports [`ContactEvent::PlayerHit`];
/// on [`PlayerResponse::Repel`] the sphere is pushed out of the player.
pub(super) fn player_sphere<H>(
    player: &mut Body,
    other: &mut Body,
    hooks: &mut H,
    state: &mut StepState,
) where
    H: ContactHooks + ?Sized,
{
    let (cp, co) = (player.collider().center(), other.collider().center());
    let overlap = player.collider().radius() + other.collider().radius() - cp.distance(&co);
    if overlap <= 0.0 {
        return;
    }
    state.contact(PairRule::PlayerSphere, player.id(), other.id());
    state.events.push(ContactEvent::PlayerHit {
        player: player.id(),
        other: other.id(),
    });

    if hooks.on_player_contact(player.id(), other.id()) == PlayerResponse::Ignore {
        return;
    }
    let normal = (co - cp).try_normalize().unwrap_or(Vec3::UNIT_Y);
    let player_velocity = player.velocity();
    let id = other.id();
    if let Some(rb) = other.rigid_body_mut() {
        rb.resolve_sphere_collision(normal, overlap, Some(player_velocity));
        state.touch(id);
    }
}
