// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Recording contact hooks.

use tread_physics::{BodyId, ContactEvent, ContactHooks, PlayerResponse};

/// [`ContactHooks`] fake that answers every player contact with a fixed
/// response and records what the world reported.
#[derive(Debug, Clone, Default)]
pub struct RecordingHooks {
    /// Answer given to every `on_player_contact` call.
    pub response: PlayerResponse,
    /// `(player, other)` pairs passed to `on_player_contact`, in call order.
    pub player_contacts: Vec<(BodyId, BodyId)>,
    /// Events delivered through `on_event`, in delivery order.
    pub events: Vec<ContactEvent>,
}

impl RecordingHooks {
    /// Hooks that repel on player contact.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hooks that answer every player contact with `response`.
    pub fn responding(response: PlayerResponse) -> Self {
        Self {
            response,
            ..Self::default()
        }
    }
}

impl ContactHooks for RecordingHooks {
    fn on_player_contact(&mut self, player: BodyId, other: BodyId) -> PlayerResponse {
        self.player_contacts.push((player, other));
        self.response
    }

    fn on_event(&mut self, event: &ContactEvent) {
        self.events.push(*event);
    }
}
