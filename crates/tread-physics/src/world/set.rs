// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Generational slot storage for bodies.

use crate::error::PhysicsError;
use crate::ident::BodyId;
use crate::world::entity::Body;

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    body: Option<Body>,
}

impl Slot {
    fn live(&self, id: BodyId) -> Option<&Body> {
        (self.generation == id.generation())
            .then_some(self.body.as_ref())
            .flatten()
    }

    fn live_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        if self.generation == id.generation() {
            self.body.as_mut()
        } else {
            None
        }
    }
}

/// Bodies keyed by [`BodyId`]. Freed slots are reused with a bumped
/// generation so stale handles miss.
#[derive(Debug, Default)]
pub(crate) struct BodySet {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
}

impl BodySet {
    pub(crate) fn insert_with(
        &mut self,
        make: impl FnOnce(BodyId) -> Body,
    ) -> Result<BodyId, PhysicsError> {
        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                let index = u32::try_from(self.slots.len())
                    .map_err(|_| PhysicsError::CapacityExhausted)?;
                self.slots.push(Slot::default());
                index
            }
        };
        let slot = &mut self.slots[index as usize];
        let id = BodyId::new(index, slot.generation);
        slot.body = Some(make(id));
        self.len += 1;
        Ok(id)
    }

    pub(crate) fn get(&self, id: BodyId) -> Option<&Body> {
        self.slots.get(id.index() as usize)?.live(id)
    }

    pub(crate) fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.slots.get_mut(id.index() as usize)?.live_mut(id)
    }

    pub(crate) fn remove(&mut self, id: BodyId) -> Option<Body> {
        let slot = self.slots.get_mut(id.index() as usize)?;
        slot.live(id)?;
        let body = slot.body.take();
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index());
        self.len -= 1;
        body
    }

    /// Two distinct live bodies, mutably, in argument order.
    pub(crate) fn pair_mut(&mut self, a: BodyId, b: BodyId) -> Option<(&mut Body, &mut Body)> {
        let (ia, ib) = (a.index() as usize, b.index() as usize);
        if ia == ib {
            return None;
        }
        let (lo, hi) = (ia.min(ib), ia.max(ib));
        let (left, right) = self.slots.split_at_mut(hi);
        let (low_slot, high_slot) = (left.get_mut(lo)?, right.get_mut(0)?);
        if ia < ib {
            Some((low_slot.live_mut(a)?, high_slot.live_mut(b)?))
        } else {
            Some((high_slot.live_mut(a)?, low_slot.live_mut(b)?))
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Body> + '_ {
        self.slots.iter().filter_map(|s| s.body.as_ref())
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}
