// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use tracing::debug;

use crate::ident::BodyId;

/// Ordered set of physics-active bodies.
///
/// The registry holds handles only; the world owns the colliders. Order is
/// registration order and drives the pairwise scan, so re-registering a body
/// moves it to the back.
#[derive(Debug, Clone, Default)]
pub struct ColliderRegistry {
    order: Vec<BodyId>,
}

impl ColliderRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` at the end. Returns `false` (and changes nothing) if it is
    /// already registered.
    pub fn register(&mut self, id: BodyId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.order.push(id);
        debug!(body = %id, count = self.order.len(), "collider registered");
        true
    }

    /// Removes `id`. Returns `false` if it was not registered.
    pub fn deregister(&mut self, id: BodyId) -> bool {
        let Some(pos) = self.order.iter().position(|&x| x == id) else {
            return false;
        };
        self.order.remove(pos);
        debug!(body = %id, count = self.order.len(), "collider deregistered");
        true
    }

    /// `true` if `id` is registered.
    pub fn contains(&self, id: BodyId) -> bool {
        self.order.contains(&id)
    }

    /// Number of registered bodies.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Registered handles in registration order.
    pub fn iter(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.order.iter().copied()
    }

    /// Copy of the current order; the pairwise scan walks this so removals
    /// during the scan cannot shift indices underneath it.
    pub(crate) fn snapshot(&self) -> Vec<BodyId> {
        self.order.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_deregister_are_idempotent() {
        let mut reg = ColliderRegistry::new();
        let a = BodyId::new(0, 0);
        assert!(reg.register(a));
        assert!(!reg.register(a));
        assert_eq!(reg.len(), 1);
        assert!(reg.deregister(a));
        assert!(!reg.deregister(a));
        assert!(reg.is_empty());
    }

    #[test]
    fn order_follows_registration() {
        let mut reg = ColliderRegistry::new();
        let ids: Vec<_> = (0..4).map(|i| BodyId::new(3 - i, 0)).collect();
        for &id in &ids {
            reg.register(id);
        }
        assert_eq!(reg.iter().collect::<Vec<_>>(), ids);
        reg.deregister(ids[1]);
        reg.register(ids[1]);
        assert_eq!(reg.iter().last(), Some(ids[1]));
    }
}
