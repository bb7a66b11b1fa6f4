//! Remote Players
//!
//! Other players in the match, tracked for display only. Positions come from
//! the server as-is; no interpolation or prediction.

use std::collections::HashMap;

use crate::physics::Vec3;

use super::protocol::{Camp, PlayerInfo};

#[derive(Debug, Clone, PartialEq)]
pub struct Peer {
    pub id: String,
    pub camp: Camp,
    pub position: Vec3,
}

/// All remote players, keyed by server id.
#[derive(Debug, Clone, Default)]
pub struct PeerRegistry {
    peers: HashMap<String, Peer>,
}

impl PeerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a peer, replacing any previous entry with the same id.
    pub fn spawn(&mut self, id: impl Into<String>, camp: Camp, position: Vec3) {
        let id = id.into();
        self.peers.insert(id.clone(), Peer { id, camp, position });
    }

    /// Spawn everyone in an `initPlayer` roster except the local player.
    /// Returns how many peers were spawned.
    pub fn spawn_roster(&mut self, local_id: &str, roster: &[PlayerInfo]) -> usize {
        let mut spawned = 0;
        for info in roster.iter().filter(|p| p.id != local_id) {
            self.spawn(info.id.clone(), info.camp, info.position.into());
            spawned += 1;
        }
        spawned
    }

    /// Move a known peer. Updates for unknown ids are ignored.
    pub fn apply_update(&mut self, id: &str, position: Vec3) -> bool {
        match self.peers.get_mut(id) {
            Some(peer) => {
                peer.position = position;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Peer> {
        self.peers.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&Peer> {
        self.peers.get(id)
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Peer> {
        self.peers.values()
    }
}
