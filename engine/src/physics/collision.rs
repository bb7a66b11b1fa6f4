//! Collision detection module
//!
//! Static buildings are axis-aligned boxes. The local player is a unit cube
//! whose base sits at the player's position. All queries scan the volume set
//! linearly in insertion order and return the FIRST match, not the nearest.
//!
//! # Example
//!
//! ```ignore
//! use galaxy_war_engine::physics::collision::{Aabb, CollisionVolume, CollisionWorld, PLAYER_BOX_EXTENT};
//! use glam::Vec3;
//!
//! let world = CollisionWorld::new(vec![
//!     CollisionVolume::building(3.0, 0.0, 2.0, 2.0, 4.0, -1.0),
//! ]);
//!
//! let player = Aabb::player_box(Vec3::new(2.5, -0.5, 0.0), PLAYER_BOX_EXTENT);
//! if let Some(volume) = world.first_intersecting(&player) {
//!     println!("blocked by building with top at {}", volume.top());
//! }
//! ```

use super::types::Vec3;

/// Size of the local player's collision box (width, height, depth).
pub const PLAYER_BOX_EXTENT: Vec3 = Vec3::ONE;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box of the given extent, centered on `base` in X/Z, with its bottom face at `base.y`.
    pub fn player_box(base: Vec3, extent: Vec3) -> Self {
        let half_x = extent.x * 0.5;
        let half_z = extent.z * 0.5;
        Self {
            min: Vec3::new(base.x - half_x, base.y, base.z - half_z),
            max: Vec3::new(base.x + half_x, base.y + extent.y, base.z + half_z),
        }
    }

    /// Strict overlap on all three axes. Boxes that only touch do not intersect,
    /// which is what lets a player stand exactly on a roof and walk across it.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }

    /// Strict overlap of the X/Z footprints only.
    pub fn overlaps_xz(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }
}

/// A static building the player can bump into or stand on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionVolume {
    pub bounds: Aabb,
}

impl CollisionVolume {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            bounds: Aabb::new(min, max),
        }
    }

    /// A box-shaped building standing on the floor.
    ///
    /// # Arguments
    /// * `center_x`, `center_z` - Footprint center
    /// * `width`, `depth` - Footprint size along X and Z
    /// * `height` - Height above the floor
    /// * `floor_y` - Y coordinate of the floor plane
    pub fn building(
        center_x: f32,
        center_z: f32,
        width: f32,
        depth: f32,
        height: f32,
        floor_y: f32,
    ) -> Self {
        Self::new(
            Vec3::new(center_x - width * 0.5, floor_y, center_z - depth * 0.5),
            Vec3::new(center_x + width * 0.5, floor_y + height, center_z + depth * 0.5),
        )
    }

    /// Y of the roof.
    #[inline]
    pub fn top(&self) -> f32 {
        self.bounds.max.y
    }
}

/// The set of buildings for one match, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct CollisionWorld {
    volumes: Vec<CollisionVolume>,
}

impl CollisionWorld {
    pub fn new(volumes: Vec<CollisionVolume>) -> Self {
        Self { volumes }
    }

    /// Append a volume. It will be tested after every volume already present.
    pub fn push(&mut self, volume: CollisionVolume) {
        self.volumes.push(volume);
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CollisionVolume> {
        self.volumes.iter()
    }

    pub fn volumes(&self) -> &[CollisionVolume] {
        &self.volumes
    }

    /// First volume (in insertion order) that intersects `player`.
    pub fn first_intersecting(&self, player: &Aabb) -> Option<&CollisionVolume> {
        self.volumes.iter().find(|v| v.bounds.intersects(player))
    }

    /// First volume whose roof the player crossed while moving from `prev_y` down to `new_y`.
    ///
    /// The player must start no lower than `top - tolerance` and end at or below the roof,
    /// with its footprint overlapping the roof. Callers only ask while descending.
    pub fn landing_surface(
        &self,
        footprint: &Aabb,
        prev_y: f32,
        new_y: f32,
        tolerance: f32,
    ) -> Option<&CollisionVolume> {
        self.volumes.iter().find(|v| {
            let top = v.top();
            v.bounds.overlaps_xz(footprint) && prev_y >= top - tolerance && new_y <= top
        })
    }

    /// First volume the player is standing on: footprint over the roof and `y` within
    /// `tolerance` of it.
    pub fn supporting(&self, footprint: &Aabb, y: f32, tolerance: f32) -> Option<&CollisionVolume> {
        self.volumes
            .iter()
            .find(|v| v.bounds.overlaps_xz(footprint) && (y - v.top()).abs() <= tolerance)
    }
}

impl FromIterator<CollisionVolume> for CollisionWorld {
    fn from_iter<I: IntoIterator<Item = CollisionVolume>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
