use serde::{Deserialize, Serialize};

use crate::vector::{Vec3, direction_from_yaw_pitch};

/// Stable handle identifying a world object within one invocation.
///
/// The core only ever compares handles, never item contents.
pub type ItemId = u64;

/// Error raised by a failed category lookup on a pickup.
///
/// This never escapes the classifier: a failed lookup collapses to the
/// "Unknown" category (see `classify`).
#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("no category data for item {0}")]
    Missing(ItemId),
    #[error("category lookup failed for item {0}: {1}")]
    Lookup(ItemId, String),
}

/// A lootable world object as seen by the layout core.
///
/// `position()` is the object's location at batch start; the driver keeps
/// it only as a fallback target and never reads it during layout.
pub trait Pickup {
    fn id(&self) -> ItemId;
    fn class_name(&self) -> &str;
    /// Rarity sort value, when the object carries rarity data.
    fn rarity_sort(&self) -> Option<i32>;
    /// Category label. The accessor may fail; callers decide the fallback.
    fn category(&self) -> Result<String, CategoryError>;
    fn position(&self) -> Vec3;
}

/// Legacy fixed-point rotator scale: 32768 units per half turn.
const ROTATOR_UNITS_PER_HALF_TURN: f64 = 32768.0;

/// The player's position and facing at invocation time.
///
/// Orientation is stored in degrees. Hosts supplying the legacy fixed-point
/// rotator unit convert once via [`PlayerPose::from_rotator_units`]; nothing
/// downstream of this type handles any other angular unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerPose {
    pub position: Vec3,
    pub yaw_deg: f64,
    pub pitch_deg: f64,
}

impl PlayerPose {
    pub fn new(position: Vec3, yaw_deg: f64, pitch_deg: f64) -> Self {
        PlayerPose {
            position,
            yaw_deg,
            pitch_deg,
        }
    }

    /// Builds a pose from the legacy fixed-point rotator unit
    /// (32768 units = 180 degrees).
    pub fn from_rotator_units(position: Vec3, pitch_units: i32, yaw_units: i32) -> Self {
        let to_deg = 180.0 / ROTATOR_UNITS_PER_HALF_TURN;
        PlayerPose {
            position,
            yaw_deg: yaw_units as f64 * to_deg,
            pitch_deg: pitch_units as f64 * to_deg,
        }
    }

    /// Unit facing vector derived from yaw and pitch.
    pub fn facing(&self) -> Vec3 {
        direction_from_yaw_pitch(self.yaw_deg, self.pitch_deg)
    }
}

/// Read side of the host boundary: the current player pose and the set of
/// lootable objects present in the world.
pub trait WorldQuery {
    type Item: Pickup;

    /// Pose of the triggering actor, or `None` when absent (a no-op for
    /// the driver, not an error).
    fn player_pose(&self) -> Option<PlayerPose>;

    /// Snapshot of all currently present lootable objects.
    fn pickups(&self) -> Vec<Self::Item>;
}

/// Write side of the host boundary: moves one object to a target position.
///
/// Orientation is preserved by the host; the core only ever changes
/// position. Calls are assumed idempotent and always-succeeding.
pub trait Relocate {
    fn relocate(&mut self, id: ItemId, target: Vec3);
}

/// An in-memory pickup for tests and reference use.
#[derive(Debug, Clone)]
pub struct MemoryPickup {
    pub id: ItemId,
    pub class_name: String,
    pub rarity_sort: Option<i32>,
    /// `None` makes `category()` fail, modeling a broken host accessor.
    pub category: Option<String>,
    pub position: Vec3,
}

impl MemoryPickup {
    pub fn new(id: ItemId, class_name: &str) -> Self {
        MemoryPickup {
            id,
            class_name: class_name.to_string(),
            rarity_sort: None,
            category: None,
            position: Vec3::ZERO,
        }
    }

    pub fn rarity(mut self, rarity: i32) -> Self {
        self.rarity_sort = Some(rarity);
        self
    }

    pub fn with_category(mut self, label: &str) -> Self {
        self.category = Some(label.to_string());
        self
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }
}

impl Pickup for MemoryPickup {
    fn id(&self) -> ItemId {
        self.id
    }

    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn rarity_sort(&self) -> Option<i32> {
        self.rarity_sort
    }

    fn category(&self) -> Result<String, CategoryError> {
        self.category
            .clone()
            .ok_or(CategoryError::Missing(self.id))
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}

/// An in-memory world backed by a pose and a pickup list.
///
/// Useful for testing and as a reference implementation.
#[derive(Debug, Default)]
pub struct MemoryWorld {
    pub pose: Option<PlayerPose>,
    pub items: Vec<MemoryPickup>,
}

impl MemoryWorld {
    pub fn new(pose: PlayerPose) -> Self {
        MemoryWorld {
            pose: Some(pose),
            items: Vec::new(),
        }
    }

    /// A world with no triggering actor.
    pub fn empty() -> Self {
        MemoryWorld::default()
    }

    pub fn with_item(mut self, item: MemoryPickup) -> Self {
        self.items.push(item);
        self
    }
}

impl WorldQuery for MemoryWorld {
    type Item = MemoryPickup;

    fn player_pose(&self) -> Option<PlayerPose> {
        self.pose
    }

    fn pickups(&self) -> Vec<MemoryPickup> {
        self.items.clone()
    }
}

/// A relocator that records every move it is asked to perform.
#[derive(Debug, Default)]
pub struct RecordingRelocator {
    pub moves: Vec<(ItemId, Vec3)>,
}

impl RecordingRelocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last recorded target for an item, if any.
    pub fn target_of(&self, id: ItemId) -> Option<Vec3> {
        self.moves
            .iter()
            .rev()
            .find(|(moved, _)| *moved == id)
            .map(|(_, target)| *target)
    }
}

impl Relocate for RecordingRelocator {
    fn relocate(&mut self, id: ItemId, target: Vec3) {
        self.moves.push((id, target));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotator_units_convert_to_degrees() {
        let pose = PlayerPose::from_rotator_units(Vec3::ZERO, 0, 32768);
        assert_eq!(pose.yaw_deg, 180.0);
        assert_eq!(pose.pitch_deg, 0.0);

        let pose = PlayerPose::from_rotator_units(Vec3::ZERO, 16384, -16384);
        assert_eq!(pose.pitch_deg, 90.0);
        assert_eq!(pose.yaw_deg, -90.0);
    }

    #[test]
    fn facing_follows_yaw() {
        let pose = PlayerPose::new(Vec3::ZERO, 0.0, 0.0);
        let f = pose.facing();
        assert!((f.x - 1.0).abs() < 1e-12);
        assert!(f.y.abs() < 1e-12);
        assert!(f.z.abs() < 1e-12);
    }

    #[test]
    fn memory_pickup_category_failure() {
        let item = MemoryPickup::new(7, "Ammo");
        assert!(item.category().is_err());

        let item = item.with_category("Grenade");
        assert_eq!(item.category().unwrap(), "Grenade");
    }

    #[test]
    fn recording_relocator_tracks_moves() {
        let mut relocator = RecordingRelocator::new();
        relocator.relocate(1, Vec3::new(1.0, 0.0, 0.0));
        relocator.relocate(2, Vec3::new(2.0, 0.0, 0.0));

        assert_eq!(relocator.moves.len(), 2);
        assert_eq!(relocator.target_of(2), Some(Vec3::new(2.0, 0.0, 0.0)));
        assert_eq!(relocator.target_of(9), None);
    }
}
