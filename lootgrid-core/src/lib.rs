//! Lootgrid computes deterministic target positions for a pile of lootable
//! world objects, arranging them into visually separated groups in front of
//! the player.
//!
//! Core concepts:
//! - **Pickup**: a lootable world object behind an opaque handle
//! - **ClassificationKey**: rarity rank plus category label, derived
//!   best-effort (missing data falls back to rank 0 / "Unknown")
//! - **Grouping engine**: buckets classified pickups ascending by rarity,
//!   optionally sub-bucketed by category in first-seen order
//! - **LayoutStrategy**: single-axis (rarity along the facing vector) or
//!   two-axis (category along the perpendicular), selected by configuration
//! - **Placement driver**: filters, classifies, lays out, and hands the
//!   complete item→position mapping to the host's relocator
//!
//! The core is pure and synchronous: hosts supply the world through the
//! [`WorldQuery`] trait and apply moves through [`Relocate`]. All angles
//! cross the boundary in degrees; [`PlayerPose::from_rotator_units`]
//! converts the legacy fixed-point rotator unit.
//!
//! # Example
//!
//! ```
//! use lootgrid_core::{MemoryPickup, PlacementConfig, PlayerPose, Vec3, place};
//!
//! let pose = PlayerPose::new(Vec3::ZERO, 0.0, 0.0);
//! let items = vec![
//!     MemoryPickup::new(1, "BPPickup_Gun").rarity(0).with_category("Gun"),
//!     MemoryPickup::new(2, "BPPickup_Shield").rarity(1).with_category("Shield"),
//! ];
//!
//! let positions = place(&items, &pose, &PlacementConfig::default());
//! assert_eq!(positions[&1], Vec3::ZERO);
//! assert_eq!(positions[&2], Vec3::new(75.0, 0.0, 0.0));
//! ```

mod classify;
mod config;
mod driver;
mod group;
mod layout;
mod vector;
mod world;

pub use classify::{ClassificationKey, Classified, DEFAULT_RARITY, UNKNOWN_CATEGORY, classify};
pub use config::{ConfigError, DEFAULT_SPACING, PlacementConfig, SortMode};
pub use driver::{eligible, place, run};
pub use group::{
    CategoryGroup, NestedGroup, RarityGroup, group_by_rarity, group_by_rarity_and_category,
};
pub use layout::{LayoutFrame, LayoutStrategy, SingleAxis, TwoAxis, strategy_for};
pub use vector::{Vec3, VectorError, direction_from_yaw_pitch};
pub use world::{
    CategoryError, ItemId, MemoryPickup, MemoryWorld, Pickup, PlayerPose, RecordingRelocator,
    Relocate, WorldQuery,
};
