//! Layout strategies: turn ordered groups into target positions.
//!
//! Two interchangeable policies exist behind [`LayoutStrategy`]:
//! [`SingleAxis`] spreads rarity groups along the facing vector, and
//! [`TwoAxis`] additionally offsets category sub-groups along the
//! perpendicular. Both are pure functions of the classified batch and a
//! [`LayoutFrame`]; neither reads or mutates any state outside its inputs.

use indexmap::IndexMap;

use crate::classify::Classified;
use crate::config::SortMode;
use crate::group::{group_by_rarity, group_by_rarity_and_category};
use crate::vector::Vec3;
use crate::world::ItemId;

/// The spatial inputs of one layout computation.
#[derive(Debug, Clone, Copy)]
pub struct LayoutFrame {
    /// Player position, the origin of the layout.
    pub player: Vec3,
    /// Unit facing vector.
    pub forward: Vec3,
    /// Distance between adjacent group anchors (validated > 0).
    pub spacing: f64,
    /// Force every position onto the player's horizontal plane.
    pub flatten: bool,
    /// Per-group vertical nudge for the single-axis layout; 0 disables.
    pub lift_step: f64,
}

impl LayoutFrame {
    /// Flatten is applied per item, after the positional formula.
    fn finish(&self, mut position: Vec3) -> Vec3 {
        if self.flatten {
            position.z = self.player.z;
        }
        position
    }
}

/// A policy computing one target position per classified item.
pub trait LayoutStrategy {
    fn layout(&self, items: &[Classified], frame: &LayoutFrame) -> IndexMap<ItemId, Vec3>;
}

/// Returns the strategy implementing the given sort mode.
pub fn strategy_for(mode: SortMode) -> &'static dyn LayoutStrategy {
    match mode {
        SortMode::Rarity => &SingleAxis,
        SortMode::RarityCategory => &TwoAxis,
    }
}

/// Rarity-only layout: the group at order-index `i` sits at
/// `player + forward * (spacing * i)`, so the lowest rank lands on the
/// player's own position plane. All items of a group share the point;
/// `lift_step` raises each successive group to cut down visual overlap.
pub struct SingleAxis;

impl LayoutStrategy for SingleAxis {
    fn layout(&self, items: &[Classified], frame: &LayoutFrame) -> IndexMap<ItemId, Vec3> {
        let mut positions = IndexMap::new();
        for (i, group) in group_by_rarity(items).iter().enumerate() {
            let step = frame.spacing * i as f64;
            let mut point = frame.player + frame.forward * step;
            point.z += frame.lift_step * i as f64;
            let point = frame.finish(point);
            for &id in &group.items {
                positions.insert(id, point);
            }
        }
        positions
    }
}

/// Rarity-and-category layout: rarity groups march along the facing vector
/// starting one spacing step ahead of the player (the forward anchor), and
/// category sub-groups fan out along the perpendicular (facing rotated 90°
/// about the vertical axis).
pub struct TwoAxis;

impl LayoutStrategy for TwoAxis {
    fn layout(&self, items: &[Classified], frame: &LayoutFrame) -> IndexMap<ItemId, Vec3> {
        let forward_anchor = frame.player + frame.forward * frame.spacing;
        let perpendicular = frame.forward.rotate_z(90.0);

        let mut positions = IndexMap::new();
        for (i, group) in group_by_rarity_and_category(items).iter().enumerate() {
            let anchor = forward_anchor + frame.forward * (frame.spacing * i as f64);
            for (j, sub) in group.categories.iter().enumerate() {
                let point = frame.finish(anchor + perpendicular * (frame.spacing * j as f64));
                for &id in &sub.items {
                    positions.insert(id, point);
                }
            }
        }
        positions
    }
}
