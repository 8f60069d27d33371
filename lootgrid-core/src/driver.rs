//! Placement driver: filter → classify → layout → relocate.
//!
//! The driver owns eligibility policy (which pickups participate at all)
//! and orchestration. It never moves anything itself until the complete
//! mapping has been computed, so a failed invocation can never leave a
//! partially rearranged pile.

use indexmap::IndexMap;

use crate::classify::{Classified, classify};
use crate::config::{ConfigError, PlacementConfig};
use crate::layout::{LayoutFrame, strategy_for};
use crate::vector::Vec3;
use crate::world::{ItemId, Pickup, PlayerPose, Relocate, WorldQuery};

/// Classes that are never rearranged (mission items, display racks).
const PROTECTED_CLASSES: &[&str] = &["OakMissionPickup", "GunRackDisplayItem"];

/// Class-name marker for echo-log collectibles, excluded unless the
/// configuration opts them in.
const ECHO_LOG_MARKER: &str = "EchoLogPickup";

/// Eligibility policy: protected classes never move, echo logs move only
/// when configured in. Classification never sees ineligible items.
pub fn eligible(item: &impl Pickup, config: &PlacementConfig) -> bool {
    let class = item.class_name();
    if PROTECTED_CLASSES.contains(&class) {
        return false;
    }
    if !config.include_echo_logs && class.contains(ECHO_LOG_MARKER) {
        return false;
    }
    true
}

/// Computes one target position per eligible pickup.
///
/// An empty filtered batch yields an empty mapping, not an error. The
/// configuration is assumed valid (see [`PlacementConfig::validate`]).
pub fn place<I: Pickup>(
    items: &[I],
    pose: &PlayerPose,
    config: &PlacementConfig,
) -> IndexMap<ItemId, Vec3> {
    let classified: Vec<Classified> = items
        .iter()
        .filter(|item| eligible(*item, config))
        .map(|item| Classified {
            id: item.id(),
            key: classify(item),
        })
        .collect();

    if classified.is_empty() {
        log::debug!("no eligible pickups, nothing to place");
        return IndexMap::new();
    }

    let frame = LayoutFrame {
        player: pose.position,
        forward: pose.facing(),
        spacing: config.spacing,
        flatten: config.flatten,
        lift_step: config.lift_step,
    };
    log::debug!(
        "placing {} pickups, sort mode {:?}",
        classified.len(),
        config.sort_mode
    );
    strategy_for(config.sort_mode).layout(&classified, &frame)
}

/// One full placement invocation: read the world, compute the mapping,
/// apply it through the relocator. Returns the number of items moved.
///
/// A missing actor or an empty filtered batch is a no-op. Relocation only
/// starts once the complete mapping exists.
pub fn run<W, R>(world: &W, relocator: &mut R, config: &PlacementConfig) -> Result<usize, ConfigError>
where
    W: WorldQuery,
    R: Relocate,
{
    config.validate()?;

    let Some(pose) = world.player_pose() else {
        log::debug!("no triggering actor, skipping placement");
        return Ok(0);
    };

    let items = world.pickups();
    let positions = place(&items, &pose, config);
    if positions.is_empty() {
        return Ok(0);
    }

    let mut moved = 0;
    for item in &items {
        if !eligible(item, config) {
            continue;
        }
        // Original position captured at batch start is the fallback; full
        // algorithm coverage means it should never be needed.
        let target = positions
            .get(&item.id())
            .copied()
            .unwrap_or_else(|| item.position());
        log::trace!("moving item {} to {target:?}", item.id());
        relocator.relocate(item.id(), target);
        moved += 1;
    }
    Ok(moved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::MemoryPickup;

    fn pose() -> PlayerPose {
        PlayerPose::new(Vec3::ZERO, 0.0, 0.0)
    }

    #[test]
    fn protected_classes_are_filtered() {
        let config = PlacementConfig::default();
        assert!(!eligible(&MemoryPickup::new(1, "OakMissionPickup"), &config));
        assert!(!eligible(&MemoryPickup::new(2, "GunRackDisplayItem"), &config));
        assert!(eligible(&MemoryPickup::new(3, "BPPickup_Gun"), &config));
    }

    #[test]
    fn echo_logs_follow_the_config_flag() {
        let item = MemoryPickup::new(1, "BPEchoLogPickup_C");
        let mut config = PlacementConfig::default();
        assert!(!eligible(&item, &config));

        config.include_echo_logs = true;
        assert!(eligible(&item, &config));
    }

    #[test]
    fn mapping_covers_every_surviving_item_once() {
        let items = vec![
            MemoryPickup::new(1, "Gun").rarity(1).with_category("Gun"),
            MemoryPickup::new(2, "OakMissionPickup"),
            MemoryPickup::new(3, "Shield").rarity(2).with_category("Shield"),
            MemoryPickup::new(4, "Relic"),
        ];
        let positions = place(&items, &pose(), &PlacementConfig::default());

        assert_eq!(positions.len(), 3);
        assert!(positions.contains_key(&1));
        assert!(!positions.contains_key(&2));
        assert!(positions.contains_key(&3));
        assert!(positions.contains_key(&4));
    }

    #[test]
    fn empty_batch_is_a_noop() {
        let positions = place::<MemoryPickup>(&[], &pose(), &PlacementConfig::default());
        assert!(positions.is_empty());
    }

    #[test]
    fn all_filtered_out_is_a_noop() {
        let items = vec![
            MemoryPickup::new(1, "OakMissionPickup"),
            MemoryPickup::new(2, "EchoLogPickup_C"),
        ];
        let positions = place(&items, &pose(), &PlacementConfig::default());
        assert!(positions.is_empty());
    }

    #[test]
    fn repeated_invocations_are_bit_identical() {
        let items = vec![
            MemoryPickup::new(1, "Gun").rarity(3).with_category("Gun"),
            MemoryPickup::new(2, "Shield").rarity(0).with_category("Shield"),
            MemoryPickup::new(3, "Gun").rarity(3).with_category("Gun"),
            MemoryPickup::new(4, "Relic").rarity(1),
        ];
        let mut config = PlacementConfig::default();
        config.sort_mode = crate::config::SortMode::RarityCategory;

        let first = place(&items, &pose(), &config);
        let second = place(&items, &pose(), &config);
        assert_eq!(first, second);
        // Exact equality, component by component.
        for (id, position) in &first {
            let again = second[id];
            assert_eq!(position.x, again.x);
            assert_eq!(position.y, again.y);
            assert_eq!(position.z, again.z);
        }
    }

    #[test]
    fn run_rejects_invalid_config_before_placing() {
        let world = crate::world::MemoryWorld::new(pose())
            .with_item(MemoryPickup::new(1, "Gun").rarity(1));
        let mut relocator = crate::world::RecordingRelocator::new();
        let mut config = PlacementConfig::default();
        config.spacing = -1.0;

        let err = run(&world, &mut relocator, &config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSpacing(_)));
        assert!(relocator.moves.is_empty());
    }
}
