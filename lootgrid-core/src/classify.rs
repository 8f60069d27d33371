use serde::{Deserialize, Serialize};

use crate::world::{ItemId, Pickup};

/// Category label substituted when a pickup's category cannot be read.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Default rarity rank for pickups without rarity data (common/lowest).
pub const DEFAULT_RARITY: i32 = 0;

/// Classification of one pickup: an ordered rarity rank and a category
/// label. Only the rank participates in ordering; labels keep their
/// discovery order and are never sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationKey {
    pub rarity: i32,
    pub category: String,
}

/// A pickup handle paired with its classification, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub id: ItemId,
    pub key: ClassificationKey,
}

/// Classifies a pickup on a best-effort basis.
///
/// Missing rarity data falls back to [`DEFAULT_RARITY`]; a failed category
/// lookup falls back to [`UNKNOWN_CATEGORY`]. Lookup failures stop here and
/// never reach the grouping engine.
pub fn classify(item: &impl Pickup) -> ClassificationKey {
    let rarity = item.rarity_sort().unwrap_or(DEFAULT_RARITY);
    let category = match item.category() {
        Ok(label) => label,
        Err(err) => {
            log::trace!("category unavailable for item {}: {err}", item.id());
            UNKNOWN_CATEGORY.to_string()
        }
    };
    ClassificationKey { rarity, category }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::MemoryPickup;

    #[test]
    fn classify_reads_rarity_and_category() {
        let item = MemoryPickup::new(1, "Pistol").rarity(3).with_category("Gun");
        let key = classify(&item);
        assert_eq!(key.rarity, 3);
        assert_eq!(key.category, "Gun");
    }

    #[test]
    fn missing_rarity_defaults_to_lowest() {
        let item = MemoryPickup::new(2, "Scrap").with_category("Junk");
        assert_eq!(classify(&item).rarity, DEFAULT_RARITY);
    }

    #[test]
    fn failed_category_lookup_becomes_unknown() {
        let item = MemoryPickup::new(3, "Relic").rarity(5);
        let key = classify(&item);
        assert_eq!(key.rarity, 5);
        assert_eq!(key.category, UNKNOWN_CATEGORY);
    }
}
