//! Grouping engine: buckets classified pickups into deterministically
//! ordered groups.
//!
//! Primary buckets (rarity) are ordered ascending by rank via a `BTreeMap`,
//! never by insertion order. Secondary buckets (category) keep first-seen
//! label order within their rarity bucket via an `IndexMap`; labels are
//! never sorted. Items keep discovery order inside every bucket, so equal
//! keys tie-break by original enumeration order.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::classify::Classified;
use crate::world::ItemId;

/// Items sharing one rarity rank, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RarityGroup {
    pub rarity: i32,
    pub items: Vec<ItemId>,
}

/// Items sharing one category label within a rarity group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: String,
    pub items: Vec<ItemId>,
}

/// A rarity group sub-divided by category label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedGroup {
    pub rarity: i32,
    pub categories: Vec<CategoryGroup>,
}

/// Buckets classified items by rarity, ascending by rank.
pub fn group_by_rarity(items: &[Classified]) -> Vec<RarityGroup> {
    let mut buckets: BTreeMap<i32, Vec<ItemId>> = BTreeMap::new();
    for entry in items {
        buckets.entry(entry.key.rarity).or_default().push(entry.id);
    }
    buckets
        .into_iter()
        .map(|(rarity, items)| RarityGroup { rarity, items })
        .collect()
}

/// Buckets classified items by rarity (ascending), then by category label
/// in first-seen order within each rarity bucket.
pub fn group_by_rarity_and_category(items: &[Classified]) -> Vec<NestedGroup> {
    let mut buckets: BTreeMap<i32, IndexMap<String, Vec<ItemId>>> = BTreeMap::new();
    for entry in items {
        buckets
            .entry(entry.key.rarity)
            .or_default()
            .entry(entry.key.category.clone())
            .or_default()
            .push(entry.id);
    }
    buckets
        .into_iter()
        .map(|(rarity, categories)| NestedGroup {
            rarity,
            categories: categories
                .into_iter()
                .map(|(category, items)| CategoryGroup { category, items })
                .collect(),
        })
        .collect()
}
