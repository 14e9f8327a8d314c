//! Ranking and short-name assignment.
//!
//! Classes are ordered by descending usage count (ties broken by discovery
//! order) and each rank index is mapped through a fixed generator, so the
//! most frequent classes receive the shortest replacements. The generated
//! sequence is `a`..`z`, then `a1`..`z1` through `a9`..`z9`, then
//! `aa0`, `ba0`, ... for deeper tiers.

use crate::core::{ClassMap, ClassMapping, ClassUsage, UsageTable};

/// Order all observed classes by count descending, first-seen ascending.
pub fn rank_classes(table: &UsageTable) -> Vec<ClassUsage> {
    let mut entries: Vec<(&str, usize, usize)> = table.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    entries
        .into_iter()
        .map(|(name, count, _)| ClassUsage {
            name: name.to_string(),
            count,
        })
        .collect()
}

/// The deterministic replacement name for rank position `index`.
pub fn short_name(index: usize) -> String {
    let letter = (b'a' + (index % 26) as u8) as char;
    let tier = index / 26;
    if tier == 0 {
        letter.to_string()
    } else if tier <= 9 {
        format!("{letter}{tier}")
    } else {
        format!("{letter}a{}", tier - 10)
    }
}

/// Build the run's [`ClassMap`]: every class observed during collection,
/// paired with the short name of its rank index.
pub fn build_class_map(table: &UsageTable) -> ClassMap {
    let pairs = rank_classes(table)
        .into_iter()
        .enumerate()
        .map(|(index, usage)| ClassMapping {
            class: usage.name,
            replacement: short_name(index),
        })
        .collect();
    ClassMap::from_ranked(pairs)
}
