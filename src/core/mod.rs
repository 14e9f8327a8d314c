pub mod errors;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Source dialect, selected once per file by extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    Markup,
    Stylesheet,
    Script,
}

impl Dialect {
    pub fn from_extension(ext: &str) -> Option<Dialect> {
        match ext {
            "html" | "php" => Some(Dialect::Markup),
            "css" => Some(Dialect::Stylesheet),
            "js" => Some(Dialect::Script),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Dialect> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Dialect::from_extension)
    }
}

/// A class name together with its total occurrence count, as produced by ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassUsage {
    pub name: String,
    pub count: usize,
}

#[derive(Clone, Copy, Debug)]
struct ClassStats {
    count: usize,
    first_seen: usize,
}

/// Occurrence counts accumulated across the entire scanned corpus.
///
/// Each entry also records a discovery index (`first_seen`) so that ranking
/// can break count ties deterministically instead of inheriting map
/// iteration order.
#[derive(Debug, Default)]
pub struct UsageTable {
    entries: HashMap<String, ClassStats>,
}

impl UsageTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `name`, assigning a discovery index on first
    /// insertion.
    pub fn record(&mut self, name: &str) {
        let next_index = self.entries.len();
        let stats = self
            .entries
            .entry(name.to_string())
            .or_insert(ClassStats {
                count: 0,
                first_seen: next_index,
            });
        stats.count += 1;
    }

    pub fn count(&self, name: &str) -> usize {
        self.entries.get(name).map(|stats| stats.count).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, usize, usize)> {
        self.entries
            .iter()
            .map(|(name, stats)| (name.as_str(), stats.count, stats.first_seen))
    }
}

/// One `original -> replacement` pair in rank order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMapping {
    pub class: String,
    pub replacement: String,
}

/// The finalized original-to-short-name mapping.
///
/// Built once after the collection pass and read-only for the entire rewrite
/// pass. Keys and values are both unique for a run (the short-name sequence
/// is injective over rank indices), and the ranked pair order is retained so
/// preview output is deterministic.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ClassMap {
    lookup: HashMap<String, String>,
    mappings: Vec<ClassMapping>,
}

impl ClassMap {
    pub(crate) fn from_ranked(pairs: Vec<ClassMapping>) -> Self {
        let lookup = pairs
            .iter()
            .map(|pair| (pair.class.clone(), pair.replacement.clone()))
            .collect();
        Self {
            lookup,
            mappings: pairs,
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.lookup.get(name).map(String::as_str)
    }

    /// All pairs in rank order (most frequent class first).
    pub fn mappings(&self) -> &[ClassMapping] {
        &self.mappings
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_dialect_from_extension() {
        assert_eq!(Dialect::from_extension("html"), Some(Dialect::Markup));
        assert_eq!(Dialect::from_extension("php"), Some(Dialect::Markup));
        assert_eq!(Dialect::from_extension("css"), Some(Dialect::Stylesheet));
        assert_eq!(Dialect::from_extension("js"), Some(Dialect::Script));
        assert_eq!(Dialect::from_extension("txt"), None);
        assert_eq!(Dialect::from_extension("rs"), None);
    }

    #[test]
    fn test_dialect_from_path() {
        assert_eq!(
            Dialect::from_path(&PathBuf::from("a/b/index.html")),
            Some(Dialect::Markup)
        );
        assert_eq!(
            Dialect::from_path(&PathBuf::from("theme.css")),
            Some(Dialect::Stylesheet)
        );
        assert_eq!(Dialect::from_path(&PathBuf::from("no_extension")), None);
        assert_eq!(Dialect::from_path(&PathBuf::from("notes.md")), None);
    }

    #[test]
    fn test_usage_table_counts_accumulate() {
        let mut table = UsageTable::new();
        table.record("nav");
        table.record("nav");
        table.record("footer");

        assert_eq!(table.count("nav"), 2);
        assert_eq!(table.count("footer"), 1);
        assert_eq!(table.count("missing"), 0);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_usage_table_first_seen_is_stable() {
        let mut table = UsageTable::new();
        table.record("first");
        table.record("second");
        // Re-recording must not move the discovery index.
        table.record("first");

        let mut seen: Vec<(String, usize)> = table
            .iter()
            .map(|(name, _, first_seen)| (name.to_string(), first_seen))
            .collect();
        seen.sort_by_key(|(_, first_seen)| *first_seen);

        assert_eq!(seen[0].0, "first");
        assert_eq!(seen[1].0, "second");
    }

    #[test]
    fn test_class_map_lookup_and_order() {
        let map = ClassMap::from_ranked(vec![
            ClassMapping {
                class: "header".to_string(),
                replacement: "a".to_string(),
            },
            ClassMapping {
                class: "footer".to_string(),
                replacement: "b".to_string(),
            },
        ]);

        assert_eq!(map.get("header"), Some("a"));
        assert_eq!(map.get("footer"), Some("b"));
        assert_eq!(map.get("body"), None);
        assert_eq!(map.mappings()[0].class, "header");
        assert_eq!(map.len(), 2);
    }
}
