//! Area-keyed similarity matrix.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::Area;

/// Nested `area -> area -> similarity` map.
///
/// Entries may be stored in either direction (or both); lookups are
/// direction-agnostic. Symmetry, the `[0, 1]` range and the unit diagonal
/// are assumed, not enforced. Serializes as the plain nested JSON object
/// `{"A": {"B": 0.9}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimilarityMatrix {
    rows: BTreeMap<Area, BTreeMap<Area, f64>>,
}

impl SimilarityMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_nested(rows: BTreeMap<Area, BTreeMap<Area, f64>>) -> Self {
        Self { rows }
    }

    /// Build from `(a, b, similarity)` triples, each stored under `a`.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, f64)>,
    {
        let mut matrix = Self::new();
        for (a, b, value) in pairs {
            matrix.insert(a, b, value);
        }
        matrix
    }

    /// Store `value` under `rows[a][b]`. An empty row is created for `b` so
    /// that it is listed as an outer key as well.
    pub fn insert(&mut self, a: &str, b: &str, value: f64) {
        self.rows.entry(b.to_string()).or_default();
        self.rows
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string(), value);
    }

    /// Add an area with no similarity entries.
    pub fn insert_area(&mut self, area: &str) {
        self.rows.entry(area.to_string()).or_default();
    }

    /// Raw direction-agnostic lookup: `rows[a][b]`, else `rows[b][a]`.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        self.rows
            .get(a)
            .and_then(|row| row.get(b))
            .or_else(|| self.rows.get(b).and_then(|row| row.get(a)))
            .copied()
    }

    /// Every identifier appearing as an outer or inner key, sorted.
    pub fn areas(&self) -> BTreeSet<Area> {
        let mut areas: BTreeSet<Area> = self.rows.keys().cloned().collect();
        for row in self.rows.values() {
            areas.extend(row.keys().cloned());
        }
        areas
    }

    /// Iterate stored entries as `(a, b, similarity)`, in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.rows
            .iter()
            .flat_map(|(a, row)| row.iter().map(move |(b, v)| (a.as_str(), b.as_str(), *v)))
    }

    /// Number of distinct areas.
    pub fn len(&self) -> usize {
        self.areas().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<BTreeMap<Area, BTreeMap<Area, f64>>> for SimilarityMatrix {
    fn from(rows: BTreeMap<Area, BTreeMap<Area, f64>>) -> Self {
        Self::from_nested(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_direction_agnostic() {
        let m = SimilarityMatrix::from_pairs([("A", "B", 0.9)]);
        assert_eq!(m.get("A", "B"), Some(0.9));
        assert_eq!(m.get("B", "A"), Some(0.9));
        assert_eq!(m.get("A", "C"), None);
    }

    #[test]
    fn forward_entry_wins_over_reverse() {
        let m = SimilarityMatrix::from_pairs([("A", "B", 0.9), ("B", "A", 0.7)]);
        assert_eq!(m.get("A", "B"), Some(0.9));
        assert_eq!(m.get("B", "A"), Some(0.7));
    }

    #[test]
    fn areas_include_inner_keys() {
        let json = r#"{"A": {"B": 0.9, "C": 0.5}, "B": {"C": 0.5}}"#;
        let m: SimilarityMatrix = serde_json::from_str(json).unwrap();
        let areas: Vec<_> = m.areas().into_iter().collect();
        assert_eq!(areas, vec!["A", "B", "C"]);
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn serializes_as_nested_object() {
        let m = SimilarityMatrix::from_pairs([("A", "B", 0.25)]);
        let value = serde_json::to_value(&m).unwrap();
        assert_eq!(value["A"]["B"], 0.25);
        assert!(value["B"].as_object().unwrap().is_empty());
    }

    #[test]
    fn entries_walk_in_key_order() {
        let m = SimilarityMatrix::from_pairs([("B", "C", 0.1), ("A", "C", 0.2)]);
        let entries: Vec<_> = m.entries().collect();
        assert_eq!(entries, vec![("A", "C", 0.2), ("B", "C", 0.1)]);
    }
}
