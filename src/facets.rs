//! Facet derivation and selection.
//!
//! Two pure extractors derive the facet lists a browsing UI offers: the
//! countries present in the current inventory and the subset of catalog
//! wine types that actually appear in it. [`FacetSelection`] carries the
//! user's multi-select state with symmetric toggle semantics.

use std::collections::HashSet;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::BottleRecord;
use crate::text::{contains_ci, strip_punctuation};

/// A multi-select facet: one independent set of selected values.
///
/// Backed by a sequence but behaves as a set: toggling a present value
/// removes it, toggling an absent one appends it, so duplicates cannot
/// occur. Toggling never mutates; a new selection is returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSelection {
    values: Vector<String>,
}

impl FacetSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new selection with `value` removed if present, added
    /// otherwise. Toggling twice restores the original selection.
    pub fn toggle(&self, value: &str) -> Self {
        let values = if let Some(index) = self.values.index_of(&value.to_string()) {
            let mut next = self.values.clone();
            next.remove(index);
            next
        } else {
            let mut next = self.values.clone();
            next.push_back(value.to_string());
            next
        };
        Self { values }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.values.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for FacetSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for value in iter {
            let value = value.into();
            if !selection.contains(&value) {
                selection.values.push_back(value);
            }
        }
        selection
    }
}

/// Distinct countries in the inventory, stray punctuation stripped,
/// first-seen order preserved. No sort is applied.
pub fn countries_present(records: &Vector<BottleRecord>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut countries = Vec::new();
    for record in records {
        let country = strip_punctuation(&record.country);
        if seen.insert(country.clone()) {
            countries.push(country);
        }
    }
    countries
}

/// Catalog wine types that appear (case-insensitively) in some record's
/// description or region, sorted for display. O(records × catalog);
/// fine at inventory scale.
pub fn wine_types_present(records: &Vector<BottleRecord>, catalog: &[&str]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut present: Vec<String> = catalog
        .iter()
        .filter(|wine_type| seen.insert(wine_type.to_lowercase()))
        .filter(|wine_type| {
            records.iter().any(|record| {
                contains_ci(&record.description, wine_type) || contains_ci(&record.region, wine_type)
            })
        })
        .map(|wine_type| wine_type.to_string())
        .collect();
    present.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));
    present
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WINE_TYPES;

    fn record(description: &str, country: &str, region: &str) -> BottleRecord {
        BottleRecord {
            description: description.to_string(),
            vintage: "2020".to_string(),
            country: country.to_string(),
            region: region.to_string(),
            sub_region: String::new(),
            total_in_stock: 1,
            retail_price: 20.0,
        }
    }

    #[test]
    fn toggle_adds_then_removes() {
        let empty = FacetSelection::new();
        let with_france = empty.toggle("France");
        assert!(with_france.contains("France"));
        let back = with_france.toggle("France");
        assert_eq!(back, empty);
    }

    #[test]
    fn toggle_does_not_disturb_other_values() {
        let selection: FacetSelection = ["France", "Chile"].into_iter().collect();
        let without_france = selection.toggle("France");
        assert!(!without_france.contains("France"));
        assert!(without_france.contains("Chile"));
        assert_eq!(without_france.len(), 1);
    }

    #[test]
    fn countries_keep_first_seen_order_and_dedupe() {
        let records: Vector<BottleRecord> = [
            record("Malbec", "Argentina", ""),
            record("Riesling", "Germany", ""),
            record("Torrontes", "Argentina", ""),
        ]
        .into_iter()
        .collect();

        assert_eq!(countries_present(&records), vec!["Argentina", "Germany"]);
    }

    #[test]
    fn countries_are_stripped_of_punctuation() {
        let records: Vector<BottleRecord> =
            [record("Cabernet", "France*", ""), record("Merlot", "France", "")]
                .into_iter()
                .collect();

        // Both variants collapse to the same facet value.
        assert_eq!(countries_present(&records), vec!["France"]);
    }

    #[test]
    fn wine_types_match_description_or_region() {
        let records: Vector<BottleRecord> = [
            record("Reserve cabernet blend", "USA", ""),
            record("Estate bottling", "France", "Champagne"),
        ]
        .into_iter()
        .collect();

        let present = wine_types_present(&records, WINE_TYPES);
        assert!(present.contains(&"Cabernet".to_string()));
        assert!(present.contains(&"Champagne".to_string()));
        assert!(!present.contains(&"Merlot".to_string()));
    }

    #[test]
    fn wine_types_are_sorted_and_unique() {
        let records: Vector<BottleRecord> = [
            record("Zinfandel old vine", "USA", ""),
            record("Cinsault rosé", "France", ""),
            record("Another Cinsault", "France", ""),
        ]
        .into_iter()
        .collect();

        let present = wine_types_present(&records, WINE_TYPES);
        assert_eq!(present, vec!["Cinsault", "Rosé", "Zinfandel"]);
        let unique: HashSet<&String> = present.iter().collect();
        assert_eq!(unique.len(), present.len());
    }

    #[test]
    fn wine_types_never_leave_the_catalog() {
        let records: Vector<BottleRecord> =
            [record("Cabernet something", "USA", "")].into_iter().collect();
        for found in wine_types_present(&records, WINE_TYPES) {
            assert!(WINE_TYPES.contains(&found.as_str()));
        }
    }

    #[test]
    fn empty_inventory_yields_empty_facets() {
        let records = Vector::new();
        assert!(countries_present(&records).is_empty());
        assert!(wine_types_present(&records, WINE_TYPES).is_empty());
    }
}
