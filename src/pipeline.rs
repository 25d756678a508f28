//! Explicit browse state and its transition function.
//!
//! All user-visible behavior flows through one pure function,
//! [`recompute`]: every input change (loaded records, a search edit, a
//! facet toggle, a sort change) produces a new [`BrowseState`] whose
//! visible list is re-derived as `sort(search(country(wine_type(records))))`.
//! Nothing is mutated in place and no hidden reactive state exists; the
//! caller holds the current state and feeds it events.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::catalog::WINE_TYPES;
use crate::core::BottleRecord;
use crate::facets::{countries_present, wine_types_present, FacetSelection};
use crate::filter::apply_filters;
use crate::sort::{sort_records, SortKey};

/// Everything a browsing session holds: the fetched inventory, the
/// active filter inputs, and the derived visible list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrowseState {
    records: Vector<BottleRecord>,
    selected_wine_types: FacetSelection,
    selected_countries: FacetSelection,
    search_query: String,
    sort_key: SortKey,
    visible: Vector<BottleRecord>,
}

/// A user or system action that drives the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum BrowseEvent {
    /// A fetch completed; replace the inventory.
    RecordsLoaded(Vec<BottleRecord>),
    /// A fetch failed; degrade to an empty inventory.
    FetchFailed,
    SearchEdited(String),
    CountryToggled(String),
    WineTypeToggled(String),
    SortChanged(SortKey),
}

impl BrowseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full fetched inventory, untouched by filters.
    pub fn records(&self) -> &Vector<BottleRecord> {
        &self.records
    }

    /// The filtered, sorted list a view would render. Includes
    /// out-of-stock bottles; see [`BrowseState::in_stock`].
    pub fn visible(&self) -> &Vector<BottleRecord> {
        &self.visible
    }

    /// Size of the visible list. Counted BEFORE the stock predicate, so
    /// it can exceed the number of rows a renderer actually shows.
    /// This matches what the inventory page has always reported.
    pub fn result_count(&self) -> usize {
        self.visible.len()
    }

    /// The visible list with out-of-stock bottles removed, as a
    /// renderer displays it.
    pub fn in_stock(&self) -> Vector<BottleRecord> {
        self.visible.iter().filter(|r| r.displayable()).cloned().collect()
    }

    pub fn in_stock_count(&self) -> usize {
        self.visible.iter().filter(|r| r.displayable()).count()
    }

    pub fn selected_wine_types(&self) -> &FacetSelection {
        &self.selected_wine_types
    }

    pub fn selected_countries(&self) -> &FacetSelection {
        &self.selected_countries
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Countries available as facet values, derived from the FULL
    /// inventory, not the filtered subset.
    pub fn countries(&self) -> Vec<String> {
        countries_present(&self.records)
    }

    /// Catalog wine types present in the FULL inventory.
    pub fn wine_types(&self) -> Vec<String> {
        wine_types_present(&self.records, WINE_TYPES)
    }
}

/// Apply one event and return the next state.
///
/// Filter-affecting events re-derive the visible list from scratch in
/// the fixed order; a sort change only re-orders the currently filtered
/// set and never re-derives the filters.
pub fn recompute(state: &BrowseState, event: BrowseEvent) -> BrowseState {
    let mut next = state.clone();
    match event {
        BrowseEvent::RecordsLoaded(records) => {
            next.records = records.into_iter().collect();
            next.visible = derive_visible(&next);
        }
        BrowseEvent::FetchFailed => {
            next.records = Vector::new();
            next.visible = Vector::new();
        }
        BrowseEvent::SearchEdited(query) => {
            next.search_query = query;
            next.visible = derive_visible(&next);
        }
        BrowseEvent::CountryToggled(country) => {
            next.selected_countries = next.selected_countries.toggle(&country);
            next.visible = derive_visible(&next);
        }
        BrowseEvent::WineTypeToggled(wine_type) => {
            next.selected_wine_types = next.selected_wine_types.toggle(&wine_type);
            next.visible = derive_visible(&next);
        }
        BrowseEvent::SortChanged(key) => {
            next.sort_key = key;
            next.visible = sort_records(&next.visible, key);
        }
    }
    next
}

/// wine type > country > search query > sort, in that order, always.
fn derive_visible(state: &BrowseState) -> Vector<BottleRecord> {
    let filtered = apply_filters(
        &state.records,
        &state.selected_wine_types,
        &state.selected_countries,
        &state.search_query,
    );
    sort_records(&filtered, state.sort_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(description: &str, vintage: &str, country: &str, total: u32) -> BottleRecord {
        BottleRecord {
            description: description.to_string(),
            vintage: vintage.to_string(),
            country: country.to_string(),
            region: String::new(),
            sub_region: String::new(),
            total_in_stock: total,
            retail_price: 20.0,
        }
    }

    fn loaded_state() -> BrowseState {
        recompute(
            &BrowseState::new(),
            BrowseEvent::RecordsLoaded(vec![
                record("Cabernet Reserve", "2018", "France", 3),
                record("Old Red", "n/a", "Chile", 0),
                record("Dry Riesling", "2021", "Germany", 5),
            ]),
        )
    }

    #[test]
    fn loading_records_makes_them_all_visible() {
        let state = loaded_state();
        assert_eq!(state.result_count(), 3);
        assert_eq!(state.records().len(), 3);
    }

    #[test]
    fn fetch_failure_degrades_to_empty() {
        let state = recompute(&loaded_state(), BrowseEvent::FetchFailed);
        assert_eq!(state.result_count(), 0);
        assert!(state.records().is_empty());
    }

    #[test]
    fn search_narrows_the_visible_list() {
        let state = recompute(&loaded_state(), BrowseEvent::SearchEdited("riesling".into()));
        assert_eq!(state.result_count(), 1);
        assert_eq!(state.visible()[0].description, "Dry Riesling");
    }

    #[test]
    fn clearing_the_search_restores_the_full_list() {
        let narrowed = recompute(&loaded_state(), BrowseEvent::SearchEdited("riesling".into()));
        let restored = recompute(&narrowed, BrowseEvent::SearchEdited(String::new()));
        assert_eq!(restored.result_count(), 3);
    }

    #[test]
    fn toggling_a_country_twice_is_identity() {
        let state = loaded_state();
        let toggled_on = recompute(&state, BrowseEvent::CountryToggled("France".into()));
        assert_eq!(toggled_on.result_count(), 1);
        let toggled_off = recompute(&toggled_on, BrowseEvent::CountryToggled("France".into()));
        assert_eq!(toggled_off, state);
    }

    #[test]
    fn sort_change_reorders_without_refiltering() {
        let searched = recompute(&loaded_state(), BrowseEvent::SearchEdited("r".into()));
        let count_before = searched.result_count();
        let sorted = recompute(&searched, BrowseEvent::SortChanged(SortKey::Alpha));
        assert_eq!(sorted.result_count(), count_before);
        assert_eq!(sorted.search_query(), "r");
        let names: Vec<&str> =
            sorted.visible().iter().map(|r| r.description.as_str()).collect();
        let mut expected = names.clone();
        expected.sort_by_key(|n| n.to_lowercase());
        assert_eq!(names, expected);
    }

    #[test]
    fn filter_change_keeps_the_active_sort() {
        let sorted = recompute(&loaded_state(), BrowseEvent::SortChanged(SortKey::YearDesc));
        let filtered = recompute(&sorted, BrowseEvent::SearchEdited("e".into()));
        assert_eq!(filtered.sort_key(), SortKey::YearDesc);
        // Re-derived list is still year-descending with undated last.
        let vintages: Vec<&str> =
            filtered.visible().iter().map(|r| r.vintage.as_str()).collect();
        assert_eq!(vintages, vec!["2021", "2018", "n/a"]);
    }

    #[test]
    fn result_count_includes_out_of_stock_rows() {
        let state = loaded_state();
        assert_eq!(state.result_count(), 3);
        assert_eq!(state.in_stock_count(), 2);
        assert!(state.in_stock().iter().all(|r| r.displayable()));
    }

    #[test]
    fn facet_lists_come_from_the_full_inventory() {
        let narrowed = recompute(&loaded_state(), BrowseEvent::SearchEdited("riesling".into()));
        // The search hid France and Chile from view, not from the facets.
        assert_eq!(narrowed.countries(), vec!["France", "Chile", "Germany"]);
        let types = narrowed.wine_types();
        assert!(types.contains(&"Cabernet".to_string()));
        assert!(types.contains(&"Riesling".to_string()));
    }

    #[test]
    fn recompute_never_mutates_its_input() {
        let state = loaded_state();
        let snapshot = state.clone();
        let _ = recompute(&state, BrowseEvent::SearchEdited("x".into()));
        let _ = recompute(&state, BrowseEvent::SortChanged(SortKey::PriceAsc));
        let _ = recompute(&state, BrowseEvent::WineTypeToggled("Cabernet".into()));
        assert_eq!(state, snapshot);
    }
}
