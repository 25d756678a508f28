//! The record filter pipeline.
//!
//! Filters apply in a fixed order (wine-type facet, country facet, then
//! free-text search), each stage operating only on the survivors of
//! the one before. All stages are total, pure functions: an empty
//! selection or query passes records through untouched, and every stage
//! returns a fresh sequence.
//!
//! Facet matching strips punctuation from record fields before the
//! substring test; search matching sees the raw text. A country stored
//! as "France*" therefore matches the facet value "France", while a
//! punctuated facet value like "France*" matches nothing; a search
//! query, by contrast, must match the field as stored. Both behaviors
//! are intentional.

use im::Vector;

use crate::core::BottleRecord;
use crate::facets::FacetSelection;
use crate::text::{contains_ci, strip_punctuation};

/// True when any selected value appears (case-insensitively) in the
/// record's punctuation-stripped country, region or description.
fn matches_any_selection(record: &BottleRecord, selection: &FacetSelection) -> bool {
    selection.iter().any(|value| {
        contains_ci(&strip_punctuation(&record.country), value)
            || contains_ci(&strip_punctuation(&record.region), value)
            || contains_ci(&strip_punctuation(&record.description), value)
    })
}

/// Keep records matching ANY value of one facet selection. An empty
/// selection is a pass-through. Running this once per facet (wine type,
/// then country) intersects the two OR-groups.
pub fn filter_by_facets(
    records: &Vector<BottleRecord>,
    selection: &FacetSelection,
) -> Vector<BottleRecord> {
    if selection.is_empty() {
        return records.clone();
    }
    records
        .iter()
        .filter(|record| matches_any_selection(record, selection))
        .cloned()
        .collect()
}

/// True when the query appears in any field a viewer can see: the
/// "{vintage} {description}" title, country, region, sub-region, or the
/// "$"-prefixed price label.
fn matches_search(record: &BottleRecord, query: &str) -> bool {
    contains_ci(&record.display_name(), query)
        || contains_ci(&record.country, query)
        || contains_ci(&record.region, query)
        || contains_ci(&record.sub_region, query)
        || contains_ci(&record.price_label(), query)
}

/// Keep records whose displayed fields contain the query. An empty query
/// is a pass-through.
pub fn filter_by_search(records: &Vector<BottleRecord>, query: &str) -> Vector<BottleRecord> {
    if query.is_empty() {
        return records.clone();
    }
    records
        .iter()
        .filter(|record| matches_search(record, query))
        .cloned()
        .collect()
}

/// Run the full pipeline in its fixed order: wine-type facet, country
/// facet, search. Sorting happens afterwards, on the result.
pub fn apply_filters(
    records: &Vector<BottleRecord>,
    selected_wine_types: &FacetSelection,
    selected_countries: &FacetSelection,
    query: &str,
) -> Vector<BottleRecord> {
    let by_wine_type = filter_by_facets(records, selected_wine_types);
    let by_country = filter_by_facets(&by_wine_type, selected_countries);
    filter_by_search(&by_country, query)
}
