//! Single-key ordering of the filtered record set.
//!
//! Sorting is stable: ties and undated entries keep their input order.
//! The input sequence is never mutated; a new ordered sequence is
//! returned.

use std::cmp::Ordering;

use clap::ValueEnum;
use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::BottleRecord;

/// The available sort orders. Exactly one is active at a time.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Leave the filtered order untouched.
    #[default]
    None,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Oldest vintage first; undated bottles last.
    YearAsc,
    /// Newest vintage first; undated bottles last.
    YearDesc,
    /// By description, A to Z.
    Alpha,
}

/// Parse a vintage as a year. `None` marks the record as undated.
pub fn parse_vintage(vintage: &str) -> Option<i64> {
    vintage.trim().parse().ok()
}

/// Undated entries sort after dated ones regardless of direction; two
/// undated entries compare equal so the stable sort preserves their
/// input order.
fn compare_years(a: &BottleRecord, b: &BottleRecord, ascending: bool) -> Ordering {
    match (parse_vintage(&a.vintage), parse_vintage(&b.vintage)) {
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (None, None) => Ordering::Equal,
        (Some(a_year), Some(b_year)) => {
            if ascending {
                a_year.cmp(&b_year)
            } else {
                b_year.cmp(&a_year)
            }
        }
    }
}

fn compare_alpha(a: &BottleRecord, b: &BottleRecord) -> Ordering {
    a.description
        .to_lowercase()
        .cmp(&b.description.to_lowercase())
        .then_with(|| a.description.cmp(&b.description))
}

/// Order `records` by `key`, returning a new sequence.
pub fn sort_records(records: &Vector<BottleRecord>, key: SortKey) -> Vector<BottleRecord> {
    if key == SortKey::None {
        return records.clone();
    }

    let mut items: Vec<BottleRecord> = records.iter().cloned().collect();
    match key {
        SortKey::None => unreachable!("handled above"),
        SortKey::PriceAsc => items.sort_by(|a, b| a.retail_price.total_cmp(&b.retail_price)),
        SortKey::PriceDesc => items.sort_by(|a, b| b.retail_price.total_cmp(&a.retail_price)),
        SortKey::YearAsc => items.sort_by(|a, b| compare_years(a, b, true)),
        SortKey::YearDesc => items.sort_by(|a, b| compare_years(a, b, false)),
        SortKey::Alpha => items.sort_by(compare_alpha),
    }
    items.into_iter().collect()
}
