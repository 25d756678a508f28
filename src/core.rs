//! Common type definitions used across the codebase

use serde::{Deserialize, Serialize};

/// A single wine bottle as held in inventory.
///
/// Records are immutable once normalized; pipeline stages clone and
/// return new sequences rather than mutating anything in place. There is
/// no identity beyond structural equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottleRecord {
    pub description: String,
    /// Year as text. May be non-numeric ("n/a", "NV"); such records are
    /// treated as undated and sort after dated ones.
    pub vintage: String,
    pub country: String,
    pub region: String,
    pub sub_region: String,
    pub total_in_stock: u32,
    pub retail_price: f64,
}

impl BottleRecord {
    /// Whether the bottle is eligible for display. Out-of-stock bottles
    /// stay in the list through filtering and sorting and are hidden by
    /// the renderer.
    pub fn displayable(&self) -> bool {
        self.total_in_stock > 0
    }

    /// The "2018 Cabernet Reserve" style title a viewer sees.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.vintage, self.description)
    }

    /// The price exactly as displayed, "$"-prefixed. Search matches
    /// against this label, so a query like "25" can hit via the price.
    pub fn price_label(&self) -> String {
        format!("${}", self.retail_price)
    }
}
