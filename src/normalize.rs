//! Normalization of raw fetched payloads into canonical [`BottleRecord`]s.
//!
//! The upstream feed is loosely typed: numeric fields sometimes arrive as
//! currency-formatted strings, optional fields may be absent or null, and
//! vintages can be numbers, year strings, or free text. Normalization is
//! total: a malformed field degrades to a well-defined fallback instead
//! of excluding the record. Shape-level mismatches (no `wines` list at
//! all) are a fetch error, handled upstream in [`crate::fetch`].

use serde::{Deserialize, Deserializer};

use crate::core::BottleRecord;
use crate::text::clean_number;

/// Wire shape of an inventory endpoint body: `{ "wines": [...] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawInventory {
    pub wines: Vec<RawBottle>,
}

/// One bottle as the feed serves it, PascalCase keys and all.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBottle {
    #[serde(rename = "Description", default, deserialize_with = "text_or_empty")]
    pub description: String,
    #[serde(rename = "Vintage", default, deserialize_with = "label_or_empty")]
    pub vintage: String,
    #[serde(rename = "Country", default, deserialize_with = "text_or_empty")]
    pub country: String,
    #[serde(rename = "Region", default, deserialize_with = "text_or_empty")]
    pub region: String,
    #[serde(rename = "SubRegion", default, deserialize_with = "text_or_empty")]
    pub sub_region: String,
    #[serde(rename = "Total", default, deserialize_with = "lenient_number")]
    pub total: f64,
    #[serde(rename = "OhioRetail", default, deserialize_with = "lenient_number")]
    pub ohio_retail: f64,
}

/// A JSON value that should be a number but may be text, or missing.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Vintages occasionally arrive as JSON numbers; render them the way the
/// feed's own viewer would ("2018", not "2018.0").
fn label_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(n)) if n.fract() == 0.0 => format!("{}", n as i64),
        Some(NumberOrText::Number(n)) => n.to_string(),
        Some(NumberOrText::Text(s)) => s,
        None => String::new(),
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(n)) => n,
        Some(NumberOrText::Text(s)) => clean_number(&s),
        None => 0.0,
    })
}

/// Map a raw payload into canonical records. Pure; order is preserved.
pub fn normalize(raw: RawInventory) -> Vec<BottleRecord> {
    raw.wines.into_iter().map(normalize_bottle).collect()
}

fn normalize_bottle(raw: RawBottle) -> BottleRecord {
    BottleRecord {
        description: raw.description,
        vintage: raw.vintage,
        country: raw.country,
        region: raw.region,
        sub_region: raw.sub_region,
        total_in_stock: raw.total.max(0.0) as u32,
        retail_price: raw.ohio_retail,
    }
}
