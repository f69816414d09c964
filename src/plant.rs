//! Plant record model
//!
//! Serde shapes for the Perenual species-list API:
//! - `PlantRecord`: one plant as returned in the `data` array
//! - `PlantImage`: the `default_image` object (several sizes, all optional)
//! - `SpeciesListResponse`: the paging envelope around `data`
//!
//! The API is loose about optional fields: lists and strings may be missing
//! or explicitly `null`. Both deserialize to the empty default so the
//! presenter never has to care.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single plant as returned by the species-list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantRecord {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub common_name: String,
    /// Ordered; the first entry is the canonical binomial
    #[serde(default, deserialize_with = "null_as_default")]
    pub scientific_name: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub other_name: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle: Option<String>,
    /// Free text from the API ("Average", "Frequent", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watering: Option<String>,
    /// Ordered; the first entry is the primary requirement
    #[serde(default, deserialize_with = "null_as_default")]
    pub sunlight: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_image: Option<PlantImage>,
}

/// Image sizes offered by the API for a plant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlantImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl PlantImage {
    /// Card-sized preview. The image viewer is only offered when this exists.
    pub fn preview_url(&self) -> Option<&str> {
        non_blank(self.medium_url.as_deref())
    }

    /// Best available full-resolution image.
    pub fn full_url(&self) -> Option<&str> {
        non_blank(self.original_url.as_deref())
            .or_else(|| non_blank(self.regular_url.as_deref()))
            .or_else(|| non_blank(self.medium_url.as_deref()))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

impl PlantRecord {
    /// First scientific name, if any and not blank
    pub fn primary_scientific_name(&self) -> Option<&str> {
        non_blank(self.scientific_name.first().map(|s| s.as_str()))
    }

    /// First sunlight label, if any and not blank
    pub fn primary_sunlight(&self) -> Option<&str> {
        non_blank(self.sunlight.first().map(|s| s.as_str()))
    }

    /// Watering text, with blank strings treated as absent
    pub fn watering_label(&self) -> Option<&str> {
        non_blank(self.watering.as_deref())
    }

    /// Case-insensitive substring match against common, scientific and other names.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_name(&self, needle: &str) -> bool {
        self.common_name.to_lowercase().contains(needle)
            || self
                .scientific_name
                .iter()
                .any(|name| name.to_lowercase().contains(needle))
            || self
                .other_name
                .iter()
                .any(|name| name.to_lowercase().contains(needle))
    }
}

/// Envelope returned by `GET /species-list`.
///
/// Only `data` is consumed. The paging fields are kept as raw JSON: the API
/// is not consistent about their types, and a quirk there must not turn a
/// good `data` array into a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeciesListResponse {
    #[serde(default)]
    pub data: Option<Vec<PlantRecord>>,
    #[serde(default)]
    pub to: Option<serde_json::Value>,
    #[serde(default)]
    pub per_page: Option<serde_json::Value>,
    #[serde(default)]
    pub current_page: Option<serde_json::Value>,
    #[serde(default)]
    pub from: Option<serde_json::Value>,
    #[serde(default)]
    pub last_page: Option<serde_json::Value>,
    #[serde(default)]
    pub total: Option<serde_json::Value>,
}

impl SpeciesListResponse {
    pub fn into_records(self) -> Vec<PlantRecord> {
        self.data.unwrap_or_default()
    }
}
