//! Embedded fallback plants
//!
//! Served by the search gateway whenever the remote API cannot answer.
//! The reference set is compiled into the binary; the filter is a plain
//! case-insensitive substring match, preserving the table order.

use crate::plant::{PlantImage, PlantRecord};

/// A reference plant as stored in the binary
#[derive(Debug, Clone)]
pub struct ReferencePlant {
    pub id: u64,
    pub common_name: &'static str,
    pub scientific_names: &'static [&'static str],
    pub other_names: &'static [&'static str],
    pub watering: &'static str,
    pub sunlight: &'static [&'static str],
    pub medium_url: &'static str,
    pub original_url: &'static str,
}

// ============================================================================
// EMBEDDED REFERENCE DATA
// ============================================================================

static REFERENCE_PLANTS: &[ReferencePlant] = &[
    ReferencePlant {
        id: 1,
        common_name: "Rose",
        scientific_names: &["Rosa rubiginosa"],
        other_names: &["Sweet Briar", "Eglantine"],
        watering: "Average",
        sunlight: &["Full sun", "Part shade"],
        medium_url: "https://images.unsplash.com/photo-1518709268805-4e9042af2176?w=400",
        original_url: "https://images.unsplash.com/photo-1518709268805-4e9042af2176?w=800",
    },
    ReferencePlant {
        id: 2,
        common_name: "Monstera",
        scientific_names: &["Monstera deliciosa"],
        other_names: &["Swiss Cheese Plant", "Split-leaf Philodendron"],
        watering: "Average",
        sunlight: &["Part shade"],
        medium_url: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400",
        original_url: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800",
    },
    ReferencePlant {
        id: 3,
        common_name: "Lavender",
        scientific_names: &["Lavandula angustifolia"],
        other_names: &["English Lavender", "True Lavender"],
        watering: "Minimum",
        sunlight: &["Full sun"],
        medium_url: "https://images.unsplash.com/photo-1499002238440-d264edd596ec?w=400",
        original_url: "https://images.unsplash.com/photo-1499002238440-d264edd596ec?w=800",
    },
];

impl ReferencePlant {
    pub fn to_record(&self) -> PlantRecord {
        let owned = |names: &[&str]| names.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        PlantRecord {
            id: self.id,
            common_name: self.common_name.to_string(),
            scientific_name: owned(self.scientific_names),
            other_name: owned(self.other_names),
            cycle: None,
            watering: Some(self.watering.to_string()),
            sunlight: owned(self.sunlight),
            default_image: Some(PlantImage {
                medium_url: Some(self.medium_url.to_string()),
                original_url: Some(self.original_url.to_string()),
                ..Default::default()
            }),
        }
    }
}

/// The full embedded reference set, in table order
pub fn reference_plants() -> &'static [ReferencePlant] {
    REFERENCE_PLANTS
}

/// Filter the reference set by `query`.
///
/// Matches when the lower-cased query is a substring of the common name, any
/// scientific name or any other name. No trimming, no fuzzy matching, no
/// ranking: results keep the table order.
pub fn filter_reference_plants(query: &str) -> Vec<PlantRecord> {
    let needle = query.to_lowercase();

    REFERENCE_PLANTS
        .iter()
        .map(ReferencePlant::to_record)
        .filter(|plant| plant.matches_name(&needle))
        .collect()
}
