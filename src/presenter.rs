//! Result presentation
//!
//! `select_view` turns a `SearchState` into exactly one of four views. The
//! precedence is fixed: loading, then unsearched, then no-match, then the
//! result grid. Cards are plain view models; templates only print them.

use serde::Serialize;

use crate::classify::{classify_sunlight, classify_watering, DisplayClass};
use crate::plant::PlantRecord;

/// Maximum number of cards shown in the result grid
pub const MAX_DISPLAYED: usize = 3;

/// Maximum number of other names shown in the details panel
pub const MAX_OTHER_NAMES: usize = 3;

/// Search lifecycle state owned by the controller
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub is_loading: bool,
    pub has_searched: bool,
    pub results: Vec<PlantRecord>,
}

// ============================================================================
// Views
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ResultsView {
    Loading,
    Unsearched,
    NoMatch,
    Grid(ResultGrid),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultGrid {
    pub heading: String,
    pub subheading: String,
    /// Number of records before truncation
    pub total: usize,
    pub truncated: bool,
    pub cards: Vec<PlantCard>,
}

/// Select the view for `state`. First matching rule wins.
pub fn select_view(state: &SearchState) -> ResultsView {
    if state.is_loading {
        return ResultsView::Loading;
    }
    if !state.has_searched {
        return ResultsView::Unsearched;
    }
    if state.results.is_empty() {
        return ResultsView::NoMatch;
    }
    ResultsView::Grid(ResultGrid::from_records(&state.results))
}

impl ResultGrid {
    pub fn from_records(records: &[PlantRecord]) -> Self {
        let total = records.len();
        let truncated = total > MAX_DISPLAYED;

        let heading = if total == 1 {
            "Plant Found".to_string()
        } else {
            format!("{} Plants Found", total.min(MAX_DISPLAYED))
        };

        let subheading = if truncated {
            format!("Showing top {} matches for your search", MAX_DISPLAYED)
        } else {
            "Here's what we found for your search".to_string()
        };

        let cards = records
            .iter()
            .take(MAX_DISPLAYED)
            .map(PlantCard::from_record)
            .collect();

        Self {
            heading,
            subheading,
            total,
            truncated,
            cards,
        }
    }
}

// ============================================================================
// Cards
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Badge {
    pub label: String,
    pub class: DisplayClass,
}

impl Badge {
    pub fn css_class(&self) -> &'static str {
        self.class.css_class()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardImage {
    pub preview_url: String,
    pub full_url: String,
}

/// Collapsible secondary panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardDetails {
    /// First three other names joined by ", ", with "..." when more exist
    pub other_names: Option<String>,
    /// Every sunlight label, only filled when there is more than one
    pub sunlight_badges: Vec<Badge>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlantCard {
    pub id: u64,
    pub title: String,
    pub subtitle: Option<String>,
    pub image: Option<CardImage>,
    pub watering_badge: Option<Badge>,
    pub sunlight_badge: Option<Badge>,
    pub details: Option<CardDetails>,
}

impl PlantCard {
    pub fn from_record(plant: &PlantRecord) -> Self {
        let image = plant.default_image.as_ref().and_then(|img| {
            let preview_url = img.preview_url()?;
            Some(CardImage {
                preview_url: preview_url.to_string(),
                full_url: img.full_url().unwrap_or(preview_url).to_string(),
            })
        });

        let watering_badge = plant.watering_label().map(|watering| Badge {
            label: format!("{} watering", watering),
            class: classify_watering(Some(watering)),
        });

        let sunlight_badge = plant.primary_sunlight().map(sunlight_badge);

        Self {
            id: plant.id,
            title: plant.common_name.clone(),
            subtitle: plant.primary_scientific_name().map(|s| s.to_string()),
            image,
            watering_badge,
            sunlight_badge,
            details: card_details(plant),
        }
    }
}

fn sunlight_badge(label: &str) -> Badge {
    Badge {
        label: label.to_string(),
        class: classify_sunlight(Some(label)),
    }
}

fn card_details(plant: &PlantRecord) -> Option<CardDetails> {
    let has_other_names = !plant.other_name.is_empty();
    let has_extra_sunlight = plant.sunlight.len() > 1;

    if !has_other_names && !has_extra_sunlight {
        return None;
    }

    let other_names = has_other_names.then(|| {
        let mut joined = plant
            .other_name
            .iter()
            .take(MAX_OTHER_NAMES)
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        if plant.other_name.len() > MAX_OTHER_NAMES {
            joined.push_str("...");
        }
        joined
    });

    let sunlight_badges = if has_extra_sunlight {
        plant.sunlight.iter().map(|s| sunlight_badge(s)).collect()
    } else {
        Vec::new()
    };

    Some(CardDetails {
        other_names,
        sunlight_badges,
    })
}
