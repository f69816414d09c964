//! Badge classification for watering and sunlight values.
//!
//! Maps the free-text care values returned by the plant API onto a small set
//! of display buckets. Both lookups are static tables; any value not in the
//! table (including an absent one) lands in `DisplayClass::Neutral`.

use serde::Serialize;

/// Colour bucket for a care badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayClass {
    Blue,   // frequent watering
    Green,  // average watering
    Yellow, // minimum watering
    Orange, // full sun
    Amber,  // part shade
    Purple, // full shade
    #[default]
    Neutral,
}

impl DisplayClass {
    pub fn css_class(&self) -> &'static str {
        match self {
            DisplayClass::Blue => "bg-blue-100 text-blue-800",
            DisplayClass::Green => "bg-green-100 text-green-800",
            DisplayClass::Yellow => "bg-yellow-100 text-yellow-800",
            DisplayClass::Orange => "bg-orange-100 text-orange-800",
            DisplayClass::Amber => "bg-amber-100 text-amber-800",
            DisplayClass::Purple => "bg-purple-100 text-purple-800",
            DisplayClass::Neutral => "bg-muted text-muted-foreground",
        }
    }
}

// ============================================================================
// Lookup Tables
// ============================================================================

/// Keys are lower-case; input is trimmed and lower-cased before lookup.
static WATERING_CLASSES: &[(&str, DisplayClass)] = &[
    ("frequent", DisplayClass::Blue),
    ("average", DisplayClass::Green),
    ("minimum", DisplayClass::Yellow),
];

static SUNLIGHT_CLASSES: &[(&str, DisplayClass)] = &[
    ("full sun", DisplayClass::Orange),
    ("part shade", DisplayClass::Amber),
    ("full shade", DisplayClass::Purple),
];

fn lookup(table: &[(&str, DisplayClass)], value: Option<&str>) -> DisplayClass {
    let Some(value) = value else {
        return DisplayClass::Neutral;
    };
    let key = value.trim().to_lowercase();

    table
        .iter()
        .find(|(label, _)| *label == key)
        .map(|(_, class)| *class)
        .unwrap_or_default()
}

// ============================================================================
// Classification
// ============================================================================

/// Classify a watering level ("Frequent", "average", ...) into a badge colour.
pub fn classify_watering(level: Option<&str>) -> DisplayClass {
    lookup(WATERING_CLASSES, level)
}

/// Classify a sunlight label ("Full sun", "part shade", ...) into a badge colour.
pub fn classify_sunlight(label: Option<&str>) -> DisplayClass {
    lookup(SUNLIGHT_CLASSES, label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watering_is_case_insensitive() {
        assert_eq!(classify_watering(Some("AVERAGE")), classify_watering(Some("average")));
        assert_eq!(classify_watering(Some("Average")), DisplayClass::Green);
        assert_eq!(classify_watering(Some("Frequent")), DisplayClass::Blue);
        assert_eq!(classify_watering(Some("minimum")), DisplayClass::Yellow);
    }

    #[test]
    fn test_unknown_watering_is_neutral() {
        assert_eq!(classify_watering(Some("unknown")), DisplayClass::Neutral);
        assert_eq!(classify_watering(None), DisplayClass::Neutral);
        assert_eq!(classify_watering(Some("")), DisplayClass::Neutral);
        // The API sometimes returns "None" as a watering value
        assert_eq!(classify_watering(Some("None")), DisplayClass::Neutral);
    }

    #[test]
    fn test_sunlight_table() {
        assert_eq!(classify_sunlight(Some("Full sun")), DisplayClass::Orange);
        assert_eq!(classify_sunlight(Some("part shade")), DisplayClass::Amber);
        assert_eq!(classify_sunlight(Some("FULL SHADE")), DisplayClass::Purple);
        assert_eq!(classify_sunlight(Some(" Full Sun ")), DisplayClass::Orange);
    }

    #[test]
    fn test_unknown_sunlight_is_neutral() {
        assert_eq!(classify_sunlight(Some("sun-part shade")), DisplayClass::Neutral);
        assert_eq!(classify_sunlight(Some("filtered shade")), DisplayClass::Neutral);
        assert_eq!(classify_sunlight(None), DisplayClass::Neutral);
    }

    #[test]
    fn test_watering_labels_do_not_classify_as_sunlight() {
        assert_eq!(classify_sunlight(Some("average")), DisplayClass::Neutral);
        assert_eq!(classify_watering(Some("full sun")), DisplayClass::Neutral);
    }

    #[test]
    fn test_css_class() {
        assert_eq!(DisplayClass::Blue.css_class(), "bg-blue-100 text-blue-800");
        assert_eq!(DisplayClass::Neutral.css_class(), "bg-muted text-muted-foreground");
        assert_eq!(DisplayClass::Purple.css_class(), "bg-purple-100 text-purple-800");
        assert_eq!(DisplayClass::default(), DisplayClass::Neutral);
    }
}
