//! Plant catalog types and visitor preferences.
//!
//! Wire shape is camelCase and fixed; the JSON API and the HTML form both
//! use these field names.

use serde::{Deserialize, Serialize};

/// Display-only care guidance shown on a result card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareInstructions {
    pub watering: String,
    pub light: String,
    pub temperature: String,
    pub humidity: String,
}

/// A single catalog entry. Matchable fields (`light_condition`, `care_level`,
/// `plant_type`, `location`, `size`) are stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: String,
    pub name: String,
    pub scientific_name: String,
    pub description: String,
    pub image: String,
    /// Light tag set: "full-sun" | "partial-shade" | "low-light".
    pub light_condition: Vec<String>,
    /// "low" | "medium" | "high".
    pub care_level: String,
    /// "flowering" | "foliage" | "succulent".
    pub plant_type: String,
    /// "indoor" | "outdoor" | "both" ("both" means usable in either).
    pub location: String,
    /// "small" | "medium" | "large".
    pub size: String,
    /// Free-text display tags, never matched against.
    pub features: Vec<String>,
    #[serde(rename = "careInstructions")]
    pub care: CareInstructions,
}

/// The five optional filter fields a visitor submits. An empty string means
/// "no preference" for that field, so absent form/query keys deserialize to
/// a pass-everything filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlantPreferences {
    pub light_condition: String,
    pub care_level: String,
    pub plant_type: String,
    pub location: String,
    pub size: String,
}

impl PlantPreferences {
    /// Trim and lowercase every field. Plant fields are stored lowercase, so
    /// after this the matcher can use plain string comparison. Unrecognized
    /// values are kept verbatim; they simply match nothing.
    pub fn normalized(&self) -> Self {
        fn norm(s: &str) -> String {
            s.trim().to_ascii_lowercase()
        }

        Self {
            light_condition: norm(&self.light_condition),
            care_level: norm(&self.care_level),
            plant_type: norm(&self.plant_type),
            location: norm(&self.location),
            size: norm(&self.size),
        }
    }
}
