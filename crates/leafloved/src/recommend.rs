//! Preference matching and recommendation.
//!
//! A strict conjunctive filter over the catalog: a plant is recommended iff
//! every per-field predicate passes. There is no scoring and no ranking
//! beyond the final sort by name.

use leaflove_common::{catalog, Plant, PlantPreferences};

/// Filter the whole catalog through the matcher and sort by name.
pub fn recommend(prefs: &PlantPreferences) -> Vec<Plant> {
    recommend_from(catalog(), prefs)
}

/// Same, against an explicit plant list. Preferences are normalized here, so
/// callers may pass raw form/query values. The sort is stable: plants with
/// identical names keep their input order.
pub fn recommend_from(plants: &[Plant], prefs: &PlantPreferences) -> Vec<Plant> {
    let prefs = prefs.normalized();
    let mut out: Vec<Plant> = plants
        .iter()
        .filter(|p| matches_all(p, &prefs))
        .cloned()
        .collect();
    out.sort_by(|a, b| a.name.cmp(&b.name));
    out
}

/// A plant matches when every per-field predicate passes. Expects an
/// already-normalized preference set.
pub fn matches_all(plant: &Plant, prefs: &PlantPreferences) -> bool {
    matches_light(plant, prefs)
        && matches_care(plant, prefs)
        && matches_type(plant, prefs)
        && matches_location(plant, prefs)
        && matches_size(plant, prefs)
}

fn matches_light(plant: &Plant, prefs: &PlantPreferences) -> bool {
    if prefs.light_condition.is_empty() {
        return true;
    }
    plant
        .light_condition
        .iter()
        .any(|tag| tag.trim().eq_ignore_ascii_case(&prefs.light_condition))
}

fn matches_care(plant: &Plant, prefs: &PlantPreferences) -> bool {
    prefs.care_level.is_empty() || plant.care_level == prefs.care_level
}

fn matches_type(plant: &Plant, prefs: &PlantPreferences) -> bool {
    if prefs.plant_type.is_empty() || prefs.plant_type == "any" {
        return true;
    }
    plant.plant_type == prefs.plant_type
}

fn matches_location(plant: &Plant, prefs: &PlantPreferences) -> bool {
    if prefs.location.is_empty() || prefs.location == "both" {
        return true;
    }
    // A plant rated for both locations satisfies either specific ask.
    plant.location == prefs.location || plant.location == "both"
}

fn matches_size(plant: &Plant, prefs: &PlantPreferences) -> bool {
    if prefs.size.is_empty() || prefs.size == "any" {
        return true;
    }
    plant.size == prefs.size
}

#[cfg(test)]
mod tests {
    use super::*;
    use leaflove_common::CareInstructions;

    fn plant(name: &str, light: &[&str], care: &str, kind: &str, location: &str, size: &str) -> Plant {
        Plant {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            scientific_name: format!("{name}us testus"),
            description: format!("{name} for testing"),
            image: format!("/static/img/{name}.jpg"),
            light_condition: light.iter().map(|s| s.to_string()).collect(),
            care_level: care.to_string(),
            plant_type: kind.to_string(),
            location: location.to_string(),
            size: size.to_string(),
            features: vec![],
            care: CareInstructions {
                watering: "weekly".to_string(),
                light: "indirect".to_string(),
                temperature: "18-24C".to_string(),
                humidity: "average".to_string(),
            },
        }
    }

    fn prefs(light: &str, care: &str, kind: &str, location: &str, size: &str) -> PlantPreferences {
        PlantPreferences {
            light_condition: light.to_string(),
            care_level: care.to_string(),
            plant_type: kind.to_string(),
            location: location.to_string(),
            size: size.to_string(),
        }
    }

    #[test]
    fn empty_preferences_match_every_plant() {
        let plants = vec![
            plant("Aloe", &["full-sun"], "low", "succulent", "both", "small"),
            plant("Fern", &["low-light"], "high", "foliage", "indoor", "medium"),
        ];
        let out = recommend_from(&plants, &PlantPreferences::default());
        assert_eq!(out.len(), plants.len());
    }

    #[test]
    fn matching_depends_only_on_normalized_form() {
        let plants = vec![plant("Aloe", &["full-sun"], "low", "succulent", "both", "small")];
        let raw = prefs("  Full-Sun ", "", "", "", "");
        let clean = prefs("full-sun", "", "", "", "");
        assert_eq!(
            recommend_from(&plants, &raw),
            recommend_from(&plants, &clean)
        );
        assert_eq!(recommend_from(&plants, &raw).len(), 1);
    }

    #[test]
    fn light_matches_any_tag_in_the_set() {
        let p = plant("Fern", &["low-light", "partial-shade"], "high", "foliage", "indoor", "medium");
        assert!(matches_all(&p, &prefs("partial-shade", "", "", "", "")));
        assert!(matches_all(&p, &prefs("low-light", "", "", "", "")));
        assert!(!matches_all(&p, &prefs("full-sun", "", "", "", "")));
    }

    #[test]
    fn location_partial_order() {
        let both = plant("Aloe", &["full-sun"], "low", "succulent", "both", "small");
        for want in ["", "both", "indoor", "outdoor"] {
            assert!(
                matches_all(&both, &prefs("", "", "", want, "")),
                "plant 'both' should pass preference {want:?}"
            );
        }

        let indoor = plant("Fern", &["low-light"], "high", "foliage", "indoor", "medium");
        assert!(!matches_all(&indoor, &prefs("", "", "", "outdoor", "")));
        for want in ["", "both", "indoor"] {
            assert!(
                matches_all(&indoor, &prefs("", "", "", want, "")),
                "plant 'indoor' should pass preference {want:?}"
            );
        }
    }

    #[test]
    fn any_sentinel_passes_type_and_size() {
        let p = plant("Aloe", &["full-sun"], "low", "succulent", "both", "small");
        assert!(matches_all(&p, &prefs("", "", "any", "", "any")));
        assert!(!matches_all(&p, &prefs("", "", "foliage", "", "")));
        assert!(!matches_all(&p, &prefs("", "", "", "", "large")));
    }

    #[test]
    fn filter_is_conjunctive() {
        let plants = vec![
            plant("Aloe", &["full-sun"], "low", "succulent", "both", "small"),
            plant("Cactus", &["full-sun"], "high", "succulent", "both", "small"),
        ];
        let out = recommend_from(&plants, &prefs("", "high", "succulent", "", ""));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Cactus");
    }

    #[test]
    fn results_sorted_by_name_and_stable_for_duplicates() {
        let mut first = plant("Twin", &["full-sun"], "low", "succulent", "both", "small");
        first.id = "twin-a".to_string();
        let mut second = plant("Twin", &["full-sun"], "low", "succulent", "both", "large");
        second.id = "twin-b".to_string();
        let plants = vec![
            plant("Zinnia", &["full-sun"], "low", "flowering", "outdoor", "small"),
            first,
            plant("Aloe", &["full-sun"], "low", "succulent", "both", "small"),
            second,
        ];

        let out = recommend_from(&plants, &PlantPreferences::default());
        let names: Vec<_> = out.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Aloe", "Twin", "Twin", "Zinnia"]);
        // Equal names keep their input order.
        assert_eq!(out[1].id, "twin-a");
        assert_eq!(out[2].id, "twin-b");
    }

    #[test]
    fn engine_is_idempotent() {
        let plants = vec![
            plant("Aloe", &["full-sun"], "low", "succulent", "both", "small"),
            plant("Fern", &["low-light"], "high", "foliage", "indoor", "medium"),
        ];
        let wants = prefs("", "", "", "indoor", "");
        assert_eq!(
            recommend_from(&plants, &wants),
            recommend_from(&plants, &wants)
        );
    }

    #[test]
    fn unrecognized_values_match_nothing() {
        let plants = vec![plant("Aloe", &["full-sun"], "low", "succulent", "both", "small")];
        assert!(recommend_from(&plants, &prefs("", "extreme", "", "", "")).is_empty());
    }

    #[test]
    fn static_catalog_recommendation_is_sorted() {
        let out = recommend(&PlantPreferences::default());
        assert_eq!(out.len(), catalog().len());
        let names: Vec<_> = out.iter().map(|p| p.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
