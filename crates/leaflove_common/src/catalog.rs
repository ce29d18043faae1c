//! The static plant catalog.
//!
//! Built once on first access and never mutated afterwards, so handlers can
//! share it without synchronization.

use once_cell::sync::Lazy;

use crate::types::{CareInstructions, Plant};

static CATALOG: Lazy<Vec<Plant>> = Lazy::new(build_catalog);

/// The full read-only catalog the advisor recommends from.
pub fn catalog() -> &'static [Plant] {
    &CATALOG
}

fn build_catalog() -> Vec<Plant> {
    vec![
        Plant {
            id: "snake-plant".into(),
            name: "Snake Plant".into(),
            scientific_name: "Sansevieria trifasciata".into(),
            description: "Nearly indestructible upright foliage that tolerates neglect and dim corners.".into(),
            image: "/static/img/snake-plant.jpg".into(),
            light_condition: vec!["low-light".into(), "partial-shade".into()],
            care_level: "low".into(),
            plant_type: "foliage".into(),
            location: "indoor".into(),
            size: "medium".into(),
            features: vec!["air-purifying".into(), "drought-tolerant".into()],
            care: CareInstructions {
                watering: "Every 2-3 weeks, let soil dry out fully".into(),
                light: "Any indirect light, survives low light".into(),
                temperature: "15-29C".into(),
                humidity: "Low, average room air is fine".into(),
            },
        },
        Plant {
            id: "golden-pothos".into(),
            name: "Golden Pothos".into(),
            scientific_name: "Epipremnum aureum".into(),
            description: "Trailing vine with marbled leaves, happy on a shelf or in a hanging pot.".into(),
            image: "/static/img/golden-pothos.jpg".into(),
            light_condition: vec!["low-light".into(), "partial-shade".into()],
            care_level: "low".into(),
            plant_type: "foliage".into(),
            location: "indoor".into(),
            size: "small".into(),
            features: vec!["trailing".into(), "air-purifying".into(), "easy-propagation".into()],
            care: CareInstructions {
                watering: "Weekly, when topsoil feels dry".into(),
                light: "Bright to low indirect light".into(),
                temperature: "18-29C".into(),
                humidity: "Average".into(),
            },
        },
        Plant {
            id: "monstera".into(),
            name: "Monstera".into(),
            scientific_name: "Monstera deliciosa".into(),
            description: "Statement plant with split leaves that grows into a living-room centerpiece.".into(),
            image: "/static/img/monstera.jpg".into(),
            light_condition: vec!["partial-shade".into()],
            care_level: "medium".into(),
            plant_type: "foliage".into(),
            location: "indoor".into(),
            size: "large".into(),
            features: vec!["split-leaves".into(), "fast-growing".into()],
            care: CareInstructions {
                watering: "Weekly, less in winter".into(),
                light: "Bright indirect light, no harsh sun".into(),
                temperature: "18-27C".into(),
                humidity: "Medium to high".into(),
            },
        },
        Plant {
            id: "peace-lily".into(),
            name: "Peace Lily".into(),
            scientific_name: "Spathiphyllum wallisii".into(),
            description: "Glossy leaves and white spathes; droops politely when thirsty.".into(),
            image: "/static/img/peace-lily.jpg".into(),
            light_condition: vec!["low-light".into(), "partial-shade".into()],
            care_level: "medium".into(),
            plant_type: "flowering".into(),
            location: "indoor".into(),
            size: "medium".into(),
            features: vec!["air-purifying".into(), "white-blooms".into()],
            care: CareInstructions {
                watering: "Weekly, keep soil lightly moist".into(),
                light: "Low to medium indirect light".into(),
                temperature: "18-26C".into(),
                humidity: "Medium to high".into(),
            },
        },
        Plant {
            id: "aloe-vera".into(),
            name: "Aloe Vera".into(),
            scientific_name: "Aloe barbadensis miller".into(),
            description: "Forgiving succulent with soothing gel inside its fleshy leaves.".into(),
            image: "/static/img/aloe-vera.jpg".into(),
            light_condition: vec!["full-sun".into(), "partial-shade".into()],
            care_level: "low".into(),
            plant_type: "succulent".into(),
            location: "both".into(),
            size: "small".into(),
            features: vec!["medicinal".into(), "drought-tolerant".into()],
            care: CareInstructions {
                watering: "Every 3 weeks, sparingly in winter".into(),
                light: "Bright light, tolerates direct sun".into(),
                temperature: "13-27C".into(),
                humidity: "Low".into(),
            },
        },
        Plant {
            id: "echeveria".into(),
            name: "Echeveria".into(),
            scientific_name: "Echeveria elegans".into(),
            description: "Compact rosette succulent that thrives on a sunny windowsill.".into(),
            image: "/static/img/echeveria.jpg".into(),
            light_condition: vec!["full-sun".into()],
            care_level: "low".into(),
            plant_type: "succulent".into(),
            location: "both".into(),
            size: "small".into(),
            features: vec!["rosette".into(), "pet-friendly".into()],
            care: CareInstructions {
                watering: "Every 2-3 weeks, soak and dry".into(),
                light: "Full sun to bright light".into(),
                temperature: "18-27C".into(),
                humidity: "Low".into(),
            },
        },
        Plant {
            id: "lavender".into(),
            name: "Lavender".into(),
            scientific_name: "Lavandula angustifolia".into(),
            description: "Fragrant purple spikes that bees adore; wants sun and sharp drainage.".into(),
            image: "/static/img/lavender.jpg".into(),
            light_condition: vec!["full-sun".into()],
            care_level: "medium".into(),
            plant_type: "flowering".into(),
            location: "outdoor".into(),
            size: "medium".into(),
            features: vec!["fragrant".into(), "pollinator-friendly".into()],
            care: CareInstructions {
                watering: "Every 1-2 weeks once established".into(),
                light: "6+ hours of direct sun".into(),
                temperature: "Hardy to -15C".into(),
                humidity: "Low, dislikes damp air".into(),
            },
        },
        Plant {
            id: "hydrangea".into(),
            name: "Hydrangea".into(),
            scientific_name: "Hydrangea macrophylla".into(),
            description: "Big mophead blooms whose color shifts with soil pH; rewards attentive care.".into(),
            image: "/static/img/hydrangea.jpg".into(),
            light_condition: vec!["partial-shade".into()],
            care_level: "high".into(),
            plant_type: "flowering".into(),
            location: "outdoor".into(),
            size: "large".into(),
            features: vec!["color-changing".into(), "long-blooming".into()],
            care: CareInstructions {
                watering: "Deeply 2-3 times a week in summer".into(),
                light: "Morning sun, afternoon shade".into(),
                temperature: "Hardy to -20C".into(),
                humidity: "Medium".into(),
            },
        },
        Plant {
            id: "fiddle-leaf-fig".into(),
            name: "Fiddle Leaf Fig".into(),
            scientific_name: "Ficus lyrata".into(),
            description: "Dramatic violin-shaped leaves; particular about light, water and drafts.".into(),
            image: "/static/img/fiddle-leaf-fig.jpg".into(),
            light_condition: vec!["partial-shade".into()],
            care_level: "high".into(),
            plant_type: "foliage".into(),
            location: "indoor".into(),
            size: "large".into(),
            features: vec!["sculptural".into(), "statement-plant".into()],
            care: CareInstructions {
                watering: "Weekly, evenly moist but never soggy".into(),
                light: "Bright, filtered light near a window".into(),
                temperature: "18-24C, no cold drafts".into(),
                humidity: "Medium".into(),
            },
        },
        Plant {
            id: "boston-fern".into(),
            name: "Boston Fern".into(),
            scientific_name: "Nephrolepis exaltata".into(),
            description: "Lush arching fronds that demand steady moisture and humid air.".into(),
            image: "/static/img/boston-fern.jpg".into(),
            light_condition: vec!["partial-shade".into(), "low-light".into()],
            care_level: "high".into(),
            plant_type: "foliage".into(),
            location: "both".into(),
            size: "medium".into(),
            features: vec!["air-purifying".into(), "pet-friendly".into()],
            care: CareInstructions {
                watering: "2-3 times a week, never let it dry".into(),
                light: "Indirect light, no direct sun".into(),
                temperature: "16-24C".into(),
                humidity: "High, mist regularly".into(),
            },
        },
        Plant {
            id: "rosemary".into(),
            name: "Rosemary".into(),
            scientific_name: "Salvia rosmarinus".into(),
            description: "Evergreen kitchen herb that doubles as fragrant ornamental shrub.".into(),
            image: "/static/img/rosemary.jpg".into(),
            light_condition: vec!["full-sun".into()],
            care_level: "low".into(),
            plant_type: "foliage".into(),
            location: "both".into(),
            size: "medium".into(),
            features: vec!["edible".into(), "fragrant".into(), "drought-tolerant".into()],
            care: CareInstructions {
                watering: "Every 1-2 weeks, drought tolerant".into(),
                light: "Full sun".into(),
                temperature: "10-30C".into(),
                humidity: "Low".into(),
            },
        },
        Plant {
            id: "marigold".into(),
            name: "Marigold".into(),
            scientific_name: "Tagetes erecta".into(),
            description: "Cheerful orange annual that flowers all season and deters garden pests.".into(),
            image: "/static/img/marigold.jpg".into(),
            light_condition: vec!["full-sun".into()],
            care_level: "low".into(),
            plant_type: "flowering".into(),
            location: "outdoor".into(),
            size: "small".into(),
            features: vec!["pest-repelling".into(), "long-blooming".into()],
            care: CareInstructions {
                watering: "2 times a week at the base".into(),
                light: "Full sun".into(),
                temperature: "18-30C, frost tender".into(),
                humidity: "Average".into(),
            },
        },
    ]
}
