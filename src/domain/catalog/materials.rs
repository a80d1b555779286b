//! Product collateral and resource suggestions.

use crate::domain::interaction::InteractionUpdate;

/// Collateral available for one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductMaterials {
    pub product: &'static str,
    /// Lowercase fragment that identifies the product in free text.
    pub keyword: &'static str,
    pub materials: &'static [&'static str],
}

pub const PRODUCT_MATERIALS: &[ProductMaterials] = &[
    ProductMaterials {
        product: "OncoBoost",
        keyword: "oncoboost",
        materials: &[
            "Phase III trial results",
            "Patient selection guide",
            "Dosing information",
        ],
    },
    ProductMaterials {
        product: "CardioPlus",
        keyword: "cardio",
        materials: &["Efficacy data", "Comparison chart", "Safety profile"],
    },
    ProductMaterials {
        product: "NeuroCalm",
        keyword: "neuro",
        materials: &[
            "Clinical outcomes",
            "Patient case studies",
            "Administration guide",
        ],
    },
];

pub const DEFAULT_RESOURCES: [&str; 3] = [
    "Company overview brochure",
    "Product catalog",
    "Recent publications list",
];

pub const MAX_SUGGESTED_RESOURCES: usize = 3;

/// Suggests collateral to share based on the topics in an update.
///
/// Products are tried in catalog order and the first one whose keyword
/// appears in `topicsDiscussed` wins; without topics or a known product the
/// company defaults are returned.
pub fn suggest_resources(update: &InteractionUpdate) -> Vec<String> {
    let topics = update
        .topics_discussed
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();

    let materials = PRODUCT_MATERIALS
        .iter()
        .find(|p| topics.contains(p.keyword))
        .map(|p| p.materials)
        .unwrap_or(&DEFAULT_RESOURCES);

    let mut resources: Vec<String> = Vec::with_capacity(MAX_SUGGESTED_RESOURCES);
    for material in materials {
        if resources.len() == MAX_SUGGESTED_RESOURCES {
            break;
        }
        if !resources.iter().any(|r| r == material) {
            resources.push(material.to_string());
        }
    }
    resources
}
