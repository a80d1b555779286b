//! Catalog module - Static reference data for the field team.
//!
//! - `hcp_directory` - Known HCPs and follow-ups tailored to them
//! - `materials` - Product collateral and topic-based resource suggestions

mod hcp_directory;
mod materials;

pub use hcp_directory::{
    find_hcp, personalized_follow_ups, HcpProfile, HCP_DIRECTORY, MAX_PERSONALIZED_FOLLOW_UPS,
};
pub use materials::{
    suggest_resources, ProductMaterials, DEFAULT_RESOURCES, MAX_SUGGESTED_RESOURCES,
    PRODUCT_MATERIALS,
};
