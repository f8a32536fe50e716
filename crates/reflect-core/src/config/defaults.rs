//! Default implementations for configuration types.
//!
//! This module contains all `Default` implementations and helper functions
//! for providing default values in serde deserialization.

use crate::config::types::CatalogConfig;

/// The built-in mood images, one per feeling.
pub const DEFAULT_CATALOG_IMAGES: [&str; 10] = [
    "https://placehold.co/200x200/F44336/FFFFFF?text=Sad",
    "https://placehold.co/200x200/4CAF50/FFFFFF?text=Happy",
    "https://placehold.co/200x200/2196F3/FFFFFF?text=Calm",
    "https://placehold.co/200x200/FFC107/000000?text=Anxious",
    "https://placehold.co/200x200/9C27B0/FFFFFF?text=Reflective",
    "https://placehold.co/200x200/00BCD4/000000?text=Energetic",
    "https://placehold.co/200x200/607D8B/FFFFFF?text=Neutral",
    "https://placehold.co/200x200/8BC34A/FFFFFF?text=Hopeful",
    "https://placehold.co/200x200/FF5722/FFFFFF?text=Frustrated",
    "https://placehold.co/200x200/3F51B5/FFFFFF?text=Content",
];

/// Returns the default catalog images.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_catalog_images() -> Vec<String> {
    DEFAULT_CATALOG_IMAGES
        .iter()
        .map(|image| image.to_string())
        .collect()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            images: default_catalog_images(),
        }
    }
}
