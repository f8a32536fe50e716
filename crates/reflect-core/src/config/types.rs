//! Configuration type definitions.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [catalog]
//! images = ["https://placehold.co/200x200/2196F3/FFFFFF?text=Calm"]
//!
//! [post]
//! simulated_delay_ms = 0
//!
//! [submission]
//! settle_timeout_secs = 30
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.reflect/config.toml`
/// 2. Project config: `./.reflect/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReflectConfig {
    /// Candidate images offered by the collage picker
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Behavior of the built-in post sink
    #[serde(default)]
    pub post: PostConfig,

    /// Submission settlement settings
    #[serde(default)]
    pub submission: SubmissionConfig,
}

/// Candidate image catalog.
///
/// The picker offers these images in order. The list is replaced wholesale
/// when a higher-priority config sets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "super::defaults::default_catalog_images")]
    pub images: Vec<String>,
}

/// Post sink configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PostConfig {
    /// Delay in milliseconds before the in-memory journal acknowledges a post.
    /// Default: 0.
    #[serde(default)]
    pub simulated_delay_ms: u64,
}

/// Submission settlement configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SubmissionConfig {
    /// Seconds a front end waits for an in-flight post before giving up on it.
    /// Absent means wait indefinitely (the default).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settle_timeout_secs: Option<u64>,
}
