//! # Configuration System
//!
//! Hierarchical TOML configuration for Reflect & Release.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.reflect/config.toml` (global user preferences)
//! 3. **Project config** - `./.reflect/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.reflect/config.toml
//! [catalog]
//! images = [
//!     "https://placehold.co/200x200/F44336/FFFFFF?text=Sad",
//!     "https://placehold.co/200x200/4CAF50/FFFFFF?text=Happy",
//! ]
//!
//! [post]
//! simulated_delay_ms = 2000
//!
//! [submission]
//! settle_timeout_secs = 30
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use reflect_core::config::ReflectConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ReflectConfig::load_hierarchy()?;
//!     let catalog = config.catalog()?;
//!     println!("{} candidate images", catalog.len());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

use std::time::Duration;

use crate::collage::{Catalog, CollageError};

// Public API exports
pub use types::{CatalogConfig, PostConfig, ReflectConfig, SubmissionConfig};
pub use validation::validate_config;

impl ReflectConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, Box<dyn std::error::Error>> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }

    /// Build the candidate image catalog from `[catalog] images`.
    pub fn catalog(&self) -> Result<Catalog, CollageError> {
        Catalog::new(self.catalog.images.iter().cloned())
    }

    /// Delay the in-memory journal sink applies before acknowledging a post.
    pub fn simulated_post_delay(&self) -> Duration {
        Duration::from_millis(self.post.simulated_delay_ms)
    }

    /// How long a front end should wait for an in-flight post to settle.
    ///
    /// `None` means wait indefinitely.
    pub fn settle_timeout(&self) -> Option<Duration> {
        self.submission.settle_timeout_secs.map(Duration::from_secs)
    }
}
