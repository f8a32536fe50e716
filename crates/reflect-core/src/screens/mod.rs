//! Top-level screens and navigation.

pub mod landing;
pub mod router;

use serde::{Deserialize, Serialize};

pub use landing::LandingView;
pub use router::Router;

/// Screens the user can navigate between.
///
/// Serialized with the identifiers navigation sinks receive (`"landing"`,
/// `"dump"`, `"collage"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    #[serde(rename = "landing")]
    Landing,
    #[serde(rename = "dump")]
    Throw,
    #[serde(rename = "collage")]
    Collage,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Landing => "landing",
            Screen::Throw => "dump",
            Screen::Collage => "collage",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
