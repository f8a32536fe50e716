use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::CollageError;

/// Number of image slots in every collage.
pub const SLOT_COUNT: usize = 4;

/// Opaque reference to an image (identifier or URL).
///
/// Never blank: an empty slot is `None`, not an empty reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(value: impl Into<String>) -> Result<Self, CollageError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(CollageError::EmptyImageRef);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ImageRef {
    type Error = CollageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ImageRef> for String {
    fn from(image: ImageRef) -> Self {
        image.0
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The collage representation handed to the post sink.
///
/// The sink owns the encoding; the core only guarantees slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollageImage {
    slots: [Option<ImageRef>; SLOT_COUNT],
}

impl CollageImage {
    pub fn new(slots: [Option<ImageRef>; SLOT_COUNT]) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[Option<ImageRef>; SLOT_COUNT] {
        &self.slots
    }

    /// Selected images in slot order, skipping empty slots.
    pub fn images(&self) -> impl Iterator<Item = &ImageRef> {
        self.slots.iter().flatten()
    }
}

/// A validated submission: collage snapshot plus the note, verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollagePost {
    pub collage_image: CollageImage,
    pub story: String,
}

/// Acknowledgment returned by a post sink for a stored post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAck {
    pub post_id: Uuid,
    pub posted_at: DateTime<Utc>,
}

impl PostAck {
    /// Fresh acknowledgment with a random id, stamped now.
    pub fn new() -> Self {
        Self {
            post_id: Uuid::new_v4(),
            posted_at: Utc::now(),
        }
    }
}

impl Default for PostAck {
    fn default() -> Self {
        Self::new()
    }
}
