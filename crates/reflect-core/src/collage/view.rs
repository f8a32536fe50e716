use serde::Serialize;

use super::catalog::Catalog;
use super::status::StatusDialog;
use super::submission::FailureReason;
use super::types::ImageRef;

/// One slot as rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotView {
    pub index: usize,
    pub image: Option<ImageRef>,
}

impl SlotView {
    /// The selected image, or a numbered placeholder for an empty slot.
    pub fn display_source(&self) -> String {
        match &self.image {
            Some(image) => image.to_string(),
            None => format!(
                "https://placehold.co/200x200/E0E0E0/36454F?text={}",
                self.index + 1
            ),
        }
    }

    pub fn label(&self) -> String {
        match &self.image {
            Some(image) => Catalog::label(image).to_string(),
            None => "(empty)".to_string(),
        }
    }
}

/// The open picker as rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerView {
    pub slot: usize,
    pub title: String,
    pub candidates: Vec<ImageRef>,
}

/// Read-only snapshot of a collage session for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollageView {
    pub slots: Vec<SlotView>,
    pub note: String,
    pub submission: &'static str,
    pub failure_reason: Option<FailureReason>,
    pub submit_label: &'static str,
    pub picker: Option<PickerView>,
    pub status_dialog: Option<StatusDialog>,
}
