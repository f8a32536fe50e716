use super::errors::CollageError;
use super::note::DraftNote;
use super::slots::SlotSet;
use super::types::{CollagePost, ImageRef};

/// The not-yet-submitted collage: slots plus note.
///
/// Created empty on screen entry and cleared only after a successful
/// submission has been acknowledged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollageDraft {
    slots: SlotSet,
    note: DraftNote,
}

impl CollageDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self) -> &SlotSet {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut SlotSet {
        &mut self.slots
    }

    pub fn note(&self) -> &DraftNote {
        &self.note
    }

    pub fn select_image(&mut self, index: usize, image: ImageRef) -> Result<(), CollageError> {
        self.slots.select_image(index, image)
    }

    pub fn set_note(&mut self, text: impl Into<String>) {
        self.note.set_text(text);
    }

    /// Empty all slots and the note.
    pub fn reset(&mut self) {
        self.slots.reset();
        self.note.clear();
    }

    /// Snapshot of the draft as it would be posted right now.
    ///
    /// The note is always included, even when empty.
    pub fn to_post(&self) -> CollagePost {
        CollagePost {
            collage_image: self.slots.snapshot(),
            story: self.note.as_str().to_string(),
        }
    }
}
