use super::errors::CollageError;
use super::types::{CollageImage, ImageRef, SLOT_COUNT};

/// Fixed set of [`SLOT_COUNT`] independently addressable image slots.
///
/// Exactly `SLOT_COUNT` slots always exist; each is either empty or holds
/// one [`ImageRef`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotSet {
    slots: [Option<ImageRef>; SLOT_COUNT],
}

impl SlotSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `image` into slot `index`, replacing whatever was there.
    ///
    /// Other slots are untouched.
    pub fn select_image(&mut self, index: usize, image: ImageRef) -> Result<(), CollageError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or_else(|| CollageError::slot_out_of_range(index))?;
        *slot = Some(image);
        Ok(())
    }

    /// Empty every slot.
    pub fn reset(&mut self) {
        self.slots = Default::default();
    }

    /// True iff at least one slot holds an image.
    ///
    /// This is the only completeness rule for submission: partial collages are valid.
    pub fn has_any_selection(&self) -> bool {
        self.slots.iter().any(Option::is_some)
    }

    /// The image in slot `index`, or `None` if the slot is empty or out of range.
    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&ImageRef>> {
        self.slots.iter().map(Option::as_ref)
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Owned copy of the slots, detached from later edits.
    pub fn snapshot(&self) -> CollageImage {
        CollageImage::new(self.slots.clone())
    }
}
