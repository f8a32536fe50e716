use tracing::debug;

use super::catalog::Catalog;
use super::errors::CollageError;
use super::slots::SlotSet;
use super::types::{ImageRef, SLOT_COUNT};

/// Transient binding of the picker to a single slot.
///
/// Exists only while the picker is open; destroyed on commit or cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerSession {
    slot: usize,
}

impl PickerSession {
    pub fn slot(&self) -> usize {
        self.slot
    }
}

/// Single modal selection surface over a fixed [`Catalog`].
///
/// Holding the session as one `Option` makes "at most one open picker" a
/// property of the type: opening a new session replaces the old one.
#[derive(Debug, Clone)]
pub struct ImagePicker {
    catalog: Catalog,
    session: Option<PickerSession>,
}

impl ImagePicker {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            session: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> Option<PickerSession> {
        self.session
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Open the picker for `slot`, closing any session already open.
    ///
    /// Returns the replaced session, if there was one.
    pub fn open(&mut self, slot: usize) -> Result<Option<PickerSession>, CollageError> {
        if slot >= SLOT_COUNT {
            return Err(CollageError::slot_out_of_range(slot));
        }

        let replaced = self.session.replace(PickerSession { slot });
        if let Some(previous) = replaced {
            debug!(
                event = "core.picker.session_replaced",
                previous_slot = previous.slot,
                slot = slot
            );
        } else {
            debug!(event = "core.picker.session_opened", slot = slot);
        }
        Ok(replaced)
    }

    /// Commit `image` to the session's slot and close the session.
    ///
    /// There is no separate confirm step.
    pub fn choose(
        &mut self,
        slots: &mut SlotSet,
        image: ImageRef,
    ) -> Result<PickerSession, CollageError> {
        let session = self.session.ok_or(CollageError::NoPickerOpen)?;
        slots.select_image(session.slot, image)?;
        self.session = None;

        debug!(event = "core.picker.image_committed", slot = session.slot);
        Ok(session)
    }

    /// Commit the catalog image at `position`.
    ///
    /// The session stays open when `position` is out of range.
    pub fn choose_at(
        &mut self,
        slots: &mut SlotSet,
        position: usize,
    ) -> Result<(PickerSession, ImageRef), CollageError> {
        if self.session.is_none() {
            return Err(CollageError::NoPickerOpen);
        }
        let image = self.catalog.get(position)?.clone();
        let session = self.choose(slots, image.clone())?;
        Ok((session, image))
    }

    /// Close the session without touching any slot.
    pub fn cancel(&mut self) -> Option<PickerSession> {
        let closed = self.session.take();
        if let Some(session) = closed {
            debug!(event = "core.picker.session_cancelled", slot = session.slot);
        }
        closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker() -> ImagePicker {
        ImagePicker::new(Catalog::new(["a.png", "b.png", "c.png"]).unwrap())
    }

    fn image(name: &str) -> ImageRef {
        ImageRef::new(name).unwrap()
    }

    #[test]
    fn test_choose_commits_and_closes() {
        let mut picker = picker();
        let mut slots = SlotSet::new();

        picker.open(2).unwrap();
        let session = picker.choose(&mut slots, image("b.png")).unwrap();

        assert_eq!(session.slot(), 2);
        assert!(!picker.is_open());
        assert_eq!(slots.get(2), Some(&image("b.png")));
        assert_eq!(slots.filled_count(), 1);
    }

    #[test]
    fn test_last_open_wins() {
        let mut picker = picker();
        let mut slots = SlotSet::new();

        assert_eq!(picker.open(1).unwrap(), None);
        let replaced = picker.open(3).unwrap();
        assert_eq!(replaced.map(|s| s.slot()), Some(1));
        assert_eq!(picker.session().map(|s| s.slot()), Some(3));

        picker.choose(&mut slots, image("c.png")).unwrap();

        assert_eq!(slots.get(1), None);
        assert_eq!(slots.get(3), Some(&image("c.png")));
    }

    #[test]
    fn test_cancel_leaves_slots_untouched() {
        let mut picker = picker();
        let mut slots = SlotSet::new();
        slots.select_image(0, image("a.png")).unwrap();

        picker.open(0).unwrap();
        let closed = picker.cancel();

        assert_eq!(closed.map(|s| s.slot()), Some(0));
        assert!(!picker.is_open());
        assert_eq!(slots.get(0), Some(&image("a.png")));
    }

    #[test]
    fn test_cancel_without_session_is_noop() {
        let mut picker = picker();
        assert_eq!(picker.cancel(), None);
    }

    #[test]
    fn test_choose_without_session_fails() {
        let mut picker = picker();
        let mut slots = SlotSet::new();
        let err = picker.choose(&mut slots, image("a.png")).unwrap_err();
        assert_eq!(err, CollageError::NoPickerOpen);
        assert!(!slots.has_any_selection());
    }

    #[test]
    fn test_open_out_of_range_keeps_existing_session() {
        let mut picker = picker();
        picker.open(1).unwrap();

        let err = picker.open(SLOT_COUNT).unwrap_err();

        assert!(matches!(err, CollageError::SlotOutOfRange { .. }));
        assert_eq!(picker.session().map(|s| s.slot()), Some(1));
    }

    #[test]
    fn test_choose_at_resolves_catalog_position() {
        let mut picker = picker();
        let mut slots = SlotSet::new();
        picker.open(0).unwrap();

        let (session, chosen) = picker.choose_at(&mut slots, 1).unwrap();

        assert_eq!(session.slot(), 0);
        assert_eq!(chosen, image("b.png"));
        assert_eq!(slots.get(0), Some(&image("b.png")));
    }

    #[test]
    fn test_choose_at_out_of_range_keeps_session_open() {
        let mut picker = picker();
        let mut slots = SlotSet::new();
        picker.open(0).unwrap();

        let err = picker.choose_at(&mut slots, 9).unwrap_err();

        assert_eq!(err, CollageError::CatalogIndexOutOfRange { index: 9, len: 3 });
        assert!(picker.is_open());
        assert!(!slots.has_any_selection());
    }
}
