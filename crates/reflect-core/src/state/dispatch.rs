use tracing::{debug, error, info};

use crate::collage::{CollageError, CollageSession, ImageRef};
use crate::state::events::Event;
use crate::state::store::Store;
use crate::state::types::Command;

impl Store for CollageSession {
    type Error = CollageError;

    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, CollageError> {
        debug!(event = "core.state.dispatch_started", command = ?cmd);

        let result = match cmd {
            Command::SelectSlotImage { index, image } => ImageRef::new(image)
                .and_then(|image| self.select_slot_image(index, image)),
            Command::SetNote { text } => Ok(self.set_note(text)),
            Command::OpenPicker { slot } => self.open_picker(slot),
            Command::ChooseImage { image } => {
                ImageRef::new(image).and_then(|image| self.choose_image(image))
            }
            Command::ChooseCatalogImage { position } => self.choose_catalog_image(position),
            Command::CancelPicker => Ok(self.cancel_picker()),
            Command::Submit => Ok(self.submit()),
            Command::Acknowledge => Ok(self.acknowledge()),
        };

        match &result {
            Ok(events) => info!(
                event = "core.state.dispatch_completed",
                event_count = events.len()
            ),
            Err(e) => error!(event = "core.state.dispatch_failed", error = %e),
        }

        result
    }
}
