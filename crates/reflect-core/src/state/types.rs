use serde::{Deserialize, Serialize};

/// Every user action a collage session accepts.
///
/// Commands use owned types so they can be read from JSON lines and sent
/// across boundaries. Image references are validated on dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Put `image` into slot `index`, replacing whatever was there.
    SelectSlotImage { index: usize, image: String },
    /// Replace the note verbatim.
    SetNote { text: String },
    /// Open the picker for a slot. Closes any picker that is already open.
    OpenPicker { slot: usize },
    /// Commit an image to the open picker's slot and close it.
    ChooseImage { image: String },
    /// Commit the catalog entry at `position` to the open picker's slot.
    ChooseCatalogImage { position: usize },
    /// Close the picker without touching the slots.
    CancelPicker,
    Submit,
    /// Dismiss the status dialog.
    Acknowledge,
}
