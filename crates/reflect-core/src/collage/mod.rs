//! Collage composition and submission.
//!
//! A [`CollageSession`] owns one [`CollageDraft`] (four image slots plus a
//! free-text note), a single-surface [`ImagePicker`] and the
//! [`SubmissionController`] state machine. Front ends render
//! [`CollageSession::view`] and call its named actions; they never mutate the
//! draft directly.

pub mod catalog;
pub mod draft;
pub mod errors;
pub mod journal;
pub mod note;
pub mod picker;
pub mod ports;
pub mod session;
pub mod slots;
pub mod status;
pub mod submission;
#[cfg(test)]
pub(crate) mod test_helpers;
pub mod types;
pub mod view;

pub use catalog::Catalog;
pub use draft::CollageDraft;
pub use errors::CollageError;
pub use journal::PostJournal;
pub use note::DraftNote;
pub use picker::{ImagePicker, PickerSession};
pub use ports::{NavigationSink, PostError, PostFuture, PostSink};
pub use session::CollageSession;
pub use slots::SlotSet;
pub use status::{StatusDialog, StatusKind};
pub use submission::{
    Acknowledgement, FailureReason, Settlement, SubmissionController, SubmissionState,
    SubmitOutcome,
};
pub use types::{CollageImage, CollagePost, ImageRef, PostAck, SLOT_COUNT};
pub use view::{CollageView, PickerView, SlotView};
