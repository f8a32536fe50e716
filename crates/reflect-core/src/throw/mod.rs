//! Single photo "throw" flow.
//!
//! The user picks one local image and uploads it anonymously. A successful
//! upload sends the user back to the landing screen.

pub mod bin;
pub mod errors;
pub mod session;

pub use bin::UploadBin;
pub use errors::ThrowError;
pub use session::{SelectedPhoto, ThrowSession, ThrowView, UploadFuture, UploadReceipt, UploadSink};
