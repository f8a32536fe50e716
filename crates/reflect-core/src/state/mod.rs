//! Command/event dispatch over a collage session.
//!
//! Front ends translate user actions into [`Command`]s and react to the
//! returned [`Event`]s instead of reaching into the draft.

pub mod dispatch;
pub mod events;
pub mod store;
pub mod types;

pub use events::{Event, IgnoredReason};
pub use store::Store;
pub use types::Command;
