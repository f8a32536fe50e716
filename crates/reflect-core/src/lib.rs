//! reflect-core: Core library for Reflect & Release
//!
//! Reflect & Release lets a user anonymously either throw away a single photo
//! or compose a four-slot mood collage with a short note. This library holds
//! the behavior; the CLI (and any future GUI) only renders snapshots and
//! dispatches named actions.
//!
//! # Main Entry Points
//!
//! - [`collage`] - Slot set, picker, draft note and the submission state machine
//! - [`state`] - Command/event dispatch over a collage session
//! - [`screens`] - Screen routing and the landing view
//! - [`throw`] - Single photo "throw" flow
//! - [`config`] - Configuration management

pub mod collage;
pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod screens;
pub mod state;
pub mod throw;

// Re-export commonly used types at crate root for convenience
pub use collage::{
    Catalog, CollageDraft, CollageError, CollageImage, CollagePost, CollageSession, CollageView,
    FailureReason, ImagePicker, ImageRef, NavigationSink, PostAck, PostError, PostJournal,
    PostSink, SLOT_COUNT, Settlement, SlotSet, StatusDialog, SubmissionController,
    SubmissionState,
};
pub use config::ReflectConfig;
pub use screens::{LandingView, Router, Screen};
pub use state::{Command, Event, Store};
pub use throw::{ThrowError, ThrowSession, UploadSink};

// Re-export logging initialization
pub use logging::init_logging;
