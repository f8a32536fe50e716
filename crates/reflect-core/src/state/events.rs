use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::collage::{FailureReason, ImageRef, Settlement};
use crate::screens::Screen;

/// Why a command was accepted but had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoredReason {
    /// The draft is locked while a post is outstanding.
    SubmissionInFlight,
    /// A status dialog must be dismissed before submitting again.
    AwaitingAcknowledgement,
    NothingToAcknowledge,
    NoPickerOpen,
}

/// Everything a dispatched command (or a settled post) can change.
///
/// Each variant describes _what happened_, not what should happen. Invalid
/// input uses the `Result` error channel instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    SlotImageSelected {
        slot: usize,
        image: ImageRef,
    },
    NoteChanged {
        text: String,
    },
    /// `replaced` names the slot of a picker that was closed to make room.
    PickerOpened {
        slot: usize,
        replaced: Option<usize>,
    },
    PickerClosed {
        slot: usize,
        committed: bool,
    },
    /// Submission failed before any post was started.
    SubmissionRejected {
        reason: FailureReason,
    },
    PostStarted,
    PostSucceeded {
        post_id: Uuid,
    },
    PostFailed,
    /// A failure notice was dismissed; the draft is untouched.
    FailureDismissed {
        reason: FailureReason,
    },
    DraftReset,
    NavigationRequested {
        to: Screen,
    },
    MutationIgnored {
        reason: IgnoredReason,
    },
}

impl Event {
    /// Events produced by settling the outstanding post. Empty while pending.
    pub fn from_settlement(settlement: &Settlement) -> Vec<Event> {
        match settlement {
            Settlement::Succeeded(ack) => vec![Event::PostSucceeded {
                post_id: ack.post_id,
            }],
            Settlement::Failed(_) => vec![Event::PostFailed],
            Settlement::Pending | Settlement::NothingPending => Vec::new(),
        }
    }
}
