use serde::Serialize;

use super::submission::SubmissionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Success,
    Failure,
}

/// Status notice derived from the submission state.
///
/// Holds no state of its own: it is visible iff the submission is
/// `Succeeded` or `Failed`, and dismissing it means calling
/// `CollageSession::acknowledge`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusDialog {
    pub kind: StatusKind,
    pub title: &'static str,
    pub description: &'static str,
    pub dismiss_label: &'static str,
}

impl StatusDialog {
    pub fn for_state(state: &SubmissionState) -> Option<Self> {
        match state {
            SubmissionState::Succeeded(_) => Some(Self {
                kind: StatusKind::Success,
                title: "Collage Saved!",
                description: "Your collage has been anonymously saved.",
                dismiss_label: "OK",
            }),
            SubmissionState::Failed(reason) => Some(Self {
                kind: StatusKind::Failure,
                title: "Error",
                description: reason.message(),
                dismiss_label: "Close",
            }),
            _ => None,
        }
    }

    pub fn is_visible(state: &SubmissionState) -> bool {
        state.is_terminal()
    }
}

/// Label of the submit button: a transient posting indicator while in flight.
pub fn submit_label(state: &SubmissionState) -> &'static str {
    match state {
        SubmissionState::InFlight => "Posting...",
        _ => "Save Collage",
    }
}
