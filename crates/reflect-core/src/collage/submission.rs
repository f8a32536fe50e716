//! Submission state machine.
//!
//! ```text
//! Idle --submit--> Validating --no image--> Failed(NoImageSelected)
//!                       |
//!                       +--ok--> InFlight --post resolves--> Succeeded
//!                                         --post rejects--> Failed(PostFailed)
//! Succeeded | Failed --acknowledge--> Idle
//! ```
//!
//! Only one post can be outstanding: `submit()` outside `Idle` is ignored.

use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use serde::{Deserialize, Serialize};
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, error, info, warn};

use super::draft::CollageDraft;
use super::errors::CollageError;
use super::ports::{PostError, PostSink};
use super::types::PostAck;

/// Why a submission did not succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// Every slot was empty at validation time.
    NoImageSelected,
    /// The post sink rejected the submission (or its task died).
    PostFailed,
}

impl FailureReason {
    pub fn error_code(&self) -> &'static str {
        match self {
            FailureReason::NoImageSelected => "NO_IMAGE_SELECTED",
            FailureReason::PostFailed => "POST_FAILED",
        }
    }

    /// User-facing explanation shown in the status dialog.
    pub fn message(&self) -> &'static str {
        match self {
            FailureReason::NoImageSelected => "Please select at least one image for your collage.",
            FailureReason::PostFailed => "Your collage could not be saved. Please try again.",
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    InFlight,
    Succeeded(PostAck),
    Failed(FailureReason),
}

impl SubmissionState {
    pub fn name(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Validating => "validating",
            SubmissionState::InFlight => "in_flight",
            SubmissionState::Succeeded(_) => "succeeded",
            SubmissionState::Failed(_) => "failed",
        }
    }

    /// `Succeeded` or `Failed`: waiting for the user to acknowledge.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionState::Succeeded(_) | SubmissionState::Failed(_)
        )
    }

    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            SubmissionState::Failed(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// Result of [`SubmissionController::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the post task was spawned.
    Started,
    /// Rejected before any post was started.
    Rejected(FailureReason),
    /// Not in `Idle`; nothing happened.
    Ignored,
}

/// Result of waiting on (or polling) the outstanding post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// No post is outstanding.
    NothingPending,
    /// The post has not finished yet; the machine stays `InFlight`.
    Pending,
    Succeeded(PostAck),
    Failed(FailureReason),
}

/// Result of [`SubmissionController::acknowledge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acknowledgement {
    /// Not in a terminal state; nothing happened.
    Ignored,
    /// A failure notice was dismissed. The draft must stay as it is.
    Dismissed(FailureReason),
    /// A success notice was dismissed. The owner must reset the draft and navigate away.
    Completed(PostAck),
}

type PostHandle = JoinHandle<Result<PostAck, PostError>>;

/// Owns the submission state and the single outstanding post.
///
/// Reads the draft but never mutates it: the reset after an acknowledged
/// success is reported through [`Acknowledgement::Completed`] and applied by
/// the owner.
#[derive(Debug, Default)]
pub struct SubmissionController {
    state: SubmissionState,
    pending: Option<PostHandle>,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.state, SubmissionState::InFlight)
    }

    /// Validate `draft` and, if it has an image, hand a snapshot to `sink`.
    ///
    /// The snapshot is taken before the sink is called, so later draft edits
    /// cannot change what gets posted. The sink is called inside the spawned
    /// task, so a sink that panics while building its future still settles
    /// as `PostFailed`. Must run inside a Tokio runtime;
    /// outside one the submission fails with `PostFailed` and the sink is
    /// never called.
    pub fn submit(&mut self, draft: &CollageDraft, sink: Arc<dyn PostSink>) -> SubmitOutcome {
        if self.state != SubmissionState::Idle {
            debug!(
                event = "core.submission.submit_ignored",
                state = self.state.name()
            );
            return SubmitOutcome::Ignored;
        }

        self.state = SubmissionState::Validating;
        debug!(event = "core.submission.validation_started");

        if !draft.slots().has_any_selection() {
            return self.reject(FailureReason::NoImageSelected);
        }

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                error!(
                    event = "core.submission.runtime_unavailable",
                    error = %CollageError::NoAsyncRuntime,
                    detail = %e
                );
                return self.reject(FailureReason::PostFailed);
            }
        };

        let post = draft.to_post();
        info!(
            event = "core.submission.post_started",
            filled_slots = draft.slots().filled_count(),
            story_len = post.story.len()
        );

        self.state = SubmissionState::InFlight;
        self.pending = Some(runtime.spawn(async move { sink.post(post).await }));

        SubmitOutcome::Started
    }

    /// Wait for the outstanding post, however long it takes.
    pub async fn settle(&mut self) -> Settlement {
        let Some(handle) = self.pending.as_mut() else {
            return Settlement::NothingPending;
        };
        let joined = handle.await;
        self.finish(joined)
    }

    /// Wait at most `timeout` for the outstanding post.
    ///
    /// On expiry the post keeps running and the state stays `InFlight`.
    pub async fn settle_within(&mut self, timeout: Duration) -> Settlement {
        let Some(handle) = self.pending.as_mut() else {
            return Settlement::NothingPending;
        };
        match tokio::time::timeout(timeout, handle).await {
            Ok(joined) => self.finish(joined),
            Err(_) => {
                warn!(
                    event = "core.submission.settle_timed_out",
                    timeout_ms = timeout.as_millis() as u64
                );
                Settlement::Pending
            }
        }
    }

    /// Check the outstanding post without waiting.
    pub fn poll_settle(&mut self) -> Settlement {
        let Some(handle) = self.pending.as_mut() else {
            return Settlement::NothingPending;
        };
        match handle.now_or_never() {
            Some(joined) => self.finish(joined),
            None => Settlement::Pending,
        }
    }

    /// Dismiss the terminal state and return to `Idle`.
    pub fn acknowledge(&mut self) -> Acknowledgement {
        let acknowledgement = match &self.state {
            SubmissionState::Succeeded(ack) => Acknowledgement::Completed(ack.clone()),
            SubmissionState::Failed(reason) => Acknowledgement::Dismissed(*reason),
            other => {
                debug!(
                    event = "core.submission.acknowledge_ignored",
                    state = other.name()
                );
                return Acknowledgement::Ignored;
            }
        };

        self.state = SubmissionState::Idle;
        info!(
            event = "core.submission.acknowledged",
            success = matches!(acknowledgement, Acknowledgement::Completed(_))
        );
        acknowledgement
    }

    fn reject(&mut self, reason: FailureReason) -> SubmitOutcome {
        warn!(
            event = "core.submission.rejected",
            reason = reason.error_code()
        );
        self.state = SubmissionState::Failed(reason);
        SubmitOutcome::Rejected(reason)
    }

    fn finish(&mut self, joined: Result<Result<PostAck, PostError>, JoinError>) -> Settlement {
        self.pending = None;

        match joined {
            Ok(Ok(ack)) => {
                info!(
                    event = "core.submission.post_succeeded",
                    post_id = %ack.post_id
                );
                self.state = SubmissionState::Succeeded(ack.clone());
                Settlement::Succeeded(ack)
            }
            Ok(Err(e)) => {
                warn!(event = "core.submission.post_failed", error = %e);
                self.state = SubmissionState::Failed(FailureReason::PostFailed);
                Settlement::Failed(FailureReason::PostFailed)
            }
            Err(e) => {
                error!(event = "core.submission.post_task_failed", error = %e);
                self.state = SubmissionState::Failed(FailureReason::PostFailed);
                Settlement::Failed(FailureReason::PostFailed)
            }
        }
    }
}
