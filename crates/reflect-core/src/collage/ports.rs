//! Boundary traits the collage core consumes.

use futures::future::BoxFuture;

use crate::errors::ReflectError;
use crate::screens::Screen;

use super::types::{CollagePost, PostAck};

/// Future returned by [`PostSink::post`].
pub type PostFuture = BoxFuture<'static, Result<PostAck, PostError>>;

/// External operation that publishes a completed collage.
///
/// Called exactly once per accepted submission, with a snapshot taken at
/// validation time. The returned future is spawned and always runs to
/// completion.
pub trait PostSink: Send + Sync {
    fn post(&self, post: CollagePost) -> PostFuture;
}

/// Receives navigation requests for the surrounding router.
pub trait NavigationSink: Send + Sync {
    fn navigate(&self, destination: Screen);
}

/// Failure reported by a post sink.
///
/// Only logged: the submission state machine maps every sink failure to
/// `FailureReason::PostFailed` without carrying this detail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Post failed: {message}")]
pub struct PostError {
    pub message: String,
}

impl PostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl ReflectError for PostError {
    fn error_code(&self) -> &'static str {
        "POST_FAILED"
    }
}
