//! Recording doubles for the collage ports.

use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use crate::screens::Screen;

use super::ports::{NavigationSink, PostError, PostFuture, PostSink};
use super::types::{CollagePost, PostAck};

enum Behavior {
    Resolve,
    Fail(String),
    Panic,
    PanicOnCall,
    Gated,
}

/// Post sink that records every call and settles as configured.
pub(crate) struct TestSink {
    posts: Mutex<Vec<CollagePost>>,
    behavior: Behavior,
    gate: Arc<Notify>,
}

impl TestSink {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            behavior,
            gate: Arc::new(Notify::new()),
        }
    }

    pub(crate) fn resolving() -> Self {
        Self::with_behavior(Behavior::Resolve)
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self::with_behavior(Behavior::Fail(message.to_string()))
    }

    pub(crate) fn panicking() -> Self {
        Self::with_behavior(Behavior::Panic)
    }

    /// Panics in `post()` itself, before any future exists.
    pub(crate) fn panicking_on_call() -> Self {
        Self::with_behavior(Behavior::PanicOnCall)
    }

    /// Posts stay pending until [`TestSink::release`] is called.
    pub(crate) fn gated() -> Self {
        Self::with_behavior(Behavior::Gated)
    }

    pub(crate) fn release(&self) {
        self.gate.notify_one();
    }

    pub(crate) fn call_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    pub(crate) fn posts(&self) -> Vec<CollagePost> {
        self.posts.lock().unwrap().clone()
    }
}

async fn explode() -> Result<PostAck, PostError> {
    panic!("post sink exploded")
}

impl PostSink for TestSink {
    fn post(&self, post: CollagePost) -> PostFuture {
        self.posts.lock().unwrap().push(post);

        match &self.behavior {
            Behavior::Resolve => Box::pin(async { Ok(PostAck::new()) }),
            Behavior::Fail(message) => {
                let message = message.clone();
                Box::pin(async move { Err(PostError::new(message)) })
            }
            Behavior::Panic => Box::pin(explode()),
            Behavior::PanicOnCall => panic!("post sink refused to build a future"),
            Behavior::Gated => {
                let gate = self.gate.clone();
                Box::pin(async move {
                    gate.notified().await;
                    Ok(PostAck::new())
                })
            }
        }
    }
}

/// Navigation sink that remembers every destination.
#[derive(Default)]
pub(crate) struct RecordingNavigator {
    destinations: Mutex<Vec<Screen>>,
}

impl RecordingNavigator {
    pub(crate) fn destinations(&self) -> Vec<Screen> {
        self.destinations.lock().unwrap().clone()
    }
}

impl NavigationSink for RecordingNavigator {
    fn navigate(&self, destination: Screen) {
        self.destinations.lock().unwrap().push(destination);
    }
}
